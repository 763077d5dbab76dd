use rust_decimal::Decimal;

use shopfront_api::config::ApiConfig;
use shopfront_catalog::{Catalog, CatalogService, CategoryCandidate, ProductCandidate};
use shopfront_client::{CatalogClient, ClientError};

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        let service = CatalogService::new(Catalog::seed().unwrap());
        let app = shopfront_api::app::build_app(&ApiConfig::default(), service);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let base_url = format!("http://{}", listener.local_addr().unwrap());

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn candidate() -> ProductCandidate {
    ProductCandidate {
        id: 10,
        name: Some("French Press".to_string()),
        price: Decimal::new(3299, 2),
        stock: 14,
        category: Some(CategoryCandidate {
            id: 3,
            name: Some("Kitchen".to_string()),
        }),
    }
}

#[tokio::test]
async fn lists_the_seed_catalog() {
    let srv = TestServer::spawn().await;
    let client = CatalogClient::new(&srv.base_url);

    let products = client.list_products().await.unwrap();
    assert_eq!(products, Catalog::seed().unwrap().products());
}

#[tokio::test]
async fn created_product_round_trips() {
    let srv = TestServer::spawn().await;
    let client = CatalogClient::new(&srv.base_url);

    let created = client.create_product(&candidate()).await.unwrap();
    assert_eq!(created.location.as_deref(), Some("/api/products/10"));
    assert_eq!(ProductCandidate::from(&created.product), candidate());

    // Echo only: the list is unchanged.
    assert_eq!(client.list_products().await.unwrap().len(), 5);
}

#[tokio::test]
async fn rejected_product_surfaces_messages() {
    let srv = TestServer::spawn().await;
    let client = CatalogClient::new(&srv.base_url);

    let bad = ProductCandidate {
        price: Decimal::ZERO,
        category: None,
        ..candidate()
    };

    match client.create_product(&bad).await {
        Err(ClientError::Validation(messages)) => assert_eq!(
            messages,
            vec!["Price must be greater than 0", "Category is required"]
        ),
        other => panic!("expected Validation error, got {other:?}"),
    }
}

#[tokio::test]
async fn unreachable_server_is_a_network_error() {
    let client = CatalogClient::new("http://127.0.0.1:1");
    assert!(matches!(
        client.list_products().await,
        Err(ClientError::Network(_))
    ));
}
