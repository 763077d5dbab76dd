//! Request decoding.
//!
//! Field names are matched case-insensitively at every nesting level: `Name`,
//! `name` and `NAME` all land on `name`. Keys are folded onto the contract's
//! field names before the typed decode, so unknown keys pass through untouched
//! (and are then ignored).
//!
//! Only a JSON object is a product. Any other top-level value, and a
//! `category` that is neither an object nor `null`, is rejected before the
//! typed decode; serde would otherwise accept positional arrays.

use serde_json::{Map, Value};
use thiserror::Error;

use shopfront_catalog::ProductCandidate;

const PRODUCT_FIELDS: &[&str] = &["id", "name", "price", "stock", "category"];
const CATEGORY_FIELDS: &[&str] = &["id", "name"];

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("{0} must be a JSON object")]
    NotAnObject(&'static str),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Decode a create-product request body.
pub fn decode_candidate(body: &[u8]) -> Result<ProductCandidate, DecodeError> {
    let Value::Object(mut map) = serde_json::from_slice(body)? else {
        return Err(DecodeError::NotAnObject("product"));
    };

    fold_keys(&mut map, PRODUCT_FIELDS);
    match map.get_mut("category") {
        Some(Value::Object(category)) => fold_keys(category, CATEGORY_FIELDS),
        None | Some(Value::Null) => {}
        Some(_) => return Err(DecodeError::NotAnObject("category")),
    }

    Ok(serde_json::from_value(Value::Object(map))?)
}

fn fold_keys(map: &mut Map<String, Value>, fields: &[&str]) {
    let entries = std::mem::take(map);
    for (key, value) in entries {
        let canonical = fields
            .iter()
            .find(|field| field.eq_ignore_ascii_case(&key))
            .map_or(key, |field| field.to_string());
        map.insert(canonical, value);
    }
}

/// True for `application/json` and `application/*+json`, parameters ignored.
pub fn is_json_content_type(value: &str) -> bool {
    let essence = value.split(';').next().unwrap_or_default().trim();
    match essence.split_once('/') {
        Some((kind, subtype)) => {
            kind.eq_ignore_ascii_case("application")
                && (subtype.eq_ignore_ascii_case("json")
                    || subtype.to_ascii_lowercase().ends_with("+json"))
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use rust_decimal::Decimal;
    use shopfront_catalog::{Category, Product};

    use super::*;

    #[test]
    fn decodes_any_key_casing() {
        let body = br#"{"ID":7,"Name":"Tea Pot","PRICE":12.5,"sToCk":3,"Category":{"Id":3,"NAME":"Kitchen"}}"#;
        let candidate = decode_candidate(body).unwrap();

        assert_eq!(candidate.id, 7);
        assert_eq!(candidate.name.as_deref(), Some("Tea Pot"));
        assert_eq!(candidate.price, Decimal::new(125, 1));
        assert_eq!(candidate.stock, 3);
        let category = candidate.category.unwrap();
        assert_eq!(category.id, 3);
        assert_eq!(category.name.as_deref(), Some("Kitchen"));
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let candidate = decode_candidate(br#"{"id":1,"colour":"red"}"#).unwrap();
        assert_eq!(candidate.id, 1);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(decode_candidate(b"{not json").is_err());
        assert!(decode_candidate(b"").is_err());
        assert!(decode_candidate(br#"{"id":"one"}"#).is_err());
    }

    #[test]
    fn only_objects_are_products() {
        for body in [&b"[]"[..], br#"[7,"Pen",1.5,3,[1,"Office"]]"#, b"42", b"null"] {
            assert!(
                matches!(decode_candidate(body), Err(DecodeError::NotAnObject("product"))),
                "{}",
                String::from_utf8_lossy(body)
            );
        }
    }

    #[test]
    fn category_must_be_an_object_or_null() {
        let err = decode_candidate(br#"{"id":7,"Category":[1,"Office"]}"#).unwrap_err();
        assert!(matches!(err, DecodeError::NotAnObject("category")));
        assert!(decode_candidate(br#"{"id":7,"category":5}"#).is_err());
        assert!(decode_candidate(br#"{"id":7,"category":null}"#)
            .unwrap()
            .category
            .is_none());
    }

    #[test]
    fn shouted_serialization_decodes_to_an_equal_product() {
        fn shout(value: Value) -> Value {
            match value {
                Value::Object(map) => Value::Object(
                    map.into_iter()
                        .map(|(k, v)| (k.to_ascii_uppercase(), shout(v)))
                        .collect(),
                ),
                other => other,
            }
        }

        let category = Category::new(2, "Furniture").unwrap();
        let price = Decimal::from_str("12345678901234567.89").unwrap();
        let product = Product::new(11, "Oak Bookshelf", price, 6, category).unwrap();

        let body = shout(serde_json::to_value(&product).unwrap()).to_string();
        let candidate = decode_candidate(body.as_bytes()).unwrap();
        assert_eq!(Product::try_from(candidate).unwrap(), product);
    }

    #[test]
    fn json_content_types() {
        assert!(is_json_content_type("application/json"));
        assert!(is_json_content_type("application/json; charset=utf-8"));
        assert!(is_json_content_type("Application/Problem+JSON"));
        assert!(!is_json_content_type("text/plain"));
        assert!(!is_json_content_type("json"));
    }
}
