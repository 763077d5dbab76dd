use serde::{Deserialize, Serialize};

use shopfront_core::{CategoryId, DomainError, Validate};

use crate::candidate::CategoryCandidate;

/// A product category, always embedded in its product.
///
/// There is no category store: each `Product` owns its own copy.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "CategoryCandidate")]
pub struct Category {
    id: CategoryId,
    name: String,
}

impl Category {
    /// Build a category, running the category rule table.
    pub fn new(id: i32, name: impl Into<String>) -> Result<Self, DomainError> {
        Self::try_from(CategoryCandidate {
            id,
            name: Some(name.into()),
        })
    }

    pub fn id(&self) -> CategoryId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl TryFrom<CategoryCandidate> for Category {
    type Error = DomainError;

    fn try_from(candidate: CategoryCandidate) -> Result<Self, Self::Error> {
        candidate
            .validate()
            .into_result()
            .map_err(DomainError::validation)?;

        match candidate.name {
            Some(name) => Ok(Self {
                id: CategoryId::new_positive(candidate.id)?,
                name,
            }),
            None => Err(DomainError::invariant("category name missing after validation")),
        }
    }
}
