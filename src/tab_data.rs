/// Data structures for Tab Categorizer
use crate::categorizer::{Category, Classification};
use serde::{Deserialize, Serialize};

/// One recorded, categorized URL
///
/// Serialized as `{"id": number, "keyword": string, "category": string}`,
/// which is the shape stored under the `"tabs"` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabEntry {
    pub id: u64,
    pub keyword: String,
    pub category: Category,
}

impl TabEntry {
    pub fn new(id: u64, classification: Classification) -> TabEntry {
        TabEntry {
            id,
            keyword: classification.keyword.to_string(),
            category: classification.category,
        }
    }
}
