use indexmap::IndexMap;
use serde::Serialize;

use super::media_type::MediaTypeBinding;

/// A response definition: a description plus content keyed by media type.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Response {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,

    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub content: IndexMap<String, MediaTypeBinding>,
}
