use indexmap::IndexMap;
use serde::Serialize;

use super::media_type::MediaTypeBinding;

/// A request body: an optional description with the media-type entries as
/// its direct siblings rather than nested under a `content` key.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RequestBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(flatten)]
    pub content: IndexMap<String, MediaTypeBinding>,
}
