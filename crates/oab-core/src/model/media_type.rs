use schemars::JsonSchema;
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::json;

use crate::schema::SchemaSource;

/// Associates a media-type string with a type-derived schema.
///
/// The binding never inlines the schema body, not even for the first
/// occurrence; it serializes as a `$ref` pointer and leaves
/// materialization to the component registry.
#[derive(Debug, Clone)]
pub struct MediaTypeBinding {
    media_type: String,
    source: SchemaSource,
}

impl MediaTypeBinding {
    pub fn new<T: JsonSchema + 'static>(media_type: &str) -> Self {
        Self {
            media_type: media_type.to_string(),
            source: SchemaSource::of::<T>(),
        }
    }

    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    pub fn source(&self) -> &SchemaSource {
        &self.source
    }

    /// The `$ref` pointer this binding serializes to.
    pub fn reference(&self) -> String {
        self.source.reference()
    }
}

impl Serialize for MediaTypeBinding {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry("schema", &json!({ "$ref": self.reference() }))?;
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(JsonSchema)]
    struct Pet;

    #[test]
    fn serializes_as_a_ref_pointer_only() {
        let binding = MediaTypeBinding::new::<Pet>("application/json");
        let value = serde_json::to_value(&binding).unwrap();
        assert_eq!(
            value,
            json!({ "schema": { "$ref": "#/components/schemas/Pet" } })
        );
    }

    #[test]
    fn keeps_the_media_type_string() {
        let binding = MediaTypeBinding::new::<Pet>("text/plain");
        assert_eq!(binding.media_type(), "text/plain");
        assert_eq!(binding.source().name(), "Pet");
    }
}
