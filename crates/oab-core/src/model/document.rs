use std::io::Write;

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;
use tempfile::NamedTempFile;

use super::path::PathTable;
use crate::components;
use crate::error::DocumentError;

/// The OpenAPI version every document declares.
pub const OPENAPI_VERSION: &str = "3.0.0";

/// API metadata for the `info` object.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Info {
    pub title: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub version: String,
}

/// Top-level OpenAPI 3.0 document: metadata plus the path table.
///
/// The `components` section is never stored. It is recomputed from the
/// path table on every serialization, so it always reflects the current
/// set of media-type bindings.
#[derive(Debug, Clone, Default)]
pub struct Document {
    pub info: Info,
    pub paths: PathTable,
}

#[derive(Serialize)]
struct DocumentRepr<'a> {
    openapi: &'static str,
    info: &'a Info,
    paths: &'a PathTable,
    #[serde(skip_serializing_if = "Option::is_none")]
    components: Option<Components>,
}

#[derive(Serialize)]
struct Components {
    schemas: IndexMap<String, Value>,
}

impl Document {
    /// Serialize to a JSON tree, computing `components.schemas` fresh.
    ///
    /// Absent or empty fields are omitted entirely rather than emitted as
    /// null: an operation with no request body has no `requestBody` key,
    /// and a document with no bindings has no `components` key.
    pub fn to_value(&self) -> Result<Value, DocumentError> {
        let schemas = components::compute_components(self)?;
        let repr = DocumentRepr {
            openapi: OPENAPI_VERSION,
            info: &self.info,
            paths: &self.paths,
            components: if schemas.is_empty() {
                None
            } else {
                Some(Components { schemas })
            },
        };
        Ok(serde_json::to_value(repr)?)
    }

    pub fn to_json(&self) -> Result<String, DocumentError> {
        Ok(serde_json::to_string(&self.to_value()?)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, DocumentError> {
        Ok(serde_json::to_string_pretty(&self.to_value()?)?)
    }

    pub fn to_yaml(&self) -> Result<String, DocumentError> {
        Ok(serde_yaml_ng::to_string(&self.to_value()?)?)
    }

    /// Write the JSON document to a newly created temporary file.
    ///
    /// The handle is returned to the caller, who decides whether to keep
    /// the file or let it be removed on drop.
    pub fn write_temp(&self) -> Result<NamedTempFile, DocumentError> {
        let mut file = NamedTempFile::new()?;
        file.write_all(self.to_json()?.as_bytes())?;
        file.flush()?;
        Ok(file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_has_no_components_key() {
        let doc = Document::build(|api| {
            api.info(|info| {
                info.title("Test API").version("0.1.0");
            });
        });
        let value = doc.to_value().unwrap();
        assert_eq!(value["openapi"], OPENAPI_VERSION);
        assert_eq!(value["info"]["title"], "Test API");
        assert_eq!(value["info"]["version"], "0.1.0");
        assert!(value.get("components").is_none());
        assert!(value["paths"].as_object().unwrap().is_empty());
    }

    #[test]
    fn info_description_is_omitted_when_absent() {
        let doc = Document::build(|api| {
            api.info(|info| {
                info.title("Test API").version("0.1.0");
            });
        });
        let value = doc.to_value().unwrap();
        assert!(value["info"].get("description").is_none());
    }

    #[test]
    fn operation_without_request_body_omits_the_key() {
        let doc = Document::build(|api| {
            api.paths(|paths| {
                paths.get("/ping", |op| {
                    op.response("204", |r| {
                        r.description("no content");
                    });
                });
            });
        });
        let value = doc.to_value().unwrap();
        let op = &value["paths"]["/ping"]["get"];
        assert!(op.get("requestBody").is_none());
        // A response with no bindings likewise has no content key
        assert!(op["responses"]["204"].get("content").is_none());
        assert_eq!(op["responses"]["204"]["description"], "no content");
    }

    #[test]
    fn yaml_and_pretty_json_render() {
        let doc = Document::build(|api| {
            api.info(|info| {
                info.title("Test API").version("0.1.0");
            });
        });
        assert!(doc.to_yaml().unwrap().contains("openapi: 3.0.0"));
        assert!(doc.to_json_pretty().unwrap().contains("\"openapi\": \"3.0.0\""));
    }
}
