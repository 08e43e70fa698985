use thiserror::Error;

/// Errors surfaced while serializing or writing a document.
///
/// Schema generation itself cannot fail at runtime: a type can only be
/// bound to a media type if it implements `schemars::JsonSchema`, so the
/// residual failure modes are all serialization and IO.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("failed to serialize document as JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to serialize document as YAML: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    #[error("failed to write document: {0}")]
    Io(#[from] std::io::Error),
}
