//! Programmatic OpenAPI 3.0 document builder.
//!
//! Callers declare paths, operations, request and response bodies, and
//! status codes through nested configuration blocks. Any type bound to a
//! media type must implement [`schemars::JsonSchema`]; its derived schema
//! is extracted once into the shared `components.schemas` registry and
//! every occurrence in the document serializes as a `$ref` pointer.

pub mod builder;
pub mod components;
pub mod error;
pub mod model;
pub mod schema;

pub use builder::{
    DocumentBuilder, InfoBuilder, OperationBuilder, RequestBodyBuilder, ResponseBuilder,
};
pub use components::compute_components;
pub use error::DocumentError;
pub use model::document::{Document, Info, OPENAPI_VERSION};
pub use model::media_type::MediaTypeBinding;
pub use model::operation::Operation;
pub use model::path::{HttpMethod, PathTable};
pub use model::request_body::RequestBody;
pub use model::response::Response;
pub use schema::{Extraction, SchemaSource};
