//! Nested configuration-block builders for assembling a [`Document`].
//!
//! Each builder exposes mutator methods and is handed to the caller's
//! configuration closure; the terminal build step returns the immutable
//! value. Builder calls are total: path templates, verb usage, and status
//! codes are taken as given, never validated.

use schemars::JsonSchema;

use crate::model::document::{Document, Info};
use crate::model::media_type::MediaTypeBinding;
use crate::model::operation::Operation;
use crate::model::path::PathTable;
use crate::model::request_body::RequestBody;
use crate::model::response::Response;

impl Document {
    /// Assemble a document through nested configuration blocks.
    ///
    /// ```
    /// use oab_core::Document;
    /// use schemars::JsonSchema;
    ///
    /// #[derive(JsonSchema)]
    /// struct User {
    ///     id: u64,
    /// }
    ///
    /// let doc = Document::build(|api| {
    ///     api.info(|info| {
    ///         info.title("Pet store").version("1.0.0");
    ///     });
    ///     api.paths(|paths| {
    ///         paths.get("/users", |op| {
    ///             op.operation_id("listUsers");
    ///             op.response("200", |r| {
    ///                 r.description("OK").json::<User>();
    ///             });
    ///         });
    ///     });
    /// });
    ///
    /// let value = doc.to_value().unwrap();
    /// assert!(value["components"]["schemas"].get("User").is_some());
    /// ```
    pub fn build(configure: impl FnOnce(&mut DocumentBuilder)) -> Document {
        let mut builder = DocumentBuilder::default();
        configure(&mut builder);
        Document {
            info: builder.info,
            paths: builder.paths,
        }
    }
}

/// Mutable state behind [`Document::build`].
#[derive(Default)]
pub struct DocumentBuilder {
    info: Info,
    paths: PathTable,
}

impl DocumentBuilder {
    /// Configure the `info` object.
    pub fn info(&mut self, configure: impl FnOnce(&mut InfoBuilder)) -> &mut Self {
        let mut builder = InfoBuilder {
            info: &mut self.info,
        };
        configure(&mut builder);
        self
    }

    /// Register paths and the operations on them.
    pub fn paths(&mut self, configure: impl FnOnce(&mut PathTable)) -> &mut Self {
        configure(&mut self.paths);
        self
    }
}

/// Builder for the `info` object.
pub struct InfoBuilder<'a> {
    info: &'a mut Info,
}

impl InfoBuilder<'_> {
    pub fn title(&mut self, title: &str) -> &mut Self {
        self.info.title = title.to_string();
        self
    }

    pub fn version(&mut self, version: &str) -> &mut Self {
        self.info.version = version.to_string();
        self
    }

    pub fn description(&mut self, description: &str) -> &mut Self {
        self.info.description = Some(description.to_string());
        self
    }
}

/// Builder for one operation on a path.
#[derive(Default)]
pub struct OperationBuilder {
    operation: Operation,
}

impl OperationBuilder {
    pub fn description(&mut self, description: &str) -> &mut Self {
        self.operation.description = Some(description.to_string());
        self
    }

    pub fn operation_id(&mut self, id: &str) -> &mut Self {
        self.operation.operation_id = Some(id.to_string());
        self
    }

    /// Create or replace the response registered under `code`.
    pub fn response(
        &mut self,
        code: &str,
        configure: impl FnOnce(&mut ResponseBuilder),
    ) -> &mut Self {
        let mut builder = ResponseBuilder::default();
        configure(&mut builder);
        self.operation
            .responses
            .insert(code.to_string(), builder.response);
        self
    }

    /// Set the request body. First write wins: when a request body is
    /// already present the call is silently ignored, so a configuration
    /// block can be re-entered without duplicating or resetting it.
    pub fn request_body(&mut self, configure: impl FnOnce(&mut RequestBodyBuilder)) -> &mut Self {
        if self.operation.request_body.is_some() {
            return self;
        }
        let mut builder = RequestBodyBuilder::default();
        configure(&mut builder);
        self.operation.request_body = Some(builder.body);
        self
    }

    pub(crate) fn build(self) -> Operation {
        self.operation
    }
}

/// Builder for a response.
#[derive(Default)]
pub struct ResponseBuilder {
    response: Response,
}

impl ResponseBuilder {
    pub fn description(&mut self, description: &str) -> &mut Self {
        self.response.description = description.to_string();
        self
    }

    /// Bind `T`'s schema under `media_type`. Re-binding the same media
    /// type replaces the prior binding.
    pub fn content<T: JsonSchema + 'static>(&mut self, media_type: &str) -> &mut Self {
        self.response
            .content
            .insert(media_type.to_string(), MediaTypeBinding::new::<T>(media_type));
        self
    }

    /// Shorthand for `content::<T>("application/json")`.
    pub fn json<T: JsonSchema + 'static>(&mut self) -> &mut Self {
        self.content::<T>("application/json")
    }
}

/// Builder for a request body.
#[derive(Default)]
pub struct RequestBodyBuilder {
    body: RequestBody,
}

impl RequestBodyBuilder {
    pub fn description(&mut self, description: &str) -> &mut Self {
        self.body.description = Some(description.to_string());
        self
    }

    /// Bind `T`'s schema under `media_type`. Re-binding the same media
    /// type replaces the prior binding.
    pub fn content<T: JsonSchema + 'static>(&mut self, media_type: &str) -> &mut Self {
        self.body
            .content
            .insert(media_type.to_string(), MediaTypeBinding::new::<T>(media_type));
        self
    }

    /// Shorthand for `content::<T>("application/json")`.
    pub fn json<T: JsonSchema + 'static>(&mut self) -> &mut Self {
        self.content::<T>("application/json")
    }
}
