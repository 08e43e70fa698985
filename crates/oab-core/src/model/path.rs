use indexmap::IndexMap;
use serde::Serialize;

use super::operation::Operation;
use crate::builder::OperationBuilder;

/// The HTTP methods the path table can register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HttpMethod {
    Get,
    Put,
    Post,
    Delete,
    Patch,
    Head,
    Options,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "get",
            HttpMethod::Put => "put",
            HttpMethod::Post => "post",
            HttpMethod::Delete => "delete",
            HttpMethod::Patch => "patch",
            HttpMethod::Head => "head",
            HttpMethod::Options => "options",
        }
    }
}

/// Maps URL path templates to the operations registered on them, in
/// declaration order.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct PathTable {
    pub paths: IndexMap<String, IndexMap<HttpMethod, Operation>>,
}

impl PathTable {
    pub fn get(&mut self, path: &str, configure: impl FnOnce(&mut OperationBuilder)) {
        self.register(HttpMethod::Get, path, configure);
    }

    pub fn put(&mut self, path: &str, configure: impl FnOnce(&mut OperationBuilder)) {
        self.register(HttpMethod::Put, path, configure);
    }

    pub fn post(&mut self, path: &str, configure: impl FnOnce(&mut OperationBuilder)) {
        self.register(HttpMethod::Post, path, configure);
    }

    pub fn delete(&mut self, path: &str, configure: impl FnOnce(&mut OperationBuilder)) {
        self.register(HttpMethod::Delete, path, configure);
    }

    pub fn patch(&mut self, path: &str, configure: impl FnOnce(&mut OperationBuilder)) {
        self.register(HttpMethod::Patch, path, configure);
    }

    pub fn head(&mut self, path: &str, configure: impl FnOnce(&mut OperationBuilder)) {
        self.register(HttpMethod::Head, path, configure);
    }

    pub fn options(&mut self, path: &str, configure: impl FnOnce(&mut OperationBuilder)) {
        self.register(HttpMethod::Options, path, configure);
    }

    /// Register `method` on `path`. A new path gets a fresh method table
    /// containing only this verb; an existing path has only this verb's
    /// entry replaced, leaving sibling verbs untouched.
    pub fn register(
        &mut self,
        method: HttpMethod,
        path: &str,
        configure: impl FnOnce(&mut OperationBuilder),
    ) {
        let mut builder = OperationBuilder::default();
        configure(&mut builder);
        self.paths
            .entry(path.to_string())
            .or_default()
            .insert(method, builder.build());
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Iterate every registered operation in declaration order.
    pub fn operations(&self) -> impl Iterator<Item = (&str, HttpMethod, &Operation)> {
        self.paths.iter().flat_map(|(path, methods)| {
            methods
                .iter()
                .map(move |(method, op)| (path.as_str(), *method, op))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sibling_verbs_are_preserved() {
        let mut table = PathTable::default();
        table.get("/x", |op| {
            op.operation_id("getX");
        });
        table.post("/x", |op| {
            op.operation_id("postX");
        });

        let methods = &table.paths["/x"];
        assert_eq!(methods.len(), 2);
        assert_eq!(methods[&HttpMethod::Get].operation_id.as_deref(), Some("getX"));
        assert_eq!(methods[&HttpMethod::Post].operation_id.as_deref(), Some("postX"));
    }

    #[test]
    fn registering_the_same_verb_replaces_the_operation() {
        let mut table = PathTable::default();
        table.get("/x", |op| {
            op.operation_id("first");
        });
        table.get("/x", |op| {
            op.operation_id("second");
        });

        let methods = &table.paths["/x"];
        assert_eq!(methods.len(), 1);
        assert_eq!(
            methods[&HttpMethod::Get].operation_id.as_deref(),
            Some("second")
        );
    }

    #[test]
    fn verbs_serialize_lowercase() {
        let mut table = PathTable::default();
        table.delete("/y", |_| {});
        let value = serde_json::to_value(&table).unwrap();
        assert!(value["/y"].get("delete").is_some());
        assert_eq!(HttpMethod::Delete.as_str(), "delete");
    }

    #[test]
    fn operations_walk_declaration_order() {
        let mut table = PathTable::default();
        table.get("/b", |_| {});
        table.get("/a", |_| {});
        table.post("/b", |_| {});

        let walked: Vec<(String, HttpMethod)> = table
            .operations()
            .map(|(path, method, _)| (path.to_string(), method))
            .collect();
        assert_eq!(
            walked,
            vec![
                ("/b".to_string(), HttpMethod::Get),
                ("/b".to_string(), HttpMethod::Post),
                ("/a".to_string(), HttpMethod::Get),
            ]
        );
    }
}
