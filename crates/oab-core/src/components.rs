use std::any::TypeId;
use std::collections::HashMap;

use indexmap::IndexMap;
use serde_json::Value;

use crate::error::DocumentError;
use crate::model::document::Document;
use crate::schema::SchemaSource;

/// Assemble the `components.schemas` section by scanning every media-type
/// binding in the document.
///
/// Two passes in declaration order: response bindings first, then
/// request-body bindings, so a request schema whose derived name matches
/// a response schema wins. Within a pass, a later binding with an
/// already-present name overwrites the earlier entry; names are not
/// namespaced, so two distinct types sharing a short name collide
/// silently (logged, not rejected).
pub fn compute_components(document: &Document) -> Result<IndexMap<String, Value>, DocumentError> {
    let mut collector = Collector::default();

    for (_path, _method, op) in document.paths.operations() {
        for response in op.responses.values() {
            for binding in response.content.values() {
                collector.add(binding.source())?;
            }
        }
    }

    for (_path, _method, op) in document.paths.operations() {
        if let Some(ref body) = op.request_body {
            for binding in body.content.values() {
                collector.add(binding.source())?;
            }
        }
    }

    Ok(collector.finish())
}

#[derive(Default)]
struct Collector {
    schemas: IndexMap<String, Value>,
    promoted: Vec<(String, Value)>,
    origins: HashMap<String, TypeId>,
}

impl Collector {
    fn add(&mut self, source: &SchemaSource) -> Result<(), DocumentError> {
        let extraction = source.extract()?;
        if let Some(prev) = self
            .origins
            .insert(extraction.name.clone(), source.type_id())
        {
            if prev != source.type_id() {
                log::warn!(
                    "schema name {:?} is derived by two distinct types; keeping the later one",
                    extraction.name
                );
            }
        }
        self.schemas.insert(extraction.name, extraction.body);
        self.promoted.extend(extraction.defs);
        Ok(())
    }

    fn finish(mut self) -> IndexMap<String, Value> {
        // Definitions promoted out of `$defs` must not clobber schemas a
        // binding references directly.
        for (name, schema) in self.promoted {
            self.schemas.entry(name).or_insert(schema);
        }
        log::debug!("components: collected {} schema(s)", self.schemas.len());
        self.schemas
    }
}
