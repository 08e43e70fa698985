use std::any::TypeId;

use heck::ToPascalCase;
use schemars::JsonSchema;
use serde_json::Value;

use crate::error::DocumentError;

/// A type-erased handle to a schema-bearing Rust type.
///
/// Captures everything the component registry needs to materialize the
/// schema later: the derived component name, the `TypeId` for identity
/// checks, and a monomorphized generator thunk. The schema body itself is
/// never stored here; bindings only carry the reference.
#[derive(Debug, Clone)]
pub struct SchemaSource {
    name: String,
    type_id: TypeId,
    generate: fn() -> schemars::Schema,
}

impl SchemaSource {
    pub fn of<T: JsonSchema + 'static>() -> Self {
        Self {
            name: sanitize_name(T::schema_name().as_ref()),
            type_id: TypeId::of::<T>(),
            generate: generate_schema::<T>,
        }
    }

    /// The component name derived from the type's short name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// The `$ref` pointer for this type's component entry.
    pub fn reference(&self) -> String {
        format!("#/components/schemas/{}", self.name)
    }

    /// Materialize the schema body.
    ///
    /// Pure over the type: extracting twice yields structurally equal
    /// results, which is what makes name-keyed de-duplication safe. The
    /// generator's own metadata (`$schema`, `$id`) is stripped, and any
    /// `$defs` entries are drained out for promotion to top-level
    /// components.
    pub fn extract(&self) -> Result<Extraction, DocumentError> {
        let mut body = serde_json::to_value((self.generate)())?;
        let mut defs = Vec::new();

        if let Some(obj) = body.as_object_mut() {
            obj.remove("$schema");
            obj.remove("$id");
            // schemars 1.x nests referenced types under "$defs" (Draft 2020-12)
            if let Some(Value::Object(nested)) = obj.remove("$defs") {
                for (def_name, mut def_schema) in nested {
                    rewrite_refs(&mut def_schema);
                    defs.push((def_name, def_schema));
                }
            }
        }
        rewrite_refs(&mut body);

        Ok(Extraction {
            name: self.name.clone(),
            body,
            defs,
        })
    }
}

/// The result of materializing one type's schema: the component name, the
/// schema body with generator metadata stripped, and any nested
/// definitions promoted out of `$defs`.
#[derive(Debug, Clone, PartialEq)]
pub struct Extraction {
    pub name: String,
    pub body: Value,
    pub defs: Vec<(String, Value)>,
}

fn generate_schema<T: JsonSchema>() -> schemars::Schema {
    schemars::schema_for!(T)
}

/// Rewrite `$ref` paths from the schemars format to the OpenAPI components
/// format: `#/$defs/X` becomes `#/components/schemas/X`.
fn rewrite_refs(value: &mut Value) {
    match value {
        Value::Object(obj) => {
            if let Some(Value::String(ref_str)) = obj.get_mut("$ref") {
                let rewritten = ref_str
                    .strip_prefix("#/$defs/")
                    .map(|name| format!("#/components/schemas/{name}"));
                if let Some(rewritten) = rewritten {
                    *ref_str = rewritten;
                }
            }
            for (_, v) in obj.iter_mut() {
                rewrite_refs(v);
            }
        }
        Value::Array(arr) => {
            for v in arr.iter_mut() {
                rewrite_refs(v);
            }
        }
        _ => {}
    }
}

/// Component keys in OpenAPI 3.0 are limited to `[A-Za-z0-9._-]`. The
/// short names schemars derives already comply for plain structs and for
/// generics ("Array_of_User"); anything else is folded to PascalCase.
fn sanitize_name(raw: &str) -> String {
    let compliant = !raw.is_empty()
        && raw
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'));
    if compliant {
        return raw.to_string();
    }

    let pascal = raw.to_pascal_case();
    if pascal.is_empty() {
        "Schema".to_string()
    } else {
        pascal
    }
}
