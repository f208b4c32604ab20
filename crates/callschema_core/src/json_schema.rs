//! Bridge from JSON Schema documents to [`TypeDescriptor`]s.
//!
//! Types that already derive [`schemars::JsonSchema`] can implement
//! [`DescribeType`](crate::DescribeType) in one line:
//!
//! ```
//! use callschema_core::{DescribeType, TypeDescriptor, json_schema::describe_json_schema};
//!
//! #[derive(schemars::JsonSchema)]
//! #[serde(untagged)]
//! enum Target {
//!     Id(u64),
//!     Name(String),
//! }
//!
//! impl DescribeType for Target {
//!     fn describe() -> TypeDescriptor {
//!         describe_json_schema::<Self>()
//!     }
//! }
//! ```

use schemars::{JsonSchema, SchemaGenerator};
use serde_json::{Map, Value};

use crate::descriptor::TypeDescriptor;

/// Nesting depth after which `$ref` chains are no longer followed.
const MAX_REF_DEPTH: usize = 32;

/// Describes `T` by generating its JSON Schema with `schemars` and reading
/// the result back as a descriptor.
pub fn describe_json_schema<T: JsonSchema + ?Sized>() -> TypeDescriptor {
    let mut generator = SchemaGenerator::default();
    let schema = T::json_schema(&mut generator);
    let reader = SchemaReader {
        definitions: generator.definitions(),
    };
    match reader.read(schema.as_value(), &mut Vec::new()) {
        TypeDescriptor::Opaque(title) if title == "object" => {
            TypeDescriptor::Opaque(T::schema_name().into_owned())
        }
        described => described,
    }
}

/// Reads a JSON Schema document as a descriptor.
///
/// `$ref`s are resolved against the document's own `$defs` (or
/// `definitions`) section; unresolvable references become
/// [`TypeDescriptor::Opaque`]. A reference back into a definition that is
/// already being expanded also reads as [`TypeDescriptor::Opaque`], so
/// recursive types are expanded once.
#[must_use]
pub fn descriptor_from_json_schema(schema: &Value) -> TypeDescriptor {
    let empty = Map::new();
    let definitions = schema
        .get("$defs")
        .or_else(|| schema.get("definitions"))
        .and_then(Value::as_object)
        .unwrap_or(&empty);
    SchemaReader { definitions }.read(schema, &mut Vec::new())
}

struct SchemaReader<'a> {
    definitions: &'a Map<String, Value>,
}

/// Definition names currently being expanded, outermost first.
type RefStack<'a> = Vec<&'a str>;

impl<'a> SchemaReader<'a> {
    fn read(&self, schema: &Value, expanding: &mut RefStack<'a>) -> TypeDescriptor {
        let obj = match schema {
            Value::Object(obj) => obj,
            Value::Bool(true) => return TypeDescriptor::Unknown,
            other => {
                tracing::warn!(schema = %other, "Unsupported JSON schema node, treating as unknown");
                return TypeDescriptor::Unknown;
            }
        };

        if let Some(reference) = obj.get("$ref").and_then(Value::as_str) {
            return self.read_ref(reference, expanding);
        }

        for key in ["anyOf", "oneOf"] {
            if let Some(Value::Array(members)) = obj.get(key) {
                return TypeDescriptor::union(members.iter().map(|m| self.read(m, expanding)));
            }
        }

        match obj.get("type") {
            Some(Value::String(ty)) => self.read_typed(ty, obj, expanding),
            Some(Value::Array(types)) => TypeDescriptor::union(
                types
                    .iter()
                    .filter_map(Value::as_str)
                    .map(|ty| self.read_typed(ty, obj, expanding)),
            ),
            Some(other) => {
                tracing::warn!(schema_type = %other, "Invalid JSON schema type, treating as unknown");
                TypeDescriptor::Unknown
            }
            None => TypeDescriptor::Unknown,
        }
    }

    fn read_typed(
        &self,
        ty: &str,
        obj: &Map<String, Value>,
        expanding: &mut RefStack<'a>,
    ) -> TypeDescriptor {
        match ty {
            "string" => TypeDescriptor::STRING,
            "integer" => TypeDescriptor::INTEGER,
            "number" => TypeDescriptor::NUMBER,
            "boolean" => TypeDescriptor::BOOLEAN,
            "null" => TypeDescriptor::Null,
            "array" => match obj.get("items") {
                Some(items @ (Value::Object(_) | Value::Bool(true))) => {
                    TypeDescriptor::list(self.read(items, expanding))
                }
                _ => TypeDescriptor::List(None),
            },
            "object" if obj.contains_key("properties") => TypeDescriptor::Opaque(
                obj.get("title")
                    .and_then(Value::as_str)
                    .unwrap_or("object")
                    .to_string(),
            ),
            "object" => TypeDescriptor::Mapping,
            other => {
                tracing::warn!(schema_type = other, "Unknown JSON schema type, treating as unknown");
                TypeDescriptor::Unknown
            }
        }
    }

    fn read_ref(&self, reference: &str, expanding: &mut RefStack<'a>) -> TypeDescriptor {
        let name = reference.rsplit('/').next().unwrap_or(reference);

        let Some((key, target)) = self.definitions.get_key_value(name) else {
            tracing::trace!(reference, "Unresolved $ref, treating as opaque");
            return TypeDescriptor::Opaque(name.to_string());
        };

        if expanding.contains(&key.as_str()) || expanding.len() >= MAX_REF_DEPTH {
            tracing::trace!(reference, "Stopped following recursive $ref");
            return TypeDescriptor::Opaque(name.to_string());
        }

        expanding.push(key);
        let resolved = self.read(target, expanding);
        expanding.pop();

        match resolved {
            TypeDescriptor::Opaque(title) if title == "object" => {
                TypeDescriptor::Opaque(name.to_string())
            }
            resolved => resolved,
        }
    }
}
