//! Schema output types.
//!
//! Provides [`SchemaFragment`] for individual value schemas, [`ParameterInfo`]
//! for one parameter's contribution, and [`FunctionSchema`] for the complete
//! function definition handed to a tool-calling interface.

use indexmap::IndexMap;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value, json};

/// Scalar JSON Schema types a fragment can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JsonType {
    /// `"string"`
    String,
    /// `"integer"`
    Integer,
    /// `"number"`
    Number,
    /// `"boolean"`
    Boolean,
    /// `"object"`
    Object,
}

impl JsonType {
    /// Returns the JSON Schema type name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Integer => "integer",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Object => "object",
        }
    }
}

/// The structural part of a [`SchemaFragment`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shape {
    /// `{"type": T}`
    Scalar(JsonType),
    /// `{"type": "array", "items": F}`
    Array(Box<SchemaFragment>),
    /// `{"anyOf": [F, ...]}`
    AnyOf(Vec<SchemaFragment>),
}

/// JSON Schema for a single value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaFragment {
    /// The fragment's structure.
    pub shape: Shape,
    /// Whether `"null"` is accepted alongside the declared type.
    pub nullable: bool,
    /// Human-readable description, emitted last.
    pub description: Option<String>,
}

impl SchemaFragment {
    /// `{"type": T}`
    #[must_use]
    pub fn scalar(ty: JsonType) -> Self {
        Self {
            shape: Shape::Scalar(ty),
            nullable: false,
            description: None,
        }
    }

    /// `{"type": "object"}`, the fallback for anything without a finer schema.
    #[must_use]
    pub fn object() -> Self {
        Self::scalar(JsonType::Object)
    }

    /// `{"type": "array", "items": items}`
    #[must_use]
    pub fn array(items: SchemaFragment) -> Self {
        Self {
            shape: Shape::Array(Box::new(items)),
            nullable: false,
            description: None,
        }
    }

    /// `{"anyOf": members}`
    #[must_use]
    pub fn any_of(members: Vec<SchemaFragment>) -> Self {
        Self {
            shape: Shape::AnyOf(members),
            nullable: false,
            description: None,
        }
    }

    /// Widens a typed fragment to also accept `null`.
    ///
    /// Object fragments and `anyOf` fragments are returned unchanged.
    #[must_use]
    pub fn or_null(mut self) -> Self {
        match self.shape {
            Shape::Scalar(JsonType::Object) | Shape::AnyOf(_) => {}
            Shape::Scalar(_) | Shape::Array(_) => self.nullable = true,
        }
        self
    }

    /// Attaches a description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Renders the fragment as a JSON value.
    #[must_use]
    pub fn to_value(&self) -> Value {
        let mut obj = Map::new();

        match &self.shape {
            Shape::Scalar(ty) => {
                obj.insert("type".to_string(), self.type_value(ty.as_str()));
            }
            Shape::Array(items) => {
                obj.insert("type".to_string(), self.type_value("array"));
                obj.insert("items".to_string(), items.to_value());
            }
            Shape::AnyOf(members) => {
                obj.insert(
                    "anyOf".to_string(),
                    Value::Array(members.iter().map(Self::to_value).collect()),
                );
            }
        }

        if let Some(description) = &self.description {
            obj.insert(
                "description".to_string(),
                Value::String(description.clone()),
            );
        }

        Value::Object(obj)
    }

    fn type_value(&self, ty: &str) -> Value {
        if self.nullable {
            json!([ty, "null"])
        } else {
            json!(ty)
        }
    }
}

impl Serialize for SchemaFragment {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_value().serialize(serializer)
    }
}

/// One parameter's contribution to a [`FunctionSchema`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterInfo {
    /// Parameter name, used as the property key.
    pub name: String,
    /// Schema for the parameter's type.
    pub schema: SchemaFragment,
    /// Parameter description from the callable's documentation.
    pub description: Option<String>,
    /// Whether the parameter declares a default value.
    pub has_default: bool,
}

impl ParameterInfo {
    /// Creates a parameter without a default or description.
    pub fn new(name: impl Into<String>, schema: SchemaFragment) -> Self {
        Self {
            name: name.into(),
            schema,
            description: None,
            has_default: false,
        }
    }
}

/// The `parameters` object of a [`FunctionSchema`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParametersSchema {
    /// Property schemas keyed by parameter name, in declaration order.
    pub properties: IndexMap<String, SchemaFragment>,
    /// Names of parameters without defaults. Present only in strict mode.
    pub required: Option<Vec<String>>,
    /// Always `Some(false)` in strict mode, absent otherwise.
    pub additional_properties: Option<bool>,
}

impl ParametersSchema {
    /// Renders the parameters object as a JSON value.
    #[must_use]
    pub fn to_value(&self) -> Value {
        let properties: Map<String, Value> = self
            .properties
            .iter()
            .map(|(name, fragment)| (name.clone(), fragment.to_value()))
            .collect();

        let mut obj = Map::new();
        obj.insert("type".to_string(), json!("object"));
        obj.insert("properties".to_string(), Value::Object(properties));
        if let Some(required) = &self.required {
            obj.insert("required".to_string(), json!(required));
        }
        if let Some(additional) = self.additional_properties {
            obj.insert("additionalProperties".to_string(), Value::Bool(additional));
        }
        Value::Object(obj)
    }
}

/// A complete function definition for a tool-calling interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionSchema {
    /// Function name.
    pub name: String,
    /// Function description.
    pub description: String,
    /// Parameter schema.
    pub parameters: ParametersSchema,
    /// Whether strict mode is enabled.
    pub strict: bool,
}

impl FunctionSchema {
    /// Creates a schema with no parameters.
    pub fn new(name: impl Into<String>, description: impl Into<String>, strict: bool) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            parameters: ParametersSchema {
                properties: IndexMap::new(),
                required: strict.then(Vec::new),
                additional_properties: strict.then_some(false),
            },
            strict,
        }
    }

    /// Adds a parameter as the next property.
    ///
    /// In strict mode, a parameter without a default is appended to
    /// `required`.
    #[must_use]
    pub fn add_parameter(mut self, param: ParameterInfo) -> Self {
        let mut schema = param.schema;
        if let Some(description) = param.description {
            schema.description = Some(description);
        }

        if !param.has_default
            && let Some(required) = self.parameters.required.as_mut()
        {
            required.push(param.name.clone());
        }

        self.parameters.properties.insert(param.name, schema);
        self
    }

    /// Returns the names of required parameters (empty outside strict mode).
    #[must_use]
    pub fn required(&self) -> &[String] {
        self.parameters.required.as_deref().unwrap_or_default()
    }

    /// Renders the schema as a JSON value.
    #[must_use]
    pub fn to_value(&self) -> Value {
        let mut obj = Map::new();
        obj.insert("type".to_string(), json!("function"));
        obj.insert("name".to_string(), json!(self.name));
        obj.insert("description".to_string(), json!(self.description));
        obj.insert("parameters".to_string(), self.parameters.to_value());
        obj.insert("strict".to_string(), Value::Bool(self.strict));
        Value::Object(obj)
    }
}

impl Serialize for FunctionSchema {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_value().serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragment_shapes_render() {
        assert_eq!(
            SchemaFragment::scalar(JsonType::String).to_value(),
            json!({"type": "string"})
        );
        assert_eq!(
            SchemaFragment::scalar(JsonType::Integer).or_null().to_value(),
            json!({"type": ["integer", "null"]})
        );
        assert_eq!(
            SchemaFragment::array(SchemaFragment::object()).or_null().to_value(),
            json!({"type": ["array", "null"], "items": {"type": "object"}})
        );
        assert_eq!(
            SchemaFragment::any_of(vec![
                SchemaFragment::scalar(JsonType::Number),
                SchemaFragment::scalar(JsonType::Boolean),
            ])
            .to_value(),
            json!({"anyOf": [{"type": "number"}, {"type": "boolean"}]})
        );
    }

    #[test]
    fn object_and_any_of_are_not_widened() {
        assert!(!SchemaFragment::object().or_null().nullable);
        assert!(!SchemaFragment::any_of(vec![]).or_null().nullable);
    }

    #[test]
    fn description_is_emitted_last() {
        let value = SchemaFragment::scalar(JsonType::String)
            .with_description("a name")
            .to_value();
        let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, ["type", "description"]);
    }

    #[test]
    fn strict_schema_tracks_required() {
        let schema = FunctionSchema::new("f", "F.", true)
            .add_parameter(ParameterInfo::new(
                "a",
                SchemaFragment::scalar(JsonType::String),
            ))
            .add_parameter(ParameterInfo {
                has_default: true,
                ..ParameterInfo::new("b", SchemaFragment::scalar(JsonType::Integer))
            });

        assert_eq!(schema.required(), ["a"]);
        assert_eq!(
            schema.to_value()["parameters"],
            json!({
                "type": "object",
                "properties": {"a": {"type": "string"}, "b": {"type": "integer"}},
                "required": ["a"],
                "additionalProperties": false
            })
        );
    }

    #[test]
    fn lenient_schema_omits_required_keys() {
        let schema = FunctionSchema::new("f", "F.", false).add_parameter(ParameterInfo::new(
            "a",
            SchemaFragment::scalar(JsonType::String),
        ));
        let params = schema.to_value()["parameters"].clone();
        assert!(params.get("required").is_none());
        assert!(params.get("additionalProperties").is_none());
        assert!(schema.required().is_empty());
    }

    #[test]
    fn serializes_with_key_order() {
        let text = serde_json::to_string(&FunctionSchema::new("noop", "Does nothing.", true))
            .unwrap();
        assert_eq!(
            text,
            r#"{"type":"function","name":"noop","description":"Does nothing.","parameters":{"type":"object","properties":{},"required":[],"additionalProperties":false},"strict":true}"#
        );
    }
}
