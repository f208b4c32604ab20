//! Integration tests for the `callschema_core` crate.

use std::collections::HashMap;

use callschema_core::{
    Callable, CallableDescriptor, CallableSet, ConvertOptions, DescribeType, DescriptorError,
    ParameterDescriptor, TypeDescriptor, callable, callables, convert, convert_set,
};
use serde_json::json;

// ─────────────────────────────────────────────────────────────────────
// 1. #[callable] standalone
// ─────────────────────────────────────────────────────────────────────

#[callable]
/// Greets a person.
/// name: the person's name
fn greet(name: String, #[default] shout: bool) -> String {
    if shout {
        format!("HELLO, {}!", name.to_uppercase())
    } else {
        format!("Hello, {}!", name)
    }
}

#[test]
fn greet_strict() {
    let schema = convert(&GreetCallable, &ConvertOptions::default()).unwrap();
    assert_eq!(
        serde_json::to_string(&schema).unwrap(),
        r#"{"type":"function","name":"greet","description":"Greets a person.","parameters":{"type":"object","properties":{"name":{"type":"string","description":"the person's name"},"shout":{"type":"boolean"}},"required":["name"],"additionalProperties":false},"strict":true}"#
    );
}

#[test]
fn greet_lenient() {
    let schema = convert(&GreetCallable, &ConvertOptions::new().strict(false)).unwrap();
    let value = serde_json::to_value(&schema).unwrap();

    assert_eq!(value["strict"], json!(false));
    let params = value["parameters"].as_object().unwrap();
    assert!(!params.contains_key("required"));
    assert!(!params.contains_key("additionalProperties"));
    assert_eq!(params["properties"]["shout"], json!({"type": "boolean"}));
}

#[test]
fn function_is_still_callable() {
    assert_eq!(greet("Ada".to_string(), false), "Hello, Ada!");
    assert_eq!(greet("Ada".to_string(), true), "HELLO, ADA!");
}

#[test]
fn conversion_is_idempotent() {
    let options = ConvertOptions::default();
    assert_eq!(
        convert(&GreetCallable, &options).unwrap(),
        convert(&GreetCallable, &options).unwrap()
    );
}

// ─────────────────────────────────────────────────────────────────────
// 2. #[callable] with no params or docs
// ─────────────────────────────────────────────────────────────────────

#[callable]
fn get_time() -> String {
    "2025-01-01T00:00:00Z".to_string()
}

#[test]
fn no_params_no_docs() {
    let schema = convert(&GetTimeCallable, &ConvertOptions::default()).unwrap();
    assert_eq!(schema.name, "get_time");
    assert_eq!(schema.description, "Function get_time");

    let value = schema.to_value();
    assert_eq!(value["parameters"]["properties"], json!({}));
    assert_eq!(value["parameters"]["required"], json!([]));
    assert_eq!(get_time(), "2025-01-01T00:00:00Z");
}

// ─────────────────────────────────────────────────────────────────────
// 3. Container and optional types
// ─────────────────────────────────────────────────────────────────────

#[callable]
#[expect(dead_code, reason = "only the reflected signature is exercised")]
/// Find records.
///
/// ids: record identifiers
/// label: optional label filter
/// metadata: free-form metadata
/// tags: optional tag list
async fn find(
    ids: Vec<i64>,
    label: Option<String>,
    metadata: HashMap<String, String>,
    tags: Option<Vec<&'static str>>,
    options: Option<serde_json::Map<String, serde_json::Value>>,
    #[default] limit: u32,
) -> usize {
    let _ = (label, metadata, tags, options, limit);
    ids.len()
}

#[test]
fn container_and_optional_types() {
    let schema = convert(&FindCallable, &ConvertOptions::default()).unwrap();
    let props = &schema.to_value()["parameters"]["properties"];

    assert_eq!(
        props["ids"],
        json!({"type": "array", "items": {"type": "integer"}, "description": "record identifiers"})
    );
    assert_eq!(
        props["label"],
        json!({"type": ["string", "null"], "description": "optional label filter"})
    );
    assert_eq!(
        props["metadata"],
        json!({"type": "object", "description": "free-form metadata"})
    );
    assert_eq!(
        props["tags"],
        json!({"type": ["array", "null"], "items": {"type": "string"}, "description": "optional tag list"})
    );
    assert_eq!(props["options"], json!({"type": "object"}));
    assert_eq!(props["limit"], json!({"type": "integer"}));
}

#[test]
fn optional_without_default_is_required() {
    let schema = convert(&FindCallable, &ConvertOptions::default()).unwrap();
    assert_eq!(
        schema.required(),
        ["ids", "label", "metadata", "tags", "options"]
    );
}

#[test]
fn summary_skips_blank_lines_in_docs() {
    let schema = convert(&FindCallable, &ConvertOptions::default()).unwrap();
    assert_eq!(schema.description, "Find records.");
}

// ─────────────────────────────────────────────────────────────────────
// 4. User-described union types
// ─────────────────────────────────────────────────────────────────────

enum Key {
    Id(u64),
    Name(String),
    Flag(bool),
}

impl DescribeType for Key {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::union([
            TypeDescriptor::INTEGER,
            TypeDescriptor::STRING,
            TypeDescriptor::BOOLEAN,
        ])
    }
}

#[callable]
/// Look up an entry.
/// key: entry key
fn lookup(key: Key, fallback: Option<Key>) -> String {
    let render = |key: Key| match key {
        Key::Id(id) => id.to_string(),
        Key::Name(name) => name,
        Key::Flag(flag) => flag.to_string(),
    };
    fallback.map_or_else(|| render(key), render)
}

#[test]
fn three_member_union_is_any_of() {
    let schema = convert(&LookupCallable, &ConvertOptions::default()).unwrap();
    let props = &schema.to_value()["parameters"]["properties"];

    assert_eq!(
        props["key"],
        json!({
            "anyOf": [{"type": "integer"}, {"type": "string"}, {"type": "boolean"}],
            "description": "entry key"
        })
    );
    assert_eq!(
        props["fallback"],
        json!({"anyOf": [
            {"type": "integer"},
            {"type": "string"},
            {"type": "boolean"},
            {"type": "object"}
        ]})
    );
    assert_eq!(lookup(Key::Id(7), None), "7");
    assert_eq!(lookup(Key::Flag(true), Some(Key::Name("beta".to_string()))), "beta");
}

// ─────────────────────────────────────────────────────────────────────
// 5. Documentation marker matching
// ─────────────────────────────────────────────────────────────────────

#[callable]
/// Validate a record.
/// valid: whether to keep only valid records
/// id: the record id
fn validate(id: u64, valid: bool) -> bool {
    id > 0 && valid
}

#[test]
fn doc_markers_are_raw_substring_matches() {
    let schema = convert(&ValidateCallable, &ConvertOptions::default()).unwrap();
    let props = &schema.parameters.properties;

    // "id:" first matches inside "valid:" on the earlier line.
    assert_eq!(
        props["id"].description.as_deref(),
        Some("whether to keep only valid records")
    );
    assert_eq!(
        props["valid"].description.as_deref(),
        Some("whether to keep only valid records")
    );
    assert!(validate(1, true));
}

#[test]
fn description_override() {
    let options = ConvertOptions::new().with_description("Checks a record.");
    let schema = convert(&ValidateCallable, &options).unwrap();
    assert_eq!(schema.description, "Checks a record.");
}

// ─────────────────────────────────────────────────────────────────────
// 6. #[callables] on impl blocks
// ─────────────────────────────────────────────────────────────────────

struct Canvas {
    width: f64,
}

#[callables]
impl Canvas {
    #[callable]
    /// Draw a line.
    /// length: line length in pixels
    fn line(&self, length: f64, #[default] r#dashed: bool) -> f64 {
        if dashed { length / 2.0 } else { length.min(self.width) }
    }

    #[callable]
    /// Resize the canvas.
    fn resize(&mut self, width: f64) {
        self.width = width;
    }

    fn helper(&self) -> f64 {
        self.width
    }

    #[callable]
    fn blank() -> Self {
        Canvas { width: 0.0 }
    }
}

#[test]
fn callables_describe_marked_methods_in_order() {
    let descriptors = Canvas::descriptors().unwrap();
    let names: Vec<_> = descriptors.iter().map(CallableDescriptor::name).collect();
    assert_eq!(names, ["line", "resize", "blank"]);

    assert_eq!(descriptors[0].parameters()[0], ParameterDescriptor::receiver());
}

#[test]
fn callables_drop_self_from_schema() {
    let schemas = convert_set::<Canvas>(&ConvertOptions::default()).unwrap();
    assert_eq!(schemas.len(), 3);

    let line = schemas[0].to_value();
    assert_eq!(
        line["parameters"],
        json!({
            "type": "object",
            "properties": {
                "length": {"type": "number", "description": "line length in pixels"},
                "dashed": {"type": "boolean"}
            },
            "required": ["length"],
            "additionalProperties": false
        })
    );

    assert_eq!(schemas[1].required(), ["width"]);
    assert!(schemas[2].parameters.properties.is_empty());
}

#[test]
fn callables_leave_methods_usable() {
    let mut canvas = Canvas::blank();
    canvas.resize(10.0);
    assert_eq!(canvas.helper(), 10.0);
    assert_eq!(canvas.line(20.0, false), 10.0);
}

// ─────────────────────────────────────────────────────────────────────
// 7. Runtime descriptors
// ─────────────────────────────────────────────────────────────────────

struct Broken;

impl Callable for Broken {
    fn descriptor(&self) -> Result<CallableDescriptor, DescriptorError> {
        CallableDescriptor::builder("broken")
            .parameter(ParameterDescriptor::untyped("x"))
            .parameter(ParameterDescriptor::untyped("x"))
            .build()
    }
}

#[test]
fn reflection_errors_propagate() {
    let err = convert(&Broken, &ConvertOptions::default()).unwrap_err();
    assert_eq!(err, DescriptorError::duplicate_parameter("broken", "x"));
}

#[test]
fn builder_descriptor_with_untyped_parameter() {
    let descriptor = CallableDescriptor::builder("emit")
        .documentation("Emit an event.\npayload: event body")
        .parameter(ParameterDescriptor::receiver())
        .parameter(ParameterDescriptor::untyped("payload"))
        .parameter(ParameterDescriptor::new("retries", TypeDescriptor::INTEGER).with_default())
        .build()
        .unwrap();

    let schema = convert(&descriptor, &ConvertOptions::default()).unwrap();
    assert_eq!(
        schema.to_value()["parameters"]["properties"],
        json!({
            "payload": {"type": "object", "description": "event body"},
            "retries": {"type": "integer"}
        })
    );
    assert_eq!(schema.required(), ["payload"]);
}
