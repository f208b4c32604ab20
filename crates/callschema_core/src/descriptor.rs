//! Static descriptors for callables and their parameter types.
//!
//! A [`CallableDescriptor`] is the reflected view of a function: its name,
//! documentation text, and ordered parameters. Each parameter may carry a
//! [`TypeDescriptor`], the language-neutral tree the type mapper consumes.
//!
//! Descriptors are produced once per callable, either by the `#[callable]`
//! and `#[callables]` attribute macros or at run time through
//! [`CallableDescriptor::builder`], and are plain immutable data afterwards.

use core::fmt;

use crate::error::DescriptorError;

/// Primitive value kinds understood by the type mapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    /// Text.
    String,
    /// Whole numbers.
    Integer,
    /// Floating-point numbers.
    Number,
    /// `true` / `false`.
    Boolean,
}

impl PrimitiveKind {
    /// Returns the JSON Schema type name for this primitive.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Integer => "integer",
            Self::Number => "number",
            Self::Boolean => "boolean",
        }
    }
}

/// A recursive, language-neutral description of a parameter type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeDescriptor {
    /// A primitive value.
    Primitive(PrimitiveKind),
    /// A value that may also be absent.
    Optional(Box<TypeDescriptor>),
    /// One of several member types, in declaration order.
    Union(Vec<TypeDescriptor>),
    /// A homogeneous sequence. `None` means the item type is not specified.
    List(Option<Box<TypeDescriptor>>),
    /// A key/value mapping. Key and value types are not described.
    Mapping,
    /// The "no value" type. Only meaningful as a union member.
    Null,
    /// A named composite type with no further structure.
    Opaque(String),
    /// Any value, or a type that could not be determined.
    Unknown,
}

impl TypeDescriptor {
    /// `string`
    pub const STRING: Self = Self::Primitive(PrimitiveKind::String);
    /// `integer`
    pub const INTEGER: Self = Self::Primitive(PrimitiveKind::Integer);
    /// `number`
    pub const NUMBER: Self = Self::Primitive(PrimitiveKind::Number);
    /// `boolean`
    pub const BOOLEAN: Self = Self::Primitive(PrimitiveKind::Boolean);

    /// Wraps `inner` as optional.
    ///
    /// Optional and null inputs are not wrapped twice, and an optional union
    /// becomes the union with a [`Null`](Self::Null) member added.
    #[must_use]
    pub fn optional(inner: TypeDescriptor) -> Self {
        match inner {
            Self::Optional(_) | Self::Null => inner,
            Self::Union(members) => Self::union(members.into_iter().chain([Self::Null])),
            other => Self::Optional(Box::new(other)),
        }
    }

    /// Builds a list of `item`.
    #[must_use]
    pub fn list(item: TypeDescriptor) -> Self {
        Self::List(Some(Box::new(item)))
    }

    /// Builds a normalized union.
    ///
    /// Nested unions and optionals are flattened, repeated members are
    /// dropped, and a union of `Null` with exactly one other member collapses
    /// to [`Optional`](Self::Optional). A single remaining member is returned
    /// as is.
    #[must_use]
    pub fn union(members: impl IntoIterator<Item = TypeDescriptor>) -> Self {
        let mut flat: Vec<TypeDescriptor> = Vec::new();
        for member in members {
            flatten_into(member, &mut flat);
        }

        let has_null = flat.contains(&Self::Null);
        let non_null: Vec<&TypeDescriptor> = flat.iter().filter(|m| **m != Self::Null).collect();

        match (has_null, non_null.as_slice()) {
            (_, []) if has_null => Self::Null,
            (_, []) => Self::Unknown,
            (false, [only]) => (*only).clone(),
            (true, [only]) => Self::Optional(Box::new((*only).clone())),
            _ => Self::Union(flat),
        }
    }

    /// Returns `true` for the [`Null`](Self::Null) member.
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

fn flatten_into(member: TypeDescriptor, out: &mut Vec<TypeDescriptor>) {
    match member {
        TypeDescriptor::Union(members) => {
            for m in members {
                flatten_into(m, out);
            }
        }
        TypeDescriptor::Optional(inner) => {
            flatten_into(*inner, out);
            flatten_into(TypeDescriptor::Null, out);
        }
        other => {
            if !out.contains(&other) {
                out.push(other);
            }
        }
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primitive(kind) => f.write_str(kind.as_str()),
            Self::Optional(inner) => write!(f, "optional[{inner}]"),
            Self::Union(members) => {
                f.write_str("union[")?;
                for (i, member) in members.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{member}")?;
                }
                f.write_str("]")
            }
            Self::List(Some(item)) => write!(f, "list[{item}]"),
            Self::List(None) => f.write_str("list"),
            Self::Mapping => f.write_str("mapping"),
            Self::Null => f.write_str("null"),
            Self::Opaque(name) => f.write_str(name),
            Self::Unknown => f.write_str("unknown"),
        }
    }
}

/// One declared parameter of a callable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterDescriptor {
    /// Parameter name as declared.
    pub name: String,
    /// Declared type, or `None` when the declaration carries no type.
    pub ty: Option<TypeDescriptor>,
    /// Whether the parameter declares a default value.
    pub has_default: bool,
}

impl ParameterDescriptor {
    /// Creates a parameter with a declared type and no default.
    pub fn new(name: impl Into<String>, ty: TypeDescriptor) -> Self {
        Self {
            name: name.into(),
            ty: Some(ty),
            has_default: false,
        }
    }

    /// Creates a parameter without a declared type.
    pub fn untyped(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: None,
            has_default: false,
        }
    }

    /// Creates the `self` receiver of a method.
    #[must_use]
    pub fn receiver() -> Self {
        Self::untyped(crate::signature::RECEIVER)
    }

    /// Marks the parameter as having a default value.
    #[must_use]
    pub fn with_default(mut self) -> Self {
        self.has_default = true;
        self
    }
}

/// The reflected signature and documentation of a callable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallableDescriptor {
    name: String,
    documentation: String,
    parameters: Vec<ParameterDescriptor>,
}

impl CallableDescriptor {
    /// Starts building a descriptor for the callable `name`.
    pub fn builder(name: impl Into<String>) -> CallableDescriptorBuilder {
        CallableDescriptorBuilder {
            name: name.into(),
            documentation: String::new(),
            parameters: Vec::new(),
        }
    }

    /// The callable's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The full documentation text. Empty when the callable has none.
    #[must_use]
    pub fn documentation(&self) -> &str {
        &self.documentation
    }

    /// All declared parameters in declaration order, including any receiver.
    #[must_use]
    pub fn parameters(&self) -> &[ParameterDescriptor] {
        &self.parameters
    }
}

/// Builder for [`CallableDescriptor`].
#[derive(Debug, Clone)]
pub struct CallableDescriptorBuilder {
    name: String,
    documentation: String,
    parameters: Vec<ParameterDescriptor>,
}

impl CallableDescriptorBuilder {
    /// Sets the documentation text.
    #[must_use]
    pub fn documentation(mut self, documentation: impl Into<String>) -> Self {
        self.documentation = documentation.into();
        self
    }

    /// Appends a parameter.
    #[must_use]
    pub fn parameter(mut self, parameter: ParameterDescriptor) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// Validates and builds the descriptor.
    pub fn build(self) -> Result<CallableDescriptor, DescriptorError> {
        if self.name.trim().is_empty() {
            return Err(DescriptorError::EmptyName);
        }

        for (i, param) in self.parameters.iter().enumerate() {
            if param.name.is_empty() {
                return Err(DescriptorError::EmptyParameterName {
                    callable: self.name,
                });
            }
            if self.parameters[..i].iter().any(|p| p.name == param.name) {
                return Err(DescriptorError::duplicate_parameter(
                    self.name,
                    param.name.clone(),
                ));
            }
        }

        Ok(CallableDescriptor {
            name: self.name,
            documentation: self.documentation,
            parameters: self.parameters,
        })
    }
}
