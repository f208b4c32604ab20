//! Type descriptor to schema fragment mapping.

use crate::descriptor::{PrimitiveKind, TypeDescriptor};
use crate::schema::{JsonType, SchemaFragment};

/// Maps a [`TypeDescriptor`] to a [`SchemaFragment`].
///
/// Every descriptor produces a fragment; anything without a finer schema
/// becomes `{"type": "object"}`. List items and optional inners are mapped
/// as if they had a default; union members inherit `has_default`.
#[must_use]
pub fn type_to_schema(ty: &TypeDescriptor, has_default: bool) -> SchemaFragment {
    match ty {
        TypeDescriptor::Primitive(kind) => SchemaFragment::scalar(primitive_type(*kind)),
        TypeDescriptor::Optional(inner) => type_to_schema(inner, true).or_null(),
        TypeDescriptor::Union(members) => union_to_schema(members, has_default),
        TypeDescriptor::List(item) => {
            let items = item
                .as_deref()
                .map_or_else(SchemaFragment::object, |item| type_to_schema(item, true));
            SchemaFragment::array(items)
        }
        TypeDescriptor::Mapping => SchemaFragment::object(),
        TypeDescriptor::Null | TypeDescriptor::Opaque(_) | TypeDescriptor::Unknown => {
            tracing::trace!(ty = %ty, has_default, "No finer schema, using object");
            SchemaFragment::object()
        }
    }
}

fn union_to_schema(members: &[TypeDescriptor], has_default: bool) -> SchemaFragment {
    let mut non_null = members.iter().filter(|m| !m.is_null());
    let only = non_null.next();

    if members.iter().any(TypeDescriptor::is_null)
        && let Some(inner) = only
        && non_null.next().is_none()
    {
        return type_to_schema(inner, true).or_null();
    }

    SchemaFragment::any_of(
        members
            .iter()
            .map(|member| type_to_schema(member, has_default))
            .collect(),
    )
}

fn primitive_type(kind: PrimitiveKind) -> JsonType {
    match kind {
        PrimitiveKind::String => JsonType::String,
        PrimitiveKind::Integer => JsonType::Integer,
        PrimitiveKind::Number => JsonType::Number,
        PrimitiveKind::Boolean => JsonType::Boolean,
    }
}
