//! Recursive mapping from schema types to target types.

use cassent_schema::{NativeType, SchemaType};
use miette::Diagnostic;
use thiserror::Error;

use crate::{NamingConvention, TargetPrimitive, TargetType};

/// A schema type with no counterpart in the generated type system.
#[derive(Debug, Error, Diagnostic)]
#[error("no target mapping for type '{ty}'")]
#[diagnostic(
    code(cassent::unmappable_type),
    help(
        "supported kinds are text, ascii, bigint, varint, boolean, int, float, double, uuid, timeuuid, time, date, timestamp, list, set, map, and user-defined types"
    )
)]
pub struct UnmappableType {
    ty: String,
}

impl UnmappableType {
    fn new(ty: &SchemaType) -> Self {
        Self { ty: ty.to_string() }
    }

    /// The offending type expression.
    pub fn ty(&self) -> &str {
        &self.ty
    }
}

/// Map a schema type to its target representation.
///
/// Pure over the supported kinds: the same input always yields the same
/// target type. Containers recurse without a depth limit and a nested failure
/// propagates unchanged, with no partial or default substitution. A
/// user-defined type maps to a named reference carrying the type name its own
/// generated entity has under `naming`; references stay by-name, never
/// inlined.
pub fn map_type(ty: &SchemaType, naming: &NamingConvention) -> Result<TargetType, UnmappableType> {
    match ty {
        SchemaType::Native(native) => map_native(*native)
            .map(TargetType::Primitive)
            .ok_or_else(|| UnmappableType::new(ty)),
        SchemaType::List(inner) => Ok(TargetType::list(map_type(inner, naming)?)),
        SchemaType::Set(inner) => Ok(TargetType::set(map_type(inner, naming)?)),
        SchemaType::Map(key, value) => Ok(TargetType::map(
            map_type(key, naming)?,
            map_type(value, naming)?,
        )),
        SchemaType::Udt(name) => Ok(TargetType::entity(naming.type_name(name))),
        SchemaType::Tuple(_) | SchemaType::Custom(_) => Err(UnmappableType::new(ty)),
    }
}

fn map_native(native: NativeType) -> Option<TargetPrimitive> {
    match native {
        NativeType::Ascii | NativeType::Text => Some(TargetPrimitive::String),
        NativeType::BigInt | NativeType::Varint => Some(TargetPrimitive::Int64),
        NativeType::Boolean => Some(TargetPrimitive::Bool),
        NativeType::Int => Some(TargetPrimitive::Int32),
        NativeType::Float => Some(TargetPrimitive::Float32),
        NativeType::Double => Some(TargetPrimitive::Float64),
        NativeType::Uuid | NativeType::TimeUuid => Some(TargetPrimitive::Uuid),
        NativeType::Time | NativeType::Date | NativeType::Timestamp => {
            Some(TargetPrimitive::Instant)
        }
        NativeType::Blob
        | NativeType::Counter
        | NativeType::Decimal
        | NativeType::Duration
        | NativeType::Inet
        | NativeType::SmallInt
        | NativeType::TinyInt => None,
    }
}

#[cfg(test)]
mod tests {
    use cassent_core::{to_camel_case, to_pascal_case};

    use super::*;

    const NAMING: NamingConvention = NamingConvention {
        element_to_type: to_pascal_case,
        member_to_field: to_camel_case,
        reserved_words: &[],
        escape_reserved: |name| name.to_string(),
    };

    fn map(ty: &SchemaType) -> Result<TargetType, UnmappableType> {
        map_type(ty, &NAMING)
    }

    #[test]
    fn test_supported_primitives() {
        let cases = [
            (NativeType::Text, TargetPrimitive::String),
            (NativeType::Ascii, TargetPrimitive::String),
            (NativeType::BigInt, TargetPrimitive::Int64),
            (NativeType::Varint, TargetPrimitive::Int64),
            (NativeType::Boolean, TargetPrimitive::Bool),
            (NativeType::Int, TargetPrimitive::Int32),
            (NativeType::Float, TargetPrimitive::Float32),
            (NativeType::Double, TargetPrimitive::Float64),
            (NativeType::Uuid, TargetPrimitive::Uuid),
            (NativeType::TimeUuid, TargetPrimitive::Uuid),
            (NativeType::Time, TargetPrimitive::Instant),
            (NativeType::Date, TargetPrimitive::Instant),
            (NativeType::Timestamp, TargetPrimitive::Instant),
        ];

        for (native, expected) in cases {
            assert_eq!(
                map(&SchemaType::Native(native)).unwrap(),
                TargetType::Primitive(expected),
                "mapping for {}",
                native.as_str()
            );
        }
    }

    #[test]
    fn test_mapping_is_stable_across_calls() {
        let ty = SchemaType::list(SchemaType::Native(NativeType::Uuid));
        assert_eq!(map(&ty).unwrap(), map(&ty).unwrap());
    }

    #[test]
    fn test_nested_containers_compose() {
        let ty = SchemaType::list(SchemaType::list(SchemaType::Native(NativeType::Int)));
        assert_eq!(
            map(&ty).unwrap(),
            TargetType::list(TargetType::list(TargetType::int32()))
        );

        let ty = SchemaType::map(
            SchemaType::Native(NativeType::Uuid),
            SchemaType::set(SchemaType::Native(NativeType::Text)),
        );
        assert_eq!(
            map(&ty).unwrap(),
            TargetType::map(TargetType::uuid(), TargetType::set(TargetType::string()))
        );
    }

    #[test]
    fn test_udt_maps_to_named_reference() {
        assert_eq!(
            map(&SchemaType::udt("user_address")).unwrap(),
            TargetType::entity("UserAddress")
        );
    }

    #[test]
    fn test_unsupported_kinds_fail() {
        for native in [
            NativeType::Blob,
            NativeType::Counter,
            NativeType::Decimal,
            NativeType::Duration,
            NativeType::Inet,
            NativeType::SmallInt,
            NativeType::TinyInt,
        ] {
            assert!(map(&SchemaType::Native(native)).is_err());
        }

        assert!(map(&SchemaType::Custom("org.example.Marshal".into())).is_err());
        assert!(map(&SchemaType::Tuple(vec![SchemaType::Native(NativeType::Int)])).is_err());
    }

    #[test]
    fn test_nested_failure_propagates() {
        let ty = SchemaType::list(SchemaType::Native(NativeType::Blob));
        let err = map(&ty).unwrap_err();
        assert_eq!(err.ty(), "blob");

        let ty = SchemaType::map(
            SchemaType::Native(NativeType::Text),
            SchemaType::set(SchemaType::Native(NativeType::Counter)),
        );
        let err = map(&ty).unwrap_err();
        assert_eq!(err.ty(), "counter");
    }
}
