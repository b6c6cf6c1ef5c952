//! Kotlin type mapper implementation.

use cassent_codegen::{TargetPrimitive, TypeMapper};

/// Kotlin type mapper implementation.
///
/// Collections use the Kotlin standard library interfaces; UUID and Instant
/// come from the Java platform and need imports.
#[derive(Debug, Clone, Copy, Default)]
pub struct KotlinTypeMapper;

impl TypeMapper for KotlinTypeMapper {
    fn map_primitive(&self, ty: TargetPrimitive) -> &'static str {
        match ty {
            TargetPrimitive::String => "String",
            TargetPrimitive::Int32 => "Int",
            TargetPrimitive::Int64 => "Long",
            TargetPrimitive::Float32 => "Float",
            TargetPrimitive::Float64 => "Double",
            TargetPrimitive::Bool => "Boolean",
            TargetPrimitive::Uuid => "UUID",
            TargetPrimitive::Instant => "Instant",
        }
    }

    fn map_list(&self, inner: &str) -> String {
        format!("List<{}>", inner)
    }

    fn map_set(&self, inner: &str) -> String {
        format!("Set<{}>", inner)
    }

    fn map_map(&self, key: &str, value: &str) -> String {
        format!("Map<{}, {}>", key, value)
    }

    fn primitive_import(&self, ty: TargetPrimitive) -> Option<&'static str> {
        match ty {
            TargetPrimitive::Uuid => Some("java.util.UUID"),
            TargetPrimitive::Instant => Some("java.time.Instant"),
            _ => None,
        }
    }
}
