//! Java type mapper implementation.

use cassent_codegen::{TargetPrimitive, TargetType, TypeMapper};

/// Java type mapper implementation.
///
/// Component types are always the boxed forms so they compose with the
/// collection interfaces unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct JavaTypeMapper;

impl TypeMapper for JavaTypeMapper {
    fn map_primitive(&self, ty: TargetPrimitive) -> &'static str {
        match ty {
            TargetPrimitive::String => "String",
            TargetPrimitive::Int32 => "Integer",
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

    fn container_import(&self, ty: &TargetType) -> Option<&'static str> {
        match ty {
            TargetType::List(_) => Some("java.util.List"),
            TargetType::Set(_) => Some("java.util.Set"),
            TargetType::Map(_, _) => Some("java.util.Map"),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    #[test]
    fn test_java_primitives_are_boxed() {
        let mapper = JavaTypeMapper;

        assert_eq!(mapper.map_primitive(TargetPrimitive::String), "String");
        assert_eq!(mapper.map_primitive(TargetPrimitive::Int32), "Integer");
        assert_eq!(mapper.map_primitive(TargetPrimitive::Int64), "Long");
        assert_eq!(mapper.map_primitive(TargetPrimitive::Float32), "Float");
        assert_eq!(mapper.map_primitive(TargetPrimitive::Float64), "Double");
        assert_eq!(mapper.map_primitive(TargetPrimitive::Bool), "Boolean");
        assert_eq!(mapper.map_primitive(TargetPrimitive::Uuid), "UUID");
        assert_eq!(mapper.map_primitive(TargetPrimitive::Instant), "Instant");
    }

    #[test]
    fn test_java_containers() {
        let mapper = JavaTypeMapper;

        assert_eq!(
            mapper.render_type(&TargetType::list(TargetType::string())),
            "List<String>"
        );
        assert_eq!(
            mapper.render_type(&TargetType::map(
                TargetType::uuid(),
                TargetType::set(TargetType::int32())
            )),
            "Map<UUID, Set<Integer>>"
        );
    }

    #[test]
    fn test_java_imports_include_collections() {
        let mapper = JavaTypeMapper;
        let ty = TargetType::map(TargetType::uuid(), TargetType::list(TargetType::instant()));

        let mut imports = BTreeSet::new();
        mapper.collect_imports(&ty, &mut imports);

        assert_eq!(
            imports.into_iter().collect::<Vec<_>>(),
            [
                "java.time.Instant",
                "java.util.List",
                "java.util.Map",
                "java.util.UUID",
            ]
        );
    }
}
