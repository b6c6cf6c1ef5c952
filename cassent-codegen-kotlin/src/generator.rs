//! Kotlin entity generator.

use std::collections::BTreeSet;

use cassent_codegen::{
    EntityCodegen, EntityDescriptor, NamingConvention, TAG_CQL_NAME, TAG_KEYSPACE, TypeMapper,
};

use crate::{
    ast::{Annotation, DataClass, Property},
    kotlin_file::KotlinFile,
    naming::KOTLIN_NAMING,
    type_mapper::KotlinTypeMapper,
};

const ANNOTATION_IMPORTS: [&str; 3] = [
    "com.datastax.oss.driver.api.mapper.annotations.CqlName",
    "com.datastax.oss.driver.api.mapper.annotations.Entity",
    "com.datastax.oss.driver.api.mapper.annotations.PropertyStrategy",
];

/// Kotlin code generator producing one mapper-annotated, immutable data
/// class per entity descriptor.
pub struct Generator {
    package: String,
}

impl Generator {
    /// Create a generator emitting into the given output package.
    pub fn new(package: impl Into<String>) -> Self {
        Self {
            package: package.into(),
        }
    }

    fn entity_annotations(&self, entity: &EntityDescriptor) -> Vec<Annotation> {
        let mut annotations = Vec::new();
        for tag in &entity.tags {
            match tag.key.as_str() {
                TAG_CQL_NAME => {
                    annotations.push(Annotation::new("CqlName").string_arg(&tag.value));
                }
                TAG_KEYSPACE => {
                    annotations.push(
                        Annotation::new("Entity")
                            .arg(format!("defaultKeyspace = \"{}\"", tag.value)),
                    );
                }
                _ => {}
            }
        }
        // Generated entities are immutable; the mapper must bind through the
        // constructor rather than setters.
        annotations.push(Annotation::new("PropertyStrategy").arg("mutable = false"));
        annotations
    }
}

impl EntityCodegen for Generator {
    fn language(&self) -> &'static str {
        "kotlin"
    }

    fn file_extension(&self) -> &'static str {
        "kt"
    }

    fn naming(&self) -> &NamingConvention {
        &KOTLIN_NAMING
    }

    fn render(&self, entity: &EntityDescriptor) -> String {
        let mapper = KotlinTypeMapper;

        let mut type_imports: BTreeSet<&'static str> = BTreeSet::new();
        for field in &entity.fields {
            mapper.collect_imports(&field.ty, &mut type_imports);
        }

        let mut class = DataClass::new(&entity.name);
        for annotation in self.entity_annotations(entity) {
            class = class.annotation(annotation);
        }
        for field in &entity.fields {
            let mut property = Property::new(&field.name, mapper.render_type(&field.ty));
            if let Some(cql_name) = field.cql_name() {
                property = property.annotation(Annotation::new("CqlName").string_arg(cql_name));
            }
            class = class.property(property);
        }

        KotlinFile::new(&self.package)
            .imports(ANNOTATION_IMPORTS)
            .imports(type_imports)
            .add(class.render())
            .render()
    }
}

#[cfg(test)]
mod tests {
    use cassent_codegen::{FieldDescriptor, Tag, TargetType};

    use super::*;

    fn entity() -> EntityDescriptor {
        EntityDescriptor {
            name: "UserAddress".into(),
            fields: vec![
                FieldDescriptor {
                    name: "streetName".into(),
                    ty: TargetType::string(),
                    tags: vec![Tag::new(TAG_CQL_NAME, "street_name")],
                },
                FieldDescriptor {
                    name: "zipCode".into(),
                    ty: TargetType::int32(),
                    tags: vec![Tag::new(TAG_CQL_NAME, "zip_code")],
                },
            ],
            tags: vec![
                Tag::new(TAG_CQL_NAME, "user_address"),
                Tag::new(TAG_KEYSPACE, "shop"),
            ],
        }
    }

    #[test]
    fn test_file_name() {
        let generator = Generator::new("com.example.entities");
        assert_eq!(generator.file_name(&entity()), "UserAddress.kt");
    }

    #[test]
    fn test_render_data_class() {
        let generator = Generator::new("com.example.entities");
        let code = generator.render(&entity());

        assert_eq!(
            code,
            "package com.example.entities\n\
             \n\
             import com.datastax.oss.driver.api.mapper.annotations.CqlName\n\
             import com.datastax.oss.driver.api.mapper.annotations.Entity\n\
             import com.datastax.oss.driver.api.mapper.annotations.PropertyStrategy\n\
             \n\
             @CqlName(\"user_address\")\n\
             @Entity(defaultKeyspace = \"shop\")\n\
             @PropertyStrategy(mutable = false)\n\
             data class UserAddress(\n\
             \x20   @CqlName(\"street_name\")\n\
             \x20   val streetName: String,\n\
             \x20   @CqlName(\"zip_code\")\n\
             \x20   val zipCode: Int,\n\
             )\n"
        );
    }

    #[test]
    fn test_render_imports_platform_types_once() {
        let generator = Generator::new("com.example.entities");
        let entity = EntityDescriptor {
            name: "Orders".into(),
            fields: vec![
                FieldDescriptor {
                    name: "orderId".into(),
                    ty: TargetType::uuid(),
                    tags: vec![Tag::new(TAG_CQL_NAME, "order_id")],
                },
                FieldDescriptor {
                    name: "placedAt".into(),
                    ty: TargetType::instant(),
                    tags: vec![Tag::new(TAG_CQL_NAME, "placed_at")],
                },
                FieldDescriptor {
                    name: "relatedIds".into(),
                    ty: TargetType::set(TargetType::uuid()),
                    tags: vec![Tag::new(TAG_CQL_NAME, "related_ids")],
                },
            ],
            tags: vec![
                Tag::new(TAG_CQL_NAME, "orders"),
                Tag::new(TAG_KEYSPACE, "shop"),
            ],
        };

        let code = generator.render(&entity);

        assert_eq!(code.matches("import java.util.UUID").count(), 1);
        assert_eq!(code.matches("import java.time.Instant").count(), 1);
        assert!(code.contains("val orderId: UUID,"));
        assert!(code.contains("val placedAt: Instant,"));
        assert!(code.contains("val relatedIds: Set<UUID>,"));
    }
}
