//! Java entity generator.

use std::collections::BTreeSet;

use cassent_codegen::{
    EntityCodegen, EntityDescriptor, NamingConvention, TAG_CQL_NAME, TAG_KEYSPACE, TypeMapper,
};

use crate::{
    ast::{Annotation, Component, Record},
    java_file::JavaFile,
    naming::JAVA_NAMING,
    type_mapper::JavaTypeMapper,
};

const ANNOTATION_IMPORTS: [&str; 3] = [
    "com.datastax.oss.driver.api.mapper.annotations.CqlName",
    "com.datastax.oss.driver.api.mapper.annotations.Entity",
    "com.datastax.oss.driver.api.mapper.annotations.PropertyStrategy",
];

/// Java code generator producing one mapper-annotated record per entity
/// descriptor.
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
        annotations.push(Annotation::new("PropertyStrategy").arg("mutable = false"));
        annotations
    }
}

impl EntityCodegen for Generator {
    fn language(&self) -> &'static str {
        "java"
    }

    fn file_extension(&self) -> &'static str {
        "java"
    }

    fn naming(&self) -> &NamingConvention {
        &JAVA_NAMING
    }

    fn render(&self, entity: &EntityDescriptor) -> String {
        let mapper = JavaTypeMapper;

        let mut type_imports: BTreeSet<&'static str> = BTreeSet::new();
        for field in &entity.fields {
            mapper.collect_imports(&field.ty, &mut type_imports);
        }

        let mut record = Record::new(&entity.name);
        for annotation in self.entity_annotations(entity) {
            record = record.annotation(annotation);
        }
        for field in &entity.fields {
            let mut component = Component::new(&field.name, mapper.render_type(&field.ty));
            if let Some(cql_name) = field.cql_name() {
                component = component.annotation(Annotation::new("CqlName").string_arg(cql_name));
            }
            record = record.component(component);
        }

        JavaFile::new(&self.package)
            .imports(ANNOTATION_IMPORTS)
            .imports(type_imports)
            .add(record.render())
            .render()
    }
}
