//! Language-agnostic code generation traits.

use std::collections::BTreeSet;

use crate::{EntityDescriptor, NamingConvention, TargetPrimitive, TargetType};

/// Trait for language-specific entity emitters.
///
/// Implement this trait to emit persisted-entity artifacts in a new language.
/// An emitter sees only descriptors; whether one came from a user-defined
/// type or a table is invisible to it, and exactly one artifact is produced
/// per descriptor.
pub trait EntityCodegen {
    /// Language identifier (e.g., "kotlin", "java")
    fn language(&self) -> &'static str;

    /// File extension for generated source files (e.g., "kt", "java")
    fn file_extension(&self) -> &'static str;

    /// Naming conventions for this language.
    fn naming(&self) -> &NamingConvention;

    /// File name for one descriptor: the target type name plus the extension.
    fn file_name(&self, entity: &EntityDescriptor) -> String {
        format!("{}.{}", entity.name, self.file_extension())
    }

    /// Render one descriptor to a complete source artifact.
    fn render(&self, entity: &EntityDescriptor) -> String;
}

/// Trait for rendering target types into language syntax.
///
/// Implement this trait to support a new target language's type system.
pub trait TypeMapper {
    /// Map a primitive target kind.
    fn map_primitive(&self, ty: TargetPrimitive) -> &'static str;

    /// Map an ordered sequence type (e.g., `List<T>`).
    fn map_list(&self, inner: &str) -> String;

    /// Map a set type.
    fn map_set(&self, inner: &str) -> String;

    /// Map a key-value mapping type.
    fn map_map(&self, key: &str, value: &str) -> String;

    /// Import required by a primitive, if any.
    fn primitive_import(&self, ty: TargetPrimitive) -> Option<&'static str> {
        let _ = ty;
        None
    }

    /// Import required by a container's own syntax, if any.
    fn container_import(&self, ty: &TargetType) -> Option<&'static str> {
        let _ = ty;
        None
    }

    /// Render a complete target type to a string.
    fn render_type(&self, ty: &TargetType) -> String {
        match ty {
            TargetType::Primitive(primitive) => self.map_primitive(*primitive).to_string(),
            TargetType::List(inner) => self.map_list(&self.render_type(inner)),
            TargetType::Set(inner) => self.map_set(&self.render_type(inner)),
            TargetType::Map(key, value) => {
                self.map_map(&self.render_type(key), &self.render_type(value))
            }
            TargetType::Entity(name) => name.clone(),
        }
    }

    /// Collect the imports a type needs, recursing through containers.
    fn collect_imports(&self, ty: &TargetType, imports: &mut BTreeSet<&'static str>) {
        match ty {
            TargetType::Primitive(primitive) => {
                if let Some(import) = self.primitive_import(*primitive) {
                    imports.insert(import);
                }
            }
            TargetType::List(inner) | TargetType::Set(inner) => {
                if let Some(import) = self.container_import(ty) {
                    imports.insert(import);
                }
                self.collect_imports(inner, imports);
            }
            TargetType::Map(key, value) => {
                if let Some(import) = self.container_import(ty) {
                    imports.insert(import);
                }
                self.collect_imports(key, imports);
                self.collect_imports(value, imports);
            }
            TargetType::Entity(_) => {}
        }
    }
}

/// A rendered artifact that has not been written to disk.
#[derive(Debug)]
pub struct PreviewFile {
    /// File name relative to the output package directory.
    pub path: String,
    /// File content.
    pub content: String,
}
