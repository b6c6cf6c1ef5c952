//! Kotlin declaration builders.

use cassent_codegen::{CodeBuilder, Indent};

/// A Kotlin annotation, e.g. `@CqlName("user_address")`.
#[derive(Debug, Clone)]
pub struct Annotation {
    name: String,
    args: Vec<String>,
}

impl Annotation {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
        }
    }

    /// Add a raw argument, e.g. `mutable = false`.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Add a quoted string argument.
    pub fn string_arg(self, value: &str) -> Self {
        self.arg(format!("\"{}\"", value))
    }

    /// Format the annotation as a single line.
    pub fn render(&self) -> String {
        if self.args.is_empty() {
            format!("@{}", self.name)
        } else {
            format!("@{}({})", self.name, self.args.join(", "))
        }
    }
}

/// A constructor property of a data class.
#[derive(Debug, Clone)]
pub struct Property {
    name: String,
    ty: String,
    annotations: Vec<Annotation>,
}

impl Property {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            annotations: Vec::new(),
        }
    }

    pub fn annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }
}

/// Builder for an immutable Kotlin data class declared entirely through its
/// primary constructor.
#[derive(Debug, Clone)]
pub struct DataClass {
    name: String,
    annotations: Vec<Annotation>,
    properties: Vec<Property>,
}

impl DataClass {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            annotations: Vec::new(),
            properties: Vec::new(),
        }
    }

    pub fn annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    pub fn property(mut self, property: Property) -> Self {
        self.properties.push(property);
        self
    }

    /// Render the full declaration.
    pub fn render(&self) -> String {
        let builder = CodeBuilder::new(Indent::KOTLIN).each(&self.annotations, |b, annotation| {
            b.line(&annotation.render())
        });

        if self.properties.is_empty() {
            return builder
                .line(&format!("data class {}()", self.name))
                .build();
        }

        builder
            .line(&format!("data class {}(", self.name))
            .indent()
            .each(&self.properties, |b, property| {
                b.each(&property.annotations, |b, annotation| {
                    b.line(&annotation.render())
                })
                .line(&format!("val {}: {},", property.name, property.ty))
            })
            .dedent()
            .line(")")
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_annotation_without_args() {
        assert_eq!(Annotation::new("Deprecated").render(), "@Deprecated");
    }

    #[test]
    fn test_annotation_with_args() {
        assert_eq!(
            Annotation::new("CqlName").string_arg("user_address").render(),
            "@CqlName(\"user_address\")"
        );
        assert_eq!(
            Annotation::new("Entity")
                .arg("defaultKeyspace = \"shop\"")
                .render(),
            "@Entity(defaultKeyspace = \"shop\")"
        );
    }

    #[test]
    fn test_empty_data_class() {
        assert_eq!(DataClass::new("Marker").render(), "data class Marker()\n");
    }

    #[test]
    fn test_data_class_with_properties() {
        let code = DataClass::new("UserAddress")
            .annotation(Annotation::new("CqlName").string_arg("user_address"))
            .property(
                Property::new("streetName", "String")
                    .annotation(Annotation::new("CqlName").string_arg("street_name")),
            )
            .property(
                Property::new("zipCode", "Int")
                    .annotation(Annotation::new("CqlName").string_arg("zip_code")),
            )
            .render();

        assert_eq!(
            code,
            "@CqlName(\"user_address\")\n\
             data class UserAddress(\n\
             \x20   @CqlName(\"street_name\")\n\
             \x20   val streetName: String,\n\
             \x20   @CqlName(\"zip_code\")\n\
             \x20   val zipCode: Int,\n\
             )\n"
        );
    }
}
