//! Java declaration builders.

use cassent_codegen::{CodeBuilder, Indent};

/// A Java annotation, e.g. `@CqlName("user_address")`.
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

/// A record component with inline annotations.
#[derive(Debug, Clone)]
pub struct Component {
    name: String,
    ty: String,
    annotations: Vec<Annotation>,
}

impl Component {
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

/// Builder for a Java record declaration.
#[derive(Debug, Clone)]
pub struct Record {
    name: String,
    annotations: Vec<Annotation>,
    components: Vec<Component>,
}

impl Record {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            annotations: Vec::new(),
            components: Vec::new(),
        }
    }

    pub fn annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    pub fn component(mut self, component: Component) -> Self {
        self.components.push(component);
        self
    }

    /// Render the full declaration.
    pub fn render(&self) -> String {
        let builder = CodeBuilder::new(Indent::JAVA).each(&self.annotations, |b, annotation| {
            b.line(&annotation.render())
        });

        if self.components.is_empty() {
            return builder
                .line(&format!("public record {}() {{}}", self.name))
                .build();
        }

        // Java forbids a trailing comma on the last component.
        let last = self.components.len() - 1;
        builder
            .line(&format!("public record {}(", self.name))
            .indent()
            .each(self.components.iter().enumerate(), |b, (i, component)| {
                let mut line = String::new();
                for annotation in &component.annotations {
                    line.push_str(&annotation.render());
                    line.push(' ');
                }
                line.push_str(&component.ty);
                line.push(' ');
                line.push_str(&component.name);
                if i != last {
                    line.push(',');
                }
                b.line(&line)
            })
            .dedent()
            .line(") {}")
            .build()
    }
}
