//! Code builder utility for generating properly indented code.

/// Indentation unit for generated code.
#[derive(Debug, Clone, Copy)]
pub struct Indent(&'static str);

impl Indent {
    /// Four spaces (Kotlin convention).
    pub const KOTLIN: Indent = Indent("    ");
    /// Four spaces (Java convention).
    pub const JAVA: Indent = Indent("    ");

    /// Get the indentation string.
    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::KOTLIN
    }
}

/// Fluent API for building code with proper indentation.
///
/// # Example
///
/// ```
/// use cassent_codegen::{CodeBuilder, Indent};
///
/// let code = CodeBuilder::new(Indent::KOTLIN)
///     .line("data class Point(")
///     .indent()
///     .line("val x: Int,")
///     .dedent()
///     .line(")")
///     .build();
///
/// assert_eq!(code, "data class Point(\n    val x: Int,\n)\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Add a line of code with current indentation.
    pub fn line(mut self, s: &str) -> Self {
        for _ in 0..self.indent_level {
            self.buffer.push_str(self.indent.as_str());
        }
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line (no indentation).
    pub fn blank(mut self) -> Self {
        self.buffer.push('\n');
        self
    }

    /// Increase indentation level.
    pub fn indent(mut self) -> Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn dedent(mut self) -> Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Conditionally add content.
    pub fn when<F>(self, condition: bool, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        if condition { f(self) } else { self }
    }

    /// Iterate and add content for each item.
    pub fn each<T, I, F>(mut self, items: I, f: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: Fn(Self, T) -> Self,
    {
        for item in items {
            self = f(self, item);
        }
        self
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::new(Indent::default())
    }
}
