//! JavaFile abstraction for structured Java file generation.

use std::collections::BTreeSet;

/// A structured representation of a Java source file.
///
/// Organizes code into a package statement, deduplicated sorted imports, and
/// body blocks.
#[derive(Debug, Default)]
pub struct JavaFile {
    package: String,
    imports: BTreeSet<String>,
    body: Vec<String>,
}

impl JavaFile {
    /// Create a new file in the given package. An empty package omits the
    /// package statement (default package).
    pub fn new(package: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            ..Default::default()
        }
    }

    /// Add an import.
    pub fn import(mut self, import: impl Into<String>) -> Self {
        self.imports.insert(import.into());
        self
    }

    /// Add multiple imports.
    pub fn imports(mut self, imports: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.imports.extend(imports.into_iter().map(Into::into));
        self
    }

    /// Add a body block (already-rendered code).
    pub fn add(mut self, block: impl Into<String>) -> Self {
        self.body.push(block.into());
        self
    }

    /// Render the complete file.
    pub fn render(&self) -> String {
        let mut sections: Vec<String> = Vec::new();

        if !self.package.is_empty() {
            sections.push(format!("package {};\n", self.package));
        }

        if !self.imports.is_empty() {
            let imports: Vec<String> = self
                .imports
                .iter()
                .map(|import| format!("import {};", import))
                .collect();
            sections.push(format!("{}\n", imports.join("\n")));
        }

        for block in &self.body {
            sections.push(block.trim_end().to_string() + "\n");
        }

        sections.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_package_is_omitted() {
        let code = JavaFile::new("").add("public record Foo() {}").render();
        assert_eq!(code, "public record Foo() {}\n");
    }

    #[test]
    fn test_package_statement() {
        let code = JavaFile::new("com.example")
            .add("public record Foo() {}")
            .render();
        assert_eq!(code, "package com.example;\n\npublic record Foo() {}\n");
    }

    #[test]
    fn test_imports_are_sorted_and_deduped() {
        let code = JavaFile::new("com.example")
            .import("java.util.UUID")
            .import("java.time.Instant")
            .import("java.util.UUID")
            .add("public record Foo() {}")
            .render();

        assert_eq!(
            code,
            "package com.example;\n\nimport java.time.Instant;\nimport java.util.UUID;\n\npublic record Foo() {}\n"
        );
    }
}
