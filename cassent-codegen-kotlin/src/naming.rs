//! Kotlin-specific naming conventions.

use cassent_codegen::NamingConvention;
use cassent_core::{to_camel_case, to_pascal_case};

fn escape_kotlin_reserved(name: &str) -> String {
    format!("`{}`", name)
}

/// Kotlin naming conventions.
pub const KOTLIN_NAMING: NamingConvention = NamingConvention {
    element_to_type: to_pascal_case,
    member_to_field: to_camel_case,
    reserved_words: &[
        "as", "break", "class", "continue", "do", "else", "false", "for", "fun", "if", "in",
        "interface", "is", "null", "object", "package", "return", "super", "this", "throw", "true",
        "try", "typealias", "typeof", "val", "var", "when", "while",
    ],
    escape_reserved: escape_kotlin_reserved,
};
