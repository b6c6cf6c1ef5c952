//! Java-specific naming conventions.

use cassent_codegen::NamingConvention;
use cassent_core::{to_camel_case, to_pascal_case};

fn escape_with_underscore(name: &str) -> String {
    format!("_{}", name)
}

/// Java naming conventions.
pub const JAVA_NAMING: NamingConvention = NamingConvention {
    element_to_type: to_pascal_case,
    member_to_field: to_camel_case,
    reserved_words: &[
        "abstract",
        "assert",
        "boolean",
        "break",
        "byte",
        "case",
        "catch",
        "char",
        "class",
        "const",
        "continue",
        "default",
        "do",
        "double",
        "else",
        "enum",
        "extends",
        "false",
        "final",
        "finally",
        "float",
        "for",
        "goto",
        "if",
        "implements",
        "import",
        "instanceof",
        "int",
        "interface",
        "long",
        "native",
        "new",
        "null",
        "package",
        "private",
        "protected",
        "public",
        "return",
        "short",
        "static",
        "strictfp",
        "super",
        "switch",
        "synchronized",
        "this",
        "throw",
        "throws",
        "transient",
        "true",
        "try",
        "void",
        "volatile",
        "while",
    ],
    escape_reserved: escape_with_underscore,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_java_naming_type() {
        assert_eq!(JAVA_NAMING.type_name("user_address"), "UserAddress");
        assert_eq!(JAVA_NAMING.type_name("orders"), "Orders");
    }

    #[test]
    fn test_java_naming_field() {
        assert_eq!(JAVA_NAMING.field_name("street_name"), "streetName");
        assert_eq!(JAVA_NAMING.field_name("order_id"), "orderId");
    }

    #[test]
    fn test_java_reserved_words() {
        assert!(JAVA_NAMING.is_reserved("class"));
        assert!(JAVA_NAMING.is_reserved("native"));
        assert!(!JAVA_NAMING.is_reserved("record"));
    }

    #[test]
    fn test_java_escape_reserved() {
        assert_eq!(JAVA_NAMING.field_name("native"), "_native");
        assert_eq!(JAVA_NAMING.field_name("street_name"), "streetName");
    }
}
