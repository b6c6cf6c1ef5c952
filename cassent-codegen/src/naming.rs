//! Naming conventions for target languages.

/// Target-language naming conventions.
///
/// Defines how schema identifiers become type and field names, and how
/// reserved words are escaped.
#[derive(Debug, Clone, Copy)]
pub struct NamingConvention {
    /// Transform an element name to a type name (e.g., "user_address" -> "UserAddress")
    pub element_to_type: fn(&str) -> String,
    /// Transform a member name to a field name (e.g., "street_name" -> "streetName")
    pub member_to_field: fn(&str) -> String,
    /// List of reserved words in the language
    pub reserved_words: &'static [&'static str],
    /// Escape a reserved word (e.g., "object" -> "`object`" in Kotlin)
    pub escape_reserved: fn(&str) -> String,
}

impl NamingConvention {
    /// Check if a name is a reserved word.
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved_words.contains(&name)
    }

    /// Get a safe name, escaping if necessary.
    pub fn safe_name(&self, name: &str) -> String {
        if self.is_reserved(name) {
            (self.escape_reserved)(name)
        } else {
            name.to_string()
        }
    }

    /// Transform and make safe for use as a type name.
    pub fn type_name(&self, name: &str) -> String {
        let transformed = (self.element_to_type)(name);
        self.safe_name(&transformed)
    }

    /// Transform and make safe for use as a field name.
    pub fn field_name(&self, name: &str) -> String {
        let transformed = (self.member_to_field)(name);
        self.safe_name(&transformed)
    }
}
