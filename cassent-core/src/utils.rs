//! Shared identifier-case transforms.

/// Convert an identifier to PascalCase (e.g., "user_address" -> "UserAddress")
///
/// Already-converted input passes through unchanged, so the transform can be
/// applied to its own output.
pub fn to_pascal_case(s: &str) -> String {
    s.split('_')
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_uppercase().chain(chars).collect(),
            }
        })
        .collect()
}

/// Convert an identifier to camelCase (e.g., "street_name" -> "streetName")
///
/// Idempotent for the same reason as [`to_pascal_case`].
pub fn to_camel_case(s: &str) -> String {
    let pascal = to_pascal_case(s);
    let mut chars = pascal.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_lowercase().chain(chars).collect(),
    }
}
