//! Output path computation.

use std::path::{Path, PathBuf};

/// Map a dotted package/namespace to nested directories under `base`.
///
/// An empty package maps to `base` itself. Empty segments (doubled or
/// trailing dots) are skipped rather than producing empty path components.
pub fn package_dir(base: &Path, package: &str) -> PathBuf {
    let mut dir = base.to_path_buf();
    for segment in package.split('.').filter(|s| !s.is_empty()) {
        dir.push(segment);
    }
    dir
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_package_to_nested_dirs() {
        assert_eq!(
            package_dir(Path::new("out"), "com.example.entities"),
            Path::new("out").join("com").join("example").join("entities")
        );
    }

    #[test]
    fn test_empty_package_is_base() {
        assert_eq!(package_dir(Path::new("out"), ""), Path::new("out"));
    }

    #[test]
    fn test_stray_dots_are_skipped() {
        assert_eq!(
            package_dir(Path::new("out"), "com..example."),
            Path::new("out").join("com").join("example")
        );
    }
}
