//! Unified language dispatch.
//!
//! Centralizes language-specific generator creation.

use cassent_codegen::EntityCodegen;
use clap::ValueEnum;

/// Target language for generated entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Language {
    Kotlin,
    Java,
}

impl Language {
    /// Create a generator for this language, emitting into `package`.
    pub fn generator(&self, package: &str) -> Box<dyn EntityCodegen> {
        match self {
            Language::Kotlin => Box::new(cassent_codegen_kotlin::Generator::new(package)),
            Language::Java => Box::new(cassent_codegen_java::Generator::new(package)),
        }
    }
}
