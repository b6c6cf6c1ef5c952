use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for schema operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Encapsulates the snapshot content and filename so error factories don't
/// pass both around separately.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Locate the first occurrence of `needle` in the source, as a span.
    pub fn span_of(&self, needle: &str) -> Option<SourceSpan> {
        self.src
            .find(needle)
            .map(|start| SourceSpan::from(start..start + needle.len()))
    }

    /// Create a parse error from a toml error.
    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create an unknown-type error for one member's type expression.
    pub fn unknown_type(
        &self,
        ty: impl Into<String>,
        element: impl Into<String>,
        member: impl Into<String>,
        name: impl Into<String>,
    ) -> Box<Error> {
        let ty = ty.into();
        Box::new(Error::UnknownType {
            src: self.named_source(),
            span: self.span_of(&ty),
            ty,
            element: element.into(),
            member: member.into(),
            name: name.into(),
        })
    }

    /// Create an invalid-type error for one member's type expression.
    pub fn invalid_type(
        &self,
        ty: impl Into<String>,
        element: impl Into<String>,
        member: impl Into<String>,
        reason: impl Into<String>,
    ) -> Box<Error> {
        let ty = ty.into();
        Box::new(Error::InvalidType {
            src: self.named_source(),
            span: self.span_of(&ty),
            ty,
            element: element.into(),
            member: member.into(),
            reason: reason.into(),
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("pass the keyspace snapshot file with '--schema <file>'"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse keyspace snapshot")]
    #[diagnostic(code(cassent::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("unknown type name '{name}' in '{ty}' for '{element}.{member}'")]
    #[diagnostic(
        code(cassent::unknown_type),
        help(
            "expected a CQL native type, a collection, or the name of a user-defined type declared in this snapshot"
        )
    )]
    UnknownType {
        #[source_code]
        src: NamedSource<String>,
        #[label("declared here")]
        span: Option<SourceSpan>,
        ty: String,
        element: String,
        member: String,
        name: String,
    },

    #[error("invalid type expression '{ty}' for '{element}.{member}'")]
    #[diagnostic(code(cassent::invalid_type), help("{reason}"))]
    InvalidType {
        #[source_code]
        src: NamedSource<String>,
        #[label("declared here")]
        span: Option<SourceSpan>,
        ty: String,
        element: String,
        member: String,
        reason: String,
    },

    #[error("keyspace '{requested}' not found")]
    #[diagnostic(
        code(cassent::keyspace_not_found),
        help("this snapshot describes keyspace '{available}'")
    )]
    KeyspaceNotFound {
        requested: String,
        available: String,
    },
}
