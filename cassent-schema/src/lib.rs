//! Keyspace schema model for the cassent entity generator.
//!
//! This crate owns the schema side of the pipeline: the CQL type model, the
//! type-expression parser, the resolved keyspace metadata, and the
//! [`SchemaProvider`] boundary through which a run obtains that metadata.

mod error;
mod keyspace;
mod parse;
mod provider;
mod snapshot;
mod types;

pub use error::{Error, Result, SourceContext};
pub use keyspace::{Keyspace, Member, Structured, Table, Udt};
pub use parse::{TypeParseError, parse_type};
pub use provider::{SchemaProvider, SnapshotProvider};
pub use snapshot::Snapshot;
pub use types::{NativeType, SchemaType};
