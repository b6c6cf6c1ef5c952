//! Language-agnostic code generation for the cassent entity generator.
//!
//! This crate turns keyspace schema elements into [`EntityDescriptor`]s, a
//! neutral representation of "one generated value type", and drives them
//! through a pluggable per-language [`EntityCodegen`] emitter to files on
//! disk.
//!
//! # Module Organization
//!
//! - [`builder`](CodeBuilder) - indentation-aware code assembly
//! - [`mapper`](map_type) - recursive schema-to-target type mapping
//! - [`descriptor`](EntityDescriptor) - the neutral entity representation
//! - [`codegen`](EntityCodegen) - language emitter and type-rendering traits
//! - [`generation`](Generation) - the sequential run over one keyspace

mod builder;
mod codegen;
mod descriptor;
mod generation;
mod mapper;
mod naming;
mod paths;
mod target;

pub use builder::{CodeBuilder, Indent};
pub use codegen::{EntityCodegen, PreviewFile, TypeMapper};
pub use descriptor::{
    EntityDescriptor, FieldDescriptor, TAG_CQL_NAME, TAG_KEYSPACE, Tag, build_entity,
};
pub use generation::{GenerateReport, Generation};
pub use mapper::{UnmappableType, map_type};
pub use naming::NamingConvention;
pub use paths::package_dir;
pub use target::{TargetPrimitive, TargetType};
