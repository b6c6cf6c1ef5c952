//! Resolved keyspace metadata.

use indexmap::IndexMap;

use crate::SchemaType;

/// A named, typed member of a structured schema element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub name: String,
    pub ty: SchemaType,
}

impl Member {
    pub fn new(name: impl Into<String>, ty: SchemaType) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

/// A user-defined type: a named, reusable structured type with ordered fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Udt {
    pub name: String,
    pub fields: Vec<Member>,
}

/// A table: a named row type with ordered columns.
///
/// Partition-key and regular columns are not distinguished; every column is a
/// plain member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub name: String,
    pub columns: Vec<Member>,
}

/// A schema element with a name and ordered, named, typed members.
///
/// User-defined types and tables both reduce to this; nothing downstream of
/// the provider can tell them apart.
pub trait Structured {
    fn name(&self) -> &str;
    fn members(&self) -> &[Member];
}

impl Structured for Udt {
    fn name(&self) -> &str {
        &self.name
    }

    fn members(&self) -> &[Member] {
        &self.fields
    }
}

impl Structured for Table {
    fn name(&self) -> &str {
        &self.name
    }

    fn members(&self) -> &[Member] {
        &self.columns
    }
}

/// One keyspace's schema, captured in a single metadata snapshot.
///
/// Element sets are keyed by name and iterate in declaration order, each
/// element exactly once.
#[derive(Debug, Clone, Default)]
pub struct Keyspace {
    pub name: String,
    pub udts: IndexMap<String, Udt>,
    pub tables: IndexMap<String, Table>,
}
