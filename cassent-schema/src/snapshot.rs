//! Keyspace snapshot files.
//!
//! A snapshot is a TOML description of one keyspace's user-defined types and
//! tables, with CQL type expressions as member types:
//!
//! ```toml
//! keyspace = "shop"
//!
//! [[udt]]
//! name = "user_address"
//! fields = [
//!     { name = "street_name", type = "text" },
//!     { name = "zip_code", type = "int" },
//! ]
//!
//! [[table]]
//! name = "orders"
//! columns = [
//!     { name = "order_id", type = "uuid" },
//!     { name = "items", type = "list<text>" },
//! ]
//! ```
//!
//! Members are arrays of `{ name, type }` tables so declared order survives
//! deserialization.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use crate::{
    Keyspace, Member, Table, Udt,
    error::{Error, Result, SourceContext},
    parse::{TypeParseError, parse_type},
};

#[derive(Debug, Deserialize)]
struct SnapshotDoc {
    keyspace: String,
    #[serde(default, rename = "udt")]
    udts: Vec<UdtDoc>,
    #[serde(default, rename = "table")]
    tables: Vec<TableDoc>,
}

#[derive(Debug, Deserialize)]
struct UdtDoc {
    name: String,
    #[serde(default)]
    fields: Vec<MemberDoc>,
}

#[derive(Debug, Deserialize)]
struct TableDoc {
    name: String,
    #[serde(default)]
    columns: Vec<MemberDoc>,
}

#[derive(Debug, Deserialize)]
struct MemberDoc {
    name: String,
    #[serde(rename = "type")]
    ty: String,
}

/// A parsed and resolved keyspace snapshot.
#[derive(Debug, Clone)]
pub struct Snapshot {
    keyspace: Keyspace,
}

impl Snapshot {
    /// Load a snapshot from a file.
    pub fn open(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source,
            })
        })?;
        let filename = path.display().to_string();
        Self::parse_str(&content, &filename)
    }

    /// Parse a snapshot from TOML content.
    pub fn parse_str(content: &str, filename: &str) -> Result<Self> {
        let ctx = SourceContext::new(content, filename);
        let doc: SnapshotDoc = toml::from_str(content).map_err(|source| ctx.parse_error(source))?;
        let keyspace = resolve(doc, &ctx)?;
        Ok(Self { keyspace })
    }

    /// The keyspace this snapshot describes.
    pub fn keyspace(&self) -> &Keyspace {
        &self.keyspace
    }
}

fn resolve(doc: SnapshotDoc, ctx: &SourceContext) -> Result<Keyspace> {
    // UDT names are collected up front so type expressions anywhere in the
    // snapshot can reference any declared UDT, regardless of order.
    let udt_names: HashSet<String> = doc.udts.iter().map(|u| u.name.clone()).collect();

    let mut keyspace = Keyspace {
        name: doc.keyspace,
        ..Default::default()
    };

    for udt in doc.udts {
        let fields = resolve_members(&udt.name, udt.fields, &udt_names, ctx)?;
        keyspace.udts.insert(
            udt.name.clone(),
            Udt {
                name: udt.name,
                fields,
            },
        );
    }

    for table in doc.tables {
        let columns = resolve_members(&table.name, table.columns, &udt_names, ctx)?;
        keyspace.tables.insert(
            table.name.clone(),
            Table {
                name: table.name,
                columns,
            },
        );
    }

    Ok(keyspace)
}

fn resolve_members(
    element: &str,
    members: Vec<MemberDoc>,
    udts: &HashSet<String>,
    ctx: &SourceContext,
) -> Result<Vec<Member>> {
    members
        .into_iter()
        .map(|member| {
            let ty = parse_type(&member.ty, udts).map_err(|err| match err {
                TypeParseError::Unknown(name) => {
                    ctx.unknown_type(&member.ty, element, &member.name, name)
                }
                TypeParseError::Malformed(reason) => {
                    ctx.invalid_type(&member.ty, element, &member.name, reason)
                }
            })?;
            Ok(Member {
                name: member.name,
                ty,
            })
        })
        .collect()
}
