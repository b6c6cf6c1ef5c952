//! The metadata-provider boundary.

use std::path::Path;

use crate::{
    Keyspace, Snapshot,
    error::{Error, Result},
};

/// Source of keyspace schema descriptions.
///
/// A provider is acquired once at the start of a run, queried for the target
/// keyspace, and released when the run ends. Implementations enumerate each
/// user-defined type and table exactly once and preserve the declared order
/// of fields and columns within every element; the iteration order of the
/// elements themselves carries no guarantee.
pub trait SchemaProvider {
    /// Fetch the description of the named keyspace.
    fn keyspace(&self, name: &str) -> Result<Keyspace>;
}

/// Provider backed by a keyspace snapshot file.
pub struct SnapshotProvider {
    snapshot: Snapshot,
}

impl SnapshotProvider {
    /// Open the snapshot at `path`, holding it for the rest of the run.
    pub fn open(path: &Path) -> Result<Self> {
        Ok(Self {
            snapshot: Snapshot::open(path)?,
        })
    }

    /// Wrap an already-parsed snapshot.
    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        Self { snapshot }
    }
}

impl SchemaProvider for SnapshotProvider {
    fn keyspace(&self, name: &str) -> Result<Keyspace> {
        let described = self.snapshot.keyspace();
        if described.name != name {
            return Err(Box::new(Error::KeyspaceNotFound {
                requested: name.to_string(),
                available: described.name.clone(),
            }));
        }
        Ok(described.clone())
    }
}
