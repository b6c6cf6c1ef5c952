//! The sequential generation pipeline.

use std::path::{Path, PathBuf};

use cassent_core::File;
use cassent_schema::{Keyspace, Structured};
use eyre::{Result, WrapErr};

use crate::{
    build_entity,
    codegen::{EntityCodegen, PreviewFile},
    paths::package_dir,
};

/// Summary of one completed run.
#[derive(Debug, Default)]
pub struct GenerateReport {
    /// Paths of the artifacts written, in generation order.
    pub written: Vec<PathBuf>,
    /// Entities generated from user-defined types.
    pub udts: usize,
    /// Entities generated from tables.
    pub tables: usize,
}

/// One generation run over a keyspace.
///
/// Fully sequential and single-threaded: every user-defined type is
/// processed before the first table, and each element goes through build,
/// render, and write before the next is touched. The first failure halts the
/// run; artifacts already written stay on disk. There are no retries and no
/// rollback.
pub struct Generation<'a> {
    keyspace: &'a Keyspace,
    codegen: &'a dyn EntityCodegen,
    package: &'a str,
}

impl<'a> Generation<'a> {
    pub fn new(keyspace: &'a Keyspace, codegen: &'a dyn EntityCodegen, package: &'a str) -> Self {
        Self {
            keyspace,
            codegen,
            package,
        }
    }

    /// Render every entity without touching the filesystem.
    pub fn preview(&self) -> Result<Vec<PreviewFile>> {
        let mut files = Vec::new();
        for udt in self.keyspace.udts.values() {
            files.push(self.preview_entity(udt)?);
        }
        for table in self.keyspace.tables.values() {
            files.push(self.preview_entity(table)?);
        }
        Ok(files)
    }

    /// Generate all entities into `output_dir`, one file per entity.
    pub fn run(&self, output_dir: &Path) -> Result<GenerateReport> {
        let dir = package_dir(output_dir, self.package);
        let mut report = GenerateReport::default();

        for udt in self.keyspace.udts.values() {
            report.written.push(self.emit(udt, &dir)?);
            report.udts += 1;
        }
        for table in self.keyspace.tables.values() {
            report.written.push(self.emit(table, &dir)?);
            report.tables += 1;
        }

        Ok(report)
    }

    fn emit(&self, element: &dyn Structured, dir: &Path) -> Result<PathBuf> {
        let entity = self.build(element)?;
        let path = dir.join(self.codegen.file_name(&entity));
        File::new(path.clone(), self.codegen.render(&entity)).write()?;
        Ok(path)
    }

    fn preview_entity(&self, element: &dyn Structured) -> Result<PreviewFile> {
        let entity = self.build(element)?;
        Ok(PreviewFile {
            path: self.codegen.file_name(&entity),
            content: self.codegen.render(&entity),
        })
    }

    fn build(&self, element: &dyn Structured) -> Result<crate::EntityDescriptor> {
        build_entity(element, &self.keyspace.name, self.codegen.naming())
            .wrap_err_with(|| format!("failed to generate entity for '{}'", element.name()))
    }
}
