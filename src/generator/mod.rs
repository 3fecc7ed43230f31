//! The reconciliation run: enumerate, load, scan each file, merge, persist.

use std::path::Path;

use crate::declaration::scan_declarations;
use crate::error::Result;
use crate::mapping::{ReconcileOutcome, TypeMapping, reconcile};
use crate::source::SourceProvider;
use crate::store::CacheStore;

/// Summary of one successful run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunReport {
    pub files_scanned: usize,
    pub declarations_found: usize,
    /// Names that were not in the cache before this run.
    pub added: usize,
    /// Whether the store was asked to persist the mapping.
    pub written: bool,
}

impl RunReport {
    #[must_use]
    pub const fn changed(&self) -> bool {
        self.added > 0
    }
}

/// Result of scanning a single file against a mapping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FileOutcome {
    pub declarations: usize,
    pub reconcile: ReconcileOutcome,
}

pub struct CacheGenerator<P: SourceProvider, C: CacheStore> {
    source: P,
    store: C,
    mapping: TypeMapping,
    found_classes: bool,
}

impl<P: SourceProvider, C: CacheStore> CacheGenerator<P, C> {
    #[must_use]
    pub fn new(source: P, store: C) -> Self {
        Self {
            source,
            store,
            mapping: TypeMapping::new(),
            found_classes: false,
        }
    }

    /// Run one reconciliation pass.
    ///
    /// The store is written only if at least one new name was found. If a
    /// file cannot be read or conflicts with the mapping, nothing from this
    /// run is kept. If only the final write fails, [`Self::mapping`] still
    /// reflects the scan.
    ///
    /// # Errors
    /// Returns the first enumeration, content, conflict or persistence error.
    pub fn run(&mut self) -> Result<RunReport> {
        let candidates = self.source.candidates()?;
        let mut mapping = self.store.load()?;
        let mut report = RunReport {
            files_scanned: candidates.len(),
            ..RunReport::default()
        };

        for candidate in &candidates {
            let outcome = self.scan_file(candidate, &mut mapping)?;
            report.declarations_found += outcome.declarations;
            report.added += outcome.reconcile.added;
        }

        self.mapping = mapping;
        if report.changed() {
            self.store.store(&self.mapping)?;
            report.written = true;
        }
        self.found_classes = report.changed();

        log::info!(
            "Scanned {} files: {} declarations, {} new, {} total",
            report.files_scanned,
            report.declarations_found,
            report.added,
            self.mapping.len()
        );
        Ok(report)
    }

    /// Scan one file and merge its declarations into `mapping`.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or one of its declarations
    /// conflicts with `mapping`, which is then left unchanged.
    pub fn scan_file(&self, candidate: &Path, mapping: &mut TypeMapping) -> Result<FileOutcome> {
        let content = self.source.read(candidate)?;
        let declarations = scan_declarations(&content);
        if declarations.is_empty() {
            log::debug!("{}: no declarations", candidate.display());
            return Ok(FileOutcome::default());
        }

        let location = self.source.location(candidate)?;
        let records: Vec<_> = declarations.iter().map(|d| d.record(&location)).collect();
        let outcome = reconcile(mapping, &records)?;

        log::debug!(
            "{}: {} declarations, {} new",
            candidate.display(),
            records.len(),
            outcome.added
        );
        Ok(FileOutcome {
            declarations: records.len(),
            reconcile: outcome,
        })
    }

    /// Mapping produced by the last run that got past scanning.
    #[must_use]
    pub const fn mapping(&self) -> &TypeMapping {
        &self.mapping
    }

    /// Whether the last successful run found any new name.
    #[must_use]
    pub const fn has_found_classes(&self) -> bool {
        self.found_classes
    }

    #[must_use]
    pub const fn store(&self) -> &C {
        &self.store
    }

    #[must_use]
    pub fn into_store(self) -> C {
        self.store
    }
}

#[cfg(test)]
#[path = "generator_tests.rs"]
mod tests;
