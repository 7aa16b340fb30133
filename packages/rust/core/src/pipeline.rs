//! End-to-end `generate` pipeline: provider → assemble → write or check.

use std::path::{Path, PathBuf};
use std::time::Instant;

use tracing::{info, instrument, warn};

use bpdocs_catalog::BlueprintProvider;
use bpdocs_shared::{BpDocsError, Result};

use crate::assembler;

/// Configuration for the `generate` pipeline.
#[derive(Debug, Clone)]
pub struct GenerateConfig {
    /// Markdown file to write (or compare against in check mode).
    pub output_path: PathBuf,
    /// Wildcard filter passed to the provider.
    pub filter: String,
    /// Compare with the existing file instead of overwriting it.
    pub check: bool,
}

/// What happened to the output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerateOutcome {
    /// The document was written.
    Written,
    /// Check mode: the file already matches the catalog.
    UpToDate,
    /// Check mode: the file is missing or differs from the catalog.
    Stale,
}

/// Result of the `generate` pipeline.
#[derive(Debug)]
pub struct GenerateReport {
    pub output_path: PathBuf,
    pub outcome: GenerateOutcome,
    pub category_count: usize,
    pub blueprint_count: usize,
    pub attribute_count: usize,
    pub elapsed: std::time::Duration,
}

/// Progress callback for reporting pipeline status.
pub trait ProgressReporter {
    /// Called when entering a new phase.
    fn phase(&self, name: &str);
    /// Called when the pipeline completes.
    fn done(&self, report: &GenerateReport);
}

/// No-op progress reporter for headless/test usage.
pub struct SilentProgress;

impl ProgressReporter for SilentProgress {
    fn phase(&self, _name: &str) {}
    fn done(&self, _report: &GenerateReport) {}
}

/// Run the full `generate` pipeline.
///
/// 1. Fetch the catalog from `provider`
/// 2. Group and render it
/// 3. Overwrite the output file, or compare against it in check mode
#[instrument(skip_all, fields(source = %provider.describe(), out = %config.output_path.display()))]
pub async fn generate<P: BlueprintProvider>(
    config: &GenerateConfig,
    provider: &P,
    progress: &dyn ProgressReporter,
) -> Result<GenerateReport> {
    let start = Instant::now();

    progress.phase("Fetching blueprint catalog");
    let doc = assembler::assemble(provider, &config.filter).await?;

    let outcome = if config.check {
        progress.phase("Comparing with existing document");
        check_document(&config.output_path, &doc.markdown)?
    } else {
        progress.phase("Writing document");
        write_document(&config.output_path, &doc.markdown)?;
        GenerateOutcome::Written
    };

    let report = GenerateReport {
        output_path: config.output_path.clone(),
        outcome,
        category_count: doc.category_count,
        blueprint_count: doc.blueprint_count,
        attribute_count: doc.attribute_count,
        elapsed: start.elapsed(),
    };

    info!(
        outcome = ?report.outcome,
        categories = report.category_count,
        blueprints = report.blueprint_count,
        elapsed_ms = report.elapsed.as_millis() as u64,
        "generate pipeline complete"
    );

    progress.done(&report);
    Ok(report)
}

/// Overwrite `path` with `markdown`, creating parent directories.
fn write_document(path: &Path, markdown: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| BpDocsError::io(parent, e))?;
    }
    std::fs::write(path, markdown).map_err(|e| BpDocsError::io(path, e))?;
    info!(path = %path.display(), bytes = markdown.len(), "document written");
    Ok(())
}

/// Compare `path` with freshly rendered `markdown`; a missing file is stale.
fn check_document(path: &Path, markdown: &str) -> Result<GenerateOutcome> {
    let existing = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            warn!(path = %path.display(), "document does not exist yet");
            return Ok(GenerateOutcome::Stale);
        }
        Err(e) => return Err(BpDocsError::io(path, e)),
    };

    if existing == markdown {
        Ok(GenerateOutcome::UpToDate)
    } else {
        warn!(path = %path.display(), "document is out of date");
        Ok(GenerateOutcome::Stale)
    }
}
