//! Batch driver
//!
//! Runs the pipeline over many files. Images share no state, so a failure
//! only affects its own entry in the [`BatchReport`]; the run always goes
//! on to the next input.

use crate::error::TrimResult;
use crate::pipeline::{TrimOptions, TrimOutcome, output_path_for, process_file};
use std::fs;
use std::path::{Path, PathBuf};
use whitetrim_core::{BlankStatus, Rect};

/// What happened to one successfully processed input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchSummary {
    /// Blank classification
    pub status: BlankStatus,
    /// Written file, absent for blank images
    pub output: Option<PathBuf>,
    /// Source region kept by a crop
    pub region: Option<Rect>,
}

/// Result for one input of a batch
#[derive(Debug)]
pub struct BatchEntry {
    /// Input file
    pub input: PathBuf,
    /// Summary, or the error that stopped this image
    pub result: TrimResult<BatchSummary>,
}

/// Per-input results of a batch run, in input order
#[derive(Debug, Default)]
pub struct BatchReport {
    entries: Vec<BatchEntry>,
}

impl BatchReport {
    /// All entries.
    pub fn entries(&self) -> &[BatchEntry] {
        &self.entries
    }

    /// Number of inputs.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the batch had no inputs.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Inputs processed without error.
    pub fn succeeded(&self) -> usize {
        self.entries.iter().filter(|e| e.result.is_ok()).count()
    }

    /// Inputs that failed.
    pub fn failed(&self) -> usize {
        self.len() - self.succeeded()
    }

    /// Inputs classified blank.
    pub fn blank(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| matches!(&e.result, Ok(s) if s.status.is_blank()))
            .count()
    }
}

/// Trim every file in `inputs`, writing results into `output_dir`.
///
/// Each output keeps its input's file name. `output_dir` is created if
/// missing.
pub fn process_batch<I, P, Q>(inputs: I, output_dir: Q, options: &TrimOptions) -> BatchReport
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let output_dir = output_dir.as_ref();
    prepare_output_dir(output_dir);

    let entries: Vec<BatchEntry> = inputs
        .into_iter()
        .map(|input| process_entry(input.as_ref(), output_dir, options))
        .collect();

    finish(entries)
}

/// [`process_batch`] on the rayon thread pool.
///
/// Entries stay in input order.
#[cfg(feature = "parallel")]
pub fn process_batch_parallel<P, Q>(
    inputs: &[P],
    output_dir: Q,
    options: &TrimOptions,
) -> BatchReport
where
    P: AsRef<Path> + Sync,
    Q: AsRef<Path>,
{
    use rayon::prelude::*;

    let output_dir = output_dir.as_ref();
    prepare_output_dir(output_dir);

    let entries: Vec<BatchEntry> = inputs
        .par_iter()
        .map(|input| process_entry(input.as_ref(), output_dir, options))
        .collect();

    finish(entries)
}

fn prepare_output_dir(output_dir: &Path) {
    // A missing directory makes every write fail and be reported per entry
    if let Err(e) = fs::create_dir_all(output_dir) {
        log::warn!("cannot create {}: {}", output_dir.display(), e);
    }
}

fn process_entry(input: &Path, output_dir: &Path, options: &TrimOptions) -> BatchEntry {
    let result = output_path_for(input, output_dir).and_then(|output| {
        let outcome = process_file(input, &output, options)?;
        Ok(summarize(outcome, output))
    });

    if let Err(e) = &result {
        log::warn!("{}: {}", input.display(), e);
    }

    BatchEntry {
        input: input.to_path_buf(),
        result,
    }
}

fn summarize(outcome: TrimOutcome, output: PathBuf) -> BatchSummary {
    let status = outcome.status();
    match outcome {
        TrimOutcome::Blank => BatchSummary {
            status,
            output: None,
            region: None,
        },
        TrimOutcome::Trimmed { region, .. } => BatchSummary {
            status,
            output: Some(output),
            region: Some(region),
        },
        TrimOutcome::Erased(_) => BatchSummary {
            status,
            output: Some(output),
            region: None,
        },
    }
}

fn finish(entries: Vec<BatchEntry>) -> BatchReport {
    let report = BatchReport { entries };
    log::info!(
        "batch done: {} images, {} blank, {} failed",
        report.len(),
        report.blank(),
        report.failed()
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_report() {
        let report = BatchReport::default();
        assert!(report.is_empty());
        assert_eq!(report.succeeded(), 0);
        assert_eq!(report.failed(), 0);
    }

    #[test]
    fn test_summarize_blank_has_no_output() {
        let summary = summarize(TrimOutcome::Blank, PathBuf::from("out/a.png"));
        assert_eq!(summary.status, BlankStatus::Blank);
        assert!(summary.output.is_none());
        assert!(summary.region.is_none());
    }

    #[test]
    fn test_missing_inputs_are_reported_not_fatal() {
        let dir = std::env::temp_dir().join("whitetrim-batch-missing");
        let inputs = ["/nonexistent/whitetrim/a.png", "/nonexistent/whitetrim/b.png"];
        let report = process_batch(inputs, &dir, &TrimOptions::default());
        assert_eq!(report.len(), 2);
        assert_eq!(report.failed(), 2);
        assert_eq!(report.entries()[1].input, Path::new("/nonexistent/whitetrim/b.png"));
    }
}
