//! Module to locate measurement directories produced by the testbed.
//!
//! Every run of the testbed stores its results in its own directory, usually named by the
//! timestamp at which the run started (e.g., `results/2023-05-02_10-13-44/`). The analysis
//! scripts only need one such directory, namely the one that contains the file they want to
//! process.

use std::{
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
};

use itertools::Itertools;

/// Errors raised while resolving a measurement directory.
#[derive(Debug, thiserror::Error)]
pub enum MeasurementError {
    #[error("No measurement in {root:?} contains {contains:?}")]
    NotFound { root: PathBuf, contains: String },
    #[error("Invalid search pattern: {0}")]
    Pattern(#[from] glob::PatternError),
    #[error("Cannot access a measurement: {0}")]
    Glob(#[from] glob::GlobError),
    #[error("IO Error: {0}")]
    Io(#[from] io::Error),
    #[error("Invalid choice {0:?}")]
    InvalidChoice(String),
}

/// How to pick one of several matching measurements.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Selection {
    /// Pick the most recent measurement without asking.
    #[default]
    Latest,
    /// Ask the user on stdin, defaulting to the most recent measurement.
    Interactive,
}

/// Find all directories below `root` (including `root` itself) that contain a file named
/// `contains`. The result is sorted in natural order, such that the most recent (timestamped)
/// measurement comes last.
pub fn list_measurements(
    root: impl AsRef<Path>,
    contains: impl AsRef<str>,
) -> Result<Vec<PathBuf>, MeasurementError> {
    let root = root.as_ref();
    let pattern = format!(
        "{}/**/{}",
        glob::Pattern::escape(&root.to_string_lossy()),
        glob::Pattern::escape(contains.as_ref())
    );
    log::trace!("Searching measurements with pattern {pattern:?}");

    let mut measurements = Vec::new();
    for file in glob::glob(&pattern)? {
        let file = file?;
        if !file.is_file() {
            continue;
        }
        if let Some(dir) = file.parent() {
            measurements.push(dir.to_path_buf());
        }
    }

    Ok(measurements
        .into_iter()
        .unique()
        .sorted_by(|a, b| human_sort::compare(&a.to_string_lossy(), &b.to_string_lossy()))
        .collect())
}

/// Select a measurement directory below `root` that contains a file named `contains`.
pub fn select_measurement(
    root: impl AsRef<Path>,
    contains: impl AsRef<str>,
    mode: Selection,
) -> Result<PathBuf, MeasurementError> {
    let root = root.as_ref();
    let contains = contains.as_ref();
    let candidates = list_measurements(root, contains)?;
    if candidates.is_empty() {
        return Err(MeasurementError::NotFound {
            root: root.to_path_buf(),
            contains: contains.to_string(),
        });
    }
    log::debug!("Found {} measurements containing {contains}", candidates.len());

    match mode {
        Selection::Latest => select_from(candidates, io::empty(), io::sink()),
        Selection::Interactive => select_from(candidates, io::stdin().lock(), io::stderr()),
    }
}

/// Let the user pick one of the `candidates` by reading an index from `input`. The list of
/// candidates is written to `output`. An empty answer (or end of input) picks the last one.
pub fn select_from(
    mut candidates: Vec<PathBuf>,
    mut input: impl BufRead,
    mut output: impl Write,
) -> Result<PathBuf, MeasurementError> {
    let Some(latest) = candidates.len().checked_sub(1) else {
        return Err(MeasurementError::InvalidChoice(String::new()));
    };

    for (i, candidate) in candidates.iter().enumerate() {
        writeln!(output, "{i:>3}: {}", candidate.display())?;
    }
    write!(output, "Select a measurement [{latest}]: ")?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    let answer = answer.trim();

    let idx = if answer.is_empty() {
        latest
    } else {
        match answer.parse::<usize>() {
            Ok(idx) if idx <= latest => idx,
            _ => return Err(MeasurementError::InvalidChoice(answer.to_string())),
        }
    };

    Ok(candidates.swap_remove(idx))
}
