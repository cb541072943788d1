use crate::fs::LogSource;
use crate::log::classify::is_unsupported_operator_line;
use crate::log::row::{OperatorReasonKey, UnsupportedOperatorRecord};
use crate::model::Aggregator;
use anyhow::{Context, anyhow, bail};
use std::io::BufRead;
use std::path::Path;

/// What to do with a line that is classified as a report but cannot be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum MalformedLinePolicy {
    /// Stop scanning and keep what was aggregated so far.
    #[default]
    Stop,
    /// Log the line and keep scanning.
    Skip,
}

/// Result of scanning one log stream.
#[derive(Debug)]
pub struct ScanOutcome {
    pub aggregate: Aggregator,
    pub lines_read: usize,
    pub matched: usize,
    pub skipped: usize,
    /// Failure that ended the scan before the end of the stream.
    pub error: Option<anyhow::Error>,
}

/// Extract the operator name and reason from an unsupported-operator line.
///
/// Example:
/// `!Exec <SortExec> cannot run on GPU because unsupported data types in input`
/// => ("SortExec", "unsupported data types in input")
pub fn extract_fields(line: &str) -> anyhow::Result<OperatorReasonKey> {
    // Second segment when splitting on '<', then first segment of that on '>'.
    let Some((_, after_open)) = line.split_once('<') else {
        bail!("missing '<' before operator name");
    };
    let operator_name = after_open.split('>').next().unwrap_or_default();

    let Some((_, reason)) = line.split_once("because") else {
        bail!("missing 'because' before reason");
    };

    Ok(OperatorReasonKey {
        operator_name: operator_name.to_string(),
        reason: reason.trim().to_string(),
    })
}

/// Scan a log stream line by line and aggregate unsupported-operator reports.
///
/// Read failures always end the scan. Extraction failures end it under
/// [`MalformedLinePolicy::Stop`] and are skipped under
/// [`MalformedLinePolicy::Skip`]. In both cases the aggregate holds every
/// report parsed before the failure.
pub fn scan_reader<R: BufRead>(reader: R, policy: MalformedLinePolicy) -> ScanOutcome {
    let mut out = ScanOutcome {
        aggregate: Aggregator::new(),
        lines_read: 0,
        matched: 0,
        skipped: 0,
        error: None,
    };

    for (lineno, line) in reader.lines().enumerate() {
        let lno = lineno + 1;
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                out.error = Some(anyhow!(e).context(format!("read error at line {}", lno)));
                break;
            }
        };
        out.lines_read += 1;

        if !is_unsupported_operator_line(&line) {
            continue;
        }

        match extract_fields(&line) {
            Ok(key) => {
                out.matched += 1;
                out.aggregate.record(key);
            }
            Err(e) => {
                let e = e.context(format!("cannot parse line {}: {:?}", lno, line));
                match policy {
                    MalformedLinePolicy::Stop => {
                        out.error = Some(e);
                        break;
                    }
                    MalformedLinePolicy::Skip => {
                        tracing::warn!("skipping malformed line: {:#}", e);
                        out.skipped += 1;
                    }
                }
            }
        }
    }

    out
}

/// Open `path` through `source`, scan it, and return one record per distinct
/// (operator, reason) pair.
///
/// Never fails: an open or scan failure is logged once and whatever was
/// aggregated before it is returned. The stream is closed before returning.
pub fn collect_unsupported_operators(
    source: &dyn LogSource,
    path: &Path,
    policy: MalformedLinePolicy,
) -> Vec<UnsupportedOperatorRecord> {
    let reader = match source
        .open(path)
        .with_context(|| format!("open log file {}", path.display()))
    {
        Ok(r) => r,
        Err(e) => {
            tracing::error!(
                "unexpected error while scanning {}: {:#}",
                path.display(),
                e
            );
            return Vec::new();
        }
    };

    let outcome = scan_reader(reader, policy);

    if let Some(e) = &outcome.error {
        tracing::error!(
            "unexpected error while scanning {}: {:#}",
            path.display(),
            e
        );
    }
    if outcome.aggregate.is_empty() {
        tracing::info!("no unsupported operators reported in {}", path.display());
    }
    // Every matched line is recorded exactly once.
    let total = outcome.aggregate.total();
    debug_assert_eq!(total, outcome.matched as u64);
    tracing::debug!(
        lines = outcome.lines_read,
        matched = outcome.matched,
        total,
        skipped = outcome.skipped,
        distinct = outcome.aggregate.len(),
        "scanned {}",
        path.display()
    );

    outcome.aggregate.into_records()
}
