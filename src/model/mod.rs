//! Aggregation model: running counts per (operator, reason) and report data.

use crate::Result;
use crate::log::UnsupportedOperatorRecord;
use crate::log::row::OperatorReasonKey;
use anyhow::Context;
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;

/// Running count per (operator, reason) pair for a single scan.
#[derive(Debug, Clone, Default)]
pub struct Aggregator {
    counts: BTreeMap<OperatorReasonKey, u64>,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, key: OperatorReasonKey) {
        *self.counts.entry(key).or_insert(0) += 1;
    }

    /// Sum of all counts, i.e. the number of reports recorded.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// One record per distinct key, ordered by operator then reason.
    pub fn into_records(self) -> Vec<UnsupportedOperatorRecord> {
        self.counts
            .into_iter()
            .map(|(key, count)| UnsupportedOperatorRecord {
                operator_name: key.operator_name,
                count,
                reason: key.reason,
            })
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum SortOrder {
    /// Most frequent first.
    #[default]
    Count,
    /// Operator name, then reason.
    Name,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportData {
    pub log: String,
    pub total_occurrences: u64,
    pub distinct_operators: usize,
    pub records: Vec<UnsupportedOperatorRecord>,
}

/// Build report data. Performs:
/// - optional filtering of records by an operator-name regex
/// - ordering per `sort`
/// - totals over the kept records
pub fn build_report_data(
    log: &str,
    mut records: Vec<UnsupportedOperatorRecord>,
    sort: SortOrder,
    operator_filter: Option<&str>,
) -> Result<ReportData> {
    if let Some(pattern) = operator_filter {
        let re = Regex::new(pattern)
            .with_context(|| format!("invalid operator filter {:?}", pattern))?;
        records.retain(|r| re.is_match(&r.operator_name));
    }

    match sort {
        SortOrder::Count => records.sort_by(|a, b| {
            b.count
                .cmp(&a.count)
                .then_with(|| a.operator_name.cmp(&b.operator_name))
                .then_with(|| a.reason.cmp(&b.reason))
        }),
        SortOrder::Name => records.sort_by(|a, b| {
            a.operator_name
                .cmp(&b.operator_name)
                .then_with(|| a.reason.cmp(&b.reason))
        }),
    }

    let total_occurrences = records.iter().map(|r| r.count).sum();
    let mut operators: Vec<&str> = records.iter().map(|r| r.operator_name.as_str()).collect();
    operators.sort_unstable();
    operators.dedup();

    Ok(ReportData {
        log: log.to_string(),
        total_occurrences,
        distinct_operators: operators.len(),
        records,
    })
}
