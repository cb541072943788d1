use serde::Serialize;

/// Aggregation key: one operator together with the reason it fell back.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OperatorReasonKey {
    pub operator_name: String,
    pub reason: String,
}

/// One distinct (operator, reason) pair and how often it was reported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnsupportedOperatorRecord {
    pub operator_name: String,
    pub count: u64,
    pub reason: String,
}
