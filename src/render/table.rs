use crate::model::ReportData;

const HEADERS: [&str; 3] = ["Operator", "Count", "Reason"];

/// Render the report as an aligned plain-text table followed by a totals line.
pub fn render_table_report(data: &ReportData) -> String {
    if data.records.is_empty() {
        return format!("No unsupported operators found in {}\n", data.log);
    }

    let counts: Vec<String> = data.records.iter().map(|r| r.count.to_string()).collect();
    let op_width = data
        .records
        .iter()
        .map(|r| r.operator_name.chars().count())
        .chain([HEADERS[0].len()])
        .max()
        .unwrap_or_default();
    let count_width = counts
        .iter()
        .map(String::len)
        .chain([HEADERS[1].len()])
        .max()
        .unwrap_or_default();

    let mut out = format!(
        "{:<op_width$}  {:>count_width$}  {}\n",
        HEADERS[0], HEADERS[1], HEADERS[2]
    );
    for (record, count) in data.records.iter().zip(&counts) {
        out.push_str(&format!(
            "{:<op_width$}  {:>count_width$}  {}\n",
            record.operator_name, count, record.reason
        ));
    }
    out.push_str(&format!(
        "\n{} occurrence(s), {} distinct operator(s), {} (operator, reason) pair(s) in {}\n",
        data.total_occurrences,
        data.distinct_operators,
        data.records.len(),
        data.log
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log::UnsupportedOperatorRecord;
    use pretty_assertions::assert_eq;

    fn record(op: &str, count: u64, reason: &str) -> UnsupportedOperatorRecord {
        UnsupportedOperatorRecord {
            operator_name: op.to_string(),
            count,
            reason: reason.to_string(),
        }
    }

    #[test]
    fn table_aligns_columns() {
        let data = ReportData {
            log: "driver.log".to_string(),
            total_occurrences: 13,
            distinct_operators: 2,
            records: vec![
                record("HashAggregateExec", 12, "unsupported type"),
                record("SortExec", 1, "udf"),
            ],
        };
        let expected = "\
Operator           Count  Reason
HashAggregateExec     12  unsupported type
SortExec               1  udf

13 occurrence(s), 2 distinct operator(s), 2 (operator, reason) pair(s) in driver.log
";
        assert_eq!(render_table_report(&data), expected);
    }

    #[test]
    fn empty_report_says_so() {
        let data = ReportData {
            log: "driver.log".to_string(),
            total_occurrences: 0,
            distinct_operators: 0,
            records: vec![],
        };
        assert_eq!(
            render_table_report(&data),
            "No unsupported operators found in driver.log\n"
        );
    }
}
