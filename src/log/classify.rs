//! Line classification for unsupported-operator reports.
//!
//! Matching is case-sensitive and substring-based.

/// Marker emitted when an operator falls back to the CPU path.
pub const CANNOT_RUN_ON_GPU: &str = "cannot run on GPU";

/// Marker of the broader "some sub-expressions" diagnostic, which is excluded.
pub const NOT_ALL_EXPRESSIONS: &str = "not all expressions can be replaced";

pub fn is_unsupported_operator_line(line: &str) -> bool {
    line.contains(CANNOT_RUN_ON_GPU) && !line.contains(NOT_ALL_EXPRESSIONS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_cannot_run_on_gpu() {
        assert!(is_unsupported_operator_line(
            "!Exec <HashAggregateExec> cannot run on GPU because unsupported type"
        ));
    }

    #[test]
    fn exclusion_takes_precedence() {
        assert!(!is_unsupported_operator_line(
            "*Exec <ProjectExec> will run on GPU but not all expressions can be replaced; \
             <Foo> cannot run on GPU because x"
        ));
    }

    #[test]
    fn match_is_case_sensitive() {
        assert!(!is_unsupported_operator_line("<SortExec> Cannot run on GPU because x"));
        assert!(!is_unsupported_operator_line("<SortExec> cannot run on gpu because x"));
    }

    #[test]
    fn unrelated_and_empty_lines_do_not_match() {
        assert!(!is_unsupported_operator_line(""));
        assert!(!is_unsupported_operator_line("INFO SparkContext: Running Spark version 3.4.1"));
    }
}
