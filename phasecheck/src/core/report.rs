//! Verification report parsing.
//!
//! The checker writes `**Status**: PASS` or `**Status**: FAIL` (any case) and,
//! for failures, an optional `**Reason**: ...` line. The first status line
//! wins; the value is the first whitespace-delimited token after the colon.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::core::types::{ReportStatus, VerificationReport};

static STATUS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?im)\*\*Status\*\*:[ \t]*(\S*)").expect("valid status line regex")
});
static REASON_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?im)\*\*Reason\*\*:[ \t]*(.*)$").expect("valid reason line regex")
});

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReportError {
    #[error("missing status line (expected '**Status**: PASS' or '**Status**: FAIL')")]
    MissingStatus,
    #[error("status line has no value (expected PASS or FAIL)")]
    EmptyStatus,
    #[error("unknown status '{0}' (expected PASS or FAIL)")]
    UnknownStatus(String),
}

/// Parse a verification report body.
pub fn parse_report(content: &str) -> Result<VerificationReport, ReportError> {
    let caps = STATUS_RE
        .captures(content)
        .ok_or(ReportError::MissingStatus)?;
    let value = &caps[1];
    if value.is_empty() {
        return Err(ReportError::EmptyStatus);
    }
    let status = match value.to_ascii_uppercase().as_str() {
        "PASS" => ReportStatus::Pass,
        "FAIL" => ReportStatus::Fail,
        _ => return Err(ReportError::UnknownStatus(value.to_string())),
    };

    let reason = match status {
        ReportStatus::Pass => None,
        ReportStatus::Fail => REASON_RE
            .captures(content)
            .map(|caps| caps[1].trim().to_string())
            .filter(|reason| !reason.is_empty()),
    };

    Ok(VerificationReport { status, reason })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_pass() {
        let report = parse_report("# Verification\n\n**Status**: PASS\n").expect("parse");
        assert_eq!(
            report,
            VerificationReport {
                status: ReportStatus::Pass,
                reason: None,
            }
        );
    }

    #[test]
    fn parses_fail_with_reason() {
        let body = "**Status**: FAIL\n**Reason**: tests failing in auth module  \n\nDetails...";
        let report = parse_report(body).expect("parse");
        assert_eq!(report.status, ReportStatus::Fail);
        assert_eq!(report.reason.as_deref(), Some("tests failing in auth module"));
    }

    #[test]
    fn fail_without_reason_has_none() {
        let report = parse_report("**Status**: FAIL\n**Reason**:   \n").expect("parse");
        assert_eq!(report.reason, None);
    }

    #[test]
    fn reason_is_ignored_on_pass() {
        let report = parse_report("**Status**: pass\n**Reason**: leftover\n").expect("parse");
        assert_eq!(report.status, ReportStatus::Pass);
        assert_eq!(report.reason, None);
    }

    #[test]
    fn status_value_is_case_insensitive() {
        assert_eq!(
            parse_report("**status**: Fail").expect("parse").status,
            ReportStatus::Fail
        );
        assert_eq!(
            parse_report("- **Status**: pAsS ✅").expect("parse").status,
            ReportStatus::Pass
        );
    }

    #[test]
    fn unknown_status_names_the_value() {
        let err = parse_report("**Status**: MAYBE\n").expect_err("unknown");
        assert_eq!(err, ReportError::UnknownStatus("MAYBE".to_string()));
        assert!(err.to_string().contains("MAYBE"));
    }

    #[test]
    fn missing_status_line_is_an_error() {
        assert_eq!(
            parse_report("Looks good to me.\n"),
            Err(ReportError::MissingStatus)
        );
    }

    #[test]
    fn empty_status_value_is_an_error() {
        assert_eq!(
            parse_report("**Status**:\nPASS\n"),
            Err(ReportError::EmptyStatus)
        );
    }

    #[test]
    fn trailing_punctuation_is_part_of_the_value() {
        assert_eq!(
            parse_report("**Status**: PASS."),
            Err(ReportError::UnknownStatus("PASS.".to_string()))
        );
        assert_eq!(
            parse_report("**Status**: FAIL,"),
            Err(ReportError::UnknownStatus("FAIL,".to_string()))
        );
    }

    #[test]
    fn first_status_line_wins() {
        let report = parse_report("**Status**: FAIL\n**Status**: PASS\n").expect("parse");
        assert_eq!(report.status, ReportStatus::Fail);
    }
}
