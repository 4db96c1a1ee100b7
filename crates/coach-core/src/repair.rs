use thiserror::Error;

use crate::result::CoachReport;

#[derive(Debug, Error, PartialEq)]
#[error("JSON parse failed")]
pub struct RepairError;

/// Recover a `CoachReport` from raw model output.
///
/// Two ordered attempts: a strict parse of the trimmed text, then a strict
/// parse of the substring between the first `{` and the last `}`. The
/// post-parse normalization runs on both paths.
pub fn repair_report(raw: &str) -> Result<CoachReport, RepairError> {
    let trimmed = raw.trim();

    parse_strict(trimmed)
        .or_else(|| bracket_substring(trimmed).and_then(parse_strict))
        .map(CoachReport::normalize)
        .ok_or(RepairError)
}

fn parse_strict(text: &str) -> Option<CoachReport> {
    serde_json::from_str(text).ok()
}

fn bracket_substring(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if start >= end {
        return None;
    }
    Some(&text[start..=end])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::{ACTION_FILLER, SUMMARY_FALLBACK};

    #[test]
    fn valid_json_parses_without_alteration() {
        let raw = r#"{
            "tone": "calm",
            "summary": "s",
            "insight": "i",
            "actions": ["a", "b", "c"],
            "one_liner": "o"
        }"#;
        let report = repair_report(raw).unwrap();
        assert_eq!(report.tone, "calm");
        assert_eq!(report.summary, "s");
        assert_eq!(report.insight, "i");
        assert_eq!(report.actions, vec!["a", "b", "c"]);
        assert_eq!(report.one_liner, "o");
    }

    #[test]
    fn surrounding_text_falls_back_to_bracket_substring() {
        let raw = "Sure! {\"summary\":\"s\",\"actions\":[\"a\"]} thanks";
        let report = repair_report(raw).unwrap();
        assert_eq!(report.summary, "s");
        assert_eq!(
            report.actions,
            vec!["a".to_string(), ACTION_FILLER.to_string(), ACTION_FILLER.to_string()]
        );
    }

    #[test]
    fn clean_parse_still_normalizes() {
        let raw = r#"{"summary": "", "actions": ["a", "b", "c", "d", "e"]}"#;
        let report = repair_report(raw).unwrap();
        assert_eq!(report.summary, SUMMARY_FALLBACK);
        assert_eq!(report.actions, vec!["a", "b", "c"]);
    }

    #[test]
    fn unparseable_text_is_a_repair_error() {
        assert_eq!(repair_report("no json here"), Err(RepairError));
    }

    #[test]
    fn broken_json_inside_brackets_is_a_repair_error() {
        assert_eq!(repair_report("prefix {not json} suffix"), Err(RepairError));
    }

    #[test]
    fn reversed_brackets_are_a_repair_error() {
        assert_eq!(repair_report("} backwards {"), Err(RepairError));
    }

    #[test]
    fn absent_actions_are_padded() {
        let report = repair_report(r#"{"summary": "s"}"#).unwrap();
        assert_eq!(report.actions, vec![ACTION_FILLER; 3]);
    }

    #[test]
    fn leading_and_trailing_whitespace_is_tolerated() {
        let report = repair_report("  \n{\"summary\":\"s\"}\n  ").unwrap();
        assert_eq!(report.summary, "s");
    }
}
