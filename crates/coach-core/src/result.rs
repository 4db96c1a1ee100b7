use serde::{Deserialize, Deserializer, Serialize};

/// Substituted when the model returns an empty or missing summary.
pub const SUMMARY_FALLBACK: &str = "(요약이 비어 있어요)";

/// Pads the actions list up to the required length.
pub const ACTION_FILLER: &str = "(추가 행동 없음)";

const ACTIONS_LEN: usize = 3;

/// How the upstream completion is returned to the caller, selected once
/// at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseMode {
    Plain,
    #[default]
    Structured,
}

/// Structured coaching record produced in `ResponseMode::Structured`.
///
/// Every field is defaulted so a partial model response still parses;
/// `normalize` then enforces the field-level guarantees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoachReport {
    #[serde(default)]
    pub tone: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub insight: String,
    #[serde(default, deserialize_with = "lenient_strings")]
    pub actions: Vec<String>,
    #[serde(default)]
    pub one_liner: String,
}

impl CoachReport {
    /// Enforce the report invariants: a non-empty summary and exactly three
    /// action entries. Must run on every parse, including clean ones.
    pub fn normalize(mut self) -> Self {
        if self.summary.trim().is_empty() {
            self.summary = SUMMARY_FALLBACK.to_string();
        }
        self.actions.truncate(ACTIONS_LEN);
        while self.actions.len() < ACTIONS_LEN {
            self.actions.push(ACTION_FILLER.to_string());
        }
        self
    }
}

/// Final coach payload: freeform text or a structured report.
#[derive(Debug, Clone, PartialEq)]
pub enum CoachResult {
    PlainText(String),
    Structured(CoachReport),
}

/// Accept whatever the model put under `actions`: arrays keep their string
/// entries (scalars are stringified), any non-array value resets to empty.
fn lenient_strings<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let actions = match value {
        serde_json::Value::Array(items) => items
            .into_iter()
            .map(|item| match item {
                serde_json::Value::String(text) => text,
                other => other.to_string(),
            })
            .collect(),
        _ => Vec::new(),
    };
    Ok(actions)
}
