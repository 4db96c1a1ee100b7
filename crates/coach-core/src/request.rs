use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_LANG: &str = "ko";

#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("text is required")]
    EmptyText,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    #[default]
    Calm,
    Coach,
    Mentor,
    Strict,
    Friendly,
}

impl Tone {
    /// Parse a tone parameter; anything outside the allow-list collapses to `Calm`.
    pub fn from_param(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "calm" => Tone::Calm,
            "coach" => Tone::Coach,
            "mentor" => Tone::Mentor,
            "strict" => Tone::Strict,
            "friendly" => Tone::Friendly,
            _ => Tone::Calm,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Calm => "calm",
            Tone::Coach => "coach",
            Tone::Mentor => "mentor",
            Tone::Strict => "strict",
            Tone::Friendly => "friendly",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Length {
    Short,
    #[default]
    Medium,
    Long,
}

/// Output budget derived from the requested length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthBudget {
    pub max_output_tokens: u32,
    pub sentence_guide: &'static str,
}

impl Length {
    /// Parse a length parameter; anything outside the allow-list collapses to `Medium`.
    pub fn from_param(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "short" => Length::Short,
            "medium" => Length::Medium,
            "long" => Length::Long,
            _ => Length::Medium,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Length::Short => "short",
            Length::Medium => "medium",
            Length::Long => "long",
        }
    }

    pub fn budget(&self) -> LengthBudget {
        match self {
            Length::Short => LengthBudget {
                max_output_tokens: 180,
                sentence_guide: "2-3 sentences",
            },
            Length::Medium => LengthBudget {
                max_output_tokens: 300,
                sentence_guide: "4-7 sentences",
            },
            Length::Long => LengthBudget {
                max_output_tokens: 450,
                sentence_guide: "8-12 sentences",
            },
        }
    }
}

/// Raw inbound request body. All fields are optional at the wire level;
/// normalization applies the defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CoachBody {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub tone: Option<String>,
    #[serde(default)]
    pub length: Option<String>,
    #[serde(default)]
    pub lang: Option<String>,
}

/// Normalized coach request, constructed per request and discarded after
/// the response is sent.
#[derive(Debug, Clone, PartialEq)]
pub struct CoachRequest {
    pub text: String,
    pub tone: Tone,
    pub length: Length,
    pub lang: String,
}

impl CoachRequest {
    /// Normalize a raw body: trim the text, reject empty input and apply
    /// the tone/length/lang defaults.
    pub fn normalize(body: &CoachBody) -> Result<Self, ValidationError> {
        let text = body.text.trim();
        if text.is_empty() {
            return Err(ValidationError::EmptyText);
        }

        let lang = body
            .lang
            .as_deref()
            .map(str::trim)
            .filter(|lang| !lang.is_empty())
            .unwrap_or(DEFAULT_LANG);

        Ok(Self {
            text: text.to_string(),
            tone: body
                .tone
                .as_deref()
                .map(Tone::from_param)
                .unwrap_or_default(),
            length: body
                .length
                .as_deref()
                .map(Length::from_param)
                .unwrap_or_default(),
            lang: lang.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(text: &str) -> CoachBody {
        CoachBody {
            text: text.to_string(),
            ..CoachBody::default()
        }
    }

    #[test]
    fn normalize_trims_text() {
        let request = CoachRequest::normalize(&body("  hello  ")).unwrap();
        assert_eq!(request.text, "hello");
    }

    #[test]
    fn normalize_rejects_empty_text() {
        assert_eq!(
            CoachRequest::normalize(&body("")),
            Err(ValidationError::EmptyText)
        );
    }

    #[test]
    fn normalize_rejects_whitespace_only_text() {
        assert_eq!(
            CoachRequest::normalize(&body("   \n\t ")),
            Err(ValidationError::EmptyText)
        );
    }

    #[test]
    fn normalize_applies_defaults() {
        let request = CoachRequest::normalize(&body("hello")).unwrap();
        assert_eq!(request.tone, Tone::Calm);
        assert_eq!(request.length, Length::Medium);
        assert_eq!(request.lang, "ko");
    }

    #[test]
    fn unknown_tone_collapses_to_calm() {
        assert_eq!(Tone::from_param("sarcastic"), Tone::Calm);
        assert_eq!(Tone::from_param(""), Tone::Calm);
        assert_eq!(Tone::from_param(" MENTOR "), Tone::Mentor);
    }

    #[test]
    fn unknown_length_collapses_to_medium() {
        assert_eq!(Length::from_param("gigantic"), Length::Medium);
        assert_eq!(Length::from_param(" SHORT"), Length::Short);
    }

    #[test]
    fn length_budget_lookup() {
        assert_eq!(Length::Short.budget().max_output_tokens, 180);
        assert_eq!(Length::Medium.budget().max_output_tokens, 300);
        assert_eq!(Length::Long.budget().max_output_tokens, 450);
        assert_eq!(Length::Long.budget().sentence_guide, "8-12 sentences");
    }

    #[test]
    fn unknown_length_gets_medium_budget() {
        let budget = Length::from_param("huge").budget();
        assert_eq!(budget.max_output_tokens, 300);
        assert_eq!(budget.sentence_guide, "4-7 sentences");
    }

    #[test]
    fn empty_lang_falls_back_to_default() {
        let request = CoachRequest::normalize(&CoachBody {
            text: "hello".to_string(),
            lang: Some("  ".to_string()),
            ..CoachBody::default()
        })
        .unwrap();
        assert_eq!(request.lang, "ko");
    }

    #[test]
    fn explicit_lang_is_kept() {
        let request = CoachRequest::normalize(&CoachBody {
            text: "hello".to_string(),
            lang: Some("en".to_string()),
            ..CoachBody::default()
        })
        .unwrap();
        assert_eq!(request.lang, "en");
    }
}
