use crate::request::CoachRequest;
use crate::result::ResponseMode;

/// Schema the model must follow in structured mode.
pub const STRUCTURED_SCHEMA: &str = r#"{"tone": "<tone>", "summary": "<1-2 sentence summary>", "insight": "<one observation>", "actions": ["<step>", "<step>", "<step>"], "one_liner": "<single encouraging line>"}"#;

/// Build the system instruction for a normalized request.
///
/// Pure and deterministic: the same request and mode always produce the
/// same string.
pub fn build_system_prompt(request: &CoachRequest, mode: ResponseMode) -> String {
    let budget = request.length.budget();

    let mut prompt = format!(
        "You are a coach. Summarize what the user said, then coach them in a {tone} tone.\n\
         - Be short and clear, focus on the core of what was said.\n\
         - No insults, no blame.\n\
         - Answer in {guide}, in language \"{lang}\".",
        tone = request.tone.as_str(),
        guide = budget.sentence_guide,
        lang = request.lang,
    );

    if mode == ResponseMode::Structured {
        prompt.push_str("\nRespond with only a JSON object, no other text, matching exactly:\n");
        prompt.push_str(STRUCTURED_SCHEMA);
    }

    prompt
}
