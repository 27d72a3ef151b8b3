//! Prompt constants and builders for the coach feature.

use crate::coach::feedback::{CoachContext, Metrics};

/// System prompt for feedback generation. High temperature plus the
/// non-repetition instruction keep successive feedback varied.
pub const COACH_SYSTEM: &str = "You are an expert communication coach for AptiVerse. \
    You must produce varied, non-repetitive feedback every time. \
    Never repeat phrasing from any previous feedback the user supplies. \
    Use the provided metrics and transcript to be specific and practical. \
    Write 4 to 6 sentences. \
    Be professional, concise, and actionable. No markdown, no bullets, plain text only. \
    Do not mention being an AI model or policies.";

/// Rounds a raw metric to the nearest whole count; non-finite input counts
/// as zero (malformed metrics default to zero).
pub fn round_count(value: f64) -> i64 {
    if value.is_finite() {
        value.round() as i64
    } else {
        0
    }
}

/// Formats a confidence ratio as a whole percentage, e.g. `83%`. Out-of-range
/// input is clamped to [0, 1] so a malformed value cannot distort the prompt.
pub fn format_confidence(confidence: f64) -> String {
    let ratio = if confidence.is_finite() {
        confidence.clamp(0.0, 1.0)
    } else {
        0.0
    };
    format!("{}%", round_count(ratio * 100.0))
}

/// Builds the data-bearing user prompt for feedback generation.
pub fn coach_user_prompt(
    paragraph: &str,
    transcript: &str,
    metrics: &Metrics,
    context: Option<&CoachContext>,
    previous_feedback: Option<&str>,
) -> String {
    let langs = context
        .and_then(|c| c.langs.as_deref())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or("General");
    let company = context
        .and_then(|c| c.company.as_deref())
        .map(str::trim)
        .filter(|s| !s.is_empty());

    let role_line = match company {
        Some(company) => format!("Role focus: {langs} at {company}."),
        None => format!("Role focus: {langs}."),
    };

    let mut lines = vec![
        "Context:".to_string(),
        role_line,
        String::new(),
        "Reading paragraph:".to_string(),
        paragraph.to_string(),
        String::new(),
        "User transcript:".to_string(),
        transcript.to_string(),
        String::new(),
        "Metrics:".to_string(),
        format!("Speed: {} WPM", round_count(metrics.speed)),
        format!("Confidence: {}", format_confidence(metrics.confidence)),
        format!("Fillers: {}", round_count(metrics.fillers)),
        format!("Pauses: {}", round_count(metrics.pauses)),
    ];

    if let Some(previous) = previous_feedback.map(str::trim).filter(|s| !s.is_empty()) {
        lines.push(String::new());
        lines.push(format!("Previous feedback (avoid repeating it): {previous}"));
    }

    lines.extend([
        String::new(),
        "Task:".to_string(),
        "Give 4 to 6 sentences:".to_string(),
        "1) One sentence praising something specific.".to_string(),
        "2) Two to three sentences of corrections referencing the metrics and/or transcript."
            .to_string(),
        "3) One sentence with a concrete drill for the next attempt.".to_string(),
        "Use numbers naturally (e.g., WPM, filler count, confidence %).".to_string(),
    ]);

    lines.join("\n")
}
