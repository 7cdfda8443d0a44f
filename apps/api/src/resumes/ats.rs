//! ATS score — pure, deterministic 0–100 score over a saved conversation.
//!
//! Based on section presence, content length, and structure. Only assistant
//! messages count: that is where the drafted resume text lives.

use crate::models::message::{ChatMessage, Role};

/// Section markers that ATS systems look for (case-insensitive).
const ATS_SECTION_MARKERS: [&str; 11] = [
    "experience",
    "education",
    "skills",
    "summary",
    "professional summary",
    "work experience",
    "technical skills",
    "certifications",
    "projects",
    "contact",
    "objective",
];

/// Computes an ATS-friendly score (0–100) from resume content.
pub fn compute_ats_score(messages: &[ChatMessage]) -> u8 {
    let text: String = messages
        .iter()
        .filter(|m| m.role == Role::Assistant && !m.content.trim().is_empty())
        .map(|m| m.content.as_str())
        .collect::<Vec<_>>()
        .join("\n");
    let lower = text.to_lowercase();

    let mut score: u32 = 0;

    // Sections found (max ~55): 5 pts per marker present
    let sections_found = ATS_SECTION_MARKERS
        .iter()
        .filter(|marker| lower.contains(*marker))
        .count() as u32;
    score += (sections_found * 5).min(55);

    // Content length (max ~25): longer, structured content scores higher
    let len = text.chars().count();
    for threshold in [400, 800, 1200, 1800, 2500] {
        if len >= threshold {
            score += 5;
        }
    }

    // Basic structure (max ~20): bullets, headings, multiple sections
    if lower.contains('•') || lower.contains("- ") {
        score += 5;
    }
    if text.contains("**") || has_heading_marker(&text) {
        score += 5;
    }
    if sections_found >= 3 {
        score += 10;
    }

    score.min(100) as u8
}

/// A `#` run followed by whitespace, anywhere in the text.
fn has_heading_marker(text: &str) -> bool {
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '#' {
            while chars.peek() == Some(&'#') {
                chars.next();
            }
            if chars.peek().is_some_and(|next| next.is_whitespace()) {
                return true;
            }
        }
    }
    false
}
