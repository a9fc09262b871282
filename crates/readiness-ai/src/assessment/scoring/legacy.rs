//! First-generation intake scorer kept as an independent code path.
//!
//! The flat map below predates the four-area table and uses a different
//! defaulting policy: an answer set that matches no known scoring key
//! produces the fixed midpoint 50, not 0. The two scorers must not be
//! merged for that reason.

use super::super::domain::{AnswerSet, AnswerValue};

/// Fallback returned when no submitted answer matches a scoring key.
pub const DEFAULT_SCORE: u8 = 50;

struct LegacyQuestion {
    id: &'static str,
    options: &'static [(&'static str, u32)],
}

const LEGACY_QUESTIONS: &[LegacyQuestion] = &[
    LegacyQuestion {
        id: "current_tech",
        options: &[("high", 25), ("medium", 15), ("low", 5), ("none", 0)],
    },
    LegacyQuestion {
        id: "team_size",
        options: &[("large", 20), ("medium", 15), ("small", 10), ("solo", 5)],
    },
    LegacyQuestion {
        id: "budget",
        options: &[("high", 25), ("medium", 15), ("low", 8), ("minimal", 3)],
    },
    LegacyQuestion {
        id: "urgency",
        options: &[
            ("immediate", 20),
            ("soon", 15),
            ("exploring", 10),
            ("no_rush", 5),
        ],
    },
    LegacyQuestion {
        id: "data_usage",
        options: &[
            ("extensive", 15),
            ("moderate", 10),
            ("minimal", 5),
            ("none", 0),
        ],
    },
    LegacyQuestion {
        id: "automation_interest",
        options: &[
            ("very_interested", 15),
            ("interested", 10),
            ("somewhat", 5),
            ("not_interested", 0),
        ],
    },
];

/// Computes the single overall readiness score for the legacy form shape.
///
/// The denominator accumulates the maximum of every question that was
/// actually answered with a recognized token, so partially-filled forms are
/// graded against what they attempted rather than the full form.
pub fn legacy_score(answers: &AnswerSet) -> u8 {
    let mut score: u32 = 0;
    let mut total_possible: u32 = 0;

    for question in LEGACY_QUESTIONS {
        let Some(AnswerValue::Single(token)) = answers.get(question.id) else {
            continue;
        };
        let Some((_, points)) = question
            .options
            .iter()
            .find(|(option, _)| *option == token.as_str())
        else {
            continue;
        };

        score += points;
        total_possible += question
            .options
            .iter()
            .map(|(_, points)| *points)
            .max()
            .unwrap_or(0);
    }

    if total_possible == 0 {
        return DEFAULT_SCORE;
    }

    let normalized = (f64::from(score) / f64::from(total_possible)) * 100.0;
    normalized.round().clamp(0.0, 100.0) as u8
}

/// Flat 5-tier recommendation keyed directly on the overall score, distinct
/// from the four-area tier table.
pub fn legacy_recommendation(score: u8) -> &'static str {
    if score >= 80 {
        "Excellent! You're ready for advanced AI implementation. Let's discuss enterprise solutions."
    } else if score >= 60 {
        "Great potential! You're well-positioned for AI adoption. Let's start with high-impact solutions."
    } else if score >= 40 {
        "Good foundation! With some preparation, you can successfully implement AI solutions."
    } else if score >= 20 {
        "Getting started! Let's begin with simple automation and build from there."
    } else {
        "Perfect timing! Let's explore how AI can transform your business step by step."
    }
}
