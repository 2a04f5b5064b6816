//! Match assembly shared by the vector and lexical scoring paths.

use precedent_types::ancestry::{AncestryMatch, MatchOutcome};
use precedent_types::decision::DecisionCandidate;

/// Maximum words kept in a match summary before the ellipsis marker.
const SUMMARY_MAX_WORDS: usize = 60;

/// Blockers and required revisions each contribute at most this many lines.
const MAX_LESSON_ITEMS: usize = 2;

/// Round a similarity to 4 decimals for the output contract.
pub(crate) fn round_similarity(similarity: f64) -> f64 {
    (similarity * 10_000.0).round() / 10_000.0
}

/// Build the output match for a scored candidate.
pub(crate) fn build_match(candidate: &DecisionCandidate, similarity: f64) -> AncestryMatch {
    AncestryMatch {
        decision_id: candidate.id.clone(),
        decision_name: candidate.name.clone(),
        similarity: round_similarity(similarity),
        outcome: MatchOutcome {
            gate_decision: candidate.gate_decision.clone(),
            final_recommendation: candidate.final_recommendation,
            dqs: candidate.dqs,
            run_at: candidate.last_run_at,
        },
        lessons: synthesize_lessons(candidate),
        summary: summarize(candidate),
    }
}

/// One outcome line, then up to two blockers and two required revisions.
/// A single explanatory line substitutes when neither list has entries.
fn synthesize_lessons(candidate: &DecisionCandidate) -> Vec<String> {
    let outcome_label = match candidate.final_recommendation {
        Some(recommendation) => recommendation.to_string(),
        None if !candidate.gate_decision.is_empty() => candidate.gate_decision.clone(),
        None => "No recorded outcome".to_string(),
    };
    let dqs_label = match candidate.dqs {
        Some(dqs) => format!("{dqs:.1}"),
        None => "unavailable".to_string(),
    };

    let mut lessons = vec![format!("Outcome: {outcome_label} (quality score: {dqs_label})")];
    for blocker in candidate.blockers.iter().take(MAX_LESSON_ITEMS) {
        lessons.push(format!("Blocker: {blocker}"));
    }
    for revision in candidate.required_revisions.iter().take(MAX_LESSON_ITEMS) {
        lessons.push(format!("Required revision: {revision}"));
    }
    if lessons.len() == 1 {
        lessons.push("No blockers or required revisions were recorded.".to_string());
    }
    lessons
}

/// The candidate's executive summary, else summary, else raw body text --
/// word-bounded with an ellipsis marker when truncated.
fn summarize(candidate: &DecisionCandidate) -> String {
    let source = if !candidate.executive_summary.is_empty() {
        &candidate.executive_summary
    } else if !candidate.summary.is_empty() {
        &candidate.summary
    } else {
        &candidate.body_text
    };

    let words: Vec<&str> = source.split_whitespace().collect();
    if words.len() <= SUMMARY_MAX_WORDS {
        return words.join(" ");
    }
    format!("{}...", words[..SUMMARY_MAX_WORDS].join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use precedent_types::decision::FinalRecommendation;

    fn candidate() -> DecisionCandidate {
        DecisionCandidate {
            id: "dec-a".to_string(),
            name: "SMB expansion".to_string(),
            summary: "Expand into the SMB segment".to_string(),
            body_text: "Long-form narrative".to_string(),
            executive_summary: String::new(),
            gate_decision: "Proceed".to_string(),
            dqs: Some(71.25),
            final_recommendation: Some(FinalRecommendation::Challenged),
            blockers: vec![
                "CAC exceeded model".to_string(),
                "Churn above threshold".to_string(),
                "Support load".to_string(),
            ],
            required_revisions: vec!["Rework payback model".to_string()],
            last_run_at: None,
        }
    }

    #[test]
    fn similarity_is_rounded_to_four_decimals() {
        let m = build_match(&candidate(), 0.123_456_789);
        assert_eq!(m.similarity, 0.1235);
    }

    #[test]
    fn lessons_lead_with_outcome_and_cap_items() {
        let lessons = build_match(&candidate(), 0.5).lessons;
        assert_eq!(lessons[0], "Outcome: Challenged (quality score: 71.2)");
        // 1 outcome + 2 of 3 blockers + 1 revision
        assert_eq!(lessons.len(), 4);
        assert_eq!(lessons[1], "Blocker: CAC exceeded model");
        assert_eq!(lessons[2], "Blocker: Churn above threshold");
        assert_eq!(lessons[3], "Required revision: Rework payback model");
    }

    #[test]
    fn lessons_without_findings_get_explanatory_line() {
        let mut bare = candidate();
        bare.blockers.clear();
        bare.required_revisions.clear();
        bare.final_recommendation = None;
        bare.dqs = None;

        let lessons = build_match(&bare, 0.5).lessons;
        assert_eq!(
            lessons,
            vec![
                "Outcome: Proceed (quality score: unavailable)".to_string(),
                "No blockers or required revisions were recorded.".to_string(),
            ]
        );
    }

    #[test]
    fn summary_prefers_executive_summary_and_truncates_on_words() {
        let mut c = candidate();
        c.executive_summary = "word ".repeat(100);
        let summary = build_match(&c, 0.5).summary;
        assert!(summary.ends_with("..."));
        // The marker attaches to the final kept word.
        assert_eq!(summary.split_whitespace().count(), SUMMARY_MAX_WORDS);

        c.executive_summary.clear();
        assert_eq!(build_match(&c, 0.5).summary, "Expand into the SMB segment");
    }
}
