//! Historical decision candidates considered for ancestry ranking.
//!
//! Candidates are read-only snapshots of prior strategic decisions and their
//! recorded review outcomes. They are loaded from the external store with the
//! current decision excluded, bounded by the retrieval candidate limit.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

/// Final recommendation recorded by a completed review run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FinalRecommendation {
    Approved,
    Challenged,
    Blocked,
}

impl fmt::Display for FinalRecommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FinalRecommendation::Approved => write!(f, "Approved"),
            FinalRecommendation::Challenged => write!(f, "Challenged"),
            FinalRecommendation::Blocked => write!(f, "Blocked"),
        }
    }
}

impl FromStr for FinalRecommendation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Approved" => Ok(FinalRecommendation::Approved),
            "Challenged" => Ok(FinalRecommendation::Challenged),
            "Blocked" => Ok(FinalRecommendation::Blocked),
            other => Err(format!("invalid final recommendation: '{other}'")),
        }
    }
}

/// A historical decision and its recorded review outcome.
///
/// All text fields may be empty; `dqs` (decision quality score) and
/// `final_recommendation` are absent for decisions whose review never
/// completed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionCandidate {
    pub id: String,
    pub name: String,
    pub summary: String,
    pub body_text: String,
    pub executive_summary: String,
    /// Workflow gate verdict (e.g., "Proceed", "Revise"), free-form.
    pub gate_decision: String,
    /// Decision quality score from the review run, if one completed.
    pub dqs: Option<f64>,
    pub final_recommendation: Option<FinalRecommendation>,
    pub blockers: Vec<String>,
    pub required_revisions: Vec<String>,
    pub last_run_at: Option<DateTime<Utc>>,
}

impl DecisionCandidate {
    /// The text a candidate is embedded and lexically scored against:
    /// name, summary, body, and executive summary concatenated.
    pub fn composed_text(&self) -> String {
        [
            self.name.as_str(),
            self.summary.as_str(),
            self.body_text.as_str(),
            self.executive_summary.as_str(),
        ]
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join("\n")
    }
}
