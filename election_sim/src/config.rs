// ********* Input data structures ***********

use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// The closed set of trait categories shared by all the candidates.
///
/// Issue tags are expected to reference these names. Tags outside of this set
/// are accepted and simply never match a trait.
pub const TRAIT_CATEGORIES: [&str; 9] = [
    "good_morals",
    "bad_morals",
    "left_politics",
    "right_politics",
    "gaming",
    "activities",
    "health",
    "other",
    "food",
];

/// Smallest value a trait can take.
pub const TRAIT_MIN: i32 = -2;
/// Largest value a trait can take.
pub const TRAIT_MAX: i32 = 2;

/// The classification of an issue. It selects which weight multiplier applies.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueKind {
    Serious,
    Funny,
    Mixed,
}

impl IssueKind {
    /// Reads a type label. The comparison ignores the case. Anything that is not
    /// `serious` or `funny` is a mixed issue.
    pub fn from_label(label: &str) -> IssueKind {
        match label.trim().to_lowercase().as_str() {
            "serious" => IssueKind::Serious,
            "funny" => IssueKind::Funny,
            _ => IssueKind::Mixed,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            IssueKind::Serious => "serious",
            IssueKind::Funny => "funny",
            IssueKind::Mixed => "mixed",
        }
    }
}

/// A debate issue, as parsed from one line of the issues file.
#[derive(PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct Issue {
    pub text: String,
    pub tags: Vec<String>,
    #[serde(rename = "type")]
    pub kind: IssueKind,
    pub weight: f64,
}

/// A running candidate.
///
/// The traits cover every entry of [TRAIT_CATEGORIES]. The score is only
/// updated by the round engine.
#[derive(PartialEq, Debug, Clone)]
pub struct Candidate {
    pub name: String,
    pub traits: BTreeMap<String, i32>,
    pub quote: String,
    pub score: f64,
}

// ******** Output data structures *********

#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash)]
pub enum VoteDirection {
    For,
    Against,
}

impl VoteDirection {
    pub fn from_bool(vote_for: bool) -> VoteDirection {
        if vote_for {
            VoteDirection::For
        } else {
            VoteDirection::Against
        }
    }

    pub fn is_for(&self) -> bool {
        *self == VoteDirection::For
    }
}

impl Display for VoteDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VoteDirection::For => write!(f, "For"),
            VoteDirection::Against => write!(f, "Against"),
        }
    }
}

/// The vote of one candidate during one round.
///
/// There is exactly one record per candidate and per round.
#[derive(PartialEq, Debug, Clone)]
pub struct VoteRecord {
    /// Round number, starting at 1.
    pub round: u32,
    pub issue: String,
    pub candidate: String,
    pub vote: VoteDirection,
    /// True if the cast vote follows the natural lean of the candidate.
    pub aligned: bool,
    pub score_delta: f64,
}

/// Errors that prevent the simulation from completing.
#[derive(Eq, PartialEq, Debug, Clone)]
pub enum SimErrors {
    /// A pool of lines (quotes, reasons) was needed but is empty.
    EmptyPool(&'static str),
}

impl Error for SimErrors {}

impl Display for SimErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SimErrors::EmptyPool(pool) => write!(f, "cannot draw from an empty pool of {}", pool),
        }
    }
}

// ********* Configuration **********

/// The knobs of a session.
#[derive(PartialEq, Debug, Clone)]
pub struct SimRules {
    /// Multiplier applied to the raw trait alignment.
    pub pref: f64,
    /// Probability of flipping a vote at random, in [0, 1].
    pub chaos: f64,
    /// Added to the alignment before deciding the vote. Positive favours `For`.
    pub bias: f64,
    pub serious_mult: f64,
    pub funny_mult: f64,
    pub mixed_mult: f64,
    /// Number of candidates that justify their vote after each round.
    pub justify: usize,
    /// Number of issues debated.
    pub rounds: usize,
    /// Maximum number of candidates. 0 means all the names.
    pub candidate_limit: usize,
}

impl SimRules {
    pub const DEFAULT_RULES: SimRules = SimRules {
        pref: 1.0,
        chaos: 0.1,
        bias: 0.0,
        serious_mult: 1.0,
        funny_mult: 1.0,
        mixed_mult: 1.0,
        justify: 2,
        rounds: 6,
        candidate_limit: 5,
    };
}

impl Default for SimRules {
    fn default() -> Self {
        SimRules::DEFAULT_RULES
    }
}
