//! The fixed application pipeline and its single transition rule.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A column of the board. Order of declaration is pipeline order.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Stage {
    #[default]
    #[serde(rename = "To Apply")]
    ToApply,
    #[serde(rename = "Applied")]
    Applied,
    #[serde(rename = "Interviewing")]
    Interviewing,
    #[serde(rename = "Offer")]
    Offer,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown stage: {0:?}")]
pub struct UnknownStage(pub String);

impl Stage {
    /// Every stage, in pipeline order.
    pub const ALL: [Stage; 4] = [
        Stage::ToApply,
        Stage::Applied,
        Stage::Interviewing,
        Stage::Offer,
    ];

    /// Text stored in the `status` column and shown as the column heading.
    pub fn label(self) -> &'static str {
        match self {
            Stage::ToApply => "To Apply",
            Stage::Applied => "Applied",
            Stage::Interviewing => "Interviewing",
            Stage::Offer => "Offer",
        }
    }

    fn index(self) -> usize {
        self as usize
    }

    /// The stage immediately after this one, `None` at `Offer`.
    pub fn next(self) -> Option<Stage> {
        Self::ALL.get(self.index() + 1).copied()
    }

    pub fn is_terminal(self) -> bool {
        self.next().is_none()
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Stage {
    type Err = UnknownStage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|stage| stage.label() == s)
            .ok_or_else(|| UnknownStage(s.to_string()))
    }
}

/// Transition for a stored status label.
///
/// Returns `None` both at the terminal stage and for labels that are not a
/// stage at all; neither case is an error.
pub fn next_stage(current: &str) -> Option<Stage> {
    current.parse::<Stage>().ok().and_then(Stage::next)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_follows_fixed_order() {
        assert_eq!(Stage::ToApply.next(), Some(Stage::Applied));
        assert_eq!(Stage::Applied.next(), Some(Stage::Interviewing));
        assert_eq!(Stage::Interviewing.next(), Some(Stage::Offer));
        assert_eq!(Stage::Offer.next(), None);
    }

    #[test]
    fn test_only_offer_is_terminal() {
        let terminal: Vec<Stage> = Stage::ALL.into_iter().filter(|s| s.is_terminal()).collect();
        assert_eq!(terminal, vec![Stage::Offer]);
    }

    #[test]
    fn test_next_stage_by_label() {
        assert_eq!(next_stage("To Apply"), Some(Stage::Applied));
        assert_eq!(next_stage("Interviewing"), Some(Stage::Offer));
        assert_eq!(next_stage("Offer"), None);
    }

    #[test]
    fn test_next_stage_ignores_unknown_labels() {
        assert_eq!(next_stage("Rejected"), None);
        assert_eq!(next_stage(""), None);
        assert_eq!(next_stage("to apply"), None);
    }

    #[test]
    fn test_label_round_trips_through_from_str() {
        for stage in Stage::ALL {
            assert_eq!(stage.label().parse::<Stage>(), Ok(stage));
        }
        assert_eq!(
            "Ghosted".parse::<Stage>(),
            Err(UnknownStage("Ghosted".to_string()))
        );
    }

    #[test]
    fn test_serde_uses_labels() {
        assert_eq!(
            serde_json::to_string(&Stage::ToApply).unwrap(),
            "\"To Apply\""
        );
        let stage: Stage = serde_json::from_str("\"Interviewing\"").unwrap();
        assert_eq!(stage, Stage::Interviewing);
    }

    #[test]
    fn test_default_is_first_stage() {
        assert_eq!(Stage::default(), Stage::ToApply);
        assert_eq!(Stage::ToApply.to_string(), "To Apply");
    }
}
