use serde::{Deserialize, Serialize};

/// Review state of a generation node.
///
/// `Proposed` is the only open state. A user decision settles the node:
/// `Accepted` makes it the live text for its branch, `Rejected` closes this
/// attempt. Accepting a different node on the same branch later demotes the
/// live node to `Superseded` without erasing that it was once accepted.
/// Settled nodes of every state remain valid parents for further attempts.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ReviewStatus {
    /// Awaiting a user decision.
    Proposed,

    /// The live text for its branch.
    Accepted,

    /// Declined by the user; terminal for this node.
    Rejected,

    /// Was accepted, then displaced when another node on the branch was
    /// accepted.
    Superseded,
}

impl ReviewStatus {
    pub fn is_accepted(self) -> bool {
        matches!(self, ReviewStatus::Accepted)
    }

    /// Whether a user decision has been recorded for this node.
    pub fn is_settled(self) -> bool {
        !matches!(self, ReviewStatus::Proposed)
    }
}

impl Default for ReviewStatus {
    fn default() -> Self {
        ReviewStatus::Proposed
    }
}
