//! Security descriptor folding
//!
//! Every security leaf seen during a decode is folded into one running
//! descriptor:
//! - classification keeps the more restrictive level
//! - policy is the union of whitespace-separated tokens
//! - releasability narrows per [`ReleasabilityMerge`]

use serde::{Deserialize, Serialize};

use crate::record::{keys, CatalogRecord, RecordValue};
use crate::schema::names;

/// How a new releasability value combines with the running one
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReleasabilityMerge {
    /// Keeps the running value only when a new token equals the whole
    /// running value. Multi-token values never survive a merge.
    #[default]
    Legacy,
    /// Keeps the running tokens that also appear in the new value
    Intersection,
}

/// Restrictiveness rank of a classification marking, lowest first
pub fn classification_rank(value: &str) -> Option<u8> {
    match value.trim().to_ascii_uppercase().as_str() {
        "U" | "UNCLASSIFIED" => Some(0),
        "R" | "RESTRICTED" => Some(1),
        "C" | "CONFIDENTIAL" => Some(2),
        "S" | "SECRET" => Some(3),
        "TS" | "TOP SECRET" => Some(4),
        _ => None,
    }
}

/// More restrictive of two classifications. An unranked value loses to a
/// ranked one; two unranked values keep the running one.
pub fn merge_classification(running: Option<&str>, new: Option<&str>) -> Option<String> {
    match (running, new) {
        (None, None) => None,
        (Some(value), None) | (None, Some(value)) => Some(value.to_string()),
        (Some(current), Some(incoming)) => {
            let keep_incoming = match (classification_rank(current), classification_rank(incoming)) {
                (Some(a), Some(b)) => b > a,
                (None, Some(_)) => true,
                _ => false,
            };
            let kept = if keep_incoming { incoming } else { current };
            Some(kept.to_string())
        }
    }
}

/// Token union, running tokens first
pub fn merge_policy(running: Option<&str>, new: Option<&str>) -> Option<String> {
    let mut tokens: Vec<&str> = Vec::new();
    for token in running
        .into_iter()
        .chain(new)
        .flat_map(str::split_whitespace)
    {
        if !tokens.contains(&token) {
            tokens.push(token);
        }
    }
    join_tokens(tokens)
}

/// Narrows `running` by `new`. With nothing running, `new` is taken as is.
pub fn merge_releasability(
    running: Option<&str>,
    new: Option<&str>,
    mode: ReleasabilityMerge,
) -> Option<String> {
    let (current, incoming) = match (running, new) {
        (None, None) => return None,
        (Some(value), None) | (None, Some(value)) => {
            return join_tokens(value.split_whitespace().collect())
        }
        (Some(current), Some(incoming)) => (current, incoming),
    };

    let incoming_tokens: Vec<&str> = incoming.split_whitespace().collect();
    let mut kept: Vec<&str> = Vec::new();
    for token in current.split_whitespace() {
        let matched = match mode {
            ReleasabilityMerge::Legacy => incoming_tokens.iter().any(|t| *t == current),
            ReleasabilityMerge::Intersection => incoming_tokens.contains(&token),
        };
        if matched && !kept.contains(&token) {
            kept.push(token);
        }
    }
    join_tokens(kept)
}

fn join_tokens(tokens: Vec<&str>) -> Option<String> {
    if tokens.is_empty() {
        None
    } else {
        Some(tokens.join(" "))
    }
}

/// Running security state of one decode
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SecurityDescriptor {
    pub classification: Option<String>,
    pub policy: Option<String>,
    pub releasability: Option<String>,
    /// Set once any releasability leaf has been folded
    releasability_seen: bool,
}

impl SecurityDescriptor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one security leaf. Returns false for attributes that are not
    /// security fields.
    pub fn fold(&mut self, attribute: &str, value: &str, mode: ReleasabilityMerge) -> bool {
        match attribute {
            names::CLASSIFICATION => {
                self.classification =
                    merge_classification(self.classification.as_deref(), Some(value));
            }
            names::POLICY => {
                self.policy = merge_policy(self.policy.as_deref(), Some(value));
            }
            names::RELEASABILITY => {
                // After a merge has emptied the set, later values stay excluded
                self.releasability = if self.releasability_seen {
                    self.releasability
                        .as_deref()
                        .and_then(|current| merge_releasability(Some(current), Some(value), mode))
                } else {
                    merge_releasability(None, Some(value), mode)
                };
                self.releasability_seen = true;
            }
            _ => return false,
        }
        true
    }

    pub fn is_empty(&self) -> bool {
        self.classification.is_none() && self.policy.is_none() && self.releasability.is_none()
    }

    /// Writes the merged fields onto the record
    pub fn apply(&self, record: &mut CatalogRecord) {
        let fields = [
            (keys::CLASSIFICATION, &self.classification),
            (keys::POLICY, &self.policy),
            (keys::RELEASABILITY, &self.releasability),
        ];
        for (key, value) in fields {
            if let Some(value) = value {
                record.set(key, RecordValue::Text(value.clone()));
            }
        }
    }
}
