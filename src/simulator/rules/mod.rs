//! Per-category simulation rules
//!
//! Each rule is a pure function of the raw query. A tool has at most one rule;
//! rules never cascade into each other.

mod advanced;
mod domain;
mod email;
mod media;
mod network;
mod phone;
mod social;

use crate::lookup::Fields;

/// Pure mapping from query to synthetic fields
pub type Rule = fn(&str) -> Fields;

/// Every `(tool id, rule)` pair, category by category
pub(crate) fn all() -> impl Iterator<Item = (&'static str, Rule)> {
    [
        email::RULES,
        phone::RULES,
        network::RULES,
        domain::RULES,
        social::RULES,
        media::RULES,
        advanced::RULES,
    ]
    .into_iter()
    .flatten()
    .copied()
}
