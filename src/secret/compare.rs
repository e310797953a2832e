//! Equality policies for secret contents.
//!
//! Two policies are supported and selected explicitly:
//!
//! - [`EqualityPolicy::ShortCircuit`] stops at the first differing element.
//!   Its running time reveals where two inputs diverge.
//! - [`EqualityPolicy::FixedTime`] visits every position once the lengths
//!   match and folds the results into a single flag. A length mismatch still
//!   returns immediately, so the length of a secret remains observable through
//!   timing. Use this policy whenever one side may be attacker influenced, such
//!   as token validation.
//!
//! Neither policy is a constant-time guarantee; the compiler is free to
//! optimise the loop and no barrier is used.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EqualityPolicy {
    ShortCircuit,
    #[default]
    FixedTime,
}

impl EqualityPolicy {
    /// Picks the stricter of two policies. Fixed-time wins whenever either
    /// side asked for it.
    pub fn strictest(self, other: EqualityPolicy) -> EqualityPolicy {
        match (self, other) {
            (EqualityPolicy::ShortCircuit, EqualityPolicy::ShortCircuit) => {
                EqualityPolicy::ShortCircuit
            }
            _ => EqualityPolicy::FixedTime,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EqualityPolicy::ShortCircuit => "short-circuit",
            EqualityPolicy::FixedTime => "fixed-time",
        }
    }

    /// Parses the CLI spelling (`short-circuit` / `fixed-time`). The snake
    /// case serde names are accepted as well.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "short-circuit" | "short_circuit" => Some(EqualityPolicy::ShortCircuit),
            "fixed-time" | "fixed_time" => Some(EqualityPolicy::FixedTime),
            _ => None,
        }
    }
}

impl fmt::Display for EqualityPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Compares two slices under `policy`, using `eq` for each position.
///
/// The comparator is a parameter so callers can observe which positions were
/// visited.
pub fn equal_with<T, F>(policy: EqualityPolicy, a: &[T], b: &[T], eq: F) -> bool
where
    F: FnMut(&T, &T) -> bool,
{
    match policy {
        EqualityPolicy::ShortCircuit => short_circuit_eq(a, b, eq),
        EqualityPolicy::FixedTime => fixed_time_eq(a, b, eq),
    }
}

/// Compares two byte slices under `policy`.
pub fn equal_bytes(policy: EqualityPolicy, a: &[u8], b: &[u8]) -> bool {
    equal_with(policy, a, b, |x, y| x == y)
}

fn short_circuit_eq<T, F>(a: &[T], b: &[T], mut eq: F) -> bool
where
    F: FnMut(&T, &T) -> bool,
{
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).all(|(x, y)| eq(x, y))
}

fn fixed_time_eq<T, F>(a: &[T], b: &[T], mut eq: F) -> bool
where
    F: FnMut(&T, &T) -> bool,
{
    // Length still leaks here.
    if a.len() != b.len() {
        return false;
    }
    let mut same = true;
    for (x, y) in a.iter().zip(b) {
        same &= eq(x, y);
    }
    same
}
