//! Contract lifecycle policy
//!
//! Contracts move strictly forward along [`Status::LIFECYCLE`], one step per
//! advance. `Locked` ends the walk. `Revoked` is a frozen terminal state that no
//! operation currently produces; it is kept so stored records carrying it still
//! load, and it stays inert.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Contract status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Status {
    /// Freshly instantiated
    #[default]
    Created,
    /// Approved internally
    Approved,
    /// Sent to the counterparty
    Sent,
    /// Signed by the counterparty
    Signed,
    /// Final; fields can no longer change
    Locked,
    /// Withdrawn; frozen and unreachable from any operation here
    Revoked,
}

impl Status {
    /// The forward lifecycle, in order
    pub const LIFECYCLE: [Status; 5] = [
        Status::Created,
        Status::Approved,
        Status::Sent,
        Status::Signed,
        Status::Locked,
    ];

    /// Every status, including the inert `Revoked`
    pub const ALL: [Status; 6] = [
        Status::Created,
        Status::Approved,
        Status::Sent,
        Status::Signed,
        Status::Locked,
        Status::Revoked,
    ];

    /// Successor along the lifecycle; `Locked` and `Revoked` map to themselves
    #[must_use]
    pub fn advance(self) -> Status {
        if self.is_frozen() {
            return self;
        }
        Self::LIFECYCLE
            .iter()
            .position(|s| *s == self)
            .and_then(|i| Self::LIFECYCLE.get(i + 1))
            .copied()
            .unwrap_or(self)
    }

    /// Field edits are rejected
    #[inline]
    #[must_use]
    pub fn is_locked(self) -> bool {
        self == Status::Locked
    }

    /// Fixed point of [`Status::advance`]
    #[inline]
    #[must_use]
    pub fn is_frozen(self) -> bool {
        matches!(self, Status::Locked | Status::Revoked)
    }

    /// Wire name
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Created => "Created",
            Status::Approved => "Approved",
            Status::Sent => "Sent",
            Status::Signed => "Signed",
            Status::Locked => "Locked",
            Status::Revoked => "Revoked",
        }
    }
}

/// Free-function form of [`Status::advance`]
#[inline]
#[must_use]
pub fn advance(status: Status) -> Status {
    status.advance()
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown status name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown status: {0}")]
pub struct UnknownStatus(pub String);

impl FromStr for Status {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Status::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownStatus(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn advance_follows_lifecycle() {
        assert_eq!(advance(Status::Created), Status::Approved);
        assert_eq!(advance(Status::Approved), Status::Sent);
        assert_eq!(advance(Status::Sent), Status::Signed);
        assert_eq!(advance(Status::Signed), Status::Locked);
    }

    #[test]
    fn frozen_states_are_fixed_points() {
        assert_eq!(advance(Status::Locked), Status::Locked);
        assert_eq!(advance(Status::Revoked), Status::Revoked);
    }

    #[test]
    fn four_steps_reach_locked() {
        let mut seen = vec![Status::Created];
        let mut s = Status::Created;
        for _ in 0..5 {
            s = s.advance();
            seen.push(s);
        }
        assert_eq!(
            seen,
            vec![
                Status::Created,
                Status::Approved,
                Status::Sent,
                Status::Signed,
                Status::Locked,
                Status::Locked,
            ]
        );
    }

    #[test]
    fn wire_names_round_trip() {
        for s in Status::ALL {
            let json = serde_json::to_string(&s).unwrap();
            assert_eq!(json, format!("\"{}\"", s.as_str()));
            assert_eq!(s.as_str().parse::<Status>().unwrap(), s);
        }
        assert_eq!("locked".parse::<Status>().unwrap(), Status::Locked);
        assert!("Archived".parse::<Status>().is_err());
    }

    fn any_status() -> impl Strategy<Value = Status> {
        prop::sample::select(Status::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn advance_never_moves_backwards(s in any_status()) {
            let next = s.advance();
            if s.is_frozen() {
                prop_assert_eq!(next, s);
            } else {
                let from = Status::LIFECYCLE.iter().position(|x| *x == s).unwrap();
                let to = Status::LIFECYCLE.iter().position(|x| *x == next).unwrap();
                prop_assert_eq!(to, from + 1);
            }
        }

        #[test]
        fn advance_settles_within_lifecycle_length(s in any_status(), extra in 0usize..10) {
            let mut cur = s;
            for _ in 0..(Status::LIFECYCLE.len() + extra) {
                cur = cur.advance();
            }
            prop_assert!(cur.is_frozen());
            prop_assert_eq!(cur.advance(), cur);
        }
    }
}
