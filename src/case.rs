//! Case-folding policy.
//!
//! Every character comparison in the engine goes through `FoldPolicy`;
//! comparing raw units anywhere else would let case-sensitivity semantics
//! silently diverge between call sites.

use crate::unit::Unit;

/// How characters are folded before comparison.
///
/// `Fold` upper-cases both sides (case-insensitive matching); `Preserve`
/// compares units exactly. The per-call force-case-sensitive flag always
/// wins over the convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaseConvention {
    #[default]
    Fold,
    Preserve,
}

impl CaseConvention {
    /// The host platform's convention: case-sensitive filesystems compare
    /// exactly, everything else folds.
    pub fn host() -> Self {
        if cfg!(unix) {
            Self::Preserve
        } else {
            Self::Fold
        }
    }
}

/// A resolved folding decision for one match call.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FoldPolicy {
    identity: bool,
}

impl FoldPolicy {
    /// Combine the configured convention with the per-call flag.
    pub(crate) fn new(convention: CaseConvention, force_case: bool) -> Self {
        Self {
            identity: force_case || convention == CaseConvention::Preserve,
        }
    }

    /// The comparison key for a single unit.
    pub(crate) fn fold<U: Unit>(self, unit: U) -> U {
        if self.identity {
            unit
        } else {
            unit.fold()
        }
    }

    /// Folded equality of two units.
    pub(crate) fn eq_unit<U: Unit>(self, a: U, b: U) -> bool {
        self.fold(a) == self.fold(b)
    }

    /// Folded equality of two slices.
    pub(crate) fn eq<U: Unit>(self, a: &[U], b: &[U]) -> bool {
        a.len() == b.len() && a.iter().zip(b).all(|(&x, &y)| self.eq_unit(x, y))
    }

    /// True when `s` begins with `prefix` under folded comparison.
    pub(crate) fn starts_with<U: Unit>(self, s: &[U], prefix: &[U]) -> bool {
        s.len() >= prefix.len() && self.eq(&s[..prefix.len()], prefix)
    }
}
