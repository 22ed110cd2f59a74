//! Single-component wildcard matching.
//!
//! [`match_component`] compares one mask component against one name
//! component. Separators carry no special meaning here; the mode dispatcher
//! in [`crate::matcher`] decides whether whole paths or base names are fed
//! in.

use crate::case::FoldPolicy;
use crate::paths::is_wildcard;
use crate::unit::Unit;

/// Match a wildcard pattern against a name.
///
/// `*` matches zero or more units, `?` matches exactly one. A literal `.`
/// in the pattern additionally matches an exhausted name or a name
/// positioned at a separator or another `.`, so a mask ending in `name.`
/// matches an extension-less `name`.
///
/// Only `*` backtracks: the retry over name positions is an iterative
/// loop, and each nested call starts past the `*` that spawned it, so the
/// recursion depth is bounded by the number of `*` units in the pattern.
pub(crate) fn match_component<U: Unit>(pattern: &[U], name: &[U], fold: FoldPolicy) -> bool {
    let mut p = 0;
    let mut n = 0;
    loop {
        let pc = match pattern.get(p) {
            None => return n == name.len(),
            Some(&pc) => pc,
        };
        p += 1;

        if pc.is('?') {
            if n == name.len() {
                return false;
            }
            n += 1;
            continue;
        }

        if pc.is('*') {
            let rest = &pattern[p..];
            if rest.is_empty() {
                return true;
            }
            if rest[0].is('.') {
                if rest.len() == 2 && rest[1].is('*') {
                    // "*.*" at the end of the mask: any name qualifies,
                    // with or without an extension.
                    return true;
                }
                let dot = name[n..].iter().position(|u| u.is('.'));
                if rest.len() == 1 {
                    // Mask ends in "*.": only extension-less names (no dot,
                    // or a single trailing dot) qualify.
                    return match dot {
                        None => true,
                        Some(i) => n + i + 1 == name.len(),
                    };
                }
                if let Some(i) = dot {
                    n += i;
                    if !is_wildcard(rest) && !name[n + 1..].iter().any(|u| u.is('.')) {
                        // Match-by-extension shortcut: one folded
                        // comparison instead of the retry loop below.
                        return fold.eq(&rest[1..], &name[n + 1..]);
                    }
                }
            }
            // Retry the remaining pattern at every later name position,
            // the empty tail included.
            loop {
                if match_component(rest, &name[n..], fold) {
                    return true;
                }
                if n == name.len() {
                    return false;
                }
                n += 1;
            }
        }

        // Literal unit.
        match name.get(n) {
            Some(&nc) if fold.eq_unit(pc, nc) => n += 1,
            other => {
                let at_boundary = match other {
                    None => true,
                    Some(&nc) => nc.is_separator() || nc.is('.'),
                };
                if !(pc.is('.') && at_boundary) {
                    return false;
                }
                // A bare "." in the mask stands in for a missing
                // extension; skip it without consuming the name.
            }
        }
    }
}
