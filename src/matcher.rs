//! Path-mode dispatch: the crate's top-level matching entry points.
//!
//! [`Matcher`] bundles a [`MatchMode`] with a [`MatchConfig`] and applies
//! the per-mode orchestration: the reserved-prefix exclusion, the
//! whole-component prefix test for the subpath modes, directory-prefix
//! comparison, and base-name matching via the component matcher.
//!
//! # Example
//!
//! ```rust
//! use arcmask::{BaseMode, Matcher};
//!
//! let m = Matcher::new(BaseMode::Subpath);
//! assert!(m.matches("docs", "docs/api/index.md"));
//! assert!(m.matches("*.md", "docs/api/index.md"));
//! assert!(!m.matches("docs", "docs2/index.md"));
//! ```

use crate::case::{CaseConvention, FoldPolicy};
use crate::mode::{BaseMode, MatchMode};
use crate::paths::{is_wildcard, split_path};
use crate::unit::Unit;
use crate::wildcard::match_component;

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Immutable matcher configuration.
///
/// Modeled as an explicit value rather than process globals so that tests
/// (and embedders with unusual needs) can vary both knobs.
#[derive(Debug, Clone)]
pub struct MatchConfig {
    /// Case policy applied when the force-case-sensitive flag is unset.
    pub case_convention: CaseConvention,
    /// Candidates whose base name starts with this prefix (compared
    /// ASCII-case-insensitively) never match, regardless of mask. The
    /// archiver names its in-progress temporary entries with it.
    pub reserved_prefix: String,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            case_convention: CaseConvention::Fold,
            reserved_prefix: "__rar_".to_string(),
        }
    }
}

impl MatchConfig {
    /// The default configuration with the host platform's case convention
    /// (exact comparison on case-sensitive filesystems).
    pub fn host() -> Self {
        Self {
            case_convention: CaseConvention::host(),
            ..Self::default()
        }
    }
}

// ---------------------------------------------------------------------------
// Matcher
// ---------------------------------------------------------------------------

/// A configured mask matcher.
///
/// Construction is cheap and the matcher is freely shareable across
/// threads; every call is a pure function of its arguments.
#[derive(Debug, Clone)]
pub struct Matcher {
    mode: MatchMode,
    config: MatchConfig,
}

impl Matcher {
    /// A matcher with the default configuration.
    pub fn new(mode: impl Into<MatchMode>) -> Self {
        Self::with_config(mode, MatchConfig::default())
    }

    /// A matcher with an explicit configuration.
    pub fn with_config(mode: impl Into<MatchMode>, config: MatchConfig) -> Self {
        Self {
            mode: mode.into(),
            config,
        }
    }

    /// The mode this matcher applies.
    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    /// Match over wide characters. Convenience wrapper that decodes both
    /// strings; use [`matches_wide`](Self::matches_wide) to avoid the
    /// intermediate buffers in hot loops.
    pub fn matches(&self, mask: &str, name: &str) -> bool {
        let mask: Vec<char> = mask.chars().collect();
        let name: Vec<char> = name.chars().collect();
        self.matches_wide(&mask, &name)
    }

    /// Match over 8-bit code units, as stored in archive headers.
    pub fn matches_bytes(&self, mask: &[u8], name: &[u8]) -> bool {
        match_path(mask, name, self.mode, &self.config)
    }

    /// Match over wide characters.
    pub fn matches_wide(&self, mask: &[char], name: &[char]) -> bool {
        match_path(mask, name, self.mode, &self.config)
    }
}

/// Match `mask` against `name` with the default configuration.
///
/// The sole decision the engine makes: does this candidate path satisfy
/// this mask under this mode?
///
/// # Example
///
/// ```rust
/// use arcmask::{path_matches, BaseMode};
///
/// assert!(path_matches("*.txt", "report.txt", BaseMode::Names.into()));
/// assert!(!path_matches("*.txt", "report.rs", BaseMode::Names.into()));
/// ```
pub fn path_matches(mask: &str, name: &str, mode: MatchMode) -> bool {
    Matcher::with_config(mode, MatchConfig::default()).matches(mask, name)
}

/// Byte-path variant of [`path_matches`].
pub fn path_matches_bytes(mask: &[u8], name: &[u8], mode: MatchMode) -> bool {
    Matcher::with_config(mode, MatchConfig::default()).matches_bytes(mask, name)
}

// ---------------------------------------------------------------------------
// Generic core
// ---------------------------------------------------------------------------

/// Mode dispatch over either code-unit width.
pub(crate) fn match_path<U: Unit>(
    mask: &[U],
    name: &[U],
    mode: MatchMode,
    config: &MatchConfig,
) -> bool {
    let fold = FoldPolicy::new(config.case_convention, mode.force_case);
    let (_, name_base) = split_path(name);

    // Temporary entries generated by the archiver are invisible to every
    // mask; nothing below may override this.
    if has_reserved_prefix(name_base, &config.reserved_prefix) {
        return false;
    }

    match mode.base {
        BaseMode::Names => {
            let (_, mask_base) = split_path(mask);
            match_component(mask_base, name_base, fold)
        }
        // A whole-component prefix is the only way to satisfy SubpathOnly.
        BaseMode::SubpathOnly => boundary_prefix(mask, name, fold),
        BaseMode::Exact => {
            let (mask_dir, mask_base) = split_path(mask);
            let (name_dir, _) = split_path(name);
            fold.eq(mask_dir, name_dir) && fold.eq(mask_base, name_base)
        }
        BaseMode::ExactPath => {
            let (mask_dir, mask_base) = split_path(mask);
            let (name_dir, _) = split_path(name);
            fold.eq(mask_dir, name_dir) && match_component(mask_base, name_base, fold)
        }
        BaseMode::Subpath | BaseMode::WildSubpath => {
            // "path1" must match both "path1" and "path1/path2/file.ext".
            if boundary_prefix(mask, name, fold) {
                return true;
            }
            let (mask_dir, mask_base) = split_path(mask);
            let (name_dir, _) = split_path(name);
            if is_wildcard(mask_dir) {
                // Wildcards in the directory part: hand the unsplit pair
                // to the component matcher, separators and all.
                return match_component(mask, name, fold);
            }
            if mode.base == BaseMode::Subpath || is_wildcard(mask) {
                if !mask_dir.is_empty() && !fold.starts_with(name_dir, mask_dir) {
                    return false;
                }
            } else if !fold.eq(mask_dir, name_dir) {
                // WildSubpath without any wildcard pins the directory.
                return false;
            }
            match_component(mask_base, name_base, fold)
        }
    }
}

/// True when `mask` is a folded literal prefix of `name` ending on a
/// component boundary (separator or end of string).
fn boundary_prefix<U: Unit>(mask: &[U], name: &[U], fold: FoldPolicy) -> bool {
    if !fold.starts_with(name, mask) {
        return false;
    }
    match name.get(mask.len()) {
        None => true,
        Some(next) => next.is_separator(),
    }
}

/// Reserved-prefix test on a base name, ASCII-case-insensitive regardless
/// of the configured case convention.
fn has_reserved_prefix<U: Unit>(base: &[U], prefix: &str) -> bool {
    let prefix = prefix.as_bytes();
    base.len() >= prefix.len()
        && base
            .iter()
            .zip(prefix)
            .all(|(&u, &b)| u.eq_ascii_nocase(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subpath(mask: &str, name: &str) -> bool {
        path_matches(mask, name, BaseMode::Subpath.into())
    }

    #[test]
    fn reserved_prefix_beats_boundary_prefix() {
        // Even a mask that literally names the entry loses to the
        // reserved-prefix exclusion.
        for base in [
            BaseMode::Names,
            BaseMode::Exact,
            BaseMode::ExactPath,
            BaseMode::Subpath,
            BaseMode::SubpathOnly,
            BaseMode::WildSubpath,
        ] {
            assert!(!path_matches(
                "a/__rar_tmp.001",
                "a/__rar_tmp.001",
                base.into()
            ));
        }
    }

    #[test]
    fn reserved_prefix_is_ascii_case_insensitive() {
        assert!(!path_matches("*", "__RAR_tmp", BaseMode::Names.into()));
        let case_sensitive = MatchMode::new(BaseMode::Names).case_sensitive();
        assert!(!path_matches("__RAR_TMP", "__RAR_TMP", case_sensitive));
    }

    #[test]
    fn reserved_prefix_only_applies_to_base_name() {
        assert!(subpath("*.txt", "__rar_dir/report.txt"));
    }

    #[test]
    fn reserved_prefix_is_configurable() {
        let config = MatchConfig {
            reserved_prefix: "~tmp".to_string(),
            ..MatchConfig::default()
        };
        let m = Matcher::with_config(BaseMode::Names, config);
        assert!(!m.matches("*", "~tmp001"));
        assert!(m.matches("*", "__rar_tmp"));
    }

    #[test]
    fn subpath_only_is_prefix_or_nothing() {
        let mode = MatchMode::new(BaseMode::SubpathOnly);
        assert!(path_matches("dir1", "dir1/dir2/f.txt", mode));
        assert!(path_matches("dir1/dir2", "dir1/dir2", mode));
        assert!(!path_matches("dir1", "dir11/f.txt", mode));
        // No fallback to base-name matching.
        assert!(!path_matches("*", "anything", mode));
        assert!(!path_matches("f.txt", "dir1/f.txt", mode));
    }

    #[test]
    fn preserve_convention_degrades_to_identity() {
        let config = MatchConfig {
            case_convention: CaseConvention::Preserve,
            ..MatchConfig::default()
        };
        let m = Matcher::with_config(BaseMode::Names, config);
        assert!(!m.matches("ABC", "abc"));
        assert!(m.matches("abc", "abc"));
    }

    #[test]
    fn empty_mask_matches_only_empty_candidate() {
        assert!(path_matches("", "", BaseMode::Names.into()));
        assert!(!path_matches("", "a", BaseMode::Names.into()));
        assert!(!subpath("", "dir/a"));
        assert!(subpath("", ""));
    }

    #[test]
    fn separator_only_candidates_are_well_defined() {
        assert!(subpath("*", "//"));
        assert!(!path_matches("?", "//", BaseMode::Names.into()));
    }
}
