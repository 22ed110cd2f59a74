//! Wildcard mask matching for archive entry paths.
//!
//! `arcmask` decides whether an archive entry's stored path matches a
//! user-supplied inclusion/exclusion mask, the way an archiver filters
//! members when listing or extracting. Masks use `*` (zero or more
//! characters) and `?` (exactly one), with path-aware match modes layered
//! on top of the component matcher.
//!
//! # Key types
//!
//! - [`path_matches`] / [`path_matches_bytes`] — the single-call entry
//!   points over wide characters and raw bytes.
//! - [`MatchMode`] — a [`BaseMode`] (how directory prefixes are treated)
//!   plus a force-case-sensitive flag; convertible to and from the raw
//!   bit layout used across the external interface.
//! - [`Matcher`] — a mode bundled with a [`MatchConfig`] (case convention
//!   and reserved temporary-entry prefix) for repeated calls.
//! - [`MaskFilter`] — ordered inclusion/exclusion mask lists composing
//!   the per-mask engine into per-entry selection.
//!
//! # Quick example
//!
//! ```rust
//! use arcmask::{path_matches, BaseMode, MatchMode};
//!
//! // Base-name matching: the mask applies to the file name only.
//! assert!(path_matches("*.txt", "docs/readme.txt", BaseMode::Names.into()));
//!
//! // Subpath matching: a directory mask selects its whole subtree.
//! assert!(path_matches("docs", "docs/guide/ch1.md", BaseMode::Subpath.into()));
//!
//! // The flag forces byte-exact comparison.
//! let exact = MatchMode::new(BaseMode::Names).case_sensitive();
//! assert!(!path_matches("*.TXT", "readme.txt", exact));
//! ```
//!
//! The engine is pure and stateless: no I/O (aside from the optional
//! mask-list loading on [`MaskFilter`]), no shared mutable state, and
//! every call is safe to issue concurrently.

pub mod case;
pub mod error;
pub mod matcher;
pub mod mode;
pub mod paths;
pub mod select;
pub mod unit;
mod wildcard;

// Re-export primary public types at crate root.
pub use case::CaseConvention;
pub use error::{Error, Result};
pub use matcher::{path_matches, path_matches_bytes, MatchConfig, Matcher};
pub use mode::{
    BaseMode, MatchMode, MATCH_EXACT, MATCH_EXACT_PATH, MATCH_FORCE_CASE_SENSITIVE,
    MATCH_MODE_MASK, MATCH_NAMES, MATCH_SUBPATH, MATCH_SUBPATH_ONLY, MATCH_WILD_SUBPATH,
};
pub use paths::{is_wildcard, split_path};
pub use select::MaskFilter;
pub use unit::Unit;
