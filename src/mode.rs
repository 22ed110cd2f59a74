use crate::error::{Error, Result};

// ---------------------------------------------------------------------------
// Raw bit layout
// ---------------------------------------------------------------------------

// Base mode in the low four bits, flags above; callers combine with `|`.

pub const MATCH_NAMES: u32 = 0;
pub const MATCH_EXACT: u32 = 1;
pub const MATCH_EXACT_PATH: u32 = 2;
pub const MATCH_SUBPATH: u32 = 3;
pub const MATCH_SUBPATH_ONLY: u32 = 4;
pub const MATCH_WILD_SUBPATH: u32 = 5;

pub const MATCH_MODE_MASK: u32 = 0x0f;
pub const MATCH_FORCE_CASE_SENSITIVE: u32 = 0x10;

// ---------------------------------------------------------------------------
// BaseMode
// ---------------------------------------------------------------------------

/// How the directory part of a mask relates to the candidate path.
///
/// - `Names`: compare base names only, the directory part is ignored.
/// - `Exact`: full literal equality of directory and base name.
/// - `ExactPath`: literal directory equality, wildcard base name.
/// - `Subpath`: the mask selects a directory subtree or matches base names
///   under a literal directory prefix.
/// - `SubpathOnly`: the mask must be a whole-component prefix of the
///   candidate; nothing else matches.
/// - `WildSubpath`: like `Subpath`, but a wildcard-free mask pins the
///   directory exactly instead of by prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaseMode {
    Names,
    Exact,
    ExactPath,
    Subpath,
    SubpathOnly,
    WildSubpath,
}

impl BaseMode {
    /// Decode the base-mode bits. Returns `None` for unassigned values.
    pub fn from_bits(bits: u32) -> Option<Self> {
        match bits & MATCH_MODE_MASK {
            MATCH_NAMES => Some(Self::Names),
            MATCH_EXACT => Some(Self::Exact),
            MATCH_EXACT_PATH => Some(Self::ExactPath),
            MATCH_SUBPATH => Some(Self::Subpath),
            MATCH_SUBPATH_ONLY => Some(Self::SubpathOnly),
            MATCH_WILD_SUBPATH => Some(Self::WildSubpath),
            _ => None,
        }
    }

    /// Encode back to the raw bit value.
    pub fn bits(self) -> u32 {
        match self {
            Self::Names => MATCH_NAMES,
            Self::Exact => MATCH_EXACT,
            Self::ExactPath => MATCH_EXACT_PATH,
            Self::Subpath => MATCH_SUBPATH,
            Self::SubpathOnly => MATCH_SUBPATH_ONLY,
            Self::WildSubpath => MATCH_WILD_SUBPATH,
        }
    }
}

// ---------------------------------------------------------------------------
// MatchMode
// ---------------------------------------------------------------------------

/// A base mode plus the force-case-sensitive flag.
///
/// The two parts are orthogonal; any combination is legal.
///
/// # Example
///
/// ```rust
/// use arcmask::{BaseMode, MatchMode, MATCH_FORCE_CASE_SENSITIVE, MATCH_SUBPATH};
///
/// let mode = MatchMode::new(BaseMode::Subpath).case_sensitive();
/// assert_eq!(mode.bits(), MATCH_SUBPATH | MATCH_FORCE_CASE_SENSITIVE);
/// assert_eq!(MatchMode::from_bits(mode.bits()).unwrap(), mode);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MatchMode {
    pub base: BaseMode,
    pub force_case: bool,
}

impl MatchMode {
    /// A mode with the platform-default case policy.
    pub fn new(base: BaseMode) -> Self {
        Self {
            base,
            force_case: false,
        }
    }

    /// Request byte-exact comparison regardless of the case convention.
    pub fn case_sensitive(mut self) -> Self {
        self.force_case = true;
        self
    }

    /// Decode a raw mode value as passed across the external interface.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMode`] when the base-mode bits name no
    /// known mode.
    pub fn from_bits(bits: u32) -> Result<Self> {
        let base = BaseMode::from_bits(bits).ok_or(Error::InvalidMode(bits))?;
        Ok(Self {
            base,
            force_case: bits & MATCH_FORCE_CASE_SENSITIVE != 0,
        })
    }

    /// Encode back to the raw bit value.
    pub fn bits(self) -> u32 {
        let mut bits = self.base.bits();
        if self.force_case {
            bits |= MATCH_FORCE_CASE_SENSITIVE;
        }
        bits
    }
}

impl From<BaseMode> for MatchMode {
    fn from(base: BaseMode) -> Self {
        Self::new(base)
    }
}
