//! Inclusion/exclusion mask lists for archive entry selection.
//!
//! [`MaskFilter`] composes the single-mask engine into the decision the
//! surrounding archiver actually makes per entry: selected when any
//! inclusion mask matches (or none are given) and no exclusion mask
//! matches. Masks can be loaded from list files, one per line.

use std::fs;
use std::path::Path;

use crate::matcher::{match_path, MatchConfig};
use crate::mode::MatchMode;
use crate::Result;

/// Entry-selection filter built from inclusion and exclusion masks.
///
/// All masks in one filter share a [`MatchMode`] and a [`MatchConfig`].
/// List-file syntax: one mask per line, blank lines and lines whose first
/// non-whitespace character is `#` are skipped.
///
/// # Example
///
/// ```rust
/// use arcmask::{BaseMode, MaskFilter};
///
/// let mut f = MaskFilter::new(BaseMode::Names);
/// f.add_masks(&["*.txt", "*.md"]);
/// f.add_exclusions(&["draft-*"]);
///
/// assert!(f.is_selected("notes/readme.md"));
/// assert!(!f.is_selected("notes/draft-1.md"));
/// assert!(!f.is_selected("notes/image.png"));
/// ```
#[derive(Debug, Clone)]
pub struct MaskFilter {
    include: Vec<String>,
    exclude: Vec<String>,
    mode: MatchMode,
    config: MatchConfig,
}

impl MaskFilter {
    /// An empty filter; with no inclusion masks it selects everything not
    /// excluded.
    pub fn new(mode: impl Into<MatchMode>) -> Self {
        Self::with_config(mode, MatchConfig::default())
    }

    /// An empty filter with an explicit configuration.
    pub fn with_config(mode: impl Into<MatchMode>, config: MatchConfig) -> Self {
        Self {
            include: Vec::new(),
            exclude: Vec::new(),
            mode: mode.into(),
            config,
        }
    }

    /// Add inclusion masks. Blank and `#`-comment lines are skipped.
    pub fn add_masks(&mut self, masks: &[&str]) {
        push_masks(&mut self.include, masks);
    }

    /// Add exclusion masks. Blank and `#`-comment lines are skipped.
    pub fn add_exclusions(&mut self, masks: &[&str]) {
        push_masks(&mut self.exclude, masks);
    }

    /// Load inclusion masks from a list file.
    ///
    /// A missing file is not an error, so a path that may not exist yet
    /// can be passed unconditionally.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read.
    pub fn load_from_file(&mut self, path: &Path) -> Result<()> {
        if let Some(lines) = read_mask_file(path)? {
            push_masks(&mut self.include, &lines.iter().map(String::as_str).collect::<Vec<_>>());
        }
        Ok(())
    }

    /// Load exclusion masks from a list file; same contract as
    /// [`load_from_file`](Self::load_from_file).
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read.
    pub fn load_exclusions_from_file(&mut self, path: &Path) -> Result<()> {
        if let Some(lines) = read_mask_file(path)? {
            push_masks(&mut self.exclude, &lines.iter().map(String::as_str).collect::<Vec<_>>());
        }
        Ok(())
    }

    /// Decide whether an entry named `name` is selected.
    ///
    /// Exclusions always win over inclusions; an empty inclusion list
    /// selects every entry that no exclusion mask matches.
    pub fn is_selected(&self, name: &str) -> bool {
        let name: Vec<char> = name.chars().collect();

        if self.exclude.iter().any(|mask| self.matches(mask, &name)) {
            return false;
        }
        if self.include.is_empty() {
            return true;
        }
        self.include.iter().any(|mask| self.matches(mask, &name))
    }

    /// Return `true` if at least one mask has been loaded.
    ///
    /// A filter with no masks selects everything; callers may use this to
    /// skip the filtering step entirely.
    pub fn active(&self) -> bool {
        !self.include.is_empty() || !self.exclude.is_empty()
    }

    fn matches(&self, mask: &str, name: &[char]) -> bool {
        let mask: Vec<char> = mask.chars().collect();
        match_path(&mask, name, self.mode, &self.config)
    }
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

fn push_masks(dest: &mut Vec<String>, masks: &[&str]) {
    for &raw in masks {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        dest.push(trimmed.to_string());
    }
}

/// Read a mask list file into lines, or `None` when the file is absent.
fn read_mask_file(path: &Path) -> Result<Option<Vec<String>>> {
    if !path.exists() {
        return Ok(None);
    }
    let contents = fs::read_to_string(path)?;
    Ok(Some(
        contents.lines().map(|l| l.trim_end().to_string()).collect(),
    ))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mode::BaseMode;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn empty_filter_selects_everything() {
        let f = MaskFilter::new(BaseMode::Names);
        assert!(!f.active());
        assert!(f.is_selected("anything.txt"));
        assert!(f.is_selected("dir/file.py"));
    }

    #[test]
    fn catch_all_inclusion_still_hides_reserved_entries() {
        let mut f = MaskFilter::new(BaseMode::Names);
        f.add_masks(&["*"]);
        assert!(f.is_selected("regular.txt"));
        assert!(!f.is_selected("__rar_tmp"));
    }

    #[test]
    fn inclusion_list_restricts() {
        let mut f = MaskFilter::new(BaseMode::Names);
        f.add_masks(&["*.txt"]);
        assert!(f.active());
        assert!(f.is_selected("readme.txt"));
        assert!(!f.is_selected("readme.md"));
    }

    #[test]
    fn exclusions_win_over_inclusions() {
        let mut f = MaskFilter::new(BaseMode::Names);
        f.add_masks(&["*.txt"]);
        f.add_exclusions(&["secret*"]);
        assert!(f.is_selected("notes.txt"));
        assert!(!f.is_selected("secret-notes.txt"));
    }

    #[test]
    fn exclusion_only_filter() {
        let mut f = MaskFilter::new(BaseMode::Names);
        f.add_exclusions(&["*.bak"]);
        assert!(f.is_selected("main.rs"));
        assert!(!f.is_selected("main.rs.bak"));
    }

    #[test]
    fn subpath_mode_filters_subtrees() {
        let mut f = MaskFilter::new(BaseMode::Subpath);
        f.add_masks(&["src"]);
        assert!(f.is_selected("src/lib.rs"));
        assert!(f.is_selected("src"));
        assert!(!f.is_selected("tests/lib.rs"));
    }

    #[test]
    fn comments_and_blanks_skipped() {
        let mut f = MaskFilter::new(BaseMode::Names);
        f.add_masks(&["", "  ", "# comment", "*.pyc"]);
        assert_eq!(f.include.len(), 1);
        assert!(f.is_selected("module.pyc"));
    }

    #[test]
    fn load_from_nonexistent_file_is_ok() {
        let mut f = MaskFilter::new(BaseMode::Names);
        let result = f.load_from_file(Path::new("/nonexistent/mask.lst"));
        assert!(result.is_ok());
        assert!(!f.active());
    }

    #[test]
    fn load_from_file() {
        let mut tmp = NamedTempFile::new().unwrap();
        writeln!(tmp, "# docs only").unwrap();
        writeln!(tmp, "*.md").unwrap();
        writeln!(tmp, "*.txt").unwrap();
        tmp.flush().unwrap();

        let mut f = MaskFilter::new(BaseMode::Names);
        f.load_from_file(tmp.path()).unwrap();

        assert!(f.active());
        assert!(f.is_selected("guide.md"));
        assert!(f.is_selected("notes.txt"));
        assert!(!f.is_selected("logo.png"));
    }

    #[test]
    fn load_exclusions_from_file() {
        let mut tmp = NamedTempFile::new().unwrap();
        writeln!(tmp, "*.o").unwrap();
        tmp.flush().unwrap();

        let mut f = MaskFilter::new(BaseMode::Names);
        f.load_exclusions_from_file(tmp.path()).unwrap();
        assert!(!f.is_selected("main.o"));
        assert!(f.is_selected("main.rs"));
    }
}
