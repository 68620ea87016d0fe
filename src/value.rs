//! Version value parsing, formatting and component bumps
//!
//! Accepted text is dot-separated with at least major and minor segments.
//! A third segment may carry a dash-separated suffix.
//!
//! Format examples:
//! - `1.2` (major and minor only)
//! - `1.2.3` (with patch)
//! - `2.0.0-next` (patch plus suffix)
//! - `v0.1.0` (`v`-prefixed major)

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::error::ParseError;
use crate::record::VersionRecord;

/// Returned by [`VersionValue::patch_number`] when no numeric patch is stored
pub const NO_PATCH: i64 = -1;

/// A dotted version identifier split into its components
///
/// Major and minor are always populated together by a successful parse;
/// patch and suffix are independently optional. Values are immutable; the
/// bump operations return a new value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct VersionValue {
    major: String,
    minor: String,
    patch: Option<String>,
    suffix: Option<String>,
}

impl VersionValue {
    /// Create a value from explicit components
    ///
    /// The patch accepts numeric or textual form. The suffix is stored only
    /// when provided and non-empty.
    pub fn new(major: u64, minor: u64, patch: impl ToString, suffix: Option<&str>) -> Self {
        Self {
            major: major.to_string(),
            minor: minor.to_string(),
            patch: Some(patch.to_string()),
            suffix: suffix.filter(|s| !s.is_empty()).map(str::to_string),
        }
    }

    /// Parse version text into a value
    ///
    /// The text is split on `.`. The first two segments (trimmed) become
    /// major and minor. A third segment is split on its first `-` into patch
    /// and suffix; without a dash the whole segment (trimmed) becomes the
    /// patch. Segments past the third are ignored.
    ///
    /// Fails when fewer than two segments are present or when the major
    /// segment starts with a letter. A leading `v`/`V` is allowed, so
    /// `v1.2.3` parses while `A1.2.3` does not. Minor and patch receive no
    /// letter check.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        static LETTER_PREFIX_RE: LazyLock<Regex> =
            LazyLock::new(|| Regex::new(r"^[a-uw-zA-UW-Z]").unwrap());

        let mut segments = text.split('.');
        let (Some(major), Some(minor)) = (segments.next(), segments.next()) else {
            debug!("version text {:?} has fewer than two segments", text);
            return Err(ParseError::NotEnoughSegments(text.to_string()));
        };

        let major = major.trim();
        let minor = minor.trim();

        let (patch, suffix) = match segments.next() {
            Some(third) => match third.split_once('-') {
                // Both sides are kept even when empty; Display drops empties.
                Some((patch, suffix)) => (Some(patch), Some(suffix)),
                None => (Some(third.trim()), None),
            },
            None => (None, None),
        };

        if LETTER_PREFIX_RE.is_match(major) {
            debug!("version text {:?} has a letter-prefixed major segment", text);
            return Err(ParseError::LetterPrefixedMajor(text.to_string()));
        }

        Ok(Self {
            major: major.to_string(),
            minor: minor.to_string(),
            patch: patch.map(str::to_string),
            suffix: suffix.map(str::to_string),
        })
    }

    /// Major segment text
    pub fn major(&self) -> &str {
        &self.major
    }

    /// Minor segment text
    pub fn minor(&self) -> &str {
        &self.minor
    }

    /// Patch segment text, when a third segment was present
    pub fn patch(&self) -> Option<&str> {
        self.patch.as_deref()
    }

    /// Suffix text following the first dash of the third segment
    pub fn suffix(&self) -> Option<&str> {
        self.suffix.as_deref()
    }

    /// Numeric form of the major segment, 0 when it does not parse
    pub fn major_number(&self) -> i64 {
        self.major.parse().unwrap_or(0)
    }

    /// Numeric form of the minor segment, 0 when it does not parse
    pub fn minor_number(&self) -> i64 {
        self.minor.parse().unwrap_or(0)
    }

    /// Numeric form of the patch segment
    ///
    /// Returns [`NO_PATCH`] when the patch is absent or not numeric, so
    /// callers can tell "no numeric patch" from a stored 0.
    pub fn patch_number(&self) -> i64 {
        self.patch
            .as_deref()
            .and_then(|p| p.parse().ok())
            .unwrap_or(NO_PATCH)
    }

    /// New value with the major component raised by `amount`
    ///
    /// Minor and patch carry over unchanged, they are not reset to zero.
    pub fn bump_major(&self, amount: i64) -> Self {
        Self {
            major: (self.major_number() + amount).to_string(),
            ..self.clone()
        }
    }

    /// New value with the minor component raised by `amount`
    ///
    /// The patch carries over unchanged.
    pub fn bump_minor(&self, amount: i64) -> Self {
        Self {
            minor: (self.minor_number() + amount).to_string(),
            ..self.clone()
        }
    }

    /// New value with the patch component raised by `amount`
    ///
    /// An absent or non-numeric patch counts as [`NO_PATCH`], so the first
    /// bump of a two-segment version lands on patch 0.
    pub fn bump_patch(&self, amount: i64) -> Self {
        Self {
            patch: Some((self.patch_number() + amount).to_string()),
            ..self.clone()
        }
    }

    /// Project the value into its typed record form
    pub fn to_record(&self) -> VersionRecord {
        VersionRecord {
            major: self.major.clone(),
            minor: self.minor.clone(),
            patch: self.patch.clone(),
            suffix: self.suffix.clone(),
        }
    }

    /// Serialize the record form as a JSON object
    ///
    /// Keys appear in major, minor, patch, suffix order with absent optional
    /// fields left out.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.to_record())
    }

    /// Positional view of the components
    ///
    /// Always starts with major and minor; patch and suffix follow when
    /// present, so the length varies from 2 to 4.
    pub fn parts(&self) -> Vec<&str> {
        let mut parts = vec![self.major.as_str(), self.minor.as_str()];
        parts.extend(self.patch.as_deref());
        parts.extend(self.suffix.as_deref());
        parts
    }
}

impl From<VersionRecord> for VersionValue {
    fn from(record: VersionRecord) -> Self {
        Self {
            major: record.major,
            minor: record.minor,
            patch: record.patch,
            suffix: record.suffix,
        }
    }
}

impl FromStr for VersionValue {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for VersionValue {
    /// Joins the non-empty major, minor and patch with `.`, then appends
    /// `-suffix` when the suffix is present and non-empty. No validation is
    /// performed; the output reflects whatever is stored.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dotted = [self.major.as_str(), self.minor.as_str()]
            .into_iter()
            .chain(self.patch.as_deref())
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(".");
        write!(f, "{dotted}")?;

        match self.suffix.as_deref() {
            Some(suffix) if !suffix.is_empty() => write!(f, "-{suffix}"),
            _ => Ok(()),
        }
    }
}
