//! Applicability policy: decides which inbound strings get transliterated at all.
//!
//! The checks are independently selectable; the default is the most permissive
//! variant that still never double-converts (commands and Cyrillic content are
//! skipped, everything else is accepted).

use std::str::FromStr;

use chrono::{DateTime, Utc};

use crate::error::TranslitError;

/// Which script content a string must have to be converted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScriptFilter {
    /// Only Latin letters, apostrophes and whitespace, with at least one letter.
    LatinOnly,
    /// At least one Latin letter anywhere; other content is allowed.
    RequireLatin,
    /// Accept anything; strings without Latin letters pass through unchanged.
    #[default]
    Any,
}

impl FromStr for ScriptFilter {
    type Err = TranslitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "latin-only" | "strict" => Ok(Self::LatinOnly),
            "require-latin" => Ok(Self::RequireLatin),
            "all" | "any" => Ok(Self::Any),
            other => Err(TranslitError::UnknownFilter(other.to_string())),
        }
    }
}

/// Selectable applicability checks applied before substitution.
#[derive(Debug, Clone)]
pub struct Policy {
    /// Ignore strings starting with a command marker `/`.
    pub skip_commands: bool,
    /// Ignore strings already containing any Cyrillic letter.
    pub skip_cyrillic: bool,
    /// Script content requirement.
    pub script: ScriptFilter,
    /// Ignore messages whose origination timestamp predates this instant
    /// (stale backlog delivered on reconnect).
    pub not_before: Option<DateTime<Utc>>,
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            skip_commands: true,
            skip_cyrillic: true,
            script: ScriptFilter::default(),
            not_before: None,
        }
    }
}

impl Policy {
    /// Strict variant: accept only pure Latin text.
    pub fn strict() -> Self {
        Self {
            script: ScriptFilter::LatinOnly,
            ..Self::default()
        }
    }

    /// Policy using the given script filter, other checks at their defaults.
    pub fn with_filter(script: ScriptFilter) -> Self {
        Self {
            script,
            ..Self::default()
        }
    }

    /// Sets the staleness cutoff: messages older than `instant` are ignored.
    pub fn drop_older_than(mut self, instant: DateTime<Utc>) -> Self {
        self.not_before = Some(instant);
        self
    }

    /// Decides whether `text` (sent at `sent_at`, when known) should be converted.
    ///
    /// Empty and whitespace-only strings are never applicable: a suppressed reply,
    /// never an empty one.
    pub fn applies(&self, text: &str, sent_at: Option<DateTime<Utc>>) -> bool {
        if text.trim().is_empty() {
            return false;
        }
        if self.skip_commands && text.starts_with('/') {
            return false;
        }
        if let (Some(cutoff), Some(sent)) = (self.not_before, sent_at) {
            if sent < cutoff {
                return false;
            }
        }
        if self.skip_cyrillic && text.chars().any(is_cyrillic) {
            return false;
        }
        match self.script {
            ScriptFilter::LatinOnly => {
                text.chars()
                    .all(|c| c.is_ascii_alphabetic() || is_apostrophe(c) || c.is_whitespace())
                    && text.chars().any(|c| c.is_ascii_alphabetic())
            }
            ScriptFilter::RequireLatin => text.chars().any(|c| c.is_ascii_alphabetic()),
            ScriptFilter::Any => true,
        }
    }
}

/// Returns true for any Cyrillic letter. U+0400..=U+04FF covers the base block
/// plus the Uzbek extensions Ғ Қ Ҳ Ў.
#[inline]
pub fn is_cyrillic(c: char) -> bool {
    matches!(c, '\u{0400}'..='\u{04FF}')
}

/// Returns true for the apostrophe spellings used as tutuq belgisi:
/// straight U+0027 and modifier-letter U+02BB.
#[inline]
pub fn is_apostrophe(c: char) -> bool {
    matches!(c, '\'' | 'ʻ')
}
