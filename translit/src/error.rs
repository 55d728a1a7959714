use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TranslitError {
    #[error("duplicate rule for pattern {pattern:?}")]
    DuplicateRule { pattern: String },

    #[error("conflicting rules for pattern {pattern:?}: {first:?} vs {second:?}")]
    ConflictingRule {
        pattern: String,
        first: String,
        second: String,
    },

    #[error("unknown script filter {0:?} (expected latin-only, require-latin or all)")]
    UnknownFilter(String),
}
