//! The transliteration engine: applicability gate plus ordered substitution.

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::error::TranslitError;
use crate::policy::Policy;
use crate::rules::SubstitutionTable;

/// Latin→Cyrillic transliterator: an immutable [`SubstitutionTable`] plus an
/// applicability [`Policy`]. Stateless and side-effect-free; concurrent calls
/// need no coordination.
#[derive(Debug, Clone)]
pub struct Transliterator {
    table: SubstitutionTable,
    policy: Policy,
}

impl Transliterator {
    /// Creates an engine over the given table and policy.
    pub fn new(table: SubstitutionTable, policy: Policy) -> Self {
        Self { table, policy }
    }

    /// Creates an engine over the standard Uzbek table.
    pub fn uzbek(policy: Policy) -> Result<Self, TranslitError> {
        Ok(Self::new(SubstitutionTable::uzbek()?, policy))
    }

    pub fn policy(&self) -> &Policy {
        &self.policy
    }

    /// Converts `text` when the policy allows it. `None` means "send no reply";
    /// the caller must suppress output in that case.
    pub fn transliterate(&self, text: &str, sent_at: Option<DateTime<Utc>>) -> Option<String> {
        if !self.policy.applies(text, sent_at) {
            debug!(len = text.len(), "input not applicable, skipping");
            return None;
        }
        let converted = self.substitute(text);
        debug!(
            input_len = text.len(),
            output_len = converted.len(),
            "input transliterated"
        );
        Some(converted)
    }

    /// Runs the substitution table over `text` unconditionally, without the
    /// applicability gate.
    pub fn substitute(&self, text: &str) -> String {
        self.table.apply(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> Transliterator {
        Transliterator::uzbek(Policy::default()).unwrap()
    }

    #[test]
    fn test_substitute_ignores_policy() {
        // substitute() has no gate: even a command string is converted.
        assert_eq!(engine().substitute("/salom"), "/салом");
    }

    #[test]
    fn test_transliterate_respects_policy() {
        assert_eq!(engine().transliterate("/salom", None), None);
        assert_eq!(
            engine().transliterate("salom", None),
            Some("салом".to_string())
        );
    }
}
