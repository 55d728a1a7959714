//! The ordered Latin→Cyrillic substitution table.
//!
//! Order is load-bearing: digraphs must be listed before their constituent
//! single letters, and the uppercase-initial list runs before the lowercase
//! list. The tutuq belgisi appears in the wild as both a straight apostrophe
//! (U+0027) and a modifier-letter apostrophe (U+02BB); both spellings are
//! separate rules with the same target, since no normalization pass exists.

use std::collections::HashMap;

use crate::error::TranslitError;

/// One ordered substitution: a literal Latin pattern and its replacement,
/// a single Cyrillic character (or the pattern itself for letters with no
/// Cyrillic counterpart, e.g. `W`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    pub from: &'static str,
    pub to: &'static str,
}

impl Rule {
    const fn new(from: &'static str, to: &'static str) -> Self {
        Self { from, to }
    }
}

/// Uppercase-initial forms. A bare `S` rule running first would turn "Sh"
/// into "Сh", so every digraph precedes its first letter.
pub const UPPER: &[Rule] = &[
    Rule::new("O'", "Ў"),
    Rule::new("Oʻ", "Ў"),
    Rule::new("G'", "Ғ"),
    Rule::new("Gʻ", "Ғ"),
    Rule::new("Ts", "Ц"),
    Rule::new("Yo", "Ё"),
    Rule::new("Ch", "Ч"),
    Rule::new("Sh", "Ш"),
    Rule::new("Yu", "Ю"),
    Rule::new("Ya", "Я"),
    Rule::new("Ye", "Е"),
    Rule::new("A", "А"),
    Rule::new("B", "Б"),
    Rule::new("V", "В"),
    Rule::new("G", "Г"),
    Rule::new("D", "Д"),
    Rule::new("E", "Э"),
    Rule::new("F", "Ф"),
    Rule::new("H", "Ҳ"),
    Rule::new("I", "И"),
    Rule::new("J", "Ж"),
    Rule::new("K", "К"),
    Rule::new("L", "Л"),
    Rule::new("M", "М"),
    Rule::new("N", "Н"),
    Rule::new("O", "О"),
    Rule::new("P", "П"),
    Rule::new("Q", "Қ"),
    Rule::new("R", "Р"),
    Rule::new("S", "С"),
    Rule::new("T", "Т"),
    Rule::new("U", "У"),
    Rule::new("W", "W"), // not in the Uzbek alphabet; left as-is
    Rule::new("X", "Х"),
    Rule::new("Y", "Й"),
    Rule::new("Z", "З"),
];

/// Fully lowercase forms, applied after [`UPPER`].
pub const LOWER: &[Rule] = &[
    Rule::new("o'", "ў"),
    Rule::new("oʻ", "ў"),
    Rule::new("g'", "ғ"),
    Rule::new("gʻ", "ғ"),
    Rule::new("ts", "ц"),
    Rule::new("yo", "ё"),
    Rule::new("ch", "ч"),
    Rule::new("sh", "ш"),
    Rule::new("yu", "ю"),
    Rule::new("ya", "я"),
    Rule::new("ye", "е"),
    Rule::new("a", "а"),
    Rule::new("b", "б"),
    Rule::new("v", "в"),
    Rule::new("g", "г"),
    Rule::new("d", "д"),
    Rule::new("e", "э"),
    Rule::new("f", "ф"),
    Rule::new("h", "ҳ"),
    Rule::new("i", "и"),
    Rule::new("j", "ж"),
    Rule::new("k", "к"),
    Rule::new("l", "л"),
    Rule::new("m", "м"),
    Rule::new("n", "н"),
    Rule::new("o", "о"),
    Rule::new("p", "п"),
    Rule::new("q", "қ"),
    Rule::new("r", "р"),
    Rule::new("s", "с"),
    Rule::new("t", "т"),
    Rule::new("u", "у"),
    Rule::new("w", "w"), // not in the Uzbek alphabet; left as-is
    Rule::new("x", "х"),
    Rule::new("y", "й"),
    Rule::new("z", "з"),
];

/// The full ordered rule sequence. Immutable once constructed and shared across
/// all invocations; construction rejects a source pattern appearing twice, so a
/// table merged from divergent revisions fails loudly instead of silently
/// resolving to first-match-wins.
#[derive(Debug, Clone)]
pub struct SubstitutionTable {
    rules: Vec<Rule>,
}

impl SubstitutionTable {
    /// Builds a table from ordered rules, validating source-pattern uniqueness.
    pub fn from_rules(rules: &[Rule]) -> Result<Self, TranslitError> {
        let mut seen: HashMap<&str, &str> = HashMap::with_capacity(rules.len());
        for rule in rules {
            match seen.get(rule.from) {
                Some(&to) if to == rule.to => {
                    return Err(TranslitError::DuplicateRule {
                        pattern: rule.from.to_string(),
                    });
                }
                Some(&to) => {
                    return Err(TranslitError::ConflictingRule {
                        pattern: rule.from.to_string(),
                        first: to.to_string(),
                        second: rule.to.to_string(),
                    });
                }
                None => {
                    seen.insert(rule.from, rule.to);
                }
            }
        }
        Ok(Self {
            rules: rules.to_vec(),
        })
    }

    /// The standard Uzbek table: [`UPPER`] followed by [`LOWER`].
    pub fn uzbek() -> Result<Self, TranslitError> {
        let mut rules = Vec::with_capacity(UPPER.len() + LOWER.len());
        rules.extend_from_slice(UPPER);
        rules.extend_from_slice(LOWER);
        Self::from_rules(&rules)
    }

    /// Applies every rule in order. Each rule performs a global non-overlapping
    /// literal replacement over the string produced by the previous rule: a
    /// sequential pipeline, not a single simultaneous scan.
    pub fn apply(&self, text: &str) -> String {
        let mut out = text.to_string();
        for rule in &self.rules {
            if out.contains(rule.from) {
                out = out.replace(rule.from, rule.to);
            }
        }
        out
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uzbek_table_is_valid() {
        let table = SubstitutionTable::uzbek().unwrap();
        assert_eq!(table.len(), UPPER.len() + LOWER.len());
    }

    #[test]
    fn test_duplicate_rule_rejected() {
        let rules = [Rule::new("V", "В"), Rule::new("V", "В")];
        let err = SubstitutionTable::from_rules(&rules).unwrap_err();
        assert_eq!(
            err,
            TranslitError::DuplicateRule {
                pattern: "V".to_string()
            }
        );
    }

    #[test]
    fn test_conflicting_rule_rejected() {
        let rules = [Rule::new("W", "W"), Rule::new("W", "В")];
        let err = SubstitutionTable::from_rules(&rules).unwrap_err();
        assert_eq!(
            err,
            TranslitError::ConflictingRule {
                pattern: "W".to_string(),
                first: "W".to_string(),
                second: "В".to_string(),
            }
        );
    }

    #[test]
    fn test_digraphs_precede_their_first_letter() {
        for list in [UPPER, LOWER] {
            for (i, digraph) in list.iter().enumerate().filter(|(_, r)| r.from.chars().count() > 1) {
                for (j, single) in list.iter().enumerate().filter(|(_, r)| r.from.chars().count() == 1) {
                    if digraph.from.starts_with(single.from) {
                        assert!(
                            i < j,
                            "digraph {:?} listed after its first letter {:?}",
                            digraph.from,
                            single.from
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_apostrophe_variants_share_targets() {
        let table = SubstitutionTable::uzbek().unwrap();
        assert_eq!(table.apply("G'"), table.apply("Gʻ"));
        assert_eq!(table.apply("o'"), table.apply("oʻ"));
    }
}
