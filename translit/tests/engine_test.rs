//! Integration tests for [`translit::Transliterator`].
//!
//! Covers: digraph-before-letter ordering, apostrophe-variant equivalence,
//! command and Cyrillic rejection, strict vs permissive script filters,
//! empty input, staleness, and the accepted mixed-case degradation.

use chrono::{Duration, Utc};
use translit::{Policy, ScriptFilter, Transliterator};

fn default_engine() -> Transliterator {
    Transliterator::uzbek(Policy::default()).unwrap()
}

fn strict_engine() -> Transliterator {
    Transliterator::uzbek(Policy::strict()).unwrap()
}

/// **Test: every uppercase digraph becomes exactly one Cyrillic character,
/// never a partial two-character result.**
#[test]
fn uppercase_digraphs_map_to_single_characters() {
    let engine = default_engine();
    for (input, expected) in [
        ("Sh", "Ш"),
        ("Ch", "Ч"),
        ("Yo", "Ё"),
        ("Yu", "Ю"),
        ("Ya", "Я"),
        ("Ye", "Е"),
        ("Ts", "Ц"),
        ("G'", "Ғ"),
        ("O'", "Ў"),
    ] {
        assert_eq!(
            engine.transliterate(input, None).as_deref(),
            Some(expected),
            "digraph {input:?}"
        );
    }
}

/// **Test: digraph-before-letter ordering survives inside a word.**
///
/// **Action:** transliterate "Shoxrux".
/// **Expected:** "Шохрух", not a letter-by-letter corruption like "Сhохруx".
#[test]
fn digraph_ordering_inside_word() {
    assert_eq!(
        default_engine().transliterate("Shoxrux", None).as_deref(),
        Some("Шохрух")
    );
}

/// **Test: straight (U+0027) and modifier-letter (U+02BB) apostrophes produce
/// the same output.**
#[test]
fn apostrophe_variants_are_equivalent() {
    let engine = default_engine();
    assert_eq!(engine.transliterate("O'g'il", None).as_deref(), Some("Ўғил"));
    assert_eq!(engine.transliterate("Oʻgʻil", None).as_deref(), Some("Ўғил"));
}

/// **Test: strings beginning with "/" are never converted, regardless of content.**
#[test]
fn commands_are_ignored() {
    let engine = default_engine();
    assert_eq!(engine.transliterate("/start", None), None);
    assert_eq!(engine.transliterate("/salom dunyo", None), None);
}

/// **Test: strings already containing Cyrillic are never converted; the
/// engine never double-converts.**
#[test]
fn cyrillic_input_is_ignored() {
    let engine = default_engine();
    assert_eq!(engine.transliterate("Салом дунё", None), None);
    // A single Cyrillic letter in otherwise Latin text is enough.
    assert_eq!(engine.transliterate("salom Ў", None), None);

    // Idempotence-adjacent: feeding a previous output back in is a no-op.
    let converted = engine.transliterate("Shoxrux", None).unwrap();
    assert_eq!(engine.transliterate(&converted, None), None);
}

/// **Test: Latin-free input is rejected under the strict filter and passed
/// through unchanged under the permissive default.**
#[test]
fn latin_free_input_depends_on_filter() {
    assert_eq!(strict_engine().transliterate("123 456", None), None);
    assert_eq!(
        default_engine().transliterate("123 456", None).as_deref(),
        Some("123 456")
    );
}

/// **Test: the require-latin filter accepts mixed content but rejects
/// Latin-free strings.**
#[test]
fn require_latin_filter() {
    let engine =
        Transliterator::uzbek(Policy::with_filter(ScriptFilter::RequireLatin)).unwrap();
    assert_eq!(
        engine.transliterate("xona 12", None).as_deref(),
        Some("хона 12")
    );
    assert_eq!(engine.transliterate("12 34", None), None);
}

/// **Test: empty and whitespace-only input yields None, never an empty reply.**
#[test]
fn empty_input_is_ignored() {
    let engine = default_engine();
    assert_eq!(engine.transliterate("", None), None);
    assert_eq!(engine.transliterate("  \n ", None), None);
}

/// **Test: messages older than the staleness cutoff are dropped; newer ones
/// and messages without a timestamp are converted.**
#[test]
fn stale_messages_are_dropped() {
    let start = Utc::now();
    let engine = Transliterator::uzbek(Policy::default().drop_older_than(start)).unwrap();

    assert_eq!(
        engine.transliterate("salom", Some(start - Duration::hours(1))),
        None
    );
    assert_eq!(
        engine
            .transliterate("salom", Some(start + Duration::seconds(1)))
            .as_deref(),
        Some("салом")
    );
    assert_eq!(engine.transliterate("salom", None).as_deref(), Some("салом"));
}

/// **Test: a mixed-case digraph matching neither table converts partially.**
///
/// "sH" matches neither "sh" nor "Sh"; the letters fall through to the single
/// rules. Accepted degradation, kept to match the two-pass table design.
#[test]
fn mixed_case_digraph_converts_partially() {
    assert_eq!(
        default_engine().transliterate("sH", None).as_deref(),
        Some("сҲ")
    );
}

/// **Test: multi-word sentences convert word by word with whitespace preserved.**
#[test]
fn sentences_convert_in_place() {
    assert_eq!(
        default_engine()
            .transliterate("Yangi yil bilan", None)
            .as_deref(),
        Some("Янги йил билан")
    );
}
