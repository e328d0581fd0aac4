use std::collections::BTreeMap;

/// Localization boundary. The application ships its own string tables;
/// unknown keys come back verbatim so missing entries stay visible.
pub trait Lexicon {
    /// Returns the text for `key` in `lang`, or the key itself if unknown.
    fn lookup(&self, lang: &str, key: &str) -> String;

    /// Same as [`Lexicon::lookup`], substituting `{}` placeholders in order.
    fn lookup_args(&self, lang: &str, key: &str, args: &[&str]) -> String {
        let mut text = self.lookup(lang, key);
        for arg in args {
            match text.find("{}") {
                Some(pos) => text.replace_range(pos..pos + 2, arg),
                None => break,
            }
        }
        text
    }
}

/// Table-backed lexicon used by tests and simple hosts.
#[derive(Clone, Debug, Default)]
pub struct TableLexicon {
    entries: BTreeMap<(String, String), String>,
}

impl TableLexicon {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, lang: &str, key: &str, text: &str) {
        self.entries
            .insert((lang.to_string(), key.to_string()), text.to_string());
    }
}

impl Lexicon for TableLexicon {
    fn lookup(&self, lang: &str, key: &str) -> String {
        self.entries
            .get(&(lang.to_string(), key.to_string()))
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }
}

#[test]
fn test_lookup_falls_back_to_key() {
    let mut lexicon = TableLexicon::new();
    lexicon.insert("en", "latency", "Latency");
    assert_eq!(lexicon.lookup("en", "latency"), "Latency");
    assert_eq!(lexicon.lookup("pt", "latency"), "latency");
    assert_eq!(lexicon.lookup("en", "missing"), "missing");
}

#[test]
fn test_lookup_args() {
    let mut lexicon = TableLexicon::new();
    lexicon.insert("en", "latency_of_x", "Latency of {} ({} {})");
    assert_eq!(
        lexicon.lookup_args("en", "latency_of_x", &["ALU", "4", "ps"]),
        "Latency of ALU (4 ps)"
    );
    // extra args beyond the placeholders are dropped
    assert_eq!(
        lexicon.lookup_args("en", "latency_of_x", &["a", "b", "c", "d"]),
        "Latency of a (b c)"
    );
}
