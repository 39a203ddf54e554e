use once_cell::sync::Lazy;
use std::collections::HashMap;

// Human-readable names are case-sensitive on purpose: requests are
// expected to spell the language with a leading capital, and anything
// else is coerced upstream to the configured default.
pub const SUPPORTED_LANGUAGES: [(&str, &str); 21] = [
    ("English", "en"),
    ("Hindi", "hi"),
    ("Bengali", "bn"),
    ("Telugu", "te"),
    ("Marathi", "mr"),
    ("Tamil", "ta"),
    ("Urdu", "ur"),
    ("Gujarati", "gu"),
    ("Kannada", "kn"),
    ("Malayalam", "ml"),
    ("Odia", "or"),
    ("Punjabi", "pa"),
    ("Assamese", "as"),
    ("Maithili", "mai"),
    ("Sanskrit", "sa"),
    ("Konkani", "kok"),
    ("Kashmiri", "ks"),
    ("Nepali", "ne"),
    ("Sindhi", "sd"),
    ("Dogri", "doi"),
    ("Bodo", "brx"),
];

static LANG_TO_CODE: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| SUPPORTED_LANGUAGES.iter().copied().collect());

static CODE_TO_LANG: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    SUPPORTED_LANGUAGES
        .iter()
        .map(|(name, code)| (*code, *name))
        .collect()
});

/// Translation code for a language name, e.g. `"Hindi"` → `"hi"`.
pub fn code_for(name: &str) -> Option<&'static str> {
    LANG_TO_CODE.get(name).copied()
}

/// Language name for a translation code, e.g. `"ta"` → `"Tamil"`.
pub fn name_for(code: &str) -> Option<&'static str> {
    CODE_TO_LANG.get(code).copied()
}

pub fn is_supported(name: &str) -> bool {
    LANG_TO_CODE.contains_key(name)
}
