//! Language names offered as suggestions at the target-language prompt.
//!
//! The list only drives autocompletion; any typed value is sent as-is.

use inquire::autocompletion::{Autocomplete, Replacement};

/// Common target languages, by English name.
pub const COMMON_LANGUAGES: &[&str] = &[
    "Arabic",
    "Bengali",
    "Catalan",
    "Chinese (Simplified)",
    "Chinese (Traditional)",
    "Czech",
    "Danish",
    "Dutch",
    "Finnish",
    "French",
    "German",
    "Greek",
    "Hebrew",
    "Hindi",
    "Hungarian",
    "Indonesian",
    "Italian",
    "Japanese",
    "Korean",
    "Latin",
    "Norwegian",
    "Persian",
    "Polish",
    "Portuguese",
    "Romanian",
    "Russian",
    "Spanish",
    "Swahili",
    "Swedish",
    "Tagalog",
    "Thai",
    "Turkish",
    "Ukrainian",
    "Urdu",
    "Vietnamese",
];

/// Returns the languages whose name starts with `input`, ignoring case.
pub fn suggest_languages(input: &str) -> Vec<&'static str> {
    let prefix = input.trim().to_lowercase();
    if prefix.is_empty() {
        return vec![];
    }

    COMMON_LANGUAGES
        .iter()
        .copied()
        .filter(|name| name.to_lowercase().starts_with(&prefix))
        .collect()
}

/// Target language autocompleter
#[derive(Clone, Default)]
pub struct LanguageCompleter;

impl Autocomplete for LanguageCompleter {
    fn get_suggestions(&mut self, input: &str) -> Result<Vec<String>, inquire::CustomUserError> {
        Ok(suggest_languages(input)
            .into_iter()
            .map(str::to_string)
            .collect())
    }

    fn get_completion(
        &mut self,
        _input: &str,
        highlighted_suggestion: Option<String>,
    ) -> Result<Replacement, inquire::CustomUserError> {
        Ok(highlighted_suggestion)
    }
}
