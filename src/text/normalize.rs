use crate::config::Config;

/// Uppercase only the first character of a string. Every other character,
/// including the casing of the remainder, is untouched: "mcDonald" becomes
/// "McDonald". Characters with no uppercase form (digits, punctuation) pass
/// through unchanged.
///
/// Tokens reach this function through whitespace splitting and are therefore
/// never empty; an empty input is a caller bug.
pub fn capitalize_first(word: &str) -> String {
    debug_assert!(!word.is_empty(), "capitalize_first needs a non-empty token");

    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(word.len());
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
            out
        }
        None => String::new(),
    }
}

/// Capitalize the first letter of every whitespace-delimited word, rejoining
/// with single spaces. Token count and order are preserved.
pub fn capitalize_words(line: &str) -> String {
    line.split_whitespace()
        .map(capitalize_first)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Apply the configured case transforms to one line.
///
/// Lowercase and uppercase are mutually exclusive, with lowercase checked
/// first. Capitalization only runs when uppercase mode is not active, since
/// uppercasing already left every first letter upper.
pub fn apply(line: &str, config: &Config) -> String {
    let transformed = if config.lowercase_everything {
        line.to_lowercase()
    } else if config.uppercase_everything {
        line.to_uppercase()
    } else {
        line.to_string()
    };

    if config.capitalize_words && !config.uppercase_everything {
        capitalize_words(&transformed)
    } else {
        transformed
    }
}
