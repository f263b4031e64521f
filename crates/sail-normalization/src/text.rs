//! Word capitalization and digit extraction.

/// Capitalize every whitespace-separated word.
///
/// Each word becomes its first character upper-cased followed by the rest
/// lower-cased. Words are split on whitespace only, so punctuation inside a
/// word is not a boundary: `"o'brien"` becomes `"O'brien"` and `"mary-jane"`
/// becomes `"Mary-jane"`. Runs of whitespace collapse to a single space.
///
/// Absent input yields an empty string.
pub fn capitalize(text: Option<&str>) -> String {
    let Some(text) = text else {
        return String::new();
    };

    text.split_whitespace()
        .map(capitalize_word)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            let mut out: String = first.to_uppercase().collect();
            out.push_str(&chars.as_str().to_lowercase());
            out
        }
        None => String::new(),
    }
}

/// Keep only the ASCII digits `0`-`9`, in order. Digits from other scripts
/// are dropped like any other character.
///
/// Absent input stays absent, which lets callers tell "not supplied" apart
/// from "supplied without digits" (`Some("")`).
pub fn extract_digits(text: Option<&str>) -> Option<String> {
    text.map(|t| t.chars().filter(char::is_ascii_digit).collect())
}
