//! Identifier case conversion
//!
//! Splits free text or an identifier into words, then renders every case
//! style the tool knows. Word boundaries: whitespace, underscores, hyphens
//! and any other non-alphanumeric character, plus lower-to-upper camel
//! transitions and acronym-then-word transitions (`HTTPServer` -> `HTTP
//! Server`).

use serde::Serialize;

/// One rendered case style
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseRendering {
    pub label: &'static str,
    pub value: String,
}

/// Split text into words on separators and camel boundaries
pub fn split_words(text: &str) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let mut spaced = String::with_capacity(text.len() + 8);

    for (i, &ch) in chars.iter().enumerate() {
        if !ch.is_alphanumeric() {
            spaced.push(' ');
            continue;
        }
        if i > 0 {
            let prev = chars[i - 1];
            let camel = prev.is_lowercase() && ch.is_uppercase();
            let acronym_end = prev.is_uppercase()
                && ch.is_uppercase()
                && chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if camel || acronym_end {
                spaced.push(' ');
            }
        }
        spaced.push(ch);
    }

    spaced.split_whitespace().map(str::to_string).collect()
}

/// Render every case style for the input text
///
/// Returns an empty list for empty (or separator-only) input.
///
/// # Examples
/// ```
/// use forge_encode::case::convert_all;
///
/// let all = convert_all("Hello world");
/// let snake = all.iter().find(|r| r.label == "snake_case").unwrap();
/// assert_eq!(snake.value, "hello_world");
/// ```
pub fn convert_all(text: &str) -> Vec<CaseRendering> {
    let words = split_words(text);
    if words.is_empty() {
        return Vec::new();
    }

    let lower: Vec<String> = words.iter().map(|w| w.to_lowercase()).collect();
    let upper: Vec<String> = words.iter().map(|w| w.to_uppercase()).collect();
    let title: Vec<String> = words.iter().map(|w| capitalize(w)).collect();

    let camel = lower
        .iter()
        .enumerate()
        .map(|(i, w)| if i == 0 { w.clone() } else { capitalize(w) })
        .collect::<Vec<_>>()
        .join("");

    vec![
        rendering("UPPERCASE", text.to_uppercase()),
        rendering("lowercase", text.to_lowercase()),
        rendering("Title Case", title.join(" ")),
        rendering("Sentence case", capitalize(text)),
        rendering("camelCase", camel),
        rendering("PascalCase", title.join("")),
        rendering("snake_case", lower.join("_")),
        rendering("CONSTANT_CASE", upper.join("_")),
        rendering("kebab-case", lower.join("-")),
        rendering("COBOL-CASE", upper.join("-")),
        rendering("dot.case", lower.join(".")),
        rendering("path/case", lower.join("/")),
        rendering("Alternating Case", alternating_case(text)),
        rendering("Inverse Case", inverse_case(text)),
    ]
}

fn rendering(label: &'static str, value: String) -> CaseRendering {
    CaseRendering { label, value }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

fn alternating_case(text: &str) -> String {
    text.chars()
        .enumerate()
        .flat_map(|(i, c)| {
            if i % 2 == 0 {
                c.to_lowercase().collect::<Vec<_>>()
            } else {
                c.to_uppercase().collect::<Vec<_>>()
            }
        })
        .collect()
}

fn inverse_case(text: &str) -> String {
    text.chars()
        .flat_map(|c| {
            if c.is_uppercase() {
                c.to_lowercase().collect::<Vec<_>>()
            } else {
                c.to_uppercase().collect::<Vec<_>>()
            }
        })
        .collect()
}
