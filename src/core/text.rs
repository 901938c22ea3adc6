use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

static NON_SLUG_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s-]").expect("slug character pattern is valid"));

static SEPARATOR_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[-\s]+").expect("separator pattern is valid"));

static WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\p{L}\p{N}]+").expect("word pattern is valid"));

/// Turn an arbitrary title into a URL-friendly slug.
///
/// Lowercases, drops anything that is not a word character, whitespace or a
/// hyphen, collapses separator runs into a single `-` and trims hyphens from
/// both ends.
///
/// ```
/// assert_eq!(demo_kit::slugify("Hello, World!"), "hello-world");
/// ```
pub fn slugify(title: &str) -> String {
    let slug = title.trim().to_lowercase();
    let slug = NON_SLUG_CHARS.replace_all(&slug, "");
    let slug = SEPARATOR_RUNS.replace_all(&slug, "-");
    slug.trim_matches('-').to_string()
}

/// Return the `k` most frequent words as `(word, count)` pairs.
///
/// Matching is case-insensitive and a word is a run of letters or numbers.
/// Higher counts come first; equal counts are ordered alphabetically.
pub fn top_k_words(text: &str, k: usize) -> Vec<(String, usize)> {
    let lowered = text.to_lowercase();

    let mut counts: HashMap<&str, usize> = HashMap::new();
    for word in WORD.find_iter(&lowered) {
        *counts.entry(word.as_str()).or_insert(0) += 1;
    }

    let mut ranked: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(word, count)| (word.to_string(), count))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked.truncate(k);

    tracing::debug!(requested = k, returned = ranked.len(), "Ranked words");
    ranked
}

/// Clean up a list of person names: trim, collapse inner whitespace and
/// title-case each word.
pub fn normalize_names(names: &[String]) -> Vec<String> {
    names
        .iter()
        .map(|name| {
            let cleaned = name.split_whitespace().collect::<Vec<_>>().join(" ");
            title_case(&cleaned.to_lowercase())
        })
        .collect()
}

// 字母前一個字元不是字母時轉大寫，例如 o'neil -> O'Neil
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_alpha = false;
    for c in text.chars() {
        if prev_alpha {
            out.extend(c.to_lowercase());
        } else {
            out.extend(c.to_uppercase());
        }
        prev_alpha = c.is_alphabetic();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_basic() {
        assert_eq!(slugify("Hello, World!"), "hello-world");
        assert_eq!(slugify("  Python 3.12 — What's New? "), "python-312-whats-new");
        assert_eq!(slugify("---"), "");
        assert_eq!(slugify(""), "");
    }

    #[test]
    fn test_slugify_collapses_separators() {
        assert_eq!(slugify("a  -  b\t\nc"), "a-b-c");
        assert_eq!(slugify("-leading and trailing-"), "leading-and-trailing");
    }

    #[test]
    fn test_top_k_words_examples() {
        assert_eq!(
            top_k_words("red red blue green RED", 2),
            vec![("red".to_string(), 3), ("blue".to_string(), 1)]
        );
        assert_eq!(
            top_k_words("To be, or not to be: that is the question.", 3),
            vec![
                ("be".to_string(), 2),
                ("to".to_string(), 2),
                ("is".to_string(), 1)
            ]
        );
    }

    #[test]
    fn test_top_k_words_edge_cases() {
        assert!(top_k_words("", 5).is_empty());
        assert!(top_k_words("some words here", 0).is_empty());
        assert_eq!(top_k_words("one two", 10).len(), 2);
    }

    #[test]
    fn test_normalize_names() {
        let names = vec![
            "  alice   SMITH ".to_string(),
            "mary o'neil".to_string(),
            "".to_string(),
        ];
        assert_eq!(
            normalize_names(&names),
            vec!["Alice Smith".to_string(), "Mary O'Neil".to_string(), "".to_string()]
        );
    }
}
