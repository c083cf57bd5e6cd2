//! Primitive matchers shared by every detector
//!
//! All matching is case-insensitive substring search. Roots may carry a short
//! tail of Turkish letters to approximate suffixation, and a keyword hit can be
//! vetoed when a negation word sits next to it.

use std::sync::OnceLock;

use regex::Regex;

/// Longest suffix tail accepted after a root
pub const MAX_SUFFIX_LEN: usize = 6;

static NEGATED_BEFORE_RE: OnceLock<Option<Regex>> = OnceLock::new();
static NEGATED_AFTER_RE: OnceLock<Option<Regex>> = OnceLock::new();
static WORD_RUN_RE: OnceLock<Option<Regex>> = OnceLock::new();

/// Negation word opening a phrase. The leading `\b` keeps a word that merely
/// ends in one (`piyano`) from vetoing the keyword after it.
const NEGATION_BEFORE: &str = r"\b(?:değil|yok|olmayan|hiç|asla|never|not|no|without)\s+";
/// Negation word following the keyword's word, anchored at the gap.
const NEGATION_AFTER: &str = r"^\s+(?:değil|yok|olmadı|kalmadı)";

/// Letters that may follow a root: ASCII letters plus the Turkish ones.
pub fn is_suffix_letter(c: char) -> bool {
    c.is_ascii_alphabetic() || "çğıöşüÇĞİÖŞÜ".contains(c)
}

/// Case-insensitive substring test
pub fn contains_pattern(text: &str, pattern: &str) -> bool {
    text.to_lowercase().contains(&pattern.to_lowercase())
}

/// Find `root` followed by up to [`MAX_SUFFIX_LEN`] Turkish letters in
/// already-lowercased text, returning the matched word form.
///
/// Behaves like the regex `root[a-zçğıöşü]{0,6}` taken greedily at the first
/// occurrence of the root.
pub fn find_with_suffix<'t>(lower: &'t str, root: &str) -> Option<&'t str> {
    if root.is_empty() {
        return None;
    }
    let start = lower.find(root)?;
    let tail_from = start + root.len();
    let tail_len: usize = lower[tail_from..]
        .chars()
        .take_while(|c| is_suffix_letter(*c))
        .take(MAX_SUFFIX_LEN)
        .map(char::len_utf8)
        .sum();
    Some(&lower[start..tail_from + tail_len])
}

/// Suffix-tolerant root match over arbitrary-case text
pub fn matches_with_suffix(text: &str, root: &str) -> bool {
    find_with_suffix(&text.to_lowercase(), &root.to_lowercase()).is_some()
}

/// True when `keyword` occurs in `text` with a negation word right before it
/// (`hiç mutlu`) or right after the word it belongs to (`mutlu değil`).
///
/// Always false when the keyword is absent.
pub fn is_negated(text: &str, keyword: &str) -> bool {
    let lower = text.to_lowercase();
    let keyword = keyword.to_lowercase();
    if keyword.is_empty() || !lower.contains(&keyword) {
        return false;
    }
    negated_before(&lower, &keyword) || negated_after(&lower, &keyword)
}

/// Byte length of the run of word characters opening `s`
fn word_run_len(s: &str) -> usize {
    cached_regex(&WORD_RUN_RE, r"^\w*")
        .and_then(|re| re.find(s))
        .map_or(0, |m| m.end())
}

/// `hiç mutlu`, `hiç mutluluk`: the keyword starts somewhere in the word
/// right after a negation word.
fn negated_before(lower: &str, keyword: &str) -> bool {
    let Some(re) = cached_regex(&NEGATED_BEFORE_RE, NEGATION_BEFORE) else {
        return false;
    };
    re.find_iter(lower).any(|m| {
        let rest = &lower[m.end()..];
        (0..=word_run_len(rest))
            .any(|i| rest.is_char_boundary(i) && rest[i..].starts_with(keyword))
    })
}

/// `mutlu değil`, `mutluluk yok`: the word holding the keyword is followed
/// by a negation word.
fn negated_after(lower: &str, keyword: &str) -> bool {
    let Some(re) = cached_regex(&NEGATED_AFTER_RE, NEGATION_AFTER) else {
        return false;
    };
    lower.match_indices(keyword).any(|(i, _)| {
        let tail = &lower[i + keyword.len()..];
        re.is_match(&tail[word_run_len(tail)..])
    })
}

/// Compile a fixed pattern once and cache it in `cell`.
///
/// A pattern that fails to compile is cached as `None`, and callers treat
/// that as "no match".
pub(crate) fn cached_regex(
    cell: &'static OnceLock<Option<Regex>>,
    pattern: &str,
) -> Option<&'static Regex> {
    cell.get_or_init(|| Regex::new(pattern).ok()).as_ref()
}

/// Scene text lowercased once and shared by all detectors.
#[derive(Debug, Clone)]
pub struct SceneText<'a> {
    raw: &'a str,
    lower: String,
}

impl<'a> SceneText<'a> {
    pub fn new(raw: &'a str) -> Self {
        Self {
            raw,
            lower: raw.to_lowercase(),
        }
    }

    pub fn raw(&self) -> &'a str {
        self.raw
    }

    pub fn lower(&self) -> &str {
        &self.lower
    }

    pub fn contains(&self, pattern: &str) -> bool {
        self.lower.contains(pattern)
    }

    pub fn contains_any(&self, patterns: &[&str]) -> bool {
        patterns.iter().any(|p| self.lower.contains(p))
    }

    /// First pattern, in slice order, that occurs in the text
    pub fn first_found<'p>(&self, patterns: &[&'p str]) -> Option<&'p str> {
        patterns.iter().copied().find(|p| self.lower.contains(p))
    }

    /// How many distinct patterns occur
    pub fn count_found(&self, patterns: &[&str]) -> usize {
        patterns.iter().filter(|p| self.lower.contains(*p)).count()
    }

    pub fn has_root(&self, root: &str) -> bool {
        find_with_suffix(&self.lower, root).is_some()
    }

    pub fn has_any_root(&self, roots: &[&str]) -> bool {
        roots.iter().any(|r| self.has_root(r))
    }

    /// Root present and not vetoed by a negation
    pub fn has_affirmed_root(&self, root: &str) -> bool {
        self.has_root(root) && !is_negated(&self.lower, root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_pattern_ignores_case() {
        assert!(contains_pattern("Güneş BATARKEN", "batarken"));
        assert!(!contains_pattern("güneş", "ay ışığı"));
        assert!(!contains_pattern("", "deniz"));
    }

    #[test]
    fn test_suffix_match_returns_word_form() {
        assert_eq!(find_with_suffix("sahilde yürüyordu", "yürü"), Some("yürüyordu"));
        assert_eq!(find_with_suffix("denizlerinden", "deniz"), Some("denizlerind"));
        assert_eq!(find_with_suffix("deniz.", "deniz"), Some("deniz"));
        assert_eq!(find_with_suffix("orman", "deniz"), None);
        assert_eq!(find_with_suffix("", "deniz"), None);
        assert_eq!(find_with_suffix("deniz", ""), None);
    }

    #[test]
    fn test_suffix_match_agrees_with_regex() {
        let texts = ["ağaçların altında", "Kılıçlarını çektiler", "köprüden geçti", "su"];
        let roots = ["ağaç", "kılıç", "köprü", "su", "ev"];
        for text in texts {
            let lower = text.to_lowercase();
            for root in roots {
                let re = Regex::new(&format!("{}[a-zçğıöşü]{{0,6}}", regex::escape(root))).unwrap();
                assert_eq!(
                    find_with_suffix(&lower, root),
                    re.find(&lower).map(|m| m.as_str()),
                    "{root} in {text}"
                );
            }
        }
    }

    #[test]
    fn test_matches_with_suffix_case_insensitive() {
        assert!(matches_with_suffix("Adamlar geldi", "adam"));
        assert!(!matches_with_suffix("kadınlar", "erkek"));
    }

    #[test]
    fn test_negated_after() {
        assert!(is_negated("O gün mutlu değildi.", "mutlu"));
        assert!(is_negated("Hiç huzur yok burada", "huzur"));
        assert!(is_negated("mutluluğu kalmadı", "mutlu"));
    }

    #[test]
    fn test_negated_before() {
        assert!(is_negated("hiç mutlu olmadı", "mutlu"));
        assert!(is_negated("not happy at all", "happy"));
    }

    #[test]
    fn test_negation_requires_keyword() {
        assert!(!is_negated("mutlu değil", "hüzün"));
        assert!(!is_negated("", "mutlu"));
        assert!(!is_negated("mutlu bir gün", "mutlu"));
    }

    #[test]
    fn test_negation_word_must_stand_alone() {
        assert!(!is_negated("piyano sakin çalıyordu", "sakin"));
    }

    #[test]
    fn test_negation_patterns_are_cached() {
        assert!(is_negated("mutlu değildi", "mutlu"));
        assert!(matches!(NEGATED_BEFORE_RE.get(), Some(Some(_))));
        assert!(matches!(NEGATED_AFTER_RE.get(), Some(Some(_))));
        assert!(matches!(WORD_RUN_RE.get(), Some(Some(_))));
    }

    #[test]
    fn test_negation_agrees_with_regex() {
        let texts = [
            "kadın bugün hiç mutlu değil",
            "hiç mutluluk kalmadı",
            "mutluluğu yok oldu",
            "piyano sakin çalıyordu",
            "asla korkmadı ama korku yok",
            "no fear here",
            "sevgi olmayan bir ev",
            "mutlu bir gün, üzgün değil",
            "yalnızlık yoktu",
        ];
        let keywords = ["mutlu", "sakin", "kork", "fear", "sevgi", "üzgün", "yalnız", "ev"];
        for text in texts {
            for keyword in keywords {
                let escaped = regex::escape(keyword);
                let before = Regex::new(&format!(
                    r"\b(?:değil|yok|olmayan|hiç|asla|never|not|no|without)\s+\w*{}",
                    escaped
                ))
                .unwrap();
                let after =
                    Regex::new(&format!(r"{}\w*\s+(?:değil|yok|olmadı|kalmadı)", escaped)).unwrap();
                let expected = before.is_match(text) || after.is_match(text);
                assert_eq!(is_negated(text, keyword), expected, "{:?} / {:?}", text, keyword);
            }
        }
    }

    #[test]
    fn test_cached_regex_compiles_once() {
        static CELL: OnceLock<Option<Regex>> = OnceLock::new();
        let first = cached_regex(&CELL, r"\d+").unwrap();
        let second = cached_regex(&CELL, r"ignored").unwrap();
        assert!(std::ptr::eq(first, second));
        assert!(second.is_match("Bölüm 3"));
    }

    #[test]
    fn test_scene_text_helpers() {
        let text = SceneText::new("Yaşlı ADAM sahilde yürüyordu, mutlu değildi.");
        assert_eq!(text.raw(), "Yaşlı ADAM sahilde yürüyordu, mutlu değildi.");
        assert!(text.contains("adam"));
        assert_eq!(text.first_found(&["kadın", "adam", "sahil"]), Some("adam"));
        assert_eq!(text.count_found(&["adam", "sahil", "orman"]), 2);
        assert!(text.has_root("yürü"));
        assert!(!text.has_affirmed_root("mutlu"));
    }
}
