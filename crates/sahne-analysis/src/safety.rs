//! Advisory screening for sensitive content
//!
//! The screen never blocks analysis. It only names what an image backend is
//! likely to refuse.

/// Terms checked against the whole input, Turkish and English
pub const SENSITIVE_TERMS: &[&str] = &[
    "şiddet", "violence", "kan", "blood", "öldür", "kill", "silah", "weapon", "çıplak", "nude",
    "cinsel", "sexual", "erotik", "erotic", "uyuşturucu", "drug", "intihar", "suicide", "işkence",
    "torture",
];

/// How many matched terms the warning names
const NAMED_TERMS: usize = 3;

/// Sensitive terms present in `text`, in list order
pub fn sensitive_terms(text: &str) -> Vec<&'static str> {
    let lower = text.to_lowercase();
    SENSITIVE_TERMS
        .iter()
        .copied()
        .filter(|term| lower.contains(term))
        .collect()
}

/// A Turkish warning naming up to three matched terms, or `None` when the
/// text is clean.
pub fn check_content_warnings(text: &str) -> Option<String> {
    let found = sensitive_terms(text);
    if found.is_empty() {
        return None;
    }
    let named: Vec<&str> = found.into_iter().take(NAMED_TERMS).collect();
    Some(format!(
        "Dikkat: Metinde hassas içerik tespit edildi ({}). Görsel üretim araçları bu tür içerikleri reddedebilir.",
        named.join(", ")
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_text_has_no_warning() {
        assert_eq!(check_content_warnings("Güneş batarken sahilde yürüdü."), None);
        assert_eq!(check_content_warnings(""), None);
    }

    #[test]
    fn test_warning_names_first_three_terms() {
        let warning =
            check_content_warnings("Şiddet dolu gece, kan ve silah sesleri, sonra işkence.").unwrap();
        assert!(warning.starts_with("Dikkat: Metinde hassas içerik tespit edildi (şiddet, kan, silah)."));
        assert!(!warning.contains("işkence"));
    }

    #[test]
    fn test_substring_hits_count() {
        // "kan" is matched inside longer words as well.
        assert_eq!(sensitive_terms("Kanepede oturdu"), vec!["kan"]);
        assert_eq!(sensitive_terms("The KILLER ran"), vec!["kill"]);
    }
}
