use unicode_normalization::UnicodeNormalization;

/// Folds `input` for accent- and case-insensitive comparison.
///
/// The text is decomposed (NFD), combining diacritical marks
/// (U+0300..=U+036F) are dropped, and the result is lowercased and trimmed.
pub fn normalize_text(input: &str) -> String {
    input
        .nfd()
        .filter(|c| !('\u{0300}'..='\u{036f}').contains(c))
        .collect::<String>()
        .to_lowercase()
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_accents_and_case() {
        assert_eq!(normalize_text("ANA PAÚLA"), "ana paula");
        assert_eq!(normalize_text("João"), "joao");
        assert_eq!(normalize_text("Conceição"), "conceicao");
    }

    #[test]
    fn test_trims_whitespace() {
        assert_eq!(normalize_text("  José  "), "jose");
    }

    #[test]
    fn test_idempotent() {
        for s in ["ANA PAÚLA", "  José  ", "Müller", "", "ÇÃÕ"] {
            let once = normalize_text(s);
            assert_eq!(normalize_text(&once), once);
        }
    }

    #[test]
    fn test_precomposed_and_decomposed_agree() {
        assert_eq!(normalize_text("e\u{0301}"), normalize_text("\u{00e9}"));
    }
}
