//! Brazilian CPF (taxpayer registry number) check-digit validation.

const CPF_LEN: usize = 11;

/// Keeps only the ASCII digits of `cpf`.
pub fn strip_cpf(cpf: &str) -> String {
    cpf.chars().filter(char::is_ascii_digit).collect()
}

/// Returns whether `cpf` is a structurally valid CPF.
///
/// Formatting characters are ignored, so `"529.982.247-25"` and
/// `"52998224725"` are equivalent. Sequences of a single repeated digit pass
/// the check-digit arithmetic but are never issued, so they are rejected.
pub fn is_valid_cpf(cpf: &str) -> bool {
    let digits: Vec<u32> = strip_cpf(cpf)
        .chars()
        .filter_map(|c| c.to_digit(10))
        .collect();

    if digits.len() != CPF_LEN {
        return false;
    }

    if digits.iter().all(|&d| d == digits[0]) {
        return false;
    }

    check_digit(&digits[..9]) == digits[9] && check_digit(&digits[..10]) == digits[10]
}

/// Weighted-sum check digit over `digits`, weights descending from `len + 1` to 2.
fn check_digit(digits: &[u32]) -> u32 {
    let top_weight = digits.len() as u32 + 1;
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, d)| d * (top_weight - i as u32))
        .sum();

    match (sum * 10) % 11 {
        10 => 0,
        r => r,
    }
}

/// Formats an 11-digit CPF as `XXX.XXX.XXX-XX`; anything else is returned digits-only.
pub fn format_cpf(cpf: &str) -> String {
    let digits = strip_cpf(cpf);
    if digits.len() != CPF_LEN {
        return digits;
    }

    format!(
        "{}.{}.{}-{}",
        &digits[0..3],
        &digits[3..6],
        &digits[6..9],
        &digits[9..11]
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_valid_cpf() {
        assert!(is_valid_cpf("529.982.247-25"));
        assert!(is_valid_cpf("52998224725"));
        assert!(is_valid_cpf("111.444.777-35"));
    }

    #[test]
    fn test_repeated_digits_rejected() {
        assert!(!is_valid_cpf("111.111.111-11"));
        assert!(!is_valid_cpf("00000000000"));
        assert!(!is_valid_cpf("99999999999"));
    }

    #[test]
    fn test_altered_check_digits_rejected() {
        assert!(!is_valid_cpf("529.982.247-35"));
        assert!(!is_valid_cpf("529.982.247-26"));
    }

    #[test]
    fn test_wrong_length_rejected() {
        assert!(!is_valid_cpf(""));
        assert!(!is_valid_cpf("5299822472"));
        assert!(!is_valid_cpf("529982247251"));
        assert!(!is_valid_cpf("abc.def.ghi-jk"));
    }

    #[test]
    fn test_check_digit_matches_reference_formula() {
        // Reference: r = 11 - (sum % 11), with 10 and 11 mapped to 0.
        fn reference(digits: &[u32]) -> u32 {
            let top = digits.len() as u32 + 1;
            let sum: u32 = digits
                .iter()
                .enumerate()
                .map(|(i, d)| d * (top - i as u32))
                .sum();
            match 11 - (sum % 11) {
                10 | 11 => 0,
                r => r,
            }
        }

        for seed in 0u64..2000 {
            let mut n = seed.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
            let digits: Vec<u32> = (0..10)
                .map(|_| {
                    n = n.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1_442_695_040_888_963_407);
                    ((n >> 33) % 10) as u32
                })
                .collect();
            assert_eq!(check_digit(&digits[..9]), reference(&digits[..9]));
            assert_eq!(check_digit(&digits[..10]), reference(&digits[..10]));
        }
    }

    #[test]
    fn test_format_cpf() {
        assert_eq!(format_cpf("52998224725"), "529.982.247-25");
        assert_eq!(format_cpf("529.982.247-25"), "529.982.247-25");
        assert_eq!(format_cpf("123"), "123");
    }

    #[test]
    fn test_strip_cpf() {
        assert_eq!(strip_cpf(" 987.654.321-00 "), "98765432100");
    }
}
