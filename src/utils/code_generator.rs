//! Short code generation.

use rand::distr::{Alphanumeric, SampleString};

/// Generates a random short code of the given length.
///
/// Each character is drawn independently and uniformly from the 62-symbol
/// alphabet `{A-Z, a-z, 0-9}`. A single call makes no global uniqueness
/// guarantee; callers insert the candidate and react to the store's conflict
/// answer.
///
/// # Examples
///
/// ```
/// use url_shortener::utils::code_generator::generate_code;
///
/// let code = generate_code(6);
/// assert_eq!(code.len(), 6);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_code(length: usize) -> String {
    Alphanumeric.sample_string(&mut rand::rng(), length)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_code_has_requested_length() {
        for length in [1, 6, 7, 32] {
            assert_eq!(generate_code(length).len(), length);
        }
    }

    #[test]
    fn test_generate_code_alphanumeric_only() {
        for _ in 0..100 {
            let code = generate_code(6);
            assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
        }
    }

    #[test]
    fn test_generate_code_produces_unique_codes() {
        let mut codes = HashSet::new();

        for _ in 0..1000 {
            codes.insert(generate_code(6));
        }

        assert_eq!(codes.len(), 1000);
    }

    #[test]
    fn test_generate_code_covers_alphabet_classes() {
        // 256 six-char samples miss a whole character class with
        // probability well below 1e-30.
        let sample: String = (0..256).map(|_| generate_code(6)).collect();

        assert!(sample.chars().any(|c| c.is_ascii_uppercase()));
        assert!(sample.chars().any(|c| c.is_ascii_lowercase()));
        assert!(sample.chars().any(|c| c.is_ascii_digit()));
    }
}
