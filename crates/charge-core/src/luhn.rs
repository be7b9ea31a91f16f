//! # Luhn Checksum
//!
//! Mod-10 checksum used to sanity-check card numbers before a payment is
//! confirmed. Formatting characters (spaces, dashes) are discarded, so
//! `"4242-4242-4242-4242"` and `"4242424242424242"` validate identically.

/// Minimum number of digits a card number must carry to be checked at all
pub const MIN_CARD_DIGITS: usize = 12;

/// Strip everything but ASCII digits from a card number
pub fn normalize_card_number(card_number: &str) -> String {
    card_number.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Validate a card number with the Luhn algorithm.
///
/// Returns `false` when fewer than [`MIN_CARD_DIGITS`] digits remain after
/// stripping. Digits are walked from the most significant one; the doubled
/// positions are those whose index has the same parity as the digit count,
/// which lines them up with every second digit counted from the right.
pub fn luhn_check(card_number: &str) -> bool {
    let digits: Vec<u32> = normalize_card_number(card_number)
        .bytes()
        .map(|b| u32::from(b - b'0'))
        .collect();
    if digits.len() < MIN_CARD_DIGITS {
        return false;
    }

    let parity = digits.len() % 2;
    let checksum: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, &d)| {
            if i % 2 == parity {
                let doubled = d * 2;
                if doubled > 9 {
                    doubled - 9
                } else {
                    doubled
                }
            } else {
                d
            }
        })
        .sum();

    checksum % 10 == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_test_cards() {
        assert!(luhn_check("4242424242424242"));
        assert!(luhn_check("5555555555554444"));
        assert!(luhn_check("4111 1111 1111 1111"));
    }

    #[test]
    fn test_single_digit_alteration_fails() {
        assert!(!luhn_check("4242424242424241"));
        assert!(!luhn_check("4111111111111112"));
    }

    #[test]
    fn test_odd_length_numbers() {
        // 15-digit Amex and 13-digit Visa test numbers
        assert!(luhn_check("378282246310005"));
        assert!(luhn_check("4222222222222"));
    }

    #[test]
    fn test_too_short_is_rejected() {
        // Valid checksum, but only 11 digits
        assert!(!luhn_check("79927398713"));
        assert!(!luhn_check("00000000000"));
        assert!(!luhn_check(""));
        assert!(!luhn_check("4242-4242"));
    }

    #[test]
    fn test_twelve_zeros_is_minimum_valid() {
        assert!(luhn_check("000000000000"));
    }

    #[test]
    fn test_formatting_is_ignored() {
        assert_eq!(
            luhn_check("4242-4242-4242-4242"),
            luhn_check("4242424242424242")
        );
        assert_eq!(luhn_check("1234-5678-9012"), luhn_check("123456789012"));
        assert!(luhn_check(" 4242 4242 4242 4242 "));
    }

    #[test]
    fn test_non_ascii_digits_are_discarded() {
        assert!(!luhn_check("４２４２４２４２４２４２４２４２"));
    }

    #[test]
    fn test_idempotent() {
        for input in ["4242424242424242", "4242424242424241", "abc", "000000000000"] {
            assert_eq!(luhn_check(input), luhn_check(input));
        }
    }

    #[test]
    fn test_check_agrees_with_normalized_input() {
        for input in ["4242-4242-4242-4242", "4111 1111 1111 1112", "12ab34", "３７８282246310005"] {
            assert_eq!(luhn_check(input), luhn_check(&normalize_card_number(input)));
        }
    }

    #[test]
    fn test_normalize_card_number() {
        assert_eq!(normalize_card_number("4242-4242 4242x4242"), "4242424242424242");
        assert_eq!(normalize_card_number("no digits"), "");
    }
}
