//! Payment form validation and input sanitising

use crate::constants::MOBILE_DIGITS;
use crate::types::PaymentRequest;
use thiserror::Error;

/// Why a submission was rejected. The message is shown to the user as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a valid payment amount!")]
    InvalidAmount,
    #[error("Please enter a valid 10-digit mobile number!")]
    InvalidMobile,
}

/// Amount must parse as a finite number strictly greater than zero.
pub fn validate_amount(amount: &str) -> Result<f64, ValidationError> {
    match amount.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => Ok(value),
        _ => Err(ValidationError::InvalidAmount),
    }
}

/// Mobile must be exactly ten ASCII digits.
pub fn validate_mobile(mobile: &str) -> Result<(), ValidationError> {
    if mobile.len() == MOBILE_DIGITS && mobile.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(ValidationError::InvalidMobile)
    }
}

impl PaymentRequest {
    /// Amount gate first, then mobile. The note is free text.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_amount(&self.amount)?;
        validate_mobile(&self.mobile)
    }
}

/// Keep digits and dots. A second dot drops the last typed character.
pub fn sanitize_amount_input(input: &str) -> String {
    let mut value: String = input
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    if value.matches('.').count() > 1 {
        value.pop();
    }
    value
}

/// Digits only, at most ten of them.
pub fn sanitize_mobile_input(input: &str) -> String {
    input
        .chars()
        .filter(char::is_ascii_digit)
        .take(MOBILE_DIGITS)
        .collect()
}

/// Two-decimal display form; unparsable input is shown unchanged.
pub fn format_amount(amount: &str) -> String {
    match amount.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => format!("{:.2}", value),
        _ => amount.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_amounts_pass() {
        for amount in ["1", "0.01", "120.00", "99999.5", " 42 "] {
            assert!(validate_amount(amount).is_ok(), "{amount:?} should pass");
        }
    }

    #[test]
    fn zero_negative_and_garbage_amounts_fail() {
        for amount in ["", "0", "0.00", "-5", "abc", ".", "1.2.3", "NaN", "inf"] {
            assert_eq!(
                validate_amount(amount),
                Err(ValidationError::InvalidAmount),
                "{amount:?} should fail"
            );
        }
    }

    #[test]
    fn ten_digit_mobiles_pass() {
        assert!(validate_mobile("9876543210").is_ok());
        assert!(validate_mobile("0000000000").is_ok());
    }

    #[test]
    fn other_mobiles_fail() {
        for mobile in ["", "987654321", "98765432101", "98765x3210", "+919876543", "٩٨٧٦٥٤٣٢١٠"] {
            assert_eq!(
                validate_mobile(mobile),
                Err(ValidationError::InvalidMobile),
                "{mobile:?} should fail"
            );
        }
    }

    #[test]
    fn amount_is_checked_before_mobile() {
        let request = PaymentRequest {
            amount: "0".into(),
            note: String::new(),
            mobile: "123".into(),
        };
        assert_eq!(request.validate(), Err(ValidationError::InvalidAmount));

        let request = PaymentRequest {
            amount: "10".into(),
            ..request
        };
        assert_eq!(request.validate(), Err(ValidationError::InvalidMobile));
    }

    #[test]
    fn error_messages_match_the_notices() {
        assert_eq!(
            ValidationError::InvalidAmount.to_string(),
            "Please enter a valid payment amount!"
        );
        assert_eq!(
            ValidationError::InvalidMobile.to_string(),
            "Please enter a valid 10-digit mobile number!"
        );
    }

    #[test]
    fn amount_input_keeps_digits_and_one_dot() {
        assert_eq!(sanitize_amount_input("₹1,20a.5"), "120.5");
        assert_eq!(sanitize_amount_input("12.5."), "12.5");
        assert_eq!(sanitize_amount_input("12.50"), "12.50");
    }

    #[test]
    fn mobile_input_is_digits_capped_at_ten() {
        assert_eq!(sanitize_mobile_input("+91 98765-43210"), "9198765432");
        assert_eq!(sanitize_mobile_input("98765"), "98765");
    }

    #[test]
    fn format_amount_uses_two_decimals() {
        assert_eq!(format_amount("120"), "120.00");
        assert_eq!(format_amount("0.5"), "0.50");
        assert_eq!(format_amount("abc"), "abc");
    }
}
