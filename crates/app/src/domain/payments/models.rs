//! Payment Models

use thiserror::Error;

/// Card details submitted to pay for an order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentCard {
    pub number: i64,
    pub name: String,
    pub month: String,
    pub year: String,
    pub code: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CardValidationError {
    #[error("{0} is not an even number")]
    OddNumber(i64),

    #[error("missing required card field")]
    MissingField,

    #[error("card field exceeds its maximum length")]
    FieldTooLong,
}

impl PaymentCard {
    /// Structural validation of the instrument. The decision whether the
    /// payment is approved is separate (`service::decide`).
    ///
    /// # Errors
    ///
    /// Returns the first rule the card violates.
    pub fn validate(&self) -> Result<(), CardValidationError> {
        if self.number <= 0 || self.number % 2 != 0 {
            return Err(CardValidationError::OddNumber(self.number));
        }

        if self.name.is_empty()
            || self.month.is_empty()
            || self.year.is_empty()
            || self.code.is_empty()
        {
            return Err(CardValidationError::MissingField);
        }

        if self.name.len() > 120
            || self.month.len() > 2
            || self.year.len() > 4
            || self.code.len() > 3
        {
            return Err(CardValidationError::FieldTooLong);
        }

        Ok(())
    }
}

/// Result of a payment attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentOutcome {
    Accepted,
    Declined {
        /// Opaque token handed back with a declined payment; a fresh random
        /// value is generated per attempt.
        payment_error: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(number: i64) -> PaymentCard {
        PaymentCard {
            number,
            name: "JOHN DOE".to_string(),
            month: "05".to_string(),
            year: "2030".to_string(),
            code: "123".to_string(),
        }
    }

    #[test]
    fn even_number_is_valid() {
        assert_eq!(card(12_345_670).validate(), Ok(()));
        assert_eq!(card(4_000_000_000_000_000).validate(), Ok(()));
    }

    #[test]
    fn odd_number_is_rejected() {
        assert_eq!(
            card(12_345_671).validate(),
            Err(CardValidationError::OddNumber(12_345_671))
        );
    }

    #[test]
    fn empty_fields_are_rejected() {
        let mut c = card(12_345_670);
        c.code = String::new();

        assert_eq!(c.validate(), Err(CardValidationError::MissingField));
    }

    #[test]
    fn oversized_fields_are_rejected() {
        let mut c = card(12_345_670);
        c.month = "005".to_string();

        assert_eq!(c.validate(), Err(CardValidationError::FieldTooLong));
    }
}
