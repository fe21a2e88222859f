//! Order Models

use jiff::Timestamp;

use crate::domain::products::models::ProductSnapshot;

/// Delivery option, stored as an integer code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeliveryType {
    #[default]
    Ordinary,
    Express,
}

impl DeliveryType {
    #[must_use]
    pub fn from_code(code: i32) -> Self {
        if code == 1 { Self::Express } else { Self::Ordinary }
    }

    #[must_use]
    pub fn code(self) -> i32 {
        match self {
            Self::Ordinary => 0,
            Self::Express => 1,
        }
    }

    /// Anything other than `"ordinary"` reads as express.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        if value == "ordinary" {
            Self::Ordinary
        } else {
            Self::Express
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ordinary => "ordinary",
            Self::Express => "express",
        }
    }
}

/// Payment option, stored as an integer code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaymentType {
    #[default]
    Online,
    OnlineForeign,
}

impl PaymentType {
    #[must_use]
    pub fn from_code(code: i32) -> Self {
        if code == 1 { Self::OnlineForeign } else { Self::Online }
    }

    #[must_use]
    pub fn code(self) -> i32 {
        match self {
            Self::Online => 0,
            Self::OnlineForeign => 1,
        }
    }

    /// Anything other than `"online"` reads as the foreign-account option.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        if value == "online" {
            Self::Online
        } else {
            Self::OnlineForeign
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Online => "online",
            Self::OnlineForeign => "Online with foreign account",
        }
    }
}

/// Order status, stored as an integer code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderStatus {
    #[default]
    InProcess,
    Declined,
    Accepted,
}

impl OrderStatus {
    #[must_use]
    pub fn from_code(code: i32) -> Self {
        match code {
            1 => Self::Declined,
            2 => Self::Accepted,
            _ => Self::InProcess,
        }
    }

    #[must_use]
    pub fn code(self) -> i32 {
        match self {
            Self::InProcess => 0,
            Self::Declined => 1,
            Self::Accepted => 2,
        }
    }

    /// Unrecognised values read as accepted.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value {
            "In process" => Self::InProcess,
            "Declined" => Self::Declined,
            _ => Self::Accepted,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::InProcess => "In process",
            Self::Declined => "Declined",
            Self::Accepted => "Accepted",
        }
    }
}

/// Persisted order with its line items loaded.
#[derive(Debug, Clone)]
pub struct Order {
    pub id: i64,
    pub date: Timestamp,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub city: Option<String>,
    pub address: Option<String>,
    pub delivery_type: DeliveryType,
    pub payment_type: PaymentType,
    pub status: OrderStatus,
    pub products: Vec<ProductSnapshot>,
}

/// A line submitted at checkout. Products are matched by title and
/// description, not id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmittedItem {
    pub title: String,
    pub description: String,
    pub count: i32,
}

/// Customer fields copied onto an order when the caller is authenticated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    pub full_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// Scalar fields applied by order confirmation. Line items are untouched.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OrderUpdate {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub city: Option<String>,
    pub address: Option<String>,
    pub delivery_type: DeliveryType,
    pub payment_type: PaymentType,
    pub status: OrderStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delivery_type_round_trips_codes_and_strings() {
        assert_eq!(DeliveryType::parse("ordinary"), DeliveryType::Ordinary);
        assert_eq!(DeliveryType::parse("express"), DeliveryType::Express);
        assert_eq!(DeliveryType::parse("anything"), DeliveryType::Express);
        assert_eq!(DeliveryType::from_code(0).as_str(), "ordinary");
        assert_eq!(DeliveryType::from_code(1).as_str(), "express");
    }

    #[test]
    fn payment_type_display_is_asymmetric_to_parse() {
        assert_eq!(PaymentType::parse("online"), PaymentType::Online);
        assert_eq!(
            PaymentType::parse("Online with foreign account"),
            PaymentType::OnlineForeign
        );
        assert_eq!(
            PaymentType::OnlineForeign.as_str(),
            "Online with foreign account"
        );
    }

    #[test]
    fn status_parse_defaults_to_accepted() {
        assert_eq!(OrderStatus::parse("In process").code(), 0);
        assert_eq!(OrderStatus::parse("Declined").code(), 1);
        assert_eq!(OrderStatus::parse("Accepted").code(), 2);
        assert_eq!(OrderStatus::parse("garbage").code(), 2);
    }
}
