//! Order pricing rules.
//!
//! Pure computation over materialised line items; settings resolution is the
//! caller's concern.

use rust_decimal::Decimal;

use crate::domain::{
    orders::models::DeliveryType,
    products::models::ProductSnapshot,
    settings::{SettingsService, errors::SettingsServiceError},
};

/// Settings key for the express delivery surcharge.
pub const EXPRESS_DELIVERY_PRICE_KEY: &str = "express_delivery_price";

/// Settings key for the free-delivery threshold.
pub const FREE_DELIVERY_MIN_PRICE_KEY: &str = "free_delivery_min_price";

/// Settings key for the ordinary delivery fee.
pub const DEFAULT_DELIVERY_PRICE_KEY: &str = "default_delivery_price";

/// Delivery pricing constants, each independently defaulted when its key is
/// absent from the settings store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricingSettings {
    pub express_delivery_price: Decimal,
    pub free_delivery_min_price: Decimal,
    pub default_delivery_price: Decimal,
}

impl Default for PricingSettings {
    fn default() -> Self {
        Self {
            express_delivery_price: Decimal::from(5),
            free_delivery_min_price: Decimal::from(20),
            default_delivery_price: Decimal::from(2),
        }
    }
}

impl PricingSettings {
    /// Resolve the pricing constants through the settings service.
    ///
    /// # Errors
    ///
    /// Returns an error when the settings store cannot be read.
    pub async fn load(settings: &dyn SettingsService) -> Result<Self, SettingsServiceError> {
        let defaults = Self::default();

        Ok(Self {
            express_delivery_price: settings
                .get(EXPRESS_DELIVERY_PRICE_KEY)
                .await?
                .unwrap_or(defaults.express_delivery_price),
            free_delivery_min_price: settings
                .get(FREE_DELIVERY_MIN_PRICE_KEY)
                .await?
                .unwrap_or(defaults.free_delivery_min_price),
            default_delivery_price: settings
                .get(DEFAULT_DELIVERY_PRICE_KEY)
                .await?
                .unwrap_or(defaults.default_delivery_price),
        })
    }
}

/// Total cost of an order: item subtotal plus the delivery fee.
///
/// Express delivery always pays the surcharge. Ordinary delivery pays the
/// default fee unless the subtotal strictly exceeds the free-delivery
/// threshold: an order exactly at the threshold still pays it.
#[must_use]
pub fn order_total(
    items: &[ProductSnapshot],
    delivery: DeliveryType,
    settings: &PricingSettings,
) -> Decimal {
    let subtotal: Decimal = items
        .iter()
        .map(|item| item.price * Decimal::from(item.count))
        .sum();

    match delivery {
        DeliveryType::Express => subtotal + settings.express_delivery_price,
        DeliveryType::Ordinary if subtotal <= settings.free_delivery_min_price => {
            subtotal + settings.default_delivery_price
        }
        DeliveryType::Ordinary => subtotal,
    }
}
