//! # Store Configuration
//!
//! Storefront settings loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`GAMESHELF_*`)
//! 2. Defaults (this file)
//!
//! Configuration is read-only after initialization; the checkout summary
//! is derived from it plus the live cart.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use gameshelf_core::{Cart, Money};

// =============================================================================
// Store Config
// =============================================================================

/// Storefront configuration.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct StoreConfig {
    /// Store name shown in headers and the dump tool.
    pub store_name: String,

    /// Currency label appended by [`StoreConfig::format_price`].
    pub currency_label: String,

    /// Flat shipping fee applied to any non-empty cart.
    pub flat_shipping: Money,
}

impl Default for StoreConfig {
    /// Returns default configuration suitable for development.
    ///
    /// ## Default Values
    /// - Store: "GameShelf"
    /// - Currency label: "Toman"
    /// - Shipping: flat 50,000 per order
    fn default() -> Self {
        StoreConfig {
            store_name: "GameShelf".to_string(),
            currency_label: "Toman".to_string(),
            flat_shipping: Money::from_units(50000),
        }
    }
}

impl StoreConfig {
    /// Creates a StoreConfig from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `GAMESHELF_STORE_NAME`: Override store name
    /// - `GAMESHELF_CURRENCY_LABEL`: Override currency label
    /// - `GAMESHELF_FLAT_SHIPPING`: Override shipping fee (whole units)
    pub fn from_env() -> Self {
        let mut config = StoreConfig::default();

        if let Ok(store_name) = std::env::var("GAMESHELF_STORE_NAME") {
            config.store_name = store_name;
        }

        if let Ok(label) = std::env::var("GAMESHELF_CURRENCY_LABEL") {
            config.currency_label = label;
        }

        if let Ok(shipping_str) = std::env::var("GAMESHELF_FLAT_SHIPPING") {
            if let Ok(units) = shipping_str.parse::<i64>() {
                config.flat_shipping = Money::from_units(units);
            }
        }

        config
    }

    /// Shipping for a cart: the flat fee, or nothing for an empty cart.
    pub fn shipping_cost(&self, cart: &Cart) -> Money {
        if cart.is_empty() {
            Money::zero()
        } else {
            self.flat_shipping
        }
    }

    /// The cart page's order summary.
    pub fn checkout_summary(&self, cart: &Cart) -> CheckoutSummary {
        let shipping = self.shipping_cost(cart);
        CheckoutSummary {
            subtotal: cart.total(),
            shipping,
            grand_total: cart.total() + shipping,
        }
    }

    /// Formats a price for display: grouped digits plus the label.
    ///
    /// ## Example
    /// ```rust
    /// use gameshelf_core::Money;
    /// use gameshelf_store::StoreConfig;
    ///
    /// let config = StoreConfig::default();
    /// assert_eq!(config.format_price(Money::from_units(850000)), "850,000 Toman");
    /// ```
    pub fn format_price(&self, price: Money) -> String {
        format!("{} {}", price, self.currency_label)
    }
}

// =============================================================================
// Checkout Summary
// =============================================================================

/// What the cart page's summary box shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutSummary {
    /// The cart's cached total.
    pub subtotal: Money,
    pub shipping: Money,
    pub grand_total: Money,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use gameshelf_core::Product;

    #[test]
    fn test_shipping_is_zero_for_empty_cart() {
        let config = StoreConfig::default();
        let cart = Cart::new();

        assert_eq!(config.shipping_cost(&cart), Money::zero());

        let summary = config.checkout_summary(&cart);
        assert_eq!(summary.subtotal, Money::zero());
        assert_eq!(summary.shipping, Money::zero());
        assert_eq!(summary.grand_total, Money::zero());
    }

    #[test]
    fn test_checkout_summary_adds_flat_shipping() {
        let config = StoreConfig::default();
        let mut cart = Cart::new();
        let game = Product::basic("A", "Harbor Masters", 10000, "strategy", 12);
        cart.add(&game, 2);

        let summary = config.checkout_summary(&cart);
        assert_eq!(summary.subtotal, Money::from_units(20000));
        assert_eq!(summary.shipping, Money::from_units(50000));
        assert_eq!(summary.grand_total, Money::from_units(70000));
    }

    #[test]
    fn test_format_price() {
        let config = StoreConfig::default();
        assert_eq!(config.format_price(Money::from_units(850000)), "850,000 Toman");
        assert_eq!(config.format_price(Money::zero()), "0 Toman");
    }

    #[test]
    fn test_summary_wire_format() {
        let config = StoreConfig::default();
        let mut cart = Cart::new();
        cart.add(&Product::basic("A", "Harbor Masters", 10000, "strategy", 12), 1);

        let json = serde_json::to_string(&config.checkout_summary(&cart)).unwrap();
        assert!(json.contains("\"grandTotal\":60000"));
        assert!(json.contains("\"shipping\":50000"));
    }
}
