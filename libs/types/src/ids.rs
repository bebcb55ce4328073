//! Identifier types for snapshot entities
//!
//! Identifiers are opaque strings assigned by the orderbook operator. The
//! verifier only ever compares them for equality, so no format is enforced.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }
    };
}

string_id!(
    /// Identifier of a resting order, unique within one snapshot
    OrderId
);

string_id!(
    /// Identifier of a claimed trade
    TradeId
);

string_id!(
    /// Market identifier (e.g. "BTC-USD", "TRUMP-2024-WIN")
    MarketId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_id_equality() {
        assert_eq!(OrderId::from("buy-1"), OrderId::new("buy-1".to_string()));
        assert_ne!(OrderId::from("buy-1"), OrderId::from("buy-2"));
    }

    #[test]
    fn test_id_serializes_as_bare_string() {
        let id = TradeId::from("trade-001");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"trade-001\"");

        let deserialized: TradeId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }

    #[test]
    fn test_market_id_empty() {
        assert!(MarketId::default().is_empty());
        assert!(!MarketId::from("BTC-USD").is_empty());
        assert_eq!(MarketId::from("BTC-USD").to_string(), "BTC-USD");
    }
}
