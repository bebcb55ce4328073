//! Arbitrary-precision integer amounts for prices and quantities
//!
//! Amounts are expressed in the smallest currency unit (wei-style
//! fixed point), so a single price routinely exceeds `u64::MAX`. Both
//! types wrap `BigUint`: they can never be negative, never overflow and
//! always compare exactly.
//!
//! On the wire an amount is a base-10 string (`"530000000000000000"`).
//! Deserialization also accepts a bare JSON integer of any size; serde_json
//! is built with `arbitrary_precision` so integers beyond `u64::MAX` reach
//! the visitor as their original digits. Anything else (signs, decimals,
//! exponents, separators) is rejected.

use num_bigint::BigUint;
use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::errors::AmountError;

/// Digits of an arbitrary-precision JSON number
fn parse_json_number(number: &serde_json::Number) -> Result<BigUint, AmountError> {
    let digits = number.to_string();
    if digits.starts_with('-') {
        return Err(AmountError::Negative(digits));
    }
    parse_digits(&digits)
}

/// Parse a strict base-10 digit string.
fn parse_digits(s: &str) -> Result<BigUint, AmountError> {
    if s.is_empty() {
        return Err(AmountError::Empty);
    }
    if !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AmountError::Malformed(s.to_string()));
    }
    BigUint::from_str(s).map_err(|_| AmountError::Malformed(s.to_string()))
}

macro_rules! amount_type {
    ($(#[$meta:meta])* $name:ident, $expecting:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
        pub struct $name(BigUint);

        impl $name {
            pub fn zero() -> Self {
                Self(BigUint::default())
            }

            pub fn from_u64(value: u64) -> Self {
                Self(BigUint::from(value))
            }

            pub fn from_u128(value: u128) -> Self {
                Self(BigUint::from(value))
            }
        }

        impl FromStr for $name {
            type Err = AmountError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                parse_digits(s).map(Self)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u64> for $name {
            fn from(value: u64) -> Self {
                Self::from_u64(value)
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.collect_str(&self.0)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                struct AmountVisitor;

                impl<'de> Visitor<'de> for AmountVisitor {
                    type Value = $name;

                    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                        f.write_str($expecting)
                    }

                    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                        v.parse().map_err(E::custom)
                    }

                    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
                        Ok($name::from_u64(v))
                    }

                    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
                        u64::try_from(v)
                            .map($name::from_u64)
                            .map_err(|_| E::custom(AmountError::Negative(v.to_string())))
                    }

                    // JSON numbers under `arbitrary_precision`
                    fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<Self::Value, A::Error> {
                        let number = serde_json::Number::deserialize(
                            de::value::MapAccessDeserializer::new(map),
                        )?;
                        parse_json_number(&number).map($name).map_err(de::Error::custom)
                    }
                }

                deserializer.deserialize_any(AmountVisitor)
            }
        }
    };
}

amount_type!(
    /// Limit or execution price in the smallest currency unit
    Price,
    "a non-negative base-10 integer price"
);

amount_type!(
    /// Order or trade size in the smallest currency unit
    Quantity,
    "a non-negative base-10 integer quantity"
);
