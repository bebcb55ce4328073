//! Error types shared across the verification stack
//!
//! Structural errors mean "cannot evaluate": the input is malformed and no
//! verdict can be produced. They are deliberately separate from trade-level
//! verification failures, which are recorded as data in a verdict.

use thiserror::Error;

use crate::ids::OrderId;

/// Amount parsing errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AmountError {
    #[error("empty amount")]
    Empty,

    #[error("malformed amount {0:?}: expected base-10 digits")]
    Malformed(String),

    #[error("negative amount {0}")]
    Negative(String),
}

/// Input defect that prevents any verdict from being computed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StructuralError {
    #[error("invalid order side {side:?} on order {order_id}")]
    InvalidSide { order_id: OrderId, side: String },

    #[error("malformed encoding: {0}")]
    MalformedEncoding(String),
}

impl From<serde_json::Error> for StructuralError {
    fn from(err: serde_json::Error) -> Self {
        StructuralError::MalformedEncoding(err.to_string())
    }
}

impl From<AmountError> for StructuralError {
    fn from(err: AmountError) -> Self {
        StructuralError::MalformedEncoding(err.to_string())
    }
}
