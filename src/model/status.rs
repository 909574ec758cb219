//! The order lifecycle enumeration.
//!
//! Statuses are labels with pipeline positions, nothing more: no transition logic
//! lives here. Whatever owns an [`Order`](crate::model::Order) decides when to move
//! it along.

use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;
use thiserror::Error;

/// The lifecycle stage of an order, in pipeline order.
///
/// Each status carries an ordinal reflecting its position in the pipeline
/// (`Preparing` is 0, `Delivered` is 3). The set is closed and the ordinals are
/// fixed for the lifetime of the process.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    /// The order has been placed and is being prepared. Initial status.
    #[default]
    Preparing = 0,
    /// The order has left the warehouse.
    Shipped = 1,
    /// The order is out for delivery.
    Delivering = 2,
    /// The order has reached the customer. Terminal status.
    Delivered = 3,
}

impl OrderStatus {
    /// Returns the pipeline position of this status, 0 through 3.
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Looks up a status by its pipeline position.
    ///
    /// Returns `None` for ordinals outside `0..=3`.
    pub const fn from_ordinal(ordinal: u8) -> Option<Self> {
        match ordinal {
            0 => Some(Self::Preparing),
            1 => Some(Self::Shipped),
            2 => Some(Self::Delivering),
            3 => Some(Self::Delivered),
            _ => None,
        }
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Preparing => "preparing",
            Self::Shipped => "shipped",
            Self::Delivering => "delivering",
            Self::Delivered => "delivered",
        };
        write!(f, "{}", name)
    }
}

/// Error returned when parsing an unknown status name.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unknown order status: {0}")]
pub struct ParseStatusError(pub String);

impl FromStr for OrderStatus {
    type Err = ParseStatusError;

    /// Parses a status from its canonical name, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "preparing" => Ok(Self::Preparing),
            "shipped" => Ok(Self::Shipped),
            "delivering" => Ok(Self::Delivering),
            "delivered" => Ok(Self::Delivered),
            other => Err(ParseStatusError(other.to_string())),
        }
    }
}
