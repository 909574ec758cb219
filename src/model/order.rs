/// Represents a customer order.
///
/// # Construction
/// There is no general-purpose constructor. Orders are built through one of two
/// named factory functions, [`Order::prime_order`] and [`Order::urgent_order`],
/// which differ only in which expedite flag they raise.
///
/// The factories never produce an order with both flags set, but the fields are
/// public and independently settable afterwards: mutual exclusivity of `prime`
/// and `urgent` is a convention of the construction paths, not an invariant the
/// type enforces.
use crate::model::{OrderStatus, Product};
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct Order {
    /// Expedited via the prime program.
    pub prime: bool,
    /// Expedited as urgent.
    pub urgent: bool,
    /// The product being ordered. Shared with the catalog, never copied.
    pub product: Arc<Product>,
    /// Current lifecycle stage. Starts at [`OrderStatus::Preparing`].
    pub status: OrderStatus,
}

impl Order {
    /// Creates a prime order for the given product.
    ///
    /// The order starts with `prime = true`, `urgent = false`, and status
    /// [`OrderStatus::Preparing`]. The product reference is stored as passed,
    /// not cloned.
    pub fn prime_order(product: Arc<Product>) -> Self {
        debug!(product = %product.name, "Creating prime order");

        Self {
            prime: true,
            urgent: false,
            product,
            status: OrderStatus::default(),
        }
    }

    /// Creates an urgent order for the given product.
    ///
    /// Symmetric to [`Order::prime_order`]: `urgent = true`, `prime = false`,
    /// status [`OrderStatus::Preparing`], product stored as passed.
    pub fn urgent_order(product: Arc<Product>) -> Self {
        debug!(product = %product.name, "Creating urgent order");

        Self {
            prime: false,
            urgent: true,
            product,
            status: OrderStatus::default(),
        }
    }
}
