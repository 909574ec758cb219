/// Represents a product referenced by orders.
///
/// Products are owned outside the order pipeline: an [`Order`](crate::model::Order)
/// only holds a shared reference to one and never reads or modifies it. The fields
/// here are the minimum a catalog entry carries.
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub price: f64,
}

impl Product {
    /// Creates a new Product instance.
    ///
    /// # Arguments
    /// * `name` - Product name
    /// * `price` - Product price
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}
