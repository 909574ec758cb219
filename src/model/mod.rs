//! Pure data structures for the order domain.

pub mod order;
pub mod product;
pub mod status;

pub use order::*;
pub use product::*;
pub use status::*;
