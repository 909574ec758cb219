//! # Order Domain
//!
//! > **Named factory functions as the only way to build an order.**
//!
//! This crate models a small order pipeline: an [`Order`](model::Order) with two
//! expedite flags, a closed [`OrderStatus`](model::OrderStatus) lifecycle enum, and
//! a process-wide [`Settings`](settings::Settings) holder.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### Why named factories instead of a general constructor?
//!
//! An order is either a *prime* order or an *urgent* order. Rather than exposing a
//! constructor that takes two booleans (and invites callers to set both, or
//! neither), construction goes through two named functions:
//!
//! - [`Order::prime_order`](model::Order::prime_order)
//! - [`Order::urgent_order`](model::Order::urgent_order)
//!
//! The names carry the intent; the signatures stay identical. Note that this is a
//! **convention, not an enforced invariant**: the flag fields remain public and
//! independently settable. See the [`Order`](model::Order) docs.
//!
//! ### Shared settings
//!
//! [`Settings::shared`](settings::Settings::shared) returns one process-wide
//! instance, initialized exactly once via [`std::sync::OnceLock`] and read-only
//! afterwards, so concurrent hosts can call it freely. Independent instances can
//! still be built with [`Settings::new`](settings::Settings::new).
//!
//! ## 🗺️ Module Tour
//!
//! - **[`model`]**: Pure data structures ([`Order`](model::Order),
//!   [`Product`](model::Product), [`OrderStatus`](model::OrderStatus)).
//! - **[`settings`]**: Process-wide and per-instance configuration flags.
//! - **[`runtime`]**: Tracing setup for the demo binary.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Run the demo with info logs
//! RUST_LOG=info cargo run
//! ```
//!
//! ### Running Tests
//!
//! ```bash
//! cargo test
//! ```

pub mod model;
pub mod runtime;
pub mod settings;
