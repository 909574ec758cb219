//! # Observability & Tracing
//!
//! [`setup_tracing`] initializes structured logging with the `tracing` crate for
//! binaries built on this library. Library code only emits events (`debug!` at
//! construction sites); it never installs a subscriber itself, so embedding hosts
//! keep full control of their logging setup.
//!
//! ## Configuration
//!
//! Log levels come from the `RUST_LOG` environment variable. The compact format
//! hides the crate/module prefix (`with_target(false)`) to keep log lines short.
//!
//! ```bash
//! # Compact logs (default)
//! RUST_LOG=info cargo run
//!
//! # Show construction events
//! RUST_LOG=debug cargo run
//! ```

pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Don't show module paths - the messages carry the context
        .compact()
        .init();
}
