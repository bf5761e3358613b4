//! Network measurements around the classifier.
//!
//! - [`resolve`] - hostname to IP addresses
//! - [`probe`] - TCP connect round-trip timing

mod probe;
mod resolve;

// Re-export public functions
pub use probe::tcp_ping;
pub use resolve::resolve_host;
