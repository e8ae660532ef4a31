//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between the recognition pipeline and
//! the outside world: where scanned records come from and where results go.
//!
//! Implementations live in the `adapters` module.

mod account_sink;
mod record_source;

pub use account_sink::AccountSink;
pub use record_source::RecordSource;
