//! Validated value types.
//!
//! These types enforce their invariants at construction time so the rest of
//! the client never handles a blank ISBN or a relative service URL.

mod isbn;
mod protocol;
mod service_url;

pub use isbn::Isbn;
pub use protocol::Protocol;
pub use service_url::ServiceUrl;
