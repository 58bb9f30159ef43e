//! Traits at the seams between the session logic and its collaborators.

mod identity;
mod store;

pub use identity::Identity;
pub use store::{ConfigStore, TokenStore};
