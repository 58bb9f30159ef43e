//! libros-file - File-backed durable state for the libros client.

mod store;

pub use store::{FileStore, STATE_FILE};
