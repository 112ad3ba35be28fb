//! Card operations as free functions over a device, wrapped by [`crate::Card`].

/// Sector authentication
pub mod auth;
/// Block reads and dumps
pub mod read;
/// Block writes
pub mod write;

pub use auth::authenticate;
pub use read::{dump_blocks, read_block};
pub use write::write_block;
