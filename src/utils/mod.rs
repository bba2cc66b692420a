//! Utility helpers: identifiers, split borrows, and logging.

pub mod id;
pub mod logging;
pub mod slots;

pub use id::InstanceId;
pub use slots::pair_mut;
