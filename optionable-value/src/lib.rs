pub use crate::error::{Error, Result};
pub use crate::maybe::{Maybe, Nullable};

mod error;
mod maybe;
#[cfg(feature = "serde")]
mod serialize;
