pub use optionable_value as value;

#[cfg(feature = "json")]
pub use optionable_json as json;

pub mod prelude {
    pub use crate::value::{Error, Maybe, Nullable};
}
