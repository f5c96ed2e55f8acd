//! Encode and decode values containing [`Maybe`](optionable_value::Maybe) as JSON.
//!
//! Decode failures are split by cause: a payload of the wrong JSON type is an
//! [`Error::DecodeType`], malformed input is an [`Error::Syntax`].
//!
//! ```
//! # use optionable_json::*;
//! # use optionable_value::Maybe;
//! let value: Maybe<u32> = from_str("null").unwrap();
//! assert!(value.is_none());
//!
//! let err = from_str::<Maybe<u32>>(r#""1""#).unwrap_err();
//! assert!(err.is_decode_type());
//! ```
//!
//! Data that has the right types but does not fit the target, such as a
//! missing required field, is an [`Error::Invalid`].
use serde::Serialize;
use serde::de::DeserializeOwned;

pub use crate::error::{Error, Result};

mod error;

pub fn from_str<T: DeserializeOwned>(input: &str) -> Result<T> {
    serde_json::from_str(input).map_err(decode_failed)
}

pub fn from_slice<T: DeserializeOwned>(input: &[u8]) -> Result<T> {
    serde_json::from_slice(input).map_err(decode_failed)
}

pub fn from_value<T: DeserializeOwned>(value: serde_json::Value) -> Result<T> {
    serde_json::from_value(value).map_err(decode_failed)
}

pub fn to_string<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string(value).map_err(encode_failed)
}

pub fn to_string_pretty<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(encode_failed)
}

pub fn to_value<T: Serialize>(value: T) -> Result<serde_json::Value> {
    serde_json::to_value(value).map_err(encode_failed)
}

fn decode_failed(err: serde_json::Error) -> Error {
    #[cfg(feature = "logging")]
    log::debug!("failed to decode json: {err}");

    Error::decode(err)
}

fn encode_failed(err: serde_json::Error) -> Error {
    #[cfg(feature = "logging")]
    log::debug!("failed to encode json: {err}");

    Error::Encode(err)
}
