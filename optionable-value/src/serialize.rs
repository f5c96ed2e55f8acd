//! A present value serializes as the value itself and an absent value as a
//! unit (`null` in JSON).
//!
//! Deserializing goes through `Option<T>`, which means that a missing struct
//! field becomes [`Maybe::Absent`] without `#[serde(default)]`.
//!
//! To leave an absent field out of the output entirely, mark it with
//! `#[serde(default, skip_serializing_if = "Maybe::is_none")]`.
//!
//! A present value that itself serializes as `null`, such as `()` or a nested
//! absent `Maybe`, is indistinguishable from absence and comes back as
//! [`Maybe::Absent`].
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::Maybe;

impl<T: Serialize> Serialize for Maybe<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Maybe::Present(value) => serializer.serialize_some(value),
            Maybe::Absent => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Maybe<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Maybe::from)
    }
}

#[cfg(test)]
mod test {
    use serde::{Deserialize, Serialize};

    use crate::Maybe;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Record {
        name: Maybe<String>,
        #[serde(default, skip_serializing_if = "Maybe::is_none")]
        age: Maybe<u8>,
    }

    #[test]
    fn serialize_present_and_absent() {
        assert_eq!(serde_json::to_string(&Maybe::some(1)).unwrap(), "1");
        assert_eq!(serde_json::to_string(&Maybe::<i32>::none()).unwrap(), "null");
    }

    #[test]
    fn deserialize_null() {
        let value: Maybe<i32> = serde_json::from_str("null").unwrap();
        assert_eq!(value, Maybe::none());
    }

    #[test]
    fn absent_field_is_skipped() {
        let record = Record {
            name: Maybe::none(),
            age: Maybe::none(),
        };
        assert_eq!(serde_json::to_string(&record).unwrap(), r#"{"name":null}"#);
    }

    #[test]
    fn missing_fields_are_absent() {
        let record: Record = serde_json::from_str("{}").unwrap();
        assert_eq!(
            record,
            Record {
                name: Maybe::none(),
                age: Maybe::none(),
            }
        );
    }

    #[test]
    fn present_null_comes_back_absent() {
        let output = serde_json::to_string(&Maybe::some(())).unwrap();
        assert_eq!(output, "null");
        let value: Maybe<()> = serde_json::from_str(&output).unwrap();
        assert_eq!(value, Maybe::none());

        let output = serde_json::to_string(&Maybe::some(Maybe::<i32>::none())).unwrap();
        assert_eq!(output, "null");
        let value: Maybe<Maybe<i32>> = serde_json::from_str(&output).unwrap();
        assert_eq!(value, Maybe::none());
    }

    #[test]
    fn present_zero_is_kept() {
        let record = Record {
            name: Maybe::some(String::new()),
            age: Maybe::some(0),
        };
        assert_eq!(serde_json::to_string(&record).unwrap(), r#"{"name":"","age":0}"#);
    }
}
