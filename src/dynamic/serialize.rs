//! Serde support for dynamic values.
//!
//! Deserialization is the main way untyped data enters the dynamic model:
//! any self-describing format (JSON, YAML, ...) maps onto [`DynamicValue`].
//!
//! | Input                          | Result                          |
//! |--------------------------------|---------------------------------|
//! | boolean                        | `Bool`                          |
//! | integer fitting in `i64`       | `Int`                           |
//! | other number                   | `Float`                         |
//! | string                         | `Str`                           |
//! | sequence                       | `Sequence` with element kind `Any` |
//! | null / unit / none             | the nil sequence                |

use std::fmt;

use serde::de::{self, Deserialize, Deserializer, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeSeq, Serializer};

use super::kind::ElementKind;
use super::value::{DynamicSequence, DynamicValue};

impl Serialize for DynamicValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Bool(value) => serializer.serialize_bool(*value),
            Self::Int(value) => serializer.serialize_i64(*value),
            Self::Float(value) => serializer.serialize_f64(*value),
            Self::Str(value) => serializer.serialize_str(value),
            Self::Sequence(sequence) => sequence.serialize(serializer),
        }
    }
}

impl Serialize for DynamicSequence {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if self.is_nil() {
            return serializer.serialize_none();
        }
        let mut sequence = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            sequence.serialize_element(element)?;
        }
        sequence.end()
    }
}

struct DynamicValueVisitor;

impl DynamicValueVisitor {
    fn collect_sequence<'de, A>(mut access: A) -> Result<DynamicSequence, A::Error>
    where
        A: SeqAccess<'de>,
    {
        const MAX_PREALLOCATE: usize = 4096;
        let capacity = access.size_hint().unwrap_or(0).min(MAX_PREALLOCATE);
        let mut elements = Vec::with_capacity(capacity);
        while let Some(element) = access.next_element::<DynamicValue>()? {
            elements.push(element);
        }
        Ok(DynamicSequence::any(elements))
    }
}

impl<'de> Visitor<'de> for DynamicValueVisitor {
    type Value = DynamicValue;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a boolean, number, string, sequence or null")
    }

    fn visit_bool<E: de::Error>(self, value: bool) -> Result<Self::Value, E> {
        Ok(DynamicValue::Bool(value))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
        Ok(DynamicValue::Int(value))
    }

    #[allow(clippy::cast_precision_loss)]
    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
        Ok(i64::try_from(value).map_or(DynamicValue::Float(value as f64), DynamicValue::Int))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Self::Value, E> {
        Ok(DynamicValue::Float(value))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        Ok(DynamicValue::Str(value.to_owned()))
    }

    fn visit_string<E: de::Error>(self, value: String) -> Result<Self::Value, E> {
        Ok(DynamicValue::Str(value))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(DynamicValue::Sequence(DynamicSequence::nil(ElementKind::Any)))
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        self.visit_unit()
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        DynamicValue::deserialize(deserializer)
    }

    fn visit_seq<A>(self, access: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        Self::collect_sequence(access).map(DynamicValue::Sequence)
    }
}

impl<'de> Deserialize<'de> for DynamicValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(DynamicValueVisitor)
    }
}

impl<'de> Deserialize<'de> for DynamicSequence {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = DynamicValue::deserialize(deserializer)?;
        Self::try_from(value).map_err(de::Error::custom)
    }
}
