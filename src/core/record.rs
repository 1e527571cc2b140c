//! Purpose: Define the `DataRecord` value type and its fixed diagnostic rendering.
//! Exports: `DataRecord`.
//! Role: Plain name/age holder; the canonical payload for the JSON codec.
//! Invariants: No field validation; empty names and negative ages are legal.
//! Invariants: `describe` output is diagnostic only and never escapes `name`.
//! Invariants: Missing or null fields decode to the field default.
//! Invariants: Decoding accepts only a JSON object; on duplicate keys the last value wins.

use serde::de::{IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct DataRecord {
    pub name: String,
    pub age: i32,
}

impl DataRecord {
    pub fn new(name: impl Into<String>, age: i32) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }

    pub fn describe(&self) -> String {
        format!("DataRecord{{name='{}', age={}}}", self.name, self.age)
    }
}

impl fmt::Display for DataRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

const FIELDS: &[&str] = &["name", "age"];

impl<'de> Deserialize<'de> for DataRecord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_struct("DataRecord", FIELDS, RecordVisitor)
    }
}

struct RecordVisitor;

impl<'de> Visitor<'de> for RecordVisitor {
    type Value = DataRecord;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a JSON object with `name` and `age`")
    }

    // No `visit_seq`: the array form is rejected as a type mismatch.
    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<DataRecord, A::Error> {
        let mut record = DataRecord::default();
        while let Some(key) = map.next_key::<String>()? {
            match key.as_str() {
                "name" => {
                    record.name = map.next_value::<Option<String>>()?.unwrap_or_default();
                }
                "age" => {
                    record.age = map.next_value::<Option<i32>>()?.unwrap_or_default();
                }
                _ => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }
        Ok(record)
    }
}
