//! Decoding for hub fields whose JSON type changes from record to record.
//!
//! Each polymorphic type lists the JSON shapes it admits in priority order.
//! The first shape that matches wins; a value matching none of them is a
//! decode error naming the raw JSON.

use serde::de::{self, Deserializer};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::models::{AddedToken, DataFile};

type Shape<T> = fn(&Value) -> Option<T>;

fn first_match<T, E: de::Error>(raw: Value, shapes: &[Shape<T>], what: &str) -> Result<T, E> {
    shapes
        .iter()
        .find_map(|shape| shape(&raw))
        .ok_or_else(|| E::custom(format!("unsupported type for {what}: {raw}")))
}

/// A field the hub sends either as a boolean or as a string.
///
/// `gated` is the typical case: `false` for open repositories, `"auto"` or
/// `"manual"` for gated ones, and sometimes plain `true`. A field missing
/// from the payload stays [`BoolOrText::Absent`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum BoolOrText {
    #[default]
    Absent,
    Bool(bool),
    Text(String),
}

/// The `gated` flag on models, datasets and collection items.
pub type Gated = BoolOrText;

impl BoolOrText {
    const SHAPES: &'static [Shape<Self>] = &[
        |v| v.as_bool().map(BoolOrText::Bool),
        |v| v.as_str().map(|s| BoolOrText::Text(s.to_owned())),
    ];

    /// The decoded value as dynamic JSON, or `None` when the field was absent.
    pub fn value(&self) -> Option<Value> {
        match self {
            BoolOrText::Absent => None,
            BoolOrText::Bool(b) => Some(Value::Bool(*b)),
            BoolOrText::Text(s) => Some(Value::String(s.clone())),
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            BoolOrText::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            BoolOrText::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, BoolOrText::Absent)
    }
}

impl<'de> Deserialize<'de> for BoolOrText {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Value::deserialize(deserializer)?;
        first_match(raw, Self::SHAPES, "boolean-or-string field")
    }
}

/// A tokenizer special token: either a full token object or its bare content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpecialToken {
    Token(AddedToken),
    Text(String),
}

impl SpecialToken {
    const SHAPES: &'static [Shape<Self>] = &[
        |v| {
            v.is_object()
                .then(|| AddedToken::deserialize(v).ok())
                .flatten()
                .map(SpecialToken::Token)
        },
        |v| v.as_str().map(|s| SpecialToken::Text(s.to_owned())),
    ];

    /// The token text regardless of representation.
    pub fn content(&self) -> &str {
        match self {
            SpecialToken::Token(t) => &t.content,
            SpecialToken::Text(s) => s,
        }
    }
}

impl<'de> Deserialize<'de> for SpecialToken {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Value::deserialize(deserializer)?;
        first_match(raw, Self::SHAPES, "special token")
    }
}

/// A field written either as a list or as a single bare value.
///
/// A list is tried first, then a single `T`. The default is an empty list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> Default for OneOrMany<T> {
    fn default() -> Self {
        OneOrMany::Many(Vec::new())
    }
}

impl<T> OneOrMany<T> {
    pub fn as_slice(&self) -> &[T] {
        match self {
            OneOrMany::One(v) => std::slice::from_ref(v),
            OneOrMany::Many(vs) => vs,
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }

    pub fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::One(v) => vec![v],
            OneOrMany::Many(vs) => vs,
        }
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for OneOrMany<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let shapes: [Shape<Self>; 2] = [
            |v| {
                v.is_array()
                    .then(|| Vec::<T>::deserialize(v).ok())
                    .flatten()
                    .map(OneOrMany::Many)
            },
            |v| T::deserialize(v).ok().map(OneOrMany::One),
        ];
        let raw = Value::deserialize(deserializer)?;
        first_match(raw, &shapes, "single-or-list field")
    }
}

/// One entry of a dataset config's `data_files`: a bare path or glob that
/// applies to every split, or the files of one named split.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataFileEntry {
    Pattern(String),
    Split(DataFile),
}

impl DataFileEntry {
    const SHAPES: &'static [Shape<Self>] = &[
        |v| {
            v.is_object()
                .then(|| DataFile::deserialize(v).ok())
                .flatten()
                .map(DataFileEntry::Split)
        },
        |v| v.as_str().map(|s| DataFileEntry::Pattern(s.to_owned())),
    ];

    /// The split name, `None` for a bare pattern.
    pub fn split(&self) -> Option<&str> {
        match self {
            DataFileEntry::Pattern(_) => None,
            DataFileEntry::Split(f) => Some(&f.split),
        }
    }

    pub fn paths(&self) -> &[String] {
        match self {
            DataFileEntry::Pattern(p) => std::slice::from_ref(p),
            DataFileEntry::Split(f) => f.path.as_slice(),
        }
    }
}

impl<'de> Deserialize<'de> for DataFileEntry {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Value::deserialize(deserializer)?;
        first_match(raw, Self::SHAPES, "data files entry")
    }
}
