//! Public JSON handle: construction, parse/serialize entry points, access.

use std::fmt;
use std::ops::{Index, IndexMut};

use ahash::AHashMap;

use crate::error::{AccessError, ParseError};
use crate::parser;
use crate::serializer;
use crate::value::{JsonType, JsonValue};

/// A JSON document handle owning exactly one value tree.
///
/// `Clone` is a deep recursive copy; moving transfers ownership of the whole
/// tree. Equality is structural. Distinct handles share nothing, so
/// fully-constructed handles can be read from multiple threads without
/// synchronization.
///
/// # Example
///
/// ```
/// use json_tree::Json;
///
/// let json = Json::parse(r#"{"name": "Alice", "scores": [1, 2]}"#).unwrap();
/// assert_eq!(json.get_key("name").unwrap().as_string(), Ok("Alice"));
/// assert_eq!(json.get_key("scores").unwrap().len(), Ok(2));
///
/// let text = json.serialize();
/// assert_eq!(Json::parse(&text).unwrap(), json);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Json {
    pub(crate) value: JsonValue,
}

impl Json {
    /// Creates a null document.
    pub fn new() -> Self {
        Json {
            value: JsonValue::Null,
        }
    }

    /// Parses JSON text into a value tree.
    ///
    /// This is the only place syntax errors surface; they come back as
    /// `Err` and never escape as panics. On failure no partial tree is
    /// returned.
    pub fn parse(input: &str) -> Result<Json, ParseError> {
        parser::parse(input)
    }

    /// Renders the value tree as canonical JSON text. Never fails.
    pub fn serialize(&self) -> String {
        serializer::to_string(&self.value)
    }

    /// Builds an array from any sequence whose elements convert to `Json`.
    pub fn from_array(items: impl IntoIterator<Item = impl Into<Json>>) -> Json {
        Json::from(items.into_iter().map(Into::into).collect::<Vec<_>>())
    }

    /// Builds an object from any sequence of convertible key/value pairs.
    /// Later occurrences of a key replace earlier ones.
    pub fn from_object<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Json
    where
        K: Into<String>,
        V: Into<Json>,
    {
        Json::from(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect::<AHashMap<String, Json>>(),
        )
    }

    /// Returns the active variant's type.
    pub fn json_type(&self) -> JsonType {
        self.value.json_type()
    }

    pub fn is_null(&self) -> bool {
        self.value.is_null()
    }

    pub fn is_bool(&self) -> bool {
        self.value.is_bool()
    }

    pub fn is_number(&self) -> bool {
        self.value.is_number()
    }

    pub fn is_string(&self) -> bool {
        self.value.is_string()
    }

    pub fn is_array(&self) -> bool {
        self.value.is_array()
    }

    pub fn is_object(&self) -> bool {
        self.value.is_object()
    }

    /// See [`JsonValue::as_bool`].
    pub fn as_bool(&self) -> Result<bool, AccessError> {
        self.value.as_bool()
    }

    /// See [`JsonValue::as_number`].
    pub fn as_number(&self) -> Result<f64, AccessError> {
        self.value.as_number()
    }

    /// See [`JsonValue::as_string`].
    pub fn as_string(&self) -> Result<&str, AccessError> {
        self.value.as_string()
    }

    /// See [`JsonValue::as_array`].
    pub fn as_array(&self) -> Result<&Vec<Json>, AccessError> {
        self.value.as_array()
    }

    /// See [`JsonValue::as_array_mut`].
    pub fn as_array_mut(&mut self) -> Result<&mut Vec<Json>, AccessError> {
        self.value.as_array_mut()
    }

    /// See [`JsonValue::as_object`].
    pub fn as_object(&self) -> Result<&AHashMap<String, Json>, AccessError> {
        self.value.as_object()
    }

    /// See [`JsonValue::as_object_mut`].
    pub fn as_object_mut(&mut self) -> Result<&mut AHashMap<String, Json>, AccessError> {
        self.value.as_object_mut()
    }

    /// See [`JsonValue::len`].
    pub fn len(&self) -> Result<usize, AccessError> {
        self.value.len()
    }

    /// See [`JsonValue::get`].
    pub fn get(&self, index: usize) -> Result<&Json, AccessError> {
        self.value.get(index)
    }

    /// See [`JsonValue::get_mut`].
    pub fn get_mut(&mut self, index: usize) -> Result<&mut Json, AccessError> {
        self.value.get_mut(index)
    }

    /// See [`JsonValue::get_key`].
    pub fn get_key(&self, key: &str) -> Result<&Json, AccessError> {
        self.value.get_key(key)
    }

    /// See [`JsonValue::get_key_mut`].
    pub fn get_key_mut(&mut self, key: &str) -> Result<&mut Json, AccessError> {
        self.value.get_key_mut(key)
    }
}

impl From<()> for Json {
    fn from(_: ()) -> Self {
        Json::new()
    }
}

impl From<bool> for Json {
    fn from(value: bool) -> Self {
        Json {
            value: JsonValue::Bool(value),
        }
    }
}

impl From<f64> for Json {
    fn from(value: f64) -> Self {
        Json {
            value: JsonValue::Number(value),
        }
    }
}

impl From<i32> for Json {
    fn from(value: i32) -> Self {
        Json::from(f64::from(value))
    }
}

impl From<u32> for Json {
    fn from(value: u32) -> Self {
        Json::from(f64::from(value))
    }
}

impl From<i64> for Json {
    fn from(value: i64) -> Self {
        Json::from(value as f64)
    }
}

impl From<&str> for Json {
    fn from(value: &str) -> Self {
        Json::from(value.to_string())
    }
}

impl From<String> for Json {
    fn from(value: String) -> Self {
        Json {
            value: JsonValue::String(value),
        }
    }
}

impl From<Vec<Json>> for Json {
    fn from(items: Vec<Json>) -> Self {
        Json {
            value: JsonValue::Array(items),
        }
    }
}

impl From<AHashMap<String, Json>> for Json {
    fn from(entries: AHashMap<String, Json>) -> Self {
        Json {
            value: JsonValue::Object(entries),
        }
    }
}

impl<T: Into<Json>> FromIterator<T> for Json {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Json::from_array(iter)
    }
}

impl<K: Into<String>, V: Into<Json>> FromIterator<(K, V)> for Json {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Json::from_object(iter)
    }
}

/// Positional read sugar over [`Json::get`].
///
/// # Panics
///
/// Panics with the underlying [`AccessError`] message on non-arrays or an
/// out-of-range index; use [`Json::get`] for the checked form.
impl Index<usize> for Json {
    type Output = Json;

    fn index(&self, index: usize) -> &Json {
        match self.get(index) {
            Ok(item) => item,
            Err(err) => panic!("{err}"),
        }
    }
}

impl IndexMut<usize> for Json {
    fn index_mut(&mut self, index: usize) -> &mut Json {
        match self.get_mut(index) {
            Ok(item) => item,
            Err(err) => panic!("{err}"),
        }
    }
}

/// Keyed read sugar over [`Json::get_key`].
///
/// # Panics
///
/// Panics with the underlying [`AccessError`] message on non-objects or a
/// missing key; there is no auto-insert.
impl Index<&str> for Json {
    type Output = Json;

    fn index(&self, key: &str) -> &Json {
        match self.get_key(key) {
            Ok(item) => item,
            Err(err) => panic!("{err}"),
        }
    }
}

impl IndexMut<&str> for Json {
    fn index_mut(&mut self, key: &str) -> &mut Json {
        match self.get_key_mut(key) {
            Ok(item) => item,
            Err(err) => panic!("{err}"),
        }
    }
}

impl fmt::Display for Json {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialize())
    }
}
