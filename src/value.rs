//! JSON value representation and access contract.

use std::fmt;

use ahash::AHashMap;

use crate::error::AccessError;
use crate::json::Json;

/// The six JSON data types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonType {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl fmt::Display for JsonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            JsonType::Null => "null",
            JsonType::Bool => "bool",
            JsonType::Number => "number",
            JsonType::String => "string",
            JsonType::Array => "array",
            JsonType::Object => "object",
        })
    }
}

/// A JSON value with exactly one active variant.
///
/// Container elements are full [`Json`] handles, each exclusively owned by
/// its containing array or object, so a value tree has no sharing and no
/// cycles. `Clone` performs the full recursive copy; equality is structural
/// (arrays elementwise and order-sensitive, objects by key set).
///
/// Object entries live in an unordered map: iteration order is not the
/// insertion order, which the serializer inherits.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum JsonValue {
    #[default]
    Null,
    Bool(bool),
    /// All numbers are 64-bit binary floating point; the parser never
    /// produces NaN or infinity.
    Number(f64),
    /// Escape sequences are decoded at parse time, never stored escaped.
    String(String),
    Array(Vec<Json>),
    Object(AHashMap<String, Json>),
}

impl JsonValue {
    /// Returns the active variant's type.
    pub fn json_type(&self) -> JsonType {
        match self {
            JsonValue::Null => JsonType::Null,
            JsonValue::Bool(_) => JsonType::Bool,
            JsonValue::Number(_) => JsonType::Number,
            JsonValue::String(_) => JsonType::String,
            JsonValue::Array(_) => JsonType::Array,
            JsonValue::Object(_) => JsonType::Object,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, JsonValue::Null)
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, JsonValue::Bool(_))
    }

    pub fn is_number(&self) -> bool {
        matches!(self, JsonValue::Number(_))
    }

    pub fn is_string(&self) -> bool {
        matches!(self, JsonValue::String(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, JsonValue::Array(_))
    }

    pub fn is_object(&self) -> bool {
        matches!(self, JsonValue::Object(_))
    }

    fn mismatch(&self, expected: &'static str) -> AccessError {
        AccessError::TypeMismatch {
            expected,
            found: self.json_type(),
        }
    }

    /// Returns the boolean payload, or `TypeMismatch` for any other variant.
    /// There is no coercion: a number is never readable as a bool.
    pub fn as_bool(&self) -> Result<bool, AccessError> {
        if let JsonValue::Bool(b) = self {
            Ok(*b)
        } else {
            Err(self.mismatch("bool"))
        }
    }

    /// Returns the numeric payload, or `TypeMismatch`.
    pub fn as_number(&self) -> Result<f64, AccessError> {
        if let JsonValue::Number(n) = self {
            Ok(*n)
        } else {
            Err(self.mismatch("number"))
        }
    }

    /// Returns the string payload, or `TypeMismatch`.
    pub fn as_string(&self) -> Result<&str, AccessError> {
        if let JsonValue::String(s) = self {
            Ok(s.as_str())
        } else {
            Err(self.mismatch("string"))
        }
    }

    /// Returns the element sequence, or `TypeMismatch`.
    pub fn as_array(&self) -> Result<&Vec<Json>, AccessError> {
        if let JsonValue::Array(items) = self {
            Ok(items)
        } else {
            Err(self.mismatch("array"))
        }
    }

    /// Mutable counterpart of [`as_array`](Self::as_array).
    pub fn as_array_mut(&mut self) -> Result<&mut Vec<Json>, AccessError> {
        if let JsonValue::Array(items) = self {
            Ok(items)
        } else {
            Err(self.mismatch("array"))
        }
    }

    /// Returns the entry map, or `TypeMismatch`.
    pub fn as_object(&self) -> Result<&AHashMap<String, Json>, AccessError> {
        if let JsonValue::Object(entries) = self {
            Ok(entries)
        } else {
            Err(self.mismatch("object"))
        }
    }

    /// Mutable counterpart of [`as_object`](Self::as_object).
    pub fn as_object_mut(&mut self) -> Result<&mut AHashMap<String, Json>, AccessError> {
        if let JsonValue::Object(entries) = self {
            Ok(entries)
        } else {
            Err(self.mismatch("object"))
        }
    }

    /// Element or entry count. Valid for arrays and objects only.
    pub fn len(&self) -> Result<usize, AccessError> {
        match self {
            JsonValue::Array(items) => Ok(items.len()),
            JsonValue::Object(entries) => Ok(entries.len()),
            _ => Err(self.mismatch("array or object")),
        }
    }

    /// Positional access. Fails with `TypeMismatch` on non-arrays and
    /// `IndexOutOfRange` past the end.
    pub fn get(&self, index: usize) -> Result<&Json, AccessError> {
        let items = self.as_array()?;
        items.get(index).ok_or(AccessError::IndexOutOfRange {
            index,
            len: items.len(),
        })
    }

    /// Mutable counterpart of [`get`](Self::get).
    pub fn get_mut(&mut self, index: usize) -> Result<&mut Json, AccessError> {
        let items = self.as_array_mut()?;
        let len = items.len();
        items
            .get_mut(index)
            .ok_or(AccessError::IndexOutOfRange { index, len })
    }

    /// Keyed access. Fails with `TypeMismatch` on non-objects and
    /// `KeyNotFound` for an absent key; never auto-inserts.
    pub fn get_key(&self, key: &str) -> Result<&Json, AccessError> {
        self.as_object()?
            .get(key)
            .ok_or_else(|| AccessError::KeyNotFound(key.to_string()))
    }

    /// Mutable counterpart of [`get_key`](Self::get_key).
    pub fn get_key_mut(&mut self, key: &str) -> Result<&mut Json, AccessError> {
        self.as_object_mut()?
            .get_mut(key)
            .ok_or_else(|| AccessError::KeyNotFound(key.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AccessError;

    #[test]
    fn test_json_type() {
        assert_eq!(JsonValue::Null.json_type(), JsonType::Null);
        assert_eq!(JsonValue::Bool(true).json_type(), JsonType::Bool);
        assert_eq!(JsonValue::Number(1.0).json_type(), JsonType::Number);
        assert_eq!(
            JsonValue::String("a".to_string()).json_type(),
            JsonType::String
        );
        assert_eq!(JsonValue::Array(vec![]).json_type(), JsonType::Array);
        assert_eq!(
            JsonValue::Object(AHashMap::new()).json_type(),
            JsonType::Object
        );
    }

    #[test]
    fn test_accessors_match() {
        assert_eq!(JsonValue::Bool(true).as_bool(), Ok(true));
        assert_eq!(JsonValue::Number(42.0).as_number(), Ok(42.0));
        assert_eq!(JsonValue::String("hi".to_string()).as_string(), Ok("hi"));
        assert!(JsonValue::Array(vec![]).as_array().is_ok());
        assert!(JsonValue::Object(AHashMap::new()).as_object().is_ok());
    }

    #[test]
    fn test_accessors_mismatch() {
        // no coercion: a number is not a bool
        assert_eq!(
            JsonValue::Number(1.0).as_bool(),
            Err(AccessError::TypeMismatch {
                expected: "bool",
                found: JsonType::Number,
            })
        );
        assert_eq!(
            JsonValue::Null.as_string(),
            Err(AccessError::TypeMismatch {
                expected: "string",
                found: JsonType::Null,
            })
        );
    }

    #[test]
    fn test_len() {
        let arr = JsonValue::Array(vec![Json::from(1.0), Json::from(2.0)]);
        assert_eq!(arr.len(), Ok(2));

        let mut entries = AHashMap::new();
        entries.insert("a".to_string(), Json::from(1.0));
        assert_eq!(JsonValue::Object(entries).len(), Ok(1));

        assert_eq!(
            JsonValue::Bool(false).len(),
            Err(AccessError::TypeMismatch {
                expected: "array or object",
                found: JsonType::Bool,
            })
        );
    }

    #[test]
    fn test_indexed_access() {
        let arr = JsonValue::Array(vec![Json::from(1.0), Json::from(2.0)]);
        assert_eq!(arr.get(1), Ok(&Json::from(2.0)));
        assert_eq!(
            arr.get(2),
            Err(AccessError::IndexOutOfRange { index: 2, len: 2 })
        );
        assert!(matches!(
            JsonValue::Number(1.0).get(0),
            Err(AccessError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn test_keyed_access() {
        let mut entries = AHashMap::new();
        entries.insert("a".to_string(), Json::from(1.0));
        let obj = JsonValue::Object(entries);

        assert_eq!(obj.get_key("a"), Ok(&Json::from(1.0)));
        assert_eq!(
            obj.get_key("b"),
            Err(AccessError::KeyNotFound("b".to_string()))
        );
        assert!(matches!(
            JsonValue::Array(vec![]).get_key("a"),
            Err(AccessError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn test_equality_is_type_sensitive() {
        assert_ne!(JsonValue::Null, JsonValue::Bool(false));
        assert_ne!(JsonValue::Number(1.0), JsonValue::Bool(true));
        assert_ne!(JsonValue::Number(0.0), JsonValue::Null);
        assert_eq!(JsonValue::Number(1.5), JsonValue::Number(1.5));
    }

    #[test]
    fn test_object_equality_ignores_order() {
        let mut left = AHashMap::new();
        left.insert("a".to_string(), Json::from(1.0));
        left.insert("b".to_string(), Json::from(2.0));

        let mut right = AHashMap::new();
        right.insert("b".to_string(), Json::from(2.0));
        right.insert("a".to_string(), Json::from(1.0));

        assert_eq!(JsonValue::Object(left), JsonValue::Object(right));
    }

    #[test]
    fn test_array_equality_is_ordered() {
        let left = JsonValue::Array(vec![Json::from(1.0), Json::from(2.0)]);
        let right = JsonValue::Array(vec![Json::from(2.0), Json::from(1.0)]);
        assert_ne!(left, right);
    }
}
