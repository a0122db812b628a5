//! JSON value trees with a recursive-descent parser and canonical serializer.
//!
//! Strict JSON text goes in through [`Json::parse`] and comes back out of
//! [`Json::serialize`]; in between sits an owned, tagged value tree with
//! typed accessors and structural equality.
//!
//! # Example
//!
//! ```
//! use json_tree::Json;
//!
//! let json = Json::parse(r#"{"greeting": "hi", "count": 2}"#).unwrap();
//! assert_eq!(json.get_key("count").unwrap().as_number(), Ok(2.0));
//!
//! let round_tripped = Json::parse(&json.serialize()).unwrap();
//! assert_eq!(round_tripped, json);
//!
//! let err = Json::parse("[1, 2").unwrap_err();
//! assert_eq!(err.to_string(), "MISS COMMA OR SQUARE BRACKET: ");
//! ```

pub mod error;
mod json;
mod parser;
mod serializer;
mod value;

pub use error::{AccessError, ParseError, ParseErrorKind};
pub use json::Json;
pub use value::{JsonType, JsonValue};
