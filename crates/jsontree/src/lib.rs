//! A small recursive-descent JSON parser producing an owned value tree.
//!
//! Input is one complete document held in memory. It flows through three
//! stages:
//!
//! - [`scanner`]: a byte cursor over the source buffer,
//! - [`tokenizer`]: tokens with one-token lookahead,
//! - [`parser`]: the tree builder producing a [`Value`].
//!
//! The resulting tree exclusively owns its nodes. Look members up with
//! [`lookup_key`], print it with [`render`], and free it by dropping it or
//! with [`destroy`].
//!
//! String literals are kept as written: escape sequences are not decoded.
//! Numbers accept digits, `.` and `-` only (no exponents).
//!
//! ```rust
//! use jsontree::{Value, lookup_key, parse, render};
//!
//! let root = parse(br#"{"a":1,"b":[true,false,null],"c":"x"}"#).unwrap();
//! let b = lookup_key(&root, "b").unwrap();
//! assert_eq!(b.as_array().map(Vec::len), Some(3));
//! assert_eq!(render(b), "true false NULL");
//! ```

#![no_std]
extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

mod error;
mod options;
mod value;

pub mod parser;
pub mod scanner;
pub mod token;
pub mod tokenizer;

#[cfg(feature = "std")]
mod load;

#[cfg(test)]
mod tests;

#[cfg(feature = "std")]
pub use error::LoadError;
pub use error::{ErrorKind, LookupError, ParseError, SyntaxError};
#[cfg(feature = "std")]
pub use load::{load_file, parse_file};
pub use options::ParserOptions;
pub use parser::{Parser, parse, parse_with_options};
pub use token::{Position, Token, TokenKind};
pub use tokenizer::{Tokenizer, tokenize};
pub use value::{Array, Map, Rendered, Value, destroy, lookup_key, render};
