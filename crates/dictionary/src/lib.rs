//! # Pointer Tokens Dictionary
//!
//! Loads hierarchical JSON design tokens into an ordered, path-indexed
//! dictionary and resolves `{references}` between them.
//!
//! ## Architecture
//!
//! ```text
//! tokens/*.json
//!     │
//!     ├──> SourceLoader
//!     │      ├─ parse each source (document order preserved)
//!     │      ├─ flatten groups: any object with `value` is a token
//!     │      └─ merge by path (later sources win, collisions logged)
//!     │
//!     └──> Dictionary
//!            ├─ ordered tokens + dotted-path index
//!            └─ resolve_references() → literal values
//! ```
//!
//! ## Example
//!
//! ```rust
//! use pointer_tokens_dictionary::{Dictionary, Token};
//!
//! let mut dictionary = Dictionary::from_tokens([
//!     Token::new(vec!["base".into(), "size".into(), "48".into()], "48px"),
//!     Token::new(vec!["size".into(), "target".into()], "{base.size.48}"),
//! ]);
//! dictionary.resolve_references().unwrap();
//! assert_eq!(dictionary.get("size.target").unwrap().value, "48px");
//! ```

mod dictionary;
mod error;
mod loader;
mod reference;
mod types;

pub use dictionary::Dictionary;
pub use error::{DictionaryError, Result};
pub use loader::{load_file, parse_tokens, SourceLoader};
pub use reference::{find_references, has_references, replace_references, ReferenceMatch};
pub use types::{Attributes, Token};
