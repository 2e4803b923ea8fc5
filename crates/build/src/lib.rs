//! # Pointer Tokens Build
//!
//! Turns a token dictionary into one CSS file per pointer type, each
//! wrapping its custom properties in `@media (pointer: <type>)`.
//!
//! ## Architecture
//!
//! ```text
//! BuildConfig
//!     │
//!     ├──> Pipeline::prepare
//!     │      ├─ SourceLoader → Dictionary
//!     │      ├─ TransformChain
//!     │      │    ├─ attribute/cti, name/cti/kebab
//!     │      │    ├─ attribute/pointer/clear           (drop source value)
//!     │      │    ├─ attribute/pointer/{coarse,fine}   (tag)
//!     │      │    ├─ name/pointer/{coarse,fine}        (strip marker)
//!     │      │    └─ name/prefix                       (optional)
//!     │      └─ resolve references
//!     │
//!     ├──> Pipeline::render (per OutputTarget, in memory)
//!     │      └─ filter by `media` + `pointer` → format_pointer_css
//!     │
//!     └──> write_files → build/coarse.css, build/fine.css
//! ```
//!
//! ## Example
//!
//! ```rust,no_run
//! use pointer_tokens_build::{BuildConfig, Pipeline};
//!
//! let pipeline = Pipeline::new(BuildConfig::default()).unwrap();
//! let report = pipeline.build().unwrap();
//! for file in report.files {
//!     println!("{} ({} declarations)", file.destination.display(), file.declarations);
//! }
//! ```

mod config;
mod emit;
mod error;
mod format;
mod pipeline;
mod pointer;
mod target;
mod transform;

pub use config::{BuildConfig, DEFAULT_CONFIG_FILE};
pub use emit::{remove_files, write_files};
pub use error::{BuildError, Result};
pub use format::{format_pointer_css, FILE_HEADER};
pub use pipeline::{build, BuildReport, FileReport, Pipeline};
pub use pointer::{PointerType, MEDIA_ATTRIBUTE, MEDIA_POINTER, POINTER_ATTRIBUTE};
pub use target::{OutputTarget, RenderedFile};
pub use transform::{
    clear_pointer, cti_attributes, kebab_case, normalize_name, tag_pointer, Transform,
    TransformChain,
};
