use pointer_tokens_dictionary::{Dictionary, Token};
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::pointer::{PointerType, MEDIA_ATTRIBUTE, MEDIA_POINTER, POINTER_ATTRIBUTE};

/// One output file: where it goes, which tokens it takes, how it renders.
///
/// Built once per pipeline, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputTarget {
    pub destination: PathBuf,
    pub pointer: PointerType,
    pub output_references: bool,
    pub file_header: bool,
}

impl OutputTarget {
    /// Target writing `<build_path>/<type>.css`
    #[must_use]
    pub fn for_pointer(
        build_path: &Path,
        pointer: PointerType,
        output_references: bool,
        file_header: bool,
    ) -> Self {
        Self {
            destination: build_path.join(format!("{pointer}.css")),
            pointer,
            output_references,
            file_header,
        }
    }

    /// Filter predicate: a pointer-media token tagged for this pointer type.
    /// Tokens missing either attribute never match.
    #[must_use]
    pub fn matches(&self, token: &Token) -> bool {
        token.attribute(MEDIA_ATTRIBUTE) == Some(MEDIA_POINTER)
            && token.attribute(POINTER_ATTRIBUTE) == Some(self.pointer.as_str())
    }

    /// Matching tokens in dictionary order
    #[must_use]
    pub fn select<'d>(&self, dictionary: &'d Dictionary) -> Vec<&'d Token> {
        dictionary.iter().filter(|token| self.matches(token)).collect()
    }
}

/// Rendered file contents waiting to be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    pub destination: PathBuf,
    pub pointer: PointerType,
    pub declarations: usize,
    pub contents: String,
}
