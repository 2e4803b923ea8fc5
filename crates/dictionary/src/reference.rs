use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use std::ops::Range;

use crate::error::{DictionaryError, Result};
use crate::types::Token;

static REFERENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{([^{}\s]+)\}").expect("reference pattern is valid"));

/// A `{dotted.path}` occurrence inside a token value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceMatch {
    /// Byte range of the whole `{...}` in the value
    pub span: Range<usize>,

    /// Referenced dotted path, without a trailing `.value`
    pub path: String,
}

/// Find every reference in `value`, left to right.
#[must_use]
pub fn find_references(value: &str) -> Vec<ReferenceMatch> {
    REFERENCE
        .captures_iter(value)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let inner = caps.get(1)?.as_str();
            Some(ReferenceMatch {
                span: whole.range(),
                path: inner.strip_suffix(".value").unwrap_or(inner).to_string(),
            })
        })
        .collect()
}

/// Whether `value` contains at least one reference.
#[must_use]
pub fn has_references(value: &str) -> bool {
    REFERENCE.is_match(value)
}

/// Rewrite every reference in `value` with `replace`, keeping the literal
/// text around them.
pub fn replace_references<F>(value: &str, mut replace: F) -> Result<String>
where
    F: FnMut(&ReferenceMatch) -> Result<String>,
{
    let mut out = String::with_capacity(value.len());
    let mut last = 0;
    for reference in find_references(value) {
        out.push_str(&value[last..reference.span.start]);
        out.push_str(&replace(&reference)?);
        last = reference.span.end;
    }
    out.push_str(&value[last..]);
    Ok(out)
}

/// Resolves every token's original value to a literal, transitively.
pub(crate) struct Resolver<'a> {
    tokens: &'a [Token],
    index: &'a HashMap<String, usize>,
    resolved: Vec<Option<String>>,
    stack: Vec<usize>,
}

impl<'a> Resolver<'a> {
    pub(crate) fn new(tokens: &'a [Token], index: &'a HashMap<String, usize>) -> Self {
        Self {
            tokens,
            index,
            resolved: vec![None; tokens.len()],
            stack: Vec::new(),
        }
    }

    /// Resolve all tokens, returning values in dictionary order.
    pub(crate) fn resolve_all(mut self) -> Result<Vec<String>> {
        for idx in 0..self.tokens.len() {
            self.resolve(idx)?;
        }
        Ok(self.resolved.into_iter().flatten().collect())
    }

    fn resolve(&mut self, idx: usize) -> Result<String> {
        if let Some(value) = &self.resolved[idx] {
            return Ok(value.clone());
        }
        if let Some(pos) = self.stack.iter().position(|&open| open == idx) {
            let chain = self.stack[pos..]
                .iter()
                .chain(std::iter::once(&idx))
                .map(|&i| self.tokens[i].dotted_path())
                .collect::<Vec<_>>()
                .join(" -> ");
            return Err(DictionaryError::CircularReference { chain });
        }

        self.stack.push(idx);
        let tokens = self.tokens;
        let index = self.index;
        let token = &tokens[idx];
        let value = replace_references(&token.original_value, |reference| {
            let target = index.get(&reference.path).copied().ok_or_else(|| {
                DictionaryError::missing_reference(token.dotted_path(), &reference.path)
            })?;
            self.resolve(target)
        })?;
        self.stack.pop();

        self.resolved[idx] = Some(value.clone());
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_single_reference() {
        let refs = find_references("{base.size.48}");
        assert_eq!(refs.len(), 1);
        assert_eq!(refs[0].path, "base.size.48");
        assert_eq!(refs[0].span, 0..14);
    }

    #[test]
    fn strips_value_suffix() {
        let refs = find_references("{base.size.48.value}");
        assert_eq!(refs[0].path, "base.size.48");
    }

    #[test]
    fn finds_embedded_references() {
        let refs = find_references("calc({a.b} + {c.d})");
        let paths: Vec<_> = refs.iter().map(|r| r.path.as_str()).collect();
        assert_eq!(paths, vec!["a.b", "c.d"]);
    }

    #[test]
    fn literals_have_no_references() {
        assert!(!has_references("48px"));
        assert!(!has_references("{ not a ref }"));
        assert!(has_references("{a}"));
    }

    #[test]
    fn replace_keeps_literal_text() {
        let out = replace_references("calc({a.b} * 2)", |r| Ok(format!("var(--{})", r.path)))
            .expect("replace");
        assert_eq!(out, "calc(var(--a.b) * 2)");
    }
}
