use std::collections::HashMap;

use crate::error::{DictionaryError, Result};
use crate::reference::{replace_references, Resolver};
use crate::types::Token;

/// Ordered token collection with a lookup index by dotted path.
///
/// Order is insertion order; redefining a path replaces the token in place.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    tokens: Vec<Token>,
    index: HashMap<String, usize>,
}

impl Dictionary {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from tokens in order; later duplicates replace earlier ones.
    #[must_use]
    pub fn from_tokens(tokens: impl IntoIterator<Item = Token>) -> Self {
        let mut dictionary = Self::new();
        for token in tokens {
            dictionary.insert(token);
        }
        dictionary
    }

    /// Insert a token, returning the one it replaced (if any).
    pub fn insert(&mut self, token: Token) -> Option<Token> {
        let key = token.dotted_path();
        if let Some(&idx) = self.index.get(&key) {
            return Some(std::mem::replace(&mut self.tokens[idx], token));
        }
        self.index.insert(key, self.tokens.len());
        self.tokens.push(token);
        None
    }

    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Mutable access for preprocessing passes. Paths must not be changed
    /// through this iterator.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Token> {
        self.tokens.iter_mut()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Look up a token by dotted path (`base.size.48`)
    #[must_use]
    pub fn get(&self, dotted_path: &str) -> Option<&Token> {
        self.index.get(dotted_path).map(|&idx| &self.tokens[idx])
    }

    /// Resolve every token's references into a literal `value`.
    ///
    /// `original_value` is left untouched so formatters can still emit
    /// references.
    pub fn resolve_references(&mut self) -> Result<()> {
        let values = Resolver::new(&self.tokens, &self.index).resolve_all()?;
        for (token, value) in self.tokens.iter_mut().zip(values) {
            token.value = value;
        }
        log::debug!("Resolved references for {} tokens", self.tokens.len());
        Ok(())
    }

    /// Tokens referenced directly by `token`'s original value, in order.
    pub fn references_of(&self, token: &Token) -> Result<Vec<&Token>> {
        crate::reference::find_references(&token.original_value)
            .iter()
            .map(|reference| {
                self.get(&reference.path).ok_or_else(|| {
                    DictionaryError::missing_reference(token.dotted_path(), &reference.path)
                })
            })
            .collect()
    }

    /// Rewrite `token`'s original value, mapping each referenced token
    /// through `render` (e.g. into `var(--name)`).
    pub fn render_references<F>(&self, token: &Token, mut render: F) -> Result<String>
    where
        F: FnMut(&Token) -> String,
    {
        replace_references(&token.original_value, |reference| {
            self.get(&reference.path).map(&mut render).ok_or_else(|| {
                DictionaryError::missing_reference(token.dotted_path(), &reference.path)
            })
        })
    }
}

impl<'a> IntoIterator for &'a Dictionary {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
