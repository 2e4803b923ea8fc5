use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

use crate::dictionary::Dictionary;
use crate::error::{DictionaryError, Result};
use crate::types::{Attributes, Token};

const VALUE_KEY: &str = "value";
const COMMENT_KEY: &str = "comment";
const ATTRIBUTES_KEY: &str = "attributes";

/// Loads JSON token sources into a single [`Dictionary`].
///
/// Sources are read in order and merged by token path: a later source that
/// redefines a path replaces the earlier token (keeping its position) and a
/// warning is logged.
#[derive(Debug, Clone, Default)]
pub struct SourceLoader {
    sources: Vec<PathBuf>,
}

impl SourceLoader {
    #[must_use]
    pub fn new<I, P>(sources: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            sources: sources.into_iter().map(Into::into).collect(),
        }
    }

    /// Read and merge every source. Any failure aborts the whole load.
    pub fn load(&self) -> Result<Dictionary> {
        let mut dictionary = Dictionary::new();
        for source in &self.sources {
            let tokens = load_file(source)?;
            log::debug!("Loaded {} tokens from {}", tokens.len(), source.display());
            for token in tokens {
                if let Some(previous) = dictionary.insert(token) {
                    log::warn!(
                        "Token collision: '{}' from {} overrides {}",
                        previous.dotted_path(),
                        source.display(),
                        previous.file_path.display()
                    );
                }
            }
        }
        Ok(dictionary)
    }
}

/// Read one JSON source and flatten it into tokens, in document order.
pub fn load_file(path: &Path) -> Result<Vec<Token>> {
    let bytes = std::fs::read(path).map_err(|source| DictionaryError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_tokens(&bytes, path)
}

/// Parse JSON bytes into tokens. `origin` is recorded on each token and used
/// in error messages.
pub fn parse_tokens(bytes: &[u8], origin: &Path) -> Result<Vec<Token>> {
    let root: Value = serde_json::from_slice(bytes).map_err(|source| DictionaryError::Json {
        path: origin.to_path_buf(),
        source,
    })?;
    let Value::Object(root) = root else {
        return Err(DictionaryError::NotAnObject {
            path: origin.to_path_buf(),
        });
    };

    let mut tokens = Vec::new();
    let mut path = Vec::new();
    collect_tokens(&root, &mut path, origin, &mut tokens)?;
    Ok(tokens)
}

fn collect_tokens(
    group: &Map<String, Value>,
    path: &mut Vec<String>,
    origin: &Path,
    out: &mut Vec<Token>,
) -> Result<()> {
    for (key, child) in group {
        let Value::Object(object) = child else {
            continue;
        };
        path.push(key.clone());
        if object.contains_key(VALUE_KEY) {
            out.push(token_from_object(object, path.clone(), origin)?);
        } else {
            collect_tokens(object, path, origin, out)?;
        }
        path.pop();
    }
    Ok(())
}

fn token_from_object(
    object: &Map<String, Value>,
    path: Vec<String>,
    origin: &Path,
) -> Result<Token> {
    let dotted = path.join(".");
    let value = match object.get(VALUE_KEY) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => {
            return Err(DictionaryError::invalid_token(
                origin,
                dotted,
                "value must be a string, number or boolean",
            ))
        }
    };

    let attributes = match object.get(ATTRIBUTES_KEY) {
        None | Some(Value::Null) => Attributes::new(),
        Some(Value::Object(map)) => map
            .iter()
            .map(|(k, v)| (k.clone(), scalar_text(v)))
            .collect(),
        Some(_) => {
            return Err(DictionaryError::invalid_token(
                origin,
                dotted,
                "attributes must be an object",
            ))
        }
    };

    let mut token = Token::new(path, value).with_file(origin);
    token.attributes = attributes;
    token.comment = object
        .get(COMMENT_KEY)
        .and_then(Value::as_str)
        .map(str::to_string);
    Ok(token)
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
