use pointer_tokens_dictionary::{Attributes, Dictionary, Token};

use crate::pointer::{PointerType, MEDIA_ATTRIBUTE, MEDIA_POINTER, POINTER_ATTRIBUTE};

const CTI_KEYS: [&str; 5] = ["category", "type", "item", "subitem", "state"];

/// A token transform applied during preprocessing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transform {
    /// Category/type/item attributes from the token path
    AttributeCti,
    /// Kebab-cased full path
    NameCtiKebab,
    /// Drop any `pointer` attribute that came from a source file
    ClearPointer,
    /// Stamp `pointer: <type>` on matching pointer-media tokens
    PointerAttribute(PointerType),
    /// Strip the `-<type>` marker from the name
    PointerName(PointerType),
    /// Prepend a kebab-cased prefix to the final name
    NamePrefix(String),
}

impl Transform {
    /// Identifier used in logs
    #[must_use]
    pub fn name(&self) -> String {
        match self {
            Self::AttributeCti => "attribute/cti".to_string(),
            Self::NameCtiKebab => "name/cti/kebab".to_string(),
            Self::ClearPointer => "attribute/pointer/clear".to_string(),
            Self::PointerAttribute(pointer) => format!("attribute/pointer/{pointer}"),
            Self::PointerName(pointer) => format!("name/pointer/{pointer}"),
            Self::NamePrefix(_) => "name/prefix".to_string(),
        }
    }

    pub fn apply(&self, token: &mut Token) {
        match self {
            Self::AttributeCti => token.attributes = cti_attributes(token),
            Self::NameCtiKebab => token.name = kebab_case(&token.path.join(" ")),
            Self::ClearPointer => token.attributes = clear_pointer(token),
            Self::PointerAttribute(pointer) => token.attributes = tag_pointer(token, *pointer),
            Self::PointerName(pointer) => token.name = normalize_name(&token.name, *pointer),
            Self::NamePrefix(prefix) => token.name = prefixed_name(prefix, &token.name),
        }
    }
}

/// Ordered list of transforms run over the whole dictionary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransformChain {
    transforms: Vec<Transform>,
}

impl TransformChain {
    #[must_use]
    pub fn new(transforms: Vec<Transform>) -> Self {
        Self { transforms }
    }

    /// CTI attributes and kebab names, then every pointer tag before any
    /// pointer-name normalization, so tagging always sees the marker. The
    /// prefix goes on last and never takes part in pointer matching.
    #[must_use]
    pub fn pointer_media(prefix: Option<String>) -> Self {
        let mut transforms = vec![
            Transform::AttributeCti,
            Transform::NameCtiKebab,
            Transform::ClearPointer,
        ];
        transforms.extend(PointerType::ALL.map(Transform::PointerAttribute));
        transforms.extend(PointerType::ALL.map(Transform::PointerName));
        transforms.extend(prefix.map(Transform::NamePrefix));
        Self::new(transforms)
    }

    #[must_use]
    pub fn transforms(&self) -> &[Transform] {
        &self.transforms
    }

    pub fn apply(&self, dictionary: &mut Dictionary) {
        for token in dictionary.iter_mut() {
            for transform in &self.transforms {
                transform.apply(token);
            }
        }
        log::debug!(
            "Applied transforms [{}] to {} tokens",
            self.transforms
                .iter()
                .map(Transform::name)
                .collect::<Vec<_>>()
                .join(", "),
            dictionary.len()
        );
    }
}

/// Attributes without a `pointer` key. Only the tagger decides which
/// pointer file a token belongs to.
#[must_use]
pub fn clear_pointer(token: &Token) -> Attributes {
    let mut attributes = token.attributes.clone();
    if let Some(pointer) = attributes.remove(POINTER_ATTRIBUTE) {
        log::debug!(
            "Ignoring source attribute pointer={pointer} on {}",
            token.dotted_path()
        );
    }
    attributes
}

/// Attributes with `pointer = <type>` set when the token is pointer media
/// and its name carries the `-<type>` marker. The stamped value replaces
/// any existing `pointer` key.
#[must_use]
pub fn tag_pointer(token: &Token, pointer: PointerType) -> Attributes {
    let mut attributes = token.attributes.clone();
    let is_pointer_media = token.attribute(MEDIA_ATTRIBUTE) == Some(MEDIA_POINTER);
    if is_pointer_media && token.name.contains(pointer.suffix()) {
        attributes.insert(POINTER_ATTRIBUTE.to_string(), pointer.as_str().to_string());
    }
    attributes
}

/// `name` with the first `-<type>` removed.
#[must_use]
pub fn normalize_name(name: &str, pointer: PointerType) -> String {
    name.replacen(pointer.suffix(), "", 1)
}

/// CTI attributes from the path, overlaid by the token's own attributes.
#[must_use]
pub fn cti_attributes(token: &Token) -> Attributes {
    let mut attributes: Attributes = CTI_KEYS
        .iter()
        .zip(&token.path)
        .map(|(key, segment)| ((*key).to_string(), segment.clone()))
        .collect();
    attributes.extend(token.attributes.clone());
    attributes
}

fn prefixed_name(prefix: &str, name: &str) -> String {
    let prefix = kebab_case(prefix);
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{prefix}-{name}")
    }
}

/// Lowercase words joined by `-`. Words break on non-alphanumerics,
/// lower→upper case changes, letter/digit changes, and before the last
/// capital of an acronym (`XMLHttp` → `xml-http`).
#[must_use]
pub fn kebab_case(input: &str) -> String {
    let chars: Vec<char> = input.chars().collect();
    let mut words: Vec<String> = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if !c.is_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }
        if let Some(prev) = current.chars().last() {
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            let boundary = (prev.is_lowercase() && c.is_uppercase())
                || (prev.is_numeric() != c.is_numeric())
                || (prev.is_uppercase() && c.is_uppercase() && next_is_lower);
            if boundary {
                words.push(std::mem::take(&mut current));
            }
        }
        current.push(c);
    }
    if !current.is_empty() {
        words.push(current);
    }

    words
        .iter()
        .map(|w| w.to_lowercase())
        .collect::<Vec<_>>()
        .join("-")
}
