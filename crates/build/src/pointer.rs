use serde::{Deserialize, Serialize};
use std::fmt;

/// Attribute that marks a token as pointer-dependent (`media: "pointer"`)
pub const MEDIA_ATTRIBUTE: &str = "media";

/// Value of [`MEDIA_ATTRIBUTE`] for pointer-dependent tokens
pub const MEDIA_POINTER: &str = "pointer";

/// Attribute stamped by the tagger with the pointer type
pub const POINTER_ATTRIBUTE: &str = "pointer";

/// Input-device precision category used by the `pointer` media feature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerType {
    /// Touch and other imprecise pointers
    Coarse,
    /// Mouse and other precise pointers
    Fine,
}

impl PointerType {
    /// Fixed set of pointer types, in build order
    pub const ALL: [Self; 2] = [Self::Coarse, Self::Fine];

    /// Identifier used in media queries, attributes and file names
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Coarse => "coarse",
            Self::Fine => "fine",
        }
    }

    /// Name marker encoding this pointer type (`-coarse`, `-fine`)
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Coarse => "-coarse",
            Self::Fine => "-fine",
        }
    }
}

impl fmt::Display for PointerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suffix_is_dash_identifier() {
        for pointer in PointerType::ALL {
            assert_eq!(pointer.suffix(), format!("-{pointer}"));
        }
    }

    #[test]
    fn serializes_lowercase() {
        let json = serde_json::to_string(&PointerType::Coarse).unwrap();
        assert_eq!(json, "\"coarse\"");
    }
}
