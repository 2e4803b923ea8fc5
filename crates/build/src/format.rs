use pointer_tokens_dictionary::{has_references, Dictionary, Token};

use crate::error::Result;
use crate::target::{OutputTarget, RenderedFile};

/// Generated-file header. No timestamp, so rebuilding is byte-stable.
pub const FILE_HEADER: &str = "/**\n * Do not edit directly\n */\n\n";

/// Render `target`'s slice of the dictionary as a pointer media-query block:
///
/// ```text
/// @media (pointer: coarse) { :root {
///   --name: value;
/// }}
/// ```
pub fn format_pointer_css(dictionary: &Dictionary, target: &OutputTarget) -> Result<RenderedFile> {
    let tokens = target.select(dictionary);

    let mut declarations = Vec::with_capacity(tokens.len());
    let mut external = Vec::new();
    for token in &tokens {
        declarations.push(declaration(dictionary, token, target.output_references)?);
        if target.output_references {
            for referenced in dictionary.references_of(token)? {
                if !target.matches(referenced) {
                    external.push((token.name.as_str(), referenced.name.as_str()));
                }
            }
        }
    }

    if !external.is_empty() {
        log::warn!(
            "{}: {} reference(s) point at tokens outside this file",
            target.destination.display(),
            external.len()
        );
        for (from, to) in &external {
            log::debug!("  --{from} -> --{to}");
        }
    }

    let mut contents = String::new();
    if target.file_header {
        contents.push_str(FILE_HEADER);
    }
    contents.push_str(&format!("@media (pointer: {}) {{ :root {{\n", target.pointer));
    contents.push_str(&declarations.join("\n"));
    contents.push_str("\n}}\n");

    Ok(RenderedFile {
        destination: target.destination.clone(),
        pointer: target.pointer,
        declarations: declarations.len(),
        contents,
    })
}

/// One `  --name: value;` line, with the token comment appended if present.
fn declaration(dictionary: &Dictionary, token: &Token, output_references: bool) -> Result<String> {
    let value = if output_references && has_references(&token.original_value) {
        dictionary
            .render_references(token, |referenced| format!("var(--{})", referenced.name))?
    } else {
        token.value.clone()
    };

    let mut line = format!("  --{}: {};", token.name, value);
    if let Some(comment) = &token.comment {
        line.push_str(&format!(" /* {comment} */"));
    }
    Ok(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pointer::{PointerType, MEDIA_ATTRIBUTE, MEDIA_POINTER, POINTER_ATTRIBUTE};
    use pretty_assertions::assert_eq;
    use std::path::Path;

    fn tagged(name: &str, value: &str, pointer: &str) -> Token {
        let marked = format!("{name}-{pointer}");
        Token::new(vec!["size".into(), marked], value)
            .named(name)
            .with_attribute(MEDIA_ATTRIBUTE, MEDIA_POINTER)
            .with_attribute(POINTER_ATTRIBUTE, pointer)
    }

    fn dictionary() -> Dictionary {
        let mut dictionary = Dictionary::from_tokens([
            Token::new(vec!["base".into(), "size".into(), "48".into()], "48px")
                .named("base-size-48"),
            tagged("controlMinTarget", "{base.size.48}", "coarse"),
            tagged("gap", "4px", "coarse").with_comment("between controls"),
            tagged("controlMinTarget", "24px", "fine"),
        ]);
        dictionary.resolve_references().unwrap();
        dictionary
    }

    fn target(pointer: PointerType, output_references: bool, file_header: bool) -> OutputTarget {
        OutputTarget::for_pointer(Path::new("build"), pointer, output_references, file_header)
    }

    #[test]
    fn renders_references_as_custom_properties() {
        let target = target(PointerType::Coarse, true, true);
        let file = format_pointer_css(&dictionary(), &target).unwrap();
        assert_eq!(
            file.contents,
            "/**\n * Do not edit directly\n */\n\n\
             @media (pointer: coarse) { :root {\n\
             \x20 --controlMinTarget: var(--base-size-48);\n\
             \x20 --gap: 4px; /* between controls */\n\
             }}\n"
        );
        assert_eq!(file.declarations, 2);
    }

    #[test]
    fn renders_resolved_values_without_references() {
        let target = target(PointerType::Coarse, false, false);
        let file = format_pointer_css(&dictionary(), &target).unwrap();
        assert_eq!(
            file.contents,
            "@media (pointer: coarse) { :root {\n\
             \x20 --controlMinTarget: 48px;\n\
             \x20 --gap: 4px; /* between controls */\n\
             }}\n"
        );
    }

    #[test]
    fn fine_file_only_has_fine_tokens() {
        let target = target(PointerType::Fine, true, false);
        let file = format_pointer_css(&dictionary(), &target).unwrap();
        assert_eq!(
            file.contents,
            "@media (pointer: fine) { :root {\n  --controlMinTarget: 24px;\n}}\n"
        );
    }

    #[test]
    fn empty_selection_keeps_wrapper() {
        let dictionary = Dictionary::from_tokens([Token::new(vec!["a".into()], "1px")]);
        let target = target(PointerType::Fine, true, false);
        let file = format_pointer_css(&dictionary, &target).unwrap();
        assert_eq!(file.contents, "@media (pointer: fine) { :root {\n\n}}\n");
        assert_eq!(file.declarations, 0);
    }
}
