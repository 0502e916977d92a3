//! SVG markup parsing.
//!
//! Converts SVG text into a [`MarkupNode`] tree using `roxmltree`. Only
//! elements are kept; text, comments and processing instructions are dropped.

use crate::error::{Result, SwatchError};
use crate::types::MarkupNode;

/// Parse SVG source into a markup tree rooted at the document element.
pub fn parse_svg(source: &str) -> Result<MarkupNode> {
    let options = roxmltree::ParsingOptions {
        allow_dtd: true,
        ..Default::default()
    };

    let doc = roxmltree::Document::parse_with_options(source, options).map_err(|e| {
        SwatchError::Decode {
            format: "SVG",
            message: e.to_string(),
        }
    })?;

    Ok(convert_element(doc.root_element()))
}

/// Parse SVG bytes, which must be UTF-8.
pub fn parse_svg_bytes(bytes: &[u8]) -> Result<MarkupNode> {
    let source = std::str::from_utf8(bytes).map_err(|e| SwatchError::Decode {
        format: "SVG",
        message: format!("not valid UTF-8: {}", e),
    })?;

    parse_svg(source)
}

fn convert_element(node: roxmltree::Node<'_, '_>) -> MarkupNode {
    let mut markup = MarkupNode::new(node.tag_name().name());

    for attr in node.attributes() {
        markup.set_attribute(attr.name(), attr.value());
    }

    for child in node.children().filter(|c| c.is_element()) {
        markup.push_child(convert_element(child));
    }

    markup
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple() {
        let root = parse_svg(
            r##"<svg xmlns="http://www.w3.org/2000/svg"><rect fill="#FF0000" width="10"/></svg>"##,
        )
        .unwrap();

        assert_eq!(root.tag(), "svg");
        assert_eq!(root.children().len(), 1);
        assert_eq!(root.children()[0].tag(), "rect");
        assert_eq!(root.children()[0].attribute("fill"), Some("#FF0000"));
    }

    #[test]
    fn test_parse_keeps_style_raw() {
        let root = parse_svg(r#"<svg><g style="fill:red; display:none"/></svg>"#).unwrap();
        assert_eq!(root.children()[0].style(), Some("fill:red; display:none"));
    }

    #[test]
    fn test_parse_drops_namespace_prefix() {
        let root = parse_svg(
            r##"<svg:svg xmlns:svg="http://www.w3.org/2000/svg"><svg:linearGradient id="g"><svg:stop stop-color="#000"/></svg:linearGradient></svg:svg>"##,
        )
        .unwrap();

        let tags: Vec<&str> = root.descendants().map(|n| n.tag()).collect();
        assert_eq!(tags, vec!["svg", "linearGradient", "stop"]);
    }

    #[test]
    fn test_parse_skips_text_and_comments() {
        let root = parse_svg("<svg><!-- logo --><text>Hi</text></svg>").unwrap();
        assert_eq!(root.descendants().count(), 2);
    }

    #[test]
    fn test_parse_with_doctype() {
        let source = r#"<?xml version="1.0"?>
<!DOCTYPE svg PUBLIC "-//W3C//DTD SVG 1.1//EN" "http://www.w3.org/Graphics/SVG/1.1/DTD/svg11.dtd">
<svg><rect fill="blue"/></svg>"#;
        assert!(parse_svg(source).is_ok());
    }

    #[test]
    fn test_parse_malformed() {
        let err = parse_svg("<svg><rect></svg>").unwrap_err();
        assert!(matches!(err, SwatchError::Decode { format: "SVG", .. }));
    }

    #[test]
    fn test_parse_bytes_invalid_utf8() {
        assert!(parse_svg_bytes(&[0x3c, 0xff, 0xfe]).is_err());
    }
}
