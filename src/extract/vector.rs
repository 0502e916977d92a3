//! Vector colour extraction.
//!
//! Walks every element of an SVG tree and collects:
//!
//! 1. `fill` / `stroke` colours of visible elements, from direct attributes
//!    and from paint declarations in the inline `style`
//! 2. `stop-color` values of gradient stops, whether or not the gradient
//!    sits inside a hidden element
//!
//! Every value goes through [`normalize_colour`], so equivalent spellings
//! count once.

use crate::parser::{declarations, normalize_colour};
use crate::types::{ColourSet, ExtractionResult, MarkupNode};

/// Direct paint attributes checked on every visible element.
const PAINT_ATTRIBUTES: [&str; 2] = ["fill", "stroke"];

/// Elements whose `stop` children contribute colours.
const GRADIENT_TAGS: [&str; 2] = ["linearGradient", "radialGradient"];

/// Collect the distinct colours used by a markup tree.
pub fn extract_vector(root: &MarkupNode) -> ExtractionResult {
    let mut colours = ColourSet::new();

    for node in root.descendants() {
        if is_visible(node) {
            collect_paint(node, &mut colours);
        }
    }

    for gradient in root
        .descendants()
        .filter(|n| GRADIENT_TAGS.contains(&n.tag()))
    {
        collect_gradient_stops(gradient, &mut colours);
    }

    ExtractionResult::new(colours)
}

/// Check whether an element's own fill and stroke should be counted.
///
/// Hidden via inline style (`display:none`, `visibility:hidden`,
/// `opacity:0`, matched as literal substrings) or via the equivalent direct
/// attributes. Visibility is not inherited: children of a hidden group are
/// judged on their own attributes.
pub fn is_visible(node: &MarkupNode) -> bool {
    if let Some(style) = node.style() {
        if style.contains("display:none")
            || style.contains("visibility:hidden")
            || has_zero_opacity(style)
        {
            return false;
        }
    }

    !(node.attribute("display") == Some("none")
        || node.attribute("visibility") == Some("hidden")
        || node.attribute("opacity") == Some("0"))
}

/// `opacity:0` as a substring, not followed by more digits or a fraction.
fn has_zero_opacity(style: &str) -> bool {
    style.match_indices("opacity:0").any(|(i, m)| {
        !style[i + m.len()..].starts_with(|c: char| c.is_ascii_digit() || c == '.')
    })
}

/// A paint value that names an actual colour.
///
/// Rejects `none`, `transparent` and `url(...)` paint-server references.
fn is_colour_paint(value: &str) -> bool {
    let value = value.trim().to_ascii_lowercase();
    !value.is_empty() && value != "none" && value != "transparent" && !value.starts_with("url(")
}

fn collect_paint(node: &MarkupNode, colours: &mut ColourSet) {
    for attr in PAINT_ATTRIBUTES {
        if let Some(value) = node.attribute(attr) {
            if is_colour_paint(value) {
                colours.insert(normalize_colour(value));
            }
        }
    }

    if let Some(style) = node.style() {
        for decl in declarations(style).filter(|d| d.is_paint()) {
            if is_colour_paint(decl.value) {
                colours.insert(normalize_colour(decl.value));
            }
        }
    }
}

/// Collect the colours of every `stop` under a gradient.
///
/// The `stop-color` attribute and a `stop-color` style declaration are
/// both read; when they differ, both colours are kept.
fn collect_gradient_stops(gradient: &MarkupNode, colours: &mut ColourSet) {
    for stop in gradient.descendants().filter(|n| n.tag() == "stop") {
        if let Some(value) = stop.attribute("stop-color") {
            if !value.is_empty() {
                colours.insert(normalize_colour(value));
            }
        }

        if let Some(style) = stop.style() {
            for decl in declarations(style)
                .filter(|d| d.property == "stop-color" && !d.value.is_empty())
            {
                colours.insert(normalize_colour(decl.value));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_svg;
    use crate::types::CanonicalColour;
    use pretty_assertions::assert_eq;

    fn extract(source: &str) -> Vec<String> {
        extract_vector(&parse_svg(source).unwrap()).labels()
    }

    fn rect() -> MarkupNode {
        MarkupNode::new("rect")
    }

    #[test]
    fn test_end_to_end_scenario() {
        let source = r##"<svg xmlns="http://www.w3.org/2000/svg">
  <defs>
    <linearGradient id="grad">
      <stop offset="0" stop-color="#0000FF"/>
      <stop offset="1" style="stop-color:#000000"/>
    </linearGradient>
  </defs>
  <rect fill="#FF0000" stroke="white"/>
  <rect style="opacity:0" fill="#00FF00"/>
</svg>"##;

        let result = extract_vector(&parse_svg(source).unwrap());

        assert_eq!(result.count(), 4);
        assert_eq!(result.labels(), vec!["white", "#000000", "#0000FF", "#FF0000"]);
    }

    #[test]
    fn test_hidden_sibling_excluded() {
        let root = MarkupNode::new("svg")
            .with_child(
                rect()
                    .with_attribute("style", "display:none")
                    .with_attribute("fill", "#FF0000"),
            )
            .with_child(rect().with_attribute("fill", "#00FF00"));

        assert_eq!(extract_vector(&root).labels(), vec!["#00FF00"]);

        let root = MarkupNode::new("svg").with_child(rect().with_attribute("fill", "#FF0000"));
        assert_eq!(extract_vector(&root).labels(), vec!["#FF0000"]);
    }

    #[test]
    fn test_visibility_rules() {
        assert!(!is_visible(&rect().with_attribute("style", "visibility:hidden")));
        assert!(!is_visible(&rect().with_attribute("style", "fill:red;opacity:0")));
        assert!(!is_visible(&rect().with_attribute("style", "opacity:0;fill:red")));
        assert!(!is_visible(&rect().with_attribute("display", "none")));
        assert!(!is_visible(&rect().with_attribute("visibility", "hidden")));
        assert!(!is_visible(&rect().with_attribute("opacity", "0")));

        assert!(is_visible(&rect()));
        assert!(is_visible(&rect().with_attribute("style", "display: none")));
        assert!(is_visible(&rect().with_attribute("style", "opacity:0.01")));
        assert!(is_visible(&rect().with_attribute("style", "opacity:0.5")));
        assert!(is_visible(&rect().with_attribute("opacity", "0.0")));
    }

    #[test]
    fn test_gradient_inside_hidden_group() {
        let labels = extract(
            r##"<svg>
  <g style="display:none" fill="#123456">
    <linearGradient id="g"><stop stop-color="#ABCDEF"/></linearGradient>
  </g>
</svg>"##,
        );
        assert_eq!(labels, vec!["#ABCDEF"]);
    }

    #[test]
    fn test_radial_gradient_stops() {
        let labels = extract(
            r##"<svg><radialGradient id="r"><stop stop-color="rgb(255,0,0)"/><stop stop-color="#fff"/></radialGradient></svg>"##,
        );
        assert_eq!(labels, vec!["white", "#FF0000"]);
    }

    #[test]
    fn test_stop_outside_gradient_ignored() {
        let labels = extract(r##"<svg><stop stop-color="#FF0000"/></svg>"##);
        assert!(labels.is_empty());
    }

    #[test]
    fn test_stop_both_sources_kept() {
        let labels = extract(
            r##"<svg><linearGradient id="g"><stop stop-color="#FF0000" style="stop-color:#00FF00;stop-opacity:1"/></linearGradient></svg>"##,
        );
        assert_eq!(labels, vec!["#00FF00", "#FF0000"]);
    }

    #[test]
    fn test_paint_exclusions() {
        let root = MarkupNode::new("svg")
            .with_child(rect().with_attribute("fill", "url(#grad1)"))
            .with_child(rect().with_attribute("fill", "none"))
            .with_child(rect().with_attribute("fill", " Transparent "))
            .with_child(rect().with_attribute("stroke", "NONE"))
            .with_child(rect().with_attribute("style", "fill:none;stroke:url(#p)"));

        assert_eq!(extract_vector(&root).count(), 0);
    }

    #[test]
    fn test_style_paint_declarations() {
        let labels = extract(
            r##"<svg><path style="fill:#0af; stroke: rgb(50%,50%,50%); stop-color:#111"/></svg>"##,
        );
        assert_eq!(labels, vec!["#00AAFF", "#7F7F7F"]);
    }

    #[test]
    fn test_attribute_and_style_deduplicate() {
        let labels = extract(
            r##"<svg><rect fill="#F00" style="fill:rgb(255,0,0)"/><circle stroke="#ff0000"/></svg>"##,
        );
        assert_eq!(labels, vec!["#FF0000"]);
    }

    #[test]
    fn test_root_is_examined() {
        let root = MarkupNode::new("svg").with_attribute("fill", "black");
        let result = extract_vector(&root);
        assert!(result.colours().contains(&CanonicalColour::verbatim("black")));
    }

    #[test]
    fn test_white_forms_count_once() {
        let labels = extract(
            r##"<svg><rect fill="#fff"/><rect fill="white"/><rect stroke="rgba(255,255,255,1.00)"/><rect style="fill:rgb(100%,100%,100%)"/></svg>"##,
        );
        assert_eq!(labels, vec!["white"]);
    }

    #[test]
    fn test_translucent_white_counted_separately() {
        let labels = extract(
            r##"<svg><rect fill="white"/><rect fill="rgba(255,255,255,0.5)"/></svg>"##,
        );
        assert_eq!(labels, vec!["white", "#FFFFFF"]);
    }

    #[test]
    fn test_stop_style_property_trimmed() {
        let labels = extract(
            r##"<svg><radialGradient id="r"><stop style="stop-color : #f00"/><stop style="stop-color:"/></radialGradient></svg>"##,
        );
        assert_eq!(labels, vec!["#FF0000"]);
    }

    #[test]
    fn test_deterministic() {
        let source = r##"<svg><rect fill="red"/><rect fill="#00f"/></svg>"##;
        assert_eq!(extract(source), extract(source));
    }
}
