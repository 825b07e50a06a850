//! The fixed legend key rendered at the top-left of every diagram.
//!
//! The legend is not data-driven: it always lists the five canonical
//! categories, whether or not the current diagram uses them. It lives
//! inside the transformed content group, so it pans and zooms with the
//! diagram.

use svg::node::element::{Group, Rectangle, Text as SvgTextElement};

use crate::model::NodeKind;

/// Vertical distance between legend rows.
const ROW_SPACING: f32 = 25.0;

/// Side length of the color swatch squares.
const SWATCH_SIZE: f32 = 15.0;

/// The five canonical legend entries.
const ENTRIES: [(NodeKind, &str); 5] = [
    (NodeKind::Start, "Start/End"),
    (NodeKind::Process, "Process"),
    (NodeKind::Decision, "Decision"),
    (NodeKind::Input, "Input"),
    (NodeKind::Output, "Output"),
];

/// Build the legend group, anchored 20 units in from the viewport's
/// top-left corner.
pub fn legend_group() -> Group {
    let mut legend = Group::new()
        .set("class", "flowchart-legend")
        .set("transform", "translate(20, 20)");

    for (index, (kind, label)) in ENTRIES.iter().enumerate() {
        let y = index as f32 * ROW_SPACING;

        let swatch = Rectangle::new()
            .set("x", 0)
            .set("y", y)
            .set("width", SWATCH_SIZE)
            .set("height", SWATCH_SIZE)
            .set("fill", kind.fill_color().to_string())
            .set("stroke", kind.stroke_color().to_string());

        let text = SvgTextElement::new(*label)
            .set("x", 20)
            .set("y", y + 12.0)
            .set("font-size", 12)
            .set("fill", "#2c3e50");

        legend = legend.add(swatch).add(text);
    }

    legend
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legend_has_five_entries() {
        let rendered = legend_group().to_string();
        assert_eq!(rendered.matches("<rect").count(), 5);
        assert_eq!(rendered.matches("<text").count(), 5);
        for label in ["Start/End", "Process", "Decision", "Input", "Output"] {
            assert!(rendered.contains(label), "missing legend label {label}");
        }
    }

    #[test]
    fn test_legend_anchored_top_left() {
        let rendered = legend_group().to_string();
        assert!(rendered.contains(r#"transform="translate(20, 20)""#));
    }
}
