//! Edge routing and rendering: anchor points, the curved connector path,
//! the shared arrowhead marker, and midpoint labels.

use svg::node::element::{Definitions, Group, Marker, Path, Polygon, Rectangle};

use crate::draw::text::Text;
use crate::geometry::{Insets, Point};

/// Fixed vertical distance used to approximate where an edge meets a
/// node's boundary: 30 units below the source center, 30 units above the
/// target center, regardless of the node's actual height.
pub const ANCHOR_OFFSET: f32 = 30.0;

/// Vertical lift of an edge label above the anchor midpoint.
const LABEL_LIFT: f32 = 5.0;

/// Stroke color shared by edges, arrowheads, and the legend-free chrome.
pub const EDGE_COLOR: &str = "#34495e";

/// Id of the single reusable arrowhead marker.
const ARROWHEAD_ID: &str = "arrowhead";

/// Compute the start and end anchor points for an edge between two node
/// centers. The edge leaves below the source and enters above the target.
pub fn anchor_points(from_center: Point, to_center: Point) -> (Point, Point) {
    (
        Point::new(from_center.x(), from_center.y() + ANCHOR_OFFSET),
        Point::new(to_center.x(), to_center.y() - ANCHOR_OFFSET),
    )
}

/// Marker definitions for the document `<defs>` section: one arrowhead
/// reused by every directed edge.
pub fn marker_definitions() -> Definitions {
    let arrowhead = Marker::new()
        .set("id", ARROWHEAD_ID)
        .set("markerWidth", 10)
        .set("markerHeight", 7)
        .set("refX", 9)
        .set("refY", 3.5)
        .set("orient", "auto")
        .add(
            Polygon::new()
                .set("points", "0 0, 10 3.5, 0 7")
                .set("fill", EDGE_COLOR),
        );

    Definitions::new().add(arrowhead)
}

/// Create the path data for a connector between two anchor points.
///
/// Two quadratic segments through the vertical midpoint produce a
/// vertical S-curve: straight down out of the source, across, then
/// straight down into the target.
pub fn create_edge_path_data(start: Point, end: Point) -> String {
    let mid_y = (start.y() + end.y()) / 2.0;
    let mid_x = (start.x() + end.x()) / 2.0;

    format!(
        "M {} {} Q {} {} {} {} Q {} {} {} {}",
        start.x(),
        start.y(),
        start.x(),
        mid_y,
        mid_x,
        mid_y,
        end.x(),
        mid_y,
        end.x(),
        end.y()
    )
}

/// Create the rendered path element for an edge, terminated with the
/// shared arrowhead marker.
pub fn create_edge_path(start: Point, end: Point) -> Path {
    Path::new()
        .set("d", create_edge_path_data(start, end))
        .set("class", "flowchart-edge")
        .set("fill", "none")
        .set("stroke", EDGE_COLOR)
        .set("stroke-width", 2)
        .set("marker-end", format!("url(#{ARROWHEAD_ID})"))
}

/// Render an edge label at the midpoint of the two anchors, lifted
/// slightly and backed by an opaque plate so it stays legible over
/// crossing edges.
pub fn render_edge_label(start: Point, end: Point, text: &Text<'_>) -> Group {
    let anchor_mid = start.midpoint(end);
    let label_position = Point::new(anchor_mid.x(), anchor_mid.y() - LABEL_LIFT);

    let text_size = text.calculate_size();
    let plate_padding = Insets::new(1.0, 2.0, 1.0, 2.0);
    let plate_bounds = label_position.to_bounds(text_size.add_padding(plate_padding));

    let plate = Rectangle::new()
        .set("x", plate_bounds.min_x())
        .set("y", plate_bounds.min_y())
        .set("width", plate_bounds.width())
        .set("height", plate_bounds.height())
        .set("fill", "white")
        .set("stroke", "#dee2e6")
        .set("rx", 2);

    let label = text
        .render_to_svg(label_position)
        .set("class", "edge-label");

    Group::new().add(plate).add(label)
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;
    use crate::draw::text::TextDefinition;

    #[test]
    fn test_anchor_points_offsets() {
        let (start, end) = anchor_points(Point::new(100.0, 50.0), Point::new(100.0, 200.0));
        assert_approx_eq!(f32, start.y(), 80.0);
        assert_approx_eq!(f32, end.y(), 170.0);
        assert_approx_eq!(f32, start.x(), 100.0);
        assert_approx_eq!(f32, end.x(), 100.0);
    }

    #[test]
    fn test_path_data_s_curve() {
        let data = create_edge_path_data(Point::new(100.0, 80.0), Point::new(200.0, 170.0));
        // Both quadratic segments pass through the vertical midpoint 125.
        assert_eq!(data, "M 100 80 Q 100 125 150 125 Q 200 125 200 170");
    }

    #[test]
    fn test_edge_path_has_arrowhead() {
        let path = create_edge_path(Point::new(0.0, 0.0), Point::new(0.0, 100.0)).to_string();
        assert!(path.contains(r##"marker-end="url(#arrowhead)""##));
        assert!(path.contains(r##"stroke="#34495e""##));
        assert!(path.contains(r#"fill="none""#));
    }

    #[test]
    fn test_marker_definitions_reusable_arrowhead() {
        let defs = marker_definitions().to_string();
        assert!(defs.contains(r#"id="arrowhead""#));
        assert!(defs.contains("<polygon"));
    }

    #[test]
    fn test_edge_label_plate_behind_text() {
        let definition = TextDefinition::new();
        let text = Text::new(&definition, "next");
        let group = render_edge_label(Point::new(100.0, 80.0), Point::new(100.0, 170.0), &text)
            .to_string();

        assert!(group.contains("next"));
        assert!(group.contains(r#"fill="white""#));
        // The plate must precede the text so the text draws on top.
        let plate_at = group.find("<rect").unwrap();
        let text_at = group.find("<text").unwrap();
        assert!(plate_at < text_at);
    }
}
