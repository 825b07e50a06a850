use svg::{self, node::element as svg_element};

use super::{NODE_STROKE_WIDTH, ShapeDefinition, polygon_points};
use crate::{
    color::Color,
    geometry::{Point, Size},
};

/// Parallelogram shape definition, used by input and output nodes.
///
/// The top edge is shifted right by a constant skew relative to the
/// bottom edge, independent of the shape's width.
#[derive(Debug, Clone)]
pub struct ParallelogramDefinition {
    fill_color: Color,
    line_color: Color,
    line_width: usize,
    skew: f32,
}

impl ParallelogramDefinition {
    pub fn new(fill_color: Color, line_color: Color, skew: f32) -> Self {
        Self {
            fill_color,
            line_color,
            line_width: NODE_STROKE_WIDTH,
            skew,
        }
    }
}

impl ShapeDefinition for ParallelogramDefinition {
    fn render_to_svg(&self, size: Size, position: Point) -> Box<dyn svg::Node> {
        let half_width = size.width() / 2.0;
        let half_height = size.height() / 2.0;

        // Top-left, top-right, bottom-right, bottom-left; the top edge
        // leads by `skew` units.
        let corners = [
            Point::new(
                position.x() - half_width + self.skew,
                position.y() - half_height,
            ),
            Point::new(position.x() + half_width, position.y() - half_height),
            Point::new(
                position.x() + half_width - self.skew,
                position.y() + half_height,
            ),
            Point::new(position.x() - half_width, position.y() + half_height),
        ];

        let polygon = svg_element::Polygon::new()
            .set("points", polygon_points(&corners))
            .set("fill", self.fill_color.to_string())
            .set("stroke", self.line_color.to_string())
            .set("stroke-width", self.line_width);

        polygon.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_skewed_quad() {
        let definition = ParallelogramDefinition::new(
            Color::new("#9b59b6").unwrap(),
            Color::new("#8e44ad").unwrap(),
            15.0,
        );
        let rendered = definition
            .render_to_svg(Size::new(120.0, 60.0), Point::new(100.0, 100.0))
            .to_string();

        assert!(rendered.contains("<polygon"));
        // Top edge 15 units right of the bottom edge on both sides.
        assert!(rendered.contains(r#"points="55,70 160,70 145,130 40,130""#));
    }
}
