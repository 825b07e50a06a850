use svg::{self, node::element as svg_element};

use super::{NODE_STROKE_WIDTH, ShapeDefinition, polygon_points};
use crate::{
    color::Color,
    geometry::{Point, Size},
};

/// Diamond shape definition, used by decision nodes.
#[derive(Debug, Clone)]
pub struct DiamondDefinition {
    fill_color: Color,
    line_color: Color,
    line_width: usize,
}

impl DiamondDefinition {
    pub fn new(fill_color: Color, line_color: Color) -> Self {
        Self {
            fill_color,
            line_color,
            line_width: NODE_STROKE_WIDTH,
        }
    }
}

impl ShapeDefinition for DiamondDefinition {
    fn render_to_svg(&self, size: Size, position: Point) -> Box<dyn svg::Node> {
        let half_width = size.width() / 2.0;
        let half_height = size.height() / 2.0;

        // Top, right, bottom, left corners around the center.
        let corners = [
            Point::new(position.x(), position.y() - half_height),
            Point::new(position.x() + half_width, position.y()),
            Point::new(position.x(), position.y() + half_height),
            Point::new(position.x() - half_width, position.y()),
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
    fn test_render_four_corners() {
        let definition = DiamondDefinition::new(
            Color::new("#f39c12").unwrap(),
            Color::new("#e67e22").unwrap(),
        );
        let rendered = definition
            .render_to_svg(Size::new(120.0, 80.0), Point::new(100.0, 100.0))
            .to_string();

        assert!(rendered.contains("<polygon"));
        assert!(rendered.contains(r#"points="100,60 160,100 100,140 40,100""#));
    }
}
