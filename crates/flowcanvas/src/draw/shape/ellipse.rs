use svg::{self, node::element as svg_element};

use super::{NODE_STROKE_WIDTH, ShapeDefinition};
use crate::{
    color::Color,
    geometry::{Point, Size},
};

/// Ellipse shape definition, used by start and end nodes.
#[derive(Debug, Clone)]
pub struct EllipseDefinition {
    fill_color: Color,
    line_color: Color,
    line_width: usize,
}

impl EllipseDefinition {
    pub fn new(fill_color: Color, line_color: Color) -> Self {
        Self {
            fill_color,
            line_color,
            line_width: NODE_STROKE_WIDTH,
        }
    }
}

impl ShapeDefinition for EllipseDefinition {
    fn render_to_svg(&self, size: Size, position: Point) -> Box<dyn svg::Node> {
        // Ellipse takes the center point (cx, cy) plus radii (rx, ry)
        let ellipse = svg_element::Ellipse::new()
            .set("cx", position.x())
            .set("cy", position.y())
            .set("rx", size.width() / 2.0)
            .set("ry", size.height() / 2.0)
            .set("fill", self.fill_color.to_string())
            .set("stroke", self.line_color.to_string())
            .set("stroke-width", self.line_width);

        ellipse.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_centers_radii() {
        let definition = EllipseDefinition::new(
            Color::new("#e74c3c").unwrap(),
            Color::new("#c0392b").unwrap(),
        );
        let rendered = definition
            .render_to_svg(Size::new(100.0, 50.0), Point::new(100.0, 50.0))
            .to_string();

        assert!(rendered.contains("<ellipse"));
        assert!(rendered.contains(r#"cx="100""#));
        assert!(rendered.contains(r#"cy="50""#));
        assert!(rendered.contains(r#"rx="50""#));
        assert!(rendered.contains(r#"ry="25""#));
    }
}
