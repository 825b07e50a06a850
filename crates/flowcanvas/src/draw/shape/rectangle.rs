use svg::{self, node::element as svg_element};

use super::{NODE_STROKE_WIDTH, ShapeDefinition};
use crate::{
    color::Color,
    geometry::{Point, Size},
};

/// Rounded rectangle shape definition, used by process, loop, and error
/// nodes, and as the fallback for unknown kinds.
#[derive(Debug, Clone)]
pub struct RectangleDefinition {
    fill_color: Color,
    line_color: Color,
    line_width: usize,
    rounded: usize,
}

impl RectangleDefinition {
    pub fn new(fill_color: Color, line_color: Color, rounded: usize) -> Self {
        Self {
            fill_color,
            line_color,
            line_width: NODE_STROKE_WIDTH,
            rounded,
        }
    }
}

impl ShapeDefinition for RectangleDefinition {
    fn render_to_svg(&self, size: Size, position: Point) -> Box<dyn svg::Node> {
        // Position is the center; the rect element wants the top-left corner.
        let bounds = position.to_bounds(size);

        let rect = svg_element::Rectangle::new()
            .set("x", bounds.min_x())
            .set("y", bounds.min_y())
            .set("width", size.width())
            .set("height", size.height())
            .set("rx", self.rounded)
            .set("fill", self.fill_color.to_string())
            .set("stroke", self.line_color.to_string())
            .set("stroke-width", self.line_width);

        rect.into()
    }
}
