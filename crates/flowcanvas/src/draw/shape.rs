//! Shape definitions and the node-kind to geometry resolution.
//!
//! Each node kind maps to a fixed shape and size through [`geometry_for`],
//! and to a renderable [`ShapeDefinition`] carrying the palette colors
//! through [`definition_for`]. Definitions are stateless beyond their
//! style: rendering takes the size and center position as arguments.

use crate::{
    geometry::{Point, Size},
    model::NodeKind,
};

mod diamond;
mod ellipse;
mod parallelogram;
mod rectangle;

pub use diamond::DiamondDefinition;
pub use ellipse::EllipseDefinition;
pub use parallelogram::ParallelogramDefinition;
pub use rectangle::RectangleDefinition;

/// Stroke width shared by every node outline.
pub const NODE_STROKE_WIDTH: usize = 2;

/// Corner radius for rectangle node shapes.
const RECTANGLE_ROUNDING: usize = 5;

/// Horizontal skew of parallelogram shapes, constant regardless of width.
const PARALLELOGRAM_SKEW: f32 = 15.0;

/// The geometric family a node shape belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Ellipse,
    Rectangle,
    Diamond,
    Parallelogram,
}

/// Resolved geometry for a node kind: which shape to draw and how big.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeGeometry {
    pub shape: ShapeKind,
    pub size: Size,
}

/// Resolve a node kind to its shape and default size.
///
/// Unknown kinds fall back to the process geometry.
pub fn geometry_for(kind: NodeKind) -> NodeGeometry {
    let (shape, width, height) = match kind {
        NodeKind::Start | NodeKind::End => (ShapeKind::Ellipse, 100.0, 50.0),
        NodeKind::Decision => (ShapeKind::Diamond, 120.0, 80.0),
        NodeKind::Input | NodeKind::Output => (ShapeKind::Parallelogram, 120.0, 60.0),
        NodeKind::Loop | NodeKind::Error | NodeKind::Process | NodeKind::Unknown => {
            (ShapeKind::Rectangle, 120.0, 60.0)
        }
    };
    NodeGeometry {
        shape,
        size: Size::new(width, height),
    }
}

/// Build the renderable shape definition for a node kind, with fill and
/// stroke colors taken from the fixed palette.
pub fn definition_for(kind: NodeKind) -> Box<dyn ShapeDefinition> {
    let fill = kind.fill_color();
    let stroke = kind.stroke_color();

    match geometry_for(kind).shape {
        ShapeKind::Ellipse => Box::new(EllipseDefinition::new(fill, stroke)),
        ShapeKind::Diamond => Box::new(DiamondDefinition::new(fill, stroke)),
        ShapeKind::Parallelogram => {
            Box::new(ParallelogramDefinition::new(fill, stroke, PARALLELOGRAM_SKEW))
        }
        ShapeKind::Rectangle => {
            Box::new(RectangleDefinition::new(fill, stroke, RECTANGLE_ROUNDING))
        }
    }
}

/// A trait for shape definitions that provide stateless rendering.
pub trait ShapeDefinition: std::fmt::Debug {
    /// Renders this shape to an SVG node element.
    ///
    /// # Arguments
    ///
    /// * `size` - The dimensions of the shape to render.
    /// * `position` - The center position of the shape.
    fn render_to_svg(&self, size: Size, position: Point) -> Box<dyn svg::Node>;
}

/// Format a polygon `points` attribute from a list of corners.
pub(crate) fn polygon_points(corners: &[Point]) -> String {
    corners
        .iter()
        .map(|corner| format!("{},{}", corner.x(), corner.y()))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geometry_for_all_kinds() {
        assert_eq!(
            geometry_for(NodeKind::Start),
            NodeGeometry {
                shape: ShapeKind::Ellipse,
                size: Size::new(100.0, 50.0),
            }
        );
        assert_eq!(geometry_for(NodeKind::End).shape, ShapeKind::Ellipse);
        assert_eq!(
            geometry_for(NodeKind::Decision),
            NodeGeometry {
                shape: ShapeKind::Diamond,
                size: Size::new(120.0, 80.0),
            }
        );
        assert_eq!(geometry_for(NodeKind::Input).shape, ShapeKind::Parallelogram);
        assert_eq!(geometry_for(NodeKind::Output).shape, ShapeKind::Parallelogram);
        assert_eq!(geometry_for(NodeKind::Process).shape, ShapeKind::Rectangle);
        assert_eq!(geometry_for(NodeKind::Loop).shape, ShapeKind::Rectangle);
        assert_eq!(geometry_for(NodeKind::Error).shape, ShapeKind::Rectangle);
    }

    #[test]
    fn test_unknown_kind_uses_process_geometry() {
        assert_eq!(
            geometry_for(NodeKind::Unknown),
            geometry_for(NodeKind::Process)
        );
    }

    #[test]
    fn test_polygon_points_format() {
        let points = polygon_points(&[
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(5.0, 8.0),
        ]);
        assert_eq!(points, "0,0 10,0 5,8");
    }

    #[test]
    fn test_definition_for_renders() {
        // Every kind must produce a renderable definition.
        for kind in [
            NodeKind::Start,
            NodeKind::End,
            NodeKind::Process,
            NodeKind::Decision,
            NodeKind::Input,
            NodeKind::Output,
            NodeKind::Loop,
            NodeKind::Error,
            NodeKind::Unknown,
        ] {
            let geometry = geometry_for(kind);
            let node = definition_for(kind).render_to_svg(geometry.size, Point::new(50.0, 50.0));
            let rendered = node.to_string();
            assert!(!rendered.is_empty(), "{kind:?} rendered nothing");
        }
    }
}
