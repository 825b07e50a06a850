//! The interactive diagram canvas: drawing surface, view transform, and
//! the current diagram.
//!
//! Rendering is immediate-mode full-replace: every [`DiagramCanvas::render`]
//! clears the previous drawing and redraws the given diagram from scratch,
//! so repeated renders never accumulate state beyond the current diagram's
//! elements. The canvas is an explicit instance owned by whoever composes
//! the UI; there is no global renderer.

use log::{debug, info};
use svg::Document;
use svg::node::element::{Group, Title};

use crate::config::StyleConfig;
use crate::draw::{
    edge, legend,
    shape::{self, geometry_for},
    text::{LABEL_MAX_CHARS, Text, TextDefinition, truncate_label},
};
use crate::error::CanvasError;
use crate::geometry::{Point, Size};
use crate::model::{Diagram, Edge, Node};
use crate::view::{Cursor, ViewState, WheelDirection};

/// Default background color of the drawing surface.
const DEFAULT_BACKGROUND: &str = "#fafafa";

/// The fixed logical viewport, stretched to fill the host container.
const VIEWPORT: Size = Size::new(800.0, 600.0);

/// The drawing surface the canvas renders onto.
///
/// Present only when the canvas was mounted; its absence turns every
/// operation into a safe no-op.
#[derive(Debug)]
struct Surface {
    viewport: Size,
    background: String,
    /// Element counts of the last render; `None` until something was drawn.
    scene: Option<SceneStats>,
}

#[derive(Debug, Clone, Copy)]
struct SceneStats {
    node_count: usize,
    edge_count: usize,
}

impl Surface {
    fn new(background: String) -> Self {
        Self {
            viewport: VIEWPORT,
            background,
            scene: None,
        }
    }
}

/// An interactive 2D flowchart canvas with pan, zoom, selection, and SVG
/// export.
///
/// # Examples
///
/// ```
/// use flowcanvas::{Diagram, DiagramCanvas};
///
/// let payload = r#"{
///     "nodes": [
///         {"id": "a", "type": "start", "x": 100, "y": 50, "label": "Begin"},
///         {"id": "b", "type": "end", "x": 100, "y": 200, "label": "Finish"}
///     ],
///     "edges": [{"from": "a", "to": "b", "label": "next"}]
/// }"#;
///
/// let mut canvas = DiagramCanvas::new();
/// canvas.render(Diagram::from_json(payload).unwrap());
///
/// let svg = canvas.export_svg().expect("something was drawn");
/// assert!(svg.contains("<svg"));
/// ```
pub struct DiagramCanvas {
    surface: Option<Surface>,
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    view: ViewState,
    label_style: TextDefinition,
    node_click: Option<Box<dyn Fn(&Node)>>,
}

impl Default for DiagramCanvas {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagramCanvas {
    /// Create a canvas mounted on a fresh drawing surface with default
    /// styling.
    pub fn new() -> Self {
        Self::mounted(Surface::new(DEFAULT_BACKGROUND.to_string()))
    }

    /// Create a canvas mounted on a surface styled by the given config.
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError::Config`] when the configured background
    /// color cannot be parsed.
    pub fn with_style(style: &StyleConfig) -> Result<Self, CanvasError> {
        let background = style
            .background_color()
            .map_err(CanvasError::Config)?
            .map(|color| color.to_string())
            .unwrap_or_else(|| DEFAULT_BACKGROUND.to_string());

        Ok(Self::mounted(Surface::new(background)))
    }

    /// Create a canvas without a drawing surface.
    ///
    /// This mirrors a host page where the mount element is missing: every
    /// operation is a safe no-op and [`Self::export_svg`] returns `None`.
    pub fn unmounted() -> Self {
        Self {
            surface: None,
            nodes: Vec::new(),
            edges: Vec::new(),
            view: ViewState::new(),
            label_style: TextDefinition::new(),
            node_click: None,
        }
    }

    fn mounted(surface: Surface) -> Self {
        Self {
            surface: Some(surface),
            ..Self::unmounted()
        }
    }

    /// True when the canvas has a drawing surface.
    pub fn is_mounted(&self) -> bool {
        self.surface.is_some()
    }

    /// Register the handler fired with a node's full record when the node
    /// is clicked.
    pub fn set_node_click_handler(&mut self, handler: impl Fn(&Node) + 'static) {
        self.node_click = Some(Box::new(handler));
    }

    /// Render a diagram, fully replacing any prior drawing.
    ///
    /// Edges draw before nodes so they never occlude them; edges whose
    /// endpoints are missing are skipped silently. The view transform is
    /// reset to identity afterwards.
    pub fn render(&mut self, diagram: Diagram) {
        let Some(surface) = self.surface.as_mut() else {
            debug!("render called on an unmounted canvas; ignoring");
            return;
        };

        self.nodes = diagram.nodes;
        self.edges = diagram.edges;

        let edge_count = self
            .edges
            .iter()
            .filter(|e| resolve_endpoints(&self.nodes, e).is_some())
            .count();

        surface.scene = Some(SceneStats {
            node_count: self.nodes.len(),
            edge_count,
        });

        self.view.reset();

        info!(
            nodes_len = self.nodes.len(),
            edges_len = edge_count;
            "Diagram rendered",
        );
    }

    /// Clear the canvas, equivalent to rendering an empty diagram.
    pub fn clear(&mut self) {
        self.render(Diagram::default());
    }

    /// Number of node shapes in the current drawing.
    pub fn node_count(&self) -> usize {
        self.scene_stats().map_or(0, |scene| scene.node_count)
    }

    /// Number of edge paths in the current drawing, dangling edges
    /// excluded.
    pub fn edge_count(&self) -> usize {
        self.scene_stats().map_or(0, |scene| scene.edge_count)
    }

    fn scene_stats(&self) -> Option<SceneStats> {
        self.surface.as_ref()?.scene
    }

    /// The current view transform state.
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// Discrete zoom-in, for toolbar buttons.
    pub fn zoom_in(&mut self) {
        if self.is_mounted() {
            self.view.zoom_in();
        }
    }

    /// Discrete zoom-out, for toolbar buttons.
    pub fn zoom_out(&mut self) {
        if self.is_mounted() {
            self.view.zoom_out();
        }
    }

    /// Restore the identity view transform.
    pub fn reset_zoom(&mut self) {
        if self.is_mounted() {
            self.view.reset();
        }
    }

    /// Begin a pan gesture at the given surface position.
    pub fn pointer_pressed(&mut self, at: Point) {
        if self.is_mounted() {
            self.view.begin_drag(at);
        }
    }

    /// Continue a pan gesture; ignored when no drag is in progress.
    pub fn pointer_moved(&mut self, at: Point) {
        if self.is_mounted() {
            self.view.drag_to(at);
        }
    }

    /// End the pan gesture, keeping the accumulated offset.
    pub fn pointer_released(&mut self) {
        if self.is_mounted() {
            self.view.end_drag();
        }
    }

    /// Apply a wheel tick. Returns true when the event was consumed and
    /// the host should suppress the platform's default scroll.
    pub fn wheel(&mut self, direction: WheelDirection) -> bool {
        if !self.is_mounted() {
            return false;
        }
        self.view.wheel(direction);
        true
    }

    /// Context-menu request over the canvas. Always consumed on a mounted
    /// canvas; the menu is reserved for future interaction.
    pub fn context_menu(&self) -> bool {
        self.is_mounted()
    }

    /// Pointer affordance the host should display.
    pub fn cursor(&self) -> Cursor {
        self.view.cursor()
    }

    /// Handle a click at the given surface position.
    ///
    /// Hit-tests the topmost node under the pointer in diagram space,
    /// fires the registered click handler with the node's full record,
    /// and returns the node.
    pub fn click(&self, at: Point) -> Option<&Node> {
        if !self.is_mounted() {
            return None;
        }

        let diagram_point = self.view.to_diagram_space(at);
        let node = self
            .nodes
            .iter()
            .rev()
            .find(|node| hit_test(node, diagram_point))?;

        if let Some(handler) = &self.node_click {
            handler(node);
        }
        Some(node)
    }

    /// Serialize the current drawing surface, including the current view
    /// transform, to a self-contained SVG document string.
    ///
    /// Returns `None` when the canvas is unmounted or nothing has been
    /// rendered yet.
    pub fn export_svg(&self) -> Option<String> {
        let surface = self.surface.as_ref()?;
        surface.scene?;

        let content = self
            .build_content_group()
            .set("transform", self.view.transform_attribute());

        let document = Document::new()
            .set("width", "100%")
            .set("height", "100%")
            .set(
                "viewBox",
                format!(
                    "0 0 {} {}",
                    surface.viewport.width(),
                    surface.viewport.height()
                ),
            )
            .set("style", format!("background: {}", surface.background))
            .add(edge::marker_definitions())
            .add(content);

        Some(document.to_string())
    }

    /// Build the transformed content group: edges, then nodes, then the
    /// legend.
    fn build_content_group(&self) -> Group {
        let mut content = Group::new();

        for e in &self.edges {
            let Some((from, to)) = resolve_endpoints(&self.nodes, e) else {
                debug!(from = e.from.as_str(), to = e.to.as_str(); "Skipping edge with missing endpoint");
                continue;
            };

            let (start, end) = edge::anchor_points(from.position(), to.position());
            content = content.add(edge::create_edge_path(start, end));

            if let Some(label) = &e.label {
                let text = Text::new(&self.label_style, label);
                content = content.add(edge::render_edge_label(start, end, &text));
            }
        }

        for node in &self.nodes {
            content = content.add(self.render_node(node));
        }

        content.add(legend::legend_group())
    }

    fn render_node(&self, node: &Node) -> Group {
        let geometry = geometry_for(node.kind);
        let shape_node =
            shape::definition_for(node.kind).render_to_svg(geometry.size, node.position());

        let visible = truncate_label(&node.label, LABEL_MAX_CHARS);
        let label = Text::new(&self.label_style, &visible)
            .render_to_svg(node.position())
            .set("class", "node-text")
            // Tooltip carrying the untruncated label.
            .add(Title::new(node.label.as_str()));

        Group::new()
            .set(
                "class",
                format!("flowchart-node node-{}", node.kind.class_name()),
            )
            .set("data-node-id", node.id.as_str())
            .add(shape_node)
            .add(label)
    }
}

/// Resolve an edge's endpoint nodes by id; `None` when either is missing.
fn resolve_endpoints<'a>(nodes: &'a [Node], e: &Edge) -> Option<(&'a Node, &'a Node)> {
    let from = nodes.iter().find(|node| node.id == e.from)?;
    let to = nodes.iter().find(|node| node.id == e.to)?;
    Some((from, to))
}

/// Point-in-node test against the node's shape bounds in diagram space.
fn hit_test(node: &Node, point: Point) -> bool {
    let geometry = geometry_for(node.kind);
    node.position().to_bounds(geometry.size).contains(point)
}
