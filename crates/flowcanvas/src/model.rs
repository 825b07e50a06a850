//! The diagram data model handed to the renderer for one drawing pass.
//!
//! A [`Diagram`] is the payload the upstream collaborator produces, usually
//! parsed from a network response. The renderer trusts its shape and
//! degrades gracefully: missing `nodes`/`edges` fields deserialize to empty
//! sequences, and edges referencing unknown node ids are skipped at render
//! time rather than rejected here.

use serde::{Deserialize, Deserializer};

use crate::color::Color;
use crate::error::CanvasError;
use crate::geometry::Point;

/// The closed set of node categories a flowchart can contain.
///
/// Any tag outside the known set maps to [`NodeKind::Unknown`], which
/// renders with the `Process` geometry and palette. Keeping the fallback a
/// variant makes the default case visible at every match site instead of a
/// silent dictionary miss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Start,
    End,
    Process,
    Decision,
    Input,
    Output,
    Loop,
    Error,
    Unknown,
}

impl NodeKind {
    /// Resolve a payload tag into a node kind.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "start" => Self::Start,
            "end" => Self::End,
            "process" => Self::Process,
            "decision" => Self::Decision,
            "input" => Self::Input,
            "output" => Self::Output,
            "loop" => Self::Loop,
            "error" => Self::Error,
            _ => Self::Unknown,
        }
    }

    /// The CSS-style class suffix used on rendered shapes.
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::End => "end",
            Self::Decision => "decision",
            Self::Input => "input",
            Self::Output => "output",
            Self::Loop => "loop",
            Self::Error => "error",
            Self::Process | Self::Unknown => "process",
        }
    }

    /// Fill color from the fixed node palette.
    pub fn fill_color(self) -> Color {
        let hex = match self {
            Self::Start | Self::End | Self::Error => "#e74c3c",
            Self::Decision => "#f39c12",
            Self::Input => "#9b59b6",
            Self::Output => "#2ecc71",
            Self::Loop => "#e67e22",
            Self::Process | Self::Unknown => "#3498db",
        };
        Color::new(hex).expect("palette colors are valid")
    }

    /// Stroke color from the fixed node palette.
    pub fn stroke_color(self) -> Color {
        let hex = match self {
            Self::Start | Self::End | Self::Error => "#c0392b",
            Self::Decision => "#e67e22",
            Self::Input => "#8e44ad",
            Self::Output => "#27ae60",
            Self::Loop => "#d35400",
            Self::Process | Self::Unknown => "#2980b9",
        };
        Color::new(hex).expect("palette colors are valid")
    }
}

impl Default for NodeKind {
    fn default() -> Self {
        Self::Process
    }
}

impl<'de> Deserialize<'de> for NodeKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let tag = String::deserialize(deserializer)?;
        Ok(NodeKind::from_tag(&tag))
    }
}

/// A single flowchart node with a stable identity and a center position.
#[derive(Debug, Clone, Deserialize)]
pub struct Node {
    /// Unique identifier, stable across re-renders.
    pub id: String,
    /// Node category; determines shape, size, and palette.
    #[serde(rename = "type", default)]
    pub kind: NodeKind,
    /// Center x-coordinate in diagram space.
    #[serde(default)]
    pub x: f32,
    /// Center y-coordinate in diagram space.
    #[serde(default)]
    pub y: f32,
    /// Display text, arbitrary length.
    #[serde(default)]
    pub label: String,
}

impl Node {
    /// Center position of the node in diagram space.
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// A directed edge between two nodes, identified only by its endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct Edge {
    /// Source node id.
    pub from: String,
    /// Target node id.
    pub to: String,
    /// Optional display text at the edge midpoint.
    #[serde(default)]
    pub label: Option<String>,
}

/// The node/edge payload for one drawing pass.
///
/// Both sequences are ordered: nodes and edges render in the order given,
/// which affects layering but not semantics.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Diagram {
    #[serde(default)]
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub edges: Vec<Edge>,
}

impl Diagram {
    /// Parse a diagram payload from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError::Payload`] when the string is not valid JSON
    /// or has incompatible field types. Missing `nodes`/`edges` fields are
    /// not errors; they deserialize to empty sequences.
    pub fn from_json(payload: &str) -> Result<Self, CanvasError> {
        let diagram = serde_json::from_str(payload)?;
        Ok(diagram)
    }

    /// Look up a node by id.
    pub fn node_by_id(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|node| node.id == id)
    }
}
