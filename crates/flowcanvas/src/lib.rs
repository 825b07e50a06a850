//! # flowcanvas
//!
//! An interactive flowchart rendering engine: typed nodes and edges in,
//! a pannable and zoomable 2D canvas out, with export to standalone SVG.
//!
//! The entry point is [`DiagramCanvas`]. Feed it a [`Diagram`] (usually
//! deserialized from a JSON payload), then drive it with pointer, wheel,
//! and toolbar events:
//!
//! ```
//! use flowcanvas::{Diagram, DiagramCanvas};
//!
//! let diagram = Diagram::from_json(
//!     r#"{
//!         "nodes": [
//!             {"id": "start", "type": "start", "x": 400, "y": 60, "label": "Start"},
//!             {"id": "work", "type": "process", "x": 400, "y": 180, "label": "Do work"}
//!         ],
//!         "edges": [{"from": "start", "to": "work"}]
//!     }"#,
//! )?;
//!
//! let mut canvas = DiagramCanvas::new();
//! canvas.render(diagram);
//! canvas.zoom_in();
//!
//! let svg = canvas.export_svg().expect("canvas has a drawing");
//! assert!(svg.contains("Do work"));
//! # Ok::<(), flowcanvas::CanvasError>(())
//! ```
//!
//! Node kinds map to fixed shapes and colors (start and end nodes are
//! red ellipses, decisions are orange diamonds, output nodes are green
//! parallelograms, and so on);
//! unrecognized kinds fall back to the process style so malformed
//! payloads still render. A legend of the canonical categories is drawn
//! in every frame.

pub mod canvas;
pub mod color;
pub mod config;
pub mod draw;
pub mod error;
pub mod geometry;
pub mod model;
pub mod view;

pub use canvas::DiagramCanvas;
pub use color::Color;
pub use config::StyleConfig;
pub use error::CanvasError;
pub use model::{Diagram, Edge, Node, NodeKind};
pub use view::{Cursor, ViewState, WheelDirection};
