//! Visual definitions for diagram elements: node shapes, edge paths,
//! label text, and the legend key.

pub mod edge;
pub mod legend;
pub mod shape;
pub mod text;
