#[cfg(feature = "cli")]
pub mod cli;
pub mod classify;
pub mod config;
pub mod document;
pub mod error;
pub mod ids;
pub mod ir;
pub mod order;
pub mod pipeline;
pub mod render;
pub mod transform;

pub use config::{Config, load_config};
pub use error::{Error, Result};
pub use ir::{GraphNode, NodeType, Role};
pub use pipeline::{run, run_file};
pub use render::{render_json, render_lines};
pub use transform::TransformMatrix;
