use crate::error::{Error, Result};
use crate::ir::GraphNode;
use serde::Serialize;
use serde_json::ser::Formatter;
use std::io::{self, Write};
use std::path::Path;

/// Compact JSON with `", "` between members, e.g. `{"id":"rm_1", "type":"room"}`.
#[derive(Debug, Default, Clone, Copy)]
struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }
}

fn node_json(node: &GraphNode) -> Result<String> {
    let mut buf = Vec::with_capacity(128);
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, SpacedFormatter);
    node.serialize(&mut ser)?;
    // serde_json only ever emits UTF-8.
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// One JSON object per line, with a blank line wherever the node type changes.
pub fn render_lines(nodes: &[GraphNode]) -> Result<String> {
    let mut lines = Vec::with_capacity(nodes.len() + 4);
    let mut previous = None;
    for node in nodes {
        if previous.is_some_and(|ty| ty != node.node_type) {
            lines.push(String::new());
        }
        previous = Some(node.node_type);
        lines.push(node_json(node)?);
    }
    Ok(lines.join("\n"))
}

/// The same nodes as one pretty-printed JSON array.
pub fn render_json(nodes: &[GraphNode]) -> Result<String> {
    Ok(serde_json::to_string_pretty(nodes)?)
}

pub fn write_output(text: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            let mut contents = String::with_capacity(text.len() + 1);
            contents.push_str(text);
            contents.push('\n');
            std::fs::write(path, contents).map_err(|source| Error::Io {
                path: path.to_path_buf(),
                source,
            })?;
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            writeln!(handle, "{text}")
                .and_then(|_| handle.flush())
                .map_err(|source| Error::Io {
                    path: "<stdout>".into(),
                    source,
                })?;
        }
    }
    Ok(())
}
