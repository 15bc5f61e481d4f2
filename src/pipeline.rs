use crate::classify::LabelClassifier;
use crate::config::Config;
use crate::document::{Candidate, ShapeElement, collect_shapes, parse_document};
use crate::error::{Error, Result};
use crate::ids::{IdRegistry, synthesize_id};
use crate::ir::GraphNode;
use crate::order::sort_nodes;
use std::path::Path;

/// Extracts the ordered graph nodes of one floor-plan SVG.
pub fn run(svg: &str, floor: i32, config: &Config) -> Result<Vec<GraphNode>> {
    let document = parse_document(svg)?;
    let candidates = collect_shapes(ShapeElement::new(document.root_element()));

    let classifier = LabelClassifier::new(config);
    let mut registry = IdRegistry::new();
    let mut nodes = Vec::with_capacity(candidates.len());

    for candidate in &candidates {
        if let Some(node) = build_node(candidate, floor, config, &classifier, &mut registry) {
            log::debug!(id = node.id.as_str(), node_type:% = node.node_type; "emitted node");
            nodes.push(node);
        }
    }

    sort_nodes(&mut nodes);

    log::info!(
        candidates = candidates.len(),
        nodes = nodes.len(),
        renamed = registry.renamed(),
        floor = floor;
        "extracted graph nodes"
    );
    Ok(nodes)
}

pub fn run_file(path: &Path, floor: i32, config: &Config) -> Result<Vec<GraphNode>> {
    let svg = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    run(&svg, floor, config)
}

fn build_node(
    candidate: &Candidate<'_, '_>,
    floor: i32,
    config: &Config,
    classifier: &LabelClassifier<'_>,
    registry: &mut IdRegistry,
) -> Option<GraphNode> {
    let element = candidate.element;
    let label = element
        .namespaced_attribute(&config.label_namespace, &config.label_attribute)
        .filter(|label| !label.is_empty());
    let Some(label) = label else {
        log::trace!(at = element.position().as_str(); "skipping unlabelled shape");
        return None;
    };

    let Some(node_type) = classifier.classify(label) else {
        log::debug!(label = label; "label matches no node type");
        return None;
    };

    let (Some(cx), Some(cy)) = (element.cx(), element.cy()) else {
        log::warn!(
            label = label,
            at = element.position().as_str();
            "skipping shape with non-numeric cx/cy"
        );
        return None;
    };

    let point = candidate.transform.apply(cx, cy);
    let id = registry.register(&synthesize_id(label, node_type, config));
    Some(GraphNode::new(id, node_type, floor, point, config.precision))
}
