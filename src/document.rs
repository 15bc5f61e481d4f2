use crate::error::Result;
use crate::transform::TransformMatrix;
use roxmltree::{Document, Node, ParsingOptions};

const SHAPE_TAGS: [&str; 2] = ["circle", "ellipse"];

/// Read-only view of one element of a parsed SVG document.
#[derive(Debug, Clone, Copy)]
pub struct ShapeElement<'a, 'input> {
    node: Node<'a, 'input>,
}

impl<'a, 'input: 'a> ShapeElement<'a, 'input> {
    pub fn new(node: Node<'a, 'input>) -> Self {
        Self { node }
    }

    /// Tag name with any namespace stripped.
    pub fn tag_name(&self) -> &'a str {
        self.node.tag_name().name()
    }

    pub fn attribute(&self, name: &str) -> Option<&'a str> {
        self.node.attribute(name)
    }

    /// Attribute lookup by namespace URI; an empty namespace means none.
    pub fn namespaced_attribute(&self, namespace: &str, name: &str) -> Option<&'a str> {
        if namespace.is_empty() {
            return self.node.attribute(name);
        }
        self.node.attribute((namespace, name))
    }

    pub fn transform(&self) -> Option<&'a str> {
        self.attribute("transform")
    }

    /// `cx` attribute; 0 when absent, `None` when present but not a number.
    pub fn cx(&self) -> Option<f64> {
        self.coordinate("cx")
    }

    /// `cy` attribute; 0 when absent, `None` when present but not a number.
    pub fn cy(&self) -> Option<f64> {
        self.coordinate("cy")
    }

    pub fn children(self) -> impl Iterator<Item = ShapeElement<'a, 'input>> + 'a {
        self.node
            .children()
            .filter(|child| child.is_element())
            .map(ShapeElement::new)
    }

    pub fn is_marker_shape(&self) -> bool {
        SHAPE_TAGS.contains(&self.tag_name())
    }

    /// Line/column of the element start, for log messages.
    pub fn position(&self) -> String {
        let pos = self.node.document().text_pos_at(self.node.range().start);
        format!("{}:{}", pos.row, pos.col)
    }

    fn coordinate(&self, name: &str) -> Option<f64> {
        match self.attribute(name) {
            Some(raw) => raw.trim().parse::<f64>().ok(),
            None => Some(0.0),
        }
    }
}

/// A circle or ellipse together with the transform in effect at it.
#[derive(Debug, Clone, Copy)]
pub struct Candidate<'a, 'input> {
    pub element: ShapeElement<'a, 'input>,
    pub transform: TransformMatrix,
}

pub fn parse_document(text: &str) -> Result<Document<'_>> {
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    Ok(Document::parse_with_options(text, options)?)
}

/// Collects every circle/ellipse under `root` in document (pre-)order.
pub fn collect_shapes<'a, 'input>(root: ShapeElement<'a, 'input>) -> Vec<Candidate<'a, 'input>> {
    let mut out = Vec::new();
    collect_into(root, TransformMatrix::IDENTITY, &mut out);
    out
}

fn collect_into<'a, 'input>(
    element: ShapeElement<'a, 'input>,
    inherited: TransformMatrix,
    out: &mut Vec<Candidate<'a, 'input>>,
) {
    let local = element
        .transform()
        .map(TransformMatrix::parse)
        .unwrap_or_default();
    let accumulated = inherited.compose(local);

    if element.is_marker_shape() {
        out.push(Candidate {
            element,
            transform: accumulated,
        });
    }

    for child in element.children() {
        collect_into(child, accumulated, out);
    }
}
