use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeType {
    Hall,
    Room,
    Door,
    Elevator,
}

impl NodeType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hall => "hall",
            Self::Room => "room",
            Self::Door => "door",
            Self::Elevator => "elevator",
        }
    }

    /// Group rank used when ordering emitted nodes.
    pub fn rank(self) -> u8 {
        match self {
            Self::Hall => 1,
            Self::Room => 2,
            Self::Door => 3,
            Self::Elevator => 4,
        }
    }

    pub fn role(self) -> Role {
        match self {
            Self::Room => Role::Destination,
            _ => Role::Routing,
        }
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Destination,
    Routing,
}

/// A navigable point extracted from one circle/ellipse marker.
///
/// Field order matches the emitted JSON member order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphNode {
    pub id: String,
    #[serde(rename = "type")]
    pub node_type: NodeType,
    pub floor: i32,
    pub x: f64,
    pub y: f64,
    pub role: Role,
}

impl GraphNode {
    /// Builds a node whose role follows from its type and whose coordinates
    /// are rounded to `precision` decimal digits.
    pub fn new(id: String, node_type: NodeType, floor: i32, point: (f64, f64), precision: u32) -> Self {
        Self {
            id,
            node_type,
            floor,
            x: round_to(point.0, precision),
            y: round_to(point.1, precision),
            role: node_type.role(),
        }
    }
}

/// No finite `f64` has more fractional decimal digits than this.
const MAX_FRACTION_DIGITS: u32 = 1074;

/// Rounds the exact decimal value of `value`, ties to even.
fn round_to(value: f64, precision: u32) -> f64 {
    if !value.is_finite() || precision >= MAX_FRACTION_DIGITS {
        return value;
    }
    let Ok(rounded) = format!("{value:.prec$}", prec = precision as usize).parse::<f64>() else {
        return value;
    };
    // Collapse -0.0 so it is never printed with a sign.
    if rounded == 0.0 { 0.0 } else { rounded }
}
