use crate::ir::{GraphNode, NodeType};
use once_cell::sync::Lazy;
use regex::Regex;
use std::cmp::Ordering;

static ROOM_SEGMENT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^rm_(\d+)[A-Za-z]?(?:_door(\d+))?").unwrap());

/// Room number given to entrances and exits so they follow every room door.
pub const BUILDING_DOOR_ROOM: u64 = u64::MAX;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct SortKey<'a> {
    rank: u8,
    room: u64,
    door: u64,
    id: &'a str,
}

pub fn sort_key(node: &GraphNode) -> SortKey<'_> {
    let id = node.id.as_str();
    let (room, door) = match node.node_type {
        NodeType::Room => (room_and_door_numbers(id).0, 0),
        NodeType::Door if is_building_door(id) => (BUILDING_DOOR_ROOM, 0),
        NodeType::Door => room_and_door_numbers(id),
        NodeType::Hall | NodeType::Elevator => (0, 0),
    };
    SortKey {
        rank: node.node_type.rank(),
        room,
        door,
        id,
    }
}

pub fn compare_nodes(a: &GraphNode, b: &GraphNode) -> Ordering {
    sort_key(a).cmp(&sort_key(b))
}

pub fn sort_nodes(nodes: &mut [GraphNode]) {
    nodes.sort_by(compare_nodes);
}

/// `(room, door)` numbers from an `rm_` id; `(0, 0)` for anything else.
pub fn room_and_door_numbers(id: &str) -> (u64, u64) {
    let Some(caps) = ROOM_SEGMENT_RE.captures(id) else {
        return (0, 0);
    };
    let room = caps[1].parse().unwrap_or(0);
    let door = caps
        .get(2)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0);
    (room, door)
}

fn is_building_door(id: &str) -> bool {
    id.starts_with("entrance_") || id.starts_with("exit_")
}
