use crate::config::Config;
use crate::ir::NodeType;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

static DIGITS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").unwrap());
static ROOM_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)room(\d+[a-z]?)(?:_room\d+)?").unwrap());
static ROOM_DOOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)room(\d+[a-z]?)_door(\d+)").unwrap());

const DIRECTIONS: [&str; 4] = ["north", "south", "east", "west"];

/// Directional hallway prefix -> (axis, branch).
const HALLWAY_AXES: [(&str, &str, &str); 4] = [
    ("northhallway", "n-s", "a"),
    ("southhallway", "n-s", "b"),
    ("easthallway", "e-w", "c"),
    ("westhallway", "e-w", "d"),
];

/// Builds the canonical (not yet deduplicated) id for a classified label.
pub fn synthesize_id(label: &str, node_type: NodeType, config: &Config) -> String {
    let lower = label.to_lowercase();
    match node_type {
        NodeType::Hall => hall_id(label, &lower, config),
        NodeType::Room => room_id(label, &lower),
        NodeType::Door => door_id(label, &lower),
        NodeType::Elevator => elevator_id(&lower),
    }
}

fn hall_id(label: &str, lower: &str, config: &Config) -> String {
    for (prefix, axis, branch) in HALLWAY_AXES {
        if lower.contains(prefix) {
            let seq = DIGITS_RE.find(label).map_or("1", |m| m.as_str());
            return format!("hall_{axis}_{branch}_{seq}");
        }
    }
    if let Some(id) = config.hall_alias(lower) {
        return id.to_string();
    }
    format!("hall_{}", sanitize(lower))
}

fn room_id(label: &str, lower: &str) -> String {
    if let Some(caps) = ROOM_RE.captures(label) {
        return format!("rm_{}", &caps[1]);
    }
    format!("rm_{}", lower.replace("room", "").replace(' ', ""))
}

fn door_id(label: &str, lower: &str) -> String {
    if lower.contains("entry") || lower.contains("entrance") {
        return match direction(lower) {
            Some(dir) => format!("entrance_{dir}"),
            None => {
                let rest = lower.replace("entry", "").replace("entrance", "");
                format!("entrance_{}", rest.trim_matches('_'))
            }
        };
    }
    if lower.contains("exit") {
        return match direction(lower) {
            Some(dir) => format!("exit_{dir}"),
            None => format!("exit_{}", lower.replace("exit", "").trim_matches('_')),
        };
    }
    if let Some(caps) = ROOM_DOOR_RE.captures(label) {
        return format!("rm_{}_door{}", &caps[1], &caps[2]);
    }
    format!("door_{}", sanitize(lower))
}

fn elevator_id(lower: &str) -> String {
    match direction(lower) {
        Some(dir) => format!("elevator_{dir}_f1"),
        None => "elevator_1_f1".to_string(),
    }
}

fn direction(lower: &str) -> Option<&'static str> {
    DIRECTIONS.into_iter().find(|dir| lower.contains(dir))
}

fn sanitize(lower: &str) -> String {
    lower.replace(' ', "_")
}

/// Per-run record of ids handed out so far.
#[derive(Debug, Default)]
pub struct IdRegistry {
    counts: HashMap<String, u32>,
    renamed: usize,
}

impl IdRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `base` on first sight, then `base_1`, `base_2`, ... for repeats.
    ///
    /// Suffixed ids are registered too, so a later label whose canonical id
    /// happens to equal an already issued suffixed id is itself suffixed.
    pub fn register(&mut self, base: &str) -> String {
        let Some(&seen) = self.counts.get(base) else {
            self.counts.insert(base.to_string(), 0);
            return base.to_string();
        };

        let mut count = seen;
        let id = loop {
            count += 1;
            let candidate = format!("{base}_{count}");
            if !self.counts.contains_key(&candidate) {
                break candidate;
            }
        };
        self.counts.insert(base.to_string(), count);
        self.counts.insert(id.clone(), 0);
        self.renamed += 1;
        log::debug!(base = base, id = id.as_str(); "renamed duplicate id");
        id
    }

    /// Number of ids that had to be suffixed.
    pub fn renamed(&self) -> usize {
        self.renamed
    }
}
