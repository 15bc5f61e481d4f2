use crate::config::Config;
use crate::ir::NodeType;

/// One classification test over a lowercased label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rule {
    ContainsAny(&'static [&'static str]),
    /// Exact match against a configured hall alias.
    HallAlias,
    StartsWithExcluding {
        prefix: &'static str,
        excluded: &'static str,
    },
}

/// Evaluated top to bottom; the first matching rule decides the type.
const RULES: &[(Rule, NodeType)] = &[
    (Rule::ContainsAny(&["elevator"]), NodeType::Elevator),
    (Rule::ContainsAny(&["entry", "entrance", "exit"]), NodeType::Door),
    (Rule::ContainsAny(&["_door"]), NodeType::Door),
    (Rule::ContainsAny(&["hallway", "hall"]), NodeType::Hall),
    (Rule::HallAlias, NodeType::Hall),
    (
        Rule::StartsWithExcluding {
            prefix: "room",
            excluded: "_door",
        },
        NodeType::Room,
    ),
];

pub struct LabelClassifier<'c> {
    config: &'c Config,
}

impl<'c> LabelClassifier<'c> {
    pub fn new(config: &'c Config) -> Self {
        Self { config }
    }

    /// Maps a label to its node type, or `None` when it names no node.
    pub fn classify(&self, label: &str) -> Option<NodeType> {
        if label.is_empty() {
            return None;
        }
        let lower = label.to_lowercase();
        RULES
            .iter()
            .find(|(rule, _)| self.matches(*rule, &lower))
            .map(|(_, node_type)| *node_type)
    }

    fn matches(&self, rule: Rule, lower: &str) -> bool {
        match rule {
            Rule::ContainsAny(needles) => needles.iter().any(|needle| lower.contains(needle)),
            Rule::HallAlias => self.config.hall_alias(lower).is_some(),
            Rule::StartsWithExcluding { prefix, excluded } => {
                lower.starts_with(prefix) && !lower.contains(excluded)
            }
        }
    }
}
