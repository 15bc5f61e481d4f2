use std::collections::HashSet;
use std::path::Path;

use svg_graph_nodes::{Config, GraphNode, NodeType, Role, render_lines, run, run_file};

const INKSCAPE_HEADER: &str = r#"<svg xmlns="http://www.w3.org/2000/svg"
     xmlns:inkscape="http://www.inkscape.org/namespaces/inkscape">"#;

fn fixture(name: &str) -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn floor_plan_nodes() -> Vec<GraphNode> {
    run_file(&fixture("floor1.svg"), 1, &Config::default()).expect("fixture should parse")
}

fn wrap(body: &str) -> String {
    format!("{INKSCAPE_HEADER}\n{body}\n</svg>")
}

#[test]
fn floor_plan_matches_expected_output() {
    let nodes = floor_plan_nodes();
    let expected = [
        ("hall_center_1", NodeType::Hall, 500.0, 350.0),
        ("hall_e-w_d_1", NodeType::Hall, 100.0, 350.0),
        ("hall_mosaic_1", NodeType::Hall, 600.0, 400.0),
        ("hall_n-s_a_1", NodeType::Hall, 300.0, 50.0),
        ("hall_n-s_a_2", NodeType::Hall, 300.0, 150.0),
        ("hall_n-s_b_1", NodeType::Hall, 300.0, 650.0),
        ("rm_999", NodeType::Room, 250.0, 90.0),
        ("rm_1000", NodeType::Room, 130.0, 90.0),
        ("rm_1007", NodeType::Room, 170.0, 90.0),
        ("rm_1051A", NodeType::Room, 210.0, 120.0),
        ("rm_1000_door1", NodeType::Door, 120.0, 90.0),
        ("rm_1000_door2", NodeType::Door, 130.0, 90.0),
        ("rm_1051A_door1", NodeType::Door, 210.0, 90.0),
        ("entrance_north", NodeType::Door, 700.0, 0.0),
        ("exit_east", NodeType::Door, 1100.0, 350.0),
        ("elevator_1_f1", NodeType::Elevator, 500.0, 450.0),
        ("elevator_1_f1_1", NodeType::Elevator, 510.0, 450.0),
    ];

    let actual: Vec<_> = nodes
        .iter()
        .map(|n| (n.id.as_str(), n.node_type, n.x, n.y))
        .collect();
    assert_eq!(actual, expected);
}

#[test]
fn every_node_has_a_known_type_and_matching_role() {
    for node in floor_plan_nodes() {
        let expected_role = if node.node_type == NodeType::Room {
            Role::Destination
        } else {
            Role::Routing
        };
        assert_eq!(node.role, expected_role, "{}", node.id);
        assert_eq!(node.floor, 1);
    }
}

#[test]
fn ids_are_unique() {
    let nodes = floor_plan_nodes();
    let unique: HashSet<_> = nodes.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(unique.len(), nodes.len());
}

#[test]
fn type_groups_appear_in_rank_order() {
    let nodes = floor_plan_nodes();
    let ranks: Vec<_> = nodes.iter().map(|n| n.node_type.rank()).collect();
    let mut sorted = ranks.clone();
    sorted.sort();
    assert_eq!(ranks, sorted);
}

#[test]
fn output_is_byte_identical_across_runs() {
    let first = render_lines(&floor_plan_nodes()).unwrap();
    let second = render_lines(&floor_plan_nodes()).unwrap();
    assert_eq!(first, second);
    // hall, room, door and elevator groups are separated by three blank lines
    assert_eq!(first.lines().filter(|line| line.is_empty()).count(), 3);
}

#[test]
fn scenario_room_on_second_floor() {
    let svg = wrap(r#"<circle inkscape:label="room1000" cx="5" cy="5" r="2"/>"#);
    let nodes = run(&svg, 2, &Config::default()).unwrap();
    assert_eq!(
        render_lines(&nodes).unwrap(),
        r#"{"id":"rm_1000", "type":"room", "floor":2, "x":5.0, "y":5.0, "role":"destination"}"#
    );
}

#[test]
fn scenario_room_door() {
    let svg = wrap(r#"<circle inkscape:label="room1051A_door1" cx="1" cy="1"/>"#);
    let nodes = run(&svg, 1, &Config::default()).unwrap();
    assert_eq!(nodes[0].id, "rm_1051A_door1");
    assert_eq!(nodes[0].node_type, NodeType::Door);
    assert_eq!(nodes[0].role, Role::Routing);
}

#[test]
fn scenario_nested_entrance() {
    let svg = wrap(
        r#"<g transform="translate(100,50)"><circle inkscape:label="northEntry" cx="0" cy="0"/></g>"#,
    );
    let nodes = run(&svg, 1, &Config::default()).unwrap();
    assert_eq!(nodes[0].id, "entrance_north");
    assert_eq!((nodes[0].x, nodes[0].y), (100.0, 50.0));
}

#[test]
fn scenario_duplicate_elevators() {
    let svg = wrap(
        r#"<circle inkscape:label="elevator" cx="9" cy="0"/>
<circle inkscape:label="elevator" cx="3" cy="0"/>"#,
    );
    let nodes = run(&svg, 1, &Config::default()).unwrap();
    let ids: Vec<_> = nodes.iter().map(|n| (n.id.as_str(), n.x)).collect();
    assert_eq!(ids, [("elevator_1_f1", 9.0), ("elevator_1_f1_1", 3.0)]);
}

#[test]
fn scenario_unlabelled_shapes_are_excluded() {
    let svg = wrap(
        r#"<circle cx="5" cy="5" r="100"/>
<ellipse inkscape:label="" cx="5" cy="5" rx="3" ry="2"/>"#,
    );
    assert!(run(&svg, 1, &Config::default()).unwrap().is_empty());
}

#[test]
fn rotation_degrades_to_identity() {
    let svg = wrap(
        r#"<g transform="rotate(90)"><circle inkscape:label="room12" cx="3" cy="4"/></g>"#,
    );
    let nodes = run(&svg, 1, &Config::default()).unwrap();
    assert_eq!((nodes[0].x, nodes[0].y), (3.0, 4.0));
}

#[test]
fn doctype_is_accepted() {
    let svg = format!(
        "<?xml version=\"1.0\"?>\n<!DOCTYPE svg PUBLIC \"-//W3C//DTD SVG 1.1//EN\" \"http://www.w3.org/Graphics/SVG/1.1/DTD/svg11.dtd\">\n{}",
        wrap(r#"<circle inkscape:label="room1" cx="1" cy="1"/>"#)
    );
    let nodes = run(&svg, 1, &Config::default()).unwrap();
    assert_eq!(nodes.len(), 1);
}

#[test]
fn malformed_fixture_is_rejected() {
    let err = run("<svg><g></svg>", 1, &Config::default()).unwrap_err();
    assert!(err.to_string().starts_with("failed to parse SVG document"));
}
