use seq_extract_rs::flow::{
    build_flow, elide_empty_nodes, enumerate_paths, verify_connectivity, visualization, Flow,
};
use seq_extract_rs::structure::{assign_ids, parse_blocks};

fn build(content: &str) -> Flow {
    let mut blocks = parse_blocks(content).unwrap();
    assert_eq!(blocks.len(), 1, "expected a single root block");
    let (tagged, _) = assign_ids(blocks.remove(0), 0);
    build_flow(&tagged).unwrap()
}

#[test]
fn test_flat_sequence_graph_shape() {
    let flow = build("[[a, b, c]]");
    // three statements plus the two sentinels, chained
    assert_eq!(flow.node_count(), 5);
    assert_eq!(flow.edge_count(), 4);
}

#[test]
fn test_branch_graph_shape() {
    let flow = build("[[s1, [[a1], [b1]], s2]]");
    assert_eq!(flow.node_count(), 6);
    // START->s1, s1->a1, s1->b1, a1->s2, b1->s2, s2->END
    assert_eq!(flow.edge_count(), 6);
}

#[test]
fn test_branch_frontiers_at_block_edges() {
    // an alternation at the very start/end of the block connects every
    // alternative to the sentinels
    let flow = build("[[[a], [b]]]");
    let paths = enumerate_paths(&flow, false);
    let mut paths = paths;
    paths.sort();
    assert_eq!(paths, vec![vec!["a".to_string()], vec!["b".to_string()]]);
}

#[test]
fn test_enumeration_with_ids_renders_ordinals() {
    let flow = build("[[a, b]]");
    assert_eq!(
        enumerate_paths(&flow, true),
        vec![vec!["a#1".to_string(), "b#2".to_string()]]
    );
}

#[test]
fn test_elision_rewires_through_empty_chain() {
    let mut flow = build("[[s1, \"\", \"\", s2]]");
    assert_eq!(flow.node_count(), 6);
    elide_empty_nodes(&mut flow);
    verify_connectivity(&flow).unwrap();
    assert_eq!(flow.node_count(), 4);
    assert_eq!(
        enumerate_paths(&flow, false),
        vec![vec!["s1".to_string(), "s2".to_string()]]
    );
}

#[test]
fn test_elision_keeps_start_connected_to_end() {
    let mut flow = build("[[\"\"]]");
    elide_empty_nodes(&mut flow);
    verify_connectivity(&flow).unwrap();
    assert_eq!(flow.node_count(), 2);
    assert_eq!(flow.edge_count(), 1);
    assert_eq!(enumerate_paths(&flow, false), vec![Vec::<String>::new()]);
}

#[test]
fn test_elision_never_drops_nonempty_nodes() {
    let mut flow = build("[[s1, [[a1], [\"\"]], s2]]");
    elide_empty_nodes(&mut flow);
    verify_connectivity(&flow).unwrap();
    // s1, a1, s2 and the sentinels survive
    assert_eq!(flow.node_count(), 5);
}

#[test]
fn test_duplicate_edges_are_collapsed() {
    // both empty alternatives rewire to the same s1->s2 edge
    let mut flow = build("[[s1, [[\"\"], [\"\"]], s2]]");
    elide_empty_nodes(&mut flow);
    let paths = enumerate_paths(&flow, false);
    assert_eq!(paths, vec![vec!["s1".to_string(), "s2".to_string()]]);
}

#[test]
fn test_dot_output_shape() {
    let flow = build("[[a, [[b], [c]]]]");
    let dot = visualization::generate_dot(&flow);
    assert!(dot.starts_with("digraph flow {"));
    assert!(dot.contains("label=\"START\""));
    assert!(dot.contains("label=\"END\""));
    assert!(dot.contains("label=\"a#1\""));
    assert!(dot.contains("->"));
    assert!(dot.trim_end().ends_with('}'));
}
