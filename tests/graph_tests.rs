use arbor::{Graph, GraphError, NodeIdx};

fn values<T: Copy, W>(graph: &Graph<T, W>, nodes: &[NodeIdx]) -> Vec<T> {
    nodes.iter().map(|&n| graph[n]).collect()
}

/// ```text
///     1
///    / \
///   2   3
///  /     \
/// 4       5
/// ```
fn tree() -> (Graph<i32>, Vec<NodeIdx>) {
    let mut graph = Graph::new();
    let n: Vec<_> = (1..=5).map(|v| graph.add_node(v)).collect();
    graph.add_edge(n[0], n[1]).unwrap();
    graph.add_edge(n[0], n[2]).unwrap();
    graph.add_edge(n[1], n[3]).unwrap();
    graph.add_edge(n[2], n[4]).unwrap();
    (graph, n)
}

fn cycle() -> (Graph<i32>, Vec<NodeIdx>) {
    let mut graph = Graph::new();
    let n: Vec<_> = (1..=3).map(|v| graph.add_node(v)).collect();
    graph.add_edge(n[0], n[1]).unwrap();
    graph.add_edge(n[1], n[2]).unwrap();
    graph.add_edge(n[2], n[0]).unwrap();
    (graph, n)
}

#[test]
fn test_add_edge_default_weight() {
    let mut graph: Graph<i32> = Graph::new();
    let a = graph.add_node(1);
    let b = graph.add_node(2);
    graph.add_edge(a, b).unwrap();
    assert_eq!(graph.weight(a, b), Some(1.0));
    assert_eq!(graph.weight(b, a), None);
}

#[test]
fn test_add_edge_explicit_weight() {
    let mut graph: Graph<i32> = Graph::new();
    let a = graph.add_node(1);
    let b = graph.add_node(2);
    graph.add_weighted_edge(a, b, 5.0).unwrap();
    assert_eq!(graph.weight(a, b), Some(5.0));
}

#[test]
fn test_add_edge_rejects_foreign_nodes() {
    let mut graph: Graph<i32> = Graph::new();
    let a = graph.add_node(1);

    let mut other: Graph<i32> = Graph::new();
    other.add_node(0);
    let foreign = other.add_node(2);

    let err = graph.add_edge(a, foreign).unwrap_err();
    assert_eq!(err, GraphError::InvalidNode { index: 1 });
    assert_eq!(err.to_string(), "node 1 does not belong to this graph");

    assert!(graph.add_edge(foreign, a).is_err());
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_bfs_order() {
    let (graph, n) = tree();
    let order = graph.bfs(n[0]).unwrap();
    assert_eq!(values(&graph, &order), vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_dfs_order() {
    let (graph, n) = tree();
    let order = graph.dfs(n[0]).unwrap();
    // One full branch before backtracking.
    assert_eq!(values(&graph, &order), vec![1, 2, 4, 3, 5]);
}

#[test]
fn test_traversals_handle_cycles() {
    let (graph, n) = cycle();
    assert_eq!(values(&graph, &graph.bfs(n[0]).unwrap()), vec![1, 2, 3]);
    assert_eq!(values(&graph, &graph.dfs(n[0]).unwrap()), vec![1, 2, 3]);
    assert_eq!(values(&graph, &graph.bfs(n[1]).unwrap()), vec![2, 3, 1]);
}

#[test]
fn test_traversals_exclude_unreachable() {
    let (mut graph, n) = tree();
    let island = graph.add_node(99);

    assert!(!graph.bfs(n[0]).unwrap().contains(&island));
    assert!(!graph.dfs(n[0]).unwrap().contains(&island));
    assert_eq!(graph.bfs(island).unwrap(), vec![island]);
    assert_eq!(graph.dfs(island).unwrap(), vec![island]);
}

#[test]
fn test_traversals_reject_foreign_start() {
    let (graph, _) = tree();
    let mut other: Graph<i32> = Graph::new();
    let foreign = other.add_node(0);

    assert!(graph.bfs(foreign).is_err());
    assert!(graph.dfs(foreign).is_err());
    assert!(graph.shortest_path(foreign, foreign).is_err());
}

#[test]
fn test_chain_contains_each_node_once() {
    let mut graph: Graph<char> = Graph::new();
    let a = graph.add_node('A');
    let b = graph.add_node('B');
    let c = graph.add_node('C');
    graph.add_edge(a, b).unwrap();
    graph.add_edge(b, c).unwrap();

    for order in [graph.bfs(a).unwrap(), graph.dfs(a).unwrap()] {
        assert_eq!(order.len(), 3);
        assert_eq!(order[0], a);
        assert!(order.contains(&b) && order.contains(&c));
    }
}

#[test]
fn test_shortest_path_diamond() {
    //     1
    //    / \
    //   2   3
    //    \ /
    //     4
    let mut graph: Graph<i32> = Graph::new();
    let n: Vec<_> = (1..=4).map(|v| graph.add_node(v)).collect();
    graph.add_weighted_edge(n[0], n[1], 1.0).unwrap();
    graph.add_weighted_edge(n[0], n[2], 2.0).unwrap();
    graph.add_weighted_edge(n[1], n[3], 3.0).unwrap();
    graph.add_weighted_edge(n[2], n[3], 1.0).unwrap();

    let path = graph.shortest_path(n[0], n[3]).unwrap().unwrap();
    assert_eq!(values(&graph, &path), vec![1, 3, 4]);

    let (_, cost) = graph.shortest_path_with_cost(n[0], n[3]).unwrap().unwrap();
    assert_eq!(cost, 3.0);
    assert_eq!(graph.path_weight(&path), Some(3.0));
}

#[test]
fn test_shortest_path_prefers_lighter_detour() {
    let mut graph: Graph<&str> = Graph::new();
    let a = graph.add_node("A");
    let b = graph.add_node("B");
    let c = graph.add_node("C");
    graph.add_weighted_edge(a, b, 4.0).unwrap();
    graph.add_weighted_edge(b, c, 3.0).unwrap();
    graph.add_weighted_edge(a, c, 8.0).unwrap();

    assert_eq!(graph.shortest_path(a, c).unwrap(), Some(vec![a, b, c]));
}

#[test]
fn test_shortest_path_unreachable() {
    let mut graph: Graph<i32> = Graph::new();
    let a = graph.add_node(1);
    let b = graph.add_node(2);
    assert_eq!(graph.shortest_path(a, b).unwrap(), None);

    // Direction matters.
    graph.add_edge(b, a).unwrap();
    assert_eq!(graph.shortest_path(a, b).unwrap(), None);
    assert_eq!(graph.shortest_path(b, a).unwrap(), Some(vec![b, a]));
}

#[test]
fn test_shortest_path_zero_weights() {
    let mut graph: Graph<i32> = Graph::new();
    let a = graph.add_node(1);
    let b = graph.add_node(2);
    let c = graph.add_node(3);
    graph.add_weighted_edge(a, b, 0.0).unwrap();
    graph.add_weighted_edge(b, c, 0.0).unwrap();
    graph.add_weighted_edge(a, c, 5.0).unwrap();

    let path = graph.shortest_path(a, c).unwrap().unwrap();
    assert_eq!(values(&graph, &path), vec![1, 2, 3]);
}

#[test]
fn test_shortest_path_to_self() {
    let mut graph: Graph<i32> = Graph::new();
    let a = graph.add_node(1);
    assert_eq!(graph.shortest_path(a, a).unwrap(), Some(vec![a]));
}

#[test]
fn test_overwritten_weight_changes_route() {
    let mut graph: Graph<i32, u64> = Graph::new();
    let a = graph.add_node(1);
    let b = graph.add_node(2);
    let c = graph.add_node(3);
    graph.add_weighted_edge(a, b, 1).unwrap();
    graph.add_weighted_edge(b, c, 1).unwrap();
    graph.add_weighted_edge(a, c, 5).unwrap();
    assert_eq!(graph.shortest_path(a, c).unwrap(), Some(vec![a, b, c]));

    graph.add_weighted_edge(a, c, 1).unwrap();
    assert_eq!(graph.shortest_path(a, c).unwrap(), Some(vec![a, c]));
    assert_eq!(graph.edge_count(), 3);
}

#[test]
fn test_nodes_in_insertion_order() {
    let (graph, n) = tree();
    assert_eq!(graph.nodes().collect::<Vec<_>>(), n);
    assert!(n.iter().enumerate().all(|(i, node)| node.index() == i));
}
