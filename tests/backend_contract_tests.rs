use markgraph::{EdgeListGraph, Graph, GraphError, MatrixGraph, Weight, algo::nodes_by_degree};

const SCENARIO_EDGES: [(usize, usize, Weight); 6] =
    [(0, 1, 1), (0, 2, 1), (1, 2, 1), (2, 3, 1), (3, 4, 1), (1, 4, 3)];

fn populate<G: Graph>(mut graph: G, edges: &[(usize, usize, Weight)]) -> G {
    for &(a, b, w) in edges {
        graph.set_edge(a, b, w).expect("set edge");
    }
    graph
}

fn backends(n: usize, directed: bool) -> Vec<Box<dyn Graph>> {
    vec![
        Box::new(MatrixGraph::new(n, directed).expect("matrix")),
        Box::new(EdgeListGraph::new(n, directed).expect("edge list")),
    ]
}

fn all_neighbors(graph: &dyn Graph, v: usize) -> Vec<usize> {
    let mut found = Vec::new();
    let mut current = graph.first_neighbor(v).expect("first");
    while let Some(w) = current {
        found.push(w);
        current = graph.next_neighbor(v, w).expect("next");
    }
    found
}

#[test]
fn test_scenario_undirected_edge_queries() {
    for graph in backends(5, false) {
        let graph = populate(graph, &SCENARIO_EDGES);
        assert_eq!(graph.edge_count(), 6);
        assert!(graph.is_edge(0, 1).unwrap());
        assert!(!graph.is_edge(0, 4).unwrap());
        assert_eq!(graph.weight(1, 4).unwrap(), 3);
        assert_eq!(graph.weight(4, 1).unwrap(), 3);
        assert_eq!(graph.weight(0, 1).unwrap(), 1);
    }
}

#[test]
fn test_scenario_delete_edge() {
    for graph in backends(5, false) {
        let mut graph = populate(graph, &SCENARIO_EDGES);
        assert!(graph.delete_edge(1, 2).unwrap());
        assert_eq!(graph.edge_count(), 5);
        assert!(!graph.is_edge(1, 2).unwrap());
        assert!(!graph.is_edge(2, 1).unwrap());
    }
}

#[test]
fn test_scenario_directed_degrees() {
    let edges = [(0, 1, 1), (0, 2, 1), (1, 3, 1), (2, 3, 1)];
    let matrix = populate(MatrixGraph::directed(4).unwrap(), &edges);
    let list = populate(EdgeListGraph::directed(4).unwrap(), &edges);
    assert_eq!(matrix.degree(0).unwrap(), 2);
    assert_eq!(matrix.in_degree(3).unwrap(), 2);
    assert_eq!(list.degree(0).unwrap(), 2);
    assert_eq!(list.in_degree(3).unwrap(), 2);
    assert_eq!(matrix.edge_count(), 4);
    assert_eq!(list.edge_count(), 4);

    let ranked = nodes_by_degree(&matrix, true).unwrap();
    assert_eq!(ranked[0], (0, 2));
    assert_eq!(ranked.last(), Some(&(3, 0)));
    assert_eq!(nodes_by_degree(&list, true).unwrap(), ranked);
}

#[test]
fn test_delete_edge_twice_is_idempotent() {
    for graph in backends(5, false) {
        let mut graph = populate(graph, &SCENARIO_EDGES);
        assert!(graph.delete_edge(3, 4).unwrap());
        let after_first = graph.edge_count();
        assert!(!graph.delete_edge(3, 4).unwrap());
        assert_eq!(graph.edge_count(), after_first);
    }
}

#[test]
fn test_directed_edges_are_one_way() {
    for graph in backends(3, true) {
        let mut graph = populate(graph, &[(0, 1, 4)]);
        assert!(graph.is_edge(0, 1).unwrap());
        assert!(!graph.is_edge(1, 0).unwrap());
        assert_eq!(graph.weight(1, 0).unwrap(), 0);
        assert!(!graph.delete_edge(1, 0).unwrap());
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(all_neighbors(graph.as_ref(), 1), Vec::<usize>::new());
    }
}

#[test]
fn test_neighbor_enumeration_matches_is_edge() {
    for graph in backends(5, false) {
        let graph = populate(graph, &SCENARIO_EDGES);
        for v in 0..5 {
            let mut found = all_neighbors(graph.as_ref(), v);
            found.sort_unstable();
            let expected: Vec<usize> = (0..5).filter(|&w| graph.is_edge(v, w).unwrap()).collect();
            assert_eq!(found, expected, "vertex {v}");
        }
    }
}

#[test]
fn test_marks_default_to_zero_and_are_settable() {
    for mut graph in backends(5, false) {
        graph.set_mark(0, 1).unwrap();
        graph.set_mark(1, 2).unwrap();
        assert_eq!(graph.get_mark(0).unwrap(), 1);
        assert_eq!(graph.get_mark(1).unwrap(), 2);
        assert_eq!(graph.get_mark(2).unwrap(), 0);
        graph.clear_marks();
        assert_eq!(graph.get_mark(1).unwrap(), 0);
    }
}

#[test]
fn test_init_resets_graph() {
    for graph in backends(5, false) {
        let mut graph = populate(graph, &SCENARIO_EDGES);
        graph.set_mark(4, 3).unwrap();
        graph.init(7).unwrap();
        assert_eq!(graph.vertex_count(), 7);
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.get_mark(4).unwrap(), 0);
        assert_eq!(graph.first_neighbor(6).unwrap(), None);
    }
}

#[test]
fn test_out_of_range_vertex_fails_everywhere() {
    for graph in backends(3, false) {
        let mut graph = populate(graph, &[(0, 1, 1)]);
        let err = GraphError::out_of_range(3, 3);
        assert_eq!(graph.first_neighbor(3), Err(err.clone()));
        assert_eq!(graph.next_neighbor(0, 3), Err(err.clone()));
        assert_eq!(graph.next_neighbor(3, 0), Err(err.clone()));
        assert_eq!(graph.set_edge(0, 3, 1), Err(err.clone()));
        assert_eq!(graph.delete_edge(3, 0), Err(err.clone()));
        assert_eq!(graph.is_edge(3, 3), Err(err.clone()));
        assert_eq!(graph.weight(1, 3), Err(err.clone()));
        assert_eq!(graph.get_mark(3), Err(err.clone()));
        assert_eq!(graph.set_mark(3, 1), Err(err));
        assert_eq!(graph.edge_count(), 1);
    }
}

#[test]
fn test_non_positive_weight_rejected_without_mutation() {
    for graph in backends(3, false) {
        let mut graph = populate(graph, &[(0, 1, 2)]);
        for bad in [0, -1, Weight::MIN] {
            assert!(matches!(
                graph.set_edge(0, 1, bad),
                Err(GraphError::InvalidArgument(_))
            ));
            assert!(matches!(
                graph.set_edge(1, 2, bad),
                Err(GraphError::InvalidArgument(_))
            ));
        }
        assert_eq!(graph.weight(0, 1).unwrap(), 2);
        assert!(!graph.is_edge(1, 2).unwrap());
        assert_eq!(graph.edge_count(), 1);
    }
}

#[test]
fn test_update_weight_keeps_edge_count() {
    for graph in backends(5, false) {
        let mut graph = populate(graph, &SCENARIO_EDGES);
        graph.set_edge(2, 0, 7).unwrap();
        assert_eq!(graph.edge_count(), 6);
        assert_eq!(graph.weight(0, 2).unwrap(), 7);
    }
}

#[test]
fn test_empty_graph_rejects_every_vertex() {
    for graph in backends(0, false) {
        assert_eq!(graph.vertex_count(), 0);
        assert_eq!(graph.first_neighbor(0), Err(GraphError::out_of_range(0, 0)));
    }
}

#[test]
fn test_error_messages_are_descriptive() {
    let err = GraphError::out_of_range(9, 4);
    assert_eq!(
        err.to_string(),
        "vertex 9 out of range for graph with 4 vertices"
    );
    let graph = MatrixGraph::undirected(1);
    let mut graph = graph.unwrap();
    let err = graph.set_edge(0, 0, 0).unwrap_err();
    assert!(err.to_string().contains("edge weight must be positive"));
}
