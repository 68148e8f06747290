use approx::assert_ulps_eq;
use navgraph::algo::dijkstra::shortest_path;
use navgraph::graph::GraphError;
use navgraph::graph::WeightedGraph;
use navgraph::io::matrix_json;
use petgraph::algo;
use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;
use test_log::test;

fn triangle() -> Vec<Vec<f64>> {
    vec![
        vec![0.0, 1.0, 4.0],
        vec![1.0, 0.0, 2.0],
        vec![4.0, 2.0, 0.0],
    ]
}

#[test]
fn test_root_only() {
    let paths = shortest_path(&[vec![0.0]], 0).unwrap();
    assert_eq!(paths.distance, vec![0.0]);
    assert_eq!(paths.previous, vec![Some(0)]);
}

#[test]
fn test_shorter_path_through_middle_vertex() {
    let paths = shortest_path(&triangle(), 0).unwrap();
    assert_eq!(paths.distance, vec![0.0, 1.0, 3.0]);
    assert_eq!(paths.previous, vec![Some(0), Some(0), Some(1)]);
    assert_eq!(paths.path_to(2), Some(vec![0, 1, 2]));
    assert_eq!(paths.path_to(0), Some(vec![0]));
    assert_eq!(paths.path_to(3), None);
}

#[test]
fn test_other_root() {
    let paths = shortest_path(&triangle(), 2).unwrap();
    assert_eq!(paths.root(), 2);
    assert_eq!(paths.distance, vec![3.0, 2.0, 0.0]);
    assert_eq!(paths.previous, vec![Some(1), Some(2), Some(2)]);
}

#[test]
fn test_equal_cost_ties_go_to_lower_index() {
    // 0-1-3 and 0-2-3 both cost 2
    let matrix = vec![
        vec![0.0, 1.0, 1.0, 5.0],
        vec![1.0, 0.0, 5.0, 1.0],
        vec![1.0, 5.0, 0.0, 1.0],
        vec![5.0, 1.0, 1.0, 0.0],
    ];
    let paths = shortest_path(&matrix, 0).unwrap();
    assert_eq!(paths.distance, vec![0.0, 1.0, 1.0, 2.0]);
    assert_eq!(paths.previous[3], Some(1));
}

#[test]
fn test_missing_edge_costs_nothing() {
    // vertex 2 has no edges, and a zero cell reads as a free edge
    let matrix = vec![
        vec![0.0, 1.0, 0.0],
        vec![1.0, 0.0, 0.0],
        vec![0.0, 0.0, 0.0],
    ];
    let paths = shortest_path(&matrix, 0).unwrap();
    assert_eq!(paths.distance[2], 0.0);
    assert_eq!(paths.previous[2], Some(0));
    // once 2 is settled at 0 it hands 1 a free route too
    assert_eq!(paths.distance, vec![0.0, 0.0, 0.0]);
    assert_eq!(paths.previous, vec![Some(0), Some(2), Some(0)]);
    assert!(paths.is_reachable(2));
}

#[test]
fn test_matrix_is_not_mutated() {
    let matrix = triangle();
    let before = matrix.clone();
    let _ = shortest_path(&matrix, 1).unwrap();
    assert_eq!(matrix, before);
}

#[test]
fn test_bad_input() {
    assert_eq!(
        shortest_path(&triangle(), 3),
        Err(GraphError::RootOutOfRange { root: 3, size: 3 })
    );
    assert!(matches!(
        shortest_path(&[], 0),
        Err(GraphError::InvalidMatrix { .. })
    ));
    assert!(matches!(
        shortest_path(&[vec![0.0, 1.0], vec![1.0]], 0),
        Err(GraphError::InvalidMatrix { .. })
    ));
}

#[test]
fn test_named_root() {
    let mut graph = WeightedGraph::new();
    graph
        .add_edges(
            "Denver",
            [("San Diego", 250.0), ("New York", 1099.0)],
            false,
        )
        .unwrap();
    graph.add_edge("San Diego", "New York", 900.0, false).unwrap();

    let paths = graph.shortest_paths_from("San Diego").unwrap();
    assert_eq!(paths.root(), 1);
    assert_eq!(paths.distance, vec![250.0, 0.0, 900.0]);
    assert_eq!(paths.path_to(2), Some(vec![1, 2]));

    assert!(matches!(
        graph.shortest_paths_from("Boston"),
        Err(GraphError::UnknownVertex(_))
    ));
}

#[test]
fn test_agrees_with_petgraph() {
    let graph = WeightedGraph::from_matrix(vec![
        vec![0.0, 7.0, 9.0, 14.0, 20.0],
        vec![7.0, 0.0, 10.0, 15.0, 3.0],
        vec![9.0, 10.0, 0.0, 11.0, 2.0],
        vec![14.0, 15.0, 11.0, 0.0, 6.0],
        vec![20.0, 3.0, 2.0, 6.0, 0.0],
    ])
    .unwrap();
    let exported = graph.to_petgraph();

    for start in exported.node_indices() {
        let expected = algo::dijkstra(&exported, start, None, |e| *e.weight());
        let paths = graph.shortest_paths_from(start.index()).unwrap();
        assert_eq!(expected.len(), graph.vertex_count());
        for (node, cost) in expected {
            assert_ulps_eq!(paths.distance[node.index()], cost, max_ulps = 4);
        }
    }

    let paths = graph.shortest_paths_from(0).unwrap();
    assert_eq!(paths.distance, vec![0.0, 7.0, 9.0, 14.0, 10.0]);
    assert_eq!(paths.path_to(4), Some(vec![0, 1, 4]));
    assert_eq!(exported[NodeIndex::new(4)], graph.vertices()[4]);
}

#[test]
fn test_result_as_json() {
    let paths = shortest_path(&triangle(), 0).unwrap();
    let json = matrix_json::to_json(&paths).unwrap();
    assert_eq!(
        json,
        r#"{"root":0,"distance":[0.0,1.0,3.0],"previous":[0,0,1]}"#
    );
}
