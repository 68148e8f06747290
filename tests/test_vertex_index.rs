use navgraph::graph::GraphError;
use navgraph::graph::Vertex;
use navgraph::graph::VertexIndex;
use test_log::test;

#[test]
fn test_insertion_order() {
    let mut index = VertexIndex::new();
    assert!(index.is_empty());
    assert_eq!(index.insert(Vertex::from("b")), Ok(0));
    assert_eq!(index.insert(Vertex::from("a")), Ok(1));
    assert_eq!(index.insert(Vertex::from(3)), Ok(2));

    assert_eq!(index.len(), 3);
    assert_eq!(index.get(&Vertex::from("a")), Some(1));
    assert_eq!(index.name_of(2), Some(&Vertex::Id(3)));
    assert_eq!(index.name_of(3), None);
    assert!(!index.contains(&Vertex::from("c")));
}

#[test]
fn test_duplicate_keeps_first_index() {
    let mut index = VertexIndex::new();
    index.insert(Vertex::from("a")).unwrap();
    assert_eq!(
        index.insert(Vertex::from("a")),
        Err(GraphError::DuplicateVertex(Vertex::from("a")))
    );
    assert_eq!(index.get(&Vertex::from("a")), Some(0));
    assert_eq!(index.len(), 1);
}

#[test]
fn test_identity() {
    let index = VertexIndex::identity(3);
    assert_eq!(
        index.names(),
        &[Vertex::Id(0), Vertex::Id(1), Vertex::Id(2)]
    );
    assert_eq!(index.get(&Vertex::Id(2)), Some(2));
}

#[test]
fn test_vertex_json_and_display() {
    let names: Vec<Vertex> = serde_json::from_str(r#"[7, "seven", -1]"#).unwrap();
    assert_eq!(
        names,
        vec![Vertex::Id(7), Vertex::from("seven"), Vertex::Id(-1)]
    );
    assert_eq!(Vertex::Id(7).to_string(), "7");
    assert_eq!(Vertex::from("seven").to_string(), "'seven'");
    assert!(Vertex::Id(100) < Vertex::from("0"));
}
