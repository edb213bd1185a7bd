//! Graph store tests: membership, symmetric edges, removal.

use social_graph::graph::SocialGraph;
use social_graph::types::error::GraphError;
use social_graph::types::member::Member;

// ==================== Membership Tests ====================

#[test]
fn test_empty_graph() {
    let graph = SocialGraph::new();
    assert!(graph.is_empty());
    assert!(!graph.has_edges());
    assert_eq!(graph.member_count(), 0);
    assert_eq!(graph.entry_count(), 0);
}

#[test]
fn test_members_first_seen_order() {
    let mut graph = SocialGraph::new();
    graph.add_edge("C", "A");
    graph.add_edge("B", "A");
    graph.add_edge("C", "D");

    let order: Vec<&str> = graph.members().iter().map(Member::as_str).collect();
    assert_eq!(order, vec!["C", "A", "B", "D"]);
}

#[test]
fn test_member_registered_once() {
    let mut graph = SocialGraph::new();
    graph.add_edge("A", "B");
    graph.add_edge("A", "C");
    graph.add_edge("D", "A");

    assert_eq!(graph.member_count(), 4);
    assert!(graph.contains("A"));
    assert!(!graph.contains("Z"));
}

// ==================== Edge Tests ====================

#[test]
fn test_add_edge_symmetric() {
    let mut graph = SocialGraph::new();
    graph.add_edge("A", "B");

    let a_neighbors: Vec<&str> = graph
        .neighbors("A")
        .unwrap()
        .iter()
        .map(|m| m.as_str())
        .collect();
    let b_neighbors: Vec<&str> = graph
        .neighbors("B")
        .unwrap()
        .iter()
        .map(|m| m.as_str())
        .collect();
    assert!(a_neighbors.contains(&"B"));
    assert!(b_neighbors.contains(&"A"));
}

#[test]
fn test_duplicate_edge_appends_twice() {
    let mut graph = SocialGraph::new();
    graph.add_edge("A", "B");
    graph.add_edge("A", "B");

    // Bookkeeping keeps both occurrences
    assert_eq!(graph.friends_of("A").unwrap().len(), 2);
    assert_eq!(graph.friends_of("B").unwrap().len(), 2);
    // The distinct relation does not
    assert_eq!(graph.neighbors("A").unwrap().len(), 1);
    assert_eq!(graph.neighbors("B").unwrap().len(), 1);
}

#[test]
fn test_self_loop_double_entry() {
    let mut graph = SocialGraph::new();
    graph.add_edge("A", "A");

    // Both symmetric appends land in the same list
    assert_eq!(graph.friends_of("A").unwrap().len(), 2);
    let distinct: Vec<&str> = graph
        .neighbors("A")
        .unwrap()
        .iter()
        .map(|m| m.as_str())
        .collect();
    assert_eq!(distinct, vec!["A"]);
}

#[test]
fn test_neighbors_first_append_order() {
    let mut graph = SocialGraph::new();
    graph.add_edge("A", "C");
    graph.add_edge("A", "B");
    graph.add_edge("A", "C");
    graph.add_edge("A", "D");

    let order: Vec<&str> = graph
        .neighbors("A")
        .unwrap()
        .iter()
        .map(|m| m.as_str())
        .collect();
    assert_eq!(order, vec!["C", "B", "D"]);
}

#[test]
fn test_neighbors_unknown_member() {
    let graph = SocialGraph::new();
    match graph.neighbors("ghost") {
        Err(GraphError::MemberNotFound(m)) => assert_eq!(m.as_str(), "ghost"),
        other => panic!("Expected MemberNotFound, got {:?}", other.map(|v| v.len())),
    }
}

// ==================== Removal Tests ====================

#[test]
fn test_remove_edge_round_trip() {
    let mut graph = SocialGraph::new();
    graph.add_edge("A", "B");
    graph.add_edge("A", "C");
    graph.remove_edge("A", "B").unwrap();

    let a_neighbors: Vec<&str> = graph
        .neighbors("A")
        .unwrap()
        .iter()
        .map(|m| m.as_str())
        .collect();
    assert_eq!(a_neighbors, vec!["C"]);
    assert!(graph.friends_of("B").unwrap().is_empty());
    // Members survive edge removal
    assert!(graph.contains("B"));
}

#[test]
fn test_remove_edge_one_occurrence() {
    let mut graph = SocialGraph::new();
    graph.add_edge("A", "B");
    graph.add_edge("A", "B");
    graph.remove_edge("A", "B").unwrap();

    assert_eq!(graph.friends_of("A").unwrap().len(), 1);
    assert_eq!(graph.friends_of("B").unwrap().len(), 1);
}

#[test]
fn test_remove_missing_edge_fails() {
    let mut graph = SocialGraph::new();
    graph.add_edge("A", "B");
    graph.add_edge("C", "D");

    let result = graph.remove_edge("A", "C");
    match result {
        Err(GraphError::EdgeNotFound { a, b }) => {
            assert_eq!(a.as_str(), "A");
            assert_eq!(b.as_str(), "C");
        }
        _ => panic!("Expected EdgeNotFound"),
    }

    // State unchanged
    assert_eq!(graph.friends_of("A").unwrap().len(), 1);
    assert_eq!(graph.friends_of("C").unwrap().len(), 1);
    assert_eq!(graph.entry_count(), 4);
}

#[test]
fn test_remove_edge_unknown_member_fails() {
    let mut graph = SocialGraph::new();
    graph.add_edge("A", "B");
    assert!(matches!(
        graph.remove_edge("A", "ghost"),
        Err(GraphError::EdgeNotFound { .. })
    ));
    assert_eq!(graph.entry_count(), 2);
}

#[test]
fn test_remove_self_loop() {
    let mut graph = SocialGraph::new();
    graph.add_edge("A", "A");
    graph.add_edge("A", "B");
    graph.remove_edge("A", "A").unwrap();

    let a_friends: Vec<&str> = graph
        .friends_of("A")
        .unwrap()
        .iter()
        .map(Member::as_str)
        .collect();
    assert_eq!(a_friends, vec!["B"]);
    // A second removal has nothing left to remove
    assert!(matches!(
        graph.remove_edge("A", "A"),
        Err(GraphError::EdgeNotFound { .. })
    ));
}
