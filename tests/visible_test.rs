//! Tests for the expansion-aware visible listing

use rstest::{fixture, rstest};

use treedit::util::testing;
use treedit::{Forest, NewNode, NodeId};

fn id(token: &str) -> NodeId {
    NodeId::from(token)
}

fn visible_ids(forest: &Forest) -> Vec<String> {
    forest
        .visible_nodes()
        .iter()
        .map(|row| row.id.to_string())
        .collect()
}

// r1
// ├── a
// │   └── g
// └── b
// r2
// └── c
#[fixture]
fn forest() -> Forest {
    testing::init_test_setup();
    let mut forest = Forest::new();
    forest
        .insert(None, 0, NewNode::titled("Root Node 1").with_id(id("r1")))
        .unwrap();
    forest
        .insert(Some(&id("r1")), 0, NewNode::titled("Child A").with_id(id("a")))
        .unwrap();
    forest
        .insert(Some(&id("a")), 0, NewNode::titled("Grandchild").with_id(id("g")))
        .unwrap();
    forest
        .insert(Some(&id("r1")), 1, NewNode::titled("Child B").with_id(id("b")))
        .unwrap();
    forest
        .insert(None, 1, NewNode::titled("Root Node 2").with_id(id("r2")))
        .unwrap();
    forest
        .insert(Some(&id("r2")), 0, NewNode::titled("Child C").with_id(id("c")))
        .unwrap();
    forest
}

// ============================================================
// Order Tests
// ============================================================

#[rstest]
fn given_expanded_forest_when_listing_then_preorder_with_depths(forest: Forest) {
    let rows = forest.visible_nodes();

    let ids: Vec<&str> = rows.iter().map(|row| row.id.as_str()).collect();
    let depths: Vec<usize> = rows.iter().map(|row| row.depth).collect();
    assert_eq!(ids, vec!["r1", "a", "g", "b", "r2", "c"]);
    assert_eq!(depths, vec![0, 1, 2, 1, 0, 1]);
}

#[rstest]
fn given_rows_when_listing_then_parent_and_child_flags_are_set(forest: Forest) {
    let rows = forest.visible_nodes();

    let grandchild = rows.iter().find(|row| row.id == id("g")).unwrap();
    assert_eq!(grandchild.parent, Some(id("a")));
    assert!(!grandchild.has_children);

    let root = rows.iter().find(|row| row.id == id("r1")).unwrap();
    assert_eq!(root.parent, None);
    assert!(root.has_children);
    assert!(root.expanded);
}

#[rstest]
fn given_empty_forest_when_listing_then_no_rows() {
    testing::init_test_setup();
    let forest = Forest::new();

    assert!(forest.visible_nodes().is_empty());
}

// ============================================================
// Purity Tests
// ============================================================

#[rstest]
fn given_fixed_forest_when_listing_twice_then_identical(forest: Forest) {
    assert_eq!(forest.visible_nodes(), forest.visible_nodes());
}

#[rstest]
fn given_lazy_iteration_when_collected_then_matches_materialized(forest: Forest) {
    let lazy: Vec<_> = forest.visible_iter().collect();

    assert_eq!(lazy, forest.visible_nodes());
}

// ============================================================
// Collapse / Expand Tests
// ============================================================

#[rstest]
fn given_collapsed_node_when_listing_then_exactly_its_descendants_disappear(mut forest: Forest) {
    forest.toggle_expanded(&id("a")).unwrap();

    // "a" itself stays visible; only "g" is hidden
    assert_eq!(visible_ids(&forest), vec!["r1", "a", "b", "r2", "c"]);
}

#[rstest]
fn given_collapsed_root_when_reexpanded_then_original_order_returns(mut forest: Forest) {
    let before = visible_ids(&forest);

    forest.toggle_expanded(&id("r1")).unwrap();
    assert_eq!(visible_ids(&forest), vec!["r1", "r2", "c"]);

    forest.toggle_expanded(&id("r1")).unwrap();
    assert_eq!(visible_ids(&forest), before);
}

#[rstest]
fn given_collapsed_ancestor_when_descendant_is_expanded_then_it_stays_hidden(mut forest: Forest) {
    forest.toggle_expanded(&id("r1")).unwrap();

    // "g"'s own parent "a" is expanded, but "a" is hidden under "r1"
    assert!(forest.visible_index_of(&id("g")).is_none());
    assert!(forest.visible_index_of(&id("a")).is_none());
}

#[rstest]
fn given_visible_node_when_asked_for_its_row_then_index_matches_listing(forest: Forest) {
    assert_eq!(forest.visible_index_of(&id("r1")), Some(0));
    assert_eq!(forest.visible_index_of(&id("b")), Some(3));
    assert_eq!(forest.visible_index_of(&id("ghost")), None);
}
