//! Property tests: the impact chain built from well-formed dependencies is
//! a forest in which no impact is its own ancestor.

use std::collections::{HashMap, HashSet};

use fleetwise_impact::{
    build_chain, Direction, ImpactCategory, ImpactChainNode, ImpactError, ImpactItem, Severity,
};
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn item(i: usize, deps: Vec<String>) -> ImpactItem {
    ImpactItem::new(
        format!("impact-{i}"),
        ImpactCategory::Schedule,
        Direction::Downstream,
        Severity::Low,
        format!("Impact {i}"),
    )
    .with_depends_on(deps)
}

/// Each impact depends on at most one earlier impact.
fn arb_tree_list() -> impl Strategy<Value = Vec<ImpactItem>> {
    prop::collection::vec(prop::option::of(any::<prop::sample::Index>()), 1..40).prop_map(|parents| {
        parents
            .into_iter()
            .enumerate()
            .map(|(i, parent)| {
                let deps = match parent {
                    Some(idx) if i > 0 => vec![format!("impact-{}", idx.index(i))],
                    _ => Vec::new(),
                };
                item(i, deps)
            })
            .collect()
    })
}

/// Each impact depends on any subset of earlier impacts.
fn arb_dag_list() -> impl Strategy<Value = Vec<ImpactItem>> {
    prop::collection::vec(prop::collection::vec(any::<prop::sample::Index>(), 0..3), 1..25).prop_map(
        |parents| {
            parents
                .into_iter()
                .enumerate()
                .map(|(i, picks)| {
                    let mut deps: Vec<String> = if i == 0 {
                        Vec::new()
                    } else {
                        picks.iter().map(|p| format!("impact-{}", p.index(i))).collect()
                    };
                    deps.sort();
                    deps.dedup();
                    item(i, deps)
                })
                .collect()
        },
    )
}

fn walk<'a>(node: &'a ImpactChainNode, path: &mut Vec<&'a str>, visit: &mut dyn FnMut(&'a ImpactChainNode, &[&'a str])) {
    visit(node, path);
    path.push(node.impact.id.as_str());
    for child in &node.children {
        walk(child, path, visit);
    }
    path.pop();
}

// ---------------------------------------------------------------------------
// Property Tests
// ---------------------------------------------------------------------------

proptest! {
    /// With single-parent dependencies every impact appears exactly once,
    /// reached by exactly one root path.
    #[test]
    fn tree_nodes_have_one_root_path(impacts in arb_tree_list()) {
        let chain = build_chain(&impacts).unwrap();

        let mut seen: HashMap<String, usize> = HashMap::new();
        for root in &chain {
            prop_assert_eq!(root.depth, 0);
            for node in root.flatten() {
                *seen.entry(node.impact.id.clone()).or_default() += 1;
            }
        }
        prop_assert_eq!(seen.len(), impacts.len());
        prop_assert!(seen.values().all(|&count| count == 1));
    }

    /// With arbitrary acyclic dependencies no node is its own ancestor, and
    /// depth equals the length of the path from the root.
    #[test]
    fn dag_nodes_never_contain_themselves(impacts in arb_dag_list()) {
        let chain = build_chain(&impacts).unwrap();
        let mut reached = HashSet::new();
        let mut ok = true;

        for root in &chain {
            let mut path = Vec::new();
            walk(root, &mut path, &mut |node, ancestors| {
                reached.insert(node.impact.id.clone());
                if ancestors.contains(&node.impact.id.as_str()) || node.depth != ancestors.len() {
                    ok = false;
                }
            });
        }
        prop_assert!(ok);
        prop_assert_eq!(reached.len(), impacts.len());
    }

    /// Closing any dependency back onto a descendant is rejected.
    #[test]
    fn back_edges_are_rejected(impacts in arb_tree_list()) {
        let mut impacts = impacts;
        let last = impacts.len() - 1;
        if last == 0 {
            impacts[0].depends_on = vec![impacts[0].id.clone()];
        } else {
            let last_id = impacts[last].id.clone();
            impacts[last].depends_on = vec![impacts[0].id.clone()];
            impacts[0].depends_on = vec![last_id];
        }
        prop_assert!(matches!(build_chain(&impacts), Err(ImpactError::DependencyCycle(_))));
    }
}
