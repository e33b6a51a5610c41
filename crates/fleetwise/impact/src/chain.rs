//! Dependency tree over a flat impact list.
//!
//! Roots are impacts with no dependencies. Each node's children are the
//! impacts whose `depends_on` names it, in input order, so an impact with
//! two causes appears under both. References are validated up front:
//! duplicate ids, dangling ids and cycles are errors rather than silently
//! dropped branches.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{ImpactError, ImpactResult};
use crate::impact::ImpactItem;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactChainNode {
    pub impact: ImpactItem,
    pub children: Vec<ImpactChainNode>,
    /// Zero for roots.
    pub depth: usize,
}

impl ImpactChainNode {
    /// Number of nodes below this one.
    pub fn descendant_count(&self) -> usize {
        self.children
            .iter()
            .map(|c| 1 + c.descendant_count())
            .sum()
    }

    /// Pre-order walk of this subtree.
    pub fn flatten(&self) -> Vec<&ImpactChainNode> {
        let mut out = vec![self];
        for child in &self.children {
            out.extend(child.flatten());
        }
        out
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    InProgress,
    Done,
}

/// Build the dependency forest for `impacts`.
pub fn build_chain(impacts: &[ImpactItem]) -> ImpactResult<Vec<ImpactChainNode>> {
    let mut index: HashMap<&str, usize> = HashMap::with_capacity(impacts.len());
    for (i, impact) in impacts.iter().enumerate() {
        if index.insert(impact.id.as_str(), i).is_some() {
            return Err(ImpactError::DuplicateImpactId(impact.id.clone()));
        }
    }

    // children[i] lists the impacts that depend on impacts[i].
    let mut children: Vec<Vec<usize>> = vec![Vec::new(); impacts.len()];
    for (i, impact) in impacts.iter().enumerate() {
        for dep in &impact.depends_on {
            let Some(&parent) = index.get(dep.as_str()) else {
                return Err(ImpactError::DanglingDependency {
                    impact_id: impact.id.clone(),
                    missing: dep.clone(),
                });
            };
            if !children[parent].contains(&i) {
                children[parent].push(i);
            }
        }
    }

    let mut marks = vec![Mark::Unvisited; impacts.len()];
    for start in 0..impacts.len() {
        check_acyclic(start, impacts, &children, &mut marks)?;
    }

    Ok(impacts
        .iter()
        .enumerate()
        .filter(|(_, impact)| impact.is_root())
        .map(|(i, _)| attach(i, 0, impacts, &children))
        .collect())
}

fn check_acyclic(
    node: usize,
    impacts: &[ImpactItem],
    children: &[Vec<usize>],
    marks: &mut [Mark],
) -> ImpactResult<()> {
    match marks[node] {
        Mark::Done => return Ok(()),
        Mark::InProgress => return Err(ImpactError::DependencyCycle(impacts[node].id.clone())),
        Mark::Unvisited => {}
    }
    marks[node] = Mark::InProgress;
    for &child in &children[node] {
        check_acyclic(child, impacts, children, marks)?;
    }
    marks[node] = Mark::Done;
    Ok(())
}

fn attach(node: usize, depth: usize, impacts: &[ImpactItem], children: &[Vec<usize>]) -> ImpactChainNode {
    ImpactChainNode {
        impact: impacts[node].clone(),
        children: children[node]
            .iter()
            .map(|&c| attach(c, depth + 1, impacts, children))
            .collect(),
        depth,
    }
}
