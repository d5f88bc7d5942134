use crate::calculations::{BackwardPass, ForwardPass};
use crate::graph::DependencyGraph;
use crate::task::Task;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Slack within this many day-units of zero counts as critical. Offsets
/// are f64, so an exact-zero comparison would be brittle.
pub const CRITICAL_SLACK_EPSILON: f64 = 0.5;

/// Per-task schedule analysis, all offsets in days from project epoch 0.
/// Tasks the passes never reach keep this zero-valued default and are
/// never critical.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CriticalPathNode {
    pub early_start: f64,
    pub early_finish: f64,
    pub late_start: f64,
    pub late_finish: f64,
    pub slack: f64,
    pub is_critical: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyEdge {
    pub from_task_id: i32,
    pub to_task_id: i32,
    pub is_critical: bool,
}

/// Compute early/late offsets, slack, and criticality for every input
/// task. Pure and non-panicking: dangling dependency references are
/// ignored, and cyclic subsets terminate with zero-valued non-critical
/// nodes rather than an error.
pub fn compute_critical_path(tasks: &[Task]) -> HashMap<i32, CriticalPathNode> {
    let graph = DependencyGraph::build(tasks);
    let early = ForwardPass::new(&graph).execute();
    let late = BackwardPass::new(&graph, &early).execute();

    let mut nodes: HashMap<i32, CriticalPathNode> = HashMap::with_capacity(tasks.len());
    for task in tasks {
        let mut node = CriticalPathNode::default();
        if let Some(&(start, finish)) = early.get(&task.id) {
            node.early_start = start;
            node.early_finish = finish;
        }
        if let Some(&(start, finish)) = late.get(&task.id) {
            node.late_start = start;
            node.late_finish = finish;
        }
        // Slack is only meaningful for tasks both passes scheduled.
        if early.contains_key(&task.id) && late.contains_key(&task.id) {
            node.slack = node.late_start - node.early_start;
            node.is_critical = node.slack.abs() < CRITICAL_SLACK_EPSILON;
        }
        nodes.insert(task.id, node);
    }

    if early.len() < graph.task_count() {
        let cyclic = graph.cyclic_task_ids();
        if !cyclic.is_empty() {
            log::warn!(
                "dependency cycle detected; tasks {:?} left unscheduled",
                cyclic
            );
        }
        log::debug!(
            "forward pass scheduled {} of {} tasks",
            early.len(),
            graph.task_count()
        );
    }

    nodes
}

/// Classify every dependency edge for rendering. An edge is critical iff
/// both endpoint tasks are critical; this matches what the planner draws
/// but is a heuristic and can over-mark edges when parallel critical
/// paths of equal length exist (a strict test would also require
/// `early_finish(from) == early_start(to)`).
pub fn critical_dependency_edges(
    tasks: &[Task],
    nodes: &HashMap<i32, CriticalPathNode>,
) -> Vec<DependencyEdge> {
    let known_ids: HashSet<i32> = tasks.iter().map(|task| task.id).collect();
    let is_critical = |id: i32| nodes.get(&id).is_some_and(|node| node.is_critical);

    let mut edges = Vec::new();
    for task in tasks {
        for &dep_id in &task.dependencies {
            if !known_ids.contains(&dep_id) {
                continue;
            }
            edges.push(DependencyEdge {
                from_task_id: dep_id,
                to_task_id: task.id,
                is_critical: is_critical(dep_id) && is_critical(task.id),
            });
        }
    }
    edges
}
