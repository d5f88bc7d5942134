use crate::graph::DependencyGraph;
use std::collections::{HashMap, HashSet, VecDeque};

/// Backward relaxation: latest start/finish offsets that do not delay
/// overall completion. Mirror image of the forward pass, walking from
/// tasks with no successors toward their dependencies.
pub struct BackwardPass<'a> {
    graph: &'a DependencyGraph,
    early: &'a HashMap<i32, (f64, f64)>,
}

impl<'a> BackwardPass<'a> {
    pub fn new(graph: &'a DependencyGraph, early: &'a HashMap<i32, (f64, f64)>) -> Self {
        Self { graph, early }
    }

    /// Late (start, finish) offsets keyed by task id. Tasks with no
    /// successors anchor at their own early finish; everything else takes
    /// the minimum late start of its successors. Only tasks the forward
    /// pass scheduled participate, so cyclic subsets stay untouched here
    /// as well.
    pub fn execute(&self) -> HashMap<i32, (f64, f64)> {
        let mut results: HashMap<i32, (f64, f64)> = HashMap::new();
        let mut processed: HashSet<i32> = HashSet::new();
        let mut queue: VecDeque<i32> = VecDeque::new();

        for task_id in self.graph.task_ids() {
            if self.graph.successors(task_id).is_empty() && self.early.contains_key(&task_id) {
                queue.push_back(task_id);
            }
        }

        while let Some(task_id) = queue.pop_front() {
            if processed.contains(&task_id) {
                continue;
            }

            let successors = self.graph.successors(task_id);
            let late_finish = if successors.is_empty() {
                self.early
                    .get(&task_id)
                    .map(|&(_, finish)| finish)
                    .unwrap_or(0.0)
            } else {
                successors
                    .iter()
                    .filter_map(|succ| results.get(succ).map(|&(start, _)| start))
                    .fold(f64::INFINITY, f64::min)
            };
            let late_start = late_finish - self.graph.duration_of(task_id) as f64;

            results.insert(task_id, (late_start, late_finish));
            processed.insert(task_id);

            for pred in self.graph.predecessors(task_id) {
                if processed.contains(&pred) || !self.early.contains_key(&pred) {
                    continue;
                }
                let ready = self
                    .graph
                    .successors(pred)
                    .iter()
                    .all(|succ| processed.contains(succ));
                if ready {
                    queue.push_back(pred);
                }
            }
        }

        results
    }
}
