use crate::graph::DependencyGraph;
use std::collections::{HashMap, HashSet, VecDeque};

/// Forward relaxation over the precedence graph: earliest start/finish
/// offsets from project epoch 0.
pub struct ForwardPass<'a> {
    graph: &'a DependencyGraph,
}

impl<'a> ForwardPass<'a> {
    pub fn new(graph: &'a DependencyGraph) -> Self {
        Self { graph }
    }

    /// Early (start, finish) offsets keyed by task id. A task becomes
    /// ready once every one of its predecessors has been scheduled;
    /// tasks trapped in a cycle never become ready and are absent from
    /// the result, which is how cyclic input degrades instead of
    /// looping.
    pub fn execute(&self) -> HashMap<i32, (f64, f64)> {
        let mut results: HashMap<i32, (f64, f64)> = HashMap::new();
        let mut visited: HashSet<i32> = HashSet::new();
        let mut queue: VecDeque<i32> = VecDeque::new();

        for task_id in self.graph.task_ids() {
            if self.graph.predecessors(task_id).is_empty() {
                queue.push_back(task_id);
            }
        }

        while let Some(task_id) = queue.pop_front() {
            if visited.contains(&task_id) {
                continue;
            }

            let early_start = self
                .graph
                .predecessors(task_id)
                .iter()
                .filter_map(|pred| results.get(pred).map(|&(_, finish)| finish))
                .fold(0.0_f64, f64::max);
            let early_finish = early_start + self.graph.duration_of(task_id) as f64;

            results.insert(task_id, (early_start, early_finish));
            visited.insert(task_id);

            for succ in self.graph.successors(task_id) {
                if visited.contains(&succ) {
                    continue;
                }
                let ready = self
                    .graph
                    .predecessors(succ)
                    .iter()
                    .all(|pred| visited.contains(pred));
                if ready {
                    queue.push_back(succ);
                }
            }
        }

        results
    }
}
