use crate::task::Task;
use petgraph::Direction;
use petgraph::algo::tarjan_scc;
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::HashMap;

/// Precedence graph over a task set. Edges run dependency -> dependent;
/// dependency ids that do not name a task in the set are dropped here, so
/// the passes never see a dangling reference.
pub struct DependencyGraph {
    pub graph: DiGraph<i32, ()>,
    pub id_to_index: HashMap<i32, NodeIndex>,
    pub durations: HashMap<i32, i64>,
}

impl DependencyGraph {
    pub fn build(tasks: &[Task]) -> Self {
        let mut graph: DiGraph<i32, ()> = DiGraph::new();
        let mut id_to_index: HashMap<i32, NodeIndex> = HashMap::new();
        let mut durations: HashMap<i32, i64> = HashMap::new();

        // Add nodes first
        for task in tasks {
            let node_ix = graph.add_node(task.id);
            id_to_index.insert(task.id, node_ix);
            durations.insert(task.id, task.duration_days());
        }

        // Add edges: dependency -> task, skipping references to missing ids.
        // update_edge keeps a repeated dependency entry from producing a
        // parallel edge, which would break the ready-count bookkeeping.
        for task in tasks {
            for dep_id in &task.dependencies {
                if let (Some(&u), Some(&v)) = (id_to_index.get(dep_id), id_to_index.get(&task.id))
                {
                    graph.update_edge(u, v, ());
                }
            }
        }

        Self {
            graph,
            id_to_index,
            durations,
        }
    }

    pub fn task_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn task_ids(&self) -> impl Iterator<Item = i32> + '_ {
        self.graph.node_weights().copied()
    }

    pub fn duration_of(&self, task_id: i32) -> i64 {
        self.durations.get(&task_id).copied().unwrap_or(0)
    }

    pub fn predecessors(&self, task_id: i32) -> Vec<i32> {
        self.neighbors(task_id, Direction::Incoming)
    }

    pub fn successors(&self, task_id: i32) -> Vec<i32> {
        self.neighbors(task_id, Direction::Outgoing)
    }

    fn neighbors(&self, task_id: i32, direction: Direction) -> Vec<i32> {
        match self.id_to_index.get(&task_id) {
            Some(&ix) => self
                .graph
                .neighbors_directed(ix, direction)
                .map(|n| self.graph[n])
                .collect(),
            None => Vec::new(),
        }
    }

    /// Ids of every task caught in a dependency cycle, sorted. Strongly
    /// connected components of more than one node are cycles, as is a
    /// task depending on itself.
    pub fn cyclic_task_ids(&self) -> Vec<i32> {
        let mut ids = Vec::new();
        for scc in tarjan_scc(&self.graph) {
            let is_cycle =
                scc.len() > 1 || (scc.len() == 1 && self.graph.contains_edge(scc[0], scc[0]));
            if is_cycle {
                ids.extend(scc.iter().map(|&ix| self.graph[ix]));
            }
        }
        ids.sort_unstable();
        ids
    }
}
