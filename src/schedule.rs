use crate::critical_path::{self, CriticalPathNode, DependencyEdge};
use crate::metadata::ProjectMetadata;
use crate::task::Task;
use crate::task_validation::{self, TaskValidationError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisSummary {
    pub task_count: usize,
    pub critical_count: usize,
    pub critical_path: Vec<i32>,
    pub project_length_days: f64,
}

impl AnalysisSummary {
    pub fn summary_line(&self) -> String {
        let mut parts = Vec::new();
        parts.push(format!("tasks={}", self.task_count));
        parts.push(format!("critical={}", self.critical_count));
        if self.project_length_days > 0.0 {
            parts.push(format!("length={}", self.project_length_days));
        }
        if !self.critical_path.is_empty() {
            let chain = self
                .critical_path
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("->");
            parts.push(format!("crit_path={}", chain));
        }
        parts.join(", ")
    }
}

#[derive(Debug, Clone)]
pub enum ScheduleError {
    Validation(TaskValidationError),
}

impl fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScheduleError::Validation(err) => write!(f, "invalid task: {err}"),
        }
    }
}

impl std::error::Error for ScheduleError {}

impl From<TaskValidationError> for ScheduleError {
    fn from(value: TaskValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Owning container for the task list. Edits are validated here so the
/// engine itself can stay tolerant of whatever it is handed; analysis is
/// recomputed from scratch on request, never cached.
#[derive(Debug, Clone)]
pub struct Schedule {
    tasks: Vec<Task>,
    metadata: ProjectMetadata,
}

impl Schedule {
    pub fn new() -> Self {
        Self::new_with_metadata(ProjectMetadata::default())
    }

    pub fn new_with_metadata(metadata: ProjectMetadata) -> Self {
        Self {
            tasks: Vec::new(),
            metadata,
        }
    }

    pub fn metadata(&self) -> &ProjectMetadata {
        &self.metadata
    }

    pub fn set_project_name(&mut self, name: impl Into<String>) {
        self.metadata.project_name = name.into();
    }

    pub fn set_project_description(&mut self, description: impl Into<String>) {
        self.metadata.project_description = description.into();
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn find_task(&self, task_id: i32) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == task_id)
    }

    /// Insert a task, or replace the existing task with the same id.
    pub fn upsert_task(&mut self, task: Task) -> Result<(), ScheduleError> {
        task_validation::validate_task(&task)?;
        match self.tasks.iter_mut().find(|existing| existing.id == task.id) {
            Some(existing) => *existing = task,
            None => self.tasks.push(task),
        }
        Ok(())
    }

    /// Remove a task and strip its id from every other task's dependency
    /// list. Returns false when the id was not present.
    pub fn delete_task(&mut self, task_id: i32) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != task_id);
        if self.tasks.len() == before {
            return false;
        }
        for task in &mut self.tasks {
            task.dependencies.retain(|&dep| dep != task_id);
        }
        true
    }

    pub fn analyze(&self) -> HashMap<i32, CriticalPathNode> {
        critical_path::compute_critical_path(&self.tasks)
    }

    pub fn dependency_edges(
        &self,
        nodes: &HashMap<i32, CriticalPathNode>,
    ) -> Vec<DependencyEdge> {
        critical_path::critical_dependency_edges(&self.tasks, nodes)
    }

    pub fn summarize(&self, nodes: &HashMap<i32, CriticalPathNode>) -> AnalysisSummary {
        let mut critical: Vec<(f64, i32)> = Vec::new();
        let mut project_length_days = 0.0_f64;

        for task in &self.tasks {
            let Some(node) = nodes.get(&task.id) else {
                continue;
            };
            project_length_days = project_length_days.max(node.early_finish);
            if node.is_critical {
                critical.push((node.early_start, task.id));
            }
        }

        critical.sort_by(|a, b| a.0.total_cmp(&b.0).then_with(|| a.1.cmp(&b.1)));
        let critical_count = critical.len();
        let critical_path = critical.into_iter().map(|(_, id)| id).collect();

        AnalysisSummary {
            task_count: self.tasks.len(),
            critical_count,
            critical_path,
            project_length_days,
        }
    }
}
