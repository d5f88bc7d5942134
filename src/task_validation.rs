use crate::task::Task;
use std::collections::HashSet;
use std::fmt;

#[derive(Debug, Clone)]
pub struct TaskValidationError {
    message: String,
}

impl TaskValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for TaskValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for TaskValidationError {}

pub fn validate_task(task: &Task) -> Result<(), TaskValidationError> {
    if task.end_date < task.start_date {
        return Err(TaskValidationError::new(format!(
            "task {} ends {} before it starts {}",
            task.id, task.end_date, task.start_date
        )));
    }

    if task.dependencies.contains(&task.id) {
        return Err(TaskValidationError::new(format!(
            "task {} depends on itself",
            task.id
        )));
    }

    let mut seen = HashSet::with_capacity(task.dependencies.len());
    for dep in &task.dependencies {
        if !seen.insert(*dep) {
            return Err(TaskValidationError::new(format!(
                "task {} lists dependency {} more than once",
                task.id, dep
            )));
        }
    }

    Ok(())
}

pub fn validate_task_collection(tasks: &[Task]) -> Result<(), TaskValidationError> {
    let mut seen_ids = HashSet::with_capacity(tasks.len());
    for task in tasks {
        if !seen_ids.insert(task.id) {
            return Err(TaskValidationError::new(format!(
                "duplicate task id {}",
                task.id
            )));
        }
        validate_task(task)?;
    }
    Ok(())
}
