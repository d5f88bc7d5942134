pub mod calculations;
pub mod critical_path;
pub mod dates;
pub mod graph;
pub mod metadata;
pub mod schedule;
pub mod task;
pub mod task_validation;

pub use critical_path::{
    CRITICAL_SLACK_EPSILON, CriticalPathNode, DependencyEdge, compute_critical_path,
    critical_dependency_edges,
};
pub use dates::{InvalidDateError, format_date, parse_date};
pub use graph::DependencyGraph;
pub use metadata::ProjectMetadata;
pub use schedule::{AnalysisSummary, Schedule, ScheduleError};
pub use task::Task;
pub use task_validation::{TaskValidationError, validate_task, validate_task_collection};
