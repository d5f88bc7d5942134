use chrono::NaiveDate;
use critpath_engine::{Task, compute_critical_path, critical_dependency_edges};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn task(id: i32, duration: i64, deps: &[i32]) -> Task {
    let start = d(2026, 1, 5);
    let end = start + chrono::Duration::days(duration - 1);
    Task::new(id, format!("T{id}"), start, end).with_dependencies(deps.to_vec())
}

#[test]
fn single_task_project_is_critical() {
    // Same-day task: duration floors at one day
    let tasks = vec![Task::new(1, "T1", d(2026, 1, 5), d(2026, 1, 5))];
    let nodes = compute_critical_path(&tasks);

    let node = nodes[&1];
    assert_eq!(node.early_start, 0.0);
    assert_eq!(node.early_finish, 1.0);
    assert_eq!(node.late_finish, node.early_finish);
    assert_eq!(node.slack, 0.0);
    assert!(node.is_critical);
}

#[test]
fn single_chain_is_fully_critical() {
    let tasks = vec![task(1, 3, &[]), task(2, 5, &[1]), task(3, 2, &[2])];
    let nodes = compute_critical_path(&tasks);

    assert_eq!(
        (nodes[&1].early_start, nodes[&1].early_finish),
        (0.0, 3.0)
    );
    assert_eq!(
        (nodes[&2].early_start, nodes[&2].early_finish),
        (3.0, 8.0)
    );
    assert_eq!(
        (nodes[&3].early_start, nodes[&3].early_finish),
        (8.0, 10.0)
    );
    for id in [1, 2, 3] {
        assert_eq!(nodes[&id].slack, 0.0, "task {id} should have no slack");
        assert!(nodes[&id].is_critical, "task {id} should be critical");
    }
}

#[test]
fn only_the_longer_of_two_parallel_paths_is_critical() {
    // A(5d) and B(10d) both feed C(1d)
    let tasks = vec![task(1, 5, &[]), task(2, 10, &[]), task(3, 1, &[1, 2])];
    let nodes = compute_critical_path(&tasks);

    assert_eq!(nodes[&3].early_start, 10.0);
    assert_eq!(nodes[&3].early_finish, 11.0);

    assert_eq!(nodes[&1].slack, 5.0);
    assert!(!nodes[&1].is_critical);
    assert!(nodes[&2].is_critical);
    assert!(nodes[&3].is_critical);
}

#[test]
fn slack_is_never_negative_on_acyclic_input() {
    let tasks = vec![
        task(1, 4, &[]),
        task(2, 2, &[1]),
        task(3, 7, &[1]),
        task(4, 1, &[2, 3]),
        task(5, 3, &[]),
    ];
    let nodes = compute_critical_path(&tasks);
    for (id, node) in &nodes {
        assert!(node.slack >= 0.0, "task {id} has negative slack");
    }
}

#[test]
fn recomputation_is_idempotent() {
    let tasks = vec![
        task(1, 5, &[]),
        task(2, 10, &[]),
        task(3, 1, &[1, 2]),
        task(4, 2, &[3, 99]),
    ];
    assert_eq!(compute_critical_path(&tasks), compute_critical_path(&tasks));
}

#[test]
fn dangling_dependency_references_are_ignored() {
    let tasks = vec![task(1, 3, &[99]), task(2, 2, &[1, 42])];
    let nodes = compute_critical_path(&tasks);

    // Missing id 99 contributes nothing to task 1's early start
    assert_eq!(nodes[&1].early_start, 0.0);
    assert_eq!(nodes[&2].early_start, 3.0);
    assert!(nodes[&1].is_critical);
    assert!(nodes[&2].is_critical);
}

#[test]
fn mutual_cycle_terminates_with_zero_valued_nodes() {
    let _ = env_logger::builder().is_test(true).try_init();
    let tasks = vec![task(1, 4, &[2]), task(2, 6, &[1]), task(3, 3, &[])];
    let nodes = compute_critical_path(&tasks);

    assert_eq!(nodes.len(), 3);
    for id in [1, 2] {
        let node = nodes[&id];
        assert_eq!(node.early_start, 0.0);
        assert_eq!(node.early_finish, 0.0);
        assert_eq!(node.late_start, 0.0);
        assert_eq!(node.late_finish, 0.0);
        assert!(!node.is_critical, "cyclic task {id} must not be critical");
    }

    // The healthy task in the same call is unaffected
    let node = nodes[&3];
    assert_eq!((node.early_start, node.early_finish), (0.0, 3.0));
    assert!(node.is_critical);
}

#[test]
fn tasks_downstream_of_a_cycle_stay_unscheduled() {
    let tasks = vec![task(1, 2, &[2]), task(2, 2, &[1]), task(3, 5, &[1])];
    let nodes = compute_critical_path(&tasks);

    let node = nodes[&3];
    assert_eq!(node.early_finish, 0.0);
    assert!(!node.is_critical);
}

#[test]
fn edges_are_critical_only_when_both_endpoints_are() {
    let tasks = vec![task(1, 5, &[]), task(2, 10, &[]), task(3, 1, &[1, 2])];
    let nodes = compute_critical_path(&tasks);
    let edges = critical_dependency_edges(&tasks, &nodes);

    assert_eq!(edges.len(), 2);
    let edge = |from: i32| {
        edges
            .iter()
            .find(|e| e.from_task_id == from && e.to_task_id == 3)
            .unwrap()
    };
    assert!(!edge(1).is_critical);
    assert!(edge(2).is_critical);
}

#[test]
fn edges_with_dangling_endpoints_are_skipped() {
    let tasks = vec![task(1, 2, &[]), task(2, 2, &[1, 77])];
    let nodes = compute_critical_path(&tasks);
    let edges = critical_dependency_edges(&tasks, &nodes);

    assert_eq!(edges.len(), 1);
    assert_eq!((edges[0].from_task_id, edges[0].to_task_id), (1, 2));
    assert!(edges[0].is_critical);
}

#[test]
fn every_input_task_appears_in_the_output_map() {
    let tasks = vec![
        task(1, 2, &[2]),
        task(2, 2, &[1]),
        task(3, 1, &[]),
        task(4, 1, &[3]),
        task(5, 1, &[999]),
    ];
    let nodes = compute_critical_path(&tasks);
    for id in [1, 2, 3, 4, 5] {
        assert!(nodes.contains_key(&id), "missing node for task {id}");
    }
}

#[test]
fn input_tasks_are_not_mutated() {
    let tasks = vec![task(1, 3, &[]), task(2, 2, &[1])];
    let snapshot = tasks.clone();
    let _ = compute_critical_path(&tasks);
    assert_eq!(tasks, snapshot);
}
