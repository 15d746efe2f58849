//! Views partitioning the collection under mixed toggles.

use std::collections::HashSet;

use rstest::rstest;
use tasklist::task::domain::{Task, TaskId};

use super::helpers::{add_all, observed_store};

#[rstest]
#[case(&[])]
#[case(&[0])]
#[case(&[0, 2, 4])]
#[case(&[1, 1])]
#[case(&[0, 1, 2, 3, 4, 5])]
fn every_task_lands_in_exactly_one_view(#[case] toggles: &[usize]) -> Result<(), eyre::Report> {
    let (mut store, _log) = observed_store();
    let ids = add_all(&mut store, &["a", "b", "c", "d", "e", "f"])?;

    for index in toggles {
        let id = ids
            .get(*index)
            .ok_or_else(|| eyre::eyre!("toggle index {index} out of range"))?;
        store.toggle_task(*id);
    }

    let incomplete: Vec<TaskId> = store.incomplete_tasks().map(Task::id).collect();
    let completed: Vec<TaskId> = store.completed_tasks().map(Task::id).collect();
    let all: HashSet<TaskId> = ids.iter().copied().collect();
    let union: HashSet<TaskId> = incomplete.iter().chain(&completed).copied().collect();

    eyre::ensure!(
        incomplete.len() + completed.len() == store.len(),
        "views must not overlap"
    );
    eyre::ensure!(union == all, "views must cover every task");
    eyre::ensure!(
        store.len() == ids.len(),
        "toggling must never add or remove tasks"
    );
    Ok(())
}
