//! When steps for todo list BDD scenarios.

use super::world::TaskListWorld;
use rstest_bdd_macros::when;

#[when(r#"the user submits the padded draft "{text}""#)]
fn submit_padded_draft(world: &mut TaskListWorld, text: String) {
    world.submit(&format!("  {text} \t"));
}

#[when("the user submits a blank draft")]
fn submit_blank_draft(world: &mut TaskListWorld) {
    world.submit(" \t  ");
}

#[when(r#"the task "{text}" is toggled"#)]
fn toggle_task(world: &mut TaskListWorld, text: String) -> Result<(), eyre::Report> {
    let id = world.task_id(&text)?;
    world
        .store
        .toggle_task(id)
        .ok_or_else(|| eyre::eyre!("toggle of {text:?} should find the task"))?;
    Ok(())
}
