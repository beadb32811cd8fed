//! `studymate todo` commands.

use crate::board::{Priority, Task, TaskBoard};
use crate::cli::TodoCommand;
use crate::context::ServiceContext;

/// Execute a `todo` subcommand against the saved board.
///
/// # Errors
///
/// Returns an error string if an id does not resolve to one task or the
/// change could not be saved.
pub fn run(ctx: &ServiceContext, action: &TodoCommand) -> Result<(), String> {
    let mut board = TaskBoard::load(ctx.store.as_ref(), ctx.id_gen.as_ref());

    match action {
        TodoCommand::Add { text, priority } => add(&mut board, &text.join(" "), *priority),
        TodoCommand::List => {
            list(&board);
            Ok(())
        }
        TodoCommand::Done { id } => {
            let id = board.resolve_id(id).map_err(|e| e.to_string())?;
            let done = board.toggle_done(&id).map_err(|e| e.to_string())?;
            match done {
                Some(true) => println!("Marked {id} done"),
                Some(false) => println!("Marked {id} not done"),
                None => {}
            }
            Ok(())
        }
        TodoCommand::Delete { id } => {
            let id = board.resolve_id(id).map_err(|e| e.to_string())?;
            board.delete_task(&id).map_err(|e| e.to_string())?;
            println!("Deleted {id}");
            Ok(())
        }
        TodoCommand::Edit { id, text, priority } => {
            let text = text.as_deref();
            edit(&mut board, id, text, *priority)
        }
        TodoCommand::Filter { filter } => {
            board.set_filter(*filter).map_err(|e| e.to_string())?;
            println!("Showing {filter} tasks");
            Ok(())
        }
        TodoCommand::Sort { sort } => {
            board.set_sort(*sort).map_err(|e| e.to_string())?;
            println!("Sorting by {sort}");
            Ok(())
        }
        TodoCommand::Name { name } => {
            let name = name.join(" ");
            board
                .set_greeting_name(name.trim())
                .map_err(|e| e.to_string())?;
            println!("{}", board.greeting());
            Ok(())
        }
    }
}

fn add(board: &mut TaskBoard<'_>, text: &str, priority: Priority) -> Result<(), String> {
    match board.add_task(text, priority).map_err(|e| e.to_string())? {
        Some(id) => println!("Added {id}"),
        None => println!("Nothing added: task text is empty."),
    }
    Ok(())
}

fn edit(
    board: &mut TaskBoard<'_>,
    id: &str,
    text: Option<&str>,
    priority: Option<Priority>,
) -> Result<(), String> {
    if text.is_none() && priority.is_none() {
        return Err("Nothing to change; pass --text and/or --priority.".to_string());
    }
    let id = board.resolve_id(id).map_err(|e| e.to_string())?;
    let Some(current) = board.task(&id) else {
        return Err(format!("No task with id {id:?}"));
    };
    let text = text.map_or_else(|| current.text.clone(), str::to_string);
    let priority = priority.unwrap_or(current.priority);

    board.begin_edit(&id);
    board
        .save_edit(&id, &text, priority)
        .map_err(|e| e.to_string())?;
    println!("Updated {id}");
    Ok(())
}

fn list(board: &TaskBoard<'_>) {
    println!("{}", board.greeting());
    let total = board.tasks().len();
    let done = board.tasks().iter().filter(|task| task.done).count();
    let percent = board.progress_percent();
    println!("Progress: {percent}% ({done} of {total} done)");
    let (filter, sort) = (board.filter(), board.sort_key());
    println!("Filter: {filter} | Sort: {sort}");

    let visible = board.visible_tasks();
    if visible.is_empty() {
        println!("No tasks to show.");
        return;
    }
    for task in visible {
        println!("{}", format_task(task));
    }
}

fn format_task(task: &Task) -> String {
    let mark = if task.done { 'x' } else { ' ' };
    let priority = task.priority.as_str();
    format!("[{mark}] {}  {priority:<6}  {}", task.id, task.text)
}
