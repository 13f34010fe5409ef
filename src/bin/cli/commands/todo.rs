use anyhow::{bail, Context, Result};
use chrono::Local;

use studyloom_lib::todo::{suggestion, Todo, TodoList};

use crate::app::{parse_date, resolve_id, App};
use crate::render::terminal::{checkbox, heading, paint, short_id, Color};
use crate::OutputFormat;

/// Which flag a toggle command flips
pub enum TodoFlag {
    Done,
    Important,
    Urgent,
}

pub fn run_list(app: &App, format: &OutputFormat, use_color: bool) -> Result<()> {
    let list = app.todos();
    let now = Local::now().naive_local();

    match format {
        OutputFormat::Json => {
            let quadrants: serde_json::Map<String, serde_json::Value> = list
                .quadrants()
                .iter()
                .map(|(quadrant, items)| {
                    let items: Vec<serde_json::Value> = items
                        .iter()
                        .map(|t| {
                            serde_json::json!({
                                "todo": t,
                                "hoursPerDay": suggestion(t, now),
                            })
                        })
                        .collect();
                    (quadrant.as_str().to_string(), serde_json::Value::Array(items))
                })
                .collect();
            let output = serde_json::json!({
                "quadrants": quadrants,
                "tasksLeft": list.tasks_left(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            for (quadrant, items) in list.quadrants() {
                println!("{}", heading(quadrant.label(), use_color));
                if items.is_empty() {
                    println!("  {}", paint("No tasks", Color::DIM, use_color));
                }
                for todo in items {
                    print_todo(todo, now, use_color);
                }
                println!();
            }
            println!("{} tasks left", list.tasks_left());
        }
    }

    Ok(())
}

fn print_todo(todo: &Todo, now: chrono::NaiveDateTime, use_color: bool) {
    let title = if todo.done {
        paint(&todo.title, Color::STRIKETHROUGH, use_color)
    } else {
        todo.title.clone()
    };
    let mut line = format!(
        "  {} {}  {}",
        checkbox(todo.done),
        paint(short_id(&todo.id), Color::GRAY, use_color),
        title
    );
    if let Some(deadline) = todo.deadline {
        line.push_str(&format!("  due {}", deadline));
    }
    if let Some(hours) = todo.estimated_hours {
        line.push_str(&format!("  est {}h", hours));
    }
    if let Some(per_day) = suggestion(todo, now) {
        line.push_str(&paint(&format!("  ~{}h/day", per_day), Color::CYAN, use_color));
    }
    println!("{}", line);
}

pub fn run_add(
    app: &App,
    title: &str,
    deadline: Option<&str>,
    format: &OutputFormat,
) -> Result<()> {
    let deadline = deadline.map(parse_date).transpose()?;
    let mut list = app.todos();
    let Some(id) = list.add(title, deadline) else {
        bail!("Task title must not be empty");
    };
    print_updated(&list, &id, "Added", format)
}

pub fn run_toggle(app: &App, id: &str, flag: TodoFlag, format: &OutputFormat) -> Result<()> {
    let mut list = app.todos();
    let id = find(&list, id)?;
    match flag {
        TodoFlag::Done => list.toggle_done(&id),
        TodoFlag::Important => list.toggle_important(&id),
        TodoFlag::Urgent => list.toggle_urgent(&id),
    };
    print_updated(&list, &id, "Updated", format)
}

pub fn run_hours(app: &App, id: &str, hours: Option<f64>, format: &OutputFormat) -> Result<()> {
    if let Some(h) = hours {
        if !h.is_finite() || h < 0.0 {
            bail!("Estimated hours must be a non-negative number");
        }
    }
    let mut list = app.todos();
    let id = find(&list, id)?;
    list.set_estimated_hours(&id, hours);
    print_updated(&list, &id, "Updated", format)
}

pub fn run_deadline(app: &App, id: &str, date: Option<&str>, format: &OutputFormat) -> Result<()> {
    let deadline = date.map(parse_date).transpose()?;
    let mut list = app.todos();
    let id = find(&list, id)?;
    list.set_deadline(&id, deadline);
    print_updated(&list, &id, "Updated", format)
}

pub fn run_remove(app: &App, id: &str, format: &OutputFormat) -> Result<()> {
    let mut list = app.todos();
    let id = find(&list, id)?;
    list.remove(&id);

    match format {
        OutputFormat::Json => println!("{}", serde_json::json!({ "removed": id })),
        OutputFormat::Plain => println!("Removed task {}", id),
    }

    Ok(())
}

pub fn run_clear(app: &App, format: &OutputFormat) -> Result<()> {
    let mut list = app.todos();
    list.clear();

    match format {
        OutputFormat::Json => println!("{}", serde_json::json!({ "tasksLeft": 0 })),
        OutputFormat::Plain => println!("All tasks cleared."),
    }

    Ok(())
}

fn find(list: &TodoList, id: &str) -> Result<String> {
    resolve_id(list.items().iter().map(|t| t.id.as_str()), id, "task")
}

fn print_updated(list: &TodoList, id: &str, verb: &str, format: &OutputFormat) -> Result<()> {
    let todo = list.get(id).context("Task not found after update")?;
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(todo)?),
        OutputFormat::Plain => {
            println!("{} \"{}\" ({})", verb, todo.title, todo.quadrant().as_str());
            println!("  ID: {}", todo.id);
        }
    }
    Ok(())
}
