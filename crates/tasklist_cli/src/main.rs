use clap::Parser;
use tasklist_cli::cli::{Cli, Command};
use tasklist_core::config::{self, ConfigOverrides};
use tasklist_core::{AppError, Identifier, Summary, Task, TaskDraft, TaskStore};
use tracing_subscriber::EnvFilter;

fn completed_mark(task: &Task) -> &'static str {
    if task.completed { "[x]" } else { "[ ]" }
}

fn print_tasks_plain(tasks: &[Task]) {
    for task in tasks {
        println!(
            "{} {} | {} | {} | {} | due {} | {}",
            completed_mark(task),
            task.id,
            task.text,
            task.category,
            task.priority,
            task.due_date.as_deref().unwrap_or("-"),
            task.created_at
        );
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), AppError> {
    let rendered = serde_json::to_string(value)
        .map_err(|err| AppError::persistence(err.to_string()))?;
    println!("{rendered}");
    Ok(())
}

fn print_summary_plain(summary: &Summary) {
    println!(
        "{} total, {} completed, {} active",
        summary.total, summary.completed, summary.active
    );
}

fn normalize_parse_error(err: clap::Error) -> AppError {
    let rendered = err.to_string();
    let first_line = rendered.lines().next().unwrap_or("invalid command").trim();
    let message = first_line
        .strip_prefix("error: ")
        .unwrap_or(first_line)
        .to_string();
    AppError::validation(message)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn open_store(cli: &Cli) -> Result<TaskStore<tasklist_core::JsonFileBackend>, AppError> {
    let loaded = config::load_config_with_fallback();
    if let Some(err) = loaded.error.as_ref() {
        tracing::warn!(error = %err, "using default configuration");
    }
    let overrides = ConfigOverrides::from_args(&cli.config_override)?;
    let merged = config::merge_overrides(&loaded.config, &overrides);
    TaskStore::open(&merged)
}

fn run_command(cli: Cli) -> Result<(), AppError> {
    let store = open_store(&cli)?;

    match cli.command {
        Command::Add {
            text,
            category,
            priority,
            due_date,
        } => {
            let text = match text {
                Some(value) if !value.trim().is_empty() => value,
                _ => return Err(AppError::validation("text is required")),
            };
            let draft = TaskDraft {
                text,
                category,
                priority,
                due_date,
                completed: None,
            };

            let task = store.create(draft)?.value;
            if cli.json {
                print_json(&task)?;
            } else {
                println!("Added task: {} ({})", task.text, task.id);
            }
        }
        Command::List { filter } => {
            let tasks = store.list_filtered(filter)?;
            if cli.json {
                print_json(&tasks)?;
            } else {
                print_tasks_plain(&tasks);
            }
        }
        Command::Show { id } => {
            let task = store.get(id)?;
            if cli.json {
                print_json(&task)?;
            } else {
                print_tasks_plain(std::slice::from_ref(&task));
            }
        }
        Command::Edit {
            id,
            text,
            category,
            priority,
            due_date,
            completed,
        } => {
            let draft = TaskDraft {
                text,
                category,
                priority,
                due_date,
                completed: Some(completed),
            };

            let task = store.update(&Identifier::Id(id), draft)?.value;
            if cli.json {
                print_json(&task)?;
            } else {
                println!("Updated task: {} ({})", task.text, task.id);
            }
        }
        Command::Toggle { id } => {
            let change = store.toggle_completed(id)?;
            match (change.value, cli.json) {
                (Some(task), true) => print_json(&task)?,
                (Some(task), false) => {
                    let state = if task.completed { "completed" } else { "active" };
                    println!("Marked task {state}: {} ({})", task.text, task.id);
                }
                (None, true) => println!("null"),
                (None, false) => println!("No task with id {id}"),
            }
        }
        Command::Delete { id, text } => {
            let identifier = match (id, text) {
                (Some(id), _) => Identifier::Id(id),
                (None, Some(text)) => Identifier::Text(text),
                (None, None) => return Err(AppError::validation("id or --text is required")),
            };

            let removed = store.delete(&identifier)?.value;
            if cli.json {
                print_json(&removed)?;
            } else if removed.is_empty() {
                println!("No task matched {identifier}");
            } else {
                for task in &removed {
                    println!("Deleted task: {} ({})", task.text, task.id);
                }
            }
        }
        Command::Summary => {
            let summary = store.summary()?;
            if cli.json {
                print_json(&summary)?;
            } else {
                print_summary_plain(&summary);
            }
        }
    }

    Ok(())
}

fn main() {
    init_tracing();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if !err.use_stderr() => {
            // --help and --version
            let _ = err.print();
            return;
        }
        Err(err) => {
            eprintln!("ERROR: {}", normalize_parse_error(err));
            std::process::exit(1);
        }
    };

    if let Err(err) = run_command(cli) {
        eprintln!("ERROR: {}", err);
        std::process::exit(1);
    }
}
