//! Quick-add CLI entry point.
//!
//! # Responsibility
//! - Exercise the core end-to-end from a terminal: extract titles from a
//!   free-text utterance, apply store mutations, list the collection.
//! - Keep the store dependency explicit (constructed here, passed down),
//!   with no ambient globals.

use std::path::PathBuf;
use std::process::ExitCode;
use taskpad_core::{default_log_level, extract_tasks, init_logging, SqliteKvStore, TaskStore};

const DB_FILE_NAME: &str = "taskpad.sqlite3";
const LOG_DIR_NAME: &str = "taskpad-logs";

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();

    // Logging is best-effort; the CLI keeps working without it.
    if let Some(dir) = log_dir().to_str() {
        if let Err(err) = init_logging(default_log_level(), dir) {
            eprintln!("taskpad: logging disabled: {err}");
        }
    }

    let kv = match SqliteKvStore::open(db_path()) {
        Ok(kv) => kv,
        Err(err) => {
            eprintln!("taskpad: cannot open storage: {err}");
            return ExitCode::FAILURE;
        }
    };
    let mut store = TaskStore::new(kv);
    store.hydrate();

    match args.split_first() {
        Some((command, rest)) => run_command(&mut store, command, rest),
        None => {
            print_usage();
            ExitCode::FAILURE
        }
    }
}

fn run_command(
    store: &mut TaskStore<SqliteKvStore>,
    command: &str,
    rest: &[String],
) -> ExitCode {
    match command {
        "add" => {
            let utterance = rest.join(" ");
            let titles = extract_tasks(&utterance);
            if titles.is_empty() {
                eprintln!("taskpad: nothing to add");
                return ExitCode::FAILURE;
            }
            for title in titles {
                if let Some(task) = store.add(&title, None, None) {
                    println!("added {}  {}", task.id, task.title);
                }
            }
            ExitCode::SUCCESS
        }
        "list" => {
            for task in store.tasks() {
                let mark = if task.completed { "x" } else { " " };
                println!("[{mark}] {}  {}", task.id, task.title);
            }
            ExitCode::SUCCESS
        }
        "toggle" | "delete" => match rest.first() {
            Some(id) => {
                if command == "toggle" {
                    store.toggle(id);
                } else {
                    store.delete(id);
                }
                ExitCode::SUCCESS
            }
            None => {
                eprintln!("taskpad: {command} requires a task id");
                ExitCode::FAILURE
            }
        },
        "version" => {
            println!("taskpad_core version={}", taskpad_core::core_version());
            ExitCode::SUCCESS
        }
        other => {
            eprintln!("taskpad: unknown command `{other}`");
            print_usage();
            ExitCode::FAILURE
        }
    }
}

fn db_path() -> PathBuf {
    match std::env::var_os("TASKPAD_DB") {
        Some(path) => PathBuf::from(path),
        None => PathBuf::from(DB_FILE_NAME),
    }
}

fn log_dir() -> PathBuf {
    match std::env::var_os("TASKPAD_LOG_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => std::env::temp_dir().join(LOG_DIR_NAME),
    }
}

fn print_usage() {
    eprintln!("usage: taskpad <add TEXT... | list | toggle ID | delete ID | version>");
}
