//! Terminal host for the task list.
//!
//! # Responsibility
//! - Wire the controller to SQLite storage, a text surface and stdin.
//! - Drive deferred deletes from the single input loop.

use log::{error, info, warn};
use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use std::time::Instant;
use tasklist_core::db::open_db;
use tasklist_core::input::HELP_TEXT;
use tasklist_core::{
    core_version, init_logging, parse_line, AppConfig, Command, Intent, MemorySurface,
    SqliteKvStore, SystemClock, TaskListController, TimerQueue,
};

type Controller<'conn> =
    TaskListController<SqliteKvStore<'conn>, MemorySurface, TimerQueue, SystemClock>;

fn main() -> ExitCode {
    let config = AppConfig::from_env();
    if let Err(err) = init_logging(&config.log_level, &config.log_dir) {
        eprintln!("tasklist: logging disabled: {err}");
    }
    info!(
        "event=cli_start module=cli status=ok version={}",
        core_version()
    );

    let conn = match open_db(&config.db_path) {
        Ok(conn) => conn,
        Err(err) => {
            eprintln!(
                "tasklist: cannot open `{}`: {err}",
                config.db_path.display()
            );
            return ExitCode::FAILURE;
        }
    };

    let mut controller = TaskListController::new(
        SqliteKvStore::new(&conn),
        MemorySurface::new(),
        TimerQueue::new(),
        SystemClock,
    );

    match run(&mut controller, io::stdin().lock(), io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("event=cli_loop module=cli status=error error={err}");
            eprintln!("tasklist: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(controller: &mut Controller<'_>, input: impl BufRead, mut out: impl Write) -> io::Result<()> {
    writeln!(out, "tasklist {} (type `help` for commands)", core_version())?;
    draw(controller, &mut out)?;

    for line in input.lines() {
        let line = match line {
            Ok(line) => line,
            Err(err) if err.kind() == io::ErrorKind::InvalidData => {
                warn!("event=cli_input module=cli status=skipped reason=invalid_utf8");
                continue;
            }
            Err(err) => return Err(err),
        };
        let surface = controller.surface();
        let command = parse_line(&line, &surface.row_ids(), surface.delete_all_visible());

        match command {
            None => continue,
            Some(Command::Quit) => break,
            Some(Command::Help) => writeln!(out, "{HELP_TEXT}")?,
            Some(Command::Show) => draw(controller, &mut out)?,
            Some(Command::Intent(intent)) => {
                if let Intent::Submit(text) = &intent {
                    controller.surface_mut().set_input(text.clone());
                }
                controller.handle(intent);
                draw(controller, &mut out)?;
                if controller.has_pending() {
                    settle(controller);
                    draw(controller, &mut out)?;
                }
            }
        }
    }

    settle(controller);
    Ok(())
}

/// Blocks until every deferred delete has been committed.
fn settle(controller: &mut Controller<'_>) {
    while let Some(due) = controller.next_due() {
        let now = Instant::now();
        if due > now {
            std::thread::sleep(due - now);
        }
        controller.run_due(Instant::now());
    }
}

fn draw(controller: &Controller<'_>, out: &mut impl Write) -> io::Result<()> {
    writeln!(out)?;
    write!(out, "{}", controller.surface().render_text())?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::run;
    use std::io::Cursor;
    use tasklist_core::db::open_db_in_memory;
    use tasklist_core::{MemorySurface, SqliteKvStore, SystemClock, TaskListController, TimerQueue};

    #[test]
    fn scripted_session_applies_intents_in_order() {
        let conn = open_db_in_memory().unwrap();
        let mut controller = TaskListController::new(
            SqliteKvStore::new(&conn),
            MemorySurface::new(),
            TimerQueue::new(),
            SystemClock,
        );
        let script = "Buy milk\nadd Walk dog\ndone 1\ndelete 2\nclear\nquit\nnever read\n";
        let mut out = Vec::new();

        run(&mut controller, Cursor::new(script), &mut out).unwrap();

        let tasks = controller.list().tasks();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].title, "Buy milk");
        assert!(tasks[0].completed);

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Total: 1 | Completed: 1 | Pending: 0"));
        assert!(!text.contains("never read"));
    }

    #[test]
    fn invalid_utf8_line_is_skipped() {
        let conn = open_db_in_memory().unwrap();
        let mut controller = TaskListController::new(
            SqliteKvStore::new(&conn),
            MemorySurface::new(),
            TimerQueue::new(),
            SystemClock,
        );
        let script: &[u8] = b"A\n\xff\xfe\nB\nquit\n";

        run(&mut controller, Cursor::new(script), Vec::new()).unwrap();

        let titles: Vec<_> = controller
            .list()
            .tasks()
            .iter()
            .map(|task| task.title.as_str())
            .collect();
        assert_eq!(titles, vec!["A", "B"]);
    }

    #[test]
    fn empty_store_shows_placeholder() {
        let conn = open_db_in_memory().unwrap();
        let mut controller = TaskListController::new(
            SqliteKvStore::new(&conn),
            MemorySurface::new(),
            TimerQueue::new(),
            SystemClock,
        );
        let mut out = Vec::new();

        run(&mut controller, Cursor::new(""), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("No Tasks Added Yet"));
    }
}
