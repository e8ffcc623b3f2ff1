//! Line-oriented input surface.
//!
//! # Responsibility
//! - Turn one line of terminal input into a user intent or host command.
//! - Resolve 1-based row numbers against the rows currently displayed.
//!
//! # Invariants
//! - Row numbers that do not match a displayed row yield no intent.
//! - Delete-all is only produced while the delete-all control is shown.

use crate::model::task::TaskId;
use once_cell::sync::Lazy;
use regex::Regex;

static ADD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^add(?:\s+(.*))?$").expect("valid add regex"));
static TOGGLE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(?:toggle|done)\s+(\d+)$").expect("valid toggle regex"));
static DELETE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(?:delete|del)\s+(\d+)$").expect("valid delete regex"));
static DELETE_ALL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(?:clear|delete\s+all)$").expect("valid delete-all regex"));
static LIST_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(?:list|ls)$").expect("valid list regex"));
static QUIT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(?:quit|exit|q)$").expect("valid quit regex"));
static HELP_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(?:help|\?)$").expect("valid help regex"));

/// Discrete user intent delivered to the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Text submitted by button or Enter.
    Submit(String),
    /// Click on a row body.
    Toggle(TaskId),
    /// Click on a row's delete control.
    Delete(TaskId),
    /// Click on the delete-all control.
    DeleteAll,
}

/// Parsed terminal line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Intent(Intent),
    Show,
    Help,
    Quit,
}

/// Usage text printed by the terminal host.
pub const HELP_TEXT: &str = "\
commands:
  <text> | add <text>     add a task
  toggle <n> | done <n>   flip completion of row n
  delete <n> | del <n>    delete row n
  clear | delete all      delete every task (2+ tasks)
  list                    redraw the list
  quit                    leave";

/// Parses one input line.
///
/// `rows` are the displayed task ids in order; `delete_all_visible` mirrors
/// the delete-all control.
pub fn parse_line(line: &str, rows: &[TaskId], delete_all_visible: bool) -> Option<Command> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    if let Some(caps) = ADD_RE.captures(line) {
        let text = caps.get(1).map_or("", |m| m.as_str());
        return Some(Command::Intent(Intent::Submit(text.to_string())));
    }
    if let Some(caps) = TOGGLE_RE.captures(line) {
        return row_id(&caps[1], rows).map(|id| Command::Intent(Intent::Toggle(id)));
    }
    if DELETE_ALL_RE.is_match(line) {
        return delete_all_visible.then_some(Command::Intent(Intent::DeleteAll));
    }
    if let Some(caps) = DELETE_RE.captures(line) {
        return row_id(&caps[1], rows).map(|id| Command::Intent(Intent::Delete(id)));
    }
    if LIST_RE.is_match(line) {
        return Some(Command::Show);
    }
    if QUIT_RE.is_match(line) {
        return Some(Command::Quit);
    }
    if HELP_RE.is_match(line) {
        return Some(Command::Help);
    }

    Some(Command::Intent(Intent::Submit(line.to_string())))
}

fn row_id(number: &str, rows: &[TaskId]) -> Option<TaskId> {
    let index = number.parse::<usize>().ok()?.checked_sub(1)?;
    rows.get(index).copied()
}

#[cfg(test)]
mod tests {
    use super::{parse_line, Command, Intent};
    use crate::model::task::TaskId;

    fn rows() -> Vec<TaskId> {
        vec![TaskId::new(10), TaskId::new(20)]
    }

    #[test]
    fn bare_text_and_add_submit() {
        assert_eq!(
            parse_line("Buy milk", &rows(), false),
            Some(Command::Intent(Intent::Submit("Buy milk".to_string())))
        );
        assert_eq!(
            parse_line("add   walk dog", &rows(), false),
            Some(Command::Intent(Intent::Submit("walk dog".to_string())))
        );
        assert_eq!(
            parse_line("add", &rows(), false),
            Some(Command::Intent(Intent::Submit(String::new())))
        );
    }

    #[test]
    fn row_commands_resolve_ids() {
        assert_eq!(
            parse_line("done 2", &rows(), false),
            Some(Command::Intent(Intent::Toggle(TaskId::new(20))))
        );
        assert_eq!(
            parse_line("DEL 1", &rows(), false),
            Some(Command::Intent(Intent::Delete(TaskId::new(10))))
        );
    }

    #[test]
    fn out_of_range_rows_yield_nothing() {
        assert_eq!(parse_line("toggle 0", &rows(), false), None);
        assert_eq!(parse_line("delete 3", &rows(), false), None);
    }

    #[test]
    fn delete_all_requires_visible_control() {
        assert_eq!(parse_line("delete all", &rows(), false), None);
        assert_eq!(
            parse_line("clear", &rows(), true),
            Some(Command::Intent(Intent::DeleteAll))
        );
    }

    #[test]
    fn host_commands() {
        assert_eq!(parse_line("  ", &rows(), false), None);
        assert_eq!(parse_line("list", &rows(), false), Some(Command::Show));
        assert_eq!(parse_line("quit", &rows(), false), Some(Command::Quit));
        assert_eq!(parse_line("?", &rows(), false), Some(Command::Help));
    }
}
