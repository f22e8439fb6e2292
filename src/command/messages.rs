//! Reply text shown to the user

use crate::task::{Task, TaskList};

pub const APP_NAME: &str = "Taskpal";

pub fn greeting(user_name: Option<&str>) -> String {
    let hello = match user_name {
        Some(name) if !name.trim().is_empty() => format!("Hello, {}!", name.trim()),
        _ => "Hello!".to_string(),
    };
    format!("{} I'm {}.\nWhat can I do for you?", hello, APP_NAME)
}

pub fn goodbye() -> String {
    "Bye. Hope to see you again soon!".to_string()
}

fn task_count(len: usize) -> String {
    match len {
        1 => "1 task".to_string(),
        n => format!("{} tasks", n),
    }
}

pub fn task_added(task: &Task, len: usize) -> String {
    format!(
        "Got it. I've added this task:\n  {}\nNow you have {} in the list.",
        task,
        task_count(len)
    )
}

pub fn task_deleted(task: &Task, len: usize) -> String {
    format!(
        "Noted. I've removed this task:\n  {}\nNow you have {} in the list.",
        task,
        task_count(len)
    )
}

pub fn task_marked(task: &Task) -> String {
    format!("Nice! I've marked this task as done:\n  {}", task)
}

pub fn task_unmarked(task: &Task) -> String {
    format!("OK, I've marked this task as not done yet:\n  {}", task)
}

fn numbered_line(index: usize, task: &Task) -> String {
    format!("{}.{}", index + 1, task)
}

/// Numbered listing of the whole list, 1-based
pub fn task_listing(tasks: &TaskList) -> String {
    if tasks.is_empty() {
        return "Your task list is empty.".to_string();
    }

    tasks
        .iter()
        .enumerate()
        .map(|(index, task)| numbered_line(index, task))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Matches numbered by their position in the full list
pub fn find_results(keyword: &str, matches: &[(usize, &Task)]) -> String {
    if matches.is_empty() {
        return format!("No matching tasks found for \"{}\".", keyword);
    }

    matches
        .iter()
        .map(|(index, task)| numbered_line(*index, task))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeting() {
        assert!(greeting(None).starts_with("Hello! I'm Taskpal."));
        assert!(greeting(Some("Sam")).starts_with("Hello, Sam!"));
        assert!(greeting(Some("  ")).starts_with("Hello!"));
    }

    #[test]
    fn test_task_count_pluralization() {
        let task = Task::todo("read book");
        assert!(task_added(&task, 1).ends_with("Now you have 1 task in the list."));
        assert!(task_added(&task, 2).ends_with("Now you have 2 tasks in the list."));
        assert!(task_deleted(&task, 0).ends_with("Now you have 0 tasks in the list."));
    }

    #[test]
    fn test_listing() {
        let list = TaskList::from(vec![Task::todo("a"), Task::todo("b")]);
        assert_eq!(task_listing(&list), "1.[T][ ] a\n2.[T][ ] b");
        assert_eq!(task_listing(&TaskList::new()), "Your task list is empty.");
    }

    #[test]
    fn test_find_results_keep_positions() {
        let list = TaskList::from(vec![Task::todo("a"), Task::todo("book")]);
        assert_eq!(find_results("book", &list.find("book")), "2.[T][ ] book");
        assert_eq!(
            find_results("xyz", &list.find("xyz")),
            "No matching tasks found for \"xyz\"."
        );
    }
}
