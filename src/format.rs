//! Text formatting for menu output.
//!
//! Pure functions over task values; nothing here touches storage or clocks.

use chrono::NaiveDate;

use crate::types::Task;

/// Heading for today's list: `Today (5 Jan):`.
pub fn today_heading(date: NaiveDate) -> String {
    format!("Today ({}):", short_date(date))
}

/// Heading for one day of the week view: `Monday 5 Jan:`.
pub fn day_heading(date: NaiveDate) -> String {
    format!("{}:", date.format("%A %-d %b"))
}

/// Numbered list with deadlines, one line per task:
/// `1. Pay rent (5 Jan)`. Falls back to `empty_message` for an empty list.
/// Every line ends with a newline.
pub fn dated_list(tasks: &[Task], empty_message: &str) -> String {
    if tasks.is_empty() {
        return format!("{}\n", empty_message);
    }
    let mut out = String::new();
    for (index, task) in tasks.iter().enumerate() {
        out.push_str(&format!(
            "{}. {} ({})\n",
            index + 1,
            task.description,
            short_date(task.deadline)
        ));
    }
    out
}

/// Numbered list without deadlines, for day views where the heading already
/// names the date: `1. Pay rent`.
pub fn plain_list(tasks: &[Task], empty_message: &str) -> String {
    if tasks.is_empty() {
        return format!("{}\n", empty_message);
    }
    let mut out = String::new();
    for (index, task) in tasks.iter().enumerate() {
        out.push_str(&format!("{}. {}\n", index + 1, task.description));
    }
    out
}

/// `5 Jan`, day of month without zero padding.
fn short_date(date: NaiveDate) -> String {
    date.format("%-d %b").to_string()
}
