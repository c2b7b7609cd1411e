//! Interactive seven-choice menu loop.
//!
//! Generic over its input and output streams so tests can script whole
//! sessions through [`std::io::Cursor`]. Recoverable repository errors are
//! printed and the loop continues; stream and storage failures propagate.

use std::io::{BufRead, Write};

use crate::error::Result;
use crate::format;
use crate::repo::TaskRepository;

const MENU: &str = "\n1) Today's tasks\n2) Week's tasks\n3) All tasks\n4) Missed tasks\n5) Add task\n6) Delete task\n0) Exit";

/// Run the menu until the user exits or input ends.
pub fn run<R: BufRead, W: Write>(
    repo: &TaskRepository,
    mut input: R,
    mut output: W,
) -> Result<()> {
    loop {
        writeln!(output, "{}", MENU)?;
        let Some(choice) = prompt(&mut input, &mut output, "> ")? else {
            break;
        };
        match choice.as_str() {
            "1" => show_today(repo, &mut output)?,
            "2" => show_week(repo, &mut output)?,
            "3" => show_all(repo, &mut output)?,
            "4" => show_missed(repo, &mut output)?,
            "5" => add_task(repo, &mut input, &mut output)?,
            "6" => delete_task(repo, &mut input, &mut output)?,
            "0" => {
                writeln!(output, "Bye!")?;
                break;
            }
            // Anything else re-displays the menu.
            _ => {}
        }
    }
    Ok(())
}

/// Write `text`, flush, read one line. None at end of input.
fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, text: &str) -> Result<Option<String>> {
    write!(output, "{}", text)?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn show_today<W: Write>(repo: &TaskRepository, output: &mut W) -> Result<()> {
    let day = repo.view_today()?;
    writeln!(output, "\n{}", format::today_heading(day.date))?;
    write!(output, "{}", format::plain_list(&day.tasks, "Nothing to do!"))?;
    Ok(())
}

fn show_week<W: Write>(repo: &TaskRepository, output: &mut W) -> Result<()> {
    for day in repo.view_week()? {
        writeln!(output, "\n{}", format::day_heading(day.date))?;
        write!(output, "{}", format::plain_list(&day.tasks, "Nothing to do!"))?;
    }
    Ok(())
}

fn show_all<W: Write>(repo: &TaskRepository, output: &mut W) -> Result<()> {
    let tasks = repo.view_all()?;
    writeln!(output, "\nAll tasks:")?;
    write!(output, "{}", format::dated_list(&tasks, "Nothing to do!"))?;
    Ok(())
}

fn show_missed<W: Write>(repo: &TaskRepository, output: &mut W) -> Result<()> {
    let tasks = repo.view_missed()?;
    writeln!(output, "\nMissed tasks:")?;
    write!(output, "{}", format::dated_list(&tasks, "Nothing is missed!"))?;
    Ok(())
}

fn add_task<R: BufRead, W: Write>(
    repo: &TaskRepository,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    let Some(description) = prompt(input, output, "\nEnter task:\n> ")? else {
        return Ok(());
    };
    let Some(deadline) = prompt(input, output, "Enter deadline (YYYY-MM-DD):\n> ")? else {
        return Ok(());
    };
    match repo.add(&description, &deadline) {
        Ok(_) => writeln!(output, "The task has been added!")?,
        Err(err) if err.is_recoverable() => writeln!(output, "{}", err)?,
        Err(err) => return Err(err),
    }
    Ok(())
}

fn delete_task<R: BufRead, W: Write>(
    repo: &TaskRepository,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    let tasks = repo.view_all()?;
    if tasks.is_empty() {
        writeln!(output, "\nNothing to delete!")?;
        return Ok(());
    }
    writeln!(output, "\nChoose the number of the task you want to delete:")?;
    write!(output, "{}", format::dated_list(&tasks, "Nothing to do!"))?;
    let Some(reply) = prompt(input, output, "> ")? else {
        return Ok(());
    };
    let Ok(position) = reply.parse::<usize>() else {
        writeln!(output, "invalid position {:?}, expected a number", reply)?;
        return Ok(());
    };
    match repo.delete_at(position) {
        Ok(_) => writeln!(output, "The task has been deleted!")?,
        Err(err) if err.is_recoverable() => writeln!(output, "{}", err)?,
        Err(err) => return Err(err),
    }
    Ok(())
}
