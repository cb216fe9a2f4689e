//! `hammer time` - timestamp parsing and calendar math

use chrono::{NaiveDate, Utc};
use clap::Subcommand;

use forge_time::{calendar, parse};

use crate::error::Result;
use crate::output;
use crate::Context;

#[derive(Subcommand)]
pub enum TimeCommands {
    /// Show the current instant in every format
    Now,

    /// Parse a timestamp or datetime and show every format
    Parse {
        /// Unix seconds/milliseconds or a textual datetime
        #[arg(required = true, num_args = 1..)]
        input: Vec<String>,
    },

    /// Calendar position of a date: ISO week, day of year, week span
    Calendar {
        /// Date as YYYY-MM-DD (defaults to today)
        date: Option<String>,
    },
}

pub fn handle_command(command: TimeCommands, ctx: &Context) -> Result<()> {
    match command {
        TimeCommands::Now => show_table(Utc::now(), ctx),
        TimeCommands::Parse { input } => {
            let instant = parse::parse_instant(&input.join(" "))?;
            show_table(instant, ctx)
        }
        TimeCommands::Calendar { date } => {
            let date = match date {
                Some(text) => parse::parse_instant(&text)?.date_naive(),
                None => Utc::now().date_naive(),
            };
            show_calendar(date, ctx)
        }
    }
}

fn show_table(instant: chrono::DateTime<Utc>, ctx: &Context) -> Result<()> {
    let table = parse::format_table(instant, Utc::now());
    if ctx.json {
        return output::json(&table);
    }
    for entry in &table {
        output::kv(entry.label, &entry.value);
    }
    Ok(())
}

fn show_calendar(date: NaiveDate, ctx: &Context) -> Result<()> {
    let report = calendar::report(date)?;
    if ctx.json {
        return output::json(&report);
    }

    output::kv("Date", &report.date.to_string());
    output::kv("Year", &report.year.to_string());
    output::kv("ISO Week", &report.iso_week.to_string());
    output::kv(
        "Week Span",
        &format!("{} .. {}", report.week_start, report.week_end),
    );
    output::kv("Day of Year", &report.day_of_year.to_string());
    output::kv("Days in Year", &report.days_in_year.to_string());
    output::kv("Days Remaining", &report.days_remaining.to_string());
    output::kv("ISO Weeks in Year", &report.iso_weeks_in_year.to_string());

    output::heading("Week");
    for day in &report.week_dates {
        let marker = if *day == report.date { "*" } else { " " };
        println!("  {} {} {}", marker, day.format("%a"), day);
    }
    Ok(())
}
