use chrono::Datelike;

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::accountant::summarize_range;
use crate::errors::{AppError, AppResult};
use crate::models::day_status::DayStatus;
use crate::store::SwipeStore;
use crate::ui::messages::header;
use crate::utils::colors::{BOLD, RESET, color_for_status, colorize};
use crate::utils::date::{all_days_of_month, month_label, parse_month, today};
use crate::utils::path::expand_tilde;

/// Handle the `month` command: a calendar grid with one colored cell per day.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Month { month } = cmd {
        let (year, month_no) = match month {
            Some(m) => parse_month(m).ok_or_else(|| AppError::InvalidMonth(m.to_string()))?,
            None => {
                let t = today();
                (t.year(), t.month())
            }
        };

        let store = SwipeStore::new(expand_tilde(&cfg.store));
        let swipes = store.load();
        let now = chrono::Local::now().naive_local();
        let summaries = summarize_range(&swipes, cfg.goal(), now);

        header(month_label(year, month_no));
        println!("{BOLD} Su  Mo  Tu  We  Th  Fr  Sa{RESET}");

        let days = all_days_of_month(year, month_no);

        // Leading blanks up to the first day's weekday (weeks start Sunday).
        let offset = days[0].weekday().num_days_from_sunday() as usize;
        let mut line = "    ".repeat(offset);
        let mut col = offset;

        for day in &days {
            let status = summaries
                .get(day)
                .map(|s| s.status())
                .unwrap_or(DayStatus::NoData);

            line.push_str(&colorize(
                &format!("{:>3}", day.day()),
                color_for_status(status),
            ));
            line.push(' ');

            col += 1;
            if col == 7 {
                println!("{}", line);
                line.clear();
                col = 0;
            }
        }
        if !line.is_empty() {
            println!("{}", line);
        }

        println!();
        print_legend();
    }

    Ok(())
}

fn print_legend() {
    let entries = [
        DayStatus::GoalMet,
        DayStatus::GoalNotMet,
        DayStatus::Incomplete,
        DayStatus::NoData,
    ];

    for status in entries {
        println!(
            "  {} {}",
            colorize("■", color_for_status(status)),
            status.label()
        );
    }
}
