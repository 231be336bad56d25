use std::thread;
use std::time::Duration;

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::accountant::classify_today;
use crate::errors::AppResult;
use crate::models::session::SessionClosure;
use crate::models::today_status::TodayStatus;
use crate::store::SwipeStore;
use crate::ui::messages::{header, warning};
use crate::utils::colors::{GREEN, RED, colorize};
use crate::utils::formatting::{clock2readable, date2readable, delta2readable, progress_bar};
use crate::utils::path::expand_tilde;
use crate::utils::table::{Column, Table};

const BAR_WIDTH: usize = 24;

/// Handle the `status` command: today's progress toward the goal.
///
/// With `--watch`, the screen is redrawn every second for as long as today
/// ends on an open session. Each tick re-reads the store and recomputes from
/// scratch; the accounting is idempotent, so repeating it never drifts.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Status { watch } = cmd {
        let store = SwipeStore::new(expand_tilde(&cfg.store));
        let mut first_frame = true;

        loop {
            let now = chrono::Local::now().naive_local();
            let swipes = store.load();
            let today = classify_today(&swipes, cfg.goal(), now);

            if *watch && !first_frame {
                print!("\x1b[2J\x1b[H");
            }
            render(&today, cfg, now);
            first_frame = false;

            if !*watch || !today.has_active_session() {
                break;
            }
            thread::sleep(Duration::from_secs(1));
        }
    }

    Ok(())
}

fn render(today: &TodayStatus, cfg: &Config, now: chrono::NaiveDateTime) {
    header(format!("Today: {}", date2readable(now.date())));

    if today.is_inside {
        println!("🟢 {}", colorize("Currently IN", GREEN));
    } else {
        println!("🔴 {}", colorize("Currently OUT", RED));
    }

    let goal = cfg.goal();
    let total = today.summary.total;
    let fraction = if goal.num_milliseconds() > 0 {
        total.num_milliseconds() as f64 / goal.num_milliseconds() as f64
    } else {
        1.0
    };

    println!(
        "{}  {} / {}",
        progress_bar(fraction, BAR_WIDTH),
        delta2readable(total, false),
        delta2readable(goal, false),
    );

    if !today.is_inside {
        println!("Ready for your next session!");
    } else if total >= goal {
        println!("{}", colorize("Target met!", GREEN));
    } else {
        println!("Time left: {}", delta2readable(goal - total, false));
    }

    if let Some(last) = today.last_swipe {
        let kind = if today.is_inside { "IN" } else { "OUT" };
        println!(
            "Last action: Swipe {} at {} on {}",
            kind,
            clock2readable(last, cfg.clock_24h),
            date2readable(last.date()),
        );
    }

    if !today.summary.sessions.is_empty() {
        println!("\nToday's sessions:");
        print!("{}", sessions_table(today, cfg).render());
    }

    if today.summary.invalid_pairs > 0 {
        warning(format!(
            "{} swipe pair(s) ignored: clock-out earlier than clock-in",
            today.summary.invalid_pairs
        ));
    }
}

fn sessions_table(today: &TodayStatus, cfg: &Config) -> Table {
    let mut table = Table::new(vec![
        Column::left("IN", 9),
        Column::left("OUT", 9),
        Column::right("DURATION", 9),
    ]);

    for s in &today.summary.sessions {
        let out_cell = match s.clock_out {
            Some(out) => clock2readable(out, cfg.clock_24h),
            None => "--".to_string(),
        };
        let duration_cell = match s.closure {
            SessionClosure::Active => format!("{} (active)", delta2readable(s.duration, false)),
            SessionClosure::Invalid => "ignored".to_string(),
            _ => delta2readable(s.duration, false),
        };

        table.add_row(vec![
            clock2readable(s.clock_in, cfg.clock_24h),
            out_cell,
            duration_cell,
        ]);
    }

    table
}
