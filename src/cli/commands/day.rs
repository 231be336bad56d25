use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::accountant::summarize_day;
use crate::errors::{AppError, AppResult};
use crate::models::day_status::DayStatus;
use crate::models::session::{Session, SessionClosure};
use crate::store::SwipeStore;
use crate::utils::colors::{color_for_status, colorize};
use crate::utils::date::parse_date;
use crate::utils::formatting::{clock2readable, date2readable, delta2readable};
use crate::utils::path::expand_tilde;

/// Handle the `day` command: per-session detail for one date.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Day { date } = cmd {
        let d = parse_date(date).ok_or_else(|| AppError::InvalidDate(date.to_string()))?;

        let store = SwipeStore::new(expand_tilde(&cfg.store));
        let swipes = store.load();
        let now = chrono::Local::now().naive_local();

        let summary = summarize_day(&swipes, d, cfg.goal(), now);

        for session in &summary.sessions {
            println!("{}", describe_session(session, cfg));
        }
        if !summary.sessions.is_empty() {
            println!();
        }

        let status = summary.status();
        println!(
            "Details for {} | Total: {} | {}",
            date2readable(d),
            delta2readable(summary.total, false),
            colorize(
                &format!("{}{}", status_icon(status), status.label()),
                color_for_status(status)
            ),
        );

        if summary.invalid_pairs > 0 {
            crate::ui::messages::warning(format!(
                "{} swipe pair(s) ignored: clock-out earlier than clock-in",
                summary.invalid_pairs
            ));
        }
    }

    Ok(())
}

fn describe_session(session: &Session, cfg: &Config) -> String {
    let in_str = clock2readable(session.clock_in, cfg.clock_24h);

    match session.closure {
        SessionClosure::Complete => {
            let out = session.clock_out.unwrap_or(session.clock_in);
            format!(
                "IN: {}   OUT: {}   Duration: {}",
                in_str,
                clock2readable(out, cfg.clock_24h),
                delta2readable(session.duration, false),
            )
        }
        SessionClosure::CappedAtMidnight => format!(
            "IN: {}   OUT: -- (forgot)   Capped at midnight: {}",
            in_str,
            delta2readable(session.duration, false),
        ),
        SessionClosure::Active => format!(
            "IN: {}   OUT: --   Currently inside: {}",
            in_str,
            delta2readable(session.duration, false),
        ),
        SessionClosure::Invalid => {
            let out = session.clock_out.unwrap_or(session.clock_in);
            format!(
                "IN: {}   OUT: {}   ignored (clock-out earlier than clock-in)",
                in_str,
                clock2readable(out, cfg.clock_24h),
            )
        }
    }
}

fn status_icon(status: DayStatus) -> &'static str {
    match status {
        DayStatus::GoalMet => "✅ ",
        DayStatus::GoalNotMet => "❌ ",
        DayStatus::Incomplete => "❗ ",
        DayStatus::NoData => "",
    }
}
