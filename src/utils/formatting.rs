//! Formatting utilities for CLI output.

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};

/// Render a duration as "08h 05m", or "08:05" in short form. Negative inputs
/// render as zero; day totals are never negative.
pub fn delta2readable(d: TimeDelta, short: bool) -> String {
    let m = d.num_minutes().max(0);

    if short {
        format!("{:02}:{:02}", m / 60, m % 60)
    } else {
        format!("{:02}h {:02}m", m / 60, m % 60)
    }
}

/// Clock rendering follows the 12-hour AM/PM style unless configured for 24h.
pub fn clock2readable(t: NaiveDateTime, clock_24h: bool) -> String {
    if clock_24h {
        t.format("%H:%M").to_string()
    } else {
        t.format("%I:%M %p").to_string()
    }
}

pub fn date2readable(d: NaiveDate) -> String {
    d.format("%d %b %Y").to_string()
}

/// Linear progress bar toward the goal, the CLI stand-in for the app's
/// circular widget. The fraction is clamped to [0, 1] before drawing.
pub fn progress_bar(fraction: f64, width: usize) -> String {
    let clamped = fraction.clamp(0.0, 1.0);
    let filled = (clamped * width as f64).round() as usize;

    let mut bar = String::with_capacity(width + 2);
    bar.push('[');
    for i in 0..width {
        bar.push(if i < filled { '█' } else { '░' });
    }
    bar.push(']');

    format!("{} {:>3}%", bar, (clamped * 100.0).round() as u32)
}
