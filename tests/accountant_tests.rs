use chrono::{NaiveDate, NaiveDateTime, TimeDelta};

use swipetrack::core::accountant::{build_sessions, classify_today, summarize_day, summarize_range};
use swipetrack::models::day_status::DayStatus;
use swipetrack::models::session::SessionClosure;
use swipetrack::utils::time::end_of_day;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    date(y, m, d).and_hms_opt(h, min, 0).expect("valid time")
}

fn hours(h: i64) -> TimeDelta {
    TimeDelta::hours(h)
}

#[test]
fn empty_day_has_zero_total_and_is_not_incomplete() {
    let summary = summarize_day(&[], date(2024, 1, 1), hours(5), at(2024, 1, 5, 12, 0));

    assert_eq!(summary.total, TimeDelta::zero());
    assert!(!summary.is_incomplete);
    assert!(!summary.goal_met);
    assert_eq!(summary.status(), DayStatus::NoData);
    assert!(summary.sessions.is_empty());
}

#[test]
fn complete_pair_sums_to_eight_hours_and_meets_goal() {
    let swipes = vec![at(2024, 1, 1, 9, 0), at(2024, 1, 1, 17, 0)];

    let summary = summarize_day(&swipes, date(2024, 1, 1), hours(5), at(2024, 1, 5, 12, 0));

    assert_eq!(summary.total, hours(8));
    assert!(!summary.is_incomplete);
    assert!(summary.goal_met);
    assert_eq!(summary.status(), DayStatus::GoalMet);
    assert_eq!(summary.sessions.len(), 1);
    assert_eq!(summary.sessions[0].closure, SessionClosure::Complete);
}

#[test]
fn dangling_in_on_past_date_caps_at_end_of_day() {
    let swipes = vec![at(2024, 1, 1, 9, 0)];
    let now = at(2024, 1, 5, 12, 0);

    let summary = summarize_day(&swipes, date(2024, 1, 1), hours(5), now);

    // Capped at 23:59:59.999 of the swipe's own date, never spilling into the
    // next day or into `now`.
    assert_eq!(summary.total, end_of_day(date(2024, 1, 1)) - at(2024, 1, 1, 9, 0));
    assert!(summary.total > hours(14));
    assert!(summary.total < hours(15));
    assert!(summary.is_incomplete);
    assert_eq!(summary.status(), DayStatus::Incomplete);
    assert_eq!(summary.sessions[0].closure, SessionClosure::CappedAtMidnight);
}

#[test]
fn dangling_in_today_accrues_against_now() {
    let swipes = vec![at(2024, 1, 1, 9, 0)];
    let now = at(2024, 1, 1, 12, 0);

    let summary = summarize_day(&swipes, date(2024, 1, 1), hours(5), now);

    assert_eq!(summary.total, hours(3));
    assert!(summary.is_incomplete);
    assert_eq!(summary.sessions[0].closure, SessionClosure::Active);
}

#[test]
fn goal_met_tracks_total_against_goal_for_any_goal() {
    let swipes = vec![at(2024, 1, 1, 9, 0), at(2024, 1, 1, 15, 0)]; // 6h

    for goal_hours in 0..=10 {
        let goal = hours(goal_hours);
        let summary = summarize_day(&swipes, date(2024, 1, 1), goal, at(2024, 1, 5, 12, 0));
        assert_eq!(
            summary.goal_met,
            summary.total >= goal,
            "goal_met must mirror total >= goal at {}h",
            goal_hours
        );
    }
}

#[test]
fn whole_log_parity_drives_inside_state() {
    // Day one is complete, day two opens a new session: three swipes total.
    let swipes = vec![
        at(2024, 1, 1, 9, 0),
        at(2024, 1, 1, 17, 0),
        at(2024, 1, 2, 8, 0),
    ];
    let now = at(2024, 1, 2, 12, 0);

    let today = classify_today(&swipes, hours(5), now);

    assert!(today.is_inside);
    assert!(today.has_active_session());
    assert_eq!(today.last_swipe, Some(at(2024, 1, 2, 8, 0)));

    // The earlier day stays complete regardless of the open session.
    let day_one = summarize_day(&swipes, date(2024, 1, 1), hours(5), now);
    assert!(!day_one.is_incomplete);
    assert_eq!(day_one.total, hours(8));
}

#[test]
fn inside_state_survives_a_forgotten_checkout() {
    // One dangling IN yesterday, nothing today: still inside, but no active
    // session today, so the watch loop must not spin.
    let swipes = vec![at(2024, 1, 1, 9, 0)];
    let now = at(2024, 1, 2, 10, 0);

    let today = classify_today(&swipes, hours(5), now);

    assert!(today.is_inside);
    assert!(!today.has_active_session());
    assert_eq!(today.summary.total, TimeDelta::zero());
}

#[test]
fn raising_the_goal_reclassifies_without_touching_swipes() {
    let swipes = vec![at(2024, 1, 1, 9, 0), at(2024, 1, 1, 15, 0)]; // 6h

    let with_5h = summarize_day(&swipes, date(2024, 1, 1), hours(5), at(2024, 1, 5, 12, 0));
    let with_8h = summarize_day(&swipes, date(2024, 1, 1), hours(8), at(2024, 1, 5, 12, 0));

    assert!(with_5h.goal_met);
    assert!(!with_8h.goal_met);
    assert_eq!(with_5h.total, with_8h.total);
    assert_eq!(with_5h.sessions, with_8h.sessions);
}

#[test]
fn summaries_are_idempotent() {
    let swipes = vec![
        at(2024, 1, 1, 9, 0),
        at(2024, 1, 1, 12, 0),
        at(2024, 1, 1, 13, 0),
    ];
    let now = at(2024, 1, 1, 15, 0);

    let first = summarize_day(&swipes, date(2024, 1, 1), hours(5), now);
    let second = summarize_day(&swipes, date(2024, 1, 1), hours(5), now);

    assert_eq!(first, second);
}

#[test]
fn odd_count_dominates_even_with_a_complete_pair() {
    // A full pair plus a later dangling IN on the same date.
    let swipes = vec![
        at(2024, 1, 1, 9, 0),
        at(2024, 1, 1, 10, 0),
        at(2024, 1, 1, 11, 0),
    ];
    let now = at(2024, 1, 1, 12, 0);

    let summary = summarize_day(&swipes, date(2024, 1, 1), hours(5), now);

    assert!(summary.is_incomplete);
    assert_eq!(summary.status(), DayStatus::Incomplete);
    // 1h complete + 1h active
    assert_eq!(summary.total, hours(2));
}

#[test]
fn out_of_order_swipes_are_sorted_before_pairing() {
    let swipes = vec![at(2024, 1, 1, 17, 0), at(2024, 1, 1, 9, 0)];

    let summary = summarize_day(&swipes, date(2024, 1, 1), hours(5), at(2024, 1, 5, 12, 0));

    assert_eq!(summary.total, hours(8));
    assert_eq!(summary.invalid_pairs, 0);
}

#[test]
fn clock_out_before_clock_in_is_skipped_not_negated() {
    // build_sessions pairs in the order given; an inverted pair must
    // contribute zero, not a negative duration.
    let day_swipes = [at(2024, 1, 1, 17, 0), at(2024, 1, 1, 9, 0)];

    let sessions = build_sessions(&day_swipes, date(2024, 1, 1), at(2024, 1, 5, 12, 0));

    assert_eq!(sessions.len(), 1);
    assert_eq!(sessions[0].closure, SessionClosure::Invalid);
    assert_eq!(sessions[0].duration, TimeDelta::zero());
}

#[test]
fn future_in_clamps_active_session_to_zero() {
    let swipes = vec![at(2024, 1, 1, 13, 0)];
    let now = at(2024, 1, 1, 12, 0);

    let summary = summarize_day(&swipes, date(2024, 1, 1), hours(5), now);

    assert_eq!(summary.total, TimeDelta::zero());
    assert!(summary.is_incomplete);
}

#[test]
fn zero_length_pair_reads_as_no_data() {
    let swipes = vec![at(2024, 1, 1, 9, 0), at(2024, 1, 1, 9, 0)];

    let summary = summarize_day(&swipes, date(2024, 1, 1), hours(5), at(2024, 1, 5, 12, 0));

    assert_eq!(summary.total, TimeDelta::zero());
    assert!(!summary.is_incomplete);
    assert_eq!(summary.status(), DayStatus::NoData);
}

#[test]
fn summarize_range_covers_every_distinct_date() {
    let swipes = vec![
        at(2024, 1, 1, 9, 0),
        at(2024, 1, 1, 17, 0),
        at(2024, 1, 15, 9, 0),
        at(2024, 1, 15, 10, 0),
        at(2024, 2, 3, 8, 0),
    ];
    let now = at(2024, 2, 3, 12, 0);

    let summaries = summarize_range(&swipes, hours(5), now);

    assert_eq!(summaries.len(), 3);
    assert_eq!(summaries[&date(2024, 1, 1)].status(), DayStatus::GoalMet);
    assert_eq!(summaries[&date(2024, 1, 15)].status(), DayStatus::GoalNotMet);
    assert_eq!(summaries[&date(2024, 2, 3)].status(), DayStatus::Incomplete);
}
