//! Pure derivations over a todo list: quadrants and the daily-hours hint

use std::cmp::Ordering;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use super::models::{Quadrant, Todo};

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Smallest suggested daily slice, in hours
pub const MIN_DAILY_HOURS: f64 = 0.25;

fn by_deadline_then_created(a: &&Todo, b: &&Todo) -> Ordering {
    match (a.deadline, b.deadline) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
    .then_with(|| a.created_at.cmp(&b.created_at))
}

/// Split todos into the four quadrants, in matrix order. Each quadrant is
/// sorted by deadline (undated last), then by creation time.
pub fn quadrants(todos: &[Todo]) -> [(Quadrant, Vec<&Todo>); 4] {
    Quadrant::ALL.map(|quadrant| {
        let mut items: Vec<&Todo> = todos.iter().filter(|t| t.quadrant() == quadrant).collect();
        items.sort_by(by_deadline_then_created);
        (quadrant, items)
    })
}

/// Days left until the end of `deadline`, rounded up. Zero or negative
/// means due now or overdue.
pub fn days_left(deadline: NaiveDate, now: NaiveDateTime) -> i64 {
    let end_of_day = NaiveTime::from_hms_opt(23, 59, 59).unwrap_or_default();
    let millis = (deadline.and_time(end_of_day) - now).num_milliseconds();
    (millis + MILLIS_PER_DAY - 1).div_euclid(MILLIS_PER_DAY)
}

/// Suggested hours per day to finish before the deadline, rounded to the
/// nearest quarter hour. Needs both a positive estimate and a deadline.
pub fn suggestion(todo: &Todo, now: NaiveDateTime) -> Option<f64> {
    let hours = todo.estimated_hours.filter(|h| *h > 0.0)?;
    let deadline = todo.deadline?;

    let days = days_left(deadline, now);
    if days <= 0 {
        return Some(hours);
    }
    let per_day = hours / days as f64;
    Some(((per_day * 4.0).round() / 4.0).max(MIN_DAILY_HOURS))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};

    fn at(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap()
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn todo(id: &str, deadline: Option<&str>, hours: Option<f64>) -> Todo {
        Todo {
            id: id.to_string(),
            title: id.to_string(),
            deadline: deadline.map(date),
            estimated_hours: hours,
            important: false,
            urgent: false,
            done: false,
            created_at: DateTime::<Utc>::from_timestamp(1_700_000_000, 0).unwrap(),
        }
    }

    #[test]
    fn test_important_not_urgent_is_plan_only() {
        let mut t = todo("essay", None, None);
        t.important = true;
        let todos = vec![t];
        let q = quadrants(&todos);
        for (quadrant, items) in &q {
            let expected = usize::from(*quadrant == Quadrant::Plan);
            assert_eq!(items.len(), expected, "{:?}", quadrant);
        }
    }

    #[test]
    fn test_quadrant_sorting() {
        let mut late = todo("late", Some("2026-04-10"), None);
        let mut undated = todo("undated", None, None);
        let mut early = todo("early", Some("2026-04-01"), None);
        let mut early_newer = todo("early-newer", Some("2026-04-01"), None);
        early_newer.created_at = early.created_at + chrono::Duration::seconds(5);
        for t in [&mut late, &mut undated, &mut early, &mut early_newer] {
            t.urgent = true;
        }
        let todos = vec![undated, early_newer, late, early];

        let q = quadrants(&todos);
        let (quadrant, items) = &q[2];
        assert_eq!(*quadrant, Quadrant::Delegate);
        let ids: Vec<&str> = items.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["early", "early-newer", "late", "undated"]);
    }

    #[test]
    fn test_days_left() {
        assert_eq!(days_left(date("2026-03-10"), at("2026-03-10 09:00")), 1);
        assert_eq!(days_left(date("2026-03-13"), at("2026-03-10 09:00")), 4);
        assert_eq!(days_left(date("2026-03-09"), at("2026-03-10 09:00")), 0);
        assert_eq!(days_left(date("2026-03-01"), at("2026-03-10 09:00")), -8);
    }

    #[test]
    fn test_suggestion_spreads_hours() {
        let now = at("2026-03-10 09:00");
        assert_eq!(suggestion(&todo("a", Some("2026-03-13"), Some(10.0)), now), Some(2.5));
        assert_eq!(suggestion(&todo("b", Some("2026-03-19"), Some(1.0)), now), Some(0.25));
    }

    #[test]
    fn test_suggestion_overdue_returns_total() {
        let now = at("2026-03-10 09:00");
        assert_eq!(suggestion(&todo("a", Some("2026-03-02"), Some(6.0)), now), Some(6.0));
    }

    #[test]
    fn test_suggestion_needs_estimate_and_deadline() {
        let now = at("2026-03-10 09:00");
        assert_eq!(suggestion(&todo("a", None, Some(3.0)), now), None);
        assert_eq!(suggestion(&todo("b", Some("2026-03-13"), None), now), None);
        assert_eq!(suggestion(&todo("c", Some("2026-03-13"), Some(0.0)), now), None);
    }
}
