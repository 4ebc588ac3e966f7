//! Weekly academic calendar
//!
//! Weeks start on Monday. Within a day, timed events come in clock order;
//! events without a time are listed after them.

use crate::core::models::{new_id, AcademicEvent, EventDraft};
use crate::info;
use chrono::{Datelike, Days, Duration, NaiveDate};
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Storage order: by date, then time, untimed first on a given date
fn storage_order(a: &AcademicEvent, b: &AcademicEvent) -> Ordering {
    a.date.cmp(&b.date).then_with(|| a.time.cmp(&b.time))
}

/// Day-listing order: by time, untimed last
fn day_order(a: &AcademicEvent, b: &AcademicEvent) -> Ordering {
    match (a.time, b.time) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Validate a draft and insert it as a new event, keeping storage order.
///
/// # Errors
/// Returns the validation message when the draft is rejected.
pub fn add_event(events: &mut Vec<AcademicEvent>, draft: EventDraft) -> Result<&AcademicEvent, String> {
    add_event_with_id(events, draft, new_id())
}

/// Same as [`add_event`] with a caller-chosen id.
///
/// # Errors
/// Returns the validation message when the draft is rejected.
pub fn add_event_with_id(
    events: &mut Vec<AcademicEvent>,
    draft: EventDraft,
    id: String,
) -> Result<&AcademicEvent, String> {
    draft.validate()?;
    let event = draft.into_event(id);
    info!("Scheduled {} '{}' on {}", event.kind.as_str(), event.title, event.date);
    // Insert after any equal keys so earlier entries keep their place
    let pos = events.partition_point(|existing| storage_order(existing, &event) != Ordering::Greater);
    events.insert(pos, event);
    Ok(&events[pos])
}

/// Remove the event with `id`. Returns `true` if something was removed.
pub fn remove_event(events: &mut Vec<AcademicEvent>, id: &str) -> bool {
    let before = events.len();
    events.retain(|event| event.id != id);
    before != events.len()
}

/// Monday of the week containing `date`, or `None` when it falls before
/// [`NaiveDate::MIN`]
#[must_use]
pub fn week_start(date: NaiveDate) -> Option<NaiveDate> {
    date.checked_sub_days(Days::new(u64::from(date.weekday().num_days_from_monday())))
}

/// The seven dates (Monday to Sunday) of the week containing `date`.
///
/// `None` when part of that week lies outside the representable date range.
#[must_use]
pub fn week_of(date: NaiveDate) -> Option<[NaiveDate; 7]> {
    let monday = week_start(date)?;
    let mut days = [monday; 7];
    for (offset, day) in (0_u64..).zip(days.iter_mut()) {
        *day = monday.checked_add_days(Days::new(offset))?;
    }
    Some(days)
}

/// Move `date` by whole weeks (negative goes back).
///
/// `None` when the result is out of range.
#[must_use]
pub fn shift_week(date: NaiveDate, weeks: i64) -> Option<NaiveDate> {
    date.checked_add_signed(Duration::try_weeks(weeks)?)
}

/// Events on `date`, timed ones first in clock order
#[must_use]
pub fn events_on(events: &[AcademicEvent], date: NaiveDate) -> Vec<&AcademicEvent> {
    let mut day: Vec<&AcademicEvent> = events.iter().filter(|e| e.date == date).collect();
    day.sort_by(|a, b| day_order(a, b));
    day
}

/// Group events by exact date, ascending; input order is kept within a date
#[must_use]
pub fn group_by_date(events: &[AcademicEvent]) -> BTreeMap<NaiveDate, Vec<&AcademicEvent>> {
    let mut groups: BTreeMap<NaiveDate, Vec<&AcademicEvent>> = BTreeMap::new();
    for event in events {
        groups.entry(event.date).or_default().push(event);
    }
    groups
}

/// One day of the weekly view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaySchedule<'a> {
    /// Calendar date
    pub date: NaiveDate,
    /// Events on that date in listing order
    pub events: Vec<&'a AcademicEvent>,
}

/// The Monday-to-Sunday week containing `date`, see [`week_of`]
#[must_use]
pub fn week_view(events: &[AcademicEvent], date: NaiveDate) -> Option<Vec<DaySchedule<'_>>> {
    let week = week_of(date)?
        .into_iter()
        .map(|day| DaySchedule {
            date: day,
            events: events_on(events, day),
        })
        .collect();
    Some(week)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::EventKind;
    use chrono::{NaiveTime, Weekday};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn time(h: u32, m: u32) -> Option<NaiveTime> {
        NaiveTime::from_hms_opt(h, m, 0)
    }

    fn draft(title: &str, on: NaiveDate, at: Option<NaiveTime>) -> EventDraft {
        EventDraft {
            title: title.to_string(),
            kind: EventKind::Class,
            date: on,
            time: at,
        }
    }

    #[test]
    fn test_week_start_is_monday() {
        // 2025-03-12 is a Wednesday, 2025-03-16 a Sunday
        assert_eq!(week_start(date(2025, 3, 12)), Some(date(2025, 3, 10)));
        assert_eq!(week_start(date(2025, 3, 16)), Some(date(2025, 3, 10)));
        assert_eq!(week_start(date(2025, 3, 10)), Some(date(2025, 3, 10)));
        assert_eq!(week_start(date(2025, 3, 17)), Some(date(2025, 3, 17)));
    }

    #[test]
    fn test_week_of_spans_month_boundary() {
        let week = week_of(date(2025, 3, 1)).unwrap();
        assert_eq!(week[0], date(2025, 2, 24));
        assert_eq!(week[0].weekday(), Weekday::Mon);
        assert_eq!(week[6], date(2025, 3, 2));
        assert_eq!(week[6].weekday(), Weekday::Sun);
    }

    #[test]
    fn test_shift_week() {
        assert_eq!(shift_week(date(2025, 3, 12), 1), Some(date(2025, 3, 19)));
        assert_eq!(shift_week(date(2025, 3, 12), -2), Some(date(2025, 2, 26)));
        assert_eq!(shift_week(date(2025, 3, 12), 0), Some(date(2025, 3, 12)));
    }

    #[test]
    fn test_week_math_out_of_range_is_none() {
        assert_eq!(shift_week(date(2025, 3, 12), 100_000_000_000), None);
        assert_eq!(shift_week(date(2025, 3, 12), i64::MIN), None);
        assert_eq!(shift_week(NaiveDate::MAX, 1), None);

        // The week around MAX runs past it unless MAX is a Sunday
        let max_week_complete = NaiveDate::MAX.weekday() == Weekday::Sun;
        assert_eq!(week_of(NaiveDate::MAX).is_some(), max_week_complete);
        assert_eq!(week_view(&[], NaiveDate::MAX).is_some(), max_week_complete);

        let min_is_monday = NaiveDate::MIN.weekday() == Weekday::Mon;
        assert_eq!(week_start(NaiveDate::MIN).is_some(), min_is_monday);
    }

    #[test]
    fn test_add_event_keeps_storage_order() {
        let mut events = Vec::new();
        add_event_with_id(&mut events, draft("late", date(2025, 3, 2), time(15, 0)), "1".into()).unwrap();
        add_event_with_id(&mut events, draft("early", date(2025, 3, 1), time(9, 0)), "2".into()).unwrap();
        add_event_with_id(&mut events, draft("untimed", date(2025, 3, 2), None), "3".into()).unwrap();
        add_event_with_id(&mut events, draft("morning", date(2025, 3, 2), time(8, 0)), "4".into()).unwrap();
        let ids: Vec<&str> = events.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "3", "4", "1"]);
    }

    #[test]
    fn test_add_event_rejects_blank_title() {
        let mut events = Vec::new();
        assert!(add_event(&mut events, draft(" ", date(2025, 3, 2), None)).is_err());
        assert!(events.is_empty());
    }

    #[test]
    fn test_events_on_puts_untimed_last() {
        let mut events = Vec::new();
        add_event_with_id(&mut events, draft("untimed", date(2025, 3, 2), None), "1".into()).unwrap();
        add_event_with_id(&mut events, draft("noon", date(2025, 3, 2), time(12, 0)), "2".into()).unwrap();
        add_event_with_id(&mut events, draft("other day", date(2025, 3, 3), time(7, 0)), "3".into()).unwrap();
        let day: Vec<&str> = events_on(&events, date(2025, 3, 2))
            .iter()
            .map(|e| e.title.as_str())
            .collect();
        assert_eq!(day, vec!["noon", "untimed"]);
    }

    #[test]
    fn test_remove_event() {
        let mut events = Vec::new();
        add_event_with_id(&mut events, draft("x", date(2025, 3, 2), None), "1".into()).unwrap();
        assert!(remove_event(&mut events, "1"));
        assert!(!remove_event(&mut events, "1"));
    }

    #[test]
    fn test_group_by_date() {
        let mut events = Vec::new();
        add_event_with_id(&mut events, draft("b", date(2025, 3, 3), None), "1".into()).unwrap();
        add_event_with_id(&mut events, draft("a", date(2025, 3, 1), None), "2".into()).unwrap();
        add_event_with_id(&mut events, draft("c", date(2025, 3, 3), time(10, 0)), "3".into()).unwrap();
        let groups = group_by_date(&events);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[&date(2025, 3, 3)].len(), 2);
        assert_eq!(groups.keys().next(), Some(&date(2025, 3, 1)));
    }

    #[test]
    fn test_week_view_has_seven_days() {
        let mut events = Vec::new();
        add_event_with_id(&mut events, draft("exam", date(2025, 3, 16), time(8, 0)), "1".into()).unwrap();
        let week = week_view(&events, date(2025, 3, 12)).unwrap();
        assert_eq!(week.len(), 7);
        assert!(week[..6].iter().all(|d| d.events.is_empty()));
        assert_eq!(week[6].events.len(), 1);
    }
}
