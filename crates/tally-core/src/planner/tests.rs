//! Tests for the recovery planner.

use jiff::civil::date;

use super::*;
use crate::models::{PlanStatus, TimeSlot, Weekday};

fn slot(text: &str) -> TimeSlot {
    text.parse().unwrap()
}

/// Monday 08:45 MATH, 09:45 PHYSICS; Wednesday 10:45 CHEMISTRY.
fn weekly_timetable() -> Timetable {
    let mut timetable = Timetable::new();
    timetable.insert(Weekday::Monday, slot("09:45"), "PHYSICS");
    timetable.insert(Weekday::Monday, slot("08:45"), "MATH");
    timetable.insert(Weekday::Wednesday, slot("10:45"), "CHEMISTRY");
    timetable
}

fn input(target: f64, total: i64, absent: i64, start: Date, limit: Date) -> PlanInput {
    PlanInput {
        target_percent: target,
        total_classes: total,
        absent_classes: absent,
        start,
        limit,
    }
}

fn counts(target: f64, total: i64, absent: i64) -> PlanInput {
    input(target, total, absent, date(2026, 1, 5), date(2026, 5, 31))
}

#[test]
fn test_deficit_without_timetable() {
    let calendar = CalendarPolicy::default();
    let result = RecoveryPlanner::new(&calendar).plan(&counts(75.0, 40, 14));

    assert!((result.current_pct - 65.0).abs() < 1e-9);
    assert_eq!(
        result.outcome,
        PlanOutcome::Deficit {
            classes_needed: 16,
            projection: None,
        }
    );
}

#[test]
fn test_surplus() {
    let calendar = CalendarPolicy::default();
    let result = RecoveryPlanner::new(&calendar).plan(&counts(75.0, 40, 2));

    assert!((result.current_pct - 95.0).abs() < 1e-9);
    assert_eq!(
        result.outcome,
        PlanOutcome::Surplus {
            classes_skippable: 10
        }
    );
}

#[test]
fn test_full_target_with_absences_is_impossible() {
    let calendar = CalendarPolicy::default();
    let timetable = weekly_timetable();
    let planner = RecoveryPlanner::new(&calendar).with_timetable(&timetable);
    for total in [1, 10, 500] {
        let result = planner.plan(&counts(100.0, total, 1));
        assert_eq!(result.status(), PlanStatus::Impossible);
    }
}

#[test]
fn test_full_target_in_deficit_is_impossible() {
    let calendar = CalendarPolicy::default();
    let result = RecoveryPlanner::new(&calendar).plan(&counts(100.0, 0, 0));
    assert_eq!(result.status(), PlanStatus::Impossible);
}

#[test]
fn test_full_target_already_met_is_surplus_of_zero() {
    let calendar = CalendarPolicy::default();
    let result = RecoveryPlanner::new(&calendar).plan(&counts(100.0, 10, 0));
    assert_eq!(
        result.outcome,
        PlanOutcome::Surplus {
            classes_skippable: 0
        }
    );
}

#[test]
fn test_zero_target_uses_sentinel() {
    let calendar = CalendarPolicy::default();
    let result = RecoveryPlanner::new(&calendar).plan(&counts(0.0, 10, 4));
    assert_eq!(
        result.outcome,
        PlanOutcome::Surplus {
            classes_skippable: PlanResult::UNBOUNDED_SKIPS
        }
    );
}

#[test]
fn test_nothing_held_yet_needs_nothing() {
    let calendar = CalendarPolicy::default();
    let timetable = weekly_timetable();

    let without = RecoveryPlanner::new(&calendar).plan(&counts(75.0, 0, 0));
    assert_eq!(without.current_pct, 0.0);
    assert_eq!(without.classes_needed(), Some(0));

    let start = date(2026, 1, 5);
    let with = RecoveryPlanner::new(&calendar)
        .with_timetable(&timetable)
        .plan(&counts(75.0, 0, 0));
    assert_eq!(
        with.outcome,
        PlanOutcome::Deficit {
            classes_needed: 0,
            projection: Some(Projection {
                days_needed: 0,
                end_date: start,
                schedule: Vec::new(),
            }),
        }
    );
}

#[test]
fn test_needed_is_exact_despite_rounding() {
    let calendar = CalendarPolicy::default();
    // (8 - 7) / 0.2 evaluates just above 5 in floating point
    let result = RecoveryPlanner::new(&calendar).plan(&counts(80.0, 10, 3));
    assert_eq!(result.classes_needed(), Some(5));
}

#[test]
fn test_needed_is_minimal_across_inputs() {
    for total in 0..60 {
        for absent in 0..=total {
            for target in [33.0, 50.0, 60.0, 66.67, 75.0, 80.0, 85.0, 90.0, 99.0] {
                let present = total - absent;
                let current = if total == 0 {
                    0.0
                } else {
                    present as f64 / total as f64 * 100.0
                };
                if current >= target {
                    continue;
                }
                let needed = classes_needed(present, total, target);
                assert!(reaches(present, total, needed, target));
                assert!(needed == 0 || !reaches(present, total, needed - 1, target));
            }
        }
    }
}

#[test]
fn test_skippable_is_maximal_across_inputs() {
    for total in 1..60 {
        for absent in 0..=total {
            for target in [33.0, 50.0, 66.67, 75.0, 80.0, 90.0] {
                let present = total - absent;
                if (present as f64 / total as f64 * 100.0) < target {
                    continue;
                }
                let skippable = classes_skippable(present, total, target);
                let keeps = |k: i64| present as f64 * 100.0 >= target * (total + k) as f64;
                assert!(keeps(skippable));
                assert!(!keeps(skippable + 1));
            }
        }
    }
}

#[test]
fn test_negative_counts_are_clamped() {
    let calendar = CalendarPolicy::default();
    let result = RecoveryPlanner::new(&calendar).plan(&counts(75.0, -5, -3));
    assert_eq!(result.total_classes, 0);
    assert_eq!(result.absent_classes, 0);
    assert_eq!(result.current_pct, 0.0);
}

#[test]
fn test_absent_above_total_is_lenient() {
    let calendar = CalendarPolicy::default();
    let result = RecoveryPlanner::new(&calendar).plan(&counts(75.0, 5, 8));
    assert!((result.current_pct + 60.0).abs() < 1e-9);
    assert_eq!(result.classes_needed(), Some(27));
}

#[test]
fn test_sunday_start_finds_next_monday() {
    let calendar = CalendarPolicy::default();
    let mut timetable = Timetable::new();
    timetable.insert(Weekday::Monday, slot("08:45"), "MATH");
    let sunday = date(2026, 1, 11);

    let result = RecoveryPlanner::new(&calendar)
        .with_timetable(&timetable)
        .plan(&input(75.0, 3, 1, sunday, date(2026, 1, 25)));

    assert_eq!(result.classes_needed(), Some(1));
    assert_eq!(
        result.schedule(),
        [ScheduledClass {
            date: date(2026, 1, 12),
            weekday: Weekday::Monday,
            slot: slot("08:45"),
            subject: "MATH".to_string(),
        }]
    );
}

#[test]
fn test_schedule_is_truncated_to_needed() {
    let calendar = CalendarPolicy::default();
    let timetable = weekly_timetable();
    let result = RecoveryPlanner::new(&calendar)
        .with_timetable(&timetable)
        .plan(&counts(75.0, 9, 3));

    let PlanOutcome::Deficit {
        classes_needed,
        projection: Some(projection),
    } = &result.outcome
    else {
        panic!("expected a scheduled deficit, got {:?}", result.outcome);
    };
    assert_eq!(*classes_needed, 3);
    assert_eq!(projection.days_needed, 2);
    assert_eq!(projection.end_date, date(2026, 1, 7));

    let subjects: Vec<_> = projection
        .schedule
        .iter()
        .map(|class| class.subject.as_str())
        .collect();
    assert_eq!(subjects, ["MATH", "PHYSICS", "CHEMISTRY"]);
}

#[test]
fn test_day_is_cut_short_when_need_is_met() {
    let calendar = CalendarPolicy::default();
    let timetable = weekly_timetable();
    let schedule = RecoveryPlanner::new(&calendar)
        .with_timetable(&timetable)
        .simulate(date(2026, 1, 5), date(2026, 1, 31), 1);
    assert_eq!(schedule.len(), 1);
    assert_eq!(schedule[0].slot, slot("08:45"));
}

#[test]
fn test_no_classes_in_range() {
    let calendar = CalendarPolicy::default();
    let mut timetable = Timetable::new();
    timetable.insert(Weekday::Monday, slot("08:45"), "MATH");
    let tuesday = date(2026, 1, 13);

    let result = RecoveryPlanner::new(&calendar)
        .with_timetable(&timetable)
        .plan(&input(75.0, 40, 14, tuesday, date(2026, 1, 17)));

    assert_eq!(
        result.outcome,
        PlanOutcome::NoClassesFound {
            classes_needed: 16,
            end_date: tuesday,
        }
    );
}

#[test]
fn test_timeframe_too_short() {
    let calendar = CalendarPolicy::default();
    let timetable = weekly_timetable();
    let result = RecoveryPlanner::new(&calendar)
        .with_timetable(&timetable)
        .plan(&input(75.0, 40, 14, date(2026, 1, 5), date(2026, 1, 18)));

    let PlanOutcome::ImpossibleTimeframe {
        classes_needed,
        max_possible,
        projection,
    } = &result.outcome
    else {
        panic!("expected impossible timeframe, got {:?}", result.outcome);
    };
    assert_eq!(*classes_needed, 16);
    assert_eq!(projection.schedule.len(), 6);
    assert_eq!(projection.days_needed, 4);
    assert_eq!(projection.end_date, date(2026, 1, 14));
    assert!((max_possible - 32.0 / 46.0 * 100.0).abs() < 1e-9);
}

#[test]
fn test_simulation_respects_calendar_and_order() {
    let calendar = CalendarPolicy::default();
    let mut timetable = weekly_timetable();
    timetable.insert(Weekday::Saturday, slot("11:00"), "LAB");
    timetable.insert(Weekday::Saturday, slot("09:00"), "SEMINAR");
    let start = date(2026, 1, 14);
    let limit = date(2026, 2, 21);

    let schedule = RecoveryPlanner::new(&calendar)
        .with_timetable(&timetable)
        .simulate(start, limit, 1000);

    assert!(!schedule.is_empty());
    for class in &schedule {
        assert!(class.date >= start && class.date <= limit);
        assert!(!calendar.is_non_instructional(class.date));
        assert_eq!(class.weekday, Weekday::of(class.date));
    }
    for pair in schedule.windows(2) {
        assert!((pair[0].date, pair[0].slot) < (pair[1].date, pair[1].slot));
    }
    // third Saturday, Republic Day and the mid-semester week are skipped
    for off in [date(2026, 1, 17), date(2026, 1, 26), date(2026, 2, 16), date(2026, 2, 18)] {
        assert!(schedule.iter().all(|class| class.date != off));
    }
    assert!(schedule.iter().any(|class| class.date == date(2026, 1, 24)));
}

#[test]
fn test_empty_timetable_counts_as_none() {
    let calendar = CalendarPolicy::default();
    let empty = Timetable::new();
    let result = RecoveryPlanner::new(&calendar)
        .with_timetable(&empty)
        .plan(&counts(75.0, 40, 14));
    assert_eq!(
        result.outcome,
        PlanOutcome::Deficit {
            classes_needed: 16,
            projection: None,
        }
    );
    assert!(RecoveryPlanner::new(&calendar)
        .simulate(date(2026, 1, 5), date(2026, 2, 5), 3)
        .is_empty());
}

#[test]
fn test_plan_is_deterministic() {
    let calendar = CalendarPolicy::default();
    let timetable = weekly_timetable();
    let planner = RecoveryPlanner::new(&calendar).with_timetable(&timetable);
    let request = input(85.0, 120, 30, date(2026, 3, 1), date(2026, 5, 31));

    let first = planner.plan(&request);
    let second = planner.plan(&request);
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}
