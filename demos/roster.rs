use chrono::offset::TimeZone;
use chrono::{Duration, Utc};
use intervalmap::IntervalMap;
use std::ops::Bound;

fn main() {
    let people = ["Alice", "Bob", "Carol"];
    // Nobody is on call outside the roster.
    let mut roster = IntervalMap::new("nobody");

    // Set up initial roster.
    let start_of_roster = Utc.with_ymd_and_hms(2019, 1, 7, 0, 0, 0).unwrap();
    let mut week_start = start_of_roster;
    for _ in 0..3 {
        for person in &people {
            let next_week = week_start + Duration::weeks(1);
            roster.assign(week_start, next_week, *person);
            week_start = next_week;
        }
    }

    // Bob is covering Alice's second shift (the fourth shift overall).
    let fourth_shift_start = start_of_roster + Duration::weeks(3);
    let fourth_shift_end = fourth_shift_start + Duration::weeks(1);
    roster.assign(fourth_shift_start, fourth_shift_end, "Bob");

    // Print out the roster, and observe that
    // the fourth and fifth shifts have become one run.
    for run in roster.runs() {
        match (run.start, run.end) {
            (Bound::Included(start), Bound::Excluded(end)) => {
                println!("{} ({}): {}", start, *end - *start, run.value)
            }
            (Bound::Unbounded, Bound::Excluded(end)) => println!("until {}: {}", end, run.value),
            (Bound::Included(start), Bound::Unbounded) => {
                println!("from {}: {}", start, run.value)
            }
            _ => println!("always: {}", run.value),
        }
    }

    let middle_of_fourth_shift = fourth_shift_start + Duration::days(3);
    println!("On call {}: {}", middle_of_fourth_shift, roster[&middle_of_fourth_shift]);
}
