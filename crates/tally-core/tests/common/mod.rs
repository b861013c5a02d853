use std::path::PathBuf;

use tally_core::Tracker;
use tempfile::TempDir;

/// Monday to Wednesday, two classes a day.
pub const TIMETABLE_CSV: &str = "\
Department of Psychology,,,
Day,8:45 - 9:45,9:45 - 10:45,10:45 - 11:45
Monday,SOCIAL PSYCHOLOGY BPSY201-4,Break,STATISTICS BPSY202-4
Tuesday,BPSY202-4,Lunch,SOCIAL PSYCHOLOGY BPSY201-4
Wednesday,YOGA,,BPSY201-4
";

/// Six instructional days in January 2026; 11 Jan is a Sunday.
pub const ABSENCES_CSV: &str = "\
Date,P8-45AM,P9-45AM,P10-45AM,Total
05/01/2026,BPSY201-4,,,1
06/01/2026,,,,0
07/01/2026,,,BPSY201-4,1
10/01/2026,,,,0
11/01/2026,BPSY202-4,,,1
12/01/2026,STATISTICS BPSY202-4,,,1
13/01/2026,,BPSY202-4,,1
";

pub const SUMMARY_CSV: &str = "\
S.No,Subject Name,Held,Attended,Absent
1,SOCIAL PSYCHOLOGY,20,16,4
2,STATISTICS,20,17,3
Total,,40,33,7
Percentage,,,82.5%,
";

/// Writes `contents` to `name` inside a fresh temporary directory.
pub fn write_fixture(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).expect("Failed to write fixture");
    path
}

/// Helper function to create a tracker with all three fixtures loaded
pub fn loaded_tracker() -> (TempDir, Tracker) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let mut tracker = Tracker::default();
    tracker
        .load_summary(write_fixture(&temp_dir, "summary.csv", SUMMARY_CSV))
        .expect("Failed to load summary");
    tracker
        .load_timetable(write_fixture(&temp_dir, "timetable.csv", TIMETABLE_CSV))
        .expect("Failed to load timetable");
    tracker
        .load_absences(write_fixture(&temp_dir, "absences.csv", ABSENCES_CSV))
        .expect("Failed to load absences");
    (temp_dir, tracker)
}
