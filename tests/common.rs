#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rv() -> Command {
    cargo_bin_cmd!("rosterview")
}

/// Create a unique test data path inside the system temp dir and remove any
/// existing file
pub fn setup_data_path(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rosterview.json", name));
    let data_path = path.to_string_lossy().to_string();
    fs::remove_file(&data_path).ok();
    data_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Nine roster entries: enough for three pages at the default page size.
pub const SAMPLE_DATA: &str = r#"[
  {"Last Name": "Smith",    "First Name": "Avery",  "Start": "2025-07-01", "End": "2025-07-03", "Recurrence": "None",    "Code": "LV",  "Description": "Leave",            "Remarks": "approved"},
  {"Last Name": "Johnson",  "First Name": "Blake",  "Start": "2025-07-02", "End": "2025-07-02", "Recurrence": "Weekly",  "Code": "MED", "Description": "Medical appt",     "Remarks": ""},
  {"Last Name": "Williams", "First Name": "Casey",  "Start": "2025-07-04", "End": "2025-07-08", "Recurrence": "None",    "Code": "TDY", "Description": "Off station",      "Remarks": "orders pending"},
  {"Last Name": "Brown",    "First Name": "Drew",   "Start": "2025-07-05", "End": "2025-07-05", "Recurrence": "Monthly", "Code": "DNIF","Description": "Grounded",         "Remarks": "flight doc"},
  {"Last Name": "Jones",    "First Name": "Emery",  "Start": "2025-07-07", "End": "2025-07-11", "Recurrence": "None",    "Code": "LV",  "Description": "Leave",            "Remarks": ""},
  {"Last Name": "Garcia",   "First Name": "Finley", "Start": "2025-07-09", "End": "2025-07-09", "Recurrence": "Daily",   "Code": "MTG", "Description": "Standup",          "Remarks": "recurring"},
  {"Last Name": "Miller",   "First Name": "Gray",   "Start": "2025-07-10", "End": "2025-07-12", "Recurrence": "None",    "Code": "TDY", "Description": "Conference",       "Remarks": ""},
  {"Last Name": "Davis",    "First Name": "Harper", "Start": "2025-07-14", "End": "2025-07-14", "Recurrence": "Weekly",  "Code": "MED", "Description": "Physical therapy", "Remarks": "thru August"},
  {"Last Name": "Martinez", "First Name": "Indigo", "Start": "2025-07-15", "End": "2025-07-18", "Recurrence": "None",    "Code": "LV",  "Description": "Leave",            "Remarks": "partial days"}
]"#;

/// Write the standard sample dataset and return its path
pub fn init_data_with_records(name: &str) -> String {
    let data_path = setup_data_path(name);
    fs::write(&data_path, SAMPLE_DATA).expect("write sample data");
    data_path
}
