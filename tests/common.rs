#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn swt() -> Command {
    cargo_bin_cmd!("swipetrack")
}

/// Create a unique test store path inside the system temp dir and remove any
/// existing file
pub fn setup_test_store(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_swipetrack.json", name));
    let store_path = path.to_string_lossy().to_string();
    fs::remove_file(&store_path).ok();
    store_path
}

/// Record one swipe at an explicit instant via the CLI
pub fn swipe_at(store_path: &str, at: &str) {
    swt()
        .args(["--store", store_path, "--test", "swipe", "--at", at])
        .assert()
        .success();
}

/// Record a complete 09:00-17:00 day
pub fn record_full_day(store_path: &str, date: &str) {
    swipe_at(store_path, &format!("{} 09:00", date));
    swipe_at(store_path, &format!("{} 17:00", date));
}
