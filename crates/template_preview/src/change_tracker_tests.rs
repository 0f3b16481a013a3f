use super::*;
use std::fs::File;
use std::time::{Duration, UNIX_EPOCH};
use tempfile::TempDir;

fn touch_in_future(path: &Path, ahead: Duration) {
    let file = File::options()
        .write(true)
        .open(path)
        .expect("Failed to open file");
    file.set_modified(SystemTime::now() + ahead)
        .expect("Failed to set modification time");
}

#[test]
fn test_new_tracker_ignores_older_files() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = temp_dir.path().join("invoice.hbs");
    fs::write(&path, "{{x}}").expect("Failed to write file");

    let mut tracker = ChangeTracker::since(SystemTime::now() + Duration::from_secs(60));
    assert!(!tracker.has_changed(&[&path]));
}

#[test]
fn test_modified_file_is_reported_once() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = temp_dir.path().join("invoice.hbs");
    fs::write(&path, "{{x}}").expect("Failed to write file");

    let mut tracker = ChangeTracker::since(UNIX_EPOCH);
    assert!(tracker.has_changed(&[&path]));
    assert!(tracker.last_check() > UNIX_EPOCH);
    assert!(!tracker.has_changed(&[&path]));
}

#[test]
fn test_any_changed_path_triggers() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let template = temp_dir.path().join("invoice.hbs");
    let data = temp_dir.path().join("invoice.json");
    fs::write(&template, "{{x}}").expect("Failed to write file");
    fs::write(&data, "{}").expect("Failed to write file");

    let mut tracker = ChangeTracker::new();
    assert!(!tracker.has_changed(&[&template, &data]));

    touch_in_future(&data, Duration::from_secs(3600));
    assert!(tracker.has_changed(&[&template, &data]));
}

#[test]
fn test_missing_files_count_as_unchanged() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let mut tracker = ChangeTracker::since(UNIX_EPOCH);
    assert!(!tracker.has_changed(&[temp_dir.path().join("gone.hbs")]));
    assert_eq!(tracker.last_check(), UNIX_EPOCH);
}

#[test]
fn test_deleted_file_counts_as_changed_once() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = temp_dir.path().join("invoice.json");
    fs::write(&path, "{}").expect("Failed to write file");

    let mut tracker = ChangeTracker::new();
    assert!(!tracker.has_changed(&[&path]));

    fs::remove_file(&path).expect("Failed to delete file");
    assert!(tracker.has_changed(&[&path]));
    assert!(!tracker.has_changed(&[&path]));
}

#[test]
fn test_every_path_is_inspected_even_after_a_change() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let template = temp_dir.path().join("invoice.hbs");
    let data = temp_dir.path().join("invoice.json");
    fs::write(&template, "{{x}}").expect("Failed to write file");
    fs::write(&data, "{}").expect("Failed to write file");

    let mut tracker = ChangeTracker::since(UNIX_EPOCH);
    assert!(tracker.has_changed(&[&template, &data]));

    fs::remove_file(&data).expect("Failed to delete file");
    assert!(tracker.has_changed(&[&template, &data]));
}
