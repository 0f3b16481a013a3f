use super::*;
use serde_json::json;
use tempfile::TempDir;

fn write_template(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("Failed to write template");
    path
}

#[test]
fn test_mock_data_path_replaces_extension() {
    assert_eq!(
        mock_data_path(Path::new("templates/invoice.hbs")),
        PathBuf::from("templates/invoice.json")
    );
    assert_eq!(
        mock_data_path(Path::new("letter.v2.handlebars")),
        PathBuf::from("letter.v2.json")
    );
}

#[test]
fn test_ensure_mock_data_creates_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let template = write_template(&temp_dir, "welcome.hbs", "Hi {{user.name}}, {{code}}");

    let outcome =
        ensure_mock_data(&template, PlaceholderPolicy::Constant).expect("bootstrap succeeds");

    assert!(outcome.was_created());
    assert_eq!(outcome.path(), temp_dir.path().join("welcome.json"));

    let content = fs::read_to_string(outcome.path()).expect("data file exists");
    assert!(content.ends_with('\n'));
    assert!(content.contains("\n  \"user\": {"));

    let data: Value = serde_json::from_str(&content).expect("valid JSON");
    assert_eq!(
        data,
        json!({"user": {"name": "Example Value"}, "code": "Example Value"})
    );
}

#[test]
fn test_ensure_mock_data_never_overwrites_existing_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let template = write_template(&temp_dir, "welcome.hbs", "Hi {{name}}");
    let data_path = temp_dir.path().join("welcome.json");
    fs::write(&data_path, "{\"name\": \"Edited by hand\"}").expect("Failed to write data");

    let outcome =
        ensure_mock_data(&template, PlaceholderPolicy::NameAware).expect("bootstrap succeeds");

    assert_eq!(outcome, MockDataOutcome::Existing(data_path.clone()));
    assert_eq!(
        fs::read_to_string(&data_path).expect("data file exists"),
        "{\"name\": \"Edited by hand\"}"
    );
}

#[test]
fn test_ensure_mock_data_skips_template_read_when_data_exists() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    // The template itself is missing; only the data file exists.
    let template = temp_dir.path().join("ghost.hbs");
    fs::write(temp_dir.path().join("ghost.json"), "{}").expect("Failed to write data");

    let outcome =
        ensure_mock_data(&template, PlaceholderPolicy::Constant).expect("bootstrap succeeds");
    assert!(!outcome.was_created());
}

#[test]
fn test_ensure_mock_data_missing_template() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let template = temp_dir.path().join("missing.hbs");

    let result = ensure_mock_data(&template, PlaceholderPolicy::Constant);
    assert!(matches!(result, Err(PreviewError::Io(_))));
    assert!(!temp_dir.path().join("missing.json").exists());
}

#[test]
fn test_ensure_mock_data_for_template_without_variables() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let template = write_template(&temp_dir, "static.hbs", "<p>No bindings</p>");

    let outcome =
        ensure_mock_data(&template, PlaceholderPolicy::Constant).expect("bootstrap succeeds");
    let data = load_mock_data(outcome.path()).expect("valid JSON");
    assert_eq!(data, json!({}));
}

#[test]
fn test_load_mock_data_invalid_json() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let data_path = temp_dir.path().join("broken.json");
    fs::write(&data_path, "{ \"name\": ").expect("Failed to write data");

    match load_mock_data(&data_path) {
        Err(PreviewError::InvalidMockData { path, message }) => {
            assert!(path.ends_with("broken.json"));
            assert!(!message.is_empty());
        }
        other => panic!("Expected InvalidMockData error, got {other:?}"),
    }
}

#[test]
fn test_load_mock_data_missing_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let result = load_mock_data(&temp_dir.path().join("nope.json"));
    assert!(matches!(result, Err(PreviewError::Io(_))));
}
