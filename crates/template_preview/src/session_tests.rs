use super::*;
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tempfile::TempDir;

fn setup(template: &str) -> (TempDir, PreviewSession) {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let template_path = temp_dir.path().join("invoice.hbs");
    fs::write(&template_path, template).expect("Failed to write template");

    let session = PreviewSession::new(
        template_path,
        &temp_dir.path().join("out"),
        PlaceholderPolicy::Constant,
    )
    .expect("valid template path");
    (temp_dir, session)
}

#[test]
fn test_session_rejects_non_template_files() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let result = PreviewSession::new(
        temp_dir.path().join("notes.txt"),
        temp_dir.path(),
        PlaceholderPolicy::Constant,
    );
    assert!(matches!(result, Err(PreviewError::NotATemplate(_))));
}

#[test]
fn test_session_paths() {
    let (temp_dir, session) = setup("{{x}}");
    assert_eq!(session.data_path(), temp_dir.path().join("invoice.json"));
    assert_eq!(
        session.output_path(),
        temp_dir.path().join("out").join("invoice.html")
    );
}

#[test]
fn test_prepare_then_render() {
    let (_temp_dir, session) = setup("<p>{{customer.name}}</p>");

    let outcome = session.prepare().expect("prepare succeeds");
    assert!(outcome.was_created());

    let page = session.render().expect("render succeeds");
    let html = fs::read_to_string(page).expect("page written");
    assert!(html.contains("<p>Example Value</p>"));
    assert!(html.contains("<title>Handlebars Preview - invoice</title>"));
}

#[test]
fn test_prepare_is_create_once() {
    let (_temp_dir, session) = setup("{{x}}");
    assert!(session.prepare().expect("prepare succeeds").was_created());

    fs::write(session.data_path(), "{\"x\": \"edited\"}").expect("Failed to edit data");
    assert!(!session.prepare().expect("prepare succeeds").was_created());

    let page = session.render().expect("render succeeds");
    assert!(fs::read_to_string(page).expect("page written").contains("edited"));
}

#[test]
fn test_render_without_data_file_fails() {
    let (_temp_dir, session) = setup("{{x}}");
    assert!(matches!(session.render(), Err(PreviewError::Io(_))));
}

#[test]
fn test_render_with_broken_data_file_fails() {
    let (_temp_dir, session) = setup("{{x}}");
    fs::write(session.data_path(), "not json").expect("Failed to write data");
    assert!(matches!(
        session.render(),
        Err(PreviewError::InvalidMockData { .. })
    ));
}

#[test]
fn test_auto_refresh_is_written_into_page() {
    let (_temp_dir, session) = setup("{{x}}");
    let session = session.with_auto_refresh(1);
    session.prepare().expect("prepare succeeds");
    let page = session.render().expect("render succeeds");
    assert!(fs::read_to_string(page)
        .expect("page written")
        .contains("http-equiv=\"refresh\""));
}

#[test]
fn test_refresh_if_changed() {
    let (_temp_dir, session) = setup("{{x}}");
    session.prepare().expect("prepare succeeds");

    let mut stale = ChangeTracker::since(UNIX_EPOCH);
    let rendered = session
        .refresh_if_changed(&mut stale)
        .expect("refresh succeeds");
    assert_eq!(rendered.as_deref(), Some(session.output_path()));

    let mut fresh = ChangeTracker::since(SystemTime::now() + Duration::from_secs(60));
    assert_eq!(
        session
            .refresh_if_changed(&mut fresh)
            .expect("refresh succeeds"),
        None
    );
}

#[test]
fn test_refresh_regenerates_deleted_data_file_after_template_edit() {
    let (_temp_dir, session) = setup("<p>{{customer.name}}</p>");
    session.prepare().expect("prepare succeeds");
    session.render().expect("render succeeds");

    let mut tracker = ChangeTracker::new();
    fs::remove_file(session.data_path()).expect("Failed to delete data");
    fs::write(session.template_path(), "<p>{{customer.email}}</p>")
        .expect("Failed to edit template");
    std::fs::File::options()
        .write(true)
        .open(session.template_path())
        .expect("Failed to open template")
        .set_modified(SystemTime::now() + Duration::from_secs(3600))
        .expect("Failed to set modification time");

    let rendered = session
        .refresh_if_changed(&mut tracker)
        .expect("refresh succeeds");
    assert_eq!(rendered.as_deref(), Some(session.output_path()));
    assert!(session.data_path().exists());

    let data = fs::read_to_string(session.data_path()).expect("data regenerated");
    assert!(data.contains("\"email\""));
}

#[test]
fn test_refresh_after_data_file_deletion_alone() {
    let (_temp_dir, session) = setup("<p>{{x}}</p>");
    session.prepare().expect("prepare succeeds");
    fs::write(session.data_path(), "{\"x\": \"edited\"}").expect("Failed to edit data");

    let mut tracker = ChangeTracker::since(UNIX_EPOCH);
    let first = session
        .refresh_if_changed(&mut tracker)
        .expect("refresh succeeds");
    assert!(fs::read_to_string(first.expect("rendered"))
        .expect("page written")
        .contains("edited"));

    fs::remove_file(session.data_path()).expect("Failed to delete data");
    let second = session
        .refresh_if_changed(&mut tracker)
        .expect("refresh succeeds")
        .expect("deletion triggers a render");

    assert!(session.data_path().exists());
    let html = fs::read_to_string(second).expect("page written");
    assert!(html.contains("<p>Example Value</p>"));
}
