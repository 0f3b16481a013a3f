use super::*;
use std::io;

#[test]
fn test_error_debug_format() {
    let error = PreviewError::NotATemplate("notes.txt".to_string());
    let debug_output = format!("{error:?}");
    assert!(debug_output.contains("NotATemplate"));
    assert!(debug_output.contains("notes.txt"));
}

#[test]
fn test_error_is_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<PreviewError>();
}

#[test]
fn test_io_error_display() {
    let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
    let error = PreviewError::from(io_error);
    assert_eq!(error.to_string(), "IO error: File not found");
}

#[test]
fn test_not_a_template_error_display() {
    let error = PreviewError::NotATemplate("report.txt".to_string());
    assert_eq!(
        error.to_string(),
        "Not a Handlebars template (expected .hbs or .handlebars): report.txt"
    );
}

#[test]
fn test_invalid_mock_data_error_display() {
    let error = PreviewError::InvalidMockData {
        path: "invoice.json".to_string(),
        message: "expected value at line 1 column 1".to_string(),
    };
    assert_eq!(
        error.to_string(),
        "Invalid mock data in invoice.json: expected value at line 1 column 1"
    );
}

#[test]
fn test_compilation_error_display() {
    let error = PreviewError::Compilation {
        message: "unclosed block".to_string(),
    };
    assert_eq!(error.to_string(), "Template compilation failed: unclosed block");
}

#[test]
fn test_resource_limit_error_display() {
    let error = PreviewError::ResourceLimit {
        limit_type: "template_size".to_string(),
        message: "too big".to_string(),
    };
    assert_eq!(
        error.to_string(),
        "Resource limit exceeded: template_size - too big"
    );
}

#[test]
fn test_serialization_error_from_serde_json() {
    let parse_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let error = PreviewError::from(parse_error);
    assert!(error.to_string().starts_with("Failed to serialize mock data"));
}
