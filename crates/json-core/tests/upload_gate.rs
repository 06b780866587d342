//! Puerta de subida: precondiciones de tamaño y eco formateado.

use json_core::upload::{process_file_upload, FileUpload, OVERSIZE_MESSAGE, SIZE_MISMATCH_MESSAGE};

fn upload(name: &str, content: &str, declared: usize) -> json_core::model::ProcessResult {
    process_file_upload(&FileUpload { file_name: name.to_string(),
                                      file_content: content.to_string(),
                                      file_size: declared })
}

#[test]
fn valid_file_returns_two_space_formatted_echo() {
    let content = "{\"name\":\"test\",\"value\":123,\"nested\":{\"key\":\"value\"}}";
    let expected = "{\n  \"name\": \"test\",\n  \"value\": 123,\n  \"nested\": {\n    \"key\": \"value\"\n  }\n}";

    let result = upload("test.json", content, content.len());

    assert!(result.success);
    assert_eq!(result.result_text.as_deref(), Some(expected));
    assert!(result.error_message.is_none());
    assert_eq!(result.original_size, content.len());
    assert_eq!(result.processed_size, Some(expected.len()));
    assert_eq!(result.operation.as_str(), "validate");
}

#[test]
fn declared_size_over_limit_rejected_before_parsing() {
    // Contenido inválido a propósito: la rama de tamaño no debe parsear.
    let result = upload("large.json", "not json at all", 11 * 1024 * 1024);

    assert!(!result.success);
    assert!(result.result_text.is_none());
    assert_eq!(result.error_message.as_deref(), Some(OVERSIZE_MESSAGE));
    assert_eq!(result.original_size, 11 * 1024 * 1024);
    assert!(result.processed_size.is_none());
}

#[test]
fn size_mismatch_rejected_with_exact_message() {
    let content = "{\"name\":\"test\"}";
    let result = upload("test.json", content, content.len() + 10);

    assert!(!result.success);
    assert!(result.result_text.is_none());
    assert_eq!(result.error_message.as_deref(), Some(SIZE_MISMATCH_MESSAGE));
    assert_eq!(result.original_size, content.chars().count());
    assert!(result.processed_size.is_none());
}

#[test]
fn invalid_json_reports_prefixed_parser_message() {
    let content = "{\"name\":\"test\",\"value\":123,}";
    let result = upload("invalid.json", content, content.len());

    assert!(!result.success);
    assert!(result.result_text.is_none());
    assert!(result.error_message.unwrap().starts_with("JSON Parse Error: "));
    assert_eq!(result.original_size, content.len());
}

#[test]
fn empty_object_passes_through_unindented() {
    let result = upload("empty.json", "{}", 2);
    assert!(result.success);
    assert_eq!(result.result_text.as_deref(), Some("{}"));
    assert_eq!(result.processed_size, Some(2));
}

#[test]
fn json_array_file_is_accepted() {
    let content = "[1,2,3]";
    let result = upload("array.json", content, content.len());
    assert!(result.success);
    assert_eq!(result.result_text.as_deref(), Some("[\n  1,\n  2,\n  3\n]"));
}

#[test]
fn exactly_at_limit_is_not_rejected_for_size() {
    // 10 MB exactos de contenido (inválido): pasa la puerta de tamaño y
    // falla recién en el parseo.
    let content = "x".repeat(10 * 1024 * 1024);
    let result = upload("edge.json", &content, content.len());
    assert!(!result.success);
    assert!(result.error_message.unwrap().starts_with("JSON Parse Error: "));
}
