//! Paridad de contrato del backend de historial en memoria.

use json_core::history::{HistoryStore, InMemoryHistoryStore, NewHistoryRecord};
use json_core::model::{JsonOperation, ProcessRequest};
use json_core::transform::process;

fn record_for(content: &str, operation: JsonOperation) -> NewHistoryRecord {
    let result = process(&ProcessRequest::new(content, operation));
    NewHistoryRecord::from_result(content, &result)
}

#[test]
fn empty_store_lists_nothing() {
    let store = InMemoryHistoryStore::default();
    assert!(store.list().unwrap().is_empty());
}

#[test]
fn append_assigns_increasing_ids_and_timestamps() {
    let mut store = InMemoryHistoryStore::default();
    let first = store.append(record_for("{\"a\":1}", JsonOperation::Format)).unwrap();
    let second = store.append(record_for("{\"b\":2}", JsonOperation::Minify)).unwrap();
    assert!(second.id > first.id);
    assert!(second.created_at >= first.created_at);
}

#[test]
fn list_returns_newest_first_with_id_tiebreak() {
    let mut store = InMemoryHistoryStore::default();
    store.append(record_for("{\"a\":1}", JsonOperation::Format)).unwrap();
    store.append(record_for("{\"b\":2}", JsonOperation::Minify)).unwrap();
    store.append(record_for("{\"c\":3}", JsonOperation::SortKeys)).unwrap();

    let listed = store.list().unwrap();
    assert_eq!(listed.len(), 3);
    assert_eq!(listed[0].operation, "sort-keys");
    assert_eq!(listed[1].operation, "minify");
    assert_eq!(listed[2].operation, "format");
    // Aunque los tres timestamps colisionen, el id desc mantiene el orden.
    assert!(listed[0].id > listed[1].id && listed[1].id > listed[2].id);
}

#[test]
fn failed_invocations_are_recorded_verbatim() {
    let mut store = InMemoryHistoryStore::default();
    let stored = store.append(record_for("{\"a\":1,}", JsonOperation::Format)).unwrap();
    assert!(!stored.success);
    assert_eq!(stored.original_content, "{\"a\":1,}");
    assert!(stored.processed_content.is_none());
    assert!(stored.processed_size.is_none());
    assert!(stored.error_message.is_some());
    assert_eq!(stored.operation, "format");
}
