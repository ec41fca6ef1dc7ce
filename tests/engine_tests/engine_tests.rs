//! Tests for MemoryEngine
//!
//! These tests verify:
//! - Basic set/get/delete operations
//! - Overwrite semantics
//! - Empty-key handling
//! - Concurrent access patterns

use std::sync::Arc;
use std::thread;

use linekv::engine::{Engine, MemoryEngine};
use linekv::Context;

// =============================================================================
// Basic Operations Tests
// =============================================================================

#[test]
fn test_new_engine_is_empty() {
    let engine = MemoryEngine::new();
    assert!(engine.is_empty());
    assert_eq!(engine.len(), 0);
}

#[test]
fn test_engine_set_get() {
    let engine = MemoryEngine::new();
    let ctx = Context::background();

    engine.set(&ctx, "hello", "world");

    assert_eq!(engine.get(&ctx, "hello"), Some("world".to_string()));
}

#[test]
fn test_engine_get_nonexistent_key() {
    let engine = MemoryEngine::new();
    let ctx = Context::background();

    assert_eq!(engine.get(&ctx, "nonexistent"), None);
}

#[test]
fn test_engine_set_overwrite() {
    let engine = MemoryEngine::new();
    let ctx = Context::background();

    engine.set(&ctx, "key", "value1");
    engine.set(&ctx, "key", "value2");

    assert_eq!(engine.get(&ctx, "key"), Some("value2".to_string()));
    assert_eq!(engine.len(), 1);
}

#[test]
fn test_engine_delete() {
    let engine = MemoryEngine::new();
    let ctx = Context::background();

    engine.set(&ctx, "key", "value");
    assert_eq!(engine.get(&ctx, "key"), Some("value".to_string()));

    engine.delete(&ctx, "key");
    assert_eq!(engine.get(&ctx, "key"), None);
    assert!(engine.is_empty());
}

#[test]
fn test_engine_delete_nonexistent_key() {
    let engine = MemoryEngine::new();
    let ctx = Context::background();

    engine.set(&ctx, "other", "value");
    engine.delete(&ctx, "nonexistent");
    engine.delete(&ctx, "nonexistent");

    assert_eq!(engine.len(), 1);
    assert_eq!(engine.get(&ctx, "other"), Some("value".to_string()));
}

#[test]
fn test_engine_multiple_keys() {
    let engine = MemoryEngine::new();
    let ctx = Context::background();

    engine.set(&ctx, "key1", "value1");
    engine.set(&ctx, "key2", "value2");
    engine.set(&ctx, "key3", "value3");

    assert_eq!(engine.get(&ctx, "key1"), Some("value1".to_string()));
    assert_eq!(engine.get(&ctx, "key2"), Some("value2".to_string()));
    assert_eq!(engine.get(&ctx, "key3"), Some("value3".to_string()));
}

// =============================================================================
// Edge Cases
// =============================================================================

#[test]
fn test_engine_empty_key_is_ignored() {
    let engine = MemoryEngine::new();
    let ctx = Context::background();

    engine.set(&ctx, "", "empty_key_value");

    assert_eq!(engine.get(&ctx, ""), None);
    assert!(engine.is_empty());
}

#[test]
fn test_engine_empty_value() {
    let engine = MemoryEngine::new();
    let ctx = Context::background();

    engine.set(&ctx, "key", "");
    assert_eq!(engine.get(&ctx, "key"), Some(String::new()));
}

#[test]
fn test_engine_behind_trait_object() {
    let engine: Arc<dyn Engine> = Arc::new(MemoryEngine::default());
    let ctx = Context::background();

    engine.set(&ctx, "k", "v");
    assert_eq!(engine.get(&ctx, "k"), Some("v".to_string()));
}

// =============================================================================
// Concurrent Access Tests
// =============================================================================

#[test]
fn test_engine_concurrent_reads() {
    let engine = Arc::new(MemoryEngine::new());
    let ctx = Context::background();

    for i in 0..100 {
        engine.set(&ctx, &format!("key{}", i), &format!("value{}", i));
    }

    let mut handles = vec![];
    for _ in 0..8 {
        let engine_clone = Arc::clone(&engine);
        handles.push(thread::spawn(move || {
            let ctx = Context::background();
            for i in 0..100 {
                let key = format!("key{}", i);
                let expected = format!("value{}", i);
                assert_eq!(engine_clone.get(&ctx, &key), Some(expected));
            }
        }));
    }

    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn test_engine_concurrent_writes() {
    let engine = Arc::new(MemoryEngine::new());

    let mut handles = vec![];
    for t in 0..4 {
        let engine_clone = Arc::clone(&engine);
        handles.push(thread::spawn(move || {
            let ctx = Context::background();
            for i in 0..25 {
                let key = format!("thread{}_key{}", t, i);
                let value = format!("thread{}_value{}", t, i);
                engine_clone.set(&ctx, &key, &value);
            }
        }));
    }

    for handle in handles {
        handle.join().unwrap();
    }

    let ctx = Context::background();
    assert_eq!(engine.len(), 100);
    for t in 0..4 {
        for i in 0..25 {
            let key = format!("thread{}_key{}", t, i);
            let expected = format!("thread{}_value{}", t, i);
            assert_eq!(engine.get(&ctx, &key), Some(expected));
        }
    }
}

#[test]
fn test_engine_concurrent_writes_same_key() {
    let engine = Arc::new(MemoryEngine::new());

    let mut handles = vec![];
    for t in 0..16 {
        let engine_clone = Arc::clone(&engine);
        handles.push(thread::spawn(move || {
            let ctx = Context::background();
            engine_clone.set(&ctx, "shared", &format!("value{}", t));
        }));
    }

    for handle in handles {
        handle.join().unwrap();
    }

    let ctx = Context::background();
    let value = engine.get(&ctx, "shared").unwrap();
    let written: Vec<String> = (0..16).map(|t| format!("value{}", t)).collect();
    assert!(written.contains(&value), "unexpected value {}", value);
    assert_eq!(engine.len(), 1);
}

#[test]
fn test_engine_mixed_readers_and_writers() {
    let engine = Arc::new(MemoryEngine::new());
    engine.set(&Context::background(), "stable", "fixed");

    let mut handles = vec![];
    for t in 0..4 {
        let engine_clone = Arc::clone(&engine);
        handles.push(thread::spawn(move || {
            let ctx = Context::background();
            for i in 0..50 {
                let key = format!("w{}_{}", t, i);
                engine_clone.set(&ctx, &key, "x");
                engine_clone.delete(&ctx, &key);
            }
        }));
    }
    for _ in 0..4 {
        let engine_clone = Arc::clone(&engine);
        handles.push(thread::spawn(move || {
            let ctx = Context::background();
            for _ in 0..50 {
                assert_eq!(engine_clone.get(&ctx, "stable"), Some("fixed".to_string()));
            }
        }));
    }

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(engine.len(), 1);
}
