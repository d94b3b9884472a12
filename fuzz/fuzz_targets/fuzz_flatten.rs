#![no_main]
// SPDX-License-Identifier: MIT OR Apache-2.0
//! libFuzzer target for path flattening
//!
//! Tests:
//! - flatten -> unflatten roundtrip on arbitrary JSON
//! - Comparing a document with itself yields no differences
//! - Key renaming never changes the number of leaves

use keyscope_core::RootMap;
use keyscope_diff::{diff_documents, remap_keys};
use keyscope_paths::{FlattenOptions, leaves, unflatten};
use libfuzzer_sys::fuzz_target;
use serde_json::Value;

fuzz_target!(|data: &[u8]| {
    // Skip overly large inputs
    if data.len() > 100_000 {
        return;
    }

    let value: Value = match serde_json::from_slice(data) {
        Ok(v) => v,
        Err(_) => return, // Not valid JSON, skip
    };

    // === Contract: unflatten(leaves(v)) == v when the root has children ===
    let pairs = leaves(&value).map(|(path, leaf)| (path, leaf.clone()));
    let rebuilt = unflatten(pairs).expect("leaves of a document never conflict");
    let has_children = match &value {
        Value::Object(map) => !map.is_empty(),
        Value::Array(items) => !items.is_empty(),
        _ => false,
    };
    if has_children {
        assert_eq!(rebuilt, value, "flatten/unflatten roundtrip mismatch");
    }

    // === Contract: a document has no differences with itself ===
    for options in [FlattenOptions::default(), FlattenOptions::default().with_containers()] {
        assert!(diff_documents(&value, &value, &options).is_empty());
    }

    // === Contract: renaming keys keeps every leaf unless siblings collide ===
    let mapped = remap_keys(&value, &RootMap::legacy());
    assert!(leaves(&mapped).count() <= leaves(&value).count());
});
