// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2026 Jonathan D.A. Jewell
//! Base path normalisation never produces a trailing or doubled slash

#![no_main]

use libfuzzer_sys::fuzz_target;
use wayfinder::paths::{normalize_base_path, with_base_path, OVERVIEW_PATH};

fuzz_target!(|base: &str| {
    let normalized = normalize_base_path(base);
    if !normalized.is_empty() {
        assert!(normalized.starts_with('/'));
        assert!(!normalized.ends_with('/'));
    }
    assert_eq!(normalize_base_path(&normalized), normalized);

    let path = with_base_path(base, OVERVIEW_PATH);
    assert!(path.ends_with(OVERVIEW_PATH));
    assert!(!path.starts_with("//"));
});
