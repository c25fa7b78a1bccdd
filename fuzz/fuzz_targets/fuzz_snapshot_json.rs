// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2026 Jonathan D.A. Jewell
//! Arbitrary JSON through snapshot parsing and the resolver

#![no_main]

use libfuzzer_sys::fuzz_target;
use wayfinder::resolver::{explain, resolve, Decision};
use wayfinder::types::WorkspaceSnapshot;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(snapshot) = WorkspaceSnapshot::from_json(text) else {
        return;
    };

    let decision = resolve(&snapshot);
    assert_eq!(decision, explain(&snapshot).decision);
    assert_eq!(decision, resolve(&snapshot));

    match decision {
        Decision::ShowLoading => assert!(snapshot.loading),
        Decision::RedirectTo(path) => {
            assert!(!snapshot.loading);
            assert!(path.starts_with('/'));
        }
    }

    // Parsed snapshots must survive a trip back through JSON unchanged
    let json = serde_json::to_string(&snapshot).unwrap();
    assert_eq!(WorkspaceSnapshot::from_json(&json).unwrap(), snapshot);
});
