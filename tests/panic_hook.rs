use std::{
    panic,
    sync::atomic::{AtomicUsize, Ordering},
    thread,
};

use serde_json::Value;
use syntaxtour::{CaseResult, ExampleCase, Verifier};

static ORIGINAL_HOOK_CALLS: AtomicUsize = AtomicUsize::new(0);

fn panics() -> CaseResult {
    let empty: Vec<Value> = Vec::new();
    Ok(empty[0].clone())
}

#[test]
fn concurrent_quiet_runs_restore_the_original_hook() {
    panic::set_hook(Box::new(|_| {
        ORIGINAL_HOOK_CALLS.fetch_add(1, Ordering::SeqCst);
    }));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            thread::spawn(|| {
                let cases = [ExampleCase::new("panics", "hooks", "", panics)];
                Verifier::new().with_quiet_panics(true).run(&cases)
            })
        })
        .collect();
    for handle in handles {
        let report = handle.join().expect("verifier thread");
        assert_eq!(report.failed, 1);
    }
    assert_eq!(ORIGINAL_HOOK_CALLS.load(Ordering::SeqCst), 0);

    let _ = panic::catch_unwind(|| panic!("after every quiet run"));
    assert_eq!(ORIGINAL_HOOK_CALLS.load(Ordering::SeqCst), 1);

    let _ = panic::take_hook();
}
