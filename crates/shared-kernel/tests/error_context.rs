// crates/shared-kernel/tests/error_context.rs
use std::io;

use line_tally_shared_kernel::{ErrorContext, LineTallyError};

fn boom() -> std::result::Result<(), io::Error> {
    Err(io::Error::other("root-io"))
}

#[test]
fn context_wraps_and_formats() {
    let err = boom()
        .map_err(LineTallyError::from)
        .context("reading config")
        .unwrap_err();

    let display = err.to_string();
    assert!(display.contains("reading config"));
    assert!(display.contains("Output error:"));
}

#[test]
fn with_context_is_lazy_and_wraps_source() {
    let err = boom().with_context(|| format!("opening {}", "a.cpp")).unwrap_err();
    match err {
        LineTallyError::Context { context, source } => {
            assert_eq!(context, "opening a.cpp");
            assert!(matches!(*source, LineTallyError::Infrastructure(_)));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}
