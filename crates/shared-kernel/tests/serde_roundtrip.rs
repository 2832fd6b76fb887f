// crates/shared-kernel/tests/serde_roundtrip.rs
use line_tally_shared_kernel::{FileCount, LineCount};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct Wrapper {
    lines: LineCount,
    files: FileCount,
}

#[test]
fn counts_serialize_transparently() {
    let original = Wrapper { lines: LineCount::from(42), files: FileCount::from(3) };
    let json = serde_json::to_string(&original).expect("serializes");
    assert_eq!(json, r#"{"lines":42,"files":3}"#);
    let decoded: Wrapper = serde_json::from_str(&json).expect("deserializes");
    assert_eq!(decoded, original);
}
