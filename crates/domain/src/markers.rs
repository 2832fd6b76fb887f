// crates/domain/src/markers.rs
//! Comment marker configuration shared by every classifier of a run.

use serde::{Deserialize, Serialize};

/// A `(start, end)` pair delimiting a block comment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockMarker {
    pub start: String,
    pub end: String,
}

impl BlockMarker {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self { start: start.into(), end: end.into() }
    }
}

/// Immutable set of literal comment markers.
///
/// All markers are matched as plain substrings. Order matters: when two
/// markers match at the same position the one configured first wins.
///
/// Empty strings are dropped on construction because an empty marker would
/// match everywhere without consuming input. Use [`MarkerSet::problems`] on
/// the raw lists to report them to the user instead.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkerSet {
    line: Vec<String>,
    block: Vec<BlockMarker>,
    continuation: Vec<String>,
}

impl MarkerSet {
    pub fn new<L, C>(line: L, block: Vec<BlockMarker>, continuation: C) -> Self
    where
        L: IntoIterator,
        L::Item: Into<String>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        Self {
            line: non_empty(line),
            block: block.into_iter().filter(|b| !b.start.is_empty() && !b.end.is_empty()).collect(),
            continuation: non_empty(continuation),
        }
    }

    /// Builds a set from parallel lists of block starts and ends, as written
    /// in the legacy `KEY = value` configuration format.
    ///
    /// Unpaired trailing entries are ignored here; [`MarkerSet::problems`]
    /// reports the mismatch.
    pub fn from_parallel_lists(
        line: Vec<String>,
        block_starts: Vec<String>,
        block_ends: Vec<String>,
        continuation: Vec<String>,
    ) -> Self {
        let block = block_starts.into_iter().zip(block_ends).map(|(s, e)| BlockMarker::new(s, e)).collect();
        Self::new(line, block, continuation)
    }

    pub fn line_markers(&self) -> &[String] {
        &self.line
    }

    pub fn block_markers(&self) -> &[BlockMarker] {
        &self.block
    }

    pub fn continuation_markers(&self) -> &[String] {
        &self.continuation
    }

    /// Returns `true` if `line` begins with any single-line marker.
    pub fn starts_with_line_marker(&self, line: &str) -> bool {
        self.line.iter().any(|m| line.starts_with(m.as_str()))
    }

    /// Returns `true` if `line` contains any single-line marker.
    pub fn contains_line_marker(&self, line: &str) -> bool {
        self.line.iter().any(|m| line.contains(m.as_str()))
    }

    /// Returns `true` if `line` ends with any continuation marker.
    pub fn ends_with_continuation(&self, line: &str) -> bool {
        self.continuation.iter().any(|m| line.ends_with(m.as_str()))
    }

    /// Collects configuration problems for the given raw marker lists.
    ///
    /// Works on the lists as the user wrote them (before empty entries are
    /// dropped), so every mistake can be reported at once.
    pub fn problems(
        line: &[String],
        block_starts: &[String],
        block_ends: &[String],
        continuation: &[String],
    ) -> Vec<String> {
        let mut problems = Vec::new();

        if block_starts.len() != block_ends.len() {
            problems.push(format!(
                "number of block comment starts ({}) and ends ({}) must be equal",
                block_starts.len(),
                block_ends.len()
            ));
        }

        let categories: [(&str, &[String]); 4] = [
            ("comment", line),
            ("block comment start", block_starts),
            ("block comment end", block_ends),
            ("continuation", continuation),
        ];

        for (name, markers) in categories {
            if markers.iter().any(String::is_empty) {
                problems.push(format!("empty {name} marker"));
            }
        }

        // Block starts and ends may legitimately share a marker (e.g. `"""`),
        // every other pairing of categories must be disjoint.
        let exclusive: [(usize, usize); 5] = [(0, 1), (0, 2), (0, 3), (1, 3), (2, 3)];
        for (a, b) in exclusive {
            let (name_a, list_a) = categories[a];
            let (name_b, list_b) = categories[b];
            for marker in list_a.iter().filter(|m| !m.is_empty()) {
                if list_b.contains(marker) {
                    problems.push(format!("marker '{marker}' is used both as {name_a} and {name_b} marker"));
                }
            }
        }

        problems
    }
}

/// Where a block start marker next occurs in the line being resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NextStart {
    Unsearched,
    At(usize),
    Absent,
}

/// Per-line cache of block start occurrences.
///
/// 各ブロック開始マーカーについて「次に現れる位置」(行頭からの絶対オフセット) を覚えておき、
/// カーソルがその位置を通り過ぎたマーカーだけを再検索する。マーカーごとの走査範囲は
/// 重ならないため、1 行の解決コストは行長 × 設定マーカー数で抑えられる。
#[derive(Debug, Clone, Default)]
pub struct BlockStartScan {
    next: Vec<NextStart>,
}

impl BlockStartScan {
    /// Forgets every cached position; call before resolving a new line.
    pub fn reset(&mut self, markers: &MarkerSet) {
        self.next.clear();
        self.next.resize(markers.block.len(), NextStart::Unsearched);
    }

    /// Earliest block start at or after byte offset `from` of `line`, as
    /// `(absolute offset, pair index)`.
    ///
    /// Ties on the offset go to the pair configured first. `from` must not
    /// decrease between calls for the same line.
    pub fn earliest(&mut self, markers: &MarkerSet, line: &str, from: usize) -> Option<(usize, usize)> {
        let mut best: Option<(usize, usize)> = None;

        for (idx, (slot, block)) in self.next.iter_mut().zip(&markers.block).enumerate() {
            let pos = match *slot {
                NextStart::Absent => continue,
                NextStart::At(pos) if pos >= from => pos,
                _ => match line[from..].find(block.start.as_str()) {
                    Some(offset) => {
                        *slot = NextStart::At(from + offset);
                        from + offset
                    }
                    None => {
                        *slot = NextStart::Absent;
                        continue;
                    }
                },
            };
            if best.is_none_or(|(best_pos, _)| pos < best_pos) {
                best = Some((pos, idx));
            }
        }

        best
    }
}

fn non_empty<I>(items: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    items.into_iter().map(Into::into).filter(|m: &String| !m.is_empty()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn empty_markers_are_dropped() {
        let set = MarkerSet::new(["//", ""], vec![BlockMarker::new("", "*/")], [""]);
        assert_eq!(set.line_markers(), ["//".to_string()]);
        assert!(set.block_markers().is_empty());
        assert!(set.continuation_markers().is_empty());
    }

    #[test]
    fn parallel_lists_are_zipped_in_order() {
        let set = MarkerSet::from_parallel_lists(
            strings(&["//"]),
            strings(&["/*", "<!--"]),
            strings(&["*/", "-->"]),
            vec![],
        );
        assert_eq!(set.block_markers(), [BlockMarker::new("/*", "*/"), BlockMarker::new("<!--", "-->")]);
    }

    fn earliest(set: &MarkerSet, line: &str) -> Option<(usize, usize)> {
        let mut scan = BlockStartScan::default();
        scan.reset(set);
        scan.earliest(set, line, 0)
    }

    #[test]
    fn earliest_block_start_prefers_position_then_order() {
        let set = MarkerSet::new(
            Vec::<String>::new(),
            vec![BlockMarker::new("/**", "**/"), BlockMarker::new("/*", "*/"), BlockMarker::new("{-", "-}")],
            Vec::<String>::new(),
        );
        assert_eq!(earliest(&set, "x {- /* y"), Some((2, 2)));
        // "/**" and "/*" both match at offset 2; the first configured pair wins.
        assert_eq!(earliest(&set, "x /** y"), Some((2, 0)));
        assert_eq!(earliest(&set, "plain"), None);
    }

    #[test]
    fn scan_reuses_positions_ahead_of_the_cursor() {
        let set = MarkerSet::new(
            Vec::<String>::new(),
            vec![BlockMarker::new("/*", "*/"), BlockMarker::new("<!--", "-->")],
            Vec::<String>::new(),
        );
        let line = "a /* b <!-- c /* d";
        let mut scan = BlockStartScan::default();
        scan.reset(&set);

        assert_eq!(scan.earliest(&set, line, 0), Some((2, 0)));
        assert_eq!(scan.next[1], NextStart::At(7));
        assert_eq!(scan.earliest(&set, line, 5), Some((7, 1)));
        assert_eq!(scan.next[0], NextStart::At(14));
        assert_eq!(scan.earliest(&set, line, 12), Some((14, 0)));
        assert_eq!(scan.next[1], NextStart::Absent);
        assert_eq!(scan.earliest(&set, line, 17), None);
        assert_eq!(scan.next, vec![NextStart::Absent, NextStart::Absent]);

        scan.reset(&set);
        assert_eq!(scan.next, vec![NextStart::Unsearched, NextStart::Unsearched]);
    }

    #[test]
    fn markers_are_literal_not_patterns() {
        let set = MarkerSet::new([".*"], vec![BlockMarker::new("(", ")")], ["$"]);
        assert!(set.starts_with_line_marker(".* comment"));
        assert!(!set.starts_with_line_marker("abc"));
        assert!(set.ends_with_continuation("foo $"));
        assert!(!set.ends_with_continuation("foo"));
        assert_eq!(earliest(&set, "(x"), Some((0, 0)));
    }

    #[test]
    fn problems_reports_unequal_block_lists() {
        let problems = MarkerSet::problems(&[], &strings(&["/*", "<!--"]), &strings(&["*/"]), &[]);
        assert_eq!(problems.len(), 1);
        assert!(problems[0].contains("(2) and ends (1)"));
    }

    #[test]
    fn problems_reports_shared_markers() {
        let problems = MarkerSet::problems(&strings(&["#"]), &[], &[], &strings(&["#"]));
        assert_eq!(problems, vec!["marker '#' is used both as comment and continuation marker".to_string()]);
    }

    #[test]
    fn problems_allow_identical_block_start_and_end() {
        let problems = MarkerSet::problems(&[], &strings(&["\"\"\""]), &strings(&["\"\"\""]), &[]);
        assert!(problems.is_empty());
    }

    #[test]
    fn problems_reports_empty_markers() {
        let problems = MarkerSet::problems(&strings(&[""]), &[], &[], &[]);
        assert_eq!(problems, vec!["empty comment marker".to_string()]);
    }
}
