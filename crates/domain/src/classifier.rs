// crates/domain/src/classifier.rs
//! 行分類ステートマシン
//!
//! 設定されたマーカー（行コメント・ブロックコメント・継続マーカー）だけを手掛かりに、
//! 1 行ずつ [`Classification`] を返します。ブロックコメントと継続コメントの状態は
//! 行をまたいで保持されるため、ファイルごとに新しい [`Classifier`] を使うか
//! [`Classifier::reset`] を呼び出してください。

use crate::{
    classification::Classification,
    markers::{BlockStartScan, MarkerSet},
};

/// 行をまたいで保持される状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// 開いている構造なし（直前の行の分類を保持: Code / Whitespace / Comment）
    Idle(Classification),
    /// 継続マーカーで終わる行コメントの次の行
    Continuing,
    /// `pair` 番目のブロックコメントが閉じていない
    InBlock { pair: usize },
}

/// 同一行内の残り部分を処理した結果
enum Step {
    /// 行の分類が確定した
    Settled(Classification),
    /// マーカーの後ろ (行頭からのオフセット `at`) に残りがあるので続けて処理する
    Resume { at: usize, after_code: bool },
}

/// Per-file line classifier.
///
/// Borrows the run-wide [`MarkerSet`]; many classifiers can share one set.
#[derive(Debug, Clone)]
pub struct Classifier<'m> {
    markers: &'m MarkerSet,
    state: State,
    scan: BlockStartScan,
}

impl<'m> Classifier<'m> {
    pub fn new(markers: &'m MarkerSet) -> Self {
        Self { markers, state: State::Idle(Classification::Code), scan: BlockStartScan::default() }
    }

    /// 新しいファイルを処理する前に状態を初期化
    pub fn reset(&mut self) {
        self.state = State::Idle(Classification::Code);
    }

    /// Disposition carried into the next line.
    pub fn current(&self) -> Classification {
        match self.state {
            State::Idle(c) => c,
            State::Continuing => Classification::ContinuingComment,
            State::InBlock { .. } => Classification::BlockComment,
        }
    }

    pub fn is_in_block_comment(&self) -> bool {
        matches!(self.state, State::InBlock { .. })
    }

    /// End marker the classifier is waiting for, if a block comment is open.
    pub fn open_block_end(&self) -> Option<&'m str> {
        match self.state {
            State::InBlock { pair } => self.markers.block_markers().get(pair).map(|b| b.end.as_str()),
            _ => None,
        }
    }

    /// 1 行を分類し、次の行に引き継ぐ状態を更新する
    ///
    /// `line` には改行文字を含めないこと。
    pub fn classify(&mut self, line: &str) -> Classification {
        // 継続マーカーは本当の行末で判定するため、右側はトリムしない
        let line = trim_blank_start(line);

        match self.state {
            // 空行ではブロックコメントは閉じない
            State::InBlock { .. } if line.is_empty() => Classification::Whitespace,
            State::Continuing => self.continue_comment(line),
            _ if line.is_empty() => {
                self.state = State::Idle(Classification::Whitespace);
                Classification::Whitespace
            }
            _ => self.resolve(line),
        }
    }

    fn continue_comment(&mut self, line: &str) -> Classification {
        if line.is_empty() {
            self.state = State::Idle(Classification::Whitespace);
        } else if !self.markers.ends_with_continuation(line) {
            self.state = State::Idle(Classification::Comment);
        }
        self.current()
    }

    /// マーカーごとにカーソルを進めながら分類を確定させる
    ///
    /// 各反復でマーカーを 1 つ消費する。カーソルは行頭からの絶対オフセットで、
    /// ブロック開始位置の検索結果は [`BlockStartScan`] に残るため、見つからない
    /// マーカーを反復のたびに行末まで走査し直すことはない。
    fn resolve(&mut self, line: &str) -> Classification {
        self.scan.reset(self.markers);
        let mut cursor = 0;
        let mut code_seen = false;

        loop {
            let step = match self.state {
                State::InBlock { pair } => self.close_block(line, cursor, pair),
                _ => self.open_segment(line, cursor),
            };

            match step {
                Step::Settled(c) => return if code_seen { Classification::Code } else { c },
                Step::Resume { at, after_code } => {
                    code_seen |= after_code;
                    cursor = at;
                }
            }
        }
    }

    fn close_block(&mut self, line: &str, from: usize, pair: usize) -> Step {
        let end = self.markers.block_markers()[pair].end.as_str();
        let Some(offset) = line[from..].find(end) else {
            return Step::Settled(Classification::BlockComment);
        };

        self.state = State::Idle(Classification::Comment);
        let at = skip_blank(line, from + offset + end.len());
        if at == line.len() {
            Step::Settled(Classification::Comment)
        } else {
            Step::Resume { at, after_code: false }
        }
    }

    fn open_segment(&mut self, line: &str, from: usize) -> Step {
        let markers = self.markers;
        let segment = &line[from..];

        if markers.starts_with_line_marker(segment) {
            let c = if markers.ends_with_continuation(segment) {
                self.state = State::Continuing;
                Classification::ContinuingComment
            } else {
                self.state = State::Idle(Classification::Comment);
                Classification::Comment
            };
            return Step::Settled(c);
        }

        // 開始位置が `from` より後ならマーカーより前にコードがある
        if let Some((pos, pair)) = self.scan.earliest(markers, line, from) {
            return self.open_block(line, pos, pair, pos > from);
        }

        self.state = if markers.contains_line_marker(segment) && markers.ends_with_continuation(segment) {
            State::Continuing
        } else {
            State::Idle(Classification::Code)
        };
        Step::Settled(Classification::Code)
    }

    fn open_block(&mut self, line: &str, pos: usize, pair: usize, after_code: bool) -> Step {
        self.state = State::InBlock { pair };
        let start = self.markers.block_markers()[pair].start.as_str();
        let at = skip_blank(line, pos + start.len());

        if at < line.len() {
            return Step::Resume { at, after_code };
        }
        Step::Settled(if after_code { Classification::Code } else { Classification::BlockComment })
    }
}

/// Leading spaces and tabs only; other control characters count as content.
fn trim_blank_start(line: &str) -> &str {
    line.trim_start_matches([' ', '\t'])
}

/// Offset of the first non-blank byte at or after `from`.
fn skip_blank(line: &str, from: usize) -> usize {
    line.len() - trim_blank_start(&line[from..]).len()
}
