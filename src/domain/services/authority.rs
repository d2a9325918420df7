//! # Authority Service
//!
//! 日付トークンごとの「権威ファイル」選定
//!
//! 期間が重複する複数のログファイルがある場合、ある日付の行を最も多く
//! 記録したファイルだけをその日付の情報源とし、二重計上を防ぐ。

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::path::Path;

use crate::domain::entities::line_date_token::LineDateToken;
use crate::domain::entities::log_file::LogFile;

/// (トークン × ファイル) ごとの行数カウンタ（スキャンフェーズ）
#[derive(Debug, Default)]
pub struct AuthorityCounts {
    counts: HashMap<LineDateToken, BTreeMap<LogFile, usize>>,
}

impl AuthorityCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// `file` 内で `token` の行を1つ数える
    pub fn record(&mut self, token: LineDateToken, file: &LogFile) {
        *self
            .counts
            .entry(token)
            .or_default()
            .entry(file.clone())
            .or_insert(0) += 1;
    }

    /// 指定トークン・ファイルの行数
    pub fn count(&self, token: &LineDateToken, file: &LogFile) -> usize {
        self.counts
            .get(token)
            .and_then(|files| files.get(file))
            .copied()
            .unwrap_or(0)
    }

    /// 観測されたトークンの種類数
    pub fn token_count(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// 選定フェーズ: トークンごとに行数最大のファイルを選ぶ
    ///
    /// 同数の場合はパスが辞書順で最小のファイルを採用する。
    pub fn select(&self) -> AuthorityMap {
        let winners = self
            .counts
            .iter()
            .filter_map(|(token, files)| {
                let mut best: Option<(&LogFile, usize)> = None;
                // BTreeMap はパス昇順なので、厳密に大きい場合のみ更新する
                for (file, &count) in files {
                    if best.map_or(true, |(_, c)| count > c) {
                        best = Some((file, count));
                    }
                }
                best.map(|(file, _)| (token.clone(), file.clone()))
            })
            .collect();

        AuthorityMap { winners }
    }
}

/// トークン → 権威ファイルの対応表
///
/// 1回の実行で一度だけ構築し、抽出フェーズではそのまま使う。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthorityMap {
    winners: HashMap<LineDateToken, LogFile>,
}

impl AuthorityMap {
    /// トークンの権威ファイル
    pub fn authority_for(&self, token: &LineDateToken) -> Option<&LogFile> {
        self.winners.get(token)
    }

    /// `path` が `token` の権威ファイルかどうか
    pub fn is_authority(&self, token: &LineDateToken, path: &Path) -> bool {
        self.authority_for(token)
            .is_some_and(|file| file.path() == path)
    }

    /// 少なくとも1つのトークンで勝ったファイル（パス順）
    pub fn authority_files(&self) -> Vec<&LogFile> {
        self.winners
            .values()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.winners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.winners.is_empty()
    }
}
