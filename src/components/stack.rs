// src/components/stack.rs

// serde を使うためにインポート！Serialize と Deserialize トレイトを使うよ。
use serde::{Deserialize, Serialize};

use crate::components::card::CardId;

/// ドラッグ中のカードを「どこに落とすか」を表す列挙型だよ。🎯
///
/// 入力側 (マウス/タッチを処理する側) がヒットテストの結果をこれに詰めて
/// エンジンに渡してくる想定。エンジン側は画面座標のことは何も知らない！
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DropTarget {
    /// どこかの列の一番上のカードの上に重ねる。中身はそのカードの id。
    Card(CardId),
    /// 空の列に置く。中身は列番号 (0-9)。
    EmptyColumn(usize),
}

/// カードの論理的な位置だよ。📍
///
/// - `column`: 何列目にいるか (0-9)
/// - `depth`: その列の下から何枚目か (0 が一番下)
///
/// 画面のどこに描くかは描画側が `(column, depth) -> 座標` の変換で勝手に決めること！
/// エンジンはこのペアを返すだけで、座標計算には一切関与しないよ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    /// カードが属している列の番号。
    pub column: usize,
    /// その列の中で、カードが下から何枚目に積まれているか (0 が一番下)。
    pub depth: usize,
}

impl Placement {
    /// 新しい Placement を作成するヘルパー関数。
    pub fn new(column: usize, depth: usize) -> Self {
        Self { column, depth }
    }
}
