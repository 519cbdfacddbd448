// src/config/game.rs
//! ゲームの盤面サイズに関する定数と、難易度の定義を置くよ！
//! 列の数、山札の数、使うスートの構成など。

use itertools::{repeat_n, Itertools};
use serde::{Deserialize, Serialize};

use crate::components::card::{Suit, ALL_SUITS};

/// 場の列 (tableau column) の数。スパイダーは10列固定！
pub const COLUMN_COUNT: usize = 10;

/// 山札 (stock pile) の数。1つの山に各列へ1枚ずつ、計10枚入ってる。
pub const STOCK_PILE_COUNT: usize = 5;

/// ランクの種類数。A から K までで13！
pub const RANK_COUNT: usize = 13;

/// スート枠の総数。難易度に関わらず、重複込みで8枠 (= デッキ2組分)。
pub const SUIT_SLOT_COUNT: usize = 8;

/// ゲーム全体のカード総数。13ランク × 8スート枠 = 104枚！
pub const TOTAL_CARD_COUNT: usize = RANK_COUNT * SUIT_SLOT_COUNT;

/// 最初に山札へ積まれるカードの枚数。5山 × 10枚 = 50枚。
pub const STOCK_CARD_COUNT: usize = STOCK_PILE_COUNT * COLUMN_COUNT;

/// ゲームの難易度だよ。使うスートの種類数が変わる！
///
/// - Easy: 1種類だけ (同じスートばっかりだから連鎖が作りやすい！)
/// - Medium: 2種類
/// - Hard: 4種類全部 (地獄！😈)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// 難易度に応じたスートプール (8枠) を作るよ。
///
/// 枠 `s` のカードは全部このプールの `s` 番目のスートになる。
/// どの難易度でも長さはきっかり `SUIT_SLOT_COUNT` (8) ！
pub fn suit_pool(difficulty: Difficulty) -> Vec<Suit> {
    match difficulty {
        // スペード8枠
        Difficulty::Easy => repeat_n(Suit::Spade, 8).collect(),
        // スペード4枠 + ハート4枠
        Difficulty::Medium => repeat_n(Suit::Spade, 4)
            .chain(repeat_n(Suit::Heart, 4))
            .collect(),
        // 4スート × 2枠ずつ
        Difficulty::Hard => ALL_SUITS
            .iter()
            .flat_map(|&suit| repeat_n(suit, 2))
            .collect_vec(),
    }
}
