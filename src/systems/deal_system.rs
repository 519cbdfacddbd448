// src/systems/deal_system.rs
//! カードを配るシステムだよ！🎴
//! ゲーム開始時の初期配置 (列10 + 山札5) と、プレイ中の「山札から1山配る」の
//! 両方をここでやる。シャッフル自体は `logic::deck` に任せてる！

use log::{info, warn};

use crate::components::card::Card;
use crate::config::game::{Difficulty, COLUMN_COUNT, STOCK_PILE_COUNT};
use crate::logic::deck::create_shuffled_cards;

/// ゲームの初期カード配置を実行する関数だよ！🎉
///
/// # 処理の流れ
/// 1. シャッフル済みの104枚 (`create_shuffled_cards`) を用意する。
/// 2. 引き位置の大きい方から50枚を、5つの山札に10枚ずつ順番に積む。
///    山札のカードは全部裏向きのまま！
/// 3. 残りの54枚を、列0から順にラウンドロビンで10列に配っていく。
///    54枚だから列0〜3は6枚、列4〜9は5枚になるよ。
/// 4. 最後に配られる10枚 (id が 0..9 のカード) は、置いた瞬間に表向きにする。
///    ラウンドロビンの巡り合わせで、ちょうど各列の一番上に1枚ずつ来るんだ！✨
///
/// 返り値は `(列の配列, 山札の配列)`。
pub fn deal_initial(difficulty: Difficulty) -> (Vec<Vec<Card>>, Vec<Vec<Card>>) {
    let mut cards = create_shuffled_cards(difficulty);

    // --- 山札 (Stock) への配置 ---
    // Vec の末尾 = 引き位置の一番大きいカード、なので pop で順に取り出す。
    let mut stock: Vec<Vec<Card>> = Vec::with_capacity(STOCK_PILE_COUNT);
    for _ in 0..STOCK_PILE_COUNT {
        let mut pile = Vec::with_capacity(COLUMN_COUNT);
        for _ in 0..COLUMN_COUNT {
            pile.push(cards.pop().expect("カードが足りない！(山札の配置中)"));
        }
        stock.push(pile);
    }

    // --- 場の列 (Column) への配置 ---
    let mut columns: Vec<Vec<Card>> = vec![Vec::new(); COLUMN_COUNT];
    let mut column_index = 0;
    while let Some(mut card) = cards.pop() {
        // 最後の10枚 (id 0..9) は配った瞬間に表向き！各列の一番上になる。
        if card.id < COLUMN_COUNT {
            card.turn_face_up();
        }
        columns[column_index].push(card);
        column_index = (column_index + 1) % COLUMN_COUNT;
    }

    info!(
        "🃏 初期配置完了！難易度 {:?}、列 {}本 + 山札 {}山",
        difficulty,
        columns.len(),
        stock.len()
    );
    (columns, stock)
}

/// 山札から1山 (10枚) を場に配るよ！
///
/// 残っている中で一番新しい山 (`stock` の末尾) を取り出して、
/// その `j` 番目のカードを列 `j` の一番上に積む。配ったカードは
/// 列の状態に関係なく必ず表向き！(既に表向きのカードの上でもめくって置く)
///
/// 山札が空っぽなら何もしないで false。これはエラーじゃなくて
/// 「何も起きなかった」だけだよ。
pub fn deal_from_stock(columns: &mut [Vec<Card>], stock: &mut Vec<Vec<Card>>) -> bool {
    let pile = match stock.pop() {
        Some(pile) => pile,
        None => {
            warn!("山札が空なので配れないよ！(no-op)");
            return false;
        }
    };

    for (column, mut card) in columns.iter_mut().zip(pile) {
        card.turn_face_up();
        column.push(card);
    }
    info!("🎴 山札から1山配った！残り {}山", stock.len());
    true
}
