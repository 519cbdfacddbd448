// src/logic/rules/lift.rs
//! 「このカード、持ち上げていい？」の判定を置くよ。✋

use itertools::Itertools;
use log::debug;

use super::common::is_run_link;
use crate::components::card::Card;

/// 列 `column` の `index` 番目のカードを（その上に乗ってるカードごと）
/// 持ち上げられるかチェックする。純粋な判定関数で、何も書き換えないよ！
///
/// # ルール
/// - 裏向きのカードは絶対に持ち上げられない 🙅‍♀️
/// - 列の一番上のカードなら、表向きでさえあればOK
/// - 途中のカードなら、そこから一番上まで「同スートで1ずつ下がる連鎖」が
///   切れ目なく続いていないとダメ！1ペアでも崩れてたら false！
pub fn can_lift_at(column: &[Card], index: usize) -> bool {
    let card = match column.get(index) {
        Some(card) => card,
        None => return false,
    };

    // 裏向きカードはそもそも動かせない！
    if !card.is_face_up {
        return false;
    }

    // index から列の一番上まで、隣接ペアが全部連鎖として繋がっているか。
    // 一番上のカード (ペアなし) なら all は自明に true になるよ。
    let liftable = column[index..]
        .iter()
        .tuple_windows()
        .all(|(lower, upper)| is_run_link(lower, upper));

    debug!(
        "[lift] {:?} の {:?} (depth {}) を持ち上げ判定 -> {}",
        card.suit, card.rank, index, liftable
    );
    liftable
}
