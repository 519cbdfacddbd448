// src/logic/rules/drop.rs
//! 「このカード、ここに落としていい？」の判定を置くよ。🎯

use log::debug;

use super::common::is_card_stackable;
use crate::components::card::{Card, Rank};

/// `moved` を、`target_column` の一番上にある `target` の上に落とせるかチェックする。
///
/// - `target` がその列の一番上じゃなかったら問答無用で false！
///   (列の途中に割り込ませるドロップはそもそも提供しないルール)
/// - 一番上なら、`moved` のランクが `target` の1つ下かどうかだけで決まる。
///   スートは合ってなくてもOK！スート違いで重ねると後でまとめて動かせなくなるだけ。
pub fn can_drop_on_card(moved: &Card, target_column: &[Card], target: &Card) -> bool {
    let target_is_top = match target_column.last() {
        Some(top) => top == target, // Card の == は id 比較！
        None => false,
    };
    if !target_is_top {
        return false;
    }

    let allowed = is_card_stackable(moved, target);
    debug!(
        "[drop] {:?} を {:?} の上へ -> {}",
        moved.rank, target.rank, allowed
    );
    allowed
}

/// `moved` を空の列 `column` に置けるかチェックする。
///
/// 置けるのは King だけ！しかも本当に空の列だけ！
/// 1枚でもカードが残ってる列にこの判定で置くのはダメだよ。
pub fn can_drop_on_empty_column(moved: &Card, column: &[Card]) -> bool {
    column.is_empty() && moved.rank == Rank::King
}
