// src/logic/rules/common.rs
//! ルール判定で共通して使うヘルパー関数を置くよ。

use crate::components::card::Card;

/// `moved` を `target` の上に重ねられるか（ランクだけ見る版）。
///
/// `moved` のランクが `target` のちょうど1つ下なら true！
/// ここではスートは見ないのがポイント。置くだけなら色違い・スート違いでもOKで、
/// スートが揃ってるかどうかは「あとでまとめて動かせるか」にだけ効いてくるんだ。
pub fn is_card_stackable(moved: &Card, target: &Card) -> bool {
    moved.rank.is_one_below(target.rank)
}

/// `lower` の真上に `upper` が乗っている状態が「連鎖 (run)」として繋がっているか。
///
/// 条件は2つとも必須！
/// 1. `upper` のランクが `lower` のちょうど1つ下
/// 2. スートが同じ
///
/// この繋がりが列の一番上まで続いているカードだけが、まとめて持ち上げられるよ。
pub fn is_run_link(lower: &Card, upper: &Card) -> bool {
    is_card_stackable(upper, lower) && lower.suit == upper.suit
}
