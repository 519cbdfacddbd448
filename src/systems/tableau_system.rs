// src/systems/tableau_system.rs
//! 完成した連鎖 (タブロー) の検出と除去をするシステムだよ！✨
//! K から A まで同スートで13枚綺麗に並んだら、その13枚を場から取り除く。

use itertools::Itertools;
use log::info;

use crate::components::card::Card;
use crate::config::game::RANK_COUNT;
use crate::logic::rules::is_run_link;

/// 列の一番上に「同スートで K→A まで13枚の完全な連鎖」ができていたら、
/// その13枚をまるごと取り除く。取り除いたら true を返すよ！
///
/// # 処理の流れ
/// 1. 列が13枚未満なら何もしない (false)
/// 2. 上から13枚の隣接ペアが全部 `is_run_link` を満たすかチェック
///    (13枚が1ずつ下がる連鎖なら、先頭は自動的に K、末尾は A になる！)
/// 3. 満たしていたら `truncate` でその13枚を破棄。カードの寿命はここで終わり！🪦
/// 4. 除去後に残った一番上のカードが裏向きだったら、表にめくる
///
/// 条件を満たさなければ何も書き換えずに false を返すだけ。
pub fn check_and_remove_tableau(column: &mut Vec<Card>) -> bool {
    if column.len() < RANK_COUNT {
        return false;
    }

    let start = column.len() - RANK_COUNT;
    let complete = column[start..]
        .iter()
        .tuple_windows()
        .all(|(lower, upper)| is_run_link(lower, upper));
    if !complete {
        return false;
    }

    let suit = column[start].suit;
    column.truncate(start);
    info!("🎉 {:?} のタブロー完成！13枚を場から除去したよ", suit);

    // 新しく一番上に出てきたカードが裏向きならめくる
    if let Some(top) = column.last_mut() {
        if !top.is_face_up {
            top.turn_face_up();
        }
    }
    true
}

// --- テスト ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::card::{Rank, Suit, ALL_RANKS};

    /// K から A まで降順に並んだ表向きの13枚を作るヘルパー。
    fn full_run(suit: Suit, first_id: usize) -> Vec<Card> {
        ALL_RANKS
            .iter()
            .rev() // King から Ace へ
            .enumerate()
            .map(|(i, &rank)| {
                let mut card = Card::new(first_id + i, suit, rank);
                card.turn_face_up();
                card
            })
            .collect()
    }

    #[test]
    fn removes_exactly_thirteen_cards() {
        // 裏向きの1枚の上に完全な連鎖13枚 → 13枚だけ消えて、下の1枚がめくれる
        let mut column = vec![Card::new(100, Suit::Heart, Rank::Two)];
        column.extend(full_run(Suit::Spade, 0));
        assert_eq!(column.len(), 14);

        let removed = check_and_remove_tableau(&mut column);

        assert!(removed, "完成した連鎖が検出されなかった！");
        assert_eq!(column.len(), 1, "除去される枚数が13枚じゃない！");
        assert_eq!(column[0].id, 100, "関係ないカードが消えてる！");
        assert!(column[0].is_face_up, "露出したカードがめくれてない！");
    }

    #[test]
    fn exact_thirteen_card_column_becomes_empty() {
        let mut column = full_run(Suit::Club, 0);
        assert!(check_and_remove_tableau(&mut column));
        assert!(column.is_empty(), "13枚ちょうどの列が空になってない！");
    }

    #[test]
    fn short_column_is_untouched() {
        // 12枚しかなければ (たとえ綺麗に並んでても) 何も起きない
        let mut column = full_run(Suit::Spade, 0);
        column.pop(); // Ace を抜いて12枚に
        let before = column.clone();

        assert!(!check_and_remove_tableau(&mut column));
        assert_eq!(column, before, "no-op のはずなのに列が変わってる！");
    }

    #[test]
    fn mixed_suit_run_is_not_a_tableau() {
        // 13枚降順でも、1枚だけスートが違ったらタブローじゃない！
        let mut column = full_run(Suit::Spade, 0);
        // 真ん中あたり (Seven) をハートに差し替え
        let pos = column.iter().position(|c| c.rank == Rank::Seven).unwrap();
        column[pos].suit = Suit::Heart;
        let before = column.clone();

        assert!(!check_and_remove_tableau(&mut column));
        assert_eq!(column.len(), before.len());
    }

    #[test]
    fn broken_rank_sequence_is_not_a_tableau() {
        // K,Q,J,...と来て途中でランクが飛んでたらダメ
        let mut column = full_run(Suit::Spade, 0);
        let pos = column.iter().position(|c| c.rank == Rank::Five).unwrap();
        column[pos].rank = Rank::Four; // Four が2枚、Five が0枚の崩れた並びに

        assert!(!check_and_remove_tableau(&mut column));
    }

    #[test]
    fn only_top_thirteen_are_inspected() {
        // 14枚以上の列では「上から13枚」だけを見る。
        // 下に余計なカードがあっても上の13枚が完全なら除去される！
        let mut column = vec![
            Card::new(100, Suit::Spade, Rank::Nine),
            Card::new(101, Suit::Spade, Rank::Four),
        ];
        column.extend(full_run(Suit::Heart, 0));

        assert!(check_and_remove_tableau(&mut column));
        assert_eq!(column.len(), 2);
        // 露出した Four がめくれてるはず
        assert!(column[1].is_face_up);
        // その下の Nine は裏のまま！(めくるのは露出した1枚だけ)
        assert!(!column[0].is_face_up, "露出してないカードまでめくれてる！");
    }

    #[test]
    fn already_face_up_exposed_card_stays_face_up() {
        let mut under = Card::new(100, Suit::Heart, Rank::Two);
        under.turn_face_up();
        let mut column = vec![under];
        column.extend(full_run(Suit::Spade, 0));

        assert!(check_and_remove_tableau(&mut column));
        assert!(column[0].is_face_up);
    }
}
