// src/logic/deck.rs

use crate::components::card::{Card, ALL_RANKS};
use crate::config::game::{suit_pool, Difficulty, RANK_COUNT, SUIT_SLOT_COUNT, TOTAL_CARD_COUNT};
use rand::{seq::SliceRandom, thread_rng};

/// シャッフル済みの104枚のカード列を生成する関数だよ！🃏🎲
///
/// # 仕組み
/// 1. スロット値 0..103 の列を作る。スロット値 `v` は
///    「ランク = v % 13、スート = スートプールの v / 13 番目」という意味を持つよ。
/// 2. この列を Fisher-Yates (`SliceRandom::shuffle`) で一様シャッフル！
/// 3. 引き位置 `i` のカードをスロット値から組み立てる。id はそのまま `i`。
///
/// 返ってきた `Vec<Card>` は全部裏向き (`is_face_up: false`)！
/// どのカードをどこに積むかは `systems::deal_system` の仕事で、ここでは決めないよ。
pub fn create_shuffled_cards(difficulty: Difficulty) -> Vec<Card> {
    let pool = suit_pool(difficulty);
    debug_assert_eq!(pool.len(), SUIT_SLOT_COUNT);

    // スロット値の一様なランダム置換を作る
    let mut slots: Vec<usize> = (0..TOTAL_CARD_COUNT).collect();
    let mut rng = thread_rng(); // 乱数生成器を取得
    slots.shuffle(&mut rng);

    // 置換された各スロット値をカードに変換！ id は引き位置と同じ。
    slots
        .into_iter()
        .enumerate()
        .map(|(id, slot)| Card::new(id, pool[slot / RANK_COUNT], ALL_RANKS[slot % RANK_COUNT]))
        .collect()
}

// --- テスト ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::card::{Rank, Suit};
    use std::collections::HashSet;

    #[test]
    fn deck_creation() {
        let cards = create_shuffled_cards(Difficulty::Hard);

        // 1. カードが104枚あるかチェック！
        assert_eq!(cards.len(), TOTAL_CARD_COUNT);
        println!("生成されたカードの枚数: {}", cards.len());

        // 2. id が 0..103 で一意に振られているかチェック！
        let ids: HashSet<usize> = cards.iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), TOTAL_CARD_COUNT, "id に重複がある！");
        assert!(ids.iter().all(|&id| id < TOTAL_CARD_COUNT));

        // 3. すべてのカードが裏向きかチェック！
        let all_face_down = cards.iter().all(|card| !card.is_face_up);
        assert!(all_face_down, "生成直後に表向きのカードが含まれています！");

        println!("create_shuffled_cards のテスト、成功！🎉");
    }

    #[test]
    fn each_rank_appears_eight_times() {
        // どの難易度でも、各ランクはスート枠の数 (8回) ずつ出てくるはず！
        for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            let cards = create_shuffled_cards(difficulty);
            for rank in ALL_RANKS {
                let count = cards.iter().filter(|c| c.rank == rank).count();
                assert_eq!(
                    count, SUIT_SLOT_COUNT,
                    "{:?} で {:?} が {} 枚になってる！",
                    difficulty, rank, count
                );
            }
        }
    }

    #[test]
    fn easy_deck_is_single_suit() {
        let cards = create_shuffled_cards(Difficulty::Easy);
        assert!(
            cards.iter().all(|c| c.suit == Suit::Spade),
            "Easy なのにスペード以外が混ざってる！"
        );
    }

    #[test]
    fn hard_deck_has_all_suits() {
        let cards = create_shuffled_cards(Difficulty::Hard);
        // 4スート × 2枠 × 13ランク = 各スート26枚
        for suit in crate::components::card::ALL_SUITS {
            let count = cards.iter().filter(|c| c.suit == suit).count();
            assert_eq!(count, 26, "Hard で {:?} が {} 枚になってる！", suit, count);
        }
    }

    #[test]
    fn shuffle_is_statistically_uniform() {
        // シャッフルの一様性チェック (統計テスト) 📊
        // 引き位置0のカードのランクを大量に観測する。シャッフルが一様なら
        // 13種類のランクがだいたい同じ頻度 (trials / 13) で出てくるはず！
        const TRIALS: usize = 1300;
        let mut counts = [0usize; 13];
        for _ in 0..TRIALS {
            let cards = create_shuffled_cards(Difficulty::Easy);
            counts[cards[0].rank.value()] += 1;
        }

        let expected = TRIALS / 13; // = 100
        for (rank_value, &count) in counts.iter().enumerate() {
            // 期待値100に対してかなり緩い範囲で判定 (偶然落ちないように！)
            assert!(
                count > expected / 2 && count < expected * 2,
                "ランク値 {} の出現回数 {} が期待値 {} から離れすぎ！偏ったシャッフルかも？",
                rank_value,
                count,
                expected
            );
        }
        println!("シャッフル一様性テスト、成功！🎲 counts = {:?}", counts);
    }

    #[test]
    fn shuffle_changes_order() {
        // 2回生成したら (ほぼ確実に) 並びが変わるはず
        let first: Vec<(Suit, Rank)> = create_shuffled_cards(Difficulty::Hard)
            .iter()
            .map(|c| (c.suit, c.rank))
            .collect();
        let second: Vec<(Suit, Rank)> = create_shuffled_cards(Difficulty::Hard)
            .iter()
            .map(|c| (c.suit, c.rank))
            .collect();
        assert_ne!(first, second, "2回のシャッフルが同じ並び (稀に起こりうる)");
    }
}
