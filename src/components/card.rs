// src/components/card.rs

// serde を使う宣言！カード情報をスナップショットとして外に渡す時に使うかも！
use serde::{Deserialize, Serialize};

/// カードを一意に識別するIDだよ！🔖
///
/// 配り（ディール）の時に 0 から順番に割り当てられて、そのカードが生きている間は
/// 絶対に他のカードと被らない。リセットで全カードが破棄された後なら再利用されてもOK！
pub type CardId = usize;

/// カードのスート（マーク）を表す列挙型だよ！♠️❤️♦️♣️
///
/// #[derive(...)] のおまじないも忘れずに！
/// - Debug: デバッグ表示用 (`println!("{:?}", suit);`)
/// - Clone, Copy: 簡単にコピーできるように
/// - PartialEq, Eq: 等しいか比較できるように (`==`)
/// - Hash: HashMap のキーとかで使えるように
/// - Serialize, Deserialize: JSON などに変換できるように
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Spade,   // ♠️
    Heart,   // ❤️
    Diamond, // ♦️
    Club,    // ♣️
}

/// カードのランク（数字）を表す列挙型だよ！ A, 2, 3, ..., K
///
/// Ace = 0 から King = 12 までの連番にしてあるのがポイント！
/// 「1つ小さいランクの上に重ねる」系の判定を整数の足し算でやりたいからね。
/// PartialOrd, Ord も付けて、ランクの大小比較 (`<`, `>`) もできるようにしておこう！👍
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Ace = 0, // A は 0 として扱うよ（一番小さいランク！）
    Two,     // 2
    Three,   // 3
    Four,    // 4
    Five,    // 5
    Six,     // 6
    Seven,   // 7
    Eight,   // 8
    Nine,    // 9
    Ten,     // 10
    Jack,    // J
    Queen,   // Q
    King,    // K (12 扱い。一番大きいランク！)
}

impl Rank {
    /// ランクを数値 (0-12) として取り出すヘルパーだよ。
    pub fn value(self) -> usize {
        self as usize
    }

    /// `self` が `other` のちょうど1つ下のランクかどうか。
    /// 例: Six.is_one_below(Seven) == true
    ///
    /// 足し算でチェックしてるから、King の隣に Ace が来る、みたいな
    /// 「一周回って隣」は絶対に true にならないよ！🙅‍♀️
    pub fn is_one_below(self, other: Rank) -> bool {
        (self as usize) + 1 == (other as usize)
    }
}

/// 全スートの配列。ループで回したい時に便利！
pub const ALL_SUITS: [Suit; 4] = [Suit::Spade, Suit::Heart, Suit::Diamond, Suit::Club];

/// 全ランクの配列。Ace から King まで順番通り！
pub const ALL_RANKS: [Rank; 13] = [
    Rank::Ace,
    Rank::Two,
    Rank::Three,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
];

/// カードそのものを表す構造体だよ！🃏
///
/// - `id`: カードの一意なID。「どのカードか」はこれで決まる！
/// - `suit`: カードのスート
/// - `rank`: カードのランク
/// - `is_face_up`: カードが表向きか裏向きかを示すフラグ (true なら表向き)
///
/// Copy は付けてないよ。カードの状態 (表裏) は変わる可能性があるから、
/// うっかり暗黙コピーした方をひっくり返しちゃう事故を防ぎたいの。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub suit: Suit,
    pub rank: Rank,
    pub is_face_up: bool, // カードが表向きかどうか
}

impl Card {
    /// 新しいカードを作るよ。作られた直後は必ず裏向き！
    pub fn new(id: CardId, suit: Suit, rank: Rank) -> Self {
        Self {
            id,
            suit,
            rank,
            is_face_up: false,
        }
    }

    /// カードを表向きにするよ。👀
    /// 逆方向 (表→裏) の操作は存在しない！一度めくったらめくりっぱなし！
    pub fn turn_face_up(&mut self) {
        self.is_face_up = true;
    }
}

// カードの等価比較は「同一性」！ id だけを見るよ。
// スパイダーだとスートとランクが同じカードが104枚の中に何枚もあるから、
// 構造的な比較 (フィールド全部比較) だと別カード同士が == になっちゃうの。危ない！⚠️
impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Card {}
