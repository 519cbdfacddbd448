// src/session.rs
//! ゲーム1回ぶんの状態をまるごと持つ `GameSession` だよ！🎮
//!
//! グローバルなシングルトンにはしない！入力側も描画側も、明示的に作った
//! セッションへの参照を受け取って使う方式。ライフサイクルが
//! `new → プレイ → reset か破棄` って一本道になって分かりやすいからね。
//!
//! 状態 (列と山札) の所有権は全部ここにある。外から見えるのは読み取り用の
//! ビューと、移動・ディール・リセットのリクエスト口だけ！

use log::info;

use crate::components::card::{Card, CardId};
use crate::components::stack::{DropTarget, Placement};
use crate::config::game::{Difficulty, SUIT_SLOT_COUNT};
use crate::logic::rules;
use crate::systems::deal_system;
use crate::systems::move_card_system::{self, MoveOutcome};

/// スパイダー1ゲームぶんのセッション。
pub struct GameSession {
    /// 場の10列。各 Vec の末尾が列の一番上！
    columns: Vec<Vec<Card>>,
    /// 山札。末尾の山が次に配られる。
    stock: Vec<Vec<Card>>,
    /// 現在の難易度。
    difficulty: Difficulty,
    /// これまでに完成・除去されたタブローの数 (0..=8)。
    completed_tableaus: usize,
}

impl GameSession {
    /// 新しいゲームを開始するよ！シャッフルして配り終えた状態で返ってくる。
    pub fn new(difficulty: Difficulty) -> Self {
        let (columns, stock) = deal_system::deal_initial(difficulty);
        info!("GameSession 開始！難易度 {:?}", difficulty);
        Self {
            columns,
            stock,
            difficulty,
            completed_tableaus: 0,
        }
    }

    /// ゲームをリセットして、新しい難易度で配り直すよ。
    /// 生きてるカードは全部ここで破棄される (タブロー除去以外で唯一の一括破棄！)。
    pub fn reset(&mut self, difficulty: Difficulty) {
        info!("GameSession リセット！新しい難易度 {:?}", difficulty);
        *self = Self::new(difficulty);
    }

    // === 判定系 (何も書き換えない！) ===

    /// カード `id` を (上に乗ってるカードごと) 持ち上げられるか。
    /// どの列にも居ないカードなら false。
    pub fn can_lift(&self, id: CardId) -> bool {
        match self.find_card(id) {
            Some((column, depth)) => rules::can_lift_at(&self.columns[column], depth),
            None => false,
        }
    }

    /// カード `moved` を、カード `target` の上に落とせるか。
    /// どちらかが場に居なければ false。
    pub fn can_drop_on_card(&self, moved: CardId, target: CardId) -> bool {
        let moved_card = match self.card(moved) {
            Some(card) => card,
            None => return false,
        };
        let (target_column, target_depth) = match self.find_card(target) {
            Some(found) => found,
            None => return false,
        };
        let column = &self.columns[target_column];
        rules::can_drop_on_card(moved_card, column, &column[target_depth])
    }

    /// カード `moved` を空の列 `column` に置けるか。
    pub fn can_drop_on_empty_column(&self, moved: CardId, column: usize) -> bool {
        let moved_card = match self.card(moved) {
            Some(card) => card,
            None => return false,
        };
        match self.columns.get(column) {
            Some(cards) => rules::can_drop_on_empty_column(moved_card, cards),
            None => false,
        }
    }

    // === 実行系 ===

    /// 検証済みの移動を実行するよ。呼ぶ前に必ず判定系で合法と確認しておくこと！
    /// (不正な移動のときは、そもそもこれを呼ばないのが契約。ここでは再検証しない)
    ///
    /// 移動後に移動先の列でタブロー完成チェックが走って、完成してたら
    /// 13枚除去＆完成カウントが増える。返り値で新しい位置と除去の有無が分かるよ。
    pub fn execute_move(&mut self, moved: CardId, target: DropTarget) -> MoveOutcome {
        let outcome = move_card_system::execute_move(&mut self.columns, moved, target);
        if outcome.tableau_removed {
            self.completed_tableaus += 1;
            info!(
                "完成タブロー {}個目！あと{}個で勝利！",
                self.completed_tableaus,
                SUIT_SLOT_COUNT - self.completed_tableaus
            );
        }
        outcome
    }

    /// 山札から1山配るよ。山札が空なら何も起きず false。
    pub fn deal_from_stock(&mut self) -> bool {
        deal_system::deal_from_stock(&mut self.columns, &mut self.stock)
    }

    // === 読み取り系 (描画・入力側が使うビュー) ===

    /// 現在の難易度。
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// 場の10列への読み取りアクセス。
    pub fn columns(&self) -> &[Vec<Card>] {
        &self.columns
    }

    /// id からカードを探す。場 (列) に居るカードだけが見つかるよ。
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.find_card(id)
            .map(|(column, depth)| &self.columns[column][depth])
    }

    /// カードの論理位置 `(列, 深さ)`。描画側はこれを座標に変換して使う。
    pub fn location_of(&self, id: CardId) -> Option<Placement> {
        self.find_card(id)
            .map(|(column, depth)| Placement::new(column, depth))
    }

    /// カード `id` から列の一番上までのスライス (ドラッグで一緒に動く連鎖)。
    /// 入力側が「掴んだカードと一緒に持ち上げる仲間」を知るために使うよ。
    pub fn run_from(&self, id: CardId) -> Option<&[Card]> {
        self.find_card(id)
            .map(|(column, depth)| &self.columns[column][depth..])
    }

    /// 残っている山札の数 (0..=5)。
    pub fn remaining_stock_piles(&self) -> usize {
        self.stock.len()
    }

    /// 場と山札に生きているカードの総数。
    /// 常に `104 - 13 × 完成タブロー数` になるはず！
    pub fn live_card_count(&self) -> usize {
        self.columns.iter().map(|c| c.len()).sum::<usize>()
            + self.stock.iter().map(|p| p.len()).sum::<usize>()
    }

    /// これまでに完成して除去されたタブローの数。
    pub fn completed_tableaus(&self) -> usize {
        self.completed_tableaus
    }

    /// 8個のタブローが全部完成したら勝ち！🏆
    pub fn is_won(&self) -> bool {
        self.completed_tableaus == SUIT_SLOT_COUNT
    }

    fn find_card(&self, id: CardId) -> Option<(usize, usize)> {
        move_card_system::find_card(&self.columns, id)
    }

    /// テスト用: 盤面を直接指定してセッションを組み立てるよ。
    #[cfg(test)]
    fn from_parts(columns: Vec<Vec<Card>>, stock: Vec<Vec<Card>>, difficulty: Difficulty) -> Self {
        Self {
            columns,
            stock,
            difficulty,
            completed_tableaus: 0,
        }
    }
}
