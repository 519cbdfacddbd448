// src/systems/move_card_system.rs
//! 検証済みのカード移動を実際に実行するシステムだよ！🖱️💨
//! 「動かしていいか」の判定はルール層 (`logic::rules`) の仕事で、
//! ここは「もう合法だと分かってる移動」を状態に反映するだけ！

use log::debug;

use crate::components::card::{Card, CardId};
use crate::components::stack::{DropTarget, Placement};
use crate::systems::tableau_system;

/// 移動を実行した結果だよ。
///
/// `placement` は動かしたカード (連鎖の先頭) の新しい論理位置。
/// 描画側はこれを受け取って、自分の座標計算で画面に反映する。
/// `tableau_removed` は、この移動で移動先の列にタブローが完成して
/// 13枚除去されたかどうか。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub placement: Placement,
    pub tableau_removed: bool,
}

/// `moved` と、その上に積まれてるカード全部 (連鎖) を `target` へ動かすよ。
///
/// # 前提 (呼び出し側の契約！)
/// - 移動の合法性は呼び出し前に `logic::rules` で検証済みであること。
///   ここでは再検証しない！
/// - `moved` は必ずどこかの列に生きていること。どの列にも居なかったら、
///   それは描画側とエンジンの状態がズレてるバグなので panic するよ。💥
///
/// # 処理の流れ
/// 1. `moved` の居る列を探して、そこから上を丸ごと切り離す (順序は保ったまま！)
/// 2. 移動元の列に残った一番上のカードが裏向きならめくる
/// 3. 切り離した連鎖を移動先の列の上に積む
/// 4. 移動先の列でタブロー完成チェック！
pub fn execute_move(
    columns: &mut [Vec<Card>],
    moved: CardId,
    target: DropTarget,
) -> MoveOutcome {
    // --- 1. 移動元の特定と連鎖の切り離し ---
    let (source_column, source_depth) = find_card(columns, moved)
        .unwrap_or_else(|| panic!("カード {} がどの列にも居ない！状態がズレてるよ！", moved));
    let run: Vec<Card> = columns[source_column].split_off(source_depth);
    debug!(
        "[move] 列{} の depth{} から {}枚を切り離し",
        source_column,
        source_depth,
        run.len()
    );

    // --- 2. 移動元で新しく露出したカードをめくる ---
    if let Some(top) = columns[source_column].last_mut() {
        if !top.is_face_up {
            top.turn_face_up();
        }
    }

    // --- 3. 移動先の列に連鎖を積む ---
    let dest_column = match target {
        DropTarget::Card(target_id) => {
            find_card(columns, target_id)
                .unwrap_or_else(|| {
                    panic!("ドロップ先カード {} がどの列にも居ない！状態がズレてるよ！", target_id)
                })
                .0
        }
        DropTarget::EmptyColumn(index) => index,
    };
    let dest_depth = columns[dest_column].len();
    columns[dest_column].extend(run);

    // --- 4. 移動先でタブロー完成チェック ---
    let tableau_removed = tableau_system::check_and_remove_tableau(&mut columns[dest_column]);

    MoveOutcome {
        placement: Placement::new(dest_column, dest_depth),
        tableau_removed,
    }
}

/// 全列から id でカードを探して `(列番号, 深さ)` を返すヘルパー。
pub(crate) fn find_card(columns: &[Vec<Card>], id: CardId) -> Option<(usize, usize)> {
    columns.iter().enumerate().find_map(|(column_index, column)| {
        column
            .iter()
            .position(|card| card.id == id)
            .map(|depth| (column_index, depth))
    })
}
