// src/lib.rs
//! スパイダー・ソリティアのルールエンジンだよ！🕷️🃏
//!
//! このクレートは「ゲームの正しさ」だけを担当する。つまり:
//! - 列と山札の状態の所有 (`session::GameSession`)
//! - どの移動が合法かの判定 (`logic::rules`)
//! - 移動・ディール・タブロー除去の実行 (`systems`)
//! - 難易度に応じたシャッフルと初期配置 (`logic::deck` + `systems::deal_system`)
//!
//! 画面座標の計算、スプライト選び、マウスやタッチの処理は全部エンジンの外！
//! 描画側はカードの `{スート, ランク, 表裏}` と論理位置 `(列, 深さ)` を読んで、
//! 入力側は「持てる？」「置ける？」と聞いてから「動かして！」と頼むだけ。
//! エンジンの公開操作は全部同期で、呼んだら完了するまで返ってこないよ。

// 自分で作ったモジュールたち！ これでコードを整理してるんだ。
pub mod components; // カードと位置のデータ部品 🃏📍
pub mod config; // 盤面定数と難易度 🎚️
pub mod logic; // 純粋なルール判定とシャッフル ⚖️🎲
pub mod session; // セッション (状態の持ち主) 🎮
pub mod systems; // 状態を動かすシステム 🚚

// よく使う型はクレート直下から使えるように再エクスポート！
pub use components::card::{Card, CardId, Rank, Suit};
pub use components::stack::{DropTarget, Placement};
pub use config::game::Difficulty;
pub use session::GameSession;
pub use systems::move_card_system::MoveOutcome;
