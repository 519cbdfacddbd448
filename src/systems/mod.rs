// src/systems/mod.rs
//! 状態を実際に動かすシステムたちを置くモジュールだよ！
//! 判定 (logic::rules) と実行 (ここ) はきっちり分ける！

pub mod deal_system; // 初期配置と山札からのディール 🎴
pub mod move_card_system; // 検証済みの移動の実行 🖱️
pub mod tableau_system; // 完成した連鎖の検出と除去 ✨
