// src/logic/mod.rs
//! ゲームロジックの純粋関数たちを置くモジュールだよ！
//! (状態を持たない・書き換えない関数はここ、状態を動かすのは `systems`)

pub mod deck; // シャッフル済みカード列の生成 🎲
pub mod rules; // 移動の合法判定 ⚖️
