// src/logic/rules/mod.rs
//! スパイダーのルール判定モジュールをまとめるよ！
//! ここにあるのは全部「純粋な判定関数」で、状態は一切書き換えない。
//! 実際にカードを動かすのは `systems` 側の仕事！

pub mod common;
pub mod drop;
pub mod lift;


// 各モジュールから公開したい関数をここで再エクスポート！
pub use common::*;
pub use drop::*;
pub use lift::*;
