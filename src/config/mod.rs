// src/config/mod.rs

// 設定・定数まわりのサブモジュールを宣言するよ！
pub mod game; // 盤面サイズの定数と難易度 🎚️
