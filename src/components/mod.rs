// src/components/mod.rs

// この components モジュールに属するサブモジュールを宣言するよ！
pub mod card; // カードそのもの (Suit, Rank, Card) 🃏
pub mod stack; // カードの置き場所まわり (DropTarget, Placement) 📍

// 他のデータ部品が増えたら、ここに `pub mod xxx;` を追加していく感じ！整理整頓！🧹✨
