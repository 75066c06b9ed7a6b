//! Hardcoded UI strings.

/// Landing view.
pub mod landing {
    pub const TITLE: &str = "SSP フロントエンド";
    pub const DESCRIPTION: &str = "チャット体験のプレビューへ移動します。";
    pub const OPEN_CHAT: &str = "チャット画面を開く";
}

/// Chat view.
pub mod chat {
    pub const TITLE: &str = "チャット";
    pub const DESCRIPTION: &str = "回答が一文字ずつ打ち込まれるアニメーションで表示されます。メッセージを送信すると、アシスタントの返答がタイプライター風に再生されます。";
    pub const PLACEHOLDER: &str = "聞きたいことを入力...";
    pub const SEND: &str = "送信";
    pub const SENDING: &str = "送信中…";
    pub const SYSTEM_NOTE: &str = "※バックエンド接続が必要な場合は Responder の実装を差し替えてください。";
    pub const HELPER_TEXT: &str = "返答はタイプライター風に描画され、進捗バーと点滅カーソルで「打ち込み中」であることを視覚的に示します。";
    pub const ROLE_ASSISTANT: &str = "アシスタント";
    pub const ROLE_USER: &str = "あなた";
    pub const AVATAR_ASSISTANT: &str = "AI";
    pub const AVATAR_USER: &str = "You";
    pub const STATUS_READY: &str = "Ready";
    pub const STATUS_SENDING: &str = "Sending…";
    pub const STATUS_FAILED: &str = "Reply failed";
    /// Typing indicator shown while a reply is pending.
    pub const TYPING: &str = "入力中…";
}

/// Seed and canned transcript content.
pub mod transcript {
    /// Id of the greeting that seeds every session.
    pub const SEED_ID: &str = "system-hello";
    pub const SEED_GREETING: &str = "こんにちは！プロジェクトの進捗や次のステップについて知りたいことがあれば何でも聞いてください。";
    /// Reply returned by the mock responder regardless of input.
    pub const MOCK_REPLY: &str = "了解しました。進捗ログを確認し、タスク優先度に沿って次のアクションプランをまとめます。";
}
