//! Snyk API クライアントのエラー型

use thiserror::Error;

/// Snyk API クライアントエラー
///
/// HTTP ステータスと転送層の失敗を、呼び出し側が分岐できる種別に
/// 対応付ける。リトライは行わず、1 回の呼び出しの結果をそのまま返す。
#[derive(Debug, Clone, Error)]
pub enum SnykApiError {
    /// 認証・認可の失敗（401 / 403）
    #[error("認証に失敗しました: {0}")]
    Auth(String),

    /// 機能がこの組織で利用できない（404）
    #[error("機能が利用できません: {0}")]
    FeatureUnavailable(String),

    /// エンドポイントが廃止されている（410）
    #[error("エンドポイントは廃止されています: {0}")]
    DeprecatedEndpoint(String),

    /// レスポンスボディの解析失敗
    #[error("レスポンスの解析に失敗しました: {0}")]
    Parse(String),

    /// ネットワークエラー（接続失敗、タイムアウト、切断）
    #[error("ネットワークエラー: {0}")]
    Transport(String),

    /// 予期しないエラー
    #[error("予期しないエラー: {0}")]
    Unexpected(String),
}

impl From<reqwest::Error> for SnykApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            SnykApiError::Parse(err.to_string())
        } else {
            SnykApiError::Transport(err.to_string())
        }
    }
}
