//! # CLI エラーハンドリング
//!
//! 設定・出力・API の各エラーを 1 つの集約型にまとめ、終了時の
//! メッセージと改善ヒントへ対応付ける。終了コードは成功 0 / 失敗 1 の
//! 2 値のみで、種別はメッセージで区別する。

use tabane_client::SnykApiError;
use thiserror::Error;

/// 設定解決のエラー
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    /// 明示されたファイルが存在しない（404 ではなく起動前の検出）
    #[error("設定ファイル '{0}' が見つかりません")]
    FileNotFound(String),

    /// ファイルの読み込み失敗（権限不足など）
    #[error("設定ファイル '{path}' を読み込めません: {detail}")]
    Read { path: String, detail: String },

    /// JSON の解析失敗
    #[error("設定ファイル '{path}' の解析に失敗しました: {detail}")]
    Parse { path: String, detail: String },

    /// どのソースからも API トークンが得られなかった
    #[error("API トークンが設定されていません")]
    MissingToken,

    /// どのソースからも組織 ID が得られなかった
    #[error("組織 ID が設定されていません")]
    MissingOrgId,
}

/// 出力書き込みのエラー
#[derive(Debug, Error)]
pub enum OutputError {
    /// 書き出し失敗（ディレクトリ不存在、権限不足など）
    #[error("'{path}' への書き込みに失敗しました: {source}")]
    Write {
        path:   String,
        #[source]
        source: std::io::Error,
    },
}

/// CLI 全体の集約エラー
///
/// `main` はこの型だけを受け取り、表示とプロセス終了コードに変換する。
#[derive(Debug, Error)]
pub enum CliError {
    /// 設定エラー
    #[error("設定エラー: {0}")]
    Config(#[from] ConfigError),

    /// Snyk API エラー
    #[error("API エラー: {0}")]
    Api(#[from] SnykApiError),

    /// 出力エラー
    #[error("出力エラー: {0}")]
    Output(#[from] OutputError),
}

impl CliError {
    /// エラー種別ごとの改善ヒント
    ///
    /// メッセージ本体がエラーの事実を伝えるのに対し、ヒントは次に
    /// 取るべき操作を示す。該当する操作がない種別は `None`。
    pub fn remediation(&self) -> Option<&'static str> {
        match self {
            CliError::Config(ConfigError::MissingToken) => Some(
                "--token オプション、設定ファイルの api_token、または環境変数 SNYK_TOKEN で指定してください",
            ),
            CliError::Config(ConfigError::MissingOrgId) => Some(
                "--org オプション、設定ファイルの org_id、または環境変数 SNYK_ORG_ID で指定してください",
            ),
            CliError::Config(_) => None,
            CliError::Api(SnykApiError::Auth(_)) => {
                Some("API トークンと組織 ID の組み合わせが正しいか確認してください")
            }
            CliError::Api(SnykApiError::DeprecatedEndpoint(_)) => {
                Some("tabane を新しいバージョンに更新してください")
            }
            CliError::Api(SnykApiError::Transport(_)) => {
                Some("ネットワーク接続と api_base の設定を確認してください")
            }
            CliError::Api(_) => None,
            CliError::Output(_) => {
                Some("書き出し先ディレクトリの存在と書き込み権限を確認してください")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_トークン未設定のヒントに供給源を列挙する() {
        let error = CliError::Config(ConfigError::MissingToken);

        let hint = error.remediation().unwrap();

        assert!(hint.contains("--token"));
        assert!(hint.contains("SNYK_TOKEN"));
    }

    #[test]
    fn test_authエラーにヒントを返す() {
        let error = CliError::Api(SnykApiError::Auth("401".to_string()));

        assert!(error.remediation().is_some());
    }

    #[test]
    fn test_feature_unavailableはヒントなし() {
        // メッセージ本体が呼び出し箇所ごとの説明を持つため、追加ヒントは不要
        let error = CliError::Api(SnykApiError::FeatureUnavailable("説明".to_string()));

        assert_eq!(error.remediation(), None);
    }

    #[test]
    fn test_設定エラーのメッセージにプレフィックスが付く() {
        let error = CliError::Config(ConfigError::MissingToken);

        assert_eq!(error.to_string(), "設定エラー: API トークンが設定されていません");
    }

    #[test]
    fn test_apiエラーのメッセージにプレフィックスが付く() {
        let error = CliError::Api(SnykApiError::Transport("connection refused".to_string()));

        assert_eq!(
            error.to_string(),
            "API エラー: ネットワークエラー: connection refused"
        );
    }
}
