//! # CLI 設定
//!
//! コマンドライン引数、JSON 設定ファイル、環境変数の 3 ソースを
//! 1 つの不変な実行設定にマージする。優先順位は
//! 引数 > 設定ファイル > 環境変数。
//!
//! 解決はネットワークアクセスより前に完了し、以降の工程は
//! [`AppConfig`] だけを参照する。

use std::{
    env,
    fmt,
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;

use crate::{args::CliArgs, error::ConfigError};

/// 設定ファイルのデフォルトパス（カレントディレクトリ基準）
pub const DEFAULT_CONFIG_PATH: &str = "config.json";

/// Snyk API ホストのデフォルト
pub const DEFAULT_API_BASE: &str = "https://api.snyk.io";

/// API トークンの環境変数名
const ENV_TOKEN: &str = "SNYK_TOKEN";

/// 組織 ID の環境変数名
const ENV_ORG_ID: &str = "SNYK_ORG_ID";

/// JSON 設定ファイルの内容
///
/// すべてのキーが省略可能。引数で与えられなかった値の供給源になる。
/// 未知のキーは無視する。
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    pub api_token:       Option<String>,
    pub org_id:          Option<String>,
    pub collection_name: Option<String>,
    pub api_base:        Option<String>,
}

/// 環境変数から読み取った認証情報
///
/// 空文字列が設定されている場合は未設定として扱う。
#[derive(Debug, Clone, Default)]
pub(crate) struct EnvCredentials {
    pub token:  Option<String>,
    pub org_id: Option<String>,
}

impl EnvCredentials {
    fn from_env() -> Self {
        Self {
            token:  env::var(ENV_TOKEN).ok().filter(|v| !v.is_empty()),
            org_id: env::var(ENV_ORG_ID).ok().filter(|v| !v.is_empty()),
        }
    }
}

/// 解決済みの実行設定
///
/// 構築後は変更しない。全工程がこの 1 つの値を参照する。
#[derive(Clone)]
pub struct AppConfig {
    /// Snyk API トークン
    pub token: String,
    /// 組織 ID
    pub org_id: String,
    /// プロジェクト名のプレフィックスフィルタ
    pub prefix: String,
    /// 束ね先の Collection 名（`None` なら Collection 操作をスキップ）
    pub collection_name: Option<String>,
    /// Snyk API ホスト
    pub api_base: String,
    /// プロジェクト ID の書き出し先（`None` なら書き出しなし）
    pub output: Option<PathBuf>,
    /// レガシー v1 一覧からも取得するか
    pub include_legacy: bool,
    /// ドライラン（API 呼び出しなし）
    pub dry_run: bool,
}

impl AppConfig {
    /// 3 ソースから実行設定を解決する
    ///
    /// # 引数
    ///
    /// - `args`: パース済みのコマンドライン引数
    ///
    /// # 戻り値
    ///
    /// トークンと組織 ID がどのソースからも得られない場合は
    /// `ConfigError::MissingToken` / `ConfigError::MissingOrgId`
    pub fn resolve(args: &CliArgs) -> Result<Self, ConfigError> {
        let file = load_config_file(args.config.as_deref())?.unwrap_or_default();
        let env = EnvCredentials::from_env();
        merge(args, &file, &env)
    }
}

/// トークンを伏せた Debug 表現
impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("token", &"***")
            .field("org_id", &self.org_id)
            .field("prefix", &self.prefix)
            .field("collection_name", &self.collection_name)
            .field("api_base", &self.api_base)
            .field("output", &self.output)
            .field("include_legacy", &self.include_legacy)
            .field("dry_run", &self.dry_run)
            .finish()
    }
}

/// 設定ファイルを読み込む
///
/// - パスが明示されている場合: 存在しなければ `FileNotFound`
/// - デフォルトパスの場合: 存在しなければ `Ok(None)`（引数・環境変数
///   だけで完結する構成を許す）
fn load_config_file(path: Option<&Path>) -> Result<Option<ConfigFile>, ConfigError> {
    let explicit = path.is_some();
    let path = path.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_PATH));

    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            if explicit {
                return Err(ConfigError::FileNotFound(path.display().to_string()));
            }
            return Ok(None);
        }
        Err(err) => {
            return Err(ConfigError::Read {
                path:   path.display().to_string(),
                detail: err.to_string(),
            });
        }
    };

    let file = serde_json::from_str(&text).map_err(|err| ConfigError::Parse {
        path:   path.display().to_string(),
        detail: err.to_string(),
    })?;

    Ok(Some(file))
}

/// 3 ソースをマージして実行設定を構築する
///
/// 純関数。引数 > ファイル > 環境変数の順で最初に見つかった値を採用する。
fn merge(args: &CliArgs, file: &ConfigFile, env: &EnvCredentials) -> Result<AppConfig, ConfigError> {
    let token = args
        .token
        .clone()
        .or_else(|| file.api_token.clone())
        .or_else(|| env.token.clone())
        .ok_or(ConfigError::MissingToken)?;

    let org_id = args
        .org
        .clone()
        .or_else(|| file.org_id.clone())
        .or_else(|| env.org_id.clone())
        .ok_or(ConfigError::MissingOrgId)?;

    let collection_name = args
        .collection
        .clone()
        .or_else(|| file.collection_name.clone());

    let api_base = file
        .api_base
        .clone()
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

    Ok(AppConfig {
        token,
        org_id,
        prefix: args.prefix.clone(),
        collection_name,
        api_base,
        output: args.output.clone(),
        include_legacy: args.include_legacy,
        dry_run: args.dry_run,
    })
}
