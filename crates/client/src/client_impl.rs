//! SnykApiClient スーパートレイトとクライアント実装の構造体

use crate::{collections::SnykCollectionsClient, projects::SnykProjectsClient};

/// Snyk REST API のバージョン（全呼び出しで固定）
pub const API_VERSION: &str = "2024-10-15";

/// Snyk API クライアントトレイト（スーパートレイト）
///
/// Projects / Collections の各サブトレイトを束ねるスーパートレイト。
/// テスト時にはサブトレイト単位でスタブを使用できる。
///
/// `dyn SnykApiClient` はオブジェクトセーフであり、
/// `Arc<dyn SnykApiClient>` として使用可能。
pub trait SnykApiClient: SnykProjectsClient + SnykCollectionsClient {}

/// ブランケット impl: 2 つのサブトレイトをすべて実装する型は
/// 自動的に `SnykApiClient` を実装する。
impl<T> SnykApiClient for T where T: SnykProjectsClient + SnykCollectionsClient {}

/// Snyk API クライアント実装
#[derive(Clone)]
pub struct SnykApiClientImpl {
    pub(crate) api_base: String,
    pub(crate) org_id:   String,
    token:               String,
    pub(crate) client:   reqwest::Client,
}

impl SnykApiClientImpl {
    /// 新しい SnykApiClient を作成する
    ///
    /// # 引数
    ///
    /// - `api_base`: Snyk API のベース URL（例: `https://api.snyk.io`）
    /// - `org_id`: 組織 ID
    /// - `token`: API トークン
    pub fn new(api_base: &str, org_id: &str, token: &str) -> Self {
        Self {
            api_base: api_base.trim_end_matches('/').to_string(),
            org_id:   org_id.to_string(),
            token:    token.to_string(),
            client:   reqwest::Client::new(),
        }
    }

    /// 認証ヘッダー付きの GET リクエストを組み立てる
    pub(crate) fn get(&self, url: &str) -> reqwest::RequestBuilder {
        self.with_headers(self.client.get(url))
    }

    /// 認証ヘッダー付きの POST リクエストを組み立てる
    pub(crate) fn post(&self, url: &str) -> reqwest::RequestBuilder {
        self.with_headers(self.client.post(url))
    }

    /// Snyk API の共通ヘッダーを付与する
    ///
    /// 認証は `Authorization: token <api_token>` 形式。REST / レガシー v1 の
    /// どちらのエンドポイントでも同じヘッダーを使用する。
    fn with_headers(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder
            .header("Authorization", format!("token {}", self.token))
            .header("Content-Type", "application/vnd.api+json")
            .header("Accept", "application/vnd.api+json")
    }
}

/// トークンを伏せた Debug 表現
impl std::fmt::Debug for SnykApiClientImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SnykApiClientImpl")
            .field("api_base", &self.api_base)
            .field("org_id", &self.org_id)
            .field("token", &"***")
            .finish_non_exhaustive()
    }
}
