//! プロジェクト関連の Snyk API クライアント

use async_trait::async_trait;
use tabane_shared::ListingDocument;

use crate::{
    client_impl::{API_VERSION, SnykApiClientImpl},
    error::SnykApiError,
    response::handle_response,
    types::{LegacyProject, LegacyProjectsResponse, ProjectResource},
};

/// プロジェクト関連の Snyk API クライアントトレイト
#[async_trait]
pub trait SnykProjectsClient: Send + Sync {
    /// プロジェクト一覧の 1 ページを取得する
    ///
    /// Snyk REST API の `GET /rest/orgs/{org_id}/projects` を呼び出す。
    /// プレフィックスフィルタはサーバー側（`names_start_with`）で適用される。
    ///
    /// # 引数
    ///
    /// - `prefix`: プロジェクト名のプレフィックス（空文字列は全件一致）
    /// - `cursor`: 前ページの `links.next` から得たカーソル。`None` は先頭ページ
    async fn list_projects_page(
        &self,
        prefix: &str,
        cursor: Option<&str>,
    ) -> Result<ListingDocument<ProjectResource>, SnykApiError>;

    /// レガシー v1 API のプロジェクト一覧を取得する
    ///
    /// v1 API の `GET /v1/org/{org_id}/projects` を呼び出す。
    /// ページネーションはなく全件を一度に返す。廃止済みのデプロイでは
    /// 410 Gone が返り、`DeprecatedEndpoint` になる。
    async fn list_legacy_projects(&self) -> Result<Vec<LegacyProject>, SnykApiError>;
}

#[async_trait]
impl SnykProjectsClient for SnykApiClientImpl {
    async fn list_projects_page(
        &self,
        prefix: &str,
        cursor: Option<&str>,
    ) -> Result<ListingDocument<ProjectResource>, SnykApiError> {
        let mut url = format!(
            "{}/rest/orgs/{}/projects?version={}&names_start_with={}",
            self.api_base,
            self.org_id,
            API_VERSION,
            urlencoding::encode(prefix)
        );
        if let Some(cursor) = cursor {
            url.push_str(&format!("&starting_after={}", urlencoding::encode(cursor)));
        }

        tracing::debug!(url = %url, "プロジェクト一覧ページを取得する");
        let response = self.get(&url).send().await?;
        handle_response(
            response,
            Some(SnykApiError::FeatureUnavailable(
                "プロジェクト一覧エンドポイントが見つかりません。組織 ID を確認してください"
                    .to_string(),
            )),
        )
        .await
    }

    async fn list_legacy_projects(&self) -> Result<Vec<LegacyProject>, SnykApiError> {
        let url = format!("{}/v1/org/{}/projects", self.api_base, self.org_id);

        tracing::debug!(url = %url, "レガシー v1 プロジェクト一覧を取得する");
        let response = self.get(&url).send().await?;
        let body: LegacyProjectsResponse = handle_response(
            response,
            Some(SnykApiError::FeatureUnavailable(
                "レガシー v1 プロジェクト一覧が見つかりません。組織 ID を確認してください"
                    .to_string(),
            )),
        )
        .await?;

        Ok(body.projects)
    }
}
