//! Collection 関連の Snyk API クライアント

use async_trait::async_trait;
use tabane_shared::{ListingDocument, ResourceDocument};

use crate::{
    client_impl::{API_VERSION, SnykApiClientImpl},
    error::SnykApiError,
    response::{handle_empty_response, handle_response},
    types::{AddProjectsRequest, CollectionResource, CreateCollectionRequest},
};

/// Collection が無効な組織向けの 404 エラー
fn collections_unavailable() -> SnykApiError {
    SnykApiError::FeatureUnavailable(
        "Collection 機能がこの組織で利用できません。プランと有効化状況を確認してください"
            .to_string(),
    )
}

/// Collection 関連の Snyk API クライアントトレイト
#[async_trait]
pub trait SnykCollectionsClient: Send + Sync {
    /// Collection 一覧の 1 ページを取得する
    ///
    /// Snyk REST API の `GET /rest/orgs/{org_id}/collections` を呼び出す。
    ///
    /// # 引数
    ///
    /// - `cursor`: 前ページの `links.next` から得たカーソル。`None` は先頭ページ
    async fn list_collections_page(
        &self,
        cursor: Option<&str>,
    ) -> Result<ListingDocument<CollectionResource>, SnykApiError>;

    /// Collection を作成する
    ///
    /// Snyk REST API の `POST /rest/orgs/{org_id}/collections` を呼び出す。
    /// 属性は名前のみ。作成された Collection リソースを返す。
    async fn create_collection(&self, name: &str) -> Result<CollectionResource, SnykApiError>;

    /// Collection にプロジェクトを追加する
    ///
    /// Snyk REST API の
    /// `POST /rest/orgs/{org_id}/collections/{collection_id}/relationships/projects`
    /// を呼び出す。追加は冪等で、既にメンバーのプロジェクトを含めても
    /// エラーにならない。
    async fn add_projects(
        &self,
        collection_id: &str,
        project_ids: &[String],
    ) -> Result<(), SnykApiError>;
}

#[async_trait]
impl SnykCollectionsClient for SnykApiClientImpl {
    async fn list_collections_page(
        &self,
        cursor: Option<&str>,
    ) -> Result<ListingDocument<CollectionResource>, SnykApiError> {
        let mut url = format!(
            "{}/rest/orgs/{}/collections?version={}",
            self.api_base, self.org_id, API_VERSION
        );
        if let Some(cursor) = cursor {
            url.push_str(&format!("&starting_after={}", urlencoding::encode(cursor)));
        }

        tracing::debug!(url = %url, "Collection 一覧ページを取得する");
        let response = self.get(&url).send().await?;
        handle_response(response, Some(collections_unavailable())).await
    }

    async fn create_collection(&self, name: &str) -> Result<CollectionResource, SnykApiError> {
        let url = format!(
            "{}/rest/orgs/{}/collections?version={}",
            self.api_base, self.org_id, API_VERSION
        );
        let request = CreateCollectionRequest::new(name);

        tracing::debug!(name = %name, "Collection を作成する");
        let response = self.post(&url).json(&request).send().await?;
        let document: ResourceDocument<CollectionResource> =
            handle_response(response, Some(collections_unavailable())).await?;

        Ok(document.data)
    }

    async fn add_projects(
        &self,
        collection_id: &str,
        project_ids: &[String],
    ) -> Result<(), SnykApiError> {
        let url = format!(
            "{}/rest/orgs/{}/collections/{}/relationships/projects?version={}",
            self.api_base, self.org_id, collection_id, API_VERSION
        );
        let request = AddProjectsRequest::new(project_ids);

        tracing::debug!(
            collection_id = %collection_id,
            count = project_ids.len(),
            "Collection にプロジェクトを追加する"
        );
        let response = self.post(&url).json(&request).send().await?;
        handle_empty_response(
            response,
            Some(SnykApiError::FeatureUnavailable(
                "追加先の Collection が見つかりません".to_string(),
            )),
        )
        .await
    }
}
