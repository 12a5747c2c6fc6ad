//! # プロジェクト取得ユースケース
//!
//! Snyk REST API のプロジェクト一覧を `links.next` カーソルが尽きるまで
//! 辿り、プレフィックスに一致する全プロジェクトを応答順に蓄積する。

use std::sync::Arc;

use tabane_client::{ProjectRecord, SnykApiError, SnykProjectsClient};

use super::MAX_PAGES;

/// プレフィックス一致プロジェクトの取得結果
///
/// `records` は API の応答順（REST ページ順、レガシー補完は末尾）を
/// そのまま保持する。重複排除は行わない。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchResult {
    pub records: Vec<ProjectRecord>,
}

impl FetchResult {
    /// プロジェクト ID の一覧を応答順で返す
    pub fn project_ids(&self) -> Vec<String> {
        self.records.iter().map(|record| record.id.clone()).collect()
    }
}

/// プロジェクト取得ユースケースの実装
pub struct FetchUseCaseImpl {
    projects: Arc<dyn SnykProjectsClient>,
}

impl FetchUseCaseImpl {
    /// 新しいユースケースインスタンスを作成
    pub fn new(projects: Arc<dyn SnykProjectsClient>) -> Self {
        Self { projects }
    }

    /// プレフィックスに一致する全プロジェクトを取得する
    ///
    /// 先頭ページから開始し、レスポンスの `links.next` が存在する間は
    /// そのカーソルを次のリクエストに渡して続行する。カーソルは不透明
    /// 文字列として改変せずに送り返す。
    ///
    /// `include_legacy` が真の場合はレガシー v1 一覧も参照し、
    /// プレフィックス一致分を末尾に補完する。レガシー側の 410 Gone は
    /// 廃止済みデプロイとして警告のみで続行し、それ以外のエラーは
    /// そのまま失敗にする。
    pub async fn fetch_by_prefix(
        &self,
        prefix: &str,
        include_legacy: bool,
    ) -> Result<FetchResult, SnykApiError> {
        let mut records: Vec<ProjectRecord> = Vec::new();
        let mut cursor: Option<String> = None;
        let mut pages = 0usize;

        loop {
            if pages >= MAX_PAGES {
                return Err(SnykApiError::Unexpected(format!(
                    "ページ数が上限 {} に達しました。応答の links.next を確認してください",
                    MAX_PAGES
                )));
            }
            pages += 1;

            let document = self
                .projects
                .list_projects_page(prefix, cursor.as_deref())
                .await?;

            let next = document.next_cursor().map(ToOwned::to_owned);
            tracing::debug!(
                page = pages,
                count = document.data.len(),
                has_next = next.is_some(),
                "プロジェクト一覧ページを取得した"
            );
            records.extend(document.data.into_iter().map(ProjectRecord::from));

            let Some(next) = next else {
                break;
            };
            cursor = Some(next);
        }

        if include_legacy {
            self.supplement_from_legacy(prefix, &mut records).await?;
        }

        Ok(FetchResult { records })
    }

    /// レガシー v1 一覧からプレフィックス一致分を補完する
    ///
    /// v1 にはサーバー側フィルタがないため、クライアント側で
    /// プレフィックスを適用する。
    async fn supplement_from_legacy(
        &self,
        prefix: &str,
        records: &mut Vec<ProjectRecord>,
    ) -> Result<(), SnykApiError> {
        match self.projects.list_legacy_projects().await {
            Ok(projects) => {
                let before = records.len();
                records.extend(
                    projects
                        .into_iter()
                        .filter(|project| project.name.starts_with(prefix))
                        .map(ProjectRecord::from),
                );
                tracing::debug!(
                    count = records.len() - before,
                    "レガシー v1 一覧から補完した"
                );
                Ok(())
            }
            Err(SnykApiError::DeprecatedEndpoint(detail)) => {
                tracing::warn!(
                    detail = %detail,
                    "レガシー v1 一覧は廃止済みのため、補完なしで続行する"
                );
                Ok(())
            }
            Err(err) => Err(err),
        }
    }
}
