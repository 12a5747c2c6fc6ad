//! # Collection 束ねユースケース
//!
//! 名前で Collection を検索し、なければ作成してから、取得した
//! プロジェクトをメンバーとして追加する。

use std::sync::Arc;

use tabane_client::{CollectionResource, SnykApiError, SnykCollectionsClient};

use super::MAX_PAGES;

/// Collection 束ねの実行結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionSummary {
    /// Collection の ID
    pub id: String,
    /// Collection の名前
    pub name: String,
    /// 既存流用ではなく新規作成した場合に真
    pub created: bool,
    /// 追加したプロジェクト数
    pub added: usize,
}

/// Collection 束ねユースケースの実装
pub struct CollectUseCaseImpl {
    collections: Arc<dyn SnykCollectionsClient>,
}

impl CollectUseCaseImpl {
    /// 新しいユースケースインスタンスを作成
    pub fn new(collections: Arc<dyn SnykCollectionsClient>) -> Self {
        Self { collections }
    }

    /// プロジェクトを指定名の Collection に束ねる
    ///
    /// 検索 → 作成 → 追加の順に進む。API は Collection 名の一意性を
    /// 強制しないため、作成前に必ず既存を確認する。一覧が 404 を返す
    /// 場合は Collection 機能が利用できない組織であり、作成・追加は
    /// 試行せずにエラーを返す。
    ///
    /// 追加は冪等で、既にメンバーのプロジェクトを含んでいても
    /// エラーにならない。
    pub async fn bundle_projects(
        &self,
        name: &str,
        project_ids: &[String],
    ) -> Result<CollectionSummary, SnykApiError> {
        let existing = self.find_by_name(name).await?;

        let (collection, created) = match existing {
            Some(collection) => {
                tracing::info!(id = %collection.id, "既存の Collection を使用する");
                (collection, false)
            }
            None => {
                let collection = self.collections.create_collection(name).await?;
                tracing::info!(id = %collection.id, "Collection を作成した");
                (collection, true)
            }
        };

        if !project_ids.is_empty() {
            self.collections
                .add_projects(&collection.id, project_ids)
                .await?;
        }

        Ok(CollectionSummary {
            id: collection.id,
            name: collection.attributes.name,
            created,
            added: project_ids.len(),
        })
    }

    /// 名前の完全一致で Collection を探す
    ///
    /// 一覧をカーソルが尽きるまで辿り、最初に一致したものを返す。
    /// 一致が見つかった時点で残りのページは読まない。
    async fn find_by_name(&self, name: &str) -> Result<Option<CollectionResource>, SnykApiError> {
        let mut cursor: Option<String> = None;
        let mut pages = 0usize;

        loop {
            if pages >= MAX_PAGES {
                return Err(SnykApiError::Unexpected(format!(
                    "Collection 一覧のページ数が上限 {} に達しました",
                    MAX_PAGES
                )));
            }
            pages += 1;

            let document = self
                .collections
                .list_collections_page(cursor.as_deref())
                .await?;
            let next = document.next_cursor().map(ToOwned::to_owned);

            if let Some(found) = document
                .data
                .into_iter()
                .find(|collection| collection.attributes.name == name)
            {
                return Ok(Some(found));
            }

            let Some(next) = next else {
                return Ok(None);
            };
            cursor = Some(next);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use tabane_client::CollectionAttributes;
    use tabane_shared::{ListingDocument, PageLinks};

    use super::*;

    // テスト用スタブ

    struct StubCollectionsClient {
        pages:         Mutex<Vec<Result<ListingDocument<CollectionResource>, SnykApiError>>>,
        create_result: Result<CollectionResource, SnykApiError>,
        create_calls:  Mutex<usize>,
        added:         Mutex<Vec<(String, Vec<String>)>>,
    }

    impl StubCollectionsClient {
        fn new(
            pages: Vec<Result<ListingDocument<CollectionResource>, SnykApiError>>,
            create_result: Result<CollectionResource, SnykApiError>,
        ) -> Self {
            Self {
                pages: Mutex::new(pages),
                create_result,
                create_calls: Mutex::new(0),
                added: Mutex::new(Vec::new()),
            }
        }

        fn create_calls(&self) -> usize {
            *self.create_calls.lock().unwrap()
        }

        fn added(&self) -> Vec<(String, Vec<String>)> {
            self.added.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl SnykCollectionsClient for StubCollectionsClient {
        async fn list_collections_page(
            &self,
            _cursor: Option<&str>,
        ) -> Result<ListingDocument<CollectionResource>, SnykApiError> {
            let mut pages = self.pages.lock().unwrap();
            if pages.is_empty() {
                panic!("用意したページ数を超えてリクエストされた");
            }
            pages.remove(0)
        }

        async fn create_collection(
            &self,
            _name: &str,
        ) -> Result<CollectionResource, SnykApiError> {
            *self.create_calls.lock().unwrap() += 1;
            self.create_result.clone()
        }

        async fn add_projects(
            &self,
            collection_id: &str,
            project_ids: &[String],
        ) -> Result<(), SnykApiError> {
            self.added
                .lock()
                .unwrap()
                .push((collection_id.to_string(), project_ids.to_vec()));
            Ok(())
        }
    }

    /// テスト用の Collection リソースを組み立てる
    fn collection(id: &str, name: &str) -> CollectionResource {
        CollectionResource {
            id:         id.to_string(),
            attributes: CollectionAttributes {
                name: name.to_string(),
            },
        }
    }

    /// テスト用のページを組み立てる
    fn page(
        collections: Vec<CollectionResource>,
        next: Option<&str>,
    ) -> Result<ListingDocument<CollectionResource>, SnykApiError> {
        Ok(ListingDocument {
            data:  collections,
            links: next.map(|cursor| PageLinks {
                next: Some(cursor.to_string()),
            }),
        })
    }

    fn ids(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    // ===== bundle_projects =====

    #[tokio::test]
    async fn test_既存のcollectionを流用して追加する() {
        // Given
        let stub = Arc::new(StubCollectionsClient::new(
            vec![page(
                vec![collection("c-1", "Backend Services")],
                None,
            )],
            Ok(collection("unused", "unused")),
        ));
        let sut = CollectUseCaseImpl::new(stub.clone());

        // When
        let summary = sut
            .bundle_projects("Backend Services", &ids(&["p-1", "p-2"]))
            .await
            .unwrap();

        // Then: 作成は行わず、既存 ID に追加する
        assert_eq!(
            summary,
            CollectionSummary {
                id:      "c-1".to_string(),
                name:    "Backend Services".to_string(),
                created: false,
                added:   2,
            }
        );
        assert_eq!(stub.create_calls(), 0);
        assert_eq!(
            stub.added(),
            vec![("c-1".to_string(), ids(&["p-1", "p-2"]))]
        );
    }

    #[tokio::test]
    async fn test_存在しなければ作成して追加する() {
        // Given: 一覧に一致なし
        let stub = Arc::new(StubCollectionsClient::new(
            vec![page(vec![collection("c-9", "Other")], None)],
            Ok(collection("c-new", "Backend Services")),
        ));
        let sut = CollectUseCaseImpl::new(stub.clone());

        // When
        let summary = sut
            .bundle_projects("Backend Services", &ids(&["p-1"]))
            .await
            .unwrap();

        // Then
        assert!(summary.created);
        assert_eq!(summary.id, "c-new");
        assert_eq!(stub.create_calls(), 1);
        assert_eq!(stub.added(), vec![("c-new".to_string(), ids(&["p-1"]))]);
    }

    #[tokio::test]
    async fn test_2ページ目の一致を見つける() {
        // Given
        let stub = Arc::new(StubCollectionsClient::new(
            vec![
                page(vec![collection("c-1", "Other")], Some("c-next")),
                page(vec![collection("c-2", "Backend Services")], None),
            ],
            Ok(collection("unused", "unused")),
        ));
        let sut = CollectUseCaseImpl::new(stub.clone());

        // When
        let summary = sut
            .bundle_projects("Backend Services", &ids(&["p-1"]))
            .await
            .unwrap();

        // Then
        assert_eq!(summary.id, "c-2");
        assert!(!summary.created);
        assert_eq!(stub.create_calls(), 0);
    }

    #[tokio::test]
    async fn test_一覧404は機能利用不可として作成も追加もしない() {
        // Given: Collection が組織で無効
        let stub = Arc::new(StubCollectionsClient::new(
            vec![Err(SnykApiError::FeatureUnavailable("利用不可".to_string()))],
            Ok(collection("unused", "unused")),
        ));
        let sut = CollectUseCaseImpl::new(stub.clone());

        // When
        let result = sut.bundle_projects("Backend Services", &ids(&["p-1"])).await;

        // Then: エラーを返し、メンバーシップは一切変更しない
        assert!(matches!(result, Err(SnykApiError::FeatureUnavailable(_))));
        assert_eq!(stub.create_calls(), 0);
        assert!(stub.added().is_empty());
    }

    #[tokio::test]
    async fn test_空のid列では追加を呼ばない() {
        // Given
        let stub = Arc::new(StubCollectionsClient::new(
            vec![page(vec![collection("c-1", "Backend Services")], None)],
            Ok(collection("unused", "unused")),
        ));
        let sut = CollectUseCaseImpl::new(stub.clone());

        // When
        let summary = sut.bundle_projects("Backend Services", &[]).await.unwrap();

        // Then
        assert_eq!(summary.added, 0);
        assert!(stub.added().is_empty());
    }

    #[tokio::test]
    async fn test_作成エラーをそのまま返す() {
        // Given
        let stub = Arc::new(StubCollectionsClient::new(
            vec![page(Vec::new(), None)],
            Err(SnykApiError::Unexpected("409 conflict".to_string())),
        ));
        let sut = CollectUseCaseImpl::new(stub.clone());

        // When
        let result = sut.bundle_projects("Backend Services", &ids(&["p-1"])).await;

        // Then: 追加まで進まない
        assert!(matches!(result, Err(SnykApiError::Unexpected(_))));
        assert!(stub.added().is_empty());
    }

    #[tokio::test]
    async fn test_名前は完全一致で比較する() {
        // Given: プレフィックスが同じだけの別名
        let stub = Arc::new(StubCollectionsClient::new(
            vec![page(vec![collection("c-1", "Backend Services 2")], None)],
            Ok(collection("c-new", "Backend Services")),
        ));
        let sut = CollectUseCaseImpl::new(stub.clone());

        // When
        let summary = sut
            .bundle_projects("Backend Services", &ids(&["p-1"]))
            .await
            .unwrap();

        // Then: 部分一致では流用せず、新規作成する
        assert!(summary.created);
        assert_eq!(stub.create_calls(), 1);
    }
}
