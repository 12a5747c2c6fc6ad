//! # tabane-client
//!
//! Snyk API との通信を担当するクライアントクレート。
//!
//! ## エンドポイント
//!
//! - `GET /rest/orgs/{org_id}/projects` - プロジェクト一覧（カーソルページネーション）
//! - `GET /rest/orgs/{org_id}/collections` - Collection 一覧
//! - `POST /rest/orgs/{org_id}/collections` - Collection 作成
//! - `POST /rest/orgs/{org_id}/collections/{id}/relationships/projects` - メンバーシップ追加
//! - `GET /v1/org/{org_id}/projects` - レガシー v1 プロジェクト一覧
//!
//! クライアントはサブトレイト（[`SnykProjectsClient`] /
//! [`SnykCollectionsClient`]）に分割されており、テスト時にはサブトレイト
//! 単位でスタブを使用できる。

pub mod client_impl;
pub mod collections;
pub mod error;
pub mod projects;
mod response;
pub mod types;

pub use client_impl::{API_VERSION, SnykApiClient, SnykApiClientImpl};
pub use collections::SnykCollectionsClient;
pub use error::SnykApiError;
pub use projects::SnykProjectsClient;
pub use types::{
    AddProjectsRequest,
    CollectionAttributes,
    CollectionResource,
    CreateCollectionRequest,
    LegacyProject,
    LegacyProjectsResponse,
    ProjectAttributes,
    ProjectRecord,
    ProjectRef,
    ProjectResource,
};
