//! Snyk API クライアントの DTO / リクエスト型

use serde::{Deserialize, Serialize};

// --- REST レスポンス型 ---

/// プロジェクトリソース（REST 一覧の `data[]` 要素）
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectResource {
    pub id:         String,
    pub attributes: ProjectAttributes,
}

/// プロジェクト属性
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectAttributes {
    pub name: String,
}

/// Collection リソース（REST 一覧・作成結果の `data` 要素）
#[derive(Debug, Clone, Deserialize)]
pub struct CollectionResource {
    pub id:         String,
    pub attributes: CollectionAttributes,
}

/// Collection 属性
#[derive(Debug, Clone, Deserialize)]
pub struct CollectionAttributes {
    pub name: String,
}

// --- REST リクエスト型 ---

/// Collection 作成リクエスト（`POST /rest/orgs/{org_id}/collections` 用）
#[derive(Debug, Serialize)]
pub struct CreateCollectionRequest {
    pub data: CreateCollectionData,
}

/// Collection 作成リクエストの `data` 部
#[derive(Debug, Serialize)]
pub struct CreateCollectionData {
    #[serde(rename = "type")]
    pub resource_type: String,
    pub attributes:    CreateCollectionAttributes,
}

/// Collection 作成リクエストの属性部（名前のみ）
#[derive(Debug, Serialize)]
pub struct CreateCollectionAttributes {
    pub name: String,
}

impl CreateCollectionRequest {
    /// 指定した名前の Collection 作成リクエストを組み立てる
    pub fn new(name: &str) -> Self {
        Self {
            data: CreateCollectionData {
                resource_type: "collection".to_string(),
                attributes:    CreateCollectionAttributes {
                    name: name.to_string(),
                },
            },
        }
    }
}

/// プロジェクト参照（メンバーシップ追加リクエストの要素）
#[derive(Debug, Serialize)]
pub struct ProjectRef {
    pub id: String,
    #[serde(rename = "type")]
    pub resource_type: String,
}

/// メンバーシップ追加リクエスト
/// （`POST /rest/orgs/{org_id}/collections/{id}/relationships/projects` 用）
#[derive(Debug, Serialize)]
pub struct AddProjectsRequest {
    pub data: Vec<ProjectRef>,
}

impl AddProjectsRequest {
    /// プロジェクト ID の一覧から追加リクエストを組み立てる
    pub fn new(project_ids: &[String]) -> Self {
        Self {
            data: project_ids
                .iter()
                .map(|id| ProjectRef {
                    id:            id.clone(),
                    resource_type: "project".to_string(),
                })
                .collect(),
        }
    }
}

// --- レガシー v1 API の型 ---

/// レガシー v1 プロジェクト一覧レスポンス
#[derive(Debug, Clone, Deserialize)]
pub struct LegacyProjectsResponse {
    pub projects: Vec<LegacyProject>,
}

/// レガシー v1 プロジェクト DTO
#[derive(Debug, Clone, Deserialize)]
pub struct LegacyProject {
    pub id:   String,
    pub name: String,
}

// --- ドメインレコード ---

/// 取得結果の 1 プロジェクト
///
/// REST / レガシーのどちらの表現からも構築できる共通レコード。
/// フィールドは構築後に変更しない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRecord {
    pub id:   String,
    pub name: String,
}

impl From<ProjectResource> for ProjectRecord {
    fn from(resource: ProjectResource) -> Self {
        Self {
            id:   resource.id,
            name: resource.attributes.name,
        }
    }
}

impl From<LegacyProject> for ProjectRecord {
    fn from(project: LegacyProject) -> Self {
        Self {
            id:   project.id,
            name: project.name,
        }
    }
}
