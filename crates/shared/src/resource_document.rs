//! # リソースドキュメント
//!
//! JSON:API 形式の単一リソースレスポンス `{ "data": T }` を提供する。

use serde::{Deserialize, Serialize};

/// 単一リソースのドキュメント型
///
/// Snyk REST API は単一リソースを `{ "data": T }` 形式で返す。
/// この型は以下の場所で使用される:
/// - Collection 作成（Deserialize で作成結果を受け取る）
/// - 単一リソースのリクエストボディ（Serialize で `data` に包む）
///
/// ## 使用例
///
/// ```
/// use tabane_shared::ResourceDocument;
///
/// let document = ResourceDocument::new("hello");
/// assert_eq!(document.data, "hello");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceDocument<T> {
    pub data: T,
}

impl<T> ResourceDocument<T> {
    /// 新しい `ResourceDocument` を作成する
    pub fn new(data: T) -> Self {
        Self { data }
    }
}
