//! # リスティングドキュメント
//!
//! カーソルベースのページネーションに対応した JSON:API 形式の
//! リストレスポンス型。

use serde::{Deserialize, Serialize};

/// ページネーションリンク
///
/// `next` には次ページを指すカーソル付き URL（またはパス）が入る。
/// 値そのものは不透明文字列として扱い、解釈しない。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageLinks {
    pub next: Option<String>,
}

/// リスティングドキュメント
///
/// `ResourceDocument<T>` が単一データ用であるのに対し、
/// `ListingDocument<T>` はリスト + カーソルのページネーション形式。
///
/// ## JSON 形式
///
/// ```json
/// {
///   "data": [...],
///   "links": { "next": "/rest/orgs/.../projects?starting_after=..." }
/// }
/// ```
///
/// `links` または `links.next` が存在しない場合は最後のページを意味する。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingDocument<T> {
    pub data:  Vec<T>,
    pub links: Option<PageLinks>,
}

impl<T> ListingDocument<T> {
    /// 次ページのカーソルを返す
    ///
    /// `links` 自体の欠落、`next` の欠落・`null`・空文字列は、
    /// すべて「次ページなし」として `None` に正規化する。
    pub fn next_cursor(&self) -> Option<&str> {
        self.links
            .as_ref()
            .and_then(|links| links.next.as_deref())
            .filter(|cursor| !cursor.is_empty())
    }
}
