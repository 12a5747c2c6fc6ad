//! # ユースケース層
//!
//! クライアントのサブトレイトを受け取り、複数呼び出しにまたがる手続き
//! （ページ走査、Collection への束ね）を実装する。クライアントは
//! `Arc<dyn Trait>` で注入され、テスト時はスタブに差し替える。

pub mod collect;
pub mod fetch;

pub use collect::{CollectUseCaseImpl, CollectionSummary};
pub use fetch::{FetchResult, FetchUseCaseImpl};

/// ページ走査の安全上限
///
/// カーソルが尽きるまで辿る設計のため、`links.next` を返し続ける異常な
/// バックエンドで無限ループしないよう明示的な上限を置く。上限に達した
/// 場合はエラーとして中断する。
pub(crate) const MAX_PAGES: usize = 1000;
