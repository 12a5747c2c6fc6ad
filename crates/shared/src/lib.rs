//! # Tabane 共有ユーティリティ
//!
//! このクレートは、Tabane の CLI とクライアントの両方から使用される
//! 共通ユーティリティを提供する。
//!
//! ## 設計方針
//!
//! - 他のすべてのクレート（client, cli）から依存される
//! - Snyk 固有のロジックを含まない純粋なレスポンス形式のみを配置
//! - 外部クレートへの依存は最小限に抑える

pub mod listing_document;
pub mod observability;
pub mod resource_document;

pub use listing_document::{ListingDocument, PageLinks};
pub use resource_document::ResourceDocument;
