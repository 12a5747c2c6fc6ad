//! # tabane CLI ライブラリ
//!
//! Snyk プロジェクトを名前プレフィックスで取得し、Collection に束ねる
//! CLI のコアモジュール。
//!
//! ## モジュール構成
//!
//! - `args`: コマンドライン引数定義
//! - `config`: 引数・設定ファイル・環境変数のマージ
//! - `error`: エラー集約と改善ヒント
//! - `output`: コンソール表示とファイル書き出し
//! - `usecase`: ページ走査と Collection 束ねの手続き

pub mod args;
pub mod config;
pub mod error;
pub mod output;
pub mod usecase;

use std::sync::Arc;

use tabane_client::SnykApiClientImpl;

use crate::{
    args::CliArgs,
    config::AppConfig,
    error::CliError,
    usecase::{CollectUseCaseImpl, FetchUseCaseImpl},
};

/// CLI 本体の実行
///
/// 設定解決 → （ドライラン分岐）→ 取得 → 表示 → Collection 束ね →
/// 書き出し、の順に進む。途中のエラーは即座に返し、後続の工程は
/// 実行しない。書き出しは全工程の成功後にのみ行う。
pub async fn run(args: CliArgs) -> Result<(), CliError> {
    let config = AppConfig::resolve(&args)?;
    tracing::debug!(config = ?config, "実行設定を解決した");

    if config.dry_run {
        println!("{}", output::format_dry_run(&config));
        return Ok(());
    }

    let client = Arc::new(SnykApiClientImpl::new(
        &config.api_base,
        &config.org_id,
        &config.token,
    ));

    let fetcher = FetchUseCaseImpl::new(client.clone());
    let result = fetcher
        .fetch_by_prefix(&config.prefix, config.include_legacy)
        .await?;

    output::report(&result, &config.prefix);

    if result.records.is_empty() {
        tracing::info!("一致するプロジェクトがないため、後続の操作をスキップする");
        return Ok(());
    }

    if let Some(collection_name) = &config.collection_name {
        let collector = CollectUseCaseImpl::new(client);
        let summary = collector
            .bundle_projects(collection_name, &result.project_ids())
            .await?;
        output::report_collection(&summary);
    }

    if let Some(path) = &config.output {
        output::persist(&result, path)?;
        println!("プロジェクト ID を書き出しました: {}", path.display());
    }

    Ok(())
}
