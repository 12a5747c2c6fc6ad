//! # tabane
//!
//! Snyk プロジェクトを名前プレフィックスで取得し、Collection に束ねる CLI。
//!
//! ## 役割
//!
//! - **取得**: REST API のプロジェクト一覧をカーソルが尽きるまで辿る
//! - **束ね**: 指定名の Collection を検索・作成し、プロジェクトを追加する
//! - **書き出し**: プロジェクト ID を 1 行 1 件でファイルに残す
//!
//! ## 処理フロー
//!
//! ```text
//! 引数 / config.json / 環境変数
//!        │
//!        ▼
//!   設定マージ ──（--dry-run）──▶ 概要表示のみで終了
//!        │
//!        ▼
//!   プロジェクト取得（ページネーション）
//!        │
//!        ▼
//!   結果表示 ──（0 件）──▶ 後続スキップで正常終了
//!        │
//!        ├──▶ Collection 検索・作成・メンバー追加（--collection 指定時）
//!        │
//!        └──▶ プロジェクト ID 書き出し（--output 指定時）
//! ```
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `SNYK_TOKEN` | No | API トークン（引数・設定ファイルにない場合に使用） |
//! | `SNYK_ORG_ID` | No | 組織 ID（同上） |
//! | `LOG_FORMAT` | No | ログ出力形式（`json` / `pretty`、デフォルト: `pretty`） |
//! | `RUST_LOG` | No | ログレベル制御 |
//!
//! ## 使い方
//!
//! ```bash
//! # プレフィックス一致のプロジェクトを一覧表示
//! tabane --prefix backend-
//!
//! # Collection に束ね、ID をファイルに書き出す
//! tabane --prefix backend- --collection "Backend Services" --output ids.txt
//! ```

use clap::Parser;
use tabane_cli::{args::CliArgs, run};
use tabane_shared::observability::TracingConfig;

/// CLI のエントリーポイント
///
/// 終了コードは成功 0 / 失敗 1。引数の形式エラーは clap が
/// 2 で終了させる。
#[tokio::main]
async fn main() {
    // .env ファイルを読み込む（存在する場合）
    dotenvy::dotenv().ok();

    // トレーシング初期化（ログは stderr、stdout は結果表示専用）
    let tracing_config = TracingConfig::from_env("tabane");
    tabane_shared::observability::init_tracing(tracing_config);
    let _tracing_guard = tracing::info_span!("app", service = "tabane").entered();

    let args = CliArgs::parse();

    if let Err(err) = run(args).await {
        eprintln!("エラー: {err}");
        if let Some(hint) = err.remediation() {
            eprintln!("ヒント: {hint}");
        }
        std::process::exit(1);
    }
}
