//! # CLI 引数定義
//!
//! clap の derive API でコマンドライン引数を定義する。
//! 認証情報は引数のほかに設定ファイル・環境変数からも供給できる
//! （マージ規則は `config` モジュールを参照）。

use std::path::PathBuf;

use clap::Parser;

/// Snyk プロジェクトを名前プレフィックスで取得し、Collection に束ねる CLI
#[derive(Debug, Clone, Parser)]
#[command(name = "tabane")]
#[command(about = "Snyk プロジェクトを名前プレフィックスで取得し、Collection に束ねる")]
#[command(version)]
pub struct CliArgs {
    /// プロジェクト名のプレフィックス（空文字列は全件一致）
    #[arg(short, long)]
    pub prefix: String,

    /// 束ね先の Collection 名（省略時は Collection 操作を行わない）
    #[arg(short, long)]
    pub collection: Option<String>,

    /// プロジェクト ID の書き出し先ファイル
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Snyk API トークン（設定ファイルの api_token、環境変数 SNYK_TOKEN でも指定可能）
    #[arg(short, long)]
    pub token: Option<String>,

    /// 組織 ID（設定ファイルの org_id、環境変数 SNYK_ORG_ID でも指定可能）
    #[arg(long)]
    pub org: Option<String>,

    /// 設定ファイルのパス（デフォルト: config.json）
    #[arg(short = 'f', long)]
    pub config: Option<PathBuf>,

    /// API 呼び出しを行わず、実行内容の概要だけを表示する
    #[arg(long)]
    pub dry_run: bool,

    /// レガシー v1 一覧からも取得する（重複排除は行わない）
    #[arg(long)]
    pub include_legacy: bool,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_引数定義が整合している() {
        CliArgs::command().debug_assert();
    }

    #[test]
    fn test_短縮形で必須引数をパースする() {
        let args = CliArgs::parse_from(["tabane", "-p", "backend-"]);

        assert_eq!(args.prefix, "backend-");
        assert_eq!(args.collection, None);
        assert_eq!(args.output, None);
        assert!(!args.dry_run);
        assert!(!args.include_legacy);
    }

    #[test]
    fn test_全引数をパースする() {
        let args = CliArgs::parse_from([
            "tabane",
            "--prefix",
            "backend-",
            "--collection",
            "Backend Services",
            "--output",
            "ids.txt",
            "--token",
            "tok",
            "--org",
            "org-1",
            "--config",
            "custom.json",
            "--dry-run",
            "--include-legacy",
        ]);

        assert_eq!(args.prefix, "backend-");
        assert_eq!(args.collection.as_deref(), Some("Backend Services"));
        assert_eq!(args.output, Some(PathBuf::from("ids.txt")));
        assert_eq!(args.token.as_deref(), Some("tok"));
        assert_eq!(args.org.as_deref(), Some("org-1"));
        assert_eq!(args.config, Some(PathBuf::from("custom.json")));
        assert!(args.dry_run);
        assert!(args.include_legacy);
    }

    #[test]
    fn test_prefixなしはパースエラー() {
        let result = CliArgs::try_parse_from(["tabane"]);

        assert!(result.is_err());
    }

    #[test]
    fn test_空のプレフィックスを受け付ける() {
        let args = CliArgs::parse_from(["tabane", "--prefix", ""]);

        assert_eq!(args.prefix, "");
    }
}
