//! # CLI 統合テスト
//!
//! ネットワークを使わない経路（ヘルプ、引数エラー、ドライラン、設定
//! エラー）をバイナリ起動で検証する。
//!
//! - 引数の形式エラーは clap の終了コード 2
//! - 設定・実行のエラーは終了コード 1 とメッセージ + ヒント
//! - ドライランは API 呼び出しなしで終了コード 0

use assert_cmd::Command;
use predicates::prelude::*;

/// 作業ディレクトリと環境変数を固定したコマンドを構築する
///
/// ホスト環境の `SNYK_TOKEN` / `SNYK_ORG_ID` やカレントディレクトリの
/// config.json に影響されないよう、一時ディレクトリで実行する。
fn tabane_in(dir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("tabane").expect("tabane バイナリが見つかること");
    cmd.current_dir(dir)
        .env_remove("SNYK_TOKEN")
        .env_remove("SNYK_ORG_ID");
    cmd
}

#[test]
fn test_helpにオプション一覧が表示される() {
    let dir = tempfile::tempdir().unwrap();

    tabane_in(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--prefix"))
        .stdout(predicate::str::contains("--collection"))
        .stdout(predicate::str::contains("--dry-run"));
}

#[test]
fn test_prefixなしは引数エラーで終了コード2() {
    let dir = tempfile::tempdir().unwrap();

    tabane_in(dir.path()).assert().failure().code(2);
}

#[test]
fn test_ドライランはapiを呼ばず概要を表示して成功する() {
    let dir = tempfile::tempdir().unwrap();

    tabane_in(dir.path())
        .args([
            "--prefix",
            "backend-",
            "--token",
            "dummy-token",
            "--org",
            "dummy-org",
            "--dry-run",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("ドライラン"))
        .stdout(predicate::str::contains("backend-"));
}

#[test]
fn test_認証情報がどこにもなければ設定エラーで終了コード1() {
    let dir = tempfile::tempdir().unwrap();

    tabane_in(dir.path())
        .args(["--prefix", "backend-", "--dry-run"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("設定エラー"))
        .stderr(predicate::str::contains("SNYK_TOKEN"));
}

#[test]
fn test_明示した設定ファイルが無ければ終了コード1() {
    let dir = tempfile::tempdir().unwrap();

    tabane_in(dir.path())
        .args([
            "--prefix",
            "backend-",
            "--config",
            "missing.json",
            "--dry-run",
        ])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("見つかりません"));
}

#[test]
fn test_壊れた設定ファイルは解析エラーで終了コード1() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("config.json"), "{ broken").unwrap();

    tabane_in(dir.path())
        .args(["--prefix", "backend-", "--dry-run"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("解析に失敗"));
}

#[test]
fn test_デフォルトの設定ファイルから認証情報を読み取る() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("config.json"),
        r#"{"api_token": "file-token", "org_id": "file-org"}"#,
    )
    .unwrap();

    tabane_in(dir.path())
        .args(["--prefix", "backend-", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("file-org"));
}

#[test]
fn test_ドライラン概要にトークンを表示しない() {
    let dir = tempfile::tempdir().unwrap();

    tabane_in(dir.path())
        .args([
            "--prefix",
            "backend-",
            "--token",
            "super-secret-token",
            "--org",
            "dummy-org",
            "--dry-run",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("super-secret-token").not());
}
