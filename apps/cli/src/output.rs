//! # 出力シンク
//!
//! 取得結果のコンソール表示と、プロジェクト ID のファイル書き出しを
//! 担当する。表示は stdout、ログは stderr という分担のため、この
//! モジュール以外では stdout に書かない。

use std::{fs, path::Path};

use crate::{
    config::AppConfig,
    error::OutputError,
    usecase::{CollectionSummary, FetchResult},
};

/// 取得結果の一覧をフォーマットする
///
/// 1 行目に件数、続けて 1 件 1 行で `順番. 名前 (ID: ...)` を並べる。
pub fn format_report(result: &FetchResult, prefix: &str) -> String {
    let mut lines = vec![format!(
        "プレフィックス '{}' に一致するプロジェクト: {} 件",
        prefix,
        result.records.len()
    )];
    for (index, record) in result.records.iter().enumerate() {
        lines.push(format!(
            "  {}. {} (ID: {})",
            index + 1,
            record.name,
            record.id
        ));
    }

    lines.join("\n")
}

/// 取得結果を stdout に表示する
pub fn report(result: &FetchResult, prefix: &str) {
    println!("{}", format_report(result, prefix));
}

/// Collection 束ねの結果を stdout に表示する
pub fn report_collection(summary: &CollectionSummary) {
    if summary.created {
        println!(
            "Collection '{}' を作成しました (ID: {})",
            summary.name, summary.id
        );
    } else {
        println!(
            "既存の Collection '{}' を使用します (ID: {})",
            summary.name, summary.id
        );
    }
    println!(
        "{} 件のプロジェクトを Collection に追加しました",
        summary.added
    );
}

/// ドライランの実行概要をフォーマットする
///
/// API 呼び出しを行わないことと、解決済みの設定内容を表示する。
/// トークンは含めない。
pub fn format_dry_run(config: &AppConfig) -> String {
    let collection = config
        .collection_name
        .as_deref()
        .unwrap_or("（指定なし: Collection 操作をスキップ）");
    let output = config
        .output
        .as_ref()
        .map_or_else(|| "（指定なし）".to_string(), |path| path.display().to_string());

    [
        "ドライラン: API 呼び出しは行いません".to_string(),
        format!("  プレフィックス: '{}'", config.prefix),
        format!("  組織 ID: {}", config.org_id),
        format!("  API ホスト: {}", config.api_base),
        format!("  Collection: {}", collection),
        format!("  書き出し先: {}", output),
        format!("  レガシー v1 取得: {}", if config.include_legacy { "有効" } else { "無効" }),
    ]
    .join("\n")
}

/// プロジェクト ID を 1 行 1 件で書き出す
///
/// 末尾も改行で終端する。読み戻して改行で分割すると元の ID 列が
/// そのまま再現される。
pub fn persist(result: &FetchResult, path: &Path) -> Result<(), OutputError> {
    let mut text = String::new();
    for record in &result.records {
        text.push_str(&record.id);
        text.push('\n');
    }

    fs::write(path, text).map_err(|source| OutputError::Write {
        path: path.display().to_string(),
        source,
    })
}
