//! Snyk API レスポンスの共通ハンドリング

use serde::de::DeserializeOwned;

use crate::error::SnykApiError;

/// Snyk API レスポンスの共通ハンドリング
///
/// 成功時はレスポンスボディを `T` にデシリアライズし、
/// エラー時はステータスコードに応じた `SnykApiError` を返す。
///
/// # 引数
///
/// - `response`: Snyk API からの HTTP レスポンス
/// - `not_found_error`: 404 レスポンス時に返すエラー。呼び出し箇所ごとの
///   説明を持たせる。`None` の場合は `Unexpected` にフォールスルー
pub(crate) async fn handle_response<T: DeserializeOwned>(
    response: reqwest::Response,
    not_found_error: Option<SnykApiError>,
) -> Result<T, SnykApiError> {
    let status = response.status();

    if status.is_success() {
        let body = response.json::<T>().await?;
        return Ok(body);
    }

    Err(error_for_status(status, response, not_found_error).await)
}

/// ボディを持たない成功レスポンス（204 No Content 等）のハンドリング
///
/// メンバーシップ追加のようにボディが不要な呼び出しで使用する。
/// エラー時の対応付けは [`handle_response`] と同一。
pub(crate) async fn handle_empty_response(
    response: reqwest::Response,
    not_found_error: Option<SnykApiError>,
) -> Result<(), SnykApiError> {
    let status = response.status();

    if status.is_success() {
        return Ok(());
    }

    Err(error_for_status(status, response, not_found_error).await)
}

/// エラーステータスを `SnykApiError` に対応付ける
async fn error_for_status(
    status: reqwest::StatusCode,
    response: reqwest::Response,
    not_found_error: Option<SnykApiError>,
) -> SnykApiError {
    if status == reqwest::StatusCode::NOT_FOUND
        && let Some(err) = not_found_error
    {
        return err;
    }

    let body = response.text().await.unwrap_or_default();

    match status {
        reqwest::StatusCode::UNAUTHORIZED => {
            SnykApiError::Auth("API トークンが無効か、期限切れです".to_string())
        }
        reqwest::StatusCode::FORBIDDEN => {
            SnykApiError::Auth(format!("この操作を行う権限がありません: {}", body))
        }
        reqwest::StatusCode::GONE => {
            let detail = if body.is_empty() {
                "この API バージョンは提供を終了しました".to_string()
            } else {
                body
            };
            SnykApiError::DeprecatedEndpoint(detail)
        }
        _ => SnykApiError::Unexpected(format!("予期しないステータス {}: {}", status, body)),
    }
}
