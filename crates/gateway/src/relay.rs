//! # Devvio APIへの中継
//!
//! ペイロードをDevvio APIにPOSTし、ステータスコードとJSONボディを
//! そのままクライアントに返す。上流のエラーレスポンスも分類せずに中継する。

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::config::GatewayState;
use crate::error::GatewayError;

/// Devvio APIにリクエストを中継する。
///
/// `bearer` が指定された場合は `Authorization: Bearer <token>` を付与する。
/// 通信失敗・タイムアウト・非JSONレスポンスは [`GatewayError::Upstream`]。
pub(crate) async fn relay_to_devvio<P: Serialize>(
    state: &GatewayState,
    path: &str,
    bearer: Option<&str>,
    payload: &P,
) -> Result<Response, GatewayError> {
    let url = format!("{}{}", state.config.base_url, path);

    let mut request = state.http_client.post(&url).json(payload);
    if let Some(token) = bearer {
        request = request.bearer_auth(token);
    }

    let response = request.send().await.map_err(|e| {
        tracing::error!(path, error = %e, "Devvio APIへの送信に失敗");
        GatewayError::Upstream(e.to_string())
    })?;

    let status = response.status();
    let body: serde_json::Value = response.json().await.map_err(|e| {
        tracing::error!(path, status = status.as_u16(), error = %e, "Devvio APIのレスポンスを読み取れません");
        GatewayError::Upstream(e.to_string())
    })?;

    tracing::info!(path, status = status.as_u16(), "Devvio APIのレスポンスを中継");

    let status = StatusCode::from_u16(status.as_u16())
        .map_err(|e| GatewayError::Upstream(format!("不正なステータスコード: {e}")))?;

    Ok((status, Json(body)).into_response())
}
