//! # Gatewayエンドポイント
//!
//! 全エンドポイントはPOSTのみ受け付ける。その他のメソッドは
//! 405 `{"message":"Method Not Allowed"}` を返す。

pub mod check_balance;
pub mod confirm;
pub mod create_asset;

#[cfg(test)]
pub(crate) mod test_helpers;

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::DefaultBodyLimit;
use axum::http::StatusCode;
use axum::routing::post;
use serde::de::DeserializeOwned;

use crate::config::GatewayState;
use crate::error::GatewayError;

pub use check_balance::handle_check_balance;
pub use confirm::handle_confirm;
pub use create_asset::handle_create_asset;

/// Gatewayのルーターを構築する。
pub fn router(state: Arc<GatewayState>) -> axum::Router {
    let body_limit = state.config.max_body_bytes;

    axum::Router::new()
        .route(
            "/api/checkBalance",
            post(handle_check_balance).fallback(method_not_allowed),
        )
        .route("/api/confirm", post(handle_confirm).fallback(method_not_allowed))
        .route(
            "/api/createAsset",
            post(handle_create_asset).fallback(method_not_allowed),
        )
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

async fn method_not_allowed() -> GatewayError {
    GatewayError::MethodNotAllowed
}

/// ボディ読み取りの失敗をJSONのエラーレスポンスに変換する。
pub(crate) fn read_body(body: Result<Bytes, BytesRejection>) -> Result<Bytes, GatewayError> {
    body.map_err(|rejection| {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            GatewayError::PayloadTooLarge
        } else {
            GatewayError::BadRequest(rejection.body_text())
        }
    })
}

/// リクエストボディをJSONオブジェクトとしてパースする。
///
/// 空ボディは `{}` とみなす。オブジェクト以外のJSONは拒否する。
pub(crate) fn parse_json_body<T>(body: &Bytes) -> Result<T, GatewayError>
where
    T: DeserializeOwned + Default,
{
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }

    let value: serde_json::Value = serde_json::from_slice(body)
        .map_err(|e| GatewayError::BadRequest(format!("invalid JSON body: {e}")))?;

    if !value.is_object() {
        return Err(GatewayError::BadRequest(
            "request body must be a JSON object".to_string(),
        ));
    }

    serde_json::from_value(value)
        .map_err(|e| GatewayError::BadRequest(format!("invalid request body: {e}")))
}
