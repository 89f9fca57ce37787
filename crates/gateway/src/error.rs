//! # Gateway エラー型
//!
//! 全エンドポイントで共通のエラー型。レスポンスは常にJSONの
//! `{"message": ...}` で、上流通信失敗時のみ `error` に詳細が入る。

use axum::http::StatusCode;
use axum::Json;
use devvio_types::MessageBody;

/// Gatewayエラー型。
///
/// `Display` の文字列がそのままレスポンスの `message` になる。
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// POST以外のメソッド
    #[error("Method Not Allowed")]
    MethodNotAllowed,
    /// Authorizationヘッダーがない
    #[error("Unauthorized: No token provided")]
    MissingToken,
    /// Authorizationヘッダーにトークン部分がない
    #[error("Unauthorized: Invalid token format")]
    InvalidTokenFormat,
    /// サーバー秘密鍵が未設定
    #[error("API key is not configured on the server.")]
    ApiKeyNotConfigured,
    /// リクエストボディがサイズ上限を超えた
    #[error("Payload Too Large")]
    PayloadTooLarge,
    /// 不正なリクエストボディ
    #[error("Bad Request: {0}")]
    BadRequest(String),
    /// Devvio APIとの通信失敗（接続失敗、タイムアウト、非JSONレスポンス）
    #[error("Internal Server Error")]
    Upstream(String),
}

impl GatewayError {
    /// 対応するHTTPステータス
    pub fn status(&self) -> StatusCode {
        match self {
            GatewayError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            GatewayError::MissingToken | GatewayError::InvalidTokenFormat => {
                StatusCode::UNAUTHORIZED
            }
            GatewayError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            GatewayError::BadRequest(_) => StatusCode::BAD_REQUEST,
            GatewayError::ApiKeyNotConfigured | GatewayError::Upstream(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl axum::response::IntoResponse for GatewayError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        let body = MessageBody {
            message: self.to_string(),
            error: match self {
                GatewayError::Upstream(detail) => Some(detail),
                _ => None,
            },
        };
        (status, Json(body)).into_response()
    }
}
