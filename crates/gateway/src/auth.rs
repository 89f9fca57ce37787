//! # クライアント認証
//!
//! `Authorization` ヘッダーからアクセストークンを取り出す。
//! トークン自体はGatewayでは検証せず、Devvio APIにそのまま転送する。

use axum::http::header::AUTHORIZATION;
use axum::http::HeaderMap;

use crate::error::GatewayError;

/// `Authorization` ヘッダーからBearerトークンを取り出す。
///
/// ヘッダー値を半角スペースで分割した2番目の要素をトークンとする。
/// スキーム名（`Bearer`）は検査しない。
/// 可視ASCII以外のバイトを含むヘッダー値は形式不正として扱う。
pub(crate) fn bearer_token(headers: &HeaderMap) -> Result<String, GatewayError> {
    let value = match headers.get(AUTHORIZATION) {
        Some(value) if !value.is_empty() => value,
        _ => return Err(GatewayError::MissingToken),
    };

    let value = value
        .to_str()
        .map_err(|_| GatewayError::InvalidTokenFormat)?;

    match value.split(' ').nth(1) {
        Some(token) if !token.is_empty() => Ok(token.to_string()),
        _ => Err(GatewayError::InvalidTokenFormat),
    }
}
