//! # Gateway設定・共有状態
//!
//! 環境変数からの設定読み込みとGatewayの共有状態の定義。
//! 設定は起動時に一度だけ読み込み、ハンドラには `State` として注入する。

use std::time::Duration;

use crate::error::GatewayError;

/// Devvio APIのデフォルトベースURL（テストネット）
pub const DEFAULT_BASE_URL: &str = "https://devve.testnet.devvio.com";

/// デフォルトの待ち受けアドレス
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

/// 上流呼び出しのデフォルトタイムアウト（秒）
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 30;

/// リクエストボディのデフォルト上限（バイト）
pub const DEFAULT_MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// 設定読み込みのエラー型
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// タイムアウト値が正の整数でない
    #[error("UPSTREAM_TIMEOUT_SECSは正の整数である必要があります: {0}")]
    InvalidTimeout(String),
    /// ボディ上限が正の整数でない
    #[error("MAX_BODY_BYTESは正の整数である必要があります: {0}")]
    InvalidBodyLimit(String),
    /// HTTPクライアントの構築に失敗
    #[error("HTTPクライアントの構築に失敗: {0}")]
    HttpClient(String),
}

/// Gateway設定。
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Devvio APIキー（`DEVVIO_API_KEY`）。未設定・空文字はNone。
    pub api_key: Option<String>,
    /// Devvio APIのベースURL（末尾の `/` は除去済み）
    pub base_url: String,
    /// 待ち受けアドレス
    pub bind_addr: String,
    /// 上流呼び出し1回あたりのタイムアウト
    pub upstream_timeout: Duration,
    /// リクエストボディの上限（バイト）
    pub max_body_bytes: usize,
}

impl GatewayConfig {
    /// プロセスの環境変数から設定を読み込む。
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// 任意の変数参照関数から設定を読み込む。
    ///
    /// | 変数 | デフォルト |
    /// |------|-----------|
    /// | `DEVVIO_API_KEY` | 未設定 |
    /// | `DEVVIO_BASE_URL` | [`DEFAULT_BASE_URL`] |
    /// | `GATEWAY_BIND_ADDR` | [`DEFAULT_BIND_ADDR`] |
    /// | `UPSTREAM_TIMEOUT_SECS` | [`DEFAULT_UPSTREAM_TIMEOUT_SECS`] |
    /// | `MAX_BODY_BYTES` | [`DEFAULT_MAX_BODY_BYTES`] |
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("DEVVIO_API_KEY").filter(|k| !k.is_empty());

        let base_url = lookup("DEVVIO_BASE_URL")
            .filter(|u| !u.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let base_url = base_url.trim().trim_end_matches('/').to_string();

        let bind_addr =
            lookup("GATEWAY_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());

        let upstream_timeout = match lookup("UPSTREAM_TIMEOUT_SECS") {
            None => Duration::from_secs(DEFAULT_UPSTREAM_TIMEOUT_SECS),
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => return Err(ConfigError::InvalidTimeout(raw)),
            },
        };

        let max_body_bytes = match lookup("MAX_BODY_BYTES") {
            None => DEFAULT_MAX_BODY_BYTES,
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(bytes) if bytes > 0 => bytes,
                _ => return Err(ConfigError::InvalidBodyLimit(raw)),
            },
        };

        Ok(Self {
            api_key,
            base_url,
            bind_addr,
            upstream_timeout,
            max_body_bytes,
        })
    }
}

/// Gatewayの共有状態。
pub struct GatewayState {
    /// 起動時に読み込んだ設定
    pub config: GatewayConfig,
    /// 上流呼び出し用HTTPクライアント（コネクションプールを共有）
    pub http_client: reqwest::Client,
}

impl GatewayState {
    /// 設定からHTTPクライアントを構築して共有状態を作る。
    pub fn new(config: GatewayConfig) -> Result<Self, ConfigError> {
        let http_client = reqwest::Client::builder()
            .timeout(config.upstream_timeout)
            .build()
            .map_err(|e| ConfigError::HttpClient(e.to_string()))?;

        Ok(Self {
            config,
            http_client,
        })
    }

    /// サーバー秘密鍵を返す。未設定なら上流呼び出し前に500で打ち切る。
    pub fn api_key(&self) -> Result<&str, GatewayError> {
        match self.config.api_key.as_deref() {
            Some(key) => Ok(key),
            None => {
                tracing::warn!("DEVVIO_API_KEYが未設定のためリクエストを拒否します");
                Err(GatewayError::ApiKeyNotConfigured)
            }
        }
    }
}
