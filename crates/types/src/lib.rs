//! # Devvio Proxy 共有型定義
//!
//! クライアントから受け取るリクエストボディ、Devvio APIへ送るペイロード、
//! Gatewayが返すエラーボディをRust構造体として提供する。
//!
//! ## フィールド名の規則
//! - ワイヤ上のフィールド名はcamelCase（`coinId`, `verifyCode` 等）
//! - サーバー秘密鍵のフィールドのみ小文字の `apikey`（Devvio APIが要求する名前）

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

// ---------------------------------------------------------------------------
// チェックサム入力スカラー
// ---------------------------------------------------------------------------

/// チェックサム計算の入力となるJSONスカラー（文字列または数値）。
///
/// `Display` は正準文字列形式を返す。整数はそのまま10進表記、
/// 浮動小数点はECMAScriptの `Number::toString` と同じ表記になる
/// （`100.0` → `100`、`0.000001` → `0.000001`、`1e21` → `1e+21`）。
/// シリアライズ時は元の種類（文字列/数値）のまま出力されるため、
/// Devvio APIにはクライアントが送った値がそのまま中継される。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LedgerScalar {
    /// JSON数値
    Number(serde_json::Number),
    /// JSON文字列
    Text(String),
}

impl fmt::Display for LedgerScalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LedgerScalar::Text(s) => f.write_str(s),
            LedgerScalar::Number(n) => match n.as_f64() {
                Some(v) if n.is_f64() => f.write_str(ryu_js::Buffer::new().format(v)),
                _ => write!(f, "{n}"),
            },
        }
    }
}

impl From<&str> for LedgerScalar {
    fn from(s: &str) -> Self {
        LedgerScalar::Text(s.to_string())
    }
}

impl From<String> for LedgerScalar {
    fn from(s: String) -> Self {
        LedgerScalar::Text(s)
    }
}

impl From<u64> for LedgerScalar {
    fn from(n: u64) -> Self {
        LedgerScalar::Number(n.into())
    }
}

impl From<i64> for LedgerScalar {
    fn from(n: i64) -> Self {
        LedgerScalar::Number(n.into())
    }
}

// ---------------------------------------------------------------------------
// クライアントリクエスト
// ---------------------------------------------------------------------------

/// POST /api/checkBalance のリクエストボディ。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceRequest {
    /// 残高を照会するコインIDの一覧（形式はDevvio側で検証される）
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub coin_ids: Option<serde_json::Value>,
}

/// POST /api/confirm のリクエストボディ。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmSignUpRequest {
    /// サインアップしたユーザー名
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub username: Option<serde_json::Value>,
    /// メール等で届いた確認コード
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub verify_code: Option<serde_json::Value>,
}

/// 明示的な `null` を `Some(Value::Null)` として保持する（未指定のみ `None`）。
fn present<'de, D>(deserializer: D) -> Result<Option<serde_json::Value>, D::Error>
where
    D: Deserializer<'de>,
{
    serde_json::Value::deserialize(deserializer).map(Some)
}

/// POST /api/createAsset のリクエストボディ。
///
/// 3フィールドはすべてチェックサム計算に使われるため、
/// Gateway側で存在を検証してから中継する。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAssetRequest {
    /// 発行するアセット（コイン）のID
    #[serde(default)]
    pub coin_id: Option<LedgerScalar>,
    /// 発行量
    #[serde(default)]
    pub amount: Option<LedgerScalar>,
    /// 発行先クライアントのID
    #[serde(default)]
    pub client_id: Option<LedgerScalar>,
}

// ---------------------------------------------------------------------------
// Devvio API ペイロード
// ---------------------------------------------------------------------------

/// `POST {base}/core/wallet/balances` に送るペイロード。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalancePayload {
    /// クライアントから受け取ったコインID一覧
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coin_ids: Option<serde_json::Value>,
    /// サーバー秘密鍵
    pub apikey: String,
}

/// `POST {base}/auth/confirmSignUp` に送るペイロード。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmSignUpPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verify_code: Option<serde_json::Value>,
    /// サーバー秘密鍵
    pub apikey: String,
}

/// `POST {base}/core/asset/create` に送るペイロード。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAssetPayload {
    pub coin_id: LedgerScalar,
    pub amount: LedgerScalar,
    pub client_id: LedgerScalar,
    /// SHA-256(coinId + apikey + amount + clientId) の16進表記
    pub checksum: String,
    /// サーバー秘密鍵
    pub apikey: String,
}

// ---------------------------------------------------------------------------
// エラーレスポンス
// ---------------------------------------------------------------------------

/// Gateway自身が返すエラーレスポンスのボディ。
/// 上流（Devvio）のエラーはこの型を経由せずそのまま中継される。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageBody {
    /// 人間が読めるエラーメッセージ
    pub message: String,
    /// 上流通信失敗時の詳細
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
