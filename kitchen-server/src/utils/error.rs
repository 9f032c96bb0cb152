//! 统一错误处理
//!
//! 提供应用级错误类型和响应结构：
//! - [`AppError`] - 应用错误枚举
//! - [`AppResponse`] - API 响应结构
//!
//! 业务错误 ([`KitchenError`]) 原样携带结构化数据返回给调用方,
//! UI 据此解释失败原因 (item id, from/to 状态)。
//!
//! # 错误码映射
//!
//! | 业务错误 | HTTP | 错误码 |
//! |----------|------|--------|
//! | ItemNotFound | 404 | E0003 |
//! | InvalidTransition | 422 | E0005 |
//! | ConcurrencyConflict | 409 | E0004 |
//! | Source | 500 | E9002 |

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

use shared::kitchen::KitchenError;

/// API 统一响应结构
///
/// ```json
/// {
///   "code": "E0000",
///   "message": "success",
///   "data": { ... }
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct AppResponse<T> {
    /// 错误码 (E0000 表示成功)
    pub code: String,
    /// 消息
    pub message: String,
    /// 响应数据 (成功) 或错误详情 (失败)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

/// 应用错误枚举
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 厨房业务错误 (携带结构化数据)
    #[error(transparent)]
    Kitchen(#[from] KitchenError),

    /// 资源不存在 (404)
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// 验证失败 (400)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// 内部错误 (500)
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, data) = match &self {
            AppError::Kitchen(err) => {
                let (status, code) = match err {
                    KitchenError::ItemNotFound { .. } => (StatusCode::NOT_FOUND, "E0003"),
                    KitchenError::InvalidTransition { .. } => {
                        (StatusCode::UNPROCESSABLE_ENTITY, "E0005")
                    }
                    KitchenError::ConcurrencyConflict { .. } => (StatusCode::CONFLICT, "E0004"),
                    KitchenError::Source { .. } => {
                        error!(target: "order_source", error = %err, "Order source failure");
                        (StatusCode::INTERNAL_SERVER_ERROR, "E9002")
                    }
                };
                // 业务错误的结构化数据原样下发
                let data = serde_json::to_value(err).ok();
                (status, code, err.to_string(), data)
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "E0003", msg.clone(), None),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "E0002", msg.clone(), None),
            AppError::Internal(msg) => {
                error!(target: "internal", error = %msg, "Internal error occurred");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "E9001",
                    "Internal server error".to_string(),
                    None,
                )
            }
        };

        let body = Json(AppResponse {
            code: code.to_string(),
            message,
            data,
        });

        (status, body).into_response()
    }
}

// ========== Helper functions ==========

/// Create a successful response
pub fn ok<T: Serialize>(data: T) -> Json<AppResponse<T>> {
    Json(AppResponse {
        code: "E0000".to_string(),
        message: "Success".to_string(),
        data: Some(data),
    })
}
