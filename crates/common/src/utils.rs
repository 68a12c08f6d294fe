//! 通用工具函数

use uuid::Uuid;

/// 生成请求追踪 ID（UUID v7，时间有序）
pub fn request_id() -> String {
    Uuid::now_v7().to_string()
}
