//! 查询引擎错误类型

use thiserror::Error;

#[derive(Debug, Error)]
pub enum QueryError {
    #[error("规则树解析失败: {0}")]
    Parse(String),

    #[error("未知操作符: {0}")]
    UnknownOperator(String),

    #[error("JSON 序列化错误: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, QueryError>;
