//! 查询操作符定义
//!
//! 序列化格式与外部规则编辑器的操作符标记保持一致。

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// 条件操作符
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Operator {
    // 相等比较
    Eq,
    Neq,

    // 排序比较（数值或日期）
    Gt,
    Gte,
    Lt,
    Lte,

    // 字符串操作
    Contains,
    BeginsWith,
    EndsWith,

    /// 编辑器产出的未知标记（保留原文，策略在评估时决定）
    Unknown(String),
}

impl Operator {
    /// 从编辑器的操作符标记解析，`==` 归一化为 `=`
    pub fn parse(token: &str) -> Self {
        match token {
            "=" | "==" => Self::Eq,
            "!=" => Self::Neq,
            ">" => Self::Gt,
            ">=" => Self::Gte,
            "<" => Self::Lt,
            "<=" => Self::Lte,
            "contains" => Self::Contains,
            "beginsWith" => Self::BeginsWith,
            "endsWith" => Self::EndsWith,
            other => Self::Unknown(other.to_string()),
        }
    }

    /// 操作符标记，同时也是 SQL 预览中的渲染形式
    pub fn as_str(&self) -> &str {
        match self {
            Self::Eq => "=",
            Self::Neq => "!=",
            Self::Gt => ">",
            Self::Gte => ">=",
            Self::Lt => "<",
            Self::Lte => "<=",
            Self::Contains => "contains",
            Self::BeginsWith => "beginsWith",
            Self::EndsWith => "endsWith",
            Self::Unknown(raw) => raw,
        }
    }

    /// 是否为排序比较操作符
    pub fn is_ordering(&self) -> bool {
        matches!(self, Self::Gt | Self::Gte | Self::Lt | Self::Lte)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for Operator {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Operator {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let token = String::deserialize(deserializer)?;
        Ok(Self::parse(&token))
    }
}

/// 组合符（规则组的 AND/OR 连接语义）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Combinator {
    And,
    Or,
}

impl Combinator {
    /// 折叠种子：AND 空组恒真，OR 空组恒假
    pub fn seed(&self) -> bool {
        matches!(self, Self::And)
    }

    /// 自左向右折叠一步
    pub fn fold(&self, acc: bool, next: bool) -> bool {
        match self {
            Self::And => acc && next,
            Self::Or => acc || next,
        }
    }
}

impl fmt::Display for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::And => write!(f, "AND"),
            Self::Or => write!(f, "OR"),
        }
    }
}
