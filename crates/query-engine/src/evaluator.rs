//! 条件评估器
//!
//! 实现各操作符对单条记录的匹配判定：统一的小写字符串比较、
//! 多选值的 IN 式匹配，以及数值/日期归一化后的排序比较。

use crate::error::{QueryError, Result};
use crate::operators::Operator;
use chrono::{DateTime, NaiveDate};
use serde_json::Value;

/// 条件评估器
pub struct ConditionEvaluator;

impl ConditionEvaluator {
    /// 评估单个条件
    ///
    /// 字段值或期望值缺失时一律判为不匹配（包括 `!=`），
    /// 保证评估对任意输入都有定义且无副作用。
    /// 未知操作符返回错误，宽容策略由执行器决定。
    ///
    /// # Arguments
    /// * `field_value` - 从记录中读出的字段值
    /// * `operator` - 操作符
    /// * `expected_value` - 规则中定义的期望值
    pub fn evaluate(
        field_value: Option<&Value>,
        operator: &Operator,
        expected_value: &Value,
    ) -> Result<bool> {
        if let Operator::Unknown(raw) = operator {
            return Err(QueryError::UnknownOperator(raw.clone()));
        }

        // 任一操作数缺失即不匹配
        let field_value = match field_value {
            Some(v) if !v.is_null() => v,
            _ => return Ok(false),
        };

        let expected = Self::normalize_values(expected_value);
        if expected.is_empty() {
            return Ok(false);
        }

        if operator.is_ordering() {
            return Ok(Self::compare_ordering(field_value, expected_value, operator));
        }

        let field_text = match Self::scalar_text(field_value) {
            Some(s) => s.to_lowercase(),
            None => return Ok(false),
        };

        Ok(match operator {
            // 相等类与字符串操作符对多选值取 OR 语义：任一期望值满足即匹配
            Operator::Eq => expected.iter().any(|v| field_text == v.to_lowercase()),
            Operator::Contains => expected
                .iter()
                .any(|v| field_text.contains(&v.to_lowercase())),
            Operator::BeginsWith => expected
                .iter()
                .any(|v| field_text.starts_with(&v.to_lowercase())),
            Operator::EndsWith => expected
                .iter()
                .any(|v| field_text.ends_with(&v.to_lowercase())),
            // `!=` 取 AND 语义：字段必须不同于所有期望值
            Operator::Neq => expected.iter().all(|v| field_text != v.to_lowercase()),
            _ => unreachable!("排序与未知操作符已在前面处理"),
        })
    }

    /// 排序比较：双方都能归一化为可比较数值时才有定义，否则不匹配
    fn compare_ordering(field: &Value, expected: &Value, operator: &Operator) -> bool {
        let (Some(lhs), Some(rhs)) = (Self::to_comparable(field), Self::to_comparable(expected))
        else {
            return false;
        };

        match operator {
            Operator::Gt => lhs > rhs,
            Operator::Gte => lhs >= rhs,
            Operator::Lt => lhs < rhs,
            Operator::Lte => lhs <= rhs,
            _ => false,
        }
    }

    /// 归一化为可比较数值：数字直接通过，字符串先按日期、再按数字解析。
    /// 同一个操作符因此既可服务数值字段也可服务日期字段。
    fn to_comparable(value: &Value) -> Option<f64> {
        match value {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => Self::parse_date(s)
                .map(|t| t as f64)
                .or_else(|| s.parse::<f64>().ok()),
            _ => None,
        }
    }

    /// 解析日期时间为 Unix 时间戳（秒）
    fn parse_date(s: &str) -> Option<i64> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Some(dt.timestamp());
        }

        if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            return date.and_hms_opt(0, 0, 0).map(|t| t.and_utc().timestamp());
        }

        None
    }

    /// 将期望值归一化为字符串列表：单值视为单元素列表，
    /// 统一单选与多选的匹配路径；空字符串视为约束缺失。
    fn normalize_values(value: &Value) -> Vec<String> {
        let text = |v: &Value| Self::scalar_text(v).filter(|s| !s.is_empty());

        match value {
            Value::Array(items) => items.iter().filter_map(text).collect(),
            other => text(other).into_iter().collect(),
        }
    }

    /// 标量值的文本形式；嵌套结构不参与比较
    fn scalar_text(value: &Value) -> Option<String> {
        match value {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }
}
