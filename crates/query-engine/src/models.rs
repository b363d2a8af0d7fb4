//! 查询领域模型
//!
//! 规则树由外部规则编辑器以 JSON 形式产出：带 `rules` 集合的节点是组，
//! 否则是叶子规则。引擎只读规则树，不做任何结构修改。

use crate::error::{QueryError, Result};
use crate::operators::{Combinator, Operator};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashSet;

/// 叶子规则（单个条件）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rule {
    pub field: String,
    pub operator: Operator,
    /// 期望值；数组表示多选值，缺省为 Null（约束尚未填写）
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub value: Value,
}

impl Rule {
    pub fn new(field: impl Into<String>, operator: Operator, value: impl Into<Value>) -> Self {
        Self {
            field: field.into(),
            operator,
            value: value.into(),
        }
    }
}

/// 规则树节点（组或叶子规则）
///
/// 组声明在前：反序列化时带 `combinator` + `rules` 的节点优先按组解析。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RuleNode {
    Group(RuleGroup),
    Rule(Rule),
}

/// 规则组
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleGroup {
    pub combinator: Combinator,
    pub rules: Vec<RuleNode>,
}

impl RuleGroup {
    pub fn new(combinator: Combinator, rules: Vec<RuleNode>) -> Self {
        Self { combinator, rules }
    }

    pub fn and(rules: Vec<RuleNode>) -> Self {
        Self::new(Combinator::And, rules)
    }

    pub fn or(rules: Vec<RuleNode>) -> Self {
        Self::new(Combinator::Or, rules)
    }

    /// 从编辑器产出的 JSON 解析规则树，并做边界校验
    pub fn from_json(json: &str) -> Result<Self> {
        let group: RuleGroup = serde_json::from_str(json)?;
        group.validate()?;
        Ok(group)
    }

    /// 边界校验：叶子规则的字段名不能为空
    pub fn validate(&self) -> Result<()> {
        Self::validate_nodes(&self.rules, "root")
    }

    fn validate_nodes(nodes: &[RuleNode], path: &str) -> Result<()> {
        for (i, node) in nodes.iter().enumerate() {
            match node {
                RuleNode::Rule(rule) if rule.field.is_empty() => {
                    return Err(QueryError::Parse(format!(
                        "规则 '{}.rules[{}]' 的字段名不能为空",
                        path, i
                    )));
                }
                RuleNode::Group(group) => {
                    let child_path = format!("{}.rules[{}]", path, i);
                    Self::validate_nodes(&group.rules, &child_path)?;
                }
                RuleNode::Rule(_) => {}
            }
        }

        Ok(())
    }

    /// 收集规则树中引用到的所有字段名
    pub fn referenced_fields(&self) -> HashSet<String> {
        let mut fields = HashSet::new();
        Self::collect_fields(&self.rules, &mut fields);
        fields
    }

    fn collect_fields(nodes: &[RuleNode], fields: &mut HashSet<String>) {
        for node in nodes {
            match node {
                RuleNode::Rule(rule) => {
                    fields.insert(rule.field.clone());
                }
                RuleNode::Group(group) => {
                    Self::collect_fields(&group.rules, fields);
                }
            }
        }
    }
}

/// 记录 - 扁平的字段名到标量值映射，评估期间只读
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(flatten)]
    fields: Map<String, Value>,
}

impl Record {
    /// 从 JSON 对象创建；非对象输入产生空记录
    pub fn new(data: Value) -> Self {
        match data {
            Value::Object(fields) => Self { fields },
            _ => Self::default(),
        }
    }

    pub fn from_json(json: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// 读取字段值；字段缺失或为 null 时返回 None
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field).filter(|v| !v.is_null())
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }
}
