//! 字段目录
//!
//! 描述记录集的字段形状。规则编辑器据此渲染字段下拉与操作符下拉，
//! 并在规则树到达引擎前完成字段名校验。

use query_engine::{Operator, RuleGroup};
use serde::{Deserialize, Serialize};

/// 字段数据类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    String,
    Number,
    Date,
    Boolean,
}

impl FieldType {
    /// 该类型适用的操作符（编辑器操作符下拉的选项来源）
    pub fn operators(&self) -> Vec<Operator> {
        match self {
            Self::Number | Self::Date => vec![
                Operator::Eq,
                Operator::Neq,
                Operator::Gt,
                Operator::Gte,
                Operator::Lt,
                Operator::Lte,
            ],
            Self::Boolean => vec![Operator::Eq, Operator::Neq],
            Self::String => vec![
                Operator::Eq,
                Operator::Neq,
                Operator::Contains,
                Operator::BeginsWith,
                Operator::EndsWith,
            ],
        }
    }
}

/// 字段定义
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldDef {
    pub name: String,
    pub label: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
}

impl FieldDef {
    pub fn new(name: impl Into<String>, label: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            field_type,
        }
    }
}

/// 字段目录
#[derive(Debug, Clone, Default)]
pub struct FieldCatalog {
    fields: Vec<FieldDef>,
}

impl FieldCatalog {
    pub fn new(fields: Vec<FieldDef>) -> Self {
        Self { fields }
    }

    /// 用户记录集的字段目录
    pub fn users() -> Self {
        Self::new(vec![
            FieldDef::new("distinctId", "Distinct ID", FieldType::String),
            FieldDef::new("id", "ID", FieldType::Number),
            FieldDef::new("name", "Name", FieldType::String),
            FieldDef::new("age", "Age", FieldType::Number),
            FieldDef::new("email", "Email", FieldType::String),
            FieldDef::new("created_at", "Created At", FieldType::Date),
            FieldDef::new("country", "Country", FieldType::String),
            FieldDef::new("plan", "Plan", FieldType::String),
            FieldDef::new("isPremium", "Premium User", FieldType::Boolean),
            FieldDef::new("sessions", "Sessions", FieldType::Number),
            FieldDef::new("lifetimeValue", "LTV", FieldType::Number),
            FieldDef::new("signupDate", "Signup Date", FieldType::Date),
            FieldDef::new("lastActive", "Last Active", FieldType::Date),
        ])
    }

    pub fn fields(&self) -> &[FieldDef] {
        &self.fields
    }

    pub fn get(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// 规则树中引用了但目录中不存在的字段名（排序后返回，便于展示）
    pub fn unknown_fields(&self, group: &RuleGroup) -> Vec<String> {
        let mut unknown: Vec<String> = group
            .referenced_fields()
            .into_iter()
            .filter(|name| self.get(name).is_none())
            .collect();
        unknown.sort();
        unknown
    }
}
