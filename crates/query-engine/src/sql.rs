//! SQL 编译器
//!
//! 将规则树渲染为预览用的 SELECT 语句。输出仅供人工查看和调试，
//! 不做参数绑定，字符串字面量中的引号不转义（已知限制）。

use crate::models::{Rule, RuleGroup, RuleNode};
use serde_json::Value;

/// SQL 编译器
#[derive(Debug, Clone)]
pub struct SqlCompiler {
    table: String,
}

impl SqlCompiler {
    /// 默认目标表为 `users`
    pub fn new() -> Self {
        Self::with_table("users")
    }

    /// 指定目标表名
    pub fn with_table(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
        }
    }

    /// 将规则树编译为完整的 SELECT 语句
    ///
    /// 对结构合法的规则树总是成功，输出以分号结尾；
    /// 顶层组为空时不渲染 WHERE 子句。
    pub fn compile(&self, group: &RuleGroup) -> String {
        if group.rules.is_empty() {
            return format!("SELECT * FROM {};", self.table);
        }

        format!(
            "SELECT * FROM {} WHERE {};",
            self.table,
            Self::render_group(group)
        )
    }

    /// 渲染规则组：子节点按插入顺序用组合符关键字连接，嵌套组加括号
    fn render_group(group: &RuleGroup) -> String {
        let separator = format!(" {} ", group.combinator);

        group
            .rules
            .iter()
            .map(|node| match node {
                RuleNode::Group(child) => format!("({})", Self::render_group(child)),
                RuleNode::Rule(rule) => Self::render_rule(rule),
            })
            .collect::<Vec<_>>()
            .join(&separator)
    }

    /// 渲染叶子规则；多选值一律渲染为 IN 子句，与名义操作符无关
    fn render_rule(rule: &Rule) -> String {
        match &rule.value {
            Value::Array(items) => {
                let literals = items
                    .iter()
                    .map(Self::render_literal)
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("{} IN ({})", rule.field, literals)
            }
            value => format!(
                "{} {} {}",
                rule.field,
                rule.operator,
                Self::render_literal(value)
            ),
        }
    }

    /// 渲染标量字面量：字符串加单引号，数值/布尔原样，空值渲染为 NULL
    fn render_literal(value: &Value) -> String {
        match value {
            Value::String(s) => format!("'{}'", s),
            Value::Null => "NULL".to_string(),
            other => other.to_string(),
        }
    }
}

impl Default for SqlCompiler {
    fn default() -> Self {
        Self::new()
    }
}
