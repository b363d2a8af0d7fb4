//! 查询执行器
//!
//! 对记录集执行规则树的递归折叠评估。诊断事件通过调用方注入的
//! 观察者上报，核心自身不持有全局状态、不产生副作用。

use crate::error::QueryError;
use crate::evaluator::ConditionEvaluator;
use crate::models::{Record, Rule, RuleGroup, RuleNode};
use std::sync::Arc;
use tracing::{debug, warn};

/// 查询诊断观察者
pub trait QueryObserver: Send + Sync {
    /// 遇到未知操作符（宽容策略：该规则按匹配处理）
    fn on_unknown_operator(&self, field: &str, operator: &str) {
        let _ = (field, operator);
    }

    /// 单条规则评估完成
    fn on_rule_evaluated(&self, field: &str, operator: &str, matched: bool) {
        let _ = (field, operator, matched);
    }
}

/// 默认观察者：诊断事件写入 tracing
#[derive(Debug, Default)]
pub struct TracingObserver;

impl QueryObserver for TracingObserver {
    fn on_unknown_operator(&self, field: &str, operator: &str) {
        warn!(field, operator, "未知操作符，规则按匹配处理");
    }

    fn on_rule_evaluated(&self, field: &str, operator: &str, matched: bool) {
        debug!(field, operator, matched, "规则评估完成");
    }
}

/// 查询执行器
#[derive(Clone)]
pub struct QueryExecutor {
    observer: Arc<dyn QueryObserver>,
}

impl QueryExecutor {
    pub fn new() -> Self {
        Self {
            observer: Arc::new(TracingObserver),
        }
    }

    /// 使用调用方提供的观察者
    pub fn with_observer(observer: Arc<dyn QueryObserver>) -> Self {
        Self { observer }
    }

    /// 过滤记录集，返回保持输入顺序的匹配子序列
    ///
    /// 顶层组没有规则时视为无约束，返回全部记录（与组合符无关）。
    pub fn filter(&self, group: &RuleGroup, records: &[Record]) -> Vec<Record> {
        if group.rules.is_empty() {
            return records.to_vec();
        }

        records
            .iter()
            .filter(|record| self.matches(group, record))
            .cloned()
            .collect()
    }

    /// 判定单条记录是否匹配规则树
    pub fn matches(&self, group: &RuleGroup, record: &Record) -> bool {
        self.evaluate_group(group, record)
    }

    /// 递归评估规则组：从组合符的种子开始，按插入顺序自左向右折叠
    fn evaluate_group(&self, group: &RuleGroup, record: &Record) -> bool {
        let mut acc = group.combinator.seed();

        for node in &group.rules {
            let result = match node {
                RuleNode::Group(child) => self.evaluate_group(child, record),
                RuleNode::Rule(rule) => self.evaluate_rule(rule, record),
            };
            acc = group.combinator.fold(acc, result);
        }

        acc
    }

    /// 评估叶子规则；未知操作符上报后按匹配处理，
    /// 避免单条配置错误的规则悄悄吞掉整个结果集
    fn evaluate_rule(&self, rule: &Rule, record: &Record) -> bool {
        let matched = match ConditionEvaluator::evaluate(
            record.get(&rule.field),
            &rule.operator,
            &rule.value,
        ) {
            Ok(matched) => matched,
            Err(QueryError::UnknownOperator(_)) => {
                self.observer
                    .on_unknown_operator(&rule.field, rule.operator.as_str());
                true
            }
            Err(_) => false,
        };

        self.observer
            .on_rule_evaluated(&rule.field, rule.operator.as_str(), matched);
        matched
    }
}

impl Default for QueryExecutor {
    fn default() -> Self {
        Self::new()
    }
}
