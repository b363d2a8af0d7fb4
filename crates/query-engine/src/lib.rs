//! 分群查询引擎
//!
//! 消费外部规则编辑器产出的规则树，提供两个相互独立的纯函数能力：
//! - 过滤评估：逐条判定记录是否匹配规则树
//! - SQL 编译：将同一棵规则树渲染为预览用的 WHERE 子句
//!
//! 两者都是单遍深度优先的树折叠，无共享可变状态，可并发调用。

pub mod error;
pub mod evaluator;
pub mod executor;
pub mod models;
pub mod operators;
pub mod sql;

pub use error::{QueryError, Result};
pub use evaluator::ConditionEvaluator;
pub use executor::{QueryExecutor, QueryObserver, TracingObserver};
pub use models::{Record, Rule, RuleGroup, RuleNode};
pub use operators::{Combinator, Operator};
pub use sql::SqlCompiler;
