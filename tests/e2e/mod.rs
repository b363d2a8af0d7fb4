//! 端到端测试
//!
//! 模拟宿主应用的完整使用方式：编辑器产出规则树 JSON，
//! 字段目录做边界校验，引擎同步产出过滤结果与 SQL 预览。

use query_engine::{QueryExecutor, RuleGroup, SqlCompiler};
use segment_data::{demo_users, FieldCatalog};

/// 初始化测试日志订阅（RUST_LOG 控制级别，可观察评估追踪）
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn names(records: &[query_engine::Record]) -> Vec<String> {
    records
        .iter()
        .filter_map(|r| r.get("name").and_then(|v| v.as_str().map(String::from)))
        .collect()
}

#[test]
fn test_segmentation_workflow() {
    init_tracing();

    // 规则编辑器产出：高价值的付费用户分群
    let query_json = r#"
    {
        "combinator": "and",
        "rules": [
            { "field": "lifetimeValue", "operator": ">=", "value": 1200 },
            {
                "combinator": "or",
                "rules": [
                    { "field": "isPremium", "operator": "=", "value": true },
                    { "field": "sessions", "operator": ">", "value": 60 }
                ]
            }
        ]
    }
    "#;

    let query = RuleGroup::from_json(query_json).unwrap();

    // 边界校验：所有引用字段都在目录中
    let catalog = FieldCatalog::users();
    assert!(catalog.unknown_fields(&query).is_empty());

    // 过滤与编译在同一棵树上独立执行
    let filtered = QueryExecutor::new().filter(&query, &demo_users());
    assert_eq!(
        names(&filtered),
        vec!["Alice Johnson", "Bob Smith", "Charlie Brown"]
    );

    let sql = SqlCompiler::new().compile(&query);
    assert_eq!(
        sql,
        "SELECT * FROM users WHERE lifetimeValue >= 1200 AND (isPremium = true OR sessions > 60);"
    );
}

#[test]
fn test_multi_select_segmentation() {
    init_tracing();

    // 多选国家的排除式分群
    let query_json = r#"
    {
        "combinator": "and",
        "rules": [
            { "field": "country", "operator": "!=", "value": ["USA", "UK"] },
            { "field": "signupDate", "operator": "<", "value": "2026-01-01" }
        ]
    }
    "#;

    let query = RuleGroup::from_json(query_json).unwrap();

    let filtered = QueryExecutor::new().filter(&query, &demo_users());
    assert_eq!(names(&filtered), vec!["Charlie Brown", "David Miller"]);

    assert_eq!(
        SqlCompiler::new().compile(&query),
        "SELECT * FROM users WHERE country IN ('USA', 'UK') AND signupDate < '2026-01-01';"
    );
}

#[test]
fn test_empty_query_returns_everything() {
    init_tracing();

    let query = RuleGroup::from_json(r#"{ "combinator": "and", "rules": [] }"#).unwrap();

    let users = demo_users();
    assert_eq!(QueryExecutor::new().filter(&query, &users), users);
    assert_eq!(SqlCompiler::new().compile(&query), "SELECT * FROM users;");
}

#[test]
fn test_unknown_field_is_reported_not_fatal() {
    init_tracing();

    // 目录校验发现未知字段，但引擎评估依然有定义（该规则不匹配）
    let query_json = r#"
    {
        "combinator": "and",
        "rules": [ { "field": "zodiac", "operator": "=", "value": "leo" } ]
    }
    "#;

    let query = RuleGroup::from_json(query_json).unwrap();
    assert_eq!(
        FieldCatalog::users().unknown_fields(&query),
        vec!["zodiac"]
    );

    assert!(QueryExecutor::new().filter(&query, &demo_users()).is_empty());
}
