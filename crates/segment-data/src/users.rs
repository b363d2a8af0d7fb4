//! 演示用户记录集
//!
//! 五名画像各异的用户，供集成测试与基准测试使用。

use query_engine::Record;
use serde_json::json;

/// 演示用的用户记录集
pub fn demo_users() -> Vec<Record> {
    vec![
        Record::new(json!({
            "id": 1,
            "distinctId": "user_001_alice",
            "name": "Alice Johnson",
            "age": 25,
            "email": "alice@example.com",
            "created_at": "2026-01-01",
            "country": "USA",
            "plan": "Pro",
            "isPremium": true,
            "sessions": 120,
            "lifetimeValue": 2400,
            "signupDate": "2026-01-01",
            "lastActive": "2026-01-04"
        })),
        Record::new(json!({
            "id": 2,
            "distinctId": "user_002_bob",
            "name": "Bob Smith",
            "age": 32,
            "email": "bob@example.com",
            "created_at": "2026-01-02",
            "country": "UK",
            "plan": "Basic",
            "isPremium": false,
            "sessions": 80,
            "lifetimeValue": 1200,
            "signupDate": "2026-01-02",
            "lastActive": "2026-01-03"
        })),
        Record::new(json!({
            "id": 3,
            "distinctId": "user_003_charlie",
            "name": "Charlie Brown",
            "age": 28,
            "email": "charlie@example.com",
            "created_at": "2026-01-03",
            "country": "Canada",
            "plan": "Enterprise",
            "isPremium": true,
            "sessions": 200,
            "lifetimeValue": 4800,
            "signupDate": "2025-12-15",
            "lastActive": "2026-01-06"
        })),
        Record::new(json!({
            "id": 4,
            "distinctId": "user_004_david",
            "name": "David Miller",
            "age": 45,
            "email": "david@example.com",
            "created_at": "2026-01-04",
            "country": "Germany",
            "plan": "Pro",
            "isPremium": false,
            "sessions": 50,
            "lifetimeValue": 1000,
            "signupDate": "2025-11-20",
            "lastActive": "2026-01-02"
        })),
        Record::new(json!({
            "id": 5,
            "distinctId": "user_005_eva",
            "name": "Eva Wilson",
            "age": 22,
            "email": "eva@example.com",
            "created_at": "2026-01-05",
            "country": "France",
            "plan": "Free",
            "isPremium": false,
            "sessions": 20,
            "lifetimeValue": 200,
            "signupDate": "2026-01-05",
            "lastActive": "2026-01-05"
        })),
    ]
}
