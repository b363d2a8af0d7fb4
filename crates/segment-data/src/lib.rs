//! 分群数据边界
//!
//! 提供查询引擎两个外部协作者的数据：规则编辑器使用的字段目录
//! （字段名、展示名、类型与适用操作符），以及演示用的用户记录集。

pub mod fields;
pub mod users;

pub use fields::{FieldCatalog, FieldDef, FieldType};
pub use users::demo_users;
