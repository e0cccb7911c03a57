//! 归一化记录
//!
//! 渲染层消费的唯一数据形态：字段表中的每个键都保证存在，
//! 缺失/空值落地为空字符串，构建完成后不再修改。

use std::collections::BTreeMap;

use crate::schema::Schema;

/// 归一化后的一行记录
///
/// 不变式：对字段表中的任意键，`get` 都返回 `Some`（可能为空串）。
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct NormalizedRecord {
    values: BTreeMap<String, String>,
}

impl NormalizedRecord {
    /// 由完整的键值映射构建（由归一化服务调用）
    pub(crate) fn from_values(values: BTreeMap<String, String>) -> Self {
        Self { values }
    }

    /// 取字段值；字段表内的键保证命中
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(|s| s.as_str())
    }

    /// 取字段值，未知键落地为空串
    pub fn get_or_empty(&self, key: &str) -> &str {
        self.get(key).unwrap_or("")
    }

    /// 字段数量
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// 遍历所有键值对
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// 是否覆盖了字段表的全部键
    pub fn covers(&self, schema: &Schema) -> bool {
        schema.keys().all(|k| self.values.contains_key(k))
    }
}
