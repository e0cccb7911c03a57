//! 表头校验服务 - 业务能力层
//!
//! 只负责"比对列集合"能力，不关心流程
//!
//! 职责：
//! - 将表格的列集合与模板字段表比对
//! - 永不返回 Err，始终给出结构化的比对结果
//! - 不出现 Vec<NormalizedRecord>
//! - 不关心流程顺序

use std::collections::HashSet;

use tracing::warn;

use crate::models::table::RawTable;
use crate::schema::Schema;

/// 表头比对结果
///
/// 缺失列才会阻断批次；多余列仅作为诊断信息保留。
/// 两个列表都已排序，保证诊断输出确定。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// 模板要求但表格缺失的列
    pub missing_keys: Vec<String>,
    /// 表格存在但模板不需要的列
    pub extra_keys: Vec<String>,
}

impl ValidationReport {
    /// 校验是否通过（仅由缺失列决定）
    pub fn is_ok(&self) -> bool {
        self.missing_keys.is_empty()
    }
}

/// 表头校验服务
pub struct SchemaValidator;

impl SchemaValidator {
    /// 比对表格列集合与字段表
    ///
    /// 比对是精确匹配（区分大小写），与列顺序无关；
    /// 大小写不一致的列会同时出现在缺失列和多余列中。
    /// 零数据行的表格只要列集合正确即视为有效输入。
    pub fn validate(table: &RawTable, schema: &Schema) -> ValidationReport {
        let discovered: HashSet<&str> = table.columns.iter().map(|c| c.as_str()).collect();

        let mut missing_keys: Vec<String> = schema
            .keys()
            .filter(|key| !discovered.contains(key))
            .map(|key| key.to_string())
            .collect();
        missing_keys.sort();

        let mut extra_keys: Vec<String> = table
            .columns
            .iter()
            .filter(|column| !schema.contains_key(column))
            .cloned()
            .collect();
        extra_keys.sort();
        extra_keys.dedup();

        if !extra_keys.is_empty() {
            warn!("⚠️ 表格包含模板未使用的列: [{}]", extra_keys.join(", "));
        }

        ValidationReport {
            missing_keys,
            extra_keys,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::table::RawTable;

    fn table_with(columns: &[&str]) -> RawTable {
        RawTable::with_columns(columns.iter().map(|c| c.to_string()).collect())
    }

    fn full_schema_columns() -> Vec<&'static str> {
        Schema::program_fields().keys().collect()
    }

    #[test]
    fn test_exact_columns_pass() {
        let schema = Schema::program_fields();
        let table = table_with(&full_schema_columns());
        let report = SchemaValidator::validate(&table, &schema);
        assert!(report.is_ok());
        assert!(report.missing_keys.is_empty());
        assert!(report.extra_keys.is_empty());
    }

    #[test]
    fn test_missing_column_named_exactly() {
        let schema = Schema::program_fields();
        let columns: Vec<&str> = full_schema_columns()
            .into_iter()
            .filter(|c| *c != "developer_name")
            .collect();
        let report = SchemaValidator::validate(&table_with(&columns), &schema);
        assert!(!report.is_ok());
        assert_eq!(report.missing_keys, vec!["developer_name".to_string()]);
    }

    #[test]
    fn test_extra_column_is_diagnostic_only() {
        let schema = Schema::program_fields();
        let mut columns = full_schema_columns();
        columns.push("unused_note");
        let report = SchemaValidator::validate(&table_with(&columns), &schema);
        assert!(report.is_ok());
        assert_eq!(report.extra_keys, vec!["unused_note".to_string()]);
    }

    #[test]
    fn test_case_mismatch_counts_as_missing() {
        let schema = Schema::program_fields();
        let columns: Vec<String> = full_schema_columns()
            .into_iter()
            .map(|c| {
                if c == "year" {
                    "Year".to_string()
                } else {
                    c.to_string()
                }
            })
            .collect();
        let table = RawTable::with_columns(columns);
        let report = SchemaValidator::validate(&table, &schema);
        assert_eq!(report.missing_keys, vec!["year".to_string()]);
        assert_eq!(report.extra_keys, vec!["Year".to_string()]);
    }

    #[test]
    fn test_column_order_irrelevant() {
        let schema = Schema::program_fields();
        let mut columns = full_schema_columns();
        columns.reverse();
        let report = SchemaValidator::validate(&table_with(&columns), &schema);
        assert!(report.is_ok());
    }
}
