//! 记录归一化服务 - 业务能力层
//!
//! 只负责"原始行 → 完整记录"能力，不关心流程
//!
//! 规则：
//! - 缺失列 / 空单元格 → 空字符串
//! - 数值/日期 → 与区域设置无关的字符串表示
//! - 文本原样透传（不裁剪首尾空白）
//!
//! 对已通过表头校验的行，这一步是全函数：没有失败模式。

use std::collections::BTreeMap;

use crate::models::record::NormalizedRecord;
use crate::models::table::{CellValue, RawTable};
use crate::schema::Schema;

/// 记录归一化服务
pub struct RecordNormalizer;

impl RecordNormalizer {
    /// 将表格中的一行归一化为完整记录
    ///
    /// 输出保证覆盖字段表的全部键；行号越界时所有字段落为空串
    /// （与缺失单元格同等处理）。
    pub fn normalize_row(table: &RawTable, row_idx: usize, schema: &Schema) -> NormalizedRecord {
        let mut values = BTreeMap::new();

        for key in schema.keys() {
            let value = match table.cell(row_idx, key) {
                Some(cell) if !cell.is_empty() => cell.to_display_string(),
                _ => String::new(),
            };
            values.insert(key.to_string(), value);
        }

        NormalizedRecord::from_values(values)
    }

    /// 归一化整个表格，保持行顺序
    pub fn normalize_all(table: &RawTable, schema: &Schema) -> Vec<NormalizedRecord> {
        (0..table.row_count())
            .map(|row_idx| Self::normalize_row(table, row_idx, schema))
            .collect()
    }
}
