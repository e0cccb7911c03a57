//! 原始表格数据结构
//!
//! 上传的表格被解析为 [`RawTable`]：有序列名 + 有序数据行。
//! 列集合来自文件本身，可能多于或少于模板字段表，由校验层判定。

use chrono::NaiveDateTime;

/// 单元格原始值
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// 文本（原样保留，不做裁剪）
    Text(String),
    /// 数值
    Number(f64),
    /// 日期时间
    Date(NaiveDateTime),
    /// 布尔
    Bool(bool),
    /// 空单元格
    Empty,
}

impl CellValue {
    /// 是否为空
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// 转换为与区域设置无关的字符串表示
    ///
    /// 整数值的浮点数不带小数部分（Excel 中 `2024` 读出为 `2024.0`，
    /// 这里还原成 `"2024"`）；日期只在时间部分非零时附带时分秒。
    pub fn to_display_string(&self) -> String {
        match self {
            CellValue::Text(s) => s.clone(),
            CellValue::Number(n) => {
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    format!("{}", *n as i64)
                } else {
                    format!("{}", n)
                }
            }
            CellValue::Date(dt) => {
                if dt.time() == chrono::NaiveTime::MIN {
                    dt.format("%Y-%m-%d").to_string()
                } else {
                    dt.format("%Y-%m-%d %H:%M:%S").to_string()
                }
            }
            CellValue::Bool(b) => b.to_string(),
            CellValue::Empty => String::new(),
        }
    }
}

/// 解析后的原始表格
///
/// 列顺序与数据行顺序均与源文件一致；每行的单元格按列位置对齐，
/// 行长度保证等于列数（解析层负责补齐）。
#[derive(Debug, Clone, Default)]
pub struct RawTable {
    /// 表头列名（源文件顺序）
    pub columns: Vec<String>,
    /// 数据行（源文件顺序）
    pub rows: Vec<Vec<CellValue>>,
}

impl RawTable {
    /// 创建空表格（仅表头）
    pub fn with_columns(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// 数据行数
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// 按列名取某行的单元格
    pub fn cell(&self, row_idx: usize, column: &str) -> Option<&CellValue> {
        let col_idx = self.columns.iter().position(|c| c == column)?;
        self.rows.get(row_idx)?.get(col_idx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_number_display_integral() {
        assert_eq!(CellValue::Number(2024.0).to_display_string(), "2024");
        assert_eq!(CellValue::Number(-3.0).to_display_string(), "-3");
    }

    #[test]
    fn test_number_display_fractional() {
        assert_eq!(CellValue::Number(2.5).to_display_string(), "2.5");
    }

    #[test]
    fn test_date_display_midnight_omits_time() {
        let dt = NaiveDate::from_ymd_opt(2024, 9, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert_eq!(CellValue::Date(dt).to_display_string(), "2024-09-01");
    }

    #[test]
    fn test_date_display_with_time() {
        let dt = NaiveDate::from_ymd_opt(2024, 9, 1)
            .unwrap()
            .and_hms_opt(10, 30, 0)
            .unwrap();
        assert_eq!(CellValue::Date(dt).to_display_string(), "2024-09-01 10:30:00");
    }

    #[test]
    fn test_text_not_trimmed() {
        assert_eq!(
            CellValue::Text("  ПМ.01 ".to_string()).to_display_string(),
            "  ПМ.01 "
        );
    }

    #[test]
    fn test_cell_lookup_by_column() {
        let table = RawTable {
            columns: vec!["a".to_string(), "b".to_string()],
            rows: vec![vec![CellValue::Text("x".to_string()), CellValue::Empty]],
        };
        assert_eq!(table.cell(0, "a"), Some(&CellValue::Text("x".to_string())));
        assert_eq!(table.cell(0, "b"), Some(&CellValue::Empty));
        assert_eq!(table.cell(0, "c"), None);
        assert_eq!(table.cell(1, "a"), None);
    }
}
