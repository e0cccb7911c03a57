//! XLSX 加载器
//!
//! 纯解析：字节 → [`RawTable`]。只读第一个工作表；第一行作为表头；
//! 全空行跳过。

use std::io::Cursor;

use calamine::{Data, Reader, Xlsx};

use crate::error::{AppError, AppResult, TableError};
use crate::models::table::{CellValue, RawTable};

/// 将 XLSX 字节解析为原始表格
pub fn load_xlsx_table(bytes: &[u8]) -> AppResult<RawTable> {
    let mut workbook: Xlsx<_> = Xlsx::new(Cursor::new(bytes.to_vec()))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| {
            AppError::Table(TableError::ParseFailed {
                format: "XLSX",
                source: Box::new(std::io::Error::new(
                    std::io::ErrorKind::InvalidData,
                    "工作簿中没有工作表",
                )),
            })
        })??;

    let mut rows = range.rows();

    let columns: Vec<String> = match rows.next() {
        Some(header) => header.iter().map(header_cell_to_string).collect(),
        None => Vec::new(),
    };

    let mut table = RawTable::with_columns(columns);

    for raw_row in rows {
        let mut row: Vec<CellValue> = raw_row.iter().map(convert_cell).collect();
        // 对齐到表头列数
        row.resize(table.columns.len(), CellValue::Empty);
        row.truncate(table.columns.len());

        if row.iter().all(CellValue::is_empty) {
            continue;
        }
        table.rows.push(row);
    }

    Ok(table)
}

/// 表头单元格转列名
fn header_cell_to_string(cell: &Data) -> String {
    convert_cell(cell).to_display_string()
}

/// XLSX 单元格类型映射
fn convert_cell(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Empty,
        Data::String(s) if s.is_empty() => CellValue::Empty,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Float(f) => CellValue::Number(*f),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(naive) => CellValue::Date(naive),
            None => CellValue::Number(dt.as_f64()),
        },
        Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::Text(s.clone()),
        // 公式错误单元格当作空值处理
        Data::Error(_) => CellValue::Empty,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_string_cell() {
        assert_eq!(
            convert_cell(&Data::String("ПМ.01".to_string())),
            CellValue::Text("ПМ.01".to_string())
        );
    }

    #[test]
    fn test_convert_numeric_cells() {
        assert_eq!(convert_cell(&Data::Int(2024)), CellValue::Number(2024.0));
        assert_eq!(convert_cell(&Data::Float(2.5)), CellValue::Number(2.5));
    }

    #[test]
    fn test_convert_empty_variants() {
        assert_eq!(convert_cell(&Data::Empty), CellValue::Empty);
        assert_eq!(
            convert_cell(&Data::String(String::new())),
            CellValue::Empty
        );
    }

    #[test]
    fn test_garbage_bytes_is_parse_error() {
        let err = load_xlsx_table(b"not a zip at all").unwrap_err();
        assert!(matches!(
            err,
            AppError::Table(TableError::ParseFailed { format: "XLSX", .. })
        ));
    }
}
