//! CSV 加载器
//!
//! 纯解析：字节 → [`RawTable`]，不触碰存储。
//! 解码策略：UTF-8，容忍字节序标记（BOM）；解码失败返回
//! [`TableError::DecodeFailed`]。

use crate::error::{AppError, AppResult};
use crate::models::table::{CellValue, RawTable};

/// UTF-8 字节序标记
const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// 将 CSV 字节解析为原始表格
///
/// 第一行作为表头；数据行允许长短不一：缺失的单元格补为空，
/// 超出表头的单元格丢弃。空字符串单元格视为空值。
pub fn load_csv_table(bytes: &[u8], delimiter: u8) -> AppResult<RawTable> {
    let text = decode_utf8(bytes)?;

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .from_reader(text.as_bytes());

    let columns: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut table = RawTable::with_columns(columns);

    for result in reader.records() {
        let record = result?;
        let mut row = Vec::with_capacity(table.columns.len());
        for col_idx in 0..table.columns.len() {
            let cell = match record.get(col_idx) {
                Some("") | None => CellValue::Empty,
                Some(value) => CellValue::Text(value.to_string()),
            };
            row.push(cell);
        }
        table.rows.push(row);
    }

    Ok(table)
}

/// BOM 容忍的 UTF-8 解码
fn decode_utf8(bytes: &[u8]) -> AppResult<String> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    String::from_utf8(bytes.to_vec()).map_err(AppError::decode_failed)
}
