//! 表格加载器
//!
//! 每种上传格式一个加载器模块；[`load_table`] 按声明的格式分派。
//! 扩展名检查在解析之前完成（快速失败，并在错误信息中列出支持的格式）。

pub mod csv_loader;
pub mod xlsx_loader;

use std::path::Path;

use crate::error::{AppError, AppResult};
use crate::models::table::RawTable;

pub use csv_loader::load_csv_table;
pub use xlsx_loader::load_xlsx_table;

/// 上传表格的声明格式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    /// 分隔文本（默认逗号分隔，UTF-8）
    Csv,
    /// Excel 工作簿（只读第一个工作表）
    Xlsx,
}

impl TableFormat {
    /// 支持的文件扩展名
    pub const ALLOWED_EXTENSIONS: &'static [&'static str] = &["csv", "xlsx"];

    /// 从文件路径推断格式；不支持的扩展名立即拒绝
    pub fn from_path(path: &Path) -> AppResult<Self> {
        let extension = path
            .extension()
            .and_then(|s| s.to_str())
            .unwrap_or("")
            .to_ascii_lowercase();

        match extension.as_str() {
            "csv" => Ok(TableFormat::Csv),
            "xlsx" => Ok(TableFormat::Xlsx),
            _ => Err(AppError::unsupported_format(
                extension,
                Self::ALLOWED_EXTENSIONS,
            )),
        }
    }
}

/// 按声明格式解析上传的表格字节
pub fn load_table(bytes: &[u8], format: TableFormat, csv_delimiter: u8) -> AppResult<RawTable> {
    match format {
        TableFormat::Csv => load_csv_table(bytes, csv_delimiter),
        TableFormat::Xlsx => load_xlsx_table(bytes),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TableError;

    #[test]
    fn test_format_from_known_extensions() {
        assert_eq!(
            TableFormat::from_path(Path::new("upload/data.csv")).unwrap(),
            TableFormat::Csv
        );
        assert_eq!(
            TableFormat::from_path(Path::new("DATA.XLSX")).unwrap(),
            TableFormat::Xlsx
        );
    }

    #[test]
    fn test_unsupported_extension_rejected_before_parse() {
        let err = TableFormat::from_path(Path::new("data.xls")).unwrap_err();
        match err {
            AppError::Table(TableError::UnsupportedFormat { extension, allowed }) => {
                assert_eq!(extension, "xls");
                assert_eq!(allowed, TableFormat::ALLOWED_EXTENSIONS);
            }
            other => panic!("意外的错误类型: {:?}", other),
        }
    }

    #[test]
    fn test_missing_extension_rejected() {
        assert!(TableFormat::from_path(Path::new("data")).is_err());
    }
}
