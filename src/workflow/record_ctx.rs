//! 记录处理上下文
//!
//! 封装"我正在处理第几行、它的关键字段是什么"这一信息，
//! 并由此派生压缩包条目名。

use std::fmt::Display;

use regex::Regex;

use crate::models::record::NormalizedRecord;
use crate::schema::ENTRY_KEY_FIELDS;

/// 记录处理上下文
#[derive(Debug, Clone)]
pub struct RecordCtx {
    /// 行号（从1开始，对应数据行顺序）
    pub row_index: usize,

    /// 模块代码（如 ПМ.01）
    pub module_code: String,

    /// 专业代码（如 09.02.06）
    pub specialty_code: String,
}

impl RecordCtx {
    /// 从记录与行号构建上下文
    pub fn new(record: &NormalizedRecord, row_index: usize) -> Self {
        Self {
            row_index,
            module_code: record.get_or_empty(ENTRY_KEY_FIELDS.0).to_string(),
            specialty_code: record.get_or_empty(ENTRY_KEY_FIELDS.1).to_string(),
        }
    }

    /// 派生压缩包条目名
    ///
    /// 纯函数：只依赖记录自身字段与行号，相同输入必得相同条目名。
    /// 不允许出现在条目名中的字符统一替换为下划线。
    pub fn entry_name(&self, sanitizer: &EntryNameSanitizer) -> String {
        let candidate = format!(
            "{}_{}_{:03}.docx",
            self.module_code, self.specialty_code, self.row_index
        );
        sanitizer.sanitize(&candidate)
    }
}

impl Display for RecordCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[第 {} 行 模块#{} 专业#{}]",
            self.row_index, self.module_code, self.specialty_code
        )
    }
}

/// 条目名净化器（正则只编译一次）
///
/// 允许 ASCII 字母数字、西里尔字母以及 `.`、`_`、`-`，
/// 其余字符（路径分隔符、空白等）替换为下划线。
pub struct EntryNameSanitizer {
    disallowed: Regex,
}

impl EntryNameSanitizer {
    pub fn new() -> Self {
        Self {
            disallowed: Regex::new(r"[^0-9A-Za-z\u{0400}-\u{04FF}._-]+")
                .unwrap_or_else(|e| panic!("净化正则非法: {}", e)),
        }
    }

    /// 替换条目名中不允许的字符
    pub fn sanitize(&self, candidate: &str) -> String {
        self.disallowed.replace_all(candidate, "_").into_owned()
    }
}

impl Default for EntryNameSanitizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::table::{CellValue, RawTable};
    use crate::schema::Schema;
    use crate::services::normalizer::RecordNormalizer;

    fn record(module: &str, specialty: &str) -> NormalizedRecord {
        let table = RawTable {
            columns: vec!["module_code".to_string(), "specialty_code".to_string()],
            rows: vec![vec![
                CellValue::Text(module.to_string()),
                CellValue::Text(specialty.to_string()),
            ]],
        };
        RecordNormalizer::normalize_row(&table, 0, &Schema::program_fields())
    }

    #[test]
    fn test_entry_name_contains_keys_and_position() {
        let ctx = RecordCtx::new(&record("ПМ.01", "09.02.06"), 3);
        let name = ctx.entry_name(&EntryNameSanitizer::new());
        assert_eq!(name, "ПМ.01_09.02.06_003.docx");
    }

    #[test]
    fn test_disallowed_characters_replaced() {
        let ctx = RecordCtx::new(&record("ПМ/01", "09 02"), 1);
        let name = ctx.entry_name(&EntryNameSanitizer::new());
        assert_eq!(name, "ПМ_01_09_02_001.docx");
        assert!(!name.contains('/'));
        assert!(!name.contains(' '));
    }

    #[test]
    fn test_empty_key_fields_still_deterministic() {
        let ctx = RecordCtx::new(&record("", ""), 7);
        let sanitizer = EntryNameSanitizer::new();
        assert_eq!(ctx.entry_name(&sanitizer), ctx.entry_name(&sanitizer));
        assert!(ctx.entry_name(&sanitizer).ends_with("007.docx"));
    }
}
