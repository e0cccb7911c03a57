//! 文档渲染服务 - 业务能力层
//!
//! 只负责"填充一条记录到模板"能力，不关心流程
//!
//! ## 技术栈
//! - DOCX 本质是 ZIP 容器，使用 `zip` crate 读写
//! - 使用 `regex` 定位 `{{ key }}` 占位符
//!
//! 职责：
//! - 将单条记录的字段值替换进模板的 XML 部件
//! - 只处理单条记录
//! - 不出现 Vec<NormalizedRecord>
//! - 不出现行号
//! - 不关心流程顺序

use std::io::{Cursor, Read, Write};

use regex::Regex;

use crate::error::{AppError, AppResult, RenderError};
use crate::infrastructure::TemplateHandle;
use crate::models::record::NormalizedRecord;

/// 文档渲染能力
///
/// 流程层只依赖这个 trait；生产实现是 [`DocxRenderer`]，
/// 测试中用确定性的桩实现替代。
pub trait DocumentRender {
    /// 用一条记录填充模板，返回文档字节
    fn render(&self, template: &TemplateHandle, record: &NormalizedRecord) -> AppResult<Vec<u8>>;
}

/// DOCX 模板渲染器
///
/// 重写 `word/document.xml` 以及页眉/页脚部件中的占位符，
/// 其余部件原样复制。占位符语法之外的模板结构对本服务不透明。
pub struct DocxRenderer {
    placeholder: Regex,
}

impl DocxRenderer {
    /// 创建新的渲染器（占位符正则编译一次）
    pub fn new() -> Self {
        Self {
            placeholder: Regex::new(r"\{\{\s*([A-Za-z0-9_]+)\s*\}\}")
                .unwrap_or_else(|e| panic!("占位符正则非法: {}", e)),
        }
    }

    /// 判断部件是否需要做占位符替换
    fn is_text_part(name: &str) -> bool {
        name == "word/document.xml"
            || ((name.starts_with("word/header") || name.starts_with("word/footer"))
                && name.ends_with(".xml"))
    }

    /// 对单个 XML 部件做占位符替换
    fn substitute(&self, xml: &str, record: &NormalizedRecord) -> String {
        self.placeholder
            .replace_all(xml, |caps: &regex::Captures<'_>| {
                escape_xml(record.get_or_empty(&caps[1]))
            })
            .into_owned()
    }
}

impl Default for DocxRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentRender for DocxRenderer {
    fn render(&self, template: &TemplateHandle, record: &NormalizedRecord) -> AppResult<Vec<u8>> {
        let mut archive =
            zip::ZipArchive::new(Cursor::new(template.bytes())).map_err(|e| {
                AppError::Render(RenderError::TemplateCorrupt {
                    path: template.name().to_string(),
                    source: Box::new(e),
                })
            })?;

        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        let options = zip::write::SimpleFileOptions::default()
            .compression_method(zip::CompressionMethod::Deflated);

        for index in 0..archive.len() {
            let mut part = archive.by_index(index)?;
            let name = part.name().to_string();

            if part.is_dir() {
                writer.add_directory(name, options)?;
                continue;
            }

            let mut bytes = Vec::with_capacity(part.size() as usize);
            part.read_to_end(&mut bytes).map_err(|e| {
                AppError::Render(RenderError::RenderFailed {
                    source: Box::new(e),
                })
            })?;

            if Self::is_text_part(&name) {
                let xml = String::from_utf8(bytes).map_err(|e| {
                    AppError::Render(RenderError::RenderFailed {
                        source: Box::new(e),
                    })
                })?;
                let filled = self.substitute(&xml, record);
                writer.start_file(name, options)?;
                writer.write_all(filled.as_bytes())?;
            } else {
                writer.start_file(name, options)?;
                writer.write_all(&bytes)?;
            }
        }

        let cursor = writer.finish()?;
        Ok(cursor.into_inner())
    }
}

/// XML 文本转义
fn escape_xml(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Schema;
    use crate::services::normalizer::RecordNormalizer;
    use crate::models::table::{CellValue, RawTable};

    /// 构造一个最小的 DOCX 模板（仅 document.xml）
    fn minimal_docx(document_xml: &str) -> Vec<u8> {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        let options = zip::write::SimpleFileOptions::default();
        writer.start_file("[Content_Types].xml", options).unwrap();
        writer.write_all(b"<Types/>").unwrap();
        writer.start_file("word/document.xml", options).unwrap();
        writer.write_all(document_xml.as_bytes()).unwrap();
        writer.finish().unwrap().into_inner()
    }

    fn record_with(key: &'static str, value: &str) -> NormalizedRecord {
        let table = RawTable {
            columns: vec![key.to_string()],
            rows: vec![vec![CellValue::Text(value.to_string())]],
        };
        RecordNormalizer::normalize_row(&table, 0, &Schema::program_fields())
    }

    fn read_document_xml(docx: &[u8]) -> String {
        let mut archive = zip::ZipArchive::new(Cursor::new(docx)).unwrap();
        let mut part = archive.by_name("word/document.xml").unwrap();
        let mut content = String::new();
        part.read_to_string(&mut content).unwrap();
        content
    }

    #[test]
    fn test_placeholder_substituted() {
        let template_bytes = minimal_docx("<w:t>{{ module_code }}</w:t>");
        let template = TemplateHandle::from_bytes("template.docx", template_bytes);
        let record = record_with("module_code", "ПМ.01");

        let rendered = DocxRenderer::new().render(&template, &record).unwrap();
        assert_eq!(read_document_xml(&rendered), "<w:t>ПМ.01</w:t>");
    }

    #[test]
    fn test_unknown_placeholder_becomes_empty() {
        let template_bytes = minimal_docx("<w:t>{{ no_such_field }}</w:t>");
        let template = TemplateHandle::from_bytes("template.docx", template_bytes);
        let record = record_with("module_code", "x");

        let rendered = DocxRenderer::new().render(&template, &record).unwrap();
        assert_eq!(read_document_xml(&rendered), "<w:t></w:t>");
    }

    #[test]
    fn test_value_is_xml_escaped() {
        let template_bytes = minimal_docx("<w:t>{{ module_name }}</w:t>");
        let template = TemplateHandle::from_bytes("template.docx", template_bytes);
        let record = record_with("module_name", "A & B < C");

        let rendered = DocxRenderer::new().render(&template, &record).unwrap();
        assert_eq!(read_document_xml(&rendered), "<w:t>A &amp; B &lt; C</w:t>");
    }

    #[test]
    fn test_corrupt_template_reported() {
        let template = TemplateHandle::from_bytes("broken.docx", b"garbage".to_vec());
        let record = record_with("module_code", "x");

        let err = DocxRenderer::new().render(&template, &record).unwrap_err();
        assert!(matches!(
            err,
            AppError::Render(RenderError::TemplateCorrupt { .. })
        ));
    }
}
