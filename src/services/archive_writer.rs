//! 压缩包写入服务 - 业务能力层
//!
//! 只负责"结果序列 → ZIP 压缩包"能力，不关心流程
//!
//! 职责：
//! - 按结果顺序写入每个成功文档
//! - 保证包内条目名唯一（重名时追加行号消歧）
//! - 由结果序列构建批次报告
//! - 零成功的批次仍产出合法的空压缩包，不视为错误

use std::collections::HashSet;
use std::io::{Cursor, Write};

use tracing::debug;

use crate::error::AppResult;
use crate::models::report::{BatchReport, RenderResult};

/// 压缩包写入服务
pub struct ArchiveWriter;

impl ArchiveWriter {
    /// 将渲染结果组装为内存中的 ZIP 压缩包
    ///
    /// 压缩使用 Deflate 默认级别；条目写入顺序与结果顺序一致。
    /// 返回压缩包字节与汇总报告（压缩包标识由调用方存储后回填）。
    pub fn assemble(results: &[RenderResult]) -> AppResult<(Vec<u8>, BatchReport)> {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        let options = zip::write::SimpleFileOptions::default()
            .compression_method(zip::CompressionMethod::Deflated);

        let mut used_names: HashSet<String> = HashSet::new();

        for (position, result) in results.iter().enumerate() {
            if let RenderResult::Success { entry_name, bytes } = result {
                let unique_name = Self::dedup_name(entry_name, position + 1, &used_names);
                used_names.insert(unique_name.clone());

                debug!("写入条目: {} ({} 字节)", unique_name, bytes.len());
                writer.start_file(unique_name, options)?;
                writer.write_all(bytes)?;
            }
        }

        let archive = writer.finish()?.into_inner();
        let report = BatchReport::from_results(results);

        Ok((archive, report))
    }

    /// 条目名消歧
    ///
    /// 条目名本身已含行号，正常情况下不会撞名；这里对畸形的
    /// 行号复用做兜底：先追加行号，仍冲突则递增序号。
    fn dedup_name(candidate: &str, position: usize, used: &HashSet<String>) -> String {
        if !used.contains(candidate) {
            return candidate.to_string();
        }

        let (stem, extension) = match candidate.rsplit_once('.') {
            Some((stem, ext)) => (stem, format!(".{}", ext)),
            None => (candidate, String::new()),
        };

        let mut name = format!("{}_{}{}", stem, position, extension);
        let mut bump = 2;
        while used.contains(&name) {
            name = format!("{}_{}_{}{}", stem, position, bump, extension);
            bump += 1;
        }
        name
    }
}
