//! 批次流水线 - 编排层
//!
//! 向调用方（CLI / Web 层）暴露的核心入口：
//!
//! 1. [`validate_and_normalize`] — 字节 → 校验通过的记录序列（结构化门卫，
//!    格式/校验错误在任何渲染开始之前快速失败）
//! 2. [`run_batch`] — 记录序列 → 压缩包字节 + 批次报告（逐行渲染，
//!    单行失败不中断批次）
//! 3. [`render_single`] — 单条记录 → 文档字节（单表单提交路径）
//!
//! 流水线是严格按输入顺序的单次同步遍历；并发批次之间不共享任何
//! 内存状态。

use tracing::info;

use crate::error::{AppError, AppResult, ValidationError};
use crate::infrastructure::TemplateHandle;
use crate::models::loaders::{load_table, TableFormat};
use crate::models::record::NormalizedRecord;
use crate::models::report::{BatchReport, RenderResult};
use crate::schema::Schema;
use crate::services::{ArchiveWriter, DocumentRender, RecordNormalizer, SchemaValidator};
use crate::workflow::RenderFlow;

/// 解析、校验并归一化上传的表格
///
/// 表头缺列时返回 [`AppError::Validation`]，携带精确的缺失/多余列集合；
/// 零数据行且列集合正确的表格是有效输入（下游得到空批次）。
pub fn validate_and_normalize(
    bytes: &[u8],
    format: TableFormat,
    schema: &Schema,
    csv_delimiter: u8,
) -> AppResult<Vec<NormalizedRecord>> {
    let table = load_table(bytes, format, csv_delimiter)?;

    let report = SchemaValidator::validate(&table, schema);
    if !report.is_ok() {
        return Err(AppError::Validation(ValidationError {
            missing_keys: report.missing_keys,
            extra_keys: report.extra_keys,
        }));
    }

    Ok(RecordNormalizer::normalize_all(&table, schema))
}

/// 逐行渲染一个批次并组装压缩包
///
/// 结果序列与输入等长且同序；单行渲染失败被捕获为数据，批次继续。
/// 报告中的压缩包标识由调用方存储后回填。
pub fn run_batch(
    records: &[NormalizedRecord],
    renderer: &dyn DocumentRender,
    template: &TemplateHandle,
) -> AppResult<(Vec<u8>, BatchReport)> {
    let results = render_all(records, renderer, template, false);
    ArchiveWriter::assemble(&results)
}

/// 渲染单条记录（单表单提交路径）
pub fn render_single(
    record: &NormalizedRecord,
    renderer: &dyn DocumentRender,
    template: &TemplateHandle,
) -> AppResult<Vec<u8>> {
    renderer.render(template, record)
}

/// 按输入顺序渲染所有记录
pub(crate) fn render_all(
    records: &[NormalizedRecord],
    renderer: &dyn DocumentRender,
    template: &TemplateHandle,
    verbose_logging: bool,
) -> Vec<RenderResult> {
    let flow = RenderFlow::new(renderer).with_verbose_logging(verbose_logging);

    let results: Vec<RenderResult> = records
        .iter()
        .enumerate()
        .map(|(idx, record)| flow.run(template, record, idx + 1))
        .collect();

    let success = results.iter().filter(|r| r.is_success()).count();
    info!(
        "📦 批次渲染完成: 成功 {}/{}",
        success,
        results.len()
    );

    results
}
