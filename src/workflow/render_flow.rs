//! 记录渲染流程 - 流程层
//!
//! 核心职责：定义"一条记录"的完整处理流程
//!
//! 流程顺序：
//! 1. 派生条目名（模块代码 + 专业代码 + 行号）
//! 2. 调用渲染能力填充模板
//! 3. 成功 → Success{条目名, 字节}；失败 → Failure{行号, 原因}
//!
//! 单条记录的渲染失败绝不中断批次：错误在行边界被捕获并转换为数据。

use tracing::{error, info};

use crate::infrastructure::TemplateHandle;
use crate::models::record::NormalizedRecord;
use crate::models::report::RenderResult;
use crate::services::DocumentRender;
use crate::workflow::record_ctx::{EntryNameSanitizer, RecordCtx};

/// 记录渲染流程
///
/// - 编排单条记录的渲染
/// - 不持有任何资源（模板由调用方传入）
/// - 只依赖渲染能力（DocumentRender）
pub struct RenderFlow<'a> {
    renderer: &'a dyn DocumentRender,
    sanitizer: EntryNameSanitizer,
    verbose_logging: bool,
}

impl<'a> RenderFlow<'a> {
    /// 创建新的记录渲染流程
    pub fn new(renderer: &'a dyn DocumentRender) -> Self {
        Self {
            renderer,
            sanitizer: EntryNameSanitizer::new(),
            verbose_logging: false,
        }
    }

    /// 开启详细日志
    pub fn with_verbose_logging(mut self, verbose: bool) -> Self {
        self.verbose_logging = verbose;
        self
    }

    /// 处理一条记录
    ///
    /// 任何渲染失败都被捕获为 [`RenderResult::Failure`]，不向上传播。
    pub fn run(
        &self,
        template: &TemplateHandle,
        record: &NormalizedRecord,
        row_index: usize,
    ) -> RenderResult {
        let ctx = RecordCtx::new(record, row_index);
        let entry_name = ctx.entry_name(&self.sanitizer);

        if self.verbose_logging {
            info!("{} 📄 开始渲染 → {}", ctx, entry_name);
        }

        match self.renderer.render(template, record) {
            Ok(bytes) => {
                if self.verbose_logging {
                    info!("{} ✓ 渲染完成 ({} 字节)", ctx, bytes.len());
                }
                RenderResult::Success { entry_name, bytes }
            }
            Err(e) => {
                error!("{} ❌ 渲染失败: {}", ctx, e);
                RenderResult::Failure {
                    row_index,
                    reason: e.to_string(),
                }
            }
        }
    }
}
