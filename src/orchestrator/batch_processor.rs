//! 批量生成处理器 - 编排层
//!
//! ## 职责
//!
//! 本模块是整个应用的入口，负责一次批量生成的端到端执行和资源管理。
//!
//! ## 核心功能
//!
//! 1. **应用初始化**：启动日志、创建存储、加载模板
//! 2. **表格加载**：读取上传文件并按扩展名分派解析器
//! 3. **结构化门卫**：表头校验失败在任何渲染开始之前终止批次
//! 4. **批次执行**：逐行渲染、组装压缩包、汇总报告
//! 5. **产物落盘**：压缩包 + JSON 报告写入输出目录，过期产物清理
//!
//! ## 设计特点
//!
//! - **顶层编排**：不处理单条记录的细节
//! - **资源所有者**：唯一持有 TemplateStore 和 Storage 的模块
//! - **向下委托**：委托 pipeline 执行核心流水线

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{error, info, warn};

use crate::config::Config;
use crate::infrastructure::{Storage, TemplateHandle, TemplateStore};
use crate::models::loaders::TableFormat;
use crate::models::report::BatchReport;
use crate::orchestrator::pipeline;
use crate::schema::Schema;
use crate::services::{ArchiveWriter, DocxRenderer};
use crate::utils::logging;

/// 应用主结构
pub struct App {
    config: Config,
    schema: Schema,
    template: TemplateHandle,
    storage: Storage,
    renderer: DocxRenderer,
}

impl App {
    /// 初始化应用
    pub fn initialize(config: Config) -> Result<Self> {
        // 初始化日志文件
        logging::init_log_file(&config.output_log_file)?;

        logging::log_startup(&config);

        // 创建产物存储（确保输出目录存在）
        let storage = Storage::new(&config.output_dir, config.retention_minutes)?;

        // 加载模板
        let store = TemplateStore::new(".");
        let template = store
            .load(&config.template_path)
            .with_context(|| format!("加载模板失败: {}", config.template_path))?;

        Ok(Self {
            config,
            schema: Schema::program_fields(),
            template,
            storage,
            renderer: DocxRenderer::new(),
        })
    }

    /// 运行一次批量生成
    pub fn run(&self, input_path: &str) -> Result<BatchReport> {
        // 清理上一轮过期产物
        let removed = self.storage.cleanup_expired();
        if removed > 0 {
            info!("🧹 已清理 {} 个过期产物", removed);
        }

        // 扩展名检查（解析前快速失败）
        let format = TableFormat::from_path(Path::new(input_path))?;

        info!("📁 正在读取表格: {}", input_path);
        let bytes =
            fs::read(input_path).with_context(|| format!("无法读取表格文件: {}", input_path))?;

        // 解析 + 校验 + 归一化（结构化门卫）
        let records = pipeline::validate_and_normalize(
            &bytes,
            format,
            &self.schema,
            self.config.csv_delimiter,
        )?;

        logging::log_table_loaded(records.len());

        if records.is_empty() {
            warn!("⚠️ 表格没有数据行，将生成空压缩包");
        }

        // 逐行渲染并组装压缩包
        let results = pipeline::render_all(
            &records,
            &self.renderer,
            &self.template,
            self.config.verbose_logging,
        );
        let (archive, mut report) = ArchiveWriter::assemble(&results)?;

        // 落盘：压缩包 + JSON 报告
        let stamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
        let archive_name = format!("programs_{}.zip", stamp);
        let archive_id = self.storage.store(&archive, &archive_name)?;
        report.archive_id = Some(archive_id.clone());

        let report_json = serde_json::to_vec_pretty(&report)
            .with_context(|| "序列化批次报告失败".to_string())?;
        self.storage
            .store(&report_json, &format!("programs_{}.report.json", stamp))?;

        if report.success_count == 0 && report.failure_count > 0 {
            error!("❌ 批次全部失败 ({} 行)", report.failure_count);
        }

        logging::print_final_stats(&report, &self.config);

        Ok(report)
    }
}
