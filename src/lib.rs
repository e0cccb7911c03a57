//! # Batch Program Generate
//!
//! 一个把表格记录批量填充进 DOCX 模板并打包下载的 Rust 应用程序
//!
//! ## 架构设计
//!
//! 本系统采用严格的四层架构：
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 持有稀缺资源（模板文件、输出目录），只暴露能力
//! - `TemplateStore` - 模板仓库，提供 load() 能力
//! - `Storage` - 产物存储，提供 store() / cleanup_expired() 能力
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，只处理单个 Record
//! - `SchemaValidator` - 表头比对能力
//! - `RecordNormalizer` - 原始行归一化能力
//! - `DocxRenderer` - 模板填充能力（DocumentRender trait 的生产实现）
//! - `ArchiveWriter` - 压缩包组装能力
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义"一条记录"的完整处理流程
//! - `RecordCtx` - 上下文封装（行号 + 条目命名关键字段）
//! - `RenderFlow` - 流程编排（派生条目名 → 渲染 → 结果转数据）
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/pipeline` - 核心流水线（校验门卫、逐行渲染、打包）
//! - `orchestrator/batch_processor` - 批量生成处理器，管理资源和落盘
//!
//! ## 模块结构

pub mod config;
pub mod error;
pub mod infrastructure;
pub mod schema;

pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, AppResult, ValidationError};
pub use infrastructure::{Storage, TemplateHandle, TemplateStore};
pub use models::loaders::{load_table, TableFormat};
pub use models::{BatchReport, CellValue, NormalizedRecord, RawTable, RenderResult};
pub use orchestrator::{render_single, run_batch, validate_and_normalize, App};
pub use schema::Schema;
pub use services::{DocumentRender, DocxRenderer};
pub use workflow::{RecordCtx, RenderFlow};
