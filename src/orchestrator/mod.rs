//! 编排层（Orchestration Layer）
//!
//! ## 职责
//!
//! 本层负责批次调度和产物落盘，是整个系统的"指挥中心"。
//!
//! ## 模块划分
//!
//! ### `batch_processor` - 批量生成处理器
//! - 管理应用生命周期（初始化、运行、清理）
//! - 持有模板与存储资源（TemplateStore、Storage）
//! - 落盘压缩包与 JSON 报告
//! - 输出全局统计信息
//!
//! ### `pipeline` - 核心流水线
//! - 解析 + 校验 + 归一化（结构化门卫）
//! - 逐行渲染（Vec<NormalizedRecord> → Vec<RenderResult>）
//! - 组装压缩包与批次报告
//!
//! ## 层次关系
//!
//! ```text
//! batch_processor (一次端到端批量生成)
//!     ↓
//! pipeline (处理 Vec<NormalizedRecord>)
//!     ↓
//! workflow::RenderFlow (处理单条 NormalizedRecord)
//!     ↓
//! services (能力层：validate / normalize / render / archive)
//!     ↓
//! infrastructure (基础设施：TemplateStore / Storage)
//! ```
//!
//! ## 设计原则
//!
//! 1. **单一职责**：batch_processor 管端到端，pipeline 管核心流水线
//! 2. **资源隔离**：只有编排层持有 TemplateStore 和 Storage
//! 3. **向下依赖**：编排层 → workflow → services → infrastructure
//! 4. **行级隔离**：单行失败转换为数据，绝不中断同批次其他行

pub mod batch_processor;
pub mod pipeline;

// 重新导出主要类型
pub use batch_processor::App;
pub use pipeline::{render_single, run_batch, validate_and_normalize};
