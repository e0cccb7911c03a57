use anyhow::Result;
/// 日志工具模块
///
/// 提供日志初始化、格式化和输出的辅助函数
use std::fs;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::models::report::BatchReport;

/// 初始化 tracing 订阅器
///
/// 默认 info 级别，可通过 RUST_LOG 覆盖。
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

/// 初始化日志文件
///
/// # 参数
/// - `log_file_path`: 日志文件路径
///
/// # 返回
/// 返回是否成功初始化
pub fn init_log_file(log_file_path: &str) -> Result<()> {
    let log_header = format!(
        "{}\n批量生成日志 - {}\n{}\n\n",
        "=".repeat(60),
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
        "=".repeat(60)
    );
    fs::write(log_file_path, log_header)?;
    Ok(())
}

/// 记录程序启动信息
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 批量文档生成模式");
    info!("📄 模板: {}", config.template_path);
    info!("📂 输出目录: {}", config.output_dir);
    info!("{}", "=".repeat(60));
}

/// 记录表格加载信息
///
/// # 参数
/// - `total`: 数据行总数
pub fn log_table_loaded(total: usize) {
    info!("✓ 表格校验通过，共 {} 行待生成", total);
}

/// 打印最终统计信息
///
/// # 参数
/// - `report`: 批次报告
/// - `config`: 程序配置
pub fn print_final_stats(report: &BatchReport, config: &Config) {
    info!("\n{}", "=".repeat(60));
    info!("📊 批次完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("✅ 成功: {}/{}", report.success_count, report.total());
    info!("❌ 失败: {}", report.failure_count);
    for failure in &report.failures {
        info!(
            "   [第 {} 行] {}",
            failure.row_index,
            truncate_text(&failure.reason, 80)
        );
    }
    if let Some(archive_id) = &report.archive_id {
        info!("📦 压缩包: {}", archive_id);
    }
    info!("{}", "=".repeat(60));
    info!("\n日志已保存至: {}", config.output_log_file);
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_text_unchanged() {
        assert_eq!(truncate_text("короткий", 20), "короткий");
    }

    #[test]
    fn test_truncate_long_text() {
        let truncated = truncate_text("абвгдеёж", 4);
        assert_eq!(truncated, "абвг...");
    }
}
