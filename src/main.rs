use anyhow::Result;
use batch_program_generate::utils::logging;
use batch_program_generate::{App, Config};

fn main() -> Result<()> {
    // 初始化日志
    logging::init();

    // 加载配置
    let config = Config::from_env();

    // 表格路径：第一个命令行参数优先于配置
    let input_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| config.input_table.clone());

    // 初始化并运行应用
    let report = App::initialize(config)?.run(&input_path)?;

    if report.success_count == 0 && report.failure_count > 0 {
        anyhow::bail!("批次全部失败: {} 行", report.failure_count);
    }

    Ok(())
}
