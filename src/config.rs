/// 程序配置文件
#[derive(Clone, Debug)]
pub struct Config {
    /// 待处理的表格文件（CSV 或 XLSX）
    pub input_table: String,
    /// DOCX 模板文件路径
    pub template_path: String,
    /// 生成结果输出目录
    pub output_dir: String,
    /// CSV 分隔符
    pub csv_delimiter: u8,
    /// 输出目录中产物的保留时长（分钟，超时后尽力删除）
    pub retention_minutes: i64,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 输出日志文件
    pub output_log_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_table: "upload/programs.xlsx".to_string(),
            template_path: "templates_docx/template.docx".to_string(),
            output_dir: "generated".to_string(),
            csv_delimiter: b',',
            retention_minutes: 60,
            verbose_logging: false,
            output_log_file: "output.txt".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            input_table: std::env::var("INPUT_TABLE").unwrap_or(default.input_table),
            template_path: std::env::var("TEMPLATE_PATH").unwrap_or(default.template_path),
            output_dir: std::env::var("OUTPUT_DIR").unwrap_or(default.output_dir),
            csv_delimiter: std::env::var("CSV_DELIMITER").ok().and_then(|v| v.bytes().next()).unwrap_or(default.csv_delimiter),
            retention_minutes: std::env::var("RETENTION_MINUTES").ok().and_then(|v| v.parse().ok()).unwrap_or(default.retention_minutes),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
            output_log_file: std::env::var("OUTPUT_LOG_FILE").unwrap_or(default.output_log_file),
        }
    }
}
