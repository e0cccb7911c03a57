use std::fmt;

/// 应用程序错误类型
#[derive(Debug)]
pub enum AppError {
    /// 表格加载/解析错误
    Table(TableError),
    /// 表头校验错误
    Validation(ValidationError),
    /// 文档渲染错误
    Render(RenderError),
    /// 存储错误
    Storage(StorageError),
    /// 配置错误
    Config(ConfigError),
    /// 其他错误（用于包装第三方库错误）
    Other(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Table(e) => write!(f, "表格错误: {}", e),
            AppError::Validation(e) => write!(f, "校验错误: {}", e),
            AppError::Render(e) => write!(f, "渲染错误: {}", e),
            AppError::Storage(e) => write!(f, "存储错误: {}", e),
            AppError::Config(e) => write!(f, "配置错误: {}", e),
            AppError::Other(msg) => write!(f, "错误: {}", msg),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Table(e) => Some(e),
            AppError::Validation(e) => Some(e),
            AppError::Render(e) => Some(e),
            AppError::Storage(e) => Some(e),
            AppError::Config(e) => Some(e),
            AppError::Other(_) => None,
        }
    }
}

/// 表格加载/解析错误
#[derive(Debug)]
pub enum TableError {
    /// 文件扩展名不在支持范围内（解析前即拒绝）
    UnsupportedFormat {
        extension: String,
        allowed: &'static [&'static str],
    },
    /// 文本解码失败（非 UTF-8）
    DecodeFailed {
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 按声明格式解析失败
    ParseFailed {
        format: &'static str,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::UnsupportedFormat { extension, allowed } => {
                write!(
                    f,
                    "不支持的文件格式: .{} (支持的格式: {})",
                    extension,
                    allowed.join(", ")
                )
            }
            TableError::DecodeFailed { source } => {
                write!(f, "文本解码失败 (需要 UTF-8): {}", source)
            }
            TableError::ParseFailed { format, source } => {
                write!(f, "{} 解析失败: {}", format, source)
            }
        }
    }
}

impl std::error::Error for TableError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TableError::DecodeFailed { source } | TableError::ParseFailed { source, .. } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
            _ => None,
        }
    }
}

/// 表头校验错误
///
/// 携带精确的缺失/多余列名集合，便于向用户展示具体诊断。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// 模板要求但表格中缺失的列
    pub missing_keys: Vec<String>,
    /// 表格中存在但模板不需要的列
    pub extra_keys: Vec<String>,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "表头与模板字段不匹配: 缺失列 [{}]",
            self.missing_keys.join(", ")
        )?;
        if !self.extra_keys.is_empty() {
            write!(f, ", 多余列 [{}]", self.extra_keys.join(", "))?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// 文档渲染错误
#[derive(Debug)]
pub enum RenderError {
    /// 模板文件不存在
    TemplateNotFound {
        path: String,
    },
    /// 模板文件损坏（不是合法的 DOCX 容器）
    TemplateCorrupt {
        path: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 单条记录渲染失败
    RenderFailed {
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::TemplateNotFound { path } => {
                write!(f, "模板文件不存在: {}", path)
            }
            RenderError::TemplateCorrupt { path, source } => {
                write!(f, "模板文件损坏 ({}): {}", path, source)
            }
            RenderError::RenderFailed { source } => {
                write!(f, "文档渲染失败: {}", source)
            }
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::TemplateCorrupt { source, .. } | RenderError::RenderFailed { source } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
            _ => None,
        }
    }
}

/// 存储错误
#[derive(Debug)]
pub enum StorageError {
    /// 写入文件失败
    WriteFailed {
        path: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 压缩包生成失败
    ArchiveFailed {
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::WriteFailed { path, source } => {
                write!(f, "写入文件失败 ({}): {}", path, source)
            }
            StorageError::ArchiveFailed { source } => {
                write!(f, "压缩包生成失败: {}", source)
            }
        }
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StorageError::WriteFailed { source, .. } | StorageError::ArchiveFailed { source } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
        }
    }
}

/// 配置错误
#[derive(Debug)]
pub enum ConfigError {
    /// 环境变量解析失败
    EnvVarParseFailed {
        var_name: String,
        value: String,
        expected_type: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EnvVarParseFailed {
                var_name,
                value,
                expected_type,
            } => {
                write!(
                    f,
                    "环境变量 {} 解析失败: 值 '{}' 无法转换为 {}",
                    var_name, value, expected_type
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}

// ========== 从常见错误类型转换 ==========
// 注意：不需要手动实现 From<AppError> for anyhow::Error，
// 因为 anyhow 已经为所有实现了 std::error::Error 的类型提供了自动实现

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Storage(StorageError::WriteFailed {
            path: String::new(),
            source: Box::new(err),
        })
    }
}

impl From<csv::Error> for AppError {
    fn from(err: csv::Error) -> Self {
        AppError::Table(TableError::ParseFailed {
            format: "CSV",
            source: Box::new(err),
        })
    }
}

impl From<calamine::XlsxError> for AppError {
    fn from(err: calamine::XlsxError) -> Self {
        AppError::Table(TableError::ParseFailed {
            format: "XLSX",
            source: Box::new(err),
        })
    }
}

impl From<zip::result::ZipError> for AppError {
    fn from(err: zip::result::ZipError) -> Self {
        AppError::Storage(StorageError::ArchiveFailed {
            source: Box::new(err),
        })
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::Validation(err)
    }
}

impl From<RenderError> for AppError {
    fn from(err: RenderError) -> Self {
        AppError::Render(err)
    }
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建不支持格式错误
    pub fn unsupported_format(
        extension: impl Into<String>,
        allowed: &'static [&'static str],
    ) -> Self {
        AppError::Table(TableError::UnsupportedFormat {
            extension: extension.into(),
            allowed,
        })
    }

    /// 创建文本解码错误
    pub fn decode_failed(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        AppError::Table(TableError::DecodeFailed {
            source: Box::new(source),
        })
    }

    /// 创建模板不存在错误
    pub fn template_not_found(path: impl Into<String>) -> Self {
        AppError::Render(RenderError::TemplateNotFound { path: path.into() })
    }

    /// 创建文件写入错误
    pub fn write_failed(
        path: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AppError::Storage(StorageError::WriteFailed {
            path: path.into(),
            source: Box::new(source),
        })
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
