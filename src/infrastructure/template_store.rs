//! 模板仓库 - 基础设施层
//!
//! 持有模板文件资源，只暴露"按标识加载模板"的能力

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult};

/// 已加载的模板句柄
///
/// 模板内容对核心流水线不透明，渲染能力只消费字节。
#[derive(Debug, Clone)]
pub struct TemplateHandle {
    name: String,
    bytes: Vec<u8>,
}

impl TemplateHandle {
    /// 直接由字节构建（测试和内存模板使用）
    pub fn from_bytes(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}

/// 模板仓库
///
/// 职责：
/// - 持有模板目录
/// - 暴露 load() 能力
/// - 不认识 Record / Batch
/// - 不处理业务流程
pub struct TemplateStore {
    root: PathBuf,
}

impl TemplateStore {
    /// 创建模板仓库
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// 按标识加载模板
    ///
    /// 标识是相对于仓库根目录的文件名；文件不存在时返回
    /// [`RenderError::TemplateNotFound`]。
    ///
    /// [`RenderError::TemplateNotFound`]: crate::error::RenderError::TemplateNotFound
    pub fn load(&self, identifier: &str) -> AppResult<TemplateHandle> {
        let path = self.resolve(identifier);
        if !path.is_file() {
            return Err(AppError::template_not_found(path.display().to_string()));
        }

        let bytes = fs::read(&path)
            .map_err(|e| AppError::write_failed(path.display().to_string(), e))?;

        Ok(TemplateHandle::from_bytes(identifier, bytes))
    }

    fn resolve(&self, identifier: &str) -> PathBuf {
        let candidate = Path::new(identifier);
        if candidate.is_absolute() {
            candidate.to_path_buf()
        } else {
            self.root.join(candidate)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RenderError;
    use std::io::Write;

    #[test]
    fn test_load_existing_template() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("template.docx");
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(b"PK\x03\x04stub").unwrap();

        let store = TemplateStore::new(dir.path());
        let handle = store.load("template.docx").unwrap();
        assert_eq!(handle.name(), "template.docx");
        assert!(handle.bytes().starts_with(b"PK"));
    }

    #[test]
    fn test_missing_template_reported() {
        let dir = tempfile::tempdir().unwrap();
        let store = TemplateStore::new(dir.path());
        let err = store.load("no_such.docx").unwrap_err();
        assert!(matches!(
            err,
            AppError::Render(RenderError::TemplateNotFound { .. })
        ));
    }
}
