//! 产物存储 - 基础设施层
//!
//! 持有输出目录资源，只暴露"保存字节 / 过期清理"的能力。
//! 保留契约：产物至少保留配置的分钟数，超时后尽力删除（失败只记日志）。

use std::fs;
use std::path::PathBuf;
use std::time::SystemTime;

use chrono::Duration;
use tracing::{debug, warn};

use crate::error::{AppError, AppResult};

/// 产物存储
///
/// 职责：
/// - 持有输出目录
/// - 暴露 store() / cleanup_expired() 能力
/// - 不认识 Record / Batch
/// - 不处理业务流程
pub struct Storage {
    output_dir: PathBuf,
    retention: Duration,
}

impl Storage {
    /// 创建产物存储并确保输出目录存在
    pub fn new(output_dir: impl Into<PathBuf>, retention_minutes: i64) -> AppResult<Self> {
        let output_dir = output_dir.into();
        fs::create_dir_all(&output_dir)
            .map_err(|e| AppError::write_failed(output_dir.display().to_string(), e))?;

        Ok(Self {
            output_dir,
            retention: Duration::minutes(retention_minutes),
        })
    }

    /// 保存字节并返回产物标识（输出目录内的路径）
    pub fn store(&self, bytes: &[u8], suggested_name: &str) -> AppResult<String> {
        let path = self.output_dir.join(suggested_name);
        fs::write(&path, bytes)
            .map_err(|e| AppError::write_failed(path.display().to_string(), e))?;

        debug!("已保存产物: {} ({} 字节)", path.display(), bytes.len());
        Ok(path.display().to_string())
    }

    /// 尽力删除超过保留时长的产物
    ///
    /// 删除失败不视为错误，只记录警告；返回实际删除的数量。
    pub fn cleanup_expired(&self) -> usize {
        let entries = match fs::read_dir(&self.output_dir) {
            Ok(entries) => entries,
            Err(e) => {
                warn!("⚠️ 无法读取输出目录 {}: {}", self.output_dir.display(), e);
                return 0;
            }
        };

        let mut removed = 0;
        for entry in entries.flatten() {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            if self.is_expired(&path) {
                match fs::remove_file(&path) {
                    Ok(()) => {
                        debug!("已清理过期产物: {}", path.display());
                        removed += 1;
                    }
                    Err(e) => warn!("⚠️ 清理失败 {}: {}", path.display(), e),
                }
            }
        }
        removed
    }

    fn is_expired(&self, path: &std::path::Path) -> bool {
        let modified = match fs::metadata(path).and_then(|m| m.modified()) {
            Ok(modified) => modified,
            Err(_) => return false,
        };
        let age = SystemTime::now()
            .duration_since(modified)
            .unwrap_or_default();
        let age = Duration::from_std(age).unwrap_or(Duration::zero());
        age > self.retention
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_writes_file_and_returns_identifier() {
        let dir = tempfile::tempdir().unwrap();
        let storage = Storage::new(dir.path(), 60).unwrap();

        let id = storage.store(b"content", "programs.zip").unwrap();
        assert!(id.ends_with("programs.zip"));
        assert_eq!(fs::read(dir.path().join("programs.zip")).unwrap(), b"content");
    }

    #[test]
    fn test_fresh_artifacts_survive_cleanup() {
        let dir = tempfile::tempdir().unwrap();
        let storage = Storage::new(dir.path(), 60).unwrap();
        storage.store(b"x", "fresh.zip").unwrap();

        assert_eq!(storage.cleanup_expired(), 0);
        assert!(dir.path().join("fresh.zip").exists());
    }

    #[test]
    fn test_zero_retention_removes_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        let storage = Storage::new(dir.path(), 0).unwrap();
        storage.store(b"x", "old.zip").unwrap();

        // 保留时长为 0：刚写入的文件立即视为过期
        std::thread::sleep(std::time::Duration::from_millis(20));
        assert_eq!(storage.cleanup_expired(), 1);
        assert!(!dir.path().join("old.zip").exists());
    }
}
