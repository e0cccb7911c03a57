//! 批次结果模型
//!
//! 单条记录的渲染结果（[`RenderResult`]）与整个批次的汇总报告
//! ([`BatchReport`])。报告完全由结果序列构建，不依赖任何旁路计数器。

/// 单条记录的渲染结果
#[derive(Debug, Clone)]
pub enum RenderResult {
    /// 渲染成功：压缩包条目名 + 文档字节
    Success {
        entry_name: String,
        bytes: Vec<u8>,
    },
    /// 渲染失败：行号（1 起始）+ 失败原因
    Failure {
        row_index: usize,
        reason: String,
    },
}

impl RenderResult {
    pub fn is_success(&self) -> bool {
        matches!(self, RenderResult::Success { .. })
    }
}

/// 单行失败明细
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RowFailure {
    /// 行号（1 起始，对应数据行顺序）
    pub row_index: usize,
    /// 失败原因
    pub reason: String,
}

/// 批次汇总报告
///
/// 不变式：`success_count + failure_count == 输入行数`。
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BatchReport {
    /// 成功条数
    pub success_count: usize,
    /// 失败条数
    pub failure_count: usize,
    /// 失败明细
    pub failures: Vec<RowFailure>,
    /// 压缩包标识（由存储层写入后回填）
    pub archive_id: Option<String>,
}

impl BatchReport {
    /// 由结果序列构建报告
    pub fn from_results(results: &[RenderResult]) -> Self {
        let mut success_count = 0;
        let mut failures = Vec::new();

        for result in results {
            match result {
                RenderResult::Success { .. } => success_count += 1,
                RenderResult::Failure { row_index, reason } => {
                    failures.push(RowFailure {
                        row_index: *row_index,
                        reason: reason.clone(),
                    });
                }
            }
        }

        Self {
            success_count,
            failure_count: failures.len(),
            failures,
            archive_id: None,
        }
    }

    /// 批次总条数
    pub fn total(&self) -> usize {
        self.success_count + self.failure_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_from_mixed_results() {
        let results = vec![
            RenderResult::Success {
                entry_name: "a.docx".to_string(),
                bytes: vec![1],
            },
            RenderResult::Failure {
                row_index: 2,
                reason: "模板占位符缺失".to_string(),
            },
            RenderResult::Success {
                entry_name: "b.docx".to_string(),
                bytes: vec![2],
            },
        ];

        let report = BatchReport::from_results(&results);
        assert_eq!(report.success_count, 2);
        assert_eq!(report.failure_count, 1);
        assert_eq!(report.total(), 3);
        assert_eq!(report.failures[0].row_index, 2);
        assert_eq!(report.archive_id, None);
    }

    #[test]
    fn test_report_from_empty_results() {
        let report = BatchReport::from_results(&[]);
        assert_eq!(report.success_count, 0);
        assert_eq!(report.failure_count, 0);
        assert!(report.failures.is_empty());
    }
}
