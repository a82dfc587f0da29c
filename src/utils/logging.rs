//! 日志工具模块
//!
//! 提供运行横幅、统计输出等日志辅助函数

use crate::config::Config;
use crate::orchestrator::RunStats;
use std::path::Path;
use tracing::info;

/// 记录程序启动信息
pub fn log_startup(input: &Path, config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 题目抽取模式");
    info!("📄 输入文件: {}", input.display());
    info!(
        "⚙️ 重复阈值: {} | 编号前缀: {} | 数量上限: {}",
        config.normalizer.repetition_threshold,
        config.segmenter.id_prefix,
        config
            .segmenter
            .record_limit
            .map_or_else(|| "无".to_string(), |n| n.to_string())
    );
    info!("{}", "=".repeat(60));
}

/// 打印最终统计信息
pub fn print_final_stats(stats: &RunStats) {
    info!("\n{}", "=".repeat(60));
    info!("📊 处理完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("📑 页面: {}", stats.pages);
    info!("📝 题目: {} (有答案 {})", stats.records, stats.answered);
    info!("✅ 导出卡片: {}", stats.cards);
    info!("⏭️ 跳过空卡片: {}", stats.skipped);
    info!("{}", "=".repeat(60));
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大字符数
///
/// # 返回
/// 返回截断后的单行文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    let single_line = text.replace('\n', " ");
    if single_line.chars().count() > max_len {
        single_line.chars().take(max_len).collect::<String>() + "..."
    } else {
        single_line
    }
}
