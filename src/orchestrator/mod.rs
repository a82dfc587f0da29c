//! 编排层（Orchestration Layer）
//!
//! 负责加载输入、调用抽取流程、写出结果并输出统计，本身不做任何抽取判断。
//!
//! ```text
//! orchestrator::App (加载 / 导出 / 统计)
//!     ↓
//! workflow::ExtractionFlow (一份文档)
//!     ↓
//! services (Normalizer / Segmenter / rules / card_export)
//! ```

pub mod app;

pub use app::{App, OutputPaths, RunStats};
