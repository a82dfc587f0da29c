//! # Exam Cards
//!
//! 把考试讲义（PDF 逐页提取的文本）转换为结构化题目记录，并导出为记忆卡片
//!
//! ## 架构设计
//!
//! ### ① 数据层（Models）
//! - `models/` - `ExerciseRecord`、`Answer`、`RawPage`、`CardNote`
//! - `models/loaders` - 读取 JSON / TOML / 纯文本页面文件
//!
//! ### ② 业务能力层（Services）
//! - `Normalizer` - 去除页眉页脚、页码、网址等噪声行
//! - `Segmenter` - 按题号切块并抽取 meta / 题干 / 解析 / 答案
//! - `rules` - 按优先级排列的抽取规则与兜底修正
//! - `card_export` - 过滤、生成 guid、写出卡片
//!
//! ### ③ 流程层（Workflow）
//! - `ExtractionFlow` - 一份文档的完整抽取流程（清洗 → 切分）
//!
//! ### ④ 编排层（Orchestration）
//! - `App` - 加载输入、运行流程、写出结果、统计
//!
//! ## 模块结构

pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{Answer, CardNote, ExerciseRecord, RawPage};
pub use orchestrator::{App, OutputPaths, RunStats};
pub use services::{Normalizer, Segmenter};
pub use workflow::{ExtractionFlow, FlowOutput};
