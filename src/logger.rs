use tracing_subscriber::EnvFilter;

/// 初始化日志
///
/// 默认输出本 crate 的 info 级别日志，可通过 `RUST_LOG` 覆盖
pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("exam_cards=info"));

    // 测试中可能被多次调用，重复初始化时忽略错误
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
