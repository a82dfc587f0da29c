use thiserror::Error;

/// 应用程序错误类型
///
/// 抽取引擎本身不会失败，只有 I/O 层（读取输入、解析配置、写出结果）会返回错误
#[derive(Debug, Error)]
pub enum AppError {
    /// 文件读写错误
    #[error("文件错误 ({path}): {source}")]
    File {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// 输入文件不存在
    #[error("输入文件不存在: {path}")]
    NotFound { path: String },

    /// 配置文件解析失败
    #[error("配置解析失败 ({path}): {source}")]
    Config {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    /// 输入文件格式无法识别
    #[error("输入格式错误 ({path}): {reason}")]
    Input { path: String, reason: String },

    /// JSON 序列化/反序列化失败
    #[error("JSON错误: {0}")]
    Json(#[from] serde_json::Error),
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建文件读写错误
    pub fn file(path: impl Into<String>, source: std::io::Error) -> Self {
        AppError::File {
            path: path.into(),
            source,
        }
    }

    /// 创建输入格式错误
    pub fn input(path: impl Into<String>, reason: impl Into<String>) -> Self {
        AppError::Input {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
