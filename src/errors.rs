use thiserror::Error;

/// 解析器外围(配置、导出、预览)的错误
///
/// 行分类本身不会失败，这里只覆盖读写文件、配置和缺失输入。
#[derive(Error, Debug)]
pub enum ScreenplayError {
    #[error("IO错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON错误: {0}")]
    Json(#[from] serde_json::Error),

    #[error("缺少剧本文本")]
    MissingInput,

    #[error("无效的配置: {0}")]
    InvalidConfig(String),
}

pub type ScreenplayResult<T> = Result<T, ScreenplayError>;
