//! 对外 API
//!
//! 给编辑器前端调用的接口。输入可能为空(前端传 null)，解析本身不会失败。

use log::{error, info, warn};
use serde::Serialize;
use crate::errors::{ScreenplayError, ScreenplayResult};
use crate::models::{Conf, ParsedDocument, ScreenplayProperties};
use crate::parser::{analyze, generate_standalone_html, ScreenplayParser};

/// 解析结果，连同统计信息一起返回给前端
#[derive(Debug, Clone, Serialize)]
pub struct ParseResponse {
    pub document: ParsedDocument,
    pub properties: ScreenplayProperties,
}

/// 导出结果
#[derive(Debug, Clone)]
pub struct ExportResult {
    pub success: bool,
    pub message: String,
    pub file_path: Option<String>,
    pub data: Option<String>,
}

impl ExportResult {
    fn failed(message: String) -> Self {
        ExportResult {
            success: false,
            message,
            file_path: None,
            data: None,
        }
    }
}

fn parse_with_properties(text: &str, conf: &Conf) -> ParseResponse {
    let document = ScreenplayParser::new().parse(text);
    let properties = analyze(&document, conf);
    ParseResponse { document, properties }
}

/// 解析剧本文本，返回 JSON
pub async fn parse_screenplay_text(text: Option<String>, config: Option<Conf>) -> ScreenplayResult<String> {
    let text = text.ok_or(ScreenplayError::MissingInput)?;
    let conf = config.unwrap_or_default();
    let response = parse_with_properties(&text, &conf);
    Ok(serde_json::to_string(&response)?)
}

/// 导出完整 HTML 文件
pub async fn export_to_html(
    text: Option<String>,
    output_path: String,
    config: Option<Conf>
) -> ExportResult {
    let text = match text {
        Some(text) => text,
        None => {
            warn!("导出失败: 没有剧本文本");
            return ExportResult::failed(format!("导出失败: {}", ScreenplayError::MissingInput));
        }
    };
    let conf = config.unwrap_or_default();

    let document = ScreenplayParser::new().parse(&text);
    let html = generate_standalone_html(&document, &conf);

    match tokio::fs::write(&output_path, html).await {
        Ok(_) => {
            info!("HTML 已导出: {}", output_path);
            ExportResult {
                success: true,
                message: "HTML导出成功".to_string(),
                file_path: Some(output_path),
                data: None,
            }
        }
        Err(e) => {
            error!("HTML 导出失败: {}: {}", output_path, e);
            ExportResult::failed(format!("导出失败: {}", ScreenplayError::from(e)))
        }
    }
}

/// 生成 `data:` URL 形式的 HTML 预览
pub async fn export_to_html_base64(
    text: Option<String>,
    config: Option<Conf>
) -> ExportResult {
    let text = match text {
        Some(text) => text,
        None => {
            warn!("预览生成失败: 没有剧本文本");
            return ExportResult::failed(format!("生成失败: {}", ScreenplayError::MissingInput));
        }
    };
    let conf = config.unwrap_or_default();

    let document = ScreenplayParser::new().parse(&text);
    let html = generate_standalone_html(&document, &conf);

    ExportResult {
        success: true,
        message: "HTML Base64编码生成成功".to_string(),
        file_path: None,
        data: Some(format!("data:text/html;base64,{}", base64::encode(html.as_bytes()))),
    }
}

/// 测试函数
pub fn test_connection() -> String {
    "Rust bridge connection successful!".to_string()
}
