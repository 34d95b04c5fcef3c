use std::time::Duration;
use log::debug;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use crate::models::ParsedDocument;
use crate::parser::ScreenplayParser;

/// 防抖重新解析
///
/// 连续的编辑只在安静 `delay` 之后解析最新的一份文本。
/// 编辑通道关闭时，尚未解析的文本会立即解析并发送，然后任务结束。
pub async fn run_debounced_parser(
    mut edits: mpsc::UnboundedReceiver<String>,
    documents: mpsc::UnboundedSender<ParsedDocument>,
    delay: Duration,
) {
    let parser = ScreenplayParser::new();

    while let Some(mut latest) = edits.recv().await {
        let mut closed = false;
        loop {
            tokio::select! {
                next = edits.recv() => match next {
                    Some(text) => latest = text,
                    None => {
                        closed = true;
                        break;
                    }
                },
                _ = tokio::time::sleep(delay) => break,
            }
        }

        if documents.send(parser.parse(&latest)).is_err() {
            debug!("预览接收端已关闭，停止防抖解析");
            return;
        }
        if closed {
            break;
        }
    }
    debug!("编辑通道已关闭，防抖解析结束");
}

/// 启动防抖解析任务，返回编辑发送端和文档接收端
pub fn spawn_debounced_parser(
    delay: Duration,
) -> (
    mpsc::UnboundedSender<String>,
    mpsc::UnboundedReceiver<ParsedDocument>,
    JoinHandle<()>,
) {
    let (edit_tx, edit_rx) = mpsc::unbounded_channel();
    let (doc_tx, doc_rx) = mpsc::unbounded_channel();
    let handle = tokio::spawn(run_debounced_parser(edit_rx, doc_tx, delay));
    (edit_tx, doc_rx, handle)
}
