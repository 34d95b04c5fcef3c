use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use clap::Parser;
use log::{debug, error};
use screenplay_rust::{analyze, generate_standalone_html, parse, Conf, ScreenplayResult};

/// 解析剧本文件，输出统计信息，可选导出 HTML / JSON
#[derive(Parser, Debug)]
#[command(name = "screenplay-parser")]
#[command(version, about = "Screenplay line classifier and preview renderer")]
struct Args {
    /// 剧本文件路径
    #[arg(value_name = "SCRIPT")]
    script: PathBuf,

    /// 配置文件(JSON)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// 导出 HTML 到指定路径
    #[arg(long)]
    html: Option<PathBuf>,

    /// 导出解析结果 JSON 到指定路径
    #[arg(long)]
    json: Option<PathBuf>,
}

fn run(args: &Args) -> ScreenplayResult<()> {
    let conf = match &args.config {
        Some(path) => Conf::load(path)?,
        None => Conf::default(),
    };

    let content = fs::read_to_string(&args.script)?;
    debug!("读取剧本: {} ({} 字节)", args.script.display(), content.len());

    let document = parse(&content);
    let properties = analyze(&document, &conf);

    println!("解析完成！");
    println!("元素数量: {}", document.elements.len());
    if let Some(title) = document.title_page.as_ref().and_then(|page| page.title()) {
        println!("标题: {}", title);
    }
    println!("场景数量: {}", properties.scenes.len());
    println!("角色数量: {}", properties.characters.len());
    println!("预估页数: {}", properties.page_count);
    println!("动作时长: {:.1}秒", properties.length_action);
    println!("对白时长: {:.1}秒", properties.length_dialogue);

    if let Some(html_path) = &args.html {
        fs::write(html_path, generate_standalone_html(&document, &conf))?;
        println!("HTML输出已保存到: {}", html_path.display());
    }

    if let Some(json_path) = &args.json {
        fs::write(json_path, serde_json::to_string_pretty(&document)?)?;
        println!("JSON输出已保存到: {}", json_path.display());
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
