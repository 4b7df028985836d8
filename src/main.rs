//! # 卡组提示框工具 — 命令行入口
//!
//! 从文件或标准输入读取一个 `PlacementRequest`（JSON），
//! 输出定位结果与两条 CSS 变换。
//!
//! ```text
//! deck-tooltip [REQUEST.json] [--config CONFIG.json]
//! ```

use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use deck_tooltip::error::AppError;
use deck_tooltip::placement::{self, PlacementRequest, PlacementResult, TooltipTransforms};
use deck_tooltip::settings;
use serde::Serialize;

#[derive(Debug, Default)]
struct CliArgs {
    request_path: Option<PathBuf>,
    config_path: Option<PathBuf>,
}

#[derive(Serialize)]
struct CliOutput {
    result: PlacementResult,
    content: String,
    pointer: String,
}

fn parse_args(args: impl Iterator<Item = String>) -> Result<CliArgs, AppError> {
    let mut parsed = CliArgs::default();
    let mut args = args;
    while let Some(arg) = args.next() {
        if arg == "--config" {
            let path = args
                .next()
                .ok_or_else(|| AppError::Config("--config 缺少路径参数".to_string()))?;
            parsed.config_path = Some(PathBuf::from(path));
        } else if parsed.request_path.is_none() {
            parsed.request_path = Some(PathBuf::from(arg));
        } else {
            return Err(AppError::Config(format!("多余的参数: {arg}")));
        }
    }
    Ok(parsed)
}

fn read_request(args: &CliArgs) -> Result<PlacementRequest, AppError> {
    let raw = match &args.request_path {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let mut request: PlacementRequest = serde_json::from_str(&raw)?;
    if let Some(config_path) = &args.config_path {
        request.config = settings::load_required_config_from_path(config_path)?;
    }
    Ok(request)
}

fn run() -> Result<(), AppError> {
    let args = parse_args(std::env::args().skip(1))?;
    let request = read_request(&args)?;

    let result = placement::compute(&request);
    let transforms = TooltipTransforms::from_result(&result, &request.config);
    log::info!("定位完成: flipped={} offset_y={}", result.is_flipped(), result.content_offset_y);

    let output = CliOutput {
        result,
        content: transforms.content.to_css(),
        pointer: transforms.pointer.to_css(),
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> impl Iterator<Item = String> {
        list.iter().map(|s| s.to_string()).collect::<Vec<_>>().into_iter()
    }

    #[test]
    fn parses_request_and_config() {
        let parsed = parse_args(args(&["req.json", "--config", "cfg.json"])).expect("parse");
        assert_eq!(parsed.request_path, Some(PathBuf::from("req.json")));
        assert_eq!(parsed.config_path, Some(PathBuf::from("cfg.json")));
    }

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or(0);
        let path = std::env::temp_dir()
            .join(format!("deck_tooltip_cli_{name}_{}_{nanos}.json", std::process::id()));
        std::fs::write(&path, contents).expect("write temp file");
        path
    }

    const REQUEST_WITH_CONFIG: &str = r#"{
        "content": {"x": 1150, "y": 100, "width": 200, "height": 80},
        "pointer": {"x": 1150, "y": 180, "width": 20, "height": 10},
        "viewport": {"width": 1280, "height": 800},
        "config": {"screenPadding": 0, "columnWidth": 0, "contentRadius": 0}
    }"#;

    #[test]
    fn request_config_is_kept_without_flag() {
        let request_path = temp_file("keep", REQUEST_WITH_CONFIG);
        let cli = CliArgs { request_path: Some(request_path.clone()), config_path: None };

        let request = read_request(&cli).expect("read request");

        assert_eq!(request.config.column_width, 0.0);
        assert_eq!(placement::compute(&request).content_offset_x, 200.0);
        let _ = std::fs::remove_file(request_path);
    }

    #[test]
    fn missing_explicit_config_is_error() {
        let request_path = temp_file("missing_cfg", REQUEST_WITH_CONFIG);
        let cli = CliArgs {
            request_path: Some(request_path.clone()),
            config_path: Some(std::env::temp_dir().join("deck_tooltip_no_such_cfg.json")),
        };

        let result = read_request(&cli);

        assert!(matches!(result, Err(AppError::Config(_))));
        let _ = std::fs::remove_file(request_path);
    }

    #[test]
    fn missing_config_value_is_error() {
        assert!(parse_args(args(&["--config"])).is_err());
    }

    #[test]
    fn extra_positional_is_error() {
        assert!(parse_args(args(&["a.json", "b.json"])).is_err());
    }
}
