//! 定位配置持久化
//!
//! 配置以 pretty JSON 保存；文件存在但内容无法解析时返回 `AppError::Config`。
//! 隐式的默认配置路径缺失时回退默认值，显式指定的路径缺失则报错。

use std::fs;
use std::path::Path;

use crate::error::AppError;
use crate::placement::PlacementConfig;

pub fn load_config_from_path(path: &Path) -> Result<PlacementConfig, AppError> {
    if !path.exists() {
        log::debug!("配置文件 {} 不存在，使用默认定位配置", path.display());
        return Ok(PlacementConfig::default());
    }

    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content)
        .map_err(|e| AppError::Config(format!("解析配置文件 {} 失败: {}", path.display(), e)))
}

/// 读取调用方显式指定的配置文件；文件不存在视为错误，不回退默认值
pub fn load_required_config_from_path(path: &Path) -> Result<PlacementConfig, AppError> {
    if !path.exists() {
        return Err(AppError::Config(format!("配置文件 {} 不存在", path.display())));
    }
    load_config_from_path(path)
}

pub fn save_config_to_path(path: &Path, config: &PlacementConfig) -> Result<(), AppError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let content = serde_json::to_string_pretty(config)
        .map_err(|e| AppError::Config(format!("序列化配置失败: {}", e)))?;
    fs::write(path, content)?;
    Ok(())
}
