//! 默认路径

use std::path::PathBuf;

const APP_DIR: &str = "month-calendar";

/// 获取配置目录路径
fn get_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

/// 获取数据目录路径
fn get_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

/// 默认配置文件
pub fn default_config_file() -> PathBuf {
    get_config_dir().join("config.json")
}

/// 默认约会数据文件
pub fn default_data_file() -> PathBuf {
    get_data_dir().join("appointments.json")
}

/// 默认日志文件
pub fn default_log_file() -> PathBuf {
    get_data_dir().join("month-calendar.log")
}
