//! Month Calendar TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 配置与存储 (`backend/`)
//!
//!
//! main.rs
//! Month Calendar TUI 的程序入口
//!
//! 其执行：
//! fn `main()` {
//!
//!     Cli::parse()            // 解析命令行参数
//!     Settings::resolve()     // 合并配置文件与命令行参数
//!     init_logging()          // 日志写到文件，终端留给 UI
//!     open_store()            // 打开约会仓库（JSON 文件或内存）
//!     init_terminal()         // 初始化终端，得到 terminal: Terminal<...>
//!     app::run()              // 运行 app.rs 主循环
//!     restore_terminal()      // 无论成功与否，都恢复终端
//!
//! }
//!
//!
//! 当启动程序时，main.rs：
//!     `init_terminal()`         // from util/terminal.rs
//!
//!     有：
//!         · enable_raw_mode()
//!             - 以关闭终端行缓冲模式、关闭回显与允许读取单个按键事件
//!         · execute!(io::stdout , EnterAlternateScreen , EnableMouseCapture)?
//!             - 切换到 备用屏幕，并接收鼠标点击
//!         · 返回 Terminal 对象
//!
//!
//!     App::new()              // from model/app.rs
//!     创建初始状态（在 /app.rs 下细嗦）
//!
//!
//!     进入主循环 app::run()   // from /app.rs

mod app;
mod backend;
mod cli;
mod event;
mod message;
mod model;
mod update;
mod util;
mod view;

#[cfg(test)]
mod test_utils;

use anyhow::{Context, Result};
use clap::Parser;
use month_calendar_core::{CalendarWidget, Clock, SystemClock};

use backend::{default_config_file, open_store, ConfigService, LocalConfigService, Settings};
use cli::Cli;
use util::{init_logging, init_terminal, restore_terminal};

fn main() -> Result<(), anyhow::Error> {
    // 1. 解析参数并加载配置
    let cli = Cli::parse();
    let config_service = LocalConfigService::new(
        cli.config.clone().unwrap_or_else(default_config_file),
    );
    let config = config_service.load()?;
    let settings = Settings::resolve(&cli, config);

    // 2. 初始化日志
    init_logging(&settings.log_file)?;
    log::info!(
        "Starting month-calendar v{} (config: {})",
        env!("CARGO_PKG_VERSION"),
        config_service.path().display()
    );
    view::theme::set_theme(settings.theme);

    // 3. 打开仓库并创建应用实例
    let store = open_store(&settings.store).context("failed to open appointment store")?;
    let clock: Box<dyn Clock> = Box::new(SystemClock);
    let calendar = CalendarWidget::new(store, clock, settings.widget);
    let mut app = model::App::new(calendar)?;

    // 4. 初始化终端
    let mut terminal = init_terminal()?;

    // 5. 运行主循环
    let result = app::run(&mut terminal, &mut app);

    // 6. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    // 7. 返回结果
    result
}
