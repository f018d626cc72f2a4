//!
//! src/util/mod.rs
//! Util 层：基础设施和工具函数
//!
//! Util 层提供与业务逻辑无关的基础设施代码：
//!
//!     src/util/mod.rs
//!         mod terminal;       // 终端初始化和恢复
//!         mod logging;        // 日志输出到文件
//!
//!
//!     初始化终端（terminal.rs）：
//!         · enable_raw_mode()             // 关闭行缓冲与回显
//!         · EnterAlternateScreen          // 切换到备用屏幕
//!         · EnableMouseCapture            // 接收鼠标点击，用于点选日期
//!
//!     恢复终端时按相反顺序撤销。
//!     无论主循环成功还是失败，main.rs 都会先恢复终端再返回结果。
//!
//!
//!     日志（logging.rs）：
//!         TUI 占用了 stdout，日志写进文件，否则会弄花界面。
//!

mod logging;
mod terminal;

pub use logging::init_logging;
pub use terminal::{init_terminal, restore_terminal, Term};
