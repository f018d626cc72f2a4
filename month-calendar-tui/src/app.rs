//!
//! app.rs
//! 应用主循环
//!
//!
//!
//! 在应用启动时（见 main.rs），App 初始化为以下状态：
//!
//! App {
//!
//!     should_quit: false,                             // 决定应用是否应该退出
//!     calendar: CalendarWidget {                      // 月历组件
//!         active: 今天所在的月份,
//!         editor: Hidden,
//!     },
//!     month: calendar.view(),                         // 当前 42 格月视图
//!     selected: 今天所在的格子,
//!     status_message: None,                           // 状态栏消息
//!     modal: 无弹窗,
//!     viewport: 上一帧的终端区域,
//!
//! }
//!
//!
//! 主循环大约每 100 ms 执行一次（取决于有无事件）
//! 应用的主循环中有：
//! loop {
//!
//!     let frame = terminal.draw(|f| view::render(&app , f))   // 渲染 UI
//!     app.viewport = frame.area                               // 记录区域，鼠标命中测试要用
//!     if app.should_quit { break }                            // 检查 APP 是否应该退出
//!     if let Some(event) = poll_event() {                     // 轮询获取输入，在此等待 100ms
//!         let msg = handle_event(event , &app);               // 接收原始事件并翻译成消息
//!         update::update(&mut app , msg)                      // 更新状态
//!     }
//! }

use std::time::Duration;

use anyhow::Result;

use crate::event;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 运行应用主循环
pub fn run(terminal: &mut Term, app: &mut App) -> Result<()> {
    loop {
        // 1. 渲染 UI
        let frame = terminal.draw(|frame| {
            view::render(app, frame);
        })?;
        app.viewport = frame.area;

        // 2. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 3. 轮询事件（100ms 超时）
        if let Some(event) = event::poll_event(Duration::from_millis(100))? {
            // 4. 处理事件，获取消息
            let msg = event::handle_event(event, app);

            // 5. 更新状态
            update::update(app, msg);
        }
    }

    log::info!("Exiting");
    Ok(())
}
