//!
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model 状态。
//! 是唯一可以修改 Model 的地方。
//!
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod calendar;           // 月历子消息处理（翻月、选中、删除、点击）
//!         mod editor;             // 编辑器子消息处理（输入、提交、取消）
//!
//!         pub fn update(app: &mut App , msg: AppMessage) {...}
//!
//!     使用 match 进行穷举，每个 Message 变体都对应一个状态变更。
//!     复杂的子消息委托给子模块处理。
//!
//!
//! 所有会改变月视图的操作（翻月、保存、删除）结束后调用 app.refresh()，
//! 仓库出错时经 app.report_error() 写日志并显示在状态栏，主循环不会中断。
//!
//! Update 完成后，控制权返回主循环（app.rs）。
//! 下一轮循环时，View 层会读取更新后的 Model 来重新渲染。
//!

mod calendar;
mod editor;

use crate::message::AppMessage;
use crate::model::App;

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::Calendar(calendar_msg) => {
            calendar::update(app, calendar_msg);
        }

        AppMessage::Editor(editor_msg) => {
            editor::update(app, editor_msg);
        }

        AppMessage::ShowHelp => {
            app.modal.show_help();
        }

        AppMessage::CloseModal => {
            app.modal.close();
        }

        AppMessage::ClearStatus => {
            app.clear_status();
        }

        AppMessage::Noop => {}
    }
}
