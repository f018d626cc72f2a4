//!
//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! Model 层是应用状态的 “唯一真相来源”。
//! 所有状态变更都通过 Update 层来触发。
//!
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // 主应用状态
//!         mod modal;          // 弹窗状态（帮助）
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、主应用状态（App）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!         pub struct App {
//!             pub should_quit: bool,              // 退出标志
//!             pub calendar: Widget,               // 月历组件（当前月份、编辑器、约会仓库）
//!             pub month: MonthView,               // 最近一次渲染出的 42 个格子
//!             pub selected: usize,                // 键盘选中的格子下标（0..42）
//!             pub status_message: Option<String>, // 状态栏消息
//!             pub modal: ModalState,              // 弹窗状态
//!             pub viewport: Rect,                 // 最近一次绘制的终端区域，用于鼠标命中测试
//!         }
//!
//!     `month` 不是每帧重算的：Update 层每次修改 `calendar` 后调用 `App::refresh()`，
//!     整体重建 42 个格子，View 层只读取它。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、选中格子（selected）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     方向键按天 / 按周移动，限制在 42 个格子内。
//!     切换月份后，选中今天（若在本月）或本月 1 日。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 三、编辑器
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     编辑器状态由 core 的 `EditorState` 持有，位于 `app.calendar.editor()`。
//!     打开时，键盘输入全部交给编辑器；View 层把它画在目标格子旁。
//!

mod app;
mod modal;

pub use app::App;
pub use modal::{Modal, ModalState};
