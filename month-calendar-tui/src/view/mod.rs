//!
//! src/view/mod.rs
//! View 层：UI 渲染
//!
//! View 层只读取 Model，不修改任何状态。
//!
//!     src/view/mod.rs
//!         pub mod layout;     // 主布局、区域几何、鼠标命中测试
//!         pub mod theme;      // 颜色与样式
//!         mod pages;          // 月历页面（控制栏、表头、网格）
//!         mod components;     // 状态栏、编辑框、帮助弹窗
//!
//!     每一帧：
//!         layout::render(app, frame)
//!             → 标题栏
//!             → pages::month::render          // 42 个格子
//!             → components::statusbar::render
//!             → components::editor::render    // 编辑器打开时，锚定在目标格子旁
//!             → components::help::render      // 帮助弹窗在最上层
//!

mod components;
pub mod layout;
mod pages;
pub mod theme;

pub use layout::render;
