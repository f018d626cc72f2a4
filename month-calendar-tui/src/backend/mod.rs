//!
//! src/backend/mod.rs
//! Backend 层：配置与存储
//!
//! 有模块结构：
//!     src/backend/mod.rs
//!         mod paths;              // 配置目录与数据目录
//!         mod config_service;     // 配置文件加载，与命令行参数合并
//!         mod store_service;      // 按设置打开约会仓库
//!
//!     启动时 main.rs 依次：
//!         LocalConfigService::load()      → AppConfig
//!         Settings::resolve(&cli, config) → Settings（命令行 > 配置文件 > 默认值）
//!         open_store(&settings.store)     → Box<dyn AppointmentStore>
//!

mod config_service;
mod paths;
mod store_service;

pub use config_service::{ConfigService, LocalConfigService, Settings, StoreLocation};
pub use paths::default_config_file;
pub use store_service::open_store;
