//! Focus 终端前端
//!
//! 包含:
//! - 设置加载与保存
//! - 命令解析
//! - 对局会话（轮次由前端负责）

pub mod command;
pub mod session;
pub mod settings;

pub use command::{Command, CommandError};
pub use session::{Reply, Session};
pub use settings::{CliSettings, LogLevel, SettingsError};
