//! 应用层 - 命令
//!
//! 扫描、单文件分割与顺序批处理

mod scan_commands;
mod split_commands;

pub mod handlers;

pub use scan_commands::*;
pub use split_commands::*;
