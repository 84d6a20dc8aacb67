//! 应用层 - 命令（写操作）
//!
//! CQRS 命令侧：处理所有写操作

mod pairing_commands;
mod restaurant_commands;

pub mod handlers;

pub use pairing_commands::*;
pub use restaurant_commands::*;
