//! Focus 叠子棋规则引擎
//!
//! 包含:
//! - 颜色、棋子、位置等核心数据结构
//! - 棋格叠子栈（最多 5 层，满栈时底部出栈）
//! - 棋盘状态与储备计数
//! - 放子、吃子与储备结算
//! - 走法验证与执行
//! - 文本棋盘渲染
//!
//! 引擎一次只验证并执行一步，轮次与胜负由调用方负责。

mod board;
mod constants;
mod error;
mod moves;
mod piece;
mod render;
mod tile;

pub use board::Board;
pub use constants::*;
pub use error::{FocusError, Result};
pub use moves::{Direction, Move, MoveOutcome};
pub use piece::{Color, Eviction, Piece, Position};
pub use tile::Tile;
