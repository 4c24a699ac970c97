//! 错误类型定义

use thiserror::Error;

/// 规则错误
///
/// 全部是同步的校验失败，不可重试。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FocusError {
    /// 坐标越界
    #[error("Tile out of bounds: ({x}, {y})")]
    OutOfBounds { x: i32, y: i32 },

    /// 放入空棋子
    #[error("Cannot add a piece that does not exist")]
    PieceNonExistent,

    /// 起点棋格不可用
    #[error("Cannot move from unusable tile ({x}, {y})")]
    TileSourceNonUsable { x: u8, y: u8 },

    /// 终点棋格不可用
    #[error("Cannot move to unusable tile ({x}, {y})")]
    TileDestinationUnusable { x: u8, y: u8 },

    /// 起点没有棋子
    #[error("No piece to move")]
    NoPieceToMove,

    /// 起点栈中有对方棋子
    #[error("You cannot move your opponent's piece")]
    WrongColor,

    /// 移动数量为 0
    #[error("You must move at least one piece")]
    MustMoveAtLeastOnePiece,

    /// 移动数量超过栈高
    #[error("Too many pieces: requested {requested}, stack holds {available}")]
    TooManyPieces { requested: usize, available: usize },

    /// 没有方向
    #[error("No directions given")]
    NoDirections,

    /// 方向数量与移动数量不符
    #[error("Wrong amount of directions: expected {expected}, got {actual}")]
    WrongDirectionAmount { expected: usize, actual: usize },
}

/// 规则操作结果类型
pub type Result<T> = std::result::Result<T, FocusError>;
