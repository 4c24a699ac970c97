//! 走法验证和执行
//!
//! 一步走法把起点栈顶的 N 枚棋子移到一个终点。N 个单位方向
//! 先累加成一个净位移，不是逐格路径。

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::error::{FocusError, Result};
use crate::piece::{Color, Eviction, Position};

/// 单位方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// 单位位移 (dx, dy)，y 轴向下
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Direction::Up => 'U',
            Direction::Down => 'D',
            Direction::Left => 'L',
            Direction::Right => 'R',
        }
    }

    /// 从 `U/D/L/R` 解析（不区分大小写）
    pub fn from_char(c: char) -> Option<Direction> {
        match c.to_ascii_uppercase() {
            'U' => Some(Direction::Up),
            'D' => Some(Direction::Down),
            'L' => Some(Direction::Left),
            'R' => Some(Direction::Right),
            _ => None,
        }
    }

    /// 方向序列的净位移
    pub fn net_offset(directions: &[Direction]) -> (i32, i32) {
        directions.iter().fold((0, 0), |(x, y), dir| {
            let (dx, dy) = dir.delta();
            (x + dx, y + dy)
        })
    }
}

/// 走法
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    /// 起始位置
    pub from: Position,
    /// 移动的棋子数
    pub count: usize,
    /// 方向序列，长度必须等于 `count`
    pub directions: Vec<Direction>,
}

impl Move {
    /// 创建新走法
    pub fn new(from: Position, count: usize, directions: Vec<Direction>) -> Self {
        Self {
            from,
            count,
            directions,
        }
    }

    /// 单枚棋子走一步
    pub fn single(from: Position, direction: Direction) -> Self {
        Self::new(from, 1, vec![direction])
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} x{} ", self.from, self.count)?;
        for dir in &self.directions {
            write!(f, "{}", dir.symbol())?;
        }
        Ok(())
    }
}

/// 走法执行结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveOutcome {
    pub from: Position,
    pub to: Position,
    /// 实际移动的棋子数
    pub moved: usize,
    /// 终点满栈时依次移出的底部棋子
    pub evictions: Vec<Eviction>,
}

impl Board {
    /// 执行走法
    pub fn apply(&mut self, mv: &Move, player: Color) -> Result<MoveOutcome> {
        self.move_pieces(mv.from.x as i32, mv.from.y as i32, mv.count, &mv.directions, player)
    }

    /// 把 (x, y) 栈顶的 `count` 枚棋子按方向净位移移到终点
    ///
    /// 所有检查都在修改之前完成，失败时棋盘保持不变。
    /// 每枚棋子先从起点弹出再放入终点，因此净位移为 0 的走法
    /// 不会触发满栈出底，也不会增加储备。
    pub fn move_pieces(
        &mut self,
        x: i32,
        y: i32,
        count: usize,
        directions: &[Direction],
        player: Color,
    ) -> Result<MoveOutcome> {
        let (from, to) = self.validate_move(x, y, count, directions, player)?;

        // 先弹出再放入：净位移为 0 时栈保持原样
        let mut evictions = Vec::new();
        for _ in 0..count {
            let Some(piece) = self.tile_mut(x, y)?.pop() else {
                break;
            };
            if let Some(eviction) = self.add_piece(to.x as i32, to.y as i32, Some(piece), player)? {
                evictions.push(eviction);
            }
        }

        tracing::debug!(%player, %from, %to, count, captures = evictions.len(), "走子");

        Ok(MoveOutcome {
            from,
            to,
            moved: count,
            evictions,
        })
    }

    /// 按顺序校验，第一个失败的检查生效
    fn validate_move(
        &self,
        x: i32,
        y: i32,
        count: usize,
        directions: &[Direction],
        player: Color,
    ) -> Result<(Position, Position)> {
        let from = Position::try_new(x, y)?;
        let source = self.tile_at(from);

        if !source.is_usable() {
            return Err(FocusError::TileSourceNonUsable { x: from.x, y: from.y });
        }
        if source.is_empty() {
            return Err(FocusError::NoPieceToMove);
        }
        // 混色栈任何一方都不能移动
        if !source.is_owned_by(player) {
            return Err(FocusError::WrongColor);
        }
        if count == 0 {
            return Err(FocusError::MustMoveAtLeastOnePiece);
        }
        let available = source.height();
        if count > available {
            return Err(FocusError::TooManyPieces {
                requested: count,
                available,
            });
        }
        if directions.is_empty() {
            return Err(FocusError::NoDirections);
        }
        if directions.len() != count {
            return Err(FocusError::WrongDirectionAmount {
                expected: count,
                actual: directions.len(),
            });
        }

        let (dx, dy) = Direction::net_offset(directions);
        let to = Position::try_new(x + dx, y + dy)?;
        if !self.tile_at(to).is_usable() {
            return Err(FocusError::TileDestinationUnusable { x: to.x, y: to.y });
        }

        Ok((from, to))
    }
}
