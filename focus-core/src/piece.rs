//! 颜色、棋子与位置定义

use serde::{Deserialize, Serialize};

use crate::constants::{BOARD_HEIGHT, BOARD_WIDTH};
use crate::error::{FocusError, Result};

/// 阵营颜色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    /// 先手（红）
    First,
    /// 后手（绿）
    Second,
}

impl Color {
    /// 获取对方颜色
    pub fn opponent(&self) -> Color {
        match self {
            Color::First => Color::Second,
            Color::Second => Color::First,
        }
    }

    /// 显示字符
    pub fn symbol(&self) -> char {
        match self {
            Color::First => 'R',
            Color::Second => 'G',
        }
    }

    /// 从显示字符解析（不区分大小写）
    pub fn from_symbol(c: char) -> Option<Color> {
        match c {
            'r' | 'R' => Some(Color::First),
            'g' | 'G' => Some(Color::Second),
            _ => None,
        }
    }

    /// 数组下标
    pub(crate) fn index(&self) -> usize {
        match self {
            Color::First => 0,
            Color::Second => 1,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::First => write!(f, "Red"),
            Color::Second => write!(f, "Green"),
        }
    }
}

/// 棋子槽位：`None` 表示空位
pub type Piece = Option<Color>;

/// 满栈放子时底部棋子的去向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Eviction {
    /// 放子方收回自己的棋子，计入储备
    Recovered(Color),
    /// 对方棋子被吃掉，直接出局
    Captured(Color),
}

impl Eviction {
    /// 被移出的棋子颜色
    pub fn color(&self) -> Color {
        match self {
            Eviction::Recovered(color) | Eviction::Captured(color) => *color,
        }
    }
}

/// 棋盘位置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// 列 (0-7)
    pub x: u8,
    /// 行 (0-7)，0 在上方
    pub y: u8,
}

impl Position {
    /// 创建新位置
    pub fn new(x: u8, y: u8) -> Option<Self> {
        if (x as usize) < BOARD_WIDTH && (y as usize) < BOARD_HEIGHT {
            Some(Self { x, y })
        } else {
            None
        }
    }

    /// 创建新位置（不检查边界，内部使用）
    pub const fn new_unchecked(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// 从有符号坐标创建，越界返回 `OutOfBounds`
    pub fn try_new(x: i32, y: i32) -> Result<Self> {
        if (0..BOARD_WIDTH as i32).contains(&x) && (0..BOARD_HEIGHT as i32).contains(&y) {
            Ok(Self {
                x: x as u8,
                y: y as u8,
            })
        } else {
            Err(FocusError::OutOfBounds { x, y })
        }
    }

    /// 获取偏移后的位置
    pub fn offset(&self, dx: i32, dy: i32) -> Option<Position> {
        Self::try_new(self.x as i32 + dx, self.y as i32 + dy).ok()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
