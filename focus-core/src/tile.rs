//! 棋格与叠子栈

use serde::Serialize;

use crate::constants::STACK_CAPACITY;
use crate::piece::{Color, Piece};

/// 棋格
///
/// 槽位从下往上排列：下标 0 是最早放入的底部棋子，下标 4 是栈顶。
/// 已占用的槽位总是连续地从底部开始。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tile {
    usable: bool,
    slots: [Piece; STACK_CAPACITY],
}

impl Tile {
    /// 创建空棋格
    pub fn new(usable: bool) -> Self {
        Self {
            usable,
            slots: [None; STACK_CAPACITY],
        }
    }

    /// 按从下到上的顺序创建带棋子的棋格，超出容量的部分被忽略
    pub fn with_pieces(usable: bool, pieces: &[Color]) -> Self {
        let mut tile = Self::new(usable);
        for (slot, &color) in tile.slots.iter_mut().zip(pieces) {
            *slot = Some(color);
        }
        tile
    }

    /// 是否参与对局
    pub fn is_usable(&self) -> bool {
        self.usable
    }

    /// 栈高（已占用槽位数）
    pub fn height(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.height() == 0
    }

    pub fn is_full(&self) -> bool {
        self.height() == STACK_CAPACITY
    }

    /// 全部槽位（含空位）
    pub fn slots(&self) -> &[Piece; STACK_CAPACITY] {
        &self.slots
    }

    /// 从下到上遍历已有棋子
    pub fn pieces(&self) -> impl Iterator<Item = Color> + '_ {
        self.slots.iter().flatten().copied()
    }

    /// 栈顶棋子
    pub fn top(&self) -> Option<Color> {
        self.slots.iter().rev().flatten().next().copied()
    }

    /// 栈底棋子
    pub fn bottom(&self) -> Option<Color> {
        self.slots[0]
    }

    /// 栈非空且全部属于指定颜色
    pub fn is_owned_by(&self, color: Color) -> bool {
        !self.is_empty() && self.pieces().all(|piece| piece == color)
    }

    /// 压入栈顶；满栈时先移出底部棋子并返回它
    pub(crate) fn push(&mut self, color: Color) -> Option<Color> {
        let height = self.height();
        if height < STACK_CAPACITY {
            self.slots[height] = Some(color);
            return None;
        }

        let evicted = self.slots[0].take();
        self.slots.rotate_left(1);
        self.slots[STACK_CAPACITY - 1] = Some(color);
        evicted
    }

    /// 弹出栈顶棋子
    pub(crate) fn pop(&mut self) -> Option<Color> {
        match self.height() {
            0 => None,
            height => self.slots[height - 1].take(),
        }
    }

    /// 替换栈内容，保留可用性
    pub(crate) fn replace_stack(&mut self, other: &Tile) {
        self.slots = other.slots;
    }
}
