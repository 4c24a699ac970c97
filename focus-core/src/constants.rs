//! 规则常量定义

/// 棋盘宽度（列数）
pub const BOARD_WIDTH: usize = 8;

/// 棋盘高度（行数）
pub const BOARD_HEIGHT: usize = 8;

/// 单个棋格最多叠放的棋子数
pub const STACK_CAPACITY: usize = 5;

/// 四角被切掉的不可用棋格
pub const UNUSABLE_TILES: [(u8, u8); 12] = [
    (0, 0),
    (0, 1),
    (1, 0),
    (6, 0),
    (7, 0),
    (7, 1),
    (0, 6),
    (0, 7),
    (1, 7),
    (6, 7),
    (7, 6),
    (7, 7),
];
