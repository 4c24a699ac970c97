//! 文本棋盘渲染
//!
//! 每格显示栈顶颜色和栈高，例如 `R3`；`#` 为不可用格，`.` 为空格。

use std::fmt::Write;

use crate::board::Board;
use crate::constants::{BOARD_HEIGHT, BOARD_WIDTH};
use crate::piece::{Color, Position};

impl Board {
    /// 渲染为文本棋盘，`show_heights` 为 false 时只显示栈顶颜色
    pub fn render(&self, show_heights: bool) -> String {
        let mut out = String::new();

        out.push_str("   ");
        for x in 0..BOARD_WIDTH {
            let _ = write!(out, "{:>3}", x);
        }
        out.push('\n');

        for y in 0..BOARD_HEIGHT {
            let _ = write!(out, "{:>2} ", y);
            for x in 0..BOARD_WIDTH {
                let tile = self.tile_at(Position::new_unchecked(x as u8, y as u8));
                let cell = match tile.top() {
                    _ if !tile.is_usable() => "#".to_string(),
                    None => ".".to_string(),
                    Some(top) if show_heights => format!("{}{}", top.symbol(), tile.height()),
                    Some(top) => top.symbol().to_string(),
                };
                let _ = write!(out, "{:>3}", cell);
            }
            out.push('\n');
        }

        let _ = write!(
            out,
            "Reserves: {} {}  {} {}",
            Color::First.symbol(),
            self.reserves(Color::First),
            Color::Second.symbol(),
            self.reserves(Color::Second),
        );
        out
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render(true))
    }
}
