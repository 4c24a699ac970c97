//! 命令解析
//!
//! 每行一条命令：
//! - `place <x> <y>`：从储备放子
//! - `move <x> <y> <n> <dirs>`：dirs 为 `UDLR` 组成的字符串
//! - `drop <x> <y> <R|G>`：摆子（不换手）
//! - `board` / `reserves` / `help` / `quit`

use focus_core::{Color, Direction};
use thiserror::Error;

/// 命令
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Place { x: i32, y: i32 },
    Move {
        x: i32,
        y: i32,
        count: usize,
        directions: Vec<Direction>,
    },
    Drop { x: i32, y: i32, color: Color },
    Board,
    Reserves,
    Help,
    Quit,
}

/// 命令解析错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command: {0} (try `help`)")]
    Unknown(String),

    #[error("Usage: {0}")]
    Usage(&'static str),

    #[error("Not a number: {0}")]
    InvalidNumber(String),

    #[error("Invalid direction: {0} (use U, D, L, R)")]
    InvalidDirection(char),

    #[error("Invalid color: {0} (use R or G)")]
    InvalidColor(String),
}

pub const HELP: &str = "\
place <x> <y>             place a piece from your reserves
move <x> <y> <n> <dirs>   move the top n pieces, dirs like UR or DDL
drop <x> <y> <R|G>        put a piece on the board without passing the turn
board                     show the board
reserves                  show both reserves
quit                      leave";

impl Command {
    /// 解析一行输入，空行返回 `None`
    pub fn parse(line: &str) -> Result<Option<Command>, CommandError> {
        let words: Vec<&str> = line.split_whitespace().collect();
        let Some((&name, args)) = words.split_first() else {
            return Ok(None);
        };

        let command = match (name.to_ascii_lowercase().as_str(), args) {
            ("place", [x, y]) => Command::Place {
                x: parse_number(x)?,
                y: parse_number(y)?,
            },
            ("place", _) => return Err(CommandError::Usage("place <x> <y>")),
            ("move", [x, y, count, dirs]) => Command::Move {
                x: parse_number(x)?,
                y: parse_number(y)?,
                count: parse_number(count)?,
                directions: parse_directions(dirs)?,
            },
            ("move", _) => return Err(CommandError::Usage("move <x> <y> <n> <dirs>")),
            ("drop", [x, y, color]) => Command::Drop {
                x: parse_number(x)?,
                y: parse_number(y)?,
                color: parse_color(color)?,
            },
            ("drop", _) => return Err(CommandError::Usage("drop <x> <y> <R|G>")),
            ("board", []) => Command::Board,
            ("reserves", []) => Command::Reserves,
            ("help", _) => Command::Help,
            ("quit" | "exit", _) => Command::Quit,
            _ => return Err(CommandError::Unknown(name.to_string())),
        };
        Ok(Some(command))
    }
}

fn parse_number<T: std::str::FromStr>(s: &str) -> Result<T, CommandError> {
    s.parse()
        .map_err(|_| CommandError::InvalidNumber(s.to_string()))
}

fn parse_directions(s: &str) -> Result<Vec<Direction>, CommandError> {
    s.chars()
        .map(|c| Direction::from_char(c).ok_or(CommandError::InvalidDirection(c)))
        .collect()
}

fn parse_color(s: &str) -> Result<Color, CommandError> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => {
            Color::from_symbol(c).ok_or_else(|| CommandError::InvalidColor(s.to_string()))
        }
        _ => Err(CommandError::InvalidColor(s.to_string())),
    }
}
