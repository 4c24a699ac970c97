//! 对局会话
//!
//! 会话独占棋盘，把命令映射到引擎调用并负责换手。
//! 成功的 `place` / `move` 交给对方；`drop` 和失败的命令不换手。

use focus_core::{Board, Color, Eviction, FocusError, MoveOutcome};

use crate::command::{Command, HELP};
use crate::settings::CliSettings;

/// 命令执行结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// 输出给玩家的文本
    Text(String),
    /// 引擎拒绝了本次操作，轮次不变
    Rejected(FocusError),
    Quit,
}

/// 对局会话
pub struct Session {
    board: Board,
    current: Color,
    show_heights: bool,
}

impl Session {
    /// 按设置创建会话
    pub fn new(settings: &CliSettings) -> Self {
        let mut board = Board::new();
        board.set_reserves(Color::First, settings.starting_reserves);
        board.set_reserves(Color::Second, settings.starting_reserves);

        Self {
            board,
            current: settings.first_player,
            show_heights: settings.show_heights,
        }
    }

    /// 当前行动方
    pub fn current(&self) -> Color {
        self.current
    }

    /// 只读棋盘
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn render(&self) -> String {
        self.board.render(self.show_heights)
    }

    /// 执行一条命令
    pub fn execute(&mut self, command: Command) -> Reply {
        let player = self.current;
        let result = match command {
            Command::Place { x, y } => self
                .board
                .add_from_reserves(player, x, y)
                .map(|eviction| describe_evictions(eviction.as_slice())),
            Command::Move {
                x,
                y,
                count,
                directions,
            } => self
                .board
                .move_pieces(x, y, count, &directions, player)
                .map(|outcome| describe_move(&outcome)),
            Command::Drop { x, y, color } => {
                return match self.board.add_piece(x, y, Some(color), player) {
                    Ok(_) => Reply::Text(self.render()),
                    Err(e) => Reply::Rejected(e),
                };
            }
            Command::Board => return Reply::Text(self.render()),
            Command::Reserves => return Reply::Text(self.describe_reserves()),
            Command::Help => return Reply::Text(HELP.to_string()),
            Command::Quit => return Reply::Quit,
        };

        match result {
            Ok(summary) => {
                self.current = player.opponent();
                tracing::info!(%player, next = %self.current, "回合结束");
                Reply::Text(format!("{}{}", summary, self.render()))
            }
            Err(e) => {
                tracing::debug!(%player, error = %e, "非法操作");
                Reply::Rejected(e)
            }
        }
    }

    fn describe_reserves(&self) -> String {
        format!(
            "{}: {}  {}: {}",
            Color::First,
            self.board.reserves(Color::First),
            Color::Second,
            self.board.reserves(Color::Second),
        )
    }
}

fn describe_move(outcome: &MoveOutcome) -> String {
    format!(
        "Moved {} from {} to {}\n{}",
        outcome.moved,
        outcome.from,
        outcome.to,
        describe_evictions(&outcome.evictions),
    )
}

fn describe_evictions(evictions: &[Eviction]) -> String {
    evictions
        .iter()
        .map(|eviction| match eviction {
            Eviction::Recovered(color) => format!("{} recovered a piece to reserves\n", color),
            Eviction::Captured(color) => format!("{} piece captured\n", color),
        })
        .collect()
}
