//! 棋盘状态

use serde::Serialize;

use crate::constants::{BOARD_HEIGHT, BOARD_WIDTH, UNUSABLE_TILES};
use crate::error::{FocusError, Result};
use crate::piece::{Color, Eviction, Piece, Position};
use crate::tile::Tile;

/// 棋盘
///
/// 8x8 棋格加双方储备计数。棋格按 `tiles[x][y]` 索引。
/// 储备计数不做下限检查，调用方不得在储备为 0 时继续取子。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Board {
    tiles: [[Tile; BOARD_HEIGHT]; BOARD_WIDTH],
    reserves: [i32; 2],
}

impl Board {
    /// 创建初始棋盘：全部空栈，四角 12 格不可用，储备为 0
    pub fn new() -> Self {
        let mut tiles: [[Tile; BOARD_HEIGHT]; BOARD_WIDTH] =
            std::array::from_fn(|_| std::array::from_fn(|_| Tile::new(true)));

        for (x, y) in UNUSABLE_TILES {
            tiles[x as usize][y as usize] = Tile::new(false);
        }

        Self {
            tiles,
            reserves: [0; 2],
        }
    }

    /// 获取指定坐标的棋格
    pub fn tile(&self, x: i32, y: i32) -> Result<&Tile> {
        let pos = Position::try_new(x, y)?;
        Ok(self.tile_at(pos))
    }

    /// 获取指定位置的棋格
    pub fn tile_at(&self, pos: Position) -> &Tile {
        &self.tiles[pos.x as usize][pos.y as usize]
    }

    pub(crate) fn tile_mut(&mut self, x: i32, y: i32) -> Result<&mut Tile> {
        let pos = Position::try_new(x, y)?;
        Ok(&mut self.tiles[pos.x as usize][pos.y as usize])
    }

    /// 替换指定坐标的棋子栈，棋格可用性保持不变
    pub fn set_tile(&mut self, x: i32, y: i32, tile: Tile) -> Result<()> {
        self.tile_mut(x, y)?.replace_stack(&tile);
        Ok(())
    }

    /// 遍历全部棋格（按行，从上到下）
    pub fn tiles(&self) -> impl Iterator<Item = (Position, &Tile)> + '_ {
        (0..BOARD_HEIGHT).flat_map(move |y| {
            (0..BOARD_WIDTH).map(move |x| {
                let pos = Position::new_unchecked(x as u8, y as u8);
                (pos, self.tile_at(pos))
            })
        })
    }

    /// 指定位置的栈高
    pub fn height_at(&self, pos: Position) -> usize {
        self.tile_at(pos).height()
    }

    /// 棋盘上某方的棋子总数
    pub fn piece_count(&self, color: Color) -> usize {
        self.tiles()
            .map(|(_, tile)| tile.pieces().filter(|&piece| piece == color).count())
            .sum()
    }

    /// 获取储备数量
    pub fn reserves(&self, color: Color) -> i32 {
        self.reserves[color.index()]
    }

    /// 设置储备数量
    pub fn set_reserves(&mut self, color: Color, amount: i32) {
        self.reserves[color.index()] = amount;
    }

    /// 增加储备数量
    pub fn add_to_reserves(&mut self, color: Color, amount: i32) {
        self.reserves[color.index()] += amount;
    }

    /// 放入一枚棋子
    ///
    /// 未满时叠在栈顶。满栈时移出底部棋子：若与 `acting` 同色则计入
    /// 其储备，否则直接出局。
    pub fn add_piece(
        &mut self,
        x: i32,
        y: i32,
        piece: Piece,
        acting: Color,
    ) -> Result<Option<Eviction>> {
        let Some(color) = piece else {
            return Err(FocusError::PieceNonExistent);
        };

        let Some(evicted) = self.tile_mut(x, y)?.push(color) else {
            tracing::trace!(x, y, %color, "放子");
            return Ok(None);
        };

        let eviction = if evicted == acting {
            self.add_to_reserves(acting, 1);
            Eviction::Recovered(evicted)
        } else {
            Eviction::Captured(evicted)
        };
        tracing::debug!(x, y, %acting, ?eviction, "满栈出底");

        Ok(Some(eviction))
    }

    /// 从储备中取一枚棋子放入
    ///
    /// 先扣减储备（不检查是否为正），再以本方身份放子。
    pub fn add_from_reserves(&mut self, color: Color, x: i32, y: i32) -> Result<Option<Eviction>> {
        self.add_to_reserves(color, -1);
        self.add_piece(x, y, Some(color), color)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::constants::STACK_CAPACITY;
    use crate::piece::Color::{First as R, Second as G};

    fn stack(board: &Board, x: i32, y: i32) -> Vec<Color> {
        board.tile(x, y).unwrap().pieces().collect()
    }

    #[test]
    fn test_new_board() {
        let board = Board::new();
        assert_eq!(board.reserves(R), 0);
        assert_eq!(board.reserves(G), 0);

        for (pos, tile) in board.tiles() {
            let expected_unusable = UNUSABLE_TILES.contains(&(pos.x, pos.y));
            assert_eq!(tile.is_usable(), !expected_unusable, "tile {}", pos);
            assert!(tile.is_empty());
        }
        assert_eq!(board.tiles().filter(|(_, tile)| !tile.is_usable()).count(), 12);
    }

    #[test]
    fn test_tile_in_bounds() {
        let board = Board::new();
        for x in 0..8 {
            for y in 0..8 {
                assert!(board.tile(x, y).is_ok());
            }
        }
    }

    #[test]
    fn test_tile_out_of_bounds() {
        let mut board = Board::new();
        for (x, y) in [(-1, 0), (0, -1), (8, 0), (0, 8), (100, -100)] {
            let expected = FocusError::OutOfBounds { x, y };
            assert_eq!(board.tile(x, y).unwrap_err(), expected);
            assert_eq!(board.add_piece(x, y, Some(R), R).unwrap_err(), expected);
            assert_eq!(board.set_tile(x, y, Tile::new(true)).unwrap_err(), expected);
        }
    }

    #[test]
    fn test_reserves() {
        let mut board = Board::new();
        board.set_reserves(R, 5);
        board.set_reserves(G, 6);
        assert_eq!(board.reserves(R), 5);
        assert_eq!(board.reserves(G), 6);

        board.add_to_reserves(R, 5);
        board.add_to_reserves(G, 6);
        assert_eq!(board.reserves(R), 10);
        assert_eq!(board.reserves(G), 12);
    }

    #[test]
    fn test_set_tile() {
        let mut board = Board::new();
        board.set_tile(6, 5, Tile::with_pieces(true, &[R, G])).unwrap();
        assert_eq!(stack(&board, 6, 5), vec![R, G]);

        // 角格的可用性不会被覆盖
        board.set_tile(0, 0, Tile::with_pieces(true, &[R])).unwrap();
        assert!(!board.tile(0, 0).unwrap().is_usable());
        board.set_tile(6, 5, Tile::new(false)).unwrap();
        assert!(board.tile(6, 5).unwrap().is_usable());
        assert!(board.tile(6, 5).unwrap().is_empty());
    }

    #[test]
    fn test_add_piece_non_existent() {
        let mut board = Board::new();
        assert_eq!(board.add_piece(6, 5, None, R), Err(FocusError::PieceNonExistent));
        assert_eq!(board.add_piece(-1, 5, None, R), Err(FocusError::PieceNonExistent));
    }

    #[test]
    fn test_add_piece_stacks_bottom_up() {
        let mut board = Board::new();
        for (piece, acting) in [(R, R), (G, G), (G, R), (R, R), (R, R)] {
            assert_eq!(board.add_piece(6, 5, Some(piece), acting), Ok(None));
        }
        assert_eq!(stack(&board, 6, 5), vec![R, G, G, R, R]);
        assert_eq!(board.reserves(R), 0);
        assert_eq!(board.reserves(G), 0);
    }

    #[test]
    fn test_fill_then_overflow_stack() {
        let mut board = Board::new();
        for (piece, acting) in [(R, R), (R, R), (G, G), (R, R), (R, R)] {
            assert_eq!(board.add_piece(6, 5, Some(piece), acting), Ok(None));
        }
        assert_eq!(stack(&board, 6, 5), vec![R, R, G, R, R]);
        assert!(board.tile(6, 5).unwrap().is_full());
        assert_eq!((board.reserves(R), board.reserves(G)), (0, 0));

        // 底子为红，绿方放子：红子出局，储备不变
        assert_eq!(board.add_piece(6, 5, Some(G), G), Ok(Some(Eviction::Captured(R))));
        assert_eq!(stack(&board, 6, 5), vec![R, G, R, R, G]);
        assert_eq!((board.reserves(R), board.reserves(G)), (0, 0));

        // 底子为红，红方放子：收回一枚到红方储备
        assert_eq!(board.add_piece(6, 5, Some(R), R), Ok(Some(Eviction::Recovered(R))));
        assert_eq!(stack(&board, 6, 5), vec![G, R, R, G, R]);
        assert_eq!((board.reserves(R), board.reserves(G)), (1, 0));
    }

    #[test]
    fn test_add_piece_capture_sequence() {
        let mut board = Board::new();
        board.set_tile(6, 5, Tile::with_pieces(true, &[R, G, G, R, R])).unwrap();

        // 绿方压掉红方底子：吃子，不计储备
        assert_eq!(board.add_piece(6, 5, Some(G), G), Ok(Some(Eviction::Captured(R))));
        assert_eq!(stack(&board, 6, 5), vec![G, G, R, R, G]);
        assert_eq!((board.reserves(R), board.reserves(G)), (0, 0));

        // 绿方压掉自己的底子：收回储备
        assert_eq!(board.add_piece(6, 5, Some(G), G), Ok(Some(Eviction::Recovered(G))));
        assert_eq!(stack(&board, 6, 5), vec![G, R, R, G, G]);
        assert_eq!((board.reserves(R), board.reserves(G)), (0, 1));

        // 红方放绿子压掉绿方底子：吃子
        assert_eq!(board.add_piece(6, 5, Some(G), R), Ok(Some(Eviction::Captured(G))));
        assert_eq!(stack(&board, 6, 5), vec![R, R, G, G, G]);
        assert_eq!((board.reserves(R), board.reserves(G)), (0, 1));

        // 红方压掉自己的底子：收回储备
        assert_eq!(board.add_piece(6, 5, Some(G), R), Ok(Some(Eviction::Recovered(R))));
        assert_eq!(stack(&board, 6, 5), vec![R, G, G, G, G]);
        assert_eq!((board.reserves(R), board.reserves(G)), (1, 1));
    }

    #[test]
    fn test_stack_never_exceeds_capacity() {
        let mut board = Board::new();
        for i in 0..23 {
            let color = if i % 3 == 0 { G } else { R };
            board.add_piece(3, 4, Some(color), color.opponent()).unwrap();
            assert!(board.height_at(Position::new_unchecked(3, 4)) <= STACK_CAPACITY);
        }
        assert!(board.tile(3, 4).unwrap().is_full());
    }

    #[test]
    fn test_add_from_reserves() {
        let mut board = Board::new();
        board.set_reserves(R, 5);
        board.set_reserves(G, 6);

        board.add_from_reserves(R, 4, 3).unwrap();
        assert_eq!(stack(&board, 4, 3), vec![R]);
        assert_eq!((board.reserves(R), board.reserves(G)), (4, 6));

        board.add_from_reserves(G, 4, 3).unwrap();
        assert_eq!(stack(&board, 4, 3), vec![R, G]);
        assert_eq!((board.reserves(R), board.reserves(G)), (4, 5));

        for _ in 0..3 {
            board.add_piece(4, 3, Some(R), R).unwrap();
        }
        assert_eq!(board.add_from_reserves(G, 4, 3), Ok(Some(Eviction::Captured(R))));
        assert_eq!(stack(&board, 4, 3), vec![G, R, R, R, G]);
        assert_eq!((board.reserves(R), board.reserves(G)), (4, 4));
    }

    #[test]
    fn test_add_from_reserves_allows_underflow() {
        let mut board = Board::new();
        board.add_from_reserves(G, 3, 3).unwrap();
        assert_eq!(board.reserves(G), -1);
        assert_eq!(stack(&board, 3, 3), vec![G]);
    }

    #[test]
    fn test_add_from_reserves_out_of_bounds() {
        let mut board = Board::new();
        board.set_reserves(R, 1);
        assert_eq!(
            board.add_from_reserves(R, 8, 3),
            Err(FocusError::OutOfBounds { x: 8, y: 3 })
        );
        // 扣减先于放子
        assert_eq!(board.reserves(R), 0);
    }

    #[test]
    fn test_piece_count() {
        let mut board = Board::new();
        board.set_tile(2, 2, Tile::with_pieces(true, &[R, G, R])).unwrap();
        board.set_tile(5, 5, Tile::with_pieces(true, &[G])).unwrap();
        assert_eq!(board.piece_count(R), 2);
        assert_eq!(board.piece_count(G), 2);
    }

    #[test]
    fn test_serialize_snapshot() {
        let mut board = Board::new();
        board.add_piece(3, 3, Some(R), R).unwrap();
        board.set_reserves(G, 2);

        let value = serde_json::to_value(&board).unwrap();
        assert_eq!(value["reserves"], serde_json::json!([0, 2]));
        assert_eq!(value["tiles"][3][3]["slots"][0], serde_json::json!("First"));
        assert_eq!(value["tiles"][0][0]["usable"], serde_json::json!(false));
    }
}
