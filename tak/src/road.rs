
use super::board::Board;
use super::player::Player;

///
/// A straight lane of tiles across the board: one row, one column, or one
/// of the two main diagonals.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lane
{
    Row(usize),
    Column(usize),
    Main,
    Anti
}

impl Lane
{
    ///
    /// Returns the tiles of this lane on a board of the given size, in
    /// index order.
    ///
    pub fn tiles (& self, size: usize) -> Vec<(usize, usize)>
    {
        match self
        {
            Lane::Row(x)    => (0 .. size).map(|y| (* x, y)).collect(),
            Lane::Column(y) => (0 .. size).map(|x| (x, * y)).collect(),
            Lane::Main      => (0 .. size).map(|i| (i, i)).collect(),
            Lane::Anti      => (0 .. size).map(|i| (i, size - i - 1)).collect()
        }
    }

    ///
    /// Returns every lane that can carry a road on a board of the given
    /// size: all rows, all columns, and both diagonals.
    ///
    pub fn all (size: usize) -> Vec<Lane>
    {
        let mut lanes = Lane::scan_order(size);
        lanes.push(Lane::Main);
        lanes.push(Lane::Anti);
        lanes
    }

    ///
    /// Returns the lanes the decision tiers scan, in their fixed order:
    /// rows by index, then columns by index. Diagonals are deliberately
    /// not scanned for threats.
    ///
    pub fn scan_order (size: usize) -> Vec<Lane>
    {
        (0 .. size).map(Lane::Row)
            .chain((0 .. size).map(Lane::Column))
            .collect()
    }
}

///
/// Determines whether the given player has completed a road: some lane
/// whose every top stone is a flat stone owned by that player.
///
/// A standing stone never contributes, not even the player's own.
///
pub fn has_road (board: & Board, player: Player) -> bool
{
    Lane::all(board.size()).iter().any(|lane|
    {
        lane.tiles(board.size()).iter().all(|& (x, y)|
        {
            matches!(board.top(x, y), Some(stone) if stone.counts_for(player))
        })
    })
}

///
/// Counts the tiles of the given lane whose top stone is a flat stone owned
/// by the given player.
///
pub fn flat_count (board: & Board, lane: & Lane, player: Player) -> usize
{
    lane.tiles(board.size()).iter()
        .filter(|& & (x, y)| matches!(board.top(x, y), Some(stone) if stone.counts_for(player)))
        .count()
}

///
/// Returns the tiles of the given lane that carry no stone at all, in
/// index order.
///
pub fn empty_tiles (board: & Board, lane: & Lane) -> Vec<(usize, usize)>
{
    lane.tiles(board.size()).into_iter()
        .filter(|& (x, y)| board.top(x, y).is_none())
        .collect()
}

#[cfg(test)]
mod tests
{
    use super::*;
    use crate::stone::StoneKind;

    fn flats (board: & mut Board, player: Player, tiles: & [(usize, usize)])
    {
        for & (x, y) in tiles
        {
            board.place(x, y, StoneKind::Flat, player).unwrap();
        }
    }

    #[test]
    fn a_full_row_of_flats_is_a_road ()
    {
        let mut board = Board::new(3).unwrap();
        flats(& mut board, Player::One, & [(1, 0), (1, 1), (1, 2)]);

        assert!(has_road(& board, Player::One));
        assert!(! has_road(& board, Player::Two));
    }

    #[test]
    fn a_full_column_of_flats_is_a_road ()
    {
        let mut board = Board::new(3).unwrap();
        flats(& mut board, Player::Two, & [(0, 2), (1, 2), (2, 2)]);

        assert!(has_road(& board, Player::Two));
    }

    #[test]
    fn both_diagonals_carry_roads ()
    {
        let mut main = Board::new(3).unwrap();
        flats(& mut main, Player::One, & [(0, 0), (1, 1), (2, 2)]);
        assert!(has_road(& main, Player::One));

        let mut anti = Board::new(3).unwrap();
        flats(& mut anti, Player::One, & [(0, 2), (1, 1), (2, 0)]);
        assert!(has_road(& anti, Player::One));
    }

    #[test]
    fn a_standing_stone_never_completes_a_road ()
    {
        let mut board = Board::new(3).unwrap();
        flats(& mut board, Player::One, & [(0, 0), (0, 1)]);
        board.place(0, 2, StoneKind::Standing, Player::One).unwrap();

        assert!(! has_road(& board, Player::One));
    }

    #[test]
    fn an_opposing_flat_breaks_a_road ()
    {
        let mut board = Board::new(3).unwrap();
        flats(& mut board, Player::One, & [(0, 0), (0, 1)]);
        flats(& mut board, Player::Two, & [(0, 2)]);

        assert!(! has_road(& board, Player::One));
    }

    #[test]
    fn only_the_top_stone_counts ()
    {
        let mut board = Board::new(3).unwrap();
        flats(& mut board, Player::One, & [(0, 0), (0, 1), (0, 2)]);
        flats(& mut board, Player::Two, & [(0, 2)]);

        // Player Two's flat now covers the end of the row.

        assert!(! has_road(& board, Player::One));
        assert!(! has_road(& board, Player::Two));
    }

    #[test]
    fn a_single_tile_board_wins_on_one_flat ()
    {
        let mut board = Board::new(1).unwrap();
        flats(& mut board, Player::One, & [(0, 0)]);

        assert!(has_road(& board, Player::One));
    }

    #[test]
    fn scan_order_is_rows_then_columns ()
    {
        assert_eq!(
            Lane::scan_order(2),
            vec![Lane::Row(0), Lane::Row(1), Lane::Column(0), Lane::Column(1)]
        );
    }

    #[test]
    fn lane_counts_and_empty_tiles ()
    {
        let mut board = Board::new(3).unwrap();
        flats(& mut board, Player::One, & [(0, 0), (0, 1)]);

        assert_eq!(flat_count(& board, & Lane::Row(0), Player::One), 2);
        assert_eq!(flat_count(& board, & Lane::Row(0), Player::Two), 0);
        assert_eq!(empty_tiles(& board, & Lane::Row(0)), vec![(0, 2)]);
    }
}
