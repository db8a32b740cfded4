
use super::error::Error;
use super::key::StateKey;
use super::player::Player;
use super::stone::{Stone, StoneKind};

use utils::error::Context;
use utils::notate::Notate;
use utils::*;

///
/// The label a tile contributes to the canonical board notation when no
/// stone has been placed on it.
///
pub const EMPTY_LABEL : & str = "__";

///
/// Represents a game board in Tak. A board is an N-by-N grid of tiles, and
/// each tile carries a stack of stones in placement order, bottom to top.
///
/// Stacks only ever grow: this ruleset has no movement or capture, so the
/// single placement restriction is that a tile whose top stone is standing
/// accepts nothing further. The top stone of each tile determines both
/// placement legality and road contribution; everything beneath is dead
/// weight kept for the record.
///
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Board
{
    size: usize,
    tiles: Vec<Vec<Vec<Stone>>>
}

impl notate::Notate for Board
{
    fn notate (& self) -> String
    {
        let mut rows : Vec<String> = Vec::new();

        for x in 0 .. self.size
        {
            let mut rowstr = String::new();
            for y in 0 .. self.size
            {
                rowstr += & match self.top(x, y)
                {
                    Some(stone) => stone.notate(),
                    None        => EMPTY_LABEL.to_owned()
                };
            }
            rows.push(rowstr);
        }

        rows.join("/")
    }

    fn parse (s: & str) -> Result<Board>
    {
        let context = format!("Invalid notation '{}' for board.", s);

        let rows : Vec<& str> = s.split('/').collect();
        let size = rows.len();

        let mut board = Board::new(size).context(context.clone())?;

        for (x, row) in rows.iter().enumerate()
        {
            if row.len() != 2 * size
            {
                return Err(error::error!("Expected {} labels in row {}, found a row of length {}.", size, x, row.len()))
                    .context(context.clone());
            }

            for y in 0 .. size
            {
                let label = & row[2 * y .. 2 * y + 2];
                if label != EMPTY_LABEL
                {
                    let stone = Stone::parse(label).context(context.clone())?;
                    board.tiles[x][y].push(stone);
                }
            }
        }

        Ok(board)
    }
}

impl std::fmt::Display for Board
{
    fn fmt (& self, f: & mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        for x in 0 .. self.size
        {
            let labels : Vec<String> = (0 .. self.size)
                .map(|y| match self.top(x, y)
                {
                    Some(stone) => stone.notate(),
                    None        => "  ".to_owned()
                })
                .collect();

            writeln!(f, "{}", labels.join(" | "))?;
            writeln!(f, "{}", "-".repeat(5 * self.size - 3))?;
        }

        Ok(())
    }
}

impl Board
{
    ///
    /// Returns a new empty board of the given size, which must be at least 1.
    ///
    pub fn new (size: usize) -> Result<Board>
    {
        match size
        {
            0 => Err(error::error!("A board must have a size of at least 1.")),
            _ => Ok(Board { size, tiles: vec![vec![Vec::new(); size]; size] })
        }
    }

    ///
    /// Returns the size of one side of this board.
    ///
    pub fn size (& self) -> usize
    {
        self.size
    }

    ///
    /// Returns the top stone of the stack at the given tile, if any.
    ///
    pub fn top (& self, x: usize, y: usize) -> Option<& Stone>
    {
        self.tiles[x][y].last()
    }

    ///
    /// Returns the full stack at the given tile, bottom to top.
    ///
    pub fn stack (& self, x: usize, y: usize) -> & [Stone]
    {
        & self.tiles[x][y]
    }

    ///
    /// Determines whether the given tile accepts a placement: it must be on
    /// the board, and its top stone must not be standing.
    ///
    pub fn placeable (& self, x: usize, y: usize) -> bool
    {
        x < self.size && y < self.size
            && ! matches!(self.top(x, y), Some(stone) if stone.kind == StoneKind::Standing)
    }

    ///
    /// Determines whether any tile on this board still accepts a placement.
    ///
    pub fn has_placeable_tile (& self) -> bool
    {
        (0 .. self.size).any(|x| (0 .. self.size).any(|y| self.placeable(x, y)))
    }

    ///
    /// Places a stone of the given kind for the given player on the tile at
    /// (x, y), stacking on top of whatever is already there.
    ///
    /// Fails with `Blocked` when the tile's top stone is standing, and with
    /// `OutOfBounds` when the coordinates fall outside the grid; in either
    /// case the board is left untouched.
    ///
    pub fn place (& mut self, x: usize, y: usize, kind: StoneKind, player: Player) -> Result<(), Error>
    {
        if x >= self.size || y >= self.size
        {
            return Err(Error::OutOfBounds { x, y, size: self.size });
        }

        if matches!(self.top(x, y), Some(stone) if stone.kind == StoneKind::Standing)
        {
            return Err(Error::Blocked { x, y });
        }

        self.tiles[x][y].push(Stone::new(player, kind));
        Ok(())
    }

    ///
    /// Derives the canonical key of this position.
    ///
    pub fn key (& self) -> StateKey
    {
        StateKey::of(self)
    }
}
