
use super::board::Board;
use super::error::Error;
use super::outcome::Outcome;
use super::player::Player;
use super::road;
use super::stone::StoneKind;

use utils::*;

///
/// A placement request: put a stone of the given kind on the tile at (x, y).
///
/// The mover is not part of the move; whoever holds the turn when the move
/// is applied owns the stone.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(usize, usize, StoneKind)", into = "(usize, usize, StoneKind)")]
pub struct Move
{
    pub x: usize,
    pub y: usize,
    pub kind: StoneKind
}

impl From<(usize, usize, StoneKind)> for Move
{
    fn from ((x, y, kind): (usize, usize, StoneKind)) -> Move
    {
        Move { x, y, kind }
    }
}

impl From<Move> for (usize, usize, StoneKind)
{
    fn from (mv: Move) -> (usize, usize, StoneKind)
    {
        (mv.x, mv.y, mv.kind)
    }
}

impl std::fmt::Display for Move
{
    fn fmt (& self, f: & mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        write!(f, "a {} stone at ({}, {})", self.kind, self.x, self.y)
    }
}

impl Move
{
    ///
    /// Returns a new placement request.
    ///
    pub fn new (x: usize, y: usize, kind: StoneKind) -> Move
    {
        Move { x, y, kind }
    }
}

///
/// One successful placement in the history of a game: the move, plus the
/// player who made it.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placement
{
    pub mv: Move,
    pub player: Player
}

///
/// The turn state machine of one game of Tak.
///
/// From an in-progress position the mover supplies a move; a successful
/// placement triggers the road check for the mover alone (a placement can
/// only complete a road for its own author in this ruleset), and either
/// ends the game or passes the turn. A failed placement leaves the state
/// exactly where it was, so the acting collaborator can try again.
///
/// The history records every successful placement by either actor for the
/// lifetime of the game; the memory store reads it back at game end.
///
#[derive(Clone, Debug)]
pub struct Game
{
    board: Board,
    to_move: Player,
    history: Vec<Placement>,
    outcome: Outcome
}

impl Game
{
    ///
    /// Returns a fresh game on an empty board of the given size, with
    /// Player One to move.
    ///
    pub fn new (size: usize) -> Result<Game>
    {
        Ok(Game
        {
            board: Board::new(size)?,
            to_move: Player::One,
            history: Vec::new(),
            outcome: Outcome::InProgress
        })
    }

    ///
    /// Returns the current board.
    ///
    pub fn board (& self) -> & Board
    {
        & self.board
    }

    ///
    /// Returns the player whose turn it is.
    ///
    pub fn to_move (& self) -> Player
    {
        self.to_move
    }

    ///
    /// Returns the history of the game; the most recent placement is last.
    ///
    pub fn history (& self) -> & [Placement]
    {
        & self.history
    }

    ///
    /// Returns the outcome of the game so far.
    ///
    pub fn outcome (& self) -> Outcome
    {
        self.outcome
    }

    ///
    /// Applies the given move for the player to move.
    ///
    /// On success the placement is recorded, the road check runs for the
    /// mover, and the game either ends at `Won` or passes the turn. On
    /// failure nothing changes and the same player remains to move.
    ///
    pub fn apply (& mut self, mv: Move) -> Result<(), Error>
    {
        if self.outcome.is_terminal()
        {
            return Err(Error::GameOver);
        }

        let player = self.to_move;
        self.board.place(mv.x, mv.y, mv.kind, player)?;
        self.history.push(Placement { mv, player });

        match road::has_road(& self.board, player)
        {
            true  => { self.outcome = Outcome::Won(player); },
            false => { self.to_move = player.next(); }
        };

        Ok(())
    }

    ///
    /// Ends the game as a draw; the defined terminal for a board on which
    /// no tile accepts a placement any longer.
    ///
    pub fn declare_draw (& mut self) -> Result<(), Error>
    {
        if self.outcome.is_terminal()
        {
            return Err(Error::GameOver);
        }

        self.outcome = Outcome::Draw;
        Ok(())
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    fn flat (x: usize, y: usize) -> Move
    {
        Move::new(x, y, StoneKind::Flat)
    }

    #[test]
    fn turns_alternate_after_successful_placements ()
    {
        let mut game = Game::new(3).unwrap();
        assert_eq!(game.to_move(), Player::One);

        game.apply(flat(0, 0)).unwrap();
        assert_eq!(game.to_move(), Player::Two);

        game.apply(flat(1, 1)).unwrap();
        assert_eq!(game.to_move(), Player::One);
    }

    #[test]
    fn a_failed_placement_does_not_advance_the_turn ()
    {
        let mut game = Game::new(3).unwrap();
        game.apply(Move::new(0, 0, StoneKind::Standing)).unwrap();

        assert_eq!(game.to_move(), Player::Two);
        assert_eq!(game.apply(flat(0, 0)), Err(Error::Blocked { x: 0, y: 0 }));
        assert_eq!(game.to_move(), Player::Two);
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn completing_a_row_wins_the_game ()
    {
        let mut game = Game::new(3).unwrap();

        // Player One builds row 0 while Player Two stays out of the way.

        game.apply(flat(0, 0)).unwrap();
        game.apply(flat(2, 0)).unwrap();
        game.apply(flat(0, 1)).unwrap();
        game.apply(flat(2, 1)).unwrap();
        game.apply(flat(0, 2)).unwrap();

        assert_eq!(game.outcome(), Outcome::Won(Player::One));
    }

    #[test]
    fn a_won_game_accepts_no_further_moves ()
    {
        let mut game = Game::new(1).unwrap();
        game.apply(flat(0, 0)).unwrap();

        assert_eq!(game.outcome(), Outcome::Won(Player::One));
        assert_eq!(game.apply(flat(0, 0)), Err(Error::GameOver));
    }

    #[test]
    fn the_history_records_both_actors_in_order ()
    {
        let mut game = Game::new(3).unwrap();
        game.apply(flat(0, 0)).unwrap();
        game.apply(Move::new(1, 1, StoneKind::Standing)).unwrap();

        assert_eq!(
            game.history(),
            & [
                Placement { mv: flat(0, 0), player: Player::One },
                Placement { mv: Move::new(1, 1, StoneKind::Standing), player: Player::Two }
            ]
        );
    }

    #[test]
    fn a_draw_is_terminal ()
    {
        let mut game = Game::new(2).unwrap();
        game.declare_draw().unwrap();

        assert_eq!(game.outcome(), Outcome::Draw);
        assert_eq!(game.apply(flat(0, 0)), Err(Error::GameOver));
        assert_eq!(game.declare_draw(), Err(Error::GameOver));
    }

    #[test]
    fn moves_serialize_as_coordinate_kind_triples ()
    {
        let mv = Move::new(0, 2, StoneKind::Flat);

        assert_eq!(serde_json::to_string(& mv).unwrap(), r#"[0,2,"F"]"#);
        assert_eq!(serde_json::from_str::<Move>(r#"[0,2,"F"]"#).unwrap(), mv);
    }
}
