
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::memory::Memory;

use tak::{road, Error, Game, Lane, Move, Player, StoneKind};

///
/// The seat the scripted opponent plays from. Player One is always the
/// human opener; the AI answers as Player Two.
///
pub const AI_SEAT : Player = Player::Two;

///
/// The tier of the decision policy that committed a move.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tier
{
    Memory,
    Block,
    Build,
    Random
}

impl std::fmt::Display for Tier
{
    fn fmt (& self, f: & mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        let token = match self
        {
            Tier::Memory => "recalled from memory",
            Tier::Block  => "blocking the opponent's road",
            Tier::Build  => "building its own road",
            Tier::Random => "falling back to a random tile"
        };
        write!(f, "{}", token)
    }
}

///
/// A committed decision: the move that was placed, and the tier that chose
/// it. The tier is reported to the interface layer; it is not part of the
/// decision contract.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Decision
{
    pub mv: Move,
    pub tier: Tier
}

///
/// The scripted opponent.
///
/// One call per AI turn runs a strict tier chain: memory recall, then
/// blocking the opponent's near-complete lane, then completing its own,
/// then a random placement. The first tier to commit a placement wins and
/// no earlier tier is retried afterwards.
///
pub struct Ai
{
    rng: StdRng
}

impl Ai
{
    ///
    /// Returns a new opponent with an entropy-seeded generator.
    ///
    pub fn new () -> Ai
    {
        Ai { rng: StdRng::from_entropy() }
    }

    ///
    /// Returns a new opponent with a fixed seed, for reproducible play.
    ///
    pub fn with_seed (seed: u64) -> Ai
    {
        Ai { rng: StdRng::seed_from_u64(seed) }
    }

    ///
    /// Decides and places exactly one move for the AI seat.
    ///
    /// Fails with `NoLegalMove` when every tile on the board is topped by
    /// a standing stone; the caller is expected to end the game as a draw.
    ///
    pub fn take_turn (& mut self, game: & mut Game, memory: & Memory) -> Result<Decision, Error>
    {
        // Tier 1: recall. A remembered move that is no longer placeable
        // falls through; memory is consulted at most once per turn.

        if let Some(mv) = memory.best_move(& game.board().key())
        {
            match game.apply(mv)
            {
                Ok(())               => return Ok(Decision { mv, tier: Tier::Memory }),
                Err(Error::GameOver) => return Err(Error::GameOver),
                Err(_)               => {}
            };
        }

        // Tier 2: block the opponent's near-complete lane.

        if let Some(mv) = Ai::complete_lane(game, AI_SEAT.next())
        {
            game.apply(mv)?;
            return Ok(Decision { mv, tier: Tier::Block });
        }

        // Tier 3: finish the AI's own near-complete lane.

        if let Some(mv) = Ai::complete_lane(game, AI_SEAT)
        {
            game.apply(mv)?;
            return Ok(Decision { mv, tier: Tier::Build });
        }

        // Tier 4: random fallback.

        self.random_move(game)
    }

    ///
    /// Finds the first lane, rows then columns in index order, in which the
    /// target player has all but one tile topped by their own flat stones
    /// and exactly one tile still empty. The answering move is always a
    /// flat stone on that empty tile.
    ///
    fn complete_lane (game: & Game, target: Player) -> Option<Move>
    {
        let board = game.board();
        let size = board.size();

        for lane in Lane::scan_order(size)
        {
            let empties = road::empty_tiles(board, & lane);

            if road::flat_count(board, & lane, target) == size - 1 && empties.len() == 1
            {
                let (x, y) = empties[0];
                return Some(Move::new(x, y, StoneKind::Flat));
            }
        }

        None
    }

    ///
    /// Samples uniformly random tiles until one accepts a placement, and
    /// places a flat stone there. Guarded up front so a board with no
    /// placeable tile reports `NoLegalMove` instead of looping forever.
    ///
    fn random_move (& mut self, game: & mut Game) -> Result<Decision, Error>
    {
        if ! game.board().has_placeable_tile()
        {
            return Err(Error::NoLegalMove);
        }

        let size = game.board().size();

        loop
        {
            let x = self.rng.gen_range(0 .. size);
            let y = self.rng.gen_range(0 .. size);

            if game.board().placeable(x, y)
            {
                let mv = Move::new(x, y, StoneKind::Flat);
                game.apply(mv)?;
                return Ok(Decision { mv, tier: Tier::Random });
            }
        }
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    use crate::memory::Record;

    use tak::Outcome;

    fn flat (x: usize, y: usize) -> Move
    {
        Move::new(x, y, StoneKind::Flat)
    }

    ///
    /// Sets up a 3x3 game with row 0 reading [F1, F1, empty] and the AI
    /// to move.
    ///
    fn threatened_game () -> Game
    {
        let mut game = Game::new(3).unwrap();

        game.apply(flat(0, 0)).unwrap();
        game.apply(Move::new(2, 2, StoneKind::Standing)).unwrap();
        game.apply(flat(0, 1)).unwrap();

        assert_eq!(game.to_move(), AI_SEAT);
        game
    }

    #[test]
    fn the_block_tier_answers_a_near_complete_opposing_row ()
    {
        let mut game = threatened_game();
        let mut ai = Ai::with_seed(7);

        let decision = ai.take_turn(& mut game, & Memory::default()).unwrap();

        assert_eq!(decision, Decision { mv: flat(0, 2), tier: Tier::Block });
        assert_eq!(game.history().len(), 4);
    }

    #[test]
    fn the_memory_tier_outranks_the_block_tier ()
    {
        let mut game = threatened_game();
        let mut ai = Ai::with_seed(7);

        let mut memory = Memory::default();
        memory.insert(game.board().key(), Record { mv: flat(1, 1), success: 1 });

        let decision = ai.take_turn(& mut game, & memory).unwrap();

        assert_eq!(decision, Decision { mv: flat(1, 1), tier: Tier::Memory });
    }

    #[test]
    fn an_unplaceable_memory_move_falls_through_without_retry ()
    {
        let mut game = threatened_game();
        let mut ai = Ai::with_seed(7);

        // The remembered move points at the standing stone on (2, 2).

        let mut memory = Memory::default();
        memory.insert(game.board().key(), Record { mv: flat(2, 2), success: 1 });

        let decision = ai.take_turn(& mut game, & memory).unwrap();

        assert_eq!(decision, Decision { mv: flat(0, 2), tier: Tier::Block });
        assert_eq!(game.history().len(), 4);
    }

    #[test]
    fn the_build_tier_finishes_the_ai_road ()
    {
        let mut game = Game::new(3).unwrap();

        game.apply(flat(0, 0)).unwrap();
        game.apply(flat(1, 0)).unwrap();
        game.apply(Move::new(2, 2, StoneKind::Standing)).unwrap();
        game.apply(flat(1, 1)).unwrap();
        game.apply(Move::new(0, 1, StoneKind::Standing)).unwrap();

        assert_eq!(game.to_move(), AI_SEAT);

        let mut ai = Ai::with_seed(7);
        let decision = ai.take_turn(& mut game, & Memory::default()).unwrap();

        assert_eq!(decision, Decision { mv: flat(1, 2), tier: Tier::Build });
        assert_eq!(game.outcome(), Outcome::Won(AI_SEAT));
    }

    #[test]
    fn the_random_tier_places_one_legal_flat ()
    {
        let mut game = Game::new(3).unwrap();
        game.apply(flat(0, 0)).unwrap();

        let mut ai = Ai::with_seed(7);
        let decision = ai.take_turn(& mut game, & Memory::default()).unwrap();

        assert_eq!(decision.tier, Tier::Random);
        assert_eq!(decision.mv.kind, StoneKind::Flat);
        assert_eq!(game.history().len(), 2);
        assert_eq!(game.to_move(), Player::One);
    }

    #[test]
    fn a_board_of_standing_tops_reports_no_legal_move ()
    {
        let mut game = Game::new(3).unwrap();

        for x in 0 .. 3
        {
            for y in 0 .. 3
            {
                game.apply(Move::new(x, y, StoneKind::Standing)).unwrap();
            }
        }

        assert_eq!(game.to_move(), AI_SEAT);
        assert_eq!(game.outcome(), Outcome::InProgress);

        let mut ai = Ai::with_seed(7);
        let err = ai.take_turn(& mut game, & Memory::default()).unwrap_err();

        assert_eq!(err, Error::NoLegalMove);
    }
}
