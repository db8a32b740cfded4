
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::ai::AI_SEAT;

use tak::{Board, Game, Move, StateKey};

use utils::error::Context;
use utils::log;
use utils::*;

///
/// A single remembered outcome: a move that was played in some position,
/// and whether the game it belonged to was won (+1) or lost (-1) by the AI.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record
{
    #[serde(rename = "move")]
    pub mv: Move,

    pub success: i32
}

///
/// The durable move memory of the AI: a mapping from canonical position
/// keys to the outcomes recorded under them, in insertion order.
///
/// Records accumulate across games with no deduplication or averaging;
/// lookups re-rank them on every consultation instead. The store is read
/// once at session start, mutated once at game end, and persisted once
/// after that mutation.
///
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Memory
{
    entries: HashMap<StateKey, Vec<Record>>
}

impl Memory
{
    ///
    /// Loads the memory persisted at the given path.
    ///
    /// A missing file is a normal first run and yields an empty memory; an
    /// unreadable or unparsable file fails closed to an empty memory with a
    /// logged warning, so a damaged store never aborts the session.
    ///
    pub fn load (path: & Path) -> Memory
    {
        if ! path.exists()
        {
            return Memory::default();
        }

        let contents = match fs::read_to_string(path)
        {
            Ok(contents) => contents,
            Err(err) =>
            {
                log::warn!("Could not read the move memory at '{}': {}. Starting empty.", path.display(), err);
                return Memory::default();
            }
        };

        match serialize::from_json(& contents)
        {
            Ok(memory) => memory,
            Err(err) =>
            {
                log::warn!("Could not parse the move memory at '{}': {}. Starting empty.", path.display(), err);
                Memory::default()
            }
        }
    }

    ///
    /// Persists the full memory to the given path, overwriting whatever
    /// was there before.
    ///
    pub fn persist (& self, path: & Path) -> Result<()>
    {
        let context = format!("Failed to persist the move memory to '{}'.", path.display());

        let contents = serialize::to_json(self).context(context.clone())?;
        fs::write(path, contents).context(context.clone())?;

        Ok(())
    }

    ///
    /// Appends a record under the given key.
    ///
    pub fn insert (& mut self, key: StateKey, record: Record)
    {
        self.entries.entry(key).or_default().push(record);
    }

    ///
    /// Returns the records under the given key, in insertion order.
    ///
    pub fn records (& self, key: & StateKey) -> Option<& [Record]>
    {
        self.entries.get(key).map(|records| records.as_slice())
    }

    ///
    /// Returns the number of distinct positions in this memory.
    ///
    pub fn positions (& self) -> usize
    {
        self.entries.len()
    }

    ///
    /// Determines whether this memory holds no records at all.
    ///
    pub fn is_empty (& self) -> bool
    {
        self.entries.is_empty()
    }

    ///
    /// Returns the best remembered move for the given position: the record
    /// with the highest success score, ties broken in favour of the record
    /// inserted earliest.
    ///
    pub fn best_move (& self, key: & StateKey) -> Option<Move>
    {
        let records = self.entries.get(key)?;
        let mut best : Option<& Record> = None;

        for record in records
        {
            if best.map_or(true, |b| record.success > b.success)
            {
                best = Some(record);
            }
        }

        best.map(|record| record.mv)
    }

    ///
    /// Records a finished game: every placement made from the AI seat gains
    /// a record scored +1 if the AI won and -1 if it lost.
    ///
    /// All of those records land under the key of the final board, not the
    /// keys of the positions the moves were actually played from; this is
    /// the recorded discipline of the store. See `record_game_per_state`
    /// for the per-position variant.
    ///
    pub fn record_game (& mut self, game: & Game, ai_won: bool)
    {
        let score = match ai_won
        {
            true  =>  1,
            false => -1
        };

        let key = game.board().key();

        for placement in game.history().iter().filter(|placement| placement.player == AI_SEAT)
        {
            self.insert(key.clone(), Record { mv: placement.mv, success: score });
        }
    }

    ///
    /// The corrected variant of `record_game`: replays the history and
    /// credits each AI placement to the position it was actually played
    /// from. Enabled by the `credit_per_move_states` configuration flag.
    ///
    pub fn record_game_per_state (& mut self, game: & Game, ai_won: bool) -> Result<()>
    {
        let context = "Failed to replay the game history for the per-state memory update.";

        let score = match ai_won
        {
            true  =>  1,
            false => -1
        };

        let mut board = Board::new(game.board().size()).context(context)?;

        for placement in game.history()
        {
            if placement.player == AI_SEAT
            {
                self.insert(board.key(), Record { mv: placement.mv, success: score });
            }

            board.place(placement.mv.x, placement.mv.y, placement.mv.kind, placement.player)
                .context(context)?;
        }

        Ok(())
    }
}
