
use super::board::Board;

use utils::notate::Notate;
use utils::*;

///
/// The canonical key of a board position, derived solely from the grid of
/// top stones.
///
/// Two boards whose tiles carry identical top stones share one key no matter
/// how deep the stacks beneath those tops are; the durable move memory is
/// indexed by this key, so the invariance is load-bearing.
///
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateKey(String);

impl std::fmt::Display for StateKey
{
    fn fmt (& self, f: & mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        write!(f, "{}", self.0)
    }
}

impl StateKey
{
    ///
    /// Derives the key of the given board.
    ///
    pub fn of (board: & Board) -> StateKey
    {
        StateKey(board.notate())
    }

    ///
    /// Wraps an already-canonical key string, as read back from storage.
    ///
    pub fn from_canonical (s: & str) -> StateKey
    {
        StateKey(s.to_owned())
    }

    ///
    /// Returns the canonical string form of this key.
    ///
    pub fn as_str (& self) -> & str
    {
        & self.0
    }
}
