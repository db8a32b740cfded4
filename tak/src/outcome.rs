
use super::player::Player;

///
/// An enum that represents the outcome of a game.
///
/// A game in progress becomes won the moment the mover completes a road,
/// and drawn when no tile on the board accepts a placement any longer.
/// Both terminal states are final.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome
{
    InProgress,
    Won(Player),
    Draw
}

impl std::fmt::Display for Outcome
{
    fn fmt (& self, f: & mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        match self
        {
            Outcome::InProgress  => write!(f, "The game is in progress."),
            Outcome::Won(player) => write!(f, "{} wins!", player),
            Outcome::Draw        => write!(f, "The game is a draw: no tile accepts a placement.")
        }
    }
}

impl Outcome
{
    ///
    /// Determines whether this outcome ends the game.
    ///
    pub fn is_terminal (& self) -> bool
    {
        * self != Outcome::InProgress
    }
}
