
///
/// Errors arising from the core placement and turn rules.
///
/// These are the recoverable, rule-level failures: the interface layer
/// answers them by asking the acting player to choose again, and the AI
/// answers them by falling through to its next decision tier.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error
{
    #[error("a standing stone blocks the tile at ({x}, {y})")]
    Blocked { x: usize, y: usize },

    #[error("the tile ({x}, {y}) is out of bounds on a size-{size} board")]
    OutOfBounds { x: usize, y: usize, size: usize },

    #[error("no tile on the board accepts a placement")]
    NoLegalMove,

    #[error("the game is already over")]
    GameOver
}
