
use utils::*;

///
/// A player in a game of Tak.
///
/// There are two players, One and Two. Each player places stones on the
/// board in alternating turns, trying to be the first to complete a road
/// of their own flat stones.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Player
{
    One,
    Two
}

impl std::fmt::Display for Player
{
    fn fmt (& self, f: & mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        let token = match self
        {
            Player::One => "Player 1",
            Player::Two => "Player 2"
        };
        write!(f, "{}", token)
    }
}

impl notate::Notate for Player
{
    fn notate (& self) -> String
    {
        match self
        {
            Player::One => "1".to_string(),
            Player::Two => "2".to_string()
        }
    }

    fn parse (s: & str) -> Result<Player>
    {
        match s
        {
            "1" => Ok(Player::One),
            "2" => Ok(Player::Two),
            _   => Err(error::error!("Invalid notation '{}' for player.", s))
        }
    }
}

impl Player
{
    ///
    /// Returns the player opposite this one.
    ///
    pub fn next (& self) -> Player
    {
        match self
        {
            Player::One => Player::Two,
            Player::Two => Player::One
        }
    }
}
