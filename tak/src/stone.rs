
use super::player::Player;

use utils::error::Context;
use utils::notate::Notate;
use utils::*;

///
/// A kind of stone in the game of Tak.
///
/// A flat stone counts toward forming a road; a standing stone blocks its
/// tile from further placement and never counts toward a road, not even
/// for its own owner.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum StoneKind
{
    #[serde(rename = "F")]
    Flat,

    #[serde(rename = "S")]
    Standing
}

impl std::fmt::Display for StoneKind
{
    fn fmt (& self, f: & mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        let token = match self
        {
            StoneKind::Flat     => "flat",
            StoneKind::Standing => "standing"
        };
        write!(f, "{}", token)
    }
}

impl notate::Notate for StoneKind
{
    fn notate (& self) -> String
    {
        match self
        {
            StoneKind::Flat     => "F".to_string(),
            StoneKind::Standing => "S".to_string()
        }
    }

    fn parse (s: & str) -> Result<StoneKind>
    {
        match s
        {
            "F" | "f" => Ok(StoneKind::Flat),
            "S" | "s" => Ok(StoneKind::Standing),
            _         => Err(error::error!("Invalid notation '{}' for stone kind.", s))
        }
    }
}

///
/// A stone on the board, owned by the player who placed it.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Stone
{
    pub owner: Player,
    pub kind: StoneKind
}

impl std::fmt::Display for Stone
{
    fn fmt (& self, f: & mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        write!(f, "{}", self.notate())
    }
}

impl notate::Notate for Stone
{
    fn notate (& self) -> String
    {
        notate!("{}{}", self.kind, self.owner)
    }

    fn parse (s: & str) -> Result<Stone>
    {
        let context = format!("Invalid notation '{}' for stone.", s);

        if s.len() != 2
        {
            return Err(error::error!("Invalid length {}, expected 2.", s.len())).context(context.clone());
        }

        let kind  = StoneKind::parse(& s[0 ..= 0]).context(context.clone())?;
        let owner = Player::parse(& s[1 ..= 1]).context(context.clone())?;

        Ok(Stone { owner, kind })
    }
}

impl Stone
{
    ///
    /// Returns a new stone of the given kind for the given owner.
    ///
    pub fn new (owner: Player, kind: StoneKind) -> Stone
    {
        Stone { owner, kind }
    }

    ///
    /// Determines whether this stone counts toward a road for the given player.
    ///
    pub fn counts_for (& self, player: Player) -> bool
    {
        self.owner == player && self.kind == StoneKind::Flat
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn kind_notation_is_case_insensitive ()
    {
        assert_eq!(StoneKind::parse("F").unwrap(), StoneKind::Flat);
        assert_eq!(StoneKind::parse("f").unwrap(), StoneKind::Flat);
        assert_eq!(StoneKind::parse("S").unwrap(), StoneKind::Standing);
        assert_eq!(StoneKind::parse("s").unwrap(), StoneKind::Standing);
        assert!(StoneKind::parse("Q").is_err());
    }

    #[test]
    fn stone_notation_round_trips ()
    {
        let stone = Stone::new(Player::Two, StoneKind::Standing);
        assert_eq!(stone.notate(), "S2");
        assert_eq!(Stone::parse("S2").unwrap(), stone);
    }

    #[test]
    fn only_an_owned_flat_counts_toward_a_road ()
    {
        assert!(Stone::new(Player::One, StoneKind::Flat).counts_for(Player::One));
        assert!(! Stone::new(Player::One, StoneKind::Flat).counts_for(Player::Two));
        assert!(! Stone::new(Player::One, StoneKind::Standing).counts_for(Player::One));
    }
}
