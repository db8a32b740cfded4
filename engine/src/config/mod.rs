
use utils::{Serialize, Deserialize};

///
/// Represents a full configuration for one session of the engine.
///
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config
{
    ///
    /// The side length of the board; 3 reproduces the classic game.
    ///
    #[serde(default = "board_size")]
    pub board_size: usize,

    ///
    /// Where the AI's durable move memory lives between sessions.
    ///
    #[serde(default = "memory_path")]
    pub memory_path: String,

    #[serde(default = "log_path")]
    pub log_path: String,

    ///
    /// When set, a finished game credits each AI move to the position it
    /// was actually played from, instead of crediting every move to the
    /// final position. Off by default: the final-position discipline is
    /// the recorded behaviour, kept for comparison against this variant.
    ///
    #[serde(default)]
    pub credit_per_move_states: bool
}

impl Default for Config
{
    fn default () -> Config
    {
        Config
        {
            board_size: board_size(),
            memory_path: memory_path(),
            log_path: log_path(),
            credit_per_move_states: false
        }
    }
}

fn board_size () -> usize
{
    3
}

fn memory_path () -> String
{
    "ai_memory.json".to_owned()
}

fn log_path () -> String
{
    "logs".to_owned()
}
