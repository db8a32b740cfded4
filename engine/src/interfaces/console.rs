
use std::io::Write;
use std::path::Path;

use crate::ai::{Ai, AI_SEAT};
use crate::config::Config;
use crate::memory::Memory;

use tak::{Error, Game, Move, Outcome, StoneKind};

use utils::error::Context;
use utils::log;
use utils::notate::Notate;
use utils::*;

///
/// Runs a full interactive session at the console: mode selection, the
/// turn loop with prompts and board rendering, the winner announcement,
/// and the one-time memory update of an AI-assisted game.
///
/// Malformed input and blocked placements never escape this layer; the
/// acting player is simply asked again.
///
pub struct Console
{
    config: Config
}

impl Console
{
    ///
    /// Creates a new console interface.
    ///
    pub fn new (config: & Config) -> Console
    {
        Console { config: config.clone() }
    }

    ///
    /// Runs one game from greeting to announcement.
    ///
    pub fn run (& mut self) -> Result<()>
    {
        println!("Welcome to Tak! Players take turns placing stones.");

        let vs_ai = self.prompt_mode()?;

        // The memory is read exactly once per session, and only when the
        // AI actually plays.

        let mut memory = match vs_ai
        {
            true  => Memory::load(Path::new(& self.config.memory_path)),
            false => Memory::default()
        };

        let mut game = Game::new(self.config.board_size)?;
        let mut ai = Ai::new();

        loop
        {
            println!("{}", game.board());

            if vs_ai && game.to_move() == AI_SEAT
            {
                self.ai_turn(& mut ai, & mut game, & memory)?;
            }
            else
            {
                println!("{}'s turn.", game.to_move());
                self.human_turn(& mut game)?;
            }

            match game.outcome()
            {
                Outcome::InProgress => continue,
                outcome =>
                {
                    println!("{}", game.board());
                    println!("{}", outcome);
                    log::info!("Game over: {}", outcome);

                    if vs_ai
                    {
                        if let Outcome::Won(winner) = outcome
                        {
                            self.update_memory(& mut memory, & game, winner == AI_SEAT)?;
                        }
                    }

                    return Ok(());
                }
            };
        }
    }

    ///
    /// Lets the AI take its turn; a dead board ends the game as a draw.
    ///
    fn ai_turn (& self, ai: & mut Ai, game: & mut Game, memory: & Memory) -> Result<()>
    {
        match ai.take_turn(game, memory)
        {
            Ok(decision) =>
            {
                println!("AI places {} ({}).", decision.mv, decision.tier);
                log::info!("AI places {} ({}).", decision.mv, decision.tier);
                Ok(())
            },
            Err(Error::NoLegalMove) =>
            {
                game.declare_draw().context("Failed to end a dead game as a draw.")
            },
            Err(err) =>
            {
                Err(err).context("The AI could not take its turn.")
            }
        }
    }

    ///
    /// Prompts the human mover until a placement sticks. Malformed
    /// coordinates and kinds re-prompt inside the individual readers;
    /// a blocked tile re-prompts the whole move.
    ///
    fn human_turn (& self, game: & mut Game) -> Result<()>
    {
        let size = game.board().size();

        loop
        {
            let x = self.prompt_index(& format!("Enter the row (0-{}): ", size - 1), size)?;
            let y = self.prompt_index(& format!("Enter the column (0-{}): ", size - 1), size)?;
            let kind = self.prompt_kind()?;

            match game.apply(Move::new(x, y, kind))
            {
                Ok(()) => return Ok(()),
                Err(err @ Error::Blocked { .. }) =>
                {
                    println!("Invalid move: {}.", err);
                },
                Err(err) =>
                {
                    return Err(err).context("Failed to apply a human move.");
                }
            };
        }
    }

    ///
    /// Applies the configured end-of-game discipline to the memory and
    /// persists it, exactly once.
    ///
    fn update_memory (& self, memory: & mut Memory, game: & Game, ai_won: bool) -> Result<()>
    {
        match self.config.credit_per_move_states
        {
            true  => memory.record_game_per_state(game, ai_won)?,
            false => memory.record_game(game, ai_won)
        };

        memory.persist(Path::new(& self.config.memory_path))?;
        log::info!(
            "Recorded a {} game for the AI; memory persisted to '{}'.",
            match ai_won { true => "won", false => "lost" },
            self.config.memory_path
        );

        Ok(())
    }

    ///
    /// Asks for the game mode until the answer is recognized.
    ///
    fn prompt_mode (& self) -> Result<bool>
    {
        loop
        {
            let line = self.prompt("Choose game mode: 1 for Player vs Player, 2 for Player vs AI: ")?;

            match line.as_str()
            {
                "1" => return Ok(false),
                "2" => return Ok(true),
                _   => println!("Please enter 1 or 2.")
            };
        }
    }

    ///
    /// Asks for a coordinate until it parses and lies inside the board.
    ///
    fn prompt_index (& self, message: & str, bound: usize) -> Result<usize>
    {
        loop
        {
            let line = self.prompt(message)?;

            match line.parse::<usize>()
            {
                Ok(index) if index < bound => return Ok(index),
                _ => println!("Please enter a number between 0 and {}.", bound - 1)
            };
        }
    }

    ///
    /// Asks for a stone kind until it parses; case-insensitive.
    ///
    fn prompt_kind (& self) -> Result<StoneKind>
    {
        loop
        {
            let line = self.prompt("Enter 'F' for flat stone or 'S' for standing stone: ")?;

            match StoneKind::parse(& line)
            {
                Ok(kind) => return Ok(kind),
                Err(_)   => println!("Please enter 'F' or 'S'.")
            };
        }
    }

    ///
    /// Prints the message and reads one trimmed line; end of input is an
    /// error rather than an endless re-prompt.
    ///
    fn prompt (& self, message: & str) -> Result<String>
    {
        print!("{}", message);
        std::io::stdout().flush()?;

        let mut line = String::new();
        let read = std::io::stdin().read_line(& mut line)?;

        match read
        {
            0 => Err(error::error!("Reached the end of input while awaiting a response.")),
            _ => Ok(line.trim().to_owned())
        }
    }
}
