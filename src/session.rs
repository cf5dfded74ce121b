//! Console session: the loop that drives one game from names to result.

use crate::config::GameConfig;
use crate::console::{InputSource, OutputSink};
use crate::games::tictactoe::{BoardView, Game, Legend, MoveError, Outcome, Player, selector};
use derive_more::{Display, Error, From};
use std::collections::VecDeque;
use tracing::{debug, info, instrument};

/// Error that ends a session early.
#[derive(Debug, Display, Error, From)]
pub enum SessionError {
    /// Reading from or writing to the console failed.
    #[display("Console I/O failed: {}", _0)]
    #[from]
    Io(std::io::Error),

    /// Input ran out while the game was still going.
    #[display("Input closed before the game finished")]
    InputClosed,

    /// The engine refused a move the session had already checked.
    #[display("Engine rejected a checked move: {}", _0)]
    #[from]
    Move(MoveError),
}

/// One game played over an input source and an output sink.
pub struct Session<I, O> {
    input: I,
    output: O,
    config: GameConfig,
    /// Tokens left over from the last line read for a move.
    pending: VecDeque<String>,
}

impl<I: InputSource, O: OutputSink> Session<I, O> {
    /// Creates a session.
    pub fn new(input: I, output: O, config: GameConfig) -> Self {
        Self {
            input,
            output,
            config,
            pending: VecDeque::new(),
        }
    }

    /// Gives back the input and output.
    pub fn into_parts(self) -> (I, O) {
        (self.input, self.output)
    }

    /// Plays a full game and returns its terminal outcome.
    ///
    /// # Errors
    ///
    /// Fails only on console I/O errors or when input closes mid-game.
    /// Bad move input is re-prompted, never returned.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<Outcome, SessionError> {
        let mut game = self.read_names()?;
        info!(
            first = %game.name(Player::One),
            second = %game.name(Player::Two),
            "Game started"
        );

        loop {
            self.render(&game)?;
            self.play_turn(&mut game)?;

            let outcome = game.evaluate_outcome();
            if outcome.is_terminal() {
                self.announce(&game, outcome)?;
                info!(?outcome, moves = game.history().len(), "Game finished");
                return Ok(outcome);
            }
        }
    }

    #[instrument(skip(self))]
    fn read_names(&mut self) -> Result<Game, SessionError> {
        self.output
            .clear_screen(*self.config.clear_style(), *self.config.clear_lines())?;
        let first = self.prompt_name(Player::One)?;
        let second = self.prompt_name(Player::Two)?;
        Ok(Game::new(first, second))
    }

    fn prompt_name(&mut self, player: Player) -> Result<String, SessionError> {
        self.output.write_str(&format!(
            "Player {}, what is your name? ",
            player.number()
        ))?;
        self.input.read_line()?.ok_or(SessionError::InputClosed)
    }

    fn render(&mut self, game: &Game) -> Result<(), SessionError> {
        let marks = self.config.marks();
        self.output
            .clear_screen(*self.config.clear_style(), *self.config.clear_lines())?;
        self.output.write_str(&Legend::new(game, marks).to_string())?;
        self.output
            .write_str(&BoardView::new(game.board(), marks).to_string())?;
        Ok(())
    }

    /// Prompts the acting player until a legal selector arrives, then plays it.
    #[instrument(skip(self, game), fields(player = ?game.acting_player()))]
    fn play_turn(&mut self, game: &mut Game) -> Result<(), SessionError> {
        let name = game.name(game.acting_player()).to_string();
        loop {
            self.output.write_str(&format!(
                "{}, where do you want to place your character? ",
                name
            ))?;

            let token = self.next_token()?;
            match selector::parse(&token) {
                Some(choice) if game.is_legal(choice) => {
                    game.apply_move(choice)?;
                    return Ok(());
                }
                Some(choice) => debug!(choice, "Illegal selector, prompting again"),
                None => debug!(%token, "Non-numeric input, prompting again"),
            }
        }
    }

    /// Next whitespace-separated token, reading more lines as needed.
    fn next_token(&mut self) -> Result<String, SessionError> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }
            let line = self.input.read_line()?.ok_or(SessionError::InputClosed)?;
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }

    fn announce(&mut self, game: &Game, outcome: Outcome) -> Result<(), SessionError> {
        self.render(game)?;
        match outcome {
            Outcome::Won(player) => self
                .output
                .write_line(&format!("{} Won!", game.name(player)))?,
            Outcome::Draw => self.output.write_line("It's a Draw!")?,
            Outcome::Ongoing => {}
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::{InputSource, ScriptedInput, StdinInput, WriterSink};

    fn quiet() -> GameConfig {
        GameConfig::from_toml("clear_style = \"none\"").unwrap()
    }

    fn run_with<I: InputSource>(
        input: I,
        config: GameConfig,
    ) -> (Result<Outcome, SessionError>, String) {
        let mut session = Session::new(input, WriterSink::new(Vec::new()), config);
        let result = session.run();
        let (_, sink) = session.into_parts();
        (result, String::from_utf8(sink.into_inner()).unwrap())
    }

    fn play(lines: &[&str]) -> (Result<Outcome, SessionError>, String) {
        run_with(ScriptedInput::new(lines.iter().copied()), quiet())
    }

    #[test]
    fn test_tokens_span_lines() {
        let (result, _) = play(&["Ada", "Brian", "7 5", "9", "1 8"]);
        assert_eq!(result.unwrap(), Outcome::Won(Player::One));
    }

    #[test]
    fn test_bad_input_reprompts_same_player() {
        let (result, out) = play(&["Ada", "Brian", "x", "0", "7", "7", "5", "9", "1", "8"]);
        assert_eq!(result.unwrap(), Outcome::Won(Player::One));
        // "x" and "0" cost Ada two prompts, the taken "7" costs Brian one
        assert_eq!(out.matches("Ada, where do you want").count(), 5);
        assert_eq!(out.matches("Brian, where do you want").count(), 3);
    }

    #[test]
    fn test_closed_input() {
        let (result, _) = play(&["Ada", "Brian", "5"]);
        assert!(matches!(result, Err(SessionError::InputClosed)));

        let (result, _) = play(&["Ada"]);
        assert!(matches!(result, Err(SessionError::InputClosed)));
    }

    #[test]
    fn test_undecodable_move_line_reprompts() {
        let input = StdinInput::from_reader(&b"Ada\nBrian\n\xff\n7\n5\n9\n1\n8\n"[..]);
        let (result, out) = run_with(input, quiet());
        assert_eq!(result.unwrap(), Outcome::Won(Player::One));
        assert_eq!(out.matches("Ada, where do you want").count(), 4);
    }

    #[test]
    fn test_config_clear_style_reaches_output() {
        let config = GameConfig::from_toml("clear_style = \"terminal\"").unwrap();
        let (result, out) = run_with(
            ScriptedInput::new(["Ada", "Brian", "7", "5", "9", "1", "8"]),
            config,
        );
        assert_eq!(result.unwrap(), Outcome::Won(Player::One));
        // Name prompt plus six renders
        assert_eq!(out.matches("\x1b[2J").count(), 7);
        assert!(!out.contains("\n\n"));

        let (_, out) = run_with(
            ScriptedInput::new(["Ada", "Brian", "7", "5", "9", "1", "8"]),
            GameConfig::from_toml("clear_lines = 5").unwrap(),
        );
        assert!(out.starts_with("\n\n\n\n\nPlayer 1, what is your name? "));
    }

    #[test]
    fn test_blank_lines_skipped_for_moves() {
        let (result, _) = play(&["Ada", "Brian", "", "   ", "7", "5", "9", "1", "8"]);
        assert_eq!(result.unwrap(), Outcome::Won(Player::One));
    }
}
