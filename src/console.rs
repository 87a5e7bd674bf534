//! Console front end: prompts, transcript, and the turn loop.
//!
//! Everything is written against [`BufRead`] and [`Write`] so a whole game
//! can be scripted from a string in tests.

use std::io::{BufRead, Write};

use crate::card::Card;
use crate::error::ConsoleError;
use crate::game::{Game, Play, Side};
use crate::score::Score;

/// How a console session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Every card was played; carries the final score.
    Finished(Score),
    /// The player typed `exit` (or input ran out).
    Exited,
}

/// A parsed answer to the card prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    /// Play the card at this zero-based index.
    Card(usize),
    /// Leave the game immediately.
    Exit,
    /// Anything else; ask again.
    Invalid,
}

/// Parses the answer to `Play first?`.
#[must_use]
pub fn parse_first(input: &str) -> Option<Side> {
    match input.trim().to_lowercase().as_str() {
        "yes" => Some(Side::Player),
        "no" => Some(Side::Computer),
        _ => None,
    }
}

/// Parses the answer to the card prompt for a hand of `hand_len` cards.
///
/// Accepts a one-based index or `exit`.
#[must_use]
pub fn parse_choice(input: &str, hand_len: usize) -> Choice {
    let input = input.trim();
    if input == "exit" {
        return Choice::Exit;
    }
    match input.parse::<usize>() {
        Ok(n) if (1..=hand_len).contains(&n) => Choice::Card(n - 1),
        _ => Choice::Invalid,
    }
}

/// Formats cards separated by spaces.
#[must_use]
pub fn format_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Drives one full game over the given input and output.
///
/// # Errors
///
/// Returns an error if reading or writing fails, or the engine reports an
/// internal fault.
pub fn run<R: BufRead, W: Write>(
    game: &mut Game,
    input: R,
    output: W,
) -> Result<Outcome, ConsoleError> {
    let mut console = Console { input, output };
    let outcome = console.play(game)?;
    writeln!(console.output, "Game Over")?;
    console.output.flush()?;
    Ok(outcome)
}

struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Reads one line; `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>, ConsoleError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn play(&mut self, game: &mut Game) -> Result<Outcome, ConsoleError> {
        writeln!(self.output, "Indigo Card Game")?;

        let first = loop {
            writeln!(self.output, "Play first?")?;
            self.output.flush()?;
            let Some(line) = self.read_line()? else {
                return Ok(Outcome::Exited);
            };
            if let Some(side) = parse_first(&line) {
                break side;
            }
        };

        let opening = game.start(first)?;
        writeln!(
            self.output,
            "Initial cards on the table: {}\n",
            format_cards(&opening)
        )?;
        self.write_table(game)?;

        while !game.is_exhausted() {
            let play = match game.begin_turn()? {
                Side::Player => {
                    let Some(play) = self.player_turn(game)? else {
                        return Ok(Outcome::Exited);
                    };
                    play
                }
                Side::Computer => self.computer_turn(game)?,
            };
            if play.won() {
                writeln!(self.output, "{} wins cards", play.side.name())?;
                self.write_score(game.round_score())?;
            }
            writeln!(self.output)?;
            self.write_table(game)?;
        }

        let score = game.finish()?;
        self.write_score(score)?;
        Ok(Outcome::Finished(score))
    }

    fn player_turn(&mut self, game: &mut Game) -> Result<Option<Play>, ConsoleError> {
        let hand = game.player.hand.cards();
        let numbered = hand
            .iter()
            .enumerate()
            .map(|(i, card)| format!("{}){card}", i + 1))
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(self.output, "Cards in hand: {numbered}")?;

        let hand_len = hand.len();
        loop {
            writeln!(self.output, "Choose a card to play (1-{hand_len}):")?;
            self.output.flush()?;
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match parse_choice(&line, hand_len) {
                Choice::Card(index) => return Ok(Some(game.play_player(index)?)),
                Choice::Exit => return Ok(None),
                Choice::Invalid => {}
            }
        }
    }

    fn computer_turn(&mut self, game: &mut Game) -> Result<Play, ConsoleError> {
        writeln!(self.output, "{}", format_cards(game.computer.hand.cards()))?;
        let play = game.play_computer()?;
        writeln!(self.output, "Computer plays {}", play.card)?;
        Ok(play)
    }

    fn write_table(&mut self, game: &Game) -> Result<(), ConsoleError> {
        match game.table.top() {
            None => writeln!(self.output, "No cards on the table")?,
            Some(top) => writeln!(
                self.output,
                "{} cards on the table, and the top card is {top}",
                game.table.len()
            )?,
        }
        Ok(())
    }

    fn write_score(&mut self, score: Score) -> Result<(), ConsoleError> {
        writeln!(
            self.output,
            "Score: Player {} - Computer {}",
            score.player, score.computer
        )?;
        writeln!(
            self.output,
            "Cards: Player {} - Computer {}",
            score.player_cards, score.computer_cards
        )?;
        Ok(())
    }
}
