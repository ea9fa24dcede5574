//! Line-oriented CLI front-end and command loop.
//!
//! Parses commands from stdin, maintains the current game state, routes
//! selections and moves into the rules engine, and prints board views and
//! rule feedback. This is the presentation collaborator: the engine owns
//! every rule decision and the loop only reports outcomes.

use std::io::{self, BufRead, Write};

use crate::game_state::draughts_types::Selection;
use crate::game_state::game_state::GameState;
use crate::move_generation::game_status::{game_status, GameStatus};
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_generator::legal_destinations;
use crate::move_generation::legal_move_selection::select_square;
use crate::utils::algebraic::{algebraic_to_coord, coord_to_algebraic};
use crate::utils::render_game_state::render_game_state;

const CLI_NAME: &str = "Plum Draughts";

pub fn run_stdio_loop() -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut cli = CliState::new();

    writeln!(
        stdout,
        "{} {} session started {}",
        CLI_NAME,
        env!("CARGO_PKG_VERSION"),
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    )?;
    writeln!(stdout, "type 'help' for commands")?;
    cli.print_board(&mut stdout)?;
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line?;
        let should_quit = cli.handle_command(&line, &mut stdout)?;
        stdout.flush()?;
        if should_quit {
            break;
        }
    }

    Ok(())
}

struct CliState {
    game_state: GameState,
}

impl CliState {
    fn new() -> Self {
        Self {
            game_state: GameState::new_game(),
        }
    }

    fn handle_command(&mut self, line: &str, out: &mut impl Write) -> io::Result<bool> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(false);
        }

        let mut parts = trimmed.split_whitespace();
        let cmd = parts.next().unwrap_or_default();

        match cmd {
            "new" | "reset" => {
                self.game_state = GameState::new_game();
                writeln!(out, "new game, Light to move")?;
                self.print_board(out)?;
            }
            "show" | "board" => {
                self.print_board(out)?;
            }
            "select" => {
                self.handle_select(parts.next(), out)?;
            }
            "move" => {
                self.handle_move(parts.next(), out)?;
            }
            "moves" => {
                self.handle_moves(parts.next(), out)?;
            }
            "position" => {
                let notation: Vec<&str> = parts.collect();
                self.handle_position(&notation.join(" "), out)?;
            }
            "notation" => {
                writeln!(out, "{}", self.game_state.get_notation())?;
            }
            "help" => {
                writeln!(out, "commands:")?;
                writeln!(out, "  new                 start a fresh game")?;
                writeln!(out, "  show                print the board")?;
                writeln!(out, "  select <square>     pick a piece (e.g. select a3)")?;
                writeln!(out, "  move <square>       move the selected piece")?;
                writeln!(out, "  moves <square>      list legal destinations")?;
                writeln!(out, "  position <string>   load a position notation")?;
                writeln!(out, "  notation            print the current notation")?;
                writeln!(out, "  quit                leave")?;
            }
            "quit" | "exit" => {
                return Ok(true);
            }
            other => {
                writeln!(out, "unknown command: {other}")?;
            }
        }

        Ok(false)
    }

    fn handle_select(&mut self, square: Option<&str>, out: &mut impl Write) -> io::Result<()> {
        let Some(square) = square else {
            writeln!(out, "usage: select <square>")?;
            return Ok(());
        };
        let at = match algebraic_to_coord(square) {
            Ok(at) => at,
            Err(msg) => {
                writeln!(out, "{msg}")?;
                return Ok(());
            }
        };

        match select_square(&self.game_state, at.row(), at.col()) {
            Ok(next) => {
                self.game_state = next;
                match &self.game_state.selection {
                    Selection::Idle => writeln!(out, "selection cleared")?,
                    selection => {
                        let destinations = selection.destinations();
                        if destinations.is_empty() {
                            writeln!(out, "{square} selected, no legal moves")?;
                        } else {
                            writeln!(
                                out,
                                "{square} selected, moves: {}",
                                join_squares(destinations.iter().copied())
                            )?;
                        }
                    }
                }
            }
            Err(err) => writeln!(out, "{err}")?,
        }
        Ok(())
    }

    fn handle_move(&mut self, square: Option<&str>, out: &mut impl Write) -> io::Result<()> {
        let Some(square) = square else {
            writeln!(out, "usage: move <square>")?;
            return Ok(());
        };
        let at = match algebraic_to_coord(square) {
            Ok(at) => at,
            Err(msg) => {
                writeln!(out, "{msg}")?;
                return Ok(());
            }
        };

        match apply_move(&self.game_state, at.row(), at.col()) {
            Ok(applied) => {
                self.game_state = applied.game_after_move.clone();

                if let Some(captured) = applied.captured {
                    writeln!(
                        out,
                        "{} takes {}, lands {}",
                        coord_to_algebraic(applied.from),
                        coord_to_algebraic(captured),
                        coord_to_algebraic(applied.to)
                    )?;
                } else {
                    writeln!(
                        out,
                        "{} to {}",
                        coord_to_algebraic(applied.from),
                        coord_to_algebraic(applied.to)
                    )?;
                }
                if applied.promoted {
                    writeln!(out, "{} is crowned", coord_to_algebraic(applied.to))?;
                }
                self.print_board(out)?;

                if applied.chain_continues {
                    writeln!(
                        out,
                        "capture chain: {} must take again ({})",
                        coord_to_algebraic(applied.to),
                        join_squares(self.game_state.selection.destinations().iter().copied())
                    )?;
                } else if let GameStatus::Won(winner) = applied.status {
                    writeln!(out, "game over: {winner} wins")?;
                }
            }
            Err(err) => writeln!(out, "{err}")?,
        }
        Ok(())
    }

    fn handle_moves(&self, square: Option<&str>, out: &mut impl Write) -> io::Result<()> {
        let Some(square) = square else {
            writeln!(out, "usage: moves <square>")?;
            return Ok(());
        };
        let at = match algebraic_to_coord(square) {
            Ok(at) => at,
            Err(msg) => {
                writeln!(out, "{msg}")?;
                return Ok(());
            }
        };

        match legal_destinations(&self.game_state, at.row(), at.col()) {
            Ok(destinations) if destinations.is_empty() => {
                writeln!(out, "no legal moves from {square}")?;
            }
            Ok(destinations) => {
                writeln!(out, "{}", join_squares(destinations.into_iter()))?;
            }
            Err(err) => writeln!(out, "{err}")?,
        }
        Ok(())
    }

    fn handle_position(&mut self, notation: &str, out: &mut impl Write) -> io::Result<()> {
        if notation.is_empty() {
            writeln!(out, "usage: position <notation>")?;
            return Ok(());
        }
        match GameState::from_notation(notation) {
            Ok(state) => {
                self.game_state = state;
                self.print_board(out)?;
            }
            Err(msg) => writeln!(out, "{msg}")?,
        }
        Ok(())
    }

    fn print_board(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "{}", render_game_state(&self.game_state))?;
        match game_status(&self.game_state) {
            GameStatus::InProgress => {
                writeln!(out, "{} to move", self.game_state.current_player)?
            }
            GameStatus::Won(winner) => writeln!(out, "game over: {winner} wins")?,
        }
        Ok(())
    }
}

fn join_squares(squares: impl Iterator<Item = crate::game_state::draughts_types::Coord>) -> String {
    squares
        .map(coord_to_algebraic)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::CliState;

    fn run(cli: &mut CliState, line: &str) -> String {
        let mut out = Vec::new();
        let quit = cli
            .handle_command(line, &mut out)
            .expect("command handling should not fail on a buffer");
        assert!(!quit || line == "quit");
        String::from_utf8(out).expect("CLI output should be UTF-8")
    }

    #[test]
    fn select_and_move_drive_a_turn() {
        let mut cli = CliState::new();

        let out = run(&mut cli, "select a3");
        assert!(out.contains("a3 selected"));
        assert!(out.contains("b4"));

        let out = run(&mut cli, "move b4");
        assert!(out.contains("a3 to b4"));
        assert!(out.contains("Dark to move"));
    }

    #[test]
    fn illegal_destination_is_reported_not_applied() {
        let mut cli = CliState::new();
        run(&mut cli, "select a3");
        let out = run(&mut cli, "move d4");
        assert!(out.contains("not a legal destination"));
    }

    #[test]
    fn moves_lists_destinations_without_selecting() {
        let mut cli = CliState::new();
        let out = run(&mut cli, "moves c3");
        assert!(out.contains("b4"));
        assert!(out.contains("d4"));
    }

    #[test]
    fn position_and_notation_round_trip() {
        let mut cli = CliState::new();
        run(&mut cli, "position 8/8/3m4/4M3/8/8/8/8 l e5");
        let out = run(&mut cli, "notation");
        assert!(out.contains("8/8/3m4/4M3/8/8/8/8 l e5"));
    }

    #[test]
    fn capture_reports_the_taken_square() {
        let mut cli = CliState::new();
        run(&mut cli, "position 8/8/8/2m5/1M6/8/8/8 l -");
        run(&mut cli, "select b4");
        let out = run(&mut cli, "move d6");
        assert!(out.contains("b4 takes c5, lands d6"));
        assert!(out.contains("game over: Light wins"));
    }

    #[test]
    fn unknown_commands_are_reported() {
        let mut cli = CliState::new();
        let out = run(&mut cli, "castle");
        assert!(out.contains("unknown command"));
    }

    #[test]
    fn quit_ends_the_loop() {
        let mut cli = CliState::new();
        let mut out = Vec::new();
        assert!(cli
            .handle_command("quit", &mut out)
            .expect("quit should be handled"));
    }
}
