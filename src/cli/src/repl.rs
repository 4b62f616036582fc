use std::io::{self, BufRead, Write};

use bitcube_core::{CubeState, NotationError, Turn, format_sequence, parse_sequence};
use log::{debug, warn};

use crate::{config::Config, render};

enum Command {
    Turns(Vec<Turn>),
    Undo,
    Reset,
    History,
    Exit,
}

fn parse_command(line: &str) -> Result<Command, NotationError> {
    match line.trim() {
        "undo" => Ok(Command::Undo),
        "reset" => Ok(Command::Reset),
        "history" => Ok(Command::History),
        "exit" | "quit" => Ok(Command::Exit),
        moves => parse_sequence(moves).map(Command::Turns),
    }
}

/// Read move sequences line by line and print the cube after each change.
/// Returns the cube as it was when the input ran out or `exit` was given.
pub fn run(
    mut cube: CubeState,
    config: &Config,
    mut input: impl BufRead,
    mut output: impl Write,
) -> io::Result<CubeState> {
    writeln!(
        output,
        "Enter moves such as `R U R' U'`, or one of undo, reset, history, exit"
    )?;
    print_cube(&cube, config, &mut output)?;

    let mut line = String::new();
    loop {
        line.clear();
        write!(output, "> ")?;
        output.flush()?;
        if input.read_line(&mut line)? == 0 {
            break;
        }

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(e) => {
                warn!(target: "repl", "Rejected input {:?}", line.trim());
                writeln!(output, "{e}")?;
                continue;
            }
        };

        match command {
            Command::Turns(turns) if turns.is_empty() => continue,
            Command::Turns(turns) => cube.apply_sequence(turns),
            Command::Undo => {
                let Some((last, rest)) = cube.history().split_last() else {
                    writeln!(output, "Nothing to undo")?;
                    continue;
                };
                debug!(target: "repl", "Undoing {last}");
                cube = CubeState::replay(rest);
            }
            Command::Reset => cube = CubeState::new(),
            Command::History => {
                writeln!(output, "{}", format_sequence(cube.history()))?;
                continue;
            }
            Command::Exit => break,
        }

        print_cube(&cube, config, &mut output)?;
    }

    Ok(cube)
}

pub fn print_cube(cube: &CubeState, config: &Config, mut output: impl Write) -> io::Result<()> {
    let net = render::net(cube, config).map_err(io::Error::other)?;
    writeln!(output, "{net}")?;
    writeln!(
        output,
        "{}",
        if cube.is_solved() { "Solved" } else { "Not solved" }
    )?;
    if config.display.show_history && !cube.history().is_empty() {
        writeln!(output, "History: {}", format_sequence(cube.history()))?;
    }
    Ok(())
}
