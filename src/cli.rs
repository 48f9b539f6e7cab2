//! Terminal driver for the board core.
//!
//! This is the stand-in for the excluded presentation layer: it owns the
//! piece entities, feeds pointer-style selection events to the
//! [`SelectionController`], and mirrors every coordinate change into the
//! registry (clear the old cell, then write the new one).

use std::{
    io::{BufRead, Write},
    path::PathBuf,
};

use clap::{Parser, Subcommand};

use crate::prelude::*;

#[derive(Parser)]
#[command(name = env!("CARGO_PKG_NAME"), version = env!("CARGO_PKG_VERSION"), about = env!("CARGO_PKG_DESCRIPTION") )]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Also write a debug-level log file under /tmp
    #[arg(long)]
    pub log_file: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Drive a board interactively from the terminal
    Play {
        /// TOML layout file for the starting position [default: standard]
        #[arg(short, long)]
        layout: Option<PathBuf>,
    },

    /// List candidate moves for the piece on a square, then exit
    Moves {
        /// Square as "row,col"
        square: String,
        /// TOML layout file for the starting position [default: standard]
        #[arg(short, long)]
        layout: Option<PathBuf>,
    },
}

#[derive(Parser, Debug)]
#[command(name = "board_cmd", no_binary_name = true)]
pub struct GameCommand {
    #[command(subcommand)]
    pub cmd: GameSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum GameSubcommand {
    /// Select or deselect the piece on a square
    #[clap(visible_alias = "s")]
    Select { square: String },

    /// Move the piece on one square to another square
    #[clap(visible_alias = "m")]
    Move { from: String, to: String },

    /// Print the current board state
    #[clap(visible_alias = "p")]
    Print,

    /// Clear screen
    #[clap(visible_alias = "c")]
    Clear,

    /// Quit
    #[clap(visible_alias = "q")]
    Quit,
}

pub fn load_layout(path: Option<PathBuf>) -> miette::Result<Layout> {
    match path {
        Some(path) => Layout::from_path(path),
        None => Ok(Layout::standard()),
    }
}

/// The board session: piece roster, registry, and selection state.
pub struct Game {
    pieces: Vec<Piece>,
    board: BoardRegistry,
    selection: SelectionController,
    running: bool,
}

impl Game {
    pub fn new(layout: Layout) -> Self {
        let pieces = layout.into_pieces();
        let mut board = BoardRegistry::new();
        board.initialize_once(&pieces);
        Self {
            pieces,
            board,
            selection: SelectionController::new(),
            running: true,
        }
    }

    pub const fn board(&self) -> &BoardRegistry {
        &self.board
    }

    pub fn piece_at(&self, coord: Coord) -> Option<&Piece> {
        let occ = self.board.occupant_at(coord)?;
        self.pieces.iter().find(|p| p.id == occ.id)
    }

    /// Forwards a click on `coord` to the selection controller. `None` if
    /// the square is empty or off the board.
    pub fn select(&mut self, coord: Coord) -> Option<SelectionEvent> {
        let piece = *self.piece_at(coord)?;
        Some(self.selection.select(&piece, &self.board))
    }

    /// Moves the piece on `from` to `to`, capturing whatever stood there.
    /// This is the owning-caller side of the registry contract: mutate the
    /// piece's coordinate, then clear the old cell and write the new one.
    pub fn move_piece(&mut self, from: Coord, to: Coord) -> miette::Result<()> {
        let occ = self
            .board
            .occupant_at(from)
            .with_context(|| format!("no piece at {from}"))?;
        miette::ensure!(to.is_valid(), "{to} is off the board");
        // With from == to the "victim" below would be the mover itself.
        miette::ensure!(from != to, "{from} is both source and destination");

        if let Some(victim) = self.board.occupant_at(to) {
            info!("{} captured at {to}", victim.id);
            self.pieces.retain(|p| p.id != victim.id);
        }
        if let Some(piece) = self.pieces.iter_mut().find(|p| p.id == occ.id) {
            piece.coord = to;
        }
        self.board.relocate(from, to);
        self.selection.clear();
        Ok(())
    }
}

/// Interactive loop: one command per line, split shell-style and parsed
/// with the same derive machinery as the top-level CLI.
pub fn game_loop(layout: Layout) -> miette::Result<()> {
    let mut game = Game::new(layout);
    println!("{}", game.board());

    let stdin = std::io::stdin();
    loop {
        print!("> ");
        std::io::stdout().flush().into_diagnostic()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).into_diagnostic()? == 0 {
            break;
        }
        let words = match shell_words::split(line.trim()) {
            Ok(words) if !words.is_empty() => words,
            Ok(_) => continue,
            Err(e) => {
                eprintln!("{e}");
                continue;
            }
        };

        let cmd = match GameCommand::try_parse_from(&words) {
            Ok(cmd) => cmd.cmd,
            Err(e) => {
                eprintln!("{e}");
                continue;
            }
        };

        if let Err(e) = run_command(&mut game, cmd) {
            eprintln!("{e:?}");
        }

        if !game.running {
            break;
        }
    }
    Ok(())
}

fn run_command(game: &mut Game, cmd: GameSubcommand) -> miette::Result<()> {
    match cmd {
        GameSubcommand::Select { square } => {
            let coord = Coord::from_str(&square)?;
            match game.select(coord) {
                Some(SelectionEvent::Selected { id, moves }) => {
                    println!("selected {id}: {} candidate moves", moves.len());
                    for mv in &moves {
                        println!("  {mv}");
                    }
                }
                Some(SelectionEvent::Cleared) => println!("selection cleared"),
                None => println!("no piece at {coord}"),
            }
        }
        GameSubcommand::Move { from, to } => {
            let from = Coord::from_str(&from)?;
            let to = Coord::from_str(&to)?;
            game.move_piece(from, to)?;
            println!("{}", game.board());
        }
        GameSubcommand::Print => println!("{}", game.board()),
        GameSubcommand::Clear => utils::clear_screen()?,
        GameSubcommand::Quit => game.running = false,
    }
    Ok(())
}
