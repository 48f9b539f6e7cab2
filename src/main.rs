use clap::Parser;
use rankfile::cli;
use rankfile::prelude::*;

fn main() -> miette::Result<()> {
    let args = cli::Cli::parse();
    if args.log_file {
        init_with_file();
    } else {
        init();
    }

    let span = span!(Level::DEBUG, "main");
    let _guard = span.enter();
    match args.command {
        Some(cli::Commands::Play { layout }) => {
            trace!("Starting interactive board with layout: {:?}", layout);
            let layout = cli::load_layout(layout)?;
            cli::game_loop(layout)?;
        }
        Some(cli::Commands::Moves { square, layout }) => {
            trace!("Listing moves for square: {square}");
            let layout = cli::load_layout(layout)?;
            let game = cli::Game::new(layout);
            let coord = Coord::from_str(&square)?;
            match game.piece_at(coord) {
                Some(piece) => {
                    println!("{piece}");
                    for mv in move_gen::generate_moves(piece, game.board()) {
                        println!("  {mv}");
                    }
                }
                None => println!("no piece at {coord}"),
            }
        }
        None => {
            let game = cli::Game::new(Layout::standard());
            println!("{}", game.board());
        }
    }
    Ok(())
}
