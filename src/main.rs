mod cli;

use anyhow::{Context, Result, bail};
use chequer_core::{Move, MoveOutcome, Position};
use clap::Parser;
use tracing::info;

use crate::cli::Args;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let config = args.config();
    let moves = args.moves;

    let mut position = config
        .new_game()
        .with_context(|| format!("cannot start a game from \"{}\"", config.fen))?;
    info!(
        files = config.files,
        ranks = config.ranks,
        moves = moves.len(),
        "chequer starting"
    );

    for text in &moves {
        play(&mut position, text).with_context(|| format!("cannot play {text}"))?;
    }

    println!("{}", position.pretty());
    println!();
    println!("{}", position.to_fen());
    println!("{}", position.status());
    Ok(())
}

/// Apply one move in coordinate notation, completing any promotion it names.
fn play(position: &mut Position, text: &str) -> Result<()> {
    let (mv, promotion) = Move::parse(text, position.geometry())?;
    match (position.apply(mv.from(), mv.to())?, promotion) {
        (MoveOutcome::Completed, None) => {}
        (MoveOutcome::Completed, Some(_)) => bail!("{text} is not a promotion"),
        (MoveOutcome::PromotionPending(square), Some(kind)) => position.promote(square, kind)?,
        (MoveOutcome::PromotionPending(_), None) => {
            bail!("{text} promotes; add q, r, b or n")
        }
    }
    Ok(())
}
