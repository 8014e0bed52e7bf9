#![allow(dead_code)]

use color_eyre::eyre::{eyre, Result};
use unogym::{catalog::catalog, Face, Uno, CATALOG_SIZE};

/// How many seeds [`deal_until`] tries before giving up.
const SEARCH_SEEDS: u64 = 2000;

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

pub fn started(num_players: usize, seed: u64) -> Result<Uno> {
    init_tracing();
    let mut uno = Uno::builder(num_players)?.with_seed(seed).build()?;
    uno.reset()?;
    Ok(uno)
}

/// Deals games built by `build` for increasing seeds until seat 0 can
/// legally play a card whose face satisfies `wanted`. Returns the dealt game
/// and the action that plays that card.
pub fn deal_until(
    mut build: impl FnMut(u64) -> Result<Uno>,
    wanted: impl Fn(Face) -> bool,
) -> Result<(Uno, usize)> {
    init_tracing();
    for seed in 0..SEARCH_SEEDS {
        let mut uno = build(seed)?;
        uno.reset()?;
        let action = uno
            .legal_actions(0)?
            .into_iter()
            .find(|action| *action < CATALOG_SIZE && wanted(catalog()[*action].face));
        if let Some(action) = action {
            return Ok((uno, action));
        }
    }
    Err(eyre!("no seed below {SEARCH_SEEDS} deals a wanted playable card"))
}

pub fn seeded(num_players: usize) -> impl FnMut(u64) -> Result<Uno> {
    move |seed: u64| -> Result<Uno> {
        Ok(Uno::builder(num_players)?.with_seed(seed).build()?)
    }
}
