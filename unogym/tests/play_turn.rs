mod common;

use std::collections::HashSet;

use color_eyre::eyre::{eyre, Result};
use unogym::{
    catalog::catalog,
    error::InvalidAction,
    turn::TurnActionResult,
    uno::{GameStatus, Uno},
    CardColor, ColoredCard, Face, FixedColor, Rank, CATALOG_SIZE, DRAW_ACTION,
};

use common::{deal_until, init_tracing, seeded, started};

fn colored(face: Face, wanted: ColoredCard) -> bool {
    matches!(face, Face::Colored(_, card) if card == wanted)
}

#[test]
fn play_turn_works_if_card_in_hand() -> Result<()> {
    let (mut uno, action) = deal_until(seeded(4), |face| {
        matches!(face, Face::Colored(_, ColoredCard::Number(_)))
    })?;
    let face = catalog()[action].face;

    let step = uno.step(action)?;

    assert_eq!(step.info.result, TurnActionResult::Neutral);
    assert!(!step.done);
    assert_eq!(uno.get_top_card()?.face, face);
    assert_eq!(Some(uno.get_current_color()?), face.color());
    assert_eq!(uno.get_current_turn_player()?, 1);
    Ok(())
}

#[test]
fn play_turn_fails_if_card_not_in_hand() -> Result<()> {
    let mut uno = started(4, 2)?;
    let hand = uno
        .get_player(0)
        .ok_or_else(|| eyre!("Current player must exist."))?
        .hand
        .clone();
    let missing = catalog()
        .iter()
        .find(|card| hand.iter().all(|held| held.face != card.face))
        .ok_or_else(|| eyre!("A seven card hand cannot hold every face."))?;

    let top_card_before = uno.get_top_card()?;

    let step = uno.step(missing.id.index())?;

    assert_eq!(
        step.info.result,
        TurnActionResult::Invalid(InvalidAction::CardNotInHand(missing.face))
    );
    assert!(step.reward < 0.0);
    assert_eq!(uno.get_top_card()?, top_card_before);
    assert_eq!(uno.get_current_turn_player()?, 0);
    Ok(())
}

#[test]
fn play_turn_skips_player_properly() -> Result<()> {
    let (mut uno, action) = deal_until(seeded(4), |face| colored(face, ColoredCard::Skip))?;

    let step = uno.step(action)?;

    assert_eq!(step.info.result, TurnActionResult::Skip);
    assert_eq!(uno.get_current_turn_player()?, 2);
    Ok(())
}

#[test]
fn play_turn_performs_reverse_properly() -> Result<()> {
    let (mut uno, action) = deal_until(seeded(4), |face| colored(face, ColoredCard::Reverse))?;

    let step = uno.step(action)?;

    assert_eq!(step.info.result, TurnActionResult::Reverse);
    assert_eq!(uno.get_current_turn_player()?, 3);
    assert_eq!(uno.get_next_turn_player()?, 2);
    Ok(())
}

#[test]
fn play_turn_performs_reverse_as_skip_with_two_players() -> Result<()> {
    let (mut uno, action) = deal_until(seeded(2), |face| colored(face, ColoredCard::Reverse))?;

    uno.step(action)?;

    assert_eq!(uno.get_current_turn_player()?, 0);
    Ok(())
}

#[test]
fn play_turn_performs_draw_two_properly() -> Result<()> {
    let (mut uno, action) = deal_until(seeded(4), |face| colored(face, ColoredCard::DrawTwo))?;

    let step = uno.step(action)?;

    assert_eq!(step.info.result, TurnActionResult::DrawTwo);
    assert_eq!(uno.get_current_turn_player()?, 2);

    let skipped = uno
        .get_player(1)
        .ok_or_else(|| eyre!("The next player has disappeared."))?;
    assert_eq!(skipped.cards_count(), 9);
    Ok(())
}

#[test]
fn play_turn_performs_wild_properly() -> Result<()> {
    let build = |seed: u64| -> Result<Uno> {
        Ok(Uno::builder(4)?
            .with_seed(seed)
            .with_color_chooser(FixedColor(CardColor::Red))
            .build()?)
    };
    let (mut uno, action) = deal_until(build, |face| face == Face::Wild)?;

    let step = uno.step(action)?;

    assert_eq!(step.info.result, TurnActionResult::Wild(CardColor::Red));
    assert_eq!(uno.get_current_color()?, CardColor::Red);
    assert_eq!(uno.get_top_card()?.face, Face::Wild);
    assert_eq!(uno.get_current_turn_player()?, 1);
    Ok(())
}

#[test]
fn play_turn_performs_wild_draw_four_properly() -> Result<()> {
    let build = |seed: u64| -> Result<Uno> {
        Ok(Uno::builder(4)?
            .with_seed(seed)
            .with_color_chooser(FixedColor(CardColor::Yellow))
            .build()?)
    };
    let (mut uno, action) = deal_until(build, |face| face == Face::WildDrawFour)?;

    let step = uno.step(action)?;

    assert_eq!(
        step.info.result,
        TurnActionResult::WildDrawFour(CardColor::Yellow)
    );
    assert_eq!(step.observation.current_color, CardColor::Yellow);
    assert_eq!(uno.get_current_turn_player()?, 2);

    let skipped = uno
        .get_player(1)
        .ok_or_else(|| eyre!("The next player has disappeared."))?;
    assert_eq!(skipped.cards_count(), 11);
    Ok(())
}

#[test]
fn turn_draw_adds_a_card() -> Result<()> {
    let mut uno = started(3, 8)?;

    let step = uno.step(DRAW_ACTION)?;

    assert_eq!(step.info.result, TurnActionResult::SelfDraw);
    assert!(!step.info.deck_replenished);
    assert_eq!(step.observation.hand_sizes, vec![8, 7, 7]);
    assert_eq!(step.observation.player, 1);
    Ok(())
}

#[test]
fn turn_winning_works_properly() -> Result<()> {
    let build = |seed: u64| -> Result<Uno> {
        Ok(Uno::builder(4)?
            .with_seed(seed)
            .with_hand_size(1)
            .build()?)
    };
    let (mut uno, action) = deal_until(build, |face| {
        !matches!(face.rank(), Rank::Number(_) | Rank::Wild)
    })?;

    let step = uno.step(action)?;

    assert!(step.done);
    assert_eq!(step.info.winner, Some(0));
    assert_eq!(uno.status()?, GameStatus::GameOver { winner: Some(0) });
    assert_eq!(uno.get_current_turn_player()?, 0);

    let player = uno
        .get_player(0)
        .ok_or_else(|| eyre!("Current player must exist."))?;
    assert_eq!(player.cards_count(), 0);

    // The winning card's effect is never applied.
    let next = uno
        .get_player(1)
        .ok_or_else(|| eyre!("The next player has disappeared."))?;
    assert_eq!(next.cards_count(), 1);
    assert!(!next.skip);
    Ok(())
}

#[test]
fn reset_starts_over_after_game_over() -> Result<()> {
    let build = |seed: u64| -> Result<Uno> {
        Ok(Uno::builder(2)?
            .with_seed(seed)
            .with_hand_size(1)
            .build()?)
    };
    let (mut uno, action) = deal_until(build, |_| true)?;
    assert!(uno.step(action)?.done);

    let observation = uno.reset()?;

    assert_eq!(uno.status()?, GameStatus::AwaitingAction(0));
    assert_eq!(observation.hand.len(), 1);
    assert_eq!(observation.hand_sizes, vec![1, 1]);
    Ok(())
}

#[test]
fn whole_game_keeps_every_card_on_the_table() -> Result<()> {
    init_tracing();
    for seed in 0..16 {
        let mut uno = Uno::builder(4)?.with_seed(seed).build()?;
        uno.reset()?;

        for _ in 0..500 {
            let view = uno.peek_state_for_display()?;
            let ids = view
                .players
                .iter()
                .flat_map(|player| player.hand.iter())
                .chain(view.draw_pile.iter())
                .chain(view.discard_pile.iter())
                .map(|card| card.id)
                .collect::<HashSet<_>>();
            assert_eq!(view.total_cards(), CATALOG_SIZE);
            assert_eq!(ids.len(), CATALOG_SIZE);
            assert!(ids.iter().all(|id| id.index() < CATALOG_SIZE));

            let seat = uno.get_current_turn_player()?;
            let action = uno
                .legal_actions(seat)?
                .into_iter()
                .next()
                .ok_or_else(|| eyre!("Drawing is always legal."))?;
            if uno.step(action)?.done {
                break;
            }
        }
    }
    Ok(())
}
