//! Turn flow tests.
//!
//! These tests drive a two-player session through the text interface:
//! - Turn rotation and cleanup
//! - Playing Treasures and Actions, and the errors that gate them
//! - Buying from the supply

use std::sync::Arc;

use rust_dominion::cards::{CardCatalog, CardId};
use rust_dominion::command::CommandParser;
use rust_dominion::core::{EngineConfig, GameError, PlayerId};
use rust_dominion::rules::Phase;
use rust_dominion::Game;

fn cards(id: &str, n: usize) -> Vec<CardId> {
    vec![CardId::new(id); n]
}

fn parser() -> CommandParser {
    let supply: Vec<CardId> = ["copper", "silver", "gold", "estate", "province", "village", "smithy"]
        .into_iter()
        .map(CardId::new)
        .collect();
    let game = Game::new(
        Arc::new(CardCatalog::base()),
        &["mrkill", "jacob"],
        &supply,
        EngineConfig::default().with_seed(7),
    )
    .unwrap();
    CommandParser::new(game)
}

const MRKILL: PlayerId = PlayerId(0);
const JACOB: PlayerId = PlayerId(1);

/// Test that `done` hands the turn to the next seat and wraps around.
#[test]
fn test_turn_rotation() {
    let mut parser = parser();

    assert_eq!(parser.game().player_name(), "mrkill");
    parser.eval("mrkill", "done").unwrap();
    assert_eq!(parser.game().player_name(), "jacob");
    parser.eval("jacob", "done").unwrap();
    assert_eq!(parser.game().player_name(), "mrkill");
    assert_eq!(parser.game().turn_index(), 2);
}

/// Test that only the turn owner may end the turn.
#[test]
fn test_done_out_of_turn() {
    let mut parser = parser();

    assert_eq!(parser.eval("jacob", "done"), Err(GameError::NotYourTurn(JACOB)));
    assert_eq!(parser.game().turn_index(), 0);
}

/// Test playing a Treasure.
#[test]
fn test_play_copper() {
    let mut parser = parser();
    parser.game_mut().player_mut(MRKILL).set_hand(cards("copper", 5));

    parser.eval("mrkill", "play copper").unwrap();

    let player = parser.game().player(MRKILL);
    assert_eq!(player.gold, 1);
    assert_eq!(player.hand().len(), 4);
    assert_eq!(player.in_play().len(), 1);
    assert_eq!(parser.game().phase(), Phase::Treasure);
}

/// Test that only cards in hand may be played.
#[test]
fn test_card_not_in_hand() {
    let mut parser = parser();
    parser.game_mut().player_mut(MRKILL).set_hand(cards("copper", 5));

    assert_eq!(
        parser.eval("mrkill", "play poop"),
        Err(GameError::CardNotInHand(CardId::new("poop")))
    );
    assert_eq!(
        parser.eval("mrkill", "play gold"),
        Err(GameError::CardNotInHand(CardId::new("gold")))
    );
    assert_eq!(parser.game().player(MRKILL).hand().len(), 5);
}

/// Test that other players cannot play during someone else's turn.
#[test]
fn test_play_out_of_turn() {
    let mut parser = parser();
    parser.game_mut().player_mut(JACOB).set_hand(cards("copper", 5));

    assert_eq!(parser.eval("jacob", "play copper"), Err(GameError::NotYourTurn(JACOB)));
    assert_eq!(parser.game().player(JACOB).gold, 0);
}

/// Test that a second Action without a remaining action is rejected and
/// changes nothing.
#[test]
fn test_no_remaining_actions() {
    let mut parser = parser();
    {
        let player = parser.game_mut().player_mut(MRKILL);
        player.set_hand(vec![
            CardId::new("smithy"),
            CardId::new("smithy"),
            CardId::new("copper"),
        ]);
        player.set_draw_pile(cards("estate", 5));
    }

    parser.eval("mrkill", "play smithy").unwrap();
    let player = parser.game().player(MRKILL);
    assert_eq!(player.actions, 0);
    assert_eq!(player.hand().len(), 5);
    assert_eq!(player.draw_pile().len(), 2);

    assert_eq!(parser.eval("mrkill", "play smithy"), Err(GameError::NoRemainingActions));
    let player = parser.game().player(MRKILL);
    assert_eq!(player.hand().len(), 5);
    assert_eq!(player.in_play().len(), 1);
    assert_eq!(player.draw_pile().len(), 2);
}

/// Test that Village keeps the action chain going.
#[test]
fn test_village_chain() {
    let mut parser = parser();
    {
        let player = parser.game_mut().player_mut(MRKILL);
        player.set_hand(vec![CardId::new("village"), CardId::new("smithy")]);
        player.set_draw_pile(cards("copper", 5));
    }

    parser.eval("mrkill", "play village").unwrap();
    assert_eq!(parser.game().player(MRKILL).actions, 2);

    parser.eval("mrkill", "play smithy").unwrap();
    let player = parser.game().player(MRKILL);
    assert_eq!(player.actions, 1);
    assert_eq!(player.hand().len(), 4);
}

/// Test that Actions are locked out once a Treasure is played.
#[test]
fn test_action_after_treasure() {
    let mut parser = parser();
    parser
        .game_mut()
        .player_mut(MRKILL)
        .set_hand(vec![CardId::new("copper"), CardId::new("village")]);

    parser.eval("mrkill", "play copper").unwrap();

    assert_eq!(
        parser.eval("mrkill", "play village"),
        Err(GameError::WrongPhase {
            card: CardId::new("village"),
            phase: Phase::Treasure,
        })
    );
    assert!(parser.game().player(MRKILL).has_in_hand(&CardId::new("village")));
}

/// Test that Victory cards cannot be played.
#[test]
fn test_play_victory_card() {
    let mut parser = parser();
    parser.game_mut().player_mut(MRKILL).set_hand(cards("estate", 2));

    assert!(matches!(
        parser.eval("mrkill", "play estate"),
        Err(GameError::InvalidActivity(_))
    ));
    assert_eq!(parser.game().player(MRKILL).hand().len(), 2);
}

/// Test buying with the gold from played Treasures.
#[test]
fn test_buy() {
    let mut parser = parser();
    parser.game_mut().player_mut(MRKILL).set_hand(cards("copper", 5));

    for _ in 0..3 {
        parser.eval("mrkill", "play copper").unwrap();
    }
    assert_eq!(
        parser.eval("mrkill", "buy province"),
        Err(GameError::InsufficientGold { needed: 8, available: 3 })
    );

    parser.eval("mrkill", "buy silver").unwrap();

    let game = parser.game();
    let player = game.player(MRKILL);
    assert_eq!(player.gold, 0);
    assert_eq!(player.buys, 0);
    assert_eq!(player.discard_pile().last(), Some(&CardId::new("silver")));
    assert_eq!(game.supply_count(&CardId::new("silver")), Some(39));
    assert_eq!(game.phase(), Phase::Buy);

    assert_eq!(parser.eval("mrkill", "buy copper"), Err(GameError::NoRemainingBuys));
    assert_eq!(
        parser.eval("mrkill", "play copper"),
        Err(GameError::WrongPhase {
            card: CardId::new("copper"),
            phase: Phase::Buy,
        })
    );
}

/// Test buying cards that are not available.
#[test]
fn test_buy_unavailable() {
    let mut parser = parser();

    assert_eq!(
        parser.eval("mrkill", "buy laboratory"),
        Err(GameError::NotInSupply(CardId::new("laboratory")))
    );
    assert_eq!(
        parser.eval("mrkill", "buy poop"),
        Err(GameError::UnknownCard(CardId::new("poop")))
    );
    assert_eq!(parser.eval("jacob", "buy copper"), Err(GameError::NotYourTurn(JACOB)));
}

/// Test buying from an emptied pile.
#[test]
fn test_buy_from_empty_pile() {
    let mut parser = parser();
    let silver = CardId::new("silver");
    for _ in 0..40 {
        parser.game_mut().gain(JACOB, &silver).unwrap();
    }
    parser.game_mut().player_mut(MRKILL).set_hand(cards("copper", 5));
    for _ in 0..3 {
        parser.eval("mrkill", "play copper").unwrap();
    }

    assert_eq!(parser.eval("mrkill", "buy silver"), Err(GameError::PileEmpty(silver.clone())));

    let game = parser.game();
    let player = game.player(MRKILL);
    assert_eq!(game.supply_count(&silver), Some(0));
    assert_eq!(player.gold, 3);
    assert_eq!(player.buys, 1);
    assert!(player.discard_pile().is_empty());
    assert_eq!(game.phase(), Phase::Treasure);
}

/// Test that ending a turn resets counters and deals a fresh hand.
#[test]
fn test_cleanup_on_done() {
    let mut parser = parser();
    parser.game_mut().player_mut(MRKILL).set_hand(cards("copper", 5));

    parser.eval("mrkill", "play copper").unwrap();
    parser.eval("mrkill", "buy copper").unwrap();
    parser.eval("mrkill", "done").unwrap();

    let game = parser.game();
    let player = game.player(MRKILL);
    assert_eq!(player.hand().len(), 5);
    assert!(player.in_play().is_empty());
    assert_eq!(player.gold, 0);
    assert_eq!(player.actions, 1);
    assert_eq!(player.buys, 1);
    assert_eq!(game.phase(), Phase::Action);
}
