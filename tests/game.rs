//! Game integration tests.

use bjtable::{
    CommandError, DealerStep, EventKind, Game, GamePhase, MAX_HAND_CARDS, Outcome, Rank, Side,
    hand_value,
};

fn stack(game: &mut Game, ranks: &[Rank]) {
    game.shoe.stack(ranks.iter().copied());
}

fn drain(game: &mut Game) -> Vec<EventKind> {
    let mut kinds = Vec::new();
    while let Some(event) = game.next_event() {
        kinds.push(event.kind);
    }
    kinds
}

#[test]
fn hand_value_vectors() {
    assert_eq!(hand_value(&[Rank::Ace, Rank::Ace, Rank::Nine]), 21);
    assert_eq!(hand_value(&[Rank::Ace, Rank::Ace]), 12);
    assert_eq!(hand_value(&[Rank::King, Rank::Queen]), 20);
    assert_eq!(hand_value(&[Rank::Ace, Rank::King, Rank::Five]), 16);
    assert_eq!(hand_value(&[]), 0);
}

#[test]
fn hand_value_without_aces_is_exact_sum() {
    let hand = [Rank::Two, Rank::Seven, Rank::King, Rank::Ten];
    let sum: u8 = hand.iter().map(|rank| rank.value()).sum();
    assert_eq!(hand_value(&hand), sum);
}

#[test]
fn hand_value_is_order_insensitive() {
    let orders = [
        [Rank::Ace, Rank::King, Rank::Five],
        [Rank::King, Rank::Five, Rank::Ace],
        [Rank::Five, Rank::Ace, Rank::King],
    ];
    for hand in &orders {
        assert_eq!(hand_value(hand), 16);
    }
}

#[test]
fn opening_deal_order_and_events() {
    let mut game = Game::new(1);
    stack(&mut game, &[Rank::Five, Rank::Six, Rank::Seven, Rank::Ten]);
    game.start_new_game();

    assert_eq!(game.phase(), GamePhase::PlayerTurn);
    assert_eq!(game.round(), 1);
    assert_eq!(game.player_hand().ranks(), &[Rank::Five, Rank::Seven]);
    assert_eq!(game.dealer_hand().up_card(), Some(Rank::Six));
    assert_eq!(game.dealer_hand().hole_card(), Some(Rank::Ten));
    assert!(!game.dealer_hand().is_hole_revealed());
    assert_eq!(game.dealer_visible_total(), 6);
    assert_eq!(game.dealer_total(), 16);

    let kinds = drain(&mut game);
    assert_eq!(
        kinds,
        vec![
            EventKind::CardDealt {
                side: Side::Player,
                slot: 0,
                rank: Rank::Five,
                face_up: true,
            },
            EventKind::ScoreUpdated {
                side: Side::Player,
                total: 5,
                total_is_partial: false,
            },
            EventKind::CardDealt {
                side: Side::Dealer,
                slot: 0,
                rank: Rank::Six,
                face_up: true,
            },
            EventKind::ScoreUpdated {
                side: Side::Dealer,
                total: 6,
                total_is_partial: true,
            },
            EventKind::CardDealt {
                side: Side::Player,
                slot: 1,
                rank: Rank::Seven,
                face_up: true,
            },
            EventKind::ScoreUpdated {
                side: Side::Player,
                total: 12,
                total_is_partial: false,
            },
            EventKind::CardDealt {
                side: Side::Dealer,
                slot: 1,
                rank: Rank::Ten,
                face_up: false,
            },
            EventKind::ScoreUpdated {
                side: Side::Dealer,
                total: 6,
                total_is_partial: true,
            },
        ]
    );
}

#[test]
fn is_dealing_until_opening_events_drained() {
    let mut game = Game::new(2);
    game.start_new_game();
    assert!(game.is_dealing());

    // Four CardDealt events interleaved with four ScoreUpdated events.
    let mut deals_seen = 0;
    while let Some(event) = game.next_event() {
        if matches!(event.kind, EventKind::CardDealt { .. }) {
            deals_seen += 1;
        }
        if deals_seen < 4 {
            assert!(game.is_dealing());
        }
    }
    assert_eq!(deals_seen, 4);
    assert!(!game.is_dealing());
}

#[test]
fn event_sequencing_metadata() {
    let mut game = Game::new(3);
    game.start_new_game();

    let mut last_seq = None;
    while let Some(event) = game.next_event() {
        assert_eq!(event.round, 1);
        if let Some(prev) = last_seq {
            assert!(event.seq > prev);
        }
        last_seq = Some(event.seq);
    }
}

#[test]
fn commands_rejected_outside_their_phase() {
    let mut game = Game::new(4);
    assert_eq!(game.hit().unwrap_err(), CommandError::NotPlayerTurn);
    assert_eq!(game.stand().unwrap_err(), CommandError::NotPlayerTurn);
    assert_eq!(
        game.advance_dealer_turn().unwrap_err(),
        CommandError::NotDealerTurn
    );

    game.start_new_game();
    assert_eq!(
        game.advance_dealer_turn().unwrap_err(),
        CommandError::NotDealerTurn
    );
}

#[test]
fn stand_reveals_hole_card_once() {
    let mut game = Game::new(5);
    stack(&mut game, &[Rank::Ten, Rank::Six, Rank::Nine, Rank::King]);
    game.start_new_game();
    drain(&mut game);

    game.stand().unwrap();
    assert_eq!(game.phase(), GamePhase::DealerTurn);
    assert!(game.dealer_hand().is_hole_revealed());
    assert_eq!(game.dealer_visible_total(), 16);

    let kinds = drain(&mut game);
    assert_eq!(
        kinds,
        vec![
            EventKind::HoleCardRevealed { rank: Rank::King },
            EventKind::ScoreUpdated {
                side: Side::Dealer,
                total: 16,
                total_is_partial: false,
            },
        ]
    );
}

#[test]
fn player_bust_skips_dealer_turn() {
    let mut game = Game::new(6);
    stack(
        &mut game,
        &[Rank::Ten, Rank::Six, Rank::Nine, Rank::King, Rank::Queen],
    );
    game.start_new_game();
    drain(&mut game);

    // 10 + 9 + queen = 29, bust.
    let drawn = game.hit().unwrap();
    assert_eq!(drawn, Some(Rank::Queen));
    assert_eq!(game.phase(), GamePhase::Finished);

    // Hole card stays hidden; the final event still carries the full total.
    assert!(!game.dealer_hand().is_hole_revealed());
    let kinds = drain(&mut game);
    assert_eq!(
        kinds.last(),
        Some(&EventKind::GameFinished {
            outcome: Outcome::DealerWins,
            player_total: 29,
            dealer_total: 16,
        })
    );

    // A busted round accepts no further play.
    assert_eq!(game.hit().unwrap_err(), CommandError::NotPlayerTurn);
    assert_eq!(game.stand().unwrap_err(), CommandError::NotPlayerTurn);
    assert_eq!(
        game.advance_dealer_turn().unwrap_err(),
        CommandError::NotDealerTurn
    );
}

#[test]
fn end_to_end_scripted_round() {
    let mut game = Game::new(7);
    stack(&mut game, &[Rank::Five, Rank::Six, Rank::Seven, Rank::Ten]);
    game.start_new_game();
    drain(&mut game);

    assert_eq!(game.player_total(), 12);
    assert_eq!(game.dealer_visible_total(), 6);

    stack(&mut game, &[Rank::Nine, Rank::Ten]);
    let drawn = game.hit().unwrap();
    assert_eq!(drawn, Some(Rank::Nine));
    assert_eq!(game.player_total(), 21);
    assert_eq!(game.phase(), GamePhase::PlayerTurn);

    game.stand().unwrap();

    // Dealer sits at 16 and must draw; the stacked ten busts them.
    let step = game.advance_dealer_turn().unwrap();
    assert_eq!(step, DealerStep::Drew(Rank::Ten));

    let step = game.advance_dealer_turn().unwrap();
    match step {
        DealerStep::Finished(summary) => {
            assert_eq!(summary.outcome, Outcome::PlayerWins);
            assert_eq!(summary.player_total, 21);
            assert_eq!(summary.dealer_total, 26);
        }
        DealerStep::Drew(rank) => panic!("dealer drew {rank:?} at 26"),
    }
    assert_eq!(game.phase(), GamePhase::Finished);
}

#[test]
fn equal_totals_push() {
    let mut game = Game::new(8);
    stack(&mut game, &[Rank::Ten, Rank::King, Rank::Queen, Rank::Jack]);
    game.start_new_game();
    game.stand().unwrap();

    // Dealer already at 20, stands immediately.
    let step = game.advance_dealer_turn().unwrap();
    match step {
        DealerStep::Finished(summary) => {
            assert_eq!(summary.outcome, Outcome::Push);
            assert_eq!(summary.player_total, 20);
            assert_eq!(summary.dealer_total, 20);
        }
        DealerStep::Drew(rank) => panic!("dealer drew {rank:?} at 20"),
    }

    let kinds = drain(&mut game);
    assert_eq!(
        kinds.last(),
        Some(&EventKind::GameFinished {
            outcome: Outcome::Push,
            player_total: 20,
            dealer_total: 20,
        })
    );
}

#[test]
fn dealer_draws_below_seventeen_and_stands_at_or_above() {
    for seed in 0..32 {
        let mut game = Game::new(seed);
        game.start_new_game();
        game.stand().unwrap();

        loop {
            let total_before = game.dealer_total();
            match game.advance_dealer_turn().unwrap() {
                DealerStep::Drew(_) => {
                    assert!(total_before < 17, "dealer drew at {total_before}");
                    assert!(game.dealer_hand().len() <= MAX_HAND_CARDS);
                }
                DealerStep::Finished(summary) => {
                    assert!(
                        summary.dealer_total >= 17
                            || game.dealer_hand().len() == MAX_HAND_CARDS,
                        "dealer stood at {} with {} cards",
                        summary.dealer_total,
                        game.dealer_hand().len(),
                    );
                    break;
                }
            }
        }
    }
}

#[test]
fn player_hand_caps_at_five_cards() {
    let mut game = Game::new(9);
    stack(
        &mut game,
        &[
            Rank::Two,  // player
            Rank::Ten,  // dealer up
            Rank::Two,  // player
            Rank::Ten,  // dealer hole
            Rank::Two,  // hit
            Rank::Two,  // hit
            Rank::Two,  // hit
        ],
    );
    game.start_new_game();

    game.hit().unwrap();
    game.hit().unwrap();
    game.hit().unwrap();
    assert_eq!(game.player_hand().len(), MAX_HAND_CARDS);
    assert_eq!(game.player_total(), 10);
    drain(&mut game);

    // Sixth card: silent no-op, nothing drawn, no event, turn continues.
    assert_eq!(game.hit().unwrap(), None);
    assert_eq!(game.player_hand().len(), MAX_HAND_CARDS);
    assert_eq!(game.pending_events(), 0);
    assert_eq!(game.phase(), GamePhase::PlayerTurn);
}

#[test]
fn dealer_stands_when_hand_is_full() {
    let mut game = Game::new(10);
    stack(
        &mut game,
        &[
            Rank::Ten,  // player
            Rank::Two,  // dealer up
            Rank::Nine, // player
            Rank::Two,  // dealer hole
            Rank::Two,  // dealer draw
            Rank::Three, // dealer draw
            Rank::Four, // dealer draw -> 13 with 5 cards
        ],
    );
    game.start_new_game();
    game.stand().unwrap();

    assert_eq!(game.advance_dealer_turn().unwrap(), DealerStep::Drew(Rank::Two));
    assert_eq!(game.advance_dealer_turn().unwrap(), DealerStep::Drew(Rank::Three));
    assert_eq!(game.advance_dealer_turn().unwrap(), DealerStep::Drew(Rank::Four));
    assert!(game.dealer_hand().is_full());

    // 13 is below the stand threshold, but there is no slot left to fill.
    match game.advance_dealer_turn().unwrap() {
        DealerStep::Finished(summary) => {
            assert_eq!(summary.dealer_total, 13);
            assert_eq!(summary.outcome, Outcome::PlayerWins);
        }
        DealerStep::Drew(rank) => panic!("dealer drew {rank:?} into a full hand"),
    }
}

#[test]
fn new_game_resets_hands_and_supersedes_events() {
    let mut game = Game::new(11);
    stack(&mut game, &[Rank::Five, Rank::Six, Rank::Seven, Rank::Ten]);
    game.start_new_game();
    game.hit().unwrap();
    assert!(game.pending_events() > 0);

    // Supersede mid-round without draining anything.
    game.start_new_game();
    assert_eq!(game.round(), 2);
    assert_eq!(game.phase(), GamePhase::PlayerTurn);
    assert_eq!(game.player_hand().len(), 2);
    assert_eq!(game.dealer_hand().len(), 2);
    assert!(!game.dealer_hand().is_hole_revealed());

    // Opening deal of the new round only: 4 deals + 4 score updates, all
    // tagged with the new round number.
    assert_eq!(game.pending_events(), 8);
    while let Some(event) = game.next_event() {
        assert_eq!(event.round, 2);
    }
}

#[test]
fn new_game_resets_after_finished_round() {
    let mut game = Game::new(12);
    stack(
        &mut game,
        &[Rank::Ten, Rank::Six, Rank::Nine, Rank::King, Rank::Queen],
    );
    game.start_new_game();
    game.hit().unwrap(); // bust
    assert_eq!(game.phase(), GamePhase::Finished);

    game.start_new_game();
    assert_eq!(game.phase(), GamePhase::PlayerTurn);
    assert_eq!(game.player_hand().len(), 2);
    assert!(!game.player_hand().is_bust());

    // The first event of the new round is the player's first card.
    let first = game.next_event().unwrap();
    assert!(matches!(
        first.kind,
        EventKind::CardDealt {
            side: Side::Player,
            slot: 0,
            ..
        }
    ));
}

#[test]
fn stacked_shoe_runs_out_and_falls_back_to_random() {
    let mut game = Game::new(13);
    stack(&mut game, &[Rank::Five]);
    assert_eq!(game.shoe.stacked_len(), 1);
    game.start_new_game();
    assert_eq!(game.shoe.stacked_len(), 0);
    assert_eq!(game.player_hand().ranks()[0], Rank::Five);
    assert_eq!(game.player_hand().len(), 2);
    assert_eq!(game.dealer_hand().len(), 2);
}
