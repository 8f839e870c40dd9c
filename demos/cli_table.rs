//! CLI table example.
//!
//! A terminal stand-in for an animated table: it drains the engine's event
//! queue, paces each card with a short delay, and steps the dealer's turn on
//! its own schedule. All timing lives here; the engine only guarantees order.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use bjtable::{EventKind, Game, GamePhase, Rank, Side};

const DEAL_PACE: Duration = Duration::from_millis(400);

fn main() {
    env_logger::init();
    println!("Blackjack table (h = hit, s = stand, n = new game, q = quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut game = Game::new(seed);

    game.start_new_game();
    animate(&mut game);

    loop {
        print_table(&game);

        match prompt_line("Action: ").as_str() {
            "h" | "hit" => {
                if let Err(err) = game.hit() {
                    println!("{err}");
                    continue;
                }
                animate(&mut game);
            }
            "s" | "stand" => {
                if let Err(err) = game.stand() {
                    println!("{err}");
                    continue;
                }
                animate(&mut game);
                run_dealer(&mut game);
            }
            "n" | "new" => {
                game.start_new_game();
                animate(&mut game);
            }
            "q" | "quit" => return,
            _ => println!("Unknown action."),
        }

        if game.phase() == GamePhase::Finished {
            print_table(&game);
            println!("Press 'n' for a new game or 'q' to quit.");
        }
    }
}

/// Steps the dealer until the round is over, pacing each draw.
fn run_dealer(game: &mut Game) {
    while game.phase() == GamePhase::DealerTurn {
        thread::sleep(DEAL_PACE);
        match game.advance_dealer_turn() {
            Ok(_) => animate(game),
            Err(err) => {
                println!("{err}");
                return;
            }
        }
    }
}

/// Drains the event queue, printing each event with animation pacing.
fn animate(game: &mut Game) {
    while let Some(event) = game.next_event() {
        match event.kind {
            EventKind::CardDealt {
                side,
                slot,
                rank,
                face_up,
            } => {
                let shown = if face_up {
                    format_rank(rank)
                } else {
                    "??".to_string()
                };
                println!("  {} slot {slot}: {shown}", side_label(side));
                thread::sleep(DEAL_PACE);
            }
            EventKind::HoleCardRevealed { rank } => {
                println!("  dealer flips the hole card: {}", format_rank(rank));
                thread::sleep(DEAL_PACE);
            }
            EventKind::ScoreUpdated {
                side,
                total,
                total_is_partial,
            } => {
                let marker = if total_is_partial { "+" } else { "" };
                println!("  {} score: {total}{marker}", side_label(side));
            }
            EventKind::GameFinished {
                outcome,
                player_total,
                dealer_total,
            } => {
                println!("  *** {outcome:?} (player {player_total}, dealer {dealer_total}) ***");
            }
        }
    }
}

fn print_table(game: &Game) {
    let dealer = game.dealer_hand();
    let dealer_cards: Vec<String> = dealer
        .ranks()
        .iter()
        .enumerate()
        .map(|(index, &rank)| {
            if index == 1 && !dealer.is_hole_revealed() {
                "??".to_string()
            } else {
                format_rank(rank)
            }
        })
        .collect();

    let player_cards: Vec<String> = game
        .player_hand()
        .ranks()
        .iter()
        .map(|&rank| format_rank(rank))
        .collect();

    println!();
    println!(
        "Dealer: {} ({})",
        dealer_cards.join(" "),
        game.dealer_visible_total()
    );
    println!(
        "Player: {} ({})",
        player_cards.join(" "),
        game.player_total()
    );
    println!();
}

fn side_label(side: Side) -> &'static str {
    match side {
        Side::Player => "player",
        Side::Dealer => "dealer",
    }
}

fn format_rank(rank: Rank) -> String {
    match rank {
        Rank::Ace => "A".to_string(),
        Rank::King => "K".to_string(),
        Rank::Queen => "Q".to_string(),
        Rank::Jack => "J".to_string(),
        _ => rank.value().to_string(),
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}
