//! CLI blackjack demo.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use bjcharlie::{Card, Game, GameOptions, Hand, Participant, RoundOutcome, Suit};

fn main() {
    println!("Blackjack CLI demo (type 'q' to quit)");
    println!("Stick on five cards without busting to win. The dealer must beat your total.");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut game = Game::new(GameOptions::default(), seed);

    loop {
        let bet = game.current_bet();
        let Some(bet) = prompt_bet(&format!("Bet (enter keeps {bet}, q to quit): "), bet) else {
            println!("Goodbye.");
            break;
        };
        game.set_current_bet(bet);

        if let Err(err) = game.start_new_round() {
            println!("Deal error: {err}");
            continue;
        }

        while game.round_active() {
            print_table(&game);

            let result = match prompt_line("[h]it [s]tick: ").as_str() {
                "h" | "hit" => game.give_player_a_card().map(|card| {
                    println!("You draw {}.", format_card(&card));
                }),
                "s" | "stick" | "stand" => game.set_player_sticks(),
                "q" | "quit" => return,
                _ => {
                    println!("Unknown action.");
                    continue;
                }
            };

            if let Err(err) = result {
                println!("Action error: {err}");
            }
        }

        print_table(&game);
        if let Some(result) = game.round_result() {
            let verdict = match result.outcome {
                RoundOutcome::PlayerBust => "You bust.",
                RoundOutcome::FiveCardCharlie => "Five-card Charlie!",
                RoundOutcome::DealerBust => "Dealer busts.",
                RoundOutcome::DealerWins => "Dealer wins.",
            };
            let sign = if result.net >= 0 { "+" } else { "" };
            println!("{verdict} {sign}{} (score {})", result.net, game.player().score());
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::from("q");
    }
    input.trim().to_lowercase()
}

fn prompt_bet(prompt: &str, current: u32) -> Option<u32> {
    loop {
        let input = prompt_line(prompt);
        if input == "q" || input == "quit" {
            return None;
        }
        if input.is_empty() {
            return Some(current);
        }
        match input.parse::<u32>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a number."),
        }
    }
}

fn print_table(game: &Game) {
    println!("\nShoe: {} cards remaining", game.num_cards_left());
    println!(
        "Dealer: {} (value {})",
        format_participant(game.dealer()),
        game.dealer().visible_value()
    );
    println!(
        "You:    {} (value {}) | bet {} | {:?}",
        format_hand(game.player().hand()),
        game.player().hand().total_value(),
        game.current_bet(),
        game.player().status()
    );
    println!();
}

fn format_participant(participant: &Participant) -> String {
    if participant.show_hand() {
        format_hand(participant.hand())
    } else {
        participant
            .hand()
            .cards()
            .iter()
            .map(|card| {
                if card.face_up {
                    format_card(card)
                } else {
                    "??".to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn format_hand(hand: &Hand) -> String {
    if hand.is_empty() {
        return "(empty)".to_string();
    }
    hand.cards()
        .iter()
        .map(format_card)
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_card(card: &Card) -> String {
    let (suit, color_code) = match card.suit {
        Suit::Heart => ("H", "31"),
        Suit::Diamond => ("D", "31"),
        Suit::Club => ("C", "32"),
        Suit::Spade => ("S", "34"),
    };

    let is_face = matches!(card.label, "J" | "Q" | "K");
    let rank = if is_face {
        colorize(card.label, color_code)
    } else {
        card.label.to_string()
    };
    format!("{rank}{}", colorize(suit, color_code))
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
