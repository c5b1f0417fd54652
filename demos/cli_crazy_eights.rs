//! CLI Crazy Eights example.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use c8rs::{
    Card, DrawOutcome, Game, GameOptions, GameState, OpponentOutcome, PlayOutcome, Scheduled,
    Seat, Suit, SuitChoiceOutcome,
};

fn main() {
    println!("Crazy Eights CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let game = Game::new(GameOptions::default(), seed);

    loop {
        println!("Dealing...");
        let pending = game.start_game();
        wait(pending);
        if let Err(err) = game.finish_dealing(pending) {
            println!("Deal error: {err}");
            return;
        }

        play_one_game(&game);

        match game.winner() {
            Some(Seat::Player) => println!("Congratulations! You won!"),
            Some(Seat::Opponent) => println!("Opponent wins! Better luck next time."),
            None => return,
        }

        match prompt_line("Play again? (y/n): ").as_str() {
            "y" | "yes" => {}
            _ => return,
        }
    }
}

/// Drives a single game to its end. Returns early if the user quits.
fn play_one_game(game: &Game) {
    while game.state() != GameState::Finished {
        match game.state() {
            GameState::InProgress => {
                print_table(game);
                if !player_turn(game) {
                    return;
                }
            }
            GameState::AwaitingSuitChoice => {
                if !suit_choice(game) {
                    return;
                }
            }
            _ => return,
        }
    }
}

/// Prompts the player for one action. Returns `false` on quit.
fn player_turn(game: &Game) -> bool {
    let hand = game.player_hand();
    let input = prompt_line("Play a card number, or (d)raw: ");

    match input.as_str() {
        "q" | "quit" => return false,
        "d" | "draw" => match game.draw_card() {
            Ok(DrawOutcome::Drew { card, next }) => {
                println!("You drew {card}.");
                run_opponent(game, next);
            }
            Ok(DrawOutcome::DeckEmpty { next }) => {
                println!("Deck is empty! Skipping turn.");
                run_opponent(game, next);
            }
            Err(err) => println!("{err}"),
        },
        _ => {
            let Some(card) = input
                .parse::<usize>()
                .ok()
                .and_then(|number| hand.get(number.checked_sub(1)?))
                .copied()
            else {
                println!("Unknown action.");
                return true;
            };
            play(game, card);
        }
    }

    true
}

fn play(game: &Game, card: Card) {
    match game.play_card(card) {
        Ok(PlayOutcome::TurnPassed(task)) => {
            println!("You played {card}.");
            run_opponent(game, task);
        }
        Ok(PlayOutcome::SuitChoiceNeeded) => {
            println!("Crazy 8! Choose a new suit.");
        }
        Ok(PlayOutcome::GameOver) => {}
        Err(err) => println!("Invalid move! {err}."),
    }
}

/// Prompts for the suit after a wild eight. Returns `false` on quit.
fn suit_choice(game: &Game) -> bool {
    let suit = match prompt_line("New suit: (h)earts, (d)iamonds, (c)lubs, (s)pades: ").as_str() {
        "h" | "hearts" => Suit::Hearts,
        "d" | "diamonds" => Suit::Diamonds,
        "c" | "clubs" => Suit::Clubs,
        "s" | "spades" => Suit::Spades,
        "q" | "quit" => return false,
        _ => {
            println!("Unknown suit.");
            return true;
        }
    };

    match game.choose_suit(suit) {
        Ok(SuitChoiceOutcome::TurnPassed(task)) => {
            println!("You chose {suit}.");
            run_opponent(game, task);
        }
        Ok(SuitChoiceOutcome::GameOver) => {}
        Err(err) => println!("{err}"),
    }

    true
}

/// Waits out the think delay, then delivers the opponent's move.
fn run_opponent(game: &Game, task: Scheduled) {
    println!("Opponent is thinking...");
    wait(task);

    match game.opponent_move(task) {
        OpponentOutcome::Played {
            card,
            chosen_suit: Some(suit),
        } => println!("Opponent played {card} and chose {suit}!"),
        OpponentOutcome::Played { card, .. } => println!("Opponent played {card}."),
        OpponentOutcome::Drew => println!("Opponent drew a card."),
        OpponentOutcome::DeckEmpty => println!("Deck is empty! Opponent skips the turn."),
        OpponentOutcome::Cancelled => {}
    }
}

fn wait(task: Scheduled) {
    thread::sleep(Duration::from_millis(task.delay_ms));
}

fn print_table(game: &Game) {
    let top = game
        .top_card()
        .map_or_else(|| "--".to_string(), |card| card.to_string());
    let active = game
        .active_suit()
        .map_or_else(|| "--".to_string(), |suit| suit.to_string());

    println!();
    println!(
        "Top: {top}  Active suit: {active}  Deck: {}  Opponent holds {} cards",
        game.deck_size(),
        game.opponent_hand_size(),
    );

    print!("Your hand:");
    for (number, card) in game.player_hand().iter().enumerate() {
        print!(" [{}] {card}", number + 1);
    }
    println!();
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut line = String::new();
    if io::stdin().read_line(&mut line).is_err() {
        return "q".to_string();
    }
    line.trim().to_lowercase()
}
