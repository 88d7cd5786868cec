//! Interactive CLI to play Nim against a freshly trained agent.
//!
//! Usage: cargo run --features cli --bin play -- --episodes 10000

use std::io::{self, Write};

use clap::Parser;

use nim_rl::game::{Action, Nim};
use nim_rl::learn::{TrainConfig, Trainer};

/// Play Nim against a Q-learning agent
#[derive(Parser, Debug)]
#[command(name = "play")]
#[command(about = "Play Nim against a Q-learning agent", long_about = None)]
struct Args {
    /// Self-play episodes to train before the match
    #[arg(long, default_value_t = 10_000)]
    episodes: usize,

    /// Random seed for training and play
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Let the agent move first
    #[arg(long)]
    agent_first: bool,
}

/// Prompt until the user enters a number, or `None` on quit/EOF.
fn read_number(prompt: &str) -> Option<usize> {
    loop {
        print!("{prompt}");
        io::stdout().flush().ok()?;

        let mut input = String::new();
        match io::stdin().read_line(&mut input) {
            Ok(0) => return None, // EOF
            Ok(_) => {}
            Err(_) => {
                println!("Could not read input, try again.");
                continue;
            }
        }

        let input = input.trim();
        if input == "q" || input == "quit" {
            return None;
        }

        match input.parse::<usize>() {
            Ok(n) => return Some(n),
            Err(_) => println!("Please enter a number (or 'q' to quit)."),
        }
    }
}

/// Prompt for a move until it is legal in `game`, or `None` on quit.
fn human_action(game: &Nim) -> Option<Action> {
    let legal = game.actions();
    loop {
        let pile = read_number("Choose pile: ")?;
        let take = read_number("How many to remove: ")?;

        let Ok(take) = u32::try_from(take) else {
            println!("Illegal move, try again.");
            continue;
        };
        let action = Action::new(pile, take);
        if legal.contains(&action) {
            return Some(action);
        }
        println!("Illegal move, try again.");
    }
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    println!("Training on {} episodes...", args.episodes);
    let config = TrainConfig::default()
        .with_episodes(args.episodes)
        .with_seed(args.seed);
    let mut agent = Trainer::new(config).run();
    println!("Training complete. Whoever empties the piles wins.");

    let mut game = Nim::new();
    let mut humans_turn = !args.agent_first;
    let mut human_moved_last = false;

    while !game.is_terminal() {
        println!("\nPiles: {game}");

        let action = if humans_turn {
            match human_action(&game) {
                Some(action) => action,
                None => {
                    println!("Goodbye!");
                    return;
                }
            }
        } else {
            let action = agent
                .choose_action(&game, false)
                .expect("non-terminal position has a move");
            println!("Agent takes {} from pile {}", action.take, action.pile);
            action
        };

        if let Err(err) = game.apply(action) {
            // Both sides validate against actions() first, so this only
            // guards against a logic error in the shell itself.
            println!("{err}");
            continue;
        }

        human_moved_last = humans_turn;
        humans_turn = !humans_turn;
    }

    if human_moved_last {
        println!("\nYou win!");
    } else {
        println!("\nAgent wins.");
    }
}
