//! Reply Brawl - Entry Point
//!
//! Terminal front end for the battle engine. It owns pacing and input
//! gating: one reply is resolved at a time, and the counter message is
//! printed after the primary outcome. All game state lives in the engine.

use clap::Parser;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use reply_brawl::battle::{GameOverReason, MatchState};
use reply_brawl::catalog::{ActionCatalog, OPTIONS_PER_TURN};
use reply_brawl::core::config::DifficultyProfile;
use reply_brawl::core::error::{BrawlError, Result};
use reply_brawl::narrative::Language;

use std::io::{self, Write};

#[derive(Parser, Debug)]
#[command(name = "reply-brawl", about = "Break the opponent's mental gauge before you get blocked")]
struct Args {
    /// RNG seed; omit for a different match every run
    #[arg(long)]
    seed: Option<u64>,

    /// Built-in profile name ("normal", "easy") or path to a TOML profile
    #[arg(long, default_value = "normal")]
    difficulty: String,

    /// Interface language tag ("ja", "ru")
    #[arg(long, default_value = "ja")]
    language: String,
}

fn load_profile(source: &str) -> Result<DifficultyProfile> {
    if let Some(profile) = DifficultyProfile::by_name(source) {
        return Ok(profile);
    }

    let contents = std::fs::read_to_string(source)?;
    DifficultyProfile::from_toml_str(&contents).map_err(BrawlError::InvalidProfile)
}

fn gauge(label: &str, value: u32, max: u32) -> String {
    let width = 20usize;
    let filled = if max == 0 {
        0
    } else {
        (value as usize * width) / max as usize
    };
    format!(
        "{:<10} [{}{}] {}/{}",
        label,
        "#".repeat(filled),
        "-".repeat(width - filled),
        value,
        max
    )
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("reply_brawl=info")
        .init();

    let args = Args::parse();

    let profile = load_profile(&args.difficulty)?;
    let language = Language::from_tag(&args.language);
    let catalog = ActionCatalog::load_embedded()?;
    reply_brawl::narrative::validate_tables()?;

    let seed = args.seed.unwrap_or_else(|| rand::thread_rng().gen());
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    tracing::info!(seed, "Reply Brawl starting");

    let mut state = MatchState::new(profile.clone(), language)?;

    println!("\n=== REPLY BRAWL ===");
    println!("Pick the reply that breaks them before they block you.");
    println!();
    println!("Commands: 1-{} pick a reply, r reset, q quit", OPTIONS_PER_TURN);

    loop {
        println!();
        println!("{}", gauge("you", state.player_hp, state.profile.player_max_hp));
        println!("{}", gauge("opponent", state.opponent_hp, state.profile.opponent_max_hp));
        println!(
            "{}",
            gauge(
                "block",
                (state.cumulative_block_risk * 100.0).min(100.0) as u32,
                100
            )
        );
        println!();
        println!("> {}", state.last_opponent_line);

        let options = catalog.pick_actions(state.language, OPTIONS_PER_TURN, &mut rng)?;
        for (i, option) in options.iter().enumerate() {
            println!(
                "  {}. {} (dmg {}, risk {:.0}%)",
                i + 1,
                option.text,
                option.base_damage,
                option.base_block_risk * 100.0
            );
        }

        print!("reply> ");
        io::stdout().flush()?;
        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            break;
        }

        match input.trim() {
            "q" | "quit" => break,
            "r" | "reset" => {
                state.reset(profile.clone())?;
                println!("-- new match --");
                continue;
            }
            choice => {
                let Some(index) = choice
                    .parse::<usize>()
                    .ok()
                    .filter(|n| (1..=options.len()).contains(n))
                else {
                    println!("Pick 1-{}, r or q", options.len());
                    continue;
                };

                let outcome = state.apply_player_turn(&options[index - 1], &mut rng)?;
                println!();
                println!("{}", outcome.message);
                if let Some(counter) = &outcome.counter_message {
                    println!("{}", counter);
                }

                if outcome.game_over != GameOverReason::None {
                    println!();
                    println!("> {}", state.last_opponent_line);
                    println!("-- match over, r to rematch, q to quit --");
                }
            }
        }

        // Terminal matches only accept reset or quit
        while state.phase.is_terminal() {
            print!("over> ");
            io::stdout().flush()?;
            let mut input = String::new();
            if io::stdin().read_line(&mut input)? == 0 {
                return Ok(());
            }
            match input.trim() {
                "q" | "quit" => return Ok(()),
                "r" | "reset" => {
                    state.reset(profile.clone())?;
                    println!("-- new match --");
                }
                _ => println!("r to rematch, q to quit"),
            }
        }
    }

    Ok(())
}
