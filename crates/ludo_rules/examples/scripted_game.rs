//! Plays a short scripted opening and prints the engine's view of it.
//!
//! Run with `RUST_LOG=ludo_rules=debug` to watch the state machine.

use ludo_rules::{Game, Highlight, Phase, ScriptedRolls};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Four opening throws, then red: a 6 out of the house and the
    // bonus 5 along the track.
    let rolls = ScriptedRolls::new(&[1, 1, 1, 1, 6, 5]);
    let mut game = Game::new(Box::new(rolls));

    while *game.turn().phase() != Phase::End {
        game.tick();
        match game.highlight() {
            Highlight::Dice { player, .. } => {
                let value = game.roll().expect("dice phase");
                println!("{player} rolls {value}");
            }
            Highlight::Destinations(moves) => {
                let chosen = moves[0];
                let landed = game.choose(chosen.stone).expect("highlighted move");
                println!("stone {} moves to {landed}", chosen.stone);
            }
            Highlight::None => {}
        }
    }

    println!("turn passes to {}", game.turn().player());
}
