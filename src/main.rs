use anyhow::Result;
use arithmetic_drill::Game;
use arithmetic_drill::exercise::RandomExercises;
use arithmetic_drill::io_adapters::ReadlineInput;
use std::path::Path;

fn main() -> Result<()> {
    println!("Welcome to ::{}::", script_name());

    let mut exercises = RandomExercises::new();
    let mut input = ReadlineInput::new()?;
    Game::default().play(&mut exercises, &mut input, &mut std::io::stdout())?;

    // printed on completion and on interrupt alike
    println!("\n+++ See you soon! +++");
    Ok(())
}

/// The invoked program's base name, uppercased, for the welcome banner.
fn script_name() -> String {
    std::env::args()
        .next()
        .and_then(|argv0| {
            Path::new(&argv0)
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
        })
        .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string())
        .to_uppercase()
}
