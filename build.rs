use std::{fs, path::Path};
extern crate rustsourcebundler;
use rustsourcebundler::Bundler;

const SOURCES: &[&str] = &[
    "src/bin/main.rs",
    "src/lib.rs",
    "src/action.rs",
    "src/config.rs",
    "src/error.rs",
    "src/hunter.rs",
    "src/input.rs",
    "src/simulation.rs",
    "src/strategy.rs",
    "src/threat.rs",
    "src/vec2.rs",
    "src/world.rs",
];

// Bundles the bot into one source file for single-file submission.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    for source in SOURCES {
        println!("cargo:rerun-if-changed={source}");
    }

    fs::create_dir_all("bundle")?;

    let mut bundler: Bundler =
        Bundler::new(Path::new("src/bin/main.rs"), Path::new("bundle/hunterbot.rs"));
    bundler.crate_name("hunterbot");
    bundler.run();
    Ok(())
}
