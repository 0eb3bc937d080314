use std::fs::OpenOptions;

use env_logger::{Env, Target};

/// The terminal belongs to the UI, so log lines go to this file instead
pub const LOG_FILE: &str = "space_invaders.log";

/// Routes `log` output to [`LOG_FILE`]. Level comes from `RUST_LOG`,
/// default `info`.
pub fn init() -> color_eyre::Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(LOG_FILE)?;

    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .try_init()?;

    Ok(())
}
