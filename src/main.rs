use std::fs::File;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::{Env, Target};
use tile2048::app::{
    config::Config,
    data::FileDataManager,
    entry::{leave, run_app},
};

fn main() -> Result<()> {
    let config = Config::parse();
    config.validate()?;

    if let Some(path) = &config.log_file {
        let file = File::create(path)
            .with_context(|| format!("cannot open log file {}", path.display()))?;
        env_logger::Builder::from_env(Env::default().default_filter_or("info"))
            .target(Target::Pipe(Box::new(file)))
            .init();
    }

    std::panic::set_hook(Box::new(|panic_info| {
        let _ = leave();
        log::error!("{panic_info}");
        eprintln!("{panic_info}");
    }));

    let data = Box::new(FileDataManager::new(&config.best_score_file));
    log::info!("best score file {}", data.path().display());
    run_app(&config, data)?;
    Ok(())
}
