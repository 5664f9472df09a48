use crate::config::LarderConfig;
use anyhow::Result;
use colored::Colorize;

pub fn handle_init() -> Result<()> {
    let cwd = std::env::current_dir()?;
    let config_path = cwd.join(".larder.toml");

    if config_path.exists() {
        anyhow::bail!("Larder already initialized at {}", config_path.display());
    }

    let config = LarderConfig::default();

    // Create data directory
    let data_path = config.data_path(&cwd);
    std::fs::create_dir_all(&data_path)?;

    // Save config
    config.save(&config_path)?;

    println!("{} larder in {}", "Initialized".green(), cwd.display());
    println!("  Config: {}", config_path.display());
    println!("  Data:   {}", data_path.display());

    Ok(())
}
