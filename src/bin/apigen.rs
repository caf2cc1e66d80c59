use apigen::interface::cli::{Cli, Commands};
use apigen::{generate_from_config, GenerateConfig};
use clap::Parser;

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { ref config_file, .. } => {
            let config = match config_file {
                Some(path) => GenerateConfig::from_file(path),
                None => Ok(GenerateConfig::from(&cli.command)),
            };

            let written = config.and_then(|config| generate_from_config(&config));
            match written {
                Ok(paths) => {
                    for path in &paths {
                        println!("  {}", path.display());
                    }
                }
                Err(e) => {
                    eprintln!("error: {}", e);
                    std::process::exit(1);
                }
            }
        }
    }
}
