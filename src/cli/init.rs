//! `mdtoc init` subcommand — initialize a new configuration file

use mdtoc::Config;

/// Initialize a new configuration file with every setting at its default
pub(crate) fn init_config(output_path: &str, format: &str) -> Result<(), Box<dyn std::error::Error>> {
    use colored::Colorize;
    use std::path::Path;

    if Path::new(output_path).exists() {
        eprintln!(
            "{} Configuration file '{}' already exists.",
            "Error:".red().bold(),
            output_path
        );
        eprintln!("Remove it first or choose a different output path with --output");
        std::process::exit(1);
    }

    let config = Config::with_defaults();
    let content = match format {
        "json" => format!("{}\n", serde_json::to_string_pretty(&config)?),
        "yaml" | "yml" => format!("# mdtoc configuration\n{}", serde_yaml_ng::to_string(&config)?),
        "toml" => format!("# mdtoc configuration\n{}", toml::to_string(&config)?),
        _ => {
            eprintln!(
                "{} Unsupported format '{}'. Use json, yaml, or toml.",
                "Error:".red().bold(),
                format
            );
            std::process::exit(1);
        }
    };

    std::fs::write(output_path, content)?;

    println!(
        "{} Created configuration file: {}",
        "✓".green().bold(),
        output_path.cyan()
    );
    println!();
    println!("Next steps:");
    println!("  1. Edit {} to customize anchor generation", output_path.cyan());
    println!(
        "  2. Run: {} {} {}",
        "mdtoc".cyan(),
        "--config".yellow(),
        output_path.cyan()
    );

    Ok(())
}
