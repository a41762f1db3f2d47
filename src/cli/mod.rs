//! CLI entry point — module declarations and the `run()` dispatcher

mod args;
mod files;
mod init;

use args::{Args, Command, OutputFormat};
use clap::Parser;
use files::{expand_paths, filter_ignored};
use mdtoc::{Config, TocOptions, add_heading_ids_with, formatters, toc_sync};

/// Main CLI entry point — parse args and dispatch to the appropriate handler
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let default_filter = if args.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .target(env_logger::Target::Stderr)
        .init();

    if args.no_color {
        colored::control::set_override(false);
    }

    if let Some(Command::Init { output, format }) = &args.command {
        return init::init_config(output, format);
    }

    if args.files.is_empty() && !args.stdin {
        eprintln!("error: FILES argument required (or use --stdin)");
        std::process::exit(1);
    }

    if args.dry_run && !args.add_ids {
        eprintln!("error: --dry-run only applies to --add-ids");
        std::process::exit(1);
    }

    let stdin_key = args
        .stdin_filename
        .clone()
        .unwrap_or_else(|| "-".to_string());

    let (files, stdin_content) = if args.stdin {
        (Vec::new(), Some(std::io::read_to_string(std::io::stdin())?))
    } else {
        let files = expand_paths(&args.files);
        let files = filter_ignored(files, &args.ignore)?;

        if files.is_empty() {
            if !args.quiet {
                println!("No files to process.");
            }
            return Ok(());
        }
        (files, None)
    };

    let config = build_config(&args)?;

    if args.add_ids {
        return add_ids(&args, &config, &files, stdin_content.as_deref());
    }

    let mut options = TocOptions::new().with_files(files).with_config(config);
    options.title = args.title.clone();
    if let Some(content) = stdin_content {
        options.strings.insert(stdin_key, content);
    }

    let results = toc_sync(&options)?;

    if results.heading_count() == 0 && !args.quiet {
        eprintln!("No headings found.");
    }

    let output = match args.output_format {
        OutputFormat::Text => colorize_text(&formatters::format_text(&results, args.reading_time)),
        OutputFormat::Markdown => formatters::format_markdown(&results),
        OutputFormat::Json => formatters::format_json(&results),
    };
    if !output.is_empty() {
        println!("{}", output.trim_end_matches('\n'));
    }

    if args.verbose {
        eprintln!(
            "\nSummary: {} heading(s) in {} file(s)",
            results.heading_count(),
            results.len()
        );
    }

    Ok(())
}

/// Load the config file (explicit or discovered) and apply flag overrides
fn build_config(args: &Args) -> Result<Config, Box<dyn std::error::Error>> {
    let base = if let Some(ref config_path) = args.config {
        Config::from_file(config_path)?
    } else {
        Config::discover(std::env::current_dir()?).unwrap_or_default()
    };
    let mut config = base.resolve_extends()?;

    config.merge(Config {
        suffix_style: args.suffix_style.map(Into::into),
        skip_code_fences: args.skip_code_fences.then_some(true),
        honor_explicit_ids: (args.explicit_ids || args.add_ids).then_some(true),
        ..Default::default()
    });
    Ok(config)
}

/// `--add-ids`: rewrite heading lines with `{#id}` markers
fn add_ids(
    args: &Args,
    config: &Config,
    files: &[String],
    stdin_content: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    use colored::Colorize;

    let options = config.extract_options();

    if let Some(content) = stdin_content {
        print!("{}", add_heading_ids_with(content, &options));
        return Ok(());
    }

    let mut changed = 0;
    for file_path in files {
        let content = std::fs::read_to_string(file_path)
            .map_err(|_| mdtoc::TocError::FileNotFound(file_path.clone()))?;
        let updated = add_heading_ids_with(&content, &options);
        if updated == content {
            log::info!("{}: already up to date", file_path);
            continue;
        }

        changed += 1;
        if args.dry_run {
            if !args.quiet {
                println!("{} {}", "Would update:".yellow().bold(), file_path);
            }
        } else {
            std::fs::write(file_path, &updated)?;
            if !args.quiet {
                println!("{} {}", "Updated:".green().bold(), file_path);
            }
        }
    }

    if !args.quiet {
        if changed == 0 {
            println!("{}", "All headings already have ids.".dimmed());
        } else if args.dry_run {
            println!(
                "\n{} {} file(s) would be updated (run without {} to apply).",
                "»".yellow().bold(),
                changed.to_string().yellow(),
                "--dry-run".bold()
            );
        } else {
            println!("{} file(s) updated.", changed);
        }
    }

    if args.dry_run && changed > 0 {
        std::process::exit(1);
    }
    Ok(())
}

/// Dim the `file:line:` prefix and highlight fragments in text output
fn colorize_text(text: &str) -> String {
    use colored::Colorize;

    text.lines()
        .map(|line| match line.split_once(": ") {
            Some((location, rest)) => match rest.rsplit_once(" (#") {
                Some((heading, fragment)) => format!(
                    "{}: {} {}",
                    location.dimmed(),
                    heading,
                    format!("(#{}", fragment).cyan()
                ),
                None => format!("{}: {}", location.dimmed(), rest),
            },
            None => line.to_string(),
        })
        .collect::<Vec<_>>()
        .join("\n")
}
