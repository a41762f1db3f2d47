//! CLI argument definitions for mdtoc

use clap::Parser;
use mdtoc::SuffixStyle;

#[derive(clap::ValueEnum, Clone, Debug, Default)]
pub(crate) enum OutputFormat {
    #[default]
    Text,
    /// Nested list of links, ready to paste into a document
    Markdown,
    Json,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
pub(crate) enum SuffixArg {
    /// intro, intro-1, intro-2
    Numeric,
    /// intro, intro-section-1, intro-subsection-2
    Level,
}

impl From<SuffixArg> for SuffixStyle {
    fn from(arg: SuffixArg) -> Self {
        match arg {
            SuffixArg::Numeric => SuffixStyle::Numeric,
            SuffixArg::Level => SuffixStyle::Level,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "mdtoc")]
#[command(about = "Extract headings and anchor ids from Markdown files", long_about = None)]
#[command(version)]
pub(crate) struct Args {
    #[command(subcommand)]
    pub(crate) command: Option<Command>,

    /// Files or directories to process
    #[arg(global = true)]
    pub(crate) files: Vec<String>,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub(crate) config: Option<String>,

    /// Output format
    #[arg(short = 'o', long, default_value = "text", global = true)]
    pub(crate) output_format: OutputFormat,

    /// Glob patterns for files to ignore (repeatable)
    #[arg(long, action = clap::ArgAction::Append, global = true)]
    pub(crate) ignore: Vec<String>,

    /// Document title, added as the first level-1 entry (#title)
    #[arg(long, global = true)]
    pub(crate) title: Option<String>,

    /// How repeated headings are told apart
    #[arg(long, value_enum, global = true)]
    pub(crate) suffix_style: Option<SuffixArg>,

    /// Ignore headings inside fenced code blocks
    #[arg(long, global = true)]
    pub(crate) skip_code_fences: bool,

    /// Use existing {#id} markers as anchors instead of title text
    #[arg(long, global = true)]
    pub(crate) explicit_ids: bool,

    /// Append {#id} markers to heading lines and write the files back
    /// (implies --explicit-ids, so reruns leave annotated files alone)
    #[arg(long, global = true)]
    pub(crate) add_ids: bool,

    /// With --add-ids, list files that would change without writing them
    #[arg(long, global = true)]
    pub(crate) dry_run: bool,

    /// Include reading time estimates in text output
    #[arg(long, global = true)]
    pub(crate) reading_time: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub(crate) no_color: bool,

    /// Read input from stdin
    #[arg(long, global = true)]
    pub(crate) stdin: bool,

    /// Name to use for stdin content in output (requires --stdin)
    #[arg(long, global = true)]
    pub(crate) stdin_filename: Option<String>,

    /// Verbose output with detailed information
    #[arg(short, long, global = true)]
    pub(crate) verbose: bool,

    /// Quiet mode - only print what was asked for
    #[arg(short, long, global = true)]
    pub(crate) quiet: bool,
}

#[derive(Parser, Debug)]
pub(crate) enum Command {
    /// Initialize a new configuration file
    Init {
        /// Output file path
        #[arg(long, default_value = ".mdtoc.json")]
        output: String,

        /// Output format (json, yaml, or toml)
        #[arg(long, default_value = "json")]
        format: String,
    },
}
