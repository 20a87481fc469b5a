mod cmd;
mod logging;

use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "pmt", version, about = "Check, create and render markdown blog posts")]
struct Cli {
    /// Path to config.toml (defaults to ~/.config/postmatter/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Validate configuration and print resolved settings
    Doctor,

    /// Parse a post file and print its metadata
    Parse(ParseArgs),

    /// Validate every post in a directory and look for duplicate slugs
    Check(CheckArgs),

    /// Create a new post document
    New(NewArgs),

    /// Print the editable document for a stored post record (JSON)
    EditSource(EditSourceArgs),

    /// Build the stored post record (JSON) for a raw post file
    Record(RecordArgs),

    /// Render a post body to HTML
    Render(RenderArgs),

    /// Generate shell completions
    Completions {
        /// Target shell
        shell: Shell,
    },
}

#[derive(Debug, Args)]
pub struct ParseArgs {
    /// Raw post file
    pub file: PathBuf,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Posts directory (defaults to [posts] dir from config)
    pub dir: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct NewArgs {
    /// Post title
    #[arg(long)]
    pub title: String,

    /// URL slug (generated from the title when omitted)
    #[arg(long)]
    pub slug: Option<String>,

    /// Short description
    #[arg(long)]
    pub description: Option<String>,

    /// Comma-separated keywords (e.g. "rust, cli")
    #[arg(long)]
    pub keywords: Option<String>,

    /// Cover image URL
    #[arg(long)]
    pub cover_image: Option<String>,

    /// Markdown body
    #[arg(long, default_value = "")]
    pub body: String,

    /// File to create (prints to stdout when omitted)
    #[arg(long)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct EditSourceArgs {
    /// JSON file holding the stored post record
    pub record: PathBuf,
}

#[derive(Debug, Args)]
pub struct RecordArgs {
    /// Raw post file
    pub file: PathBuf,

    /// Stored record being edited (JSON); keeps its publish date
    #[arg(long)]
    pub existing: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Raw post file
    pub file: PathBuf,

    /// File to write the HTML to (prints to stdout when omitted)
    #[arg(long)]
    pub output: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();
    let config = cli.config.as_deref();

    match cli.command {
        Commands::Doctor => cmd::doctor::run(config),
        Commands::Parse(args) => cmd::parse::run(config, &args),
        Commands::Check(args) => cmd::check::run(config, &args),
        Commands::New(args) => cmd::new::run(config, &args),
        Commands::EditSource(args) => cmd::edit_source::run(config, &args),
        Commands::Record(args) => cmd::record::run(config, &args),
        Commands::Render(args) => cmd::render::run(config, &args),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "pmt", &mut std::io::stdout());
        }
    }
}
