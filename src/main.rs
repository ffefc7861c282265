use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use reelkit::{
    AccessGate, AppConfig, AppError, GuideCommandOutcome, GuideRequest, HashtagCommandOutcome,
    render_blocks,
};

#[derive(Parser)]
#[command(name = "reelkit")]
#[command(version)]
#[command(
    about = "Generate bonus marketing guides and viral hashtag lists",
    long_about = None
)]
struct Cli {
    /// Path to a reelkit.toml config file (default: $REELKIT_CONFIG, else built-in defaults)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a full bonus guide on a topic
    #[clap(visible_alias = "g")]
    Guide {
        /// Guide title (displayed as-is; the generated body carries no title line)
        #[arg(short, long)]
        title: String,
        /// One-line description of what the guide should cover
        #[arg(short, long)]
        description: String,
        /// Purchaser email for the bonus gate ($REELKIT_EMAIL when omitted)
        #[arg(short, long)]
        email: Option<String>,
        /// Print the assembled prompt without contacting the API
        #[arg(long)]
        dry_run: bool,
    },
    /// Generate 30 viral hashtags for a reel topic
    #[clap(visible_alias = "h")]
    Hashtags {
        /// Reel topic
        topic: String,
        /// Purchaser email for the bonus gate ($REELKIT_EMAIL when omitted)
        #[arg(short, long)]
        email: Option<String>,
        /// Copy the generated list to the clipboard
        #[arg(short, long)]
        copy: bool,
        /// Print the assembled prompt without contacting the API
        #[arg(long)]
        dry_run: bool,
    },
    /// Check a purchaser email against the bonus allow-list
    #[clap(visible_alias = "u")]
    Unlock {
        /// Email to check; prompted for interactively when omitted
        email: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    let config = AppConfig::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Guide { title, description, email, dry_run } => {
            require_access(&config, email)?;
            let request = GuideRequest::new(title, description);
            match reelkit::generate_guide(&config, &request, dry_run)? {
                GuideCommandOutcome::DryRun(prompt) => println!("{prompt}"),
                GuideCommandOutcome::Generated(blocks) => {
                    let styled = std::io::stdout().is_terminal();
                    print!("{}", render_blocks(&blocks, styled));
                }
            }
            Ok(())
        }
        Commands::Hashtags { topic, email, copy, dry_run } => {
            require_access(&config, email)?;
            match reelkit::generate_hashtags(&config, &topic, copy, dry_run)? {
                HashtagCommandOutcome::DryRun(prompt) => println!("{prompt}"),
                HashtagCommandOutcome::Generated { hashtags, copied } => {
                    println!("{hashtags}");
                    if copied {
                        println!("✅ Copied to clipboard");
                    }
                }
            }
            Ok(())
        }
        Commands::Unlock { email } => {
            let email = match email {
                Some(email) => email,
                None => prompt_for_email()?,
            };
            reelkit::unlock(&config, &email)?;
            println!("✅ Bonus content unlocked");
            Ok(())
        }
    }
}

/// Gate the generator commands behind the purchaser allow-list.
fn require_access(config: &AppConfig, email: Option<String>) -> Result<(), AppError> {
    let gate = AccessGate::new(&config.access.allowed_emails);
    if gate.is_open() {
        return Ok(());
    }

    let email = match email.or_else(|| std::env::var("REELKIT_EMAIL").ok()) {
        Some(email) => email,
        None => prompt_for_email()?,
    };
    gate.verify(&email)
}

fn prompt_for_email() -> Result<String, AppError> {
    dialoguer::Input::<String>::new()
        .with_prompt("Purchase email")
        .interact_text()
        .map_err(|e| AppError::Configuration(format!("Failed to read input: {e}")))
}
