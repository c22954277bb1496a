//! sean-tools - Project scaffolding for SEAN stack applications

use clap::{Parser, Subcommand};
use colored::Colorize;
use sean_core::tui::CreateArgs;
use sean_core::ProductConfig;
use std::path::{Path, PathBuf};

/// SEAN product configuration
#[derive(Clone)]
pub struct SeanConfig;

impl ProductConfig for SeanConfig {
    fn name(&self) -> &'static str {
        "sean"
    }

    fn display_name(&self) -> &'static str {
        "SEAN.JS"
    }

    fn repo_url(&self) -> &'static str {
        "https://github.com/seanjs-stack/seanjs.git"
    }

    fn repo_url_env(&self) -> &'static str {
        "SEAN_REPO_URL"
    }

    fn variant_base_url(&self) -> &'static str {
        "https://templates.seanjs.org/variants"
    }

    fn variant_url_env(&self) -> &'static str {
        "SEAN_VARIANT_URL"
    }

    fn docs_url(&self) -> &'static str {
        "https://git-scm.com/downloads"
    }

    fn cli_description(&self) -> &'static str {
        "CLI for generating SEAN stack applications"
    }

    fn next_steps(&self, dir: &Path) -> Vec<String> {
        vec![
            format!("cd {}", dir.display()),
            "node server.js".to_string(),
        ]
    }
}

#[derive(Parser, Debug)]
#[command(name = "sean-tools")]
#[command(about = "CLI for generating SEAN stack applications")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a new SEAN stack application
    Create(CliCreateArgs),
}

#[derive(Parser, Debug)]
pub struct CliCreateArgs {
    /// Destination folder (skips the folder prompt)
    #[arg(short, long)]
    pub directory: Option<String>,

    /// YAML file with a full set of prompt answers (non-interactive mode)
    #[arg(long)]
    pub answers: Option<PathBuf>,

    /// Skip npm and bower install after generation
    #[arg(long = "skip-install")]
    pub skip_install: bool,

    /// Auto-confirm warnings (non-interactive mode)
    #[arg(short, long)]
    pub yes: bool,
}

impl From<CliCreateArgs> for CreateArgs {
    fn from(args: CliCreateArgs) -> Self {
        CreateArgs {
            directory: args.directory,
            answers: args.answers,
            skip_install: args.skip_install,
            yes: args.yes,
        }
    }
}

#[tokio::main]
async fn main() {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();
    let config = SeanConfig;

    let create_args = match args.command {
        Some(Command::Create(create_args)) => create_args.into(),
        // No subcommand: default to interactive create
        None => CreateArgs::default(),
    };

    let result = sean_core::run(&config, create_args).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    if let Err(e) = result {
        eprintln!("{} {}", "error:".red().bold(), e);
        std::process::exit(e.exit_code());
    }
}
