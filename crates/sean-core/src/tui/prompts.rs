//! Interactive setup workflow
//!
//! Drives the whole generator run: preflight, prompt sequence, advisory
//! connectivity probes, clone, template materialization, and post-install.
//! Steps are strictly sequential; each one reads the session state produced
//! by the prompts before it.

use crate::error::ScaffoldError;
use crate::install;
use crate::probe::{probe_database, probe_redis, ProbeOutcome};
use crate::product::ProductConfig;
use crate::session::{DatabaseSettings, Dialect, RedisSettings, SessionState};
use crate::templates::{self, known_versions};
use crate::vcs;
use std::path::PathBuf;

/// CLI arguments for the create command
#[derive(Debug, Clone, Default)]
pub struct CreateArgs {
    /// Destination folder, skipping the folder prompt
    pub directory: Option<String>,

    /// YAML file with a full set of answers (non-interactive mode)
    pub answers: Option<PathBuf>,

    /// Skip npm/bower install after materialization
    pub skip_install: bool,

    /// Auto-confirm warnings (non-interactive mode)
    pub yes: bool,
}

/// Run the setup workflow with interactive prompts.
pub async fn run<C: ProductConfig>(config: &C, args: CreateArgs) -> Result<(), ScaffoldError> {
    cliclack::intro(config.display_name())?;

    // Preflight: a git client is the one hard prerequisite.
    check_git(config, &args)?;

    // Prompt sequence (or answers file).
    let state = collect_session(config, &args)?;

    // Advisory probes: report, never abort.
    run_probes(&state).await?;

    // Fetch the skeleton.
    let destination = state.destination();
    confirm_destination(&destination, &args)?;
    clone_skeleton(config, &state).await?;

    // Materialize templates and dialect variants.
    materialize(config, &state).await?;

    // Post-install.
    if args.skip_install {
        cliclack::log::info("Skipping npm and bower install (--skip-install)")?;
    } else {
        install::install_dependencies(&destination).await?;
    }

    print_banner(config, &state)?;

    Ok(())
}

fn check_git<C: ProductConfig>(config: &C, args: &CreateArgs) -> Result<(), ScaffoldError> {
    if let Some(version) = vcs::git_version() {
        cliclack::log::success(format!("git installed ({})", version))?;
        return Ok(());
    }

    cliclack::log::error("git is not installed")?;

    if !args.yes {
        let open_docs: bool = cliclack::confirm("Open the installation docs in your browser?")
            .initial_value(true)
            .interact()?;
        if open_docs {
            let _ = open::that(config.docs_url());
        }
    }

    Err(ScaffoldError::GitMissing)
}

fn collect_session<C: ProductConfig>(
    config: &C,
    args: &CreateArgs,
) -> Result<SessionState, ScaffoldError> {
    let mut state = match &args.answers {
        Some(path) => {
            let state = SessionState::from_answers_file(path)
                .map_err(|e| ScaffoldError::Prompt(std::io::Error::other(e.to_string())))?;
            cliclack::log::info(format!("Using answers from {}", path.display()))?;
            state
        }
        None => prompt_session(config)?,
    };

    if let Some(dir) = &args.directory {
        state.folder = dir.clone();
    }

    Ok(state)
}

fn prompt_session<C: ProductConfig>(config: &C) -> Result<SessionState, ScaffoldError> {
    let mut state = SessionState::default();

    let versions = known_versions();
    if versions.len() == 1 {
        state.version = versions[0].to_string();
        cliclack::log::info(format!("Using skeleton version: {}", state.version))?;
    } else {
        let mut select =
            cliclack::select(format!("Which {} version would you like?", config.display_name()));
        for version in &versions {
            select = select.item(version.to_string(), *version, "");
        }
        state.version = select.interact()?;
    }

    state.folder = cliclack::input("In which folder should the project be generated?")
        .default_input(&state.folder)
        .interact()?;

    state.app_name = cliclack::input("What would you like to call your application?")
        .default_input(&state.app_name)
        .interact()?;

    state.app_description = cliclack::input("How would you describe your application?")
        .default_input(&state.app_description)
        .interact()?;

    state.app_keywords =
        cliclack::input("How would you describe it in comma separated key words?")
            .default_input(&state.app_keywords)
            .interact()?;

    state.app_author = cliclack::input("What is your company/author name?")
        .default_input("")
        .interact()?;

    state.add_article_example =
        cliclack::confirm("Generate the article example CRUD module?")
            .initial_value(true)
            .interact()?;

    state.add_chat_example = cliclack::confirm("Generate the chat example module?")
        .initial_value(true)
        .interact()?;

    state.database = prompt_database()?;
    state.redis = prompt_redis()?;

    Ok(state)
}

fn prompt_database() -> Result<Option<DatabaseSettings>, ScaffoldError> {
    let setup: bool = cliclack::confirm("Do you want to set up the database now?")
        .initial_value(true)
        .interact()?;
    if !setup {
        return Ok(None);
    }

    let mut select = cliclack::select("Which database will the application use?");
    for dialect in Dialect::ALL {
        select = select.item(dialect, dialect.display_name(), "");
    }
    let dialect: Dialect = select.interact()?;

    cliclack::log::remark(format!(
        "Make sure the {} server is already set up before probing.",
        dialect.display_name()
    ))?;

    let defaults = DatabaseSettings::defaults_for(dialect);

    let name: String = cliclack::input("What is the database name?")
        .default_input(&defaults.name)
        .interact()?;
    let host: String = cliclack::input("What is the database host?")
        .default_input(&defaults.host)
        .interact()?;
    let port: u16 = cliclack::input("What is the database port?")
        .default_input(&defaults.port.to_string())
        .interact()?;
    let username: String = cliclack::input("What is the database username?")
        .default_input(&defaults.username)
        .interact()?;
    let password: String = cliclack::input("What is the database password?")
        .default_input(&defaults.password)
        .interact()?;
    let check_connection: bool =
        cliclack::confirm("Would you like to check the database connection now?")
            .initial_value(true)
            .interact()?;

    Ok(Some(DatabaseSettings {
        dialect,
        name,
        host,
        port,
        username,
        password,
        check_connection,
    }))
}

fn prompt_redis() -> Result<Option<RedisSettings>, ScaffoldError> {
    let setup: bool = cliclack::confirm("Do you want to set up Redis session storage now?")
        .initial_value(true)
        .interact()?;
    if !setup {
        return Ok(None);
    }

    let defaults = RedisSettings::default();

    let host: String = cliclack::input("What is the Redis host?")
        .default_input(&defaults.host)
        .interact()?;
    let port: u16 = cliclack::input("What is the Redis port?")
        .default_input(&defaults.port.to_string())
        .interact()?;
    let database: u8 = cliclack::input("Which Redis database index?")
        .default_input(&defaults.database.to_string())
        .interact()?;
    let check_connection: bool =
        cliclack::confirm("Would you like to check the Redis connection now?")
            .initial_value(true)
            .interact()?;

    Ok(Some(RedisSettings {
        host,
        port,
        database,
        check_connection,
    }))
}

/// Run the requested probes. Failures are warnings; the workflow continues
/// with the configuration as given.
async fn run_probes(state: &SessionState) -> Result<(), ScaffoldError> {
    if let Some(db) = &state.database {
        if db.check_connection {
            let spinner = cliclack::spinner();
            spinner.start("Checking the database connection...");
            match probe_database(db).await {
                ProbeOutcome::Ok(detail) => spinner.stop(detail),
                ProbeOutcome::Failed(detail) => {
                    spinner.stop("Database connection is not valid");
                    cliclack::log::warning(format!(
                        "{}\nThe setup will continue; check the connection afterwards.",
                        detail
                    ))?;
                }
            }
        }
    }

    if let Some(redis) = &state.redis {
        if redis.check_connection {
            let spinner = cliclack::spinner();
            spinner.start("Checking the Redis connection...");
            match probe_redis(redis).await {
                ProbeOutcome::Ok(detail) => spinner.stop(detail),
                ProbeOutcome::Failed(detail) => {
                    spinner.stop("Redis connection is not valid");
                    cliclack::log::warning(format!(
                        "{}\nThe setup will continue; check the connection afterwards.",
                        detail
                    ))?;
                }
            }
        }
    }

    Ok(())
}

fn confirm_destination(destination: &std::path::Path, args: &CreateArgs) -> Result<(), ScaffoldError> {
    if destination.is_dir() {
        if let Ok(entries) = std::fs::read_dir(destination) {
            let count = entries.count();
            if count > 0 {
                cliclack::log::warning(format!(
                    "{} has {} existing items; re-running here may overwrite files",
                    destination.display(),
                    count
                ))?;

                let proceed = if args.yes {
                    true
                } else {
                    cliclack::confirm("Continue anyway?")
                        .initial_value(false)
                        .interact()?
                };

                if !proceed {
                    return Err(ScaffoldError::Prompt(std::io::Error::other(
                        "setup cancelled",
                    )));
                }
            }
        }
    }
    Ok(())
}

async fn clone_skeleton<C: ProductConfig>(
    config: &C,
    state: &SessionState,
) -> Result<(), ScaffoldError> {
    let url = vcs::repo_url(config);
    let spinner = cliclack::spinner();
    spinner.start(format!("Cloning {} (ref '{}')...", url, state.version));

    match vcs::clone_skeleton(&url, &state.version, &state.destination()).await {
        Ok(()) => {
            spinner.stop(format!("Cloned into {}", state.folder));
            Ok(())
        }
        Err(e) => {
            spinner.stop("Clone failed");
            Err(e)
        }
    }
}

async fn materialize<C: ProductConfig>(
    config: &C,
    state: &SessionState,
) -> Result<(), ScaffoldError> {
    let destination = state.destination();

    let spinner = cliclack::spinner();
    spinner.start("Writing configuration files...");
    match templates::materialize(state, &destination).await {
        Ok(()) => spinner.stop("Configuration files written"),
        Err(e) => {
            spinner.stop("Materialization failed");
            return Err(e);
        }
    }

    if let Some(db) = &state.database {
        if db.dialect.needs_variant_files() {
            let spinner = cliclack::spinner();
            spinner.start(format!("Fetching {} variant sources...", db.dialect));
            match templates::apply_dialect_variants(config, &state.version, db.dialect, &destination)
                .await
            {
                Ok(()) => spinner.stop(format!("{} variant sources installed", db.dialect)),
                Err(e) => {
                    spinner.stop("Variant download failed");
                    return Err(e);
                }
            }
        }
    }

    Ok(())
}

fn print_banner<C: ProductConfig>(config: &C, state: &SessionState) -> Result<(), ScaffoldError> {
    let steps = config.next_steps(&state.destination());

    println!();
    println!("  Next steps");
    println!();
    for (i, step) in steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step);
    }

    cliclack::outro(format!(
        "Your {} application is ready. Happy hacking!",
        config.display_name()
    ))?;

    Ok(())
}
