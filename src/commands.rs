use crate::config::AppSettings;
use crate::core::mod_manager::{ModManager, StateLoad};
use crate::models::error::SError;
use crate::models::state::{ActivationState, StateKey};
use camino::Utf8PathBuf;
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{error, info, warn};

#[derive(Parser, Debug)]
#[command(name = "csf-mods", version, about = "Toggle Commandos: Strike Force mods")]
pub struct Cli {
    /// Game install folder (overrides the saved setting)
    #[arg(long, global = true)]
    pub home: Option<Utf8PathBuf>,

    /// Activation state file, relative to the install folder unless absolute
    #[arg(long, global = true)]
    pub state_file: Option<Utf8PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Restore the original files and apply the chosen mods on top
    Apply {
        #[arg(long)]
        wsfix: bool,
        #[arg(long)]
        no_ext_view: bool,
    },
    /// Start the game with whatever is currently applied
    Run,
    /// Show which mods are recorded as active
    Status {
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        /// Only print this key (cfg_orig, mod_wsfix, mod_noextv)
        key: Option<String>,
    },
    /// Stash the live config files and executable as the original set
    Snapshot,
    /// Inspect or change saved settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    Show,
    SetHome { dir: Utf8PathBuf },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

pub fn execute(cli: Cli) -> Result<(), SError> {
    let settings = AppSettings::load().unwrap_or_else(|e| {
        warn!("settings unreadable, using defaults: {e}");
        AppSettings::default()
    });

    if let Command::Config { action } = &cli.command {
        return config_command(settings, action);
    }

    let home = cli.home.unwrap_or(settings.home);
    let state_file = cli.state_file.or(settings.state_file);
    let mut manager = ModManager::new(home, state_file.as_deref());

    if let StateLoad::Defaulted(e) = manager.load_state() {
        eprintln!("Know nothing of current cfg ({e}). Can change it though.");
    }

    match cli.command {
        Command::Apply { wsfix, no_ext_view } => {
            if !manager.needs_apply(wsfix, no_ext_view) {
                info!("requested mods already recorded as active, re-applying");
            }
            match manager.apply(wsfix, no_ext_view) {
                Ok(outcome) => {
                    println!("{outcome}");
                    Ok(())
                }
                Err(e) => {
                    if e.may_be_inconsistent() {
                        error!("config environment may be inconsistent");
                    }
                    Err(e)
                }
            }
        }
        Command::Run => {
            manager.run_game()?;
            Ok(())
        }
        Command::Status { format, key } => {
            let state = manager.state();
            let key = key.map(|raw| raw.parse::<StateKey>()).transpose()?;
            println!("{}", render_state(&state, key, format)?);
            Ok(())
        }
        Command::Snapshot => {
            let count = manager.snapshot_original()?;
            println!("Stashed {count} original file(s).");
            Ok(())
        }
        Command::Config { .. } => Ok(()),
    }
}

/// Renders the whole state, or a single key when one is given.
fn render_state(
    state: &ActivationState,
    key: Option<StateKey>,
    format: OutputFormat,
) -> Result<String, SError> {
    let rendered = match (format, key) {
        (OutputFormat::Text, Some(key)) => u8::from(state.get(key)).to_string(),
        (OutputFormat::Text, None) => StateKey::ALL
            .iter()
            .map(|&key| format!("{:<10} {}", key.to_string(), u8::from(state.get(key))))
            .collect::<Vec<_>>()
            .join("\n"),
        (OutputFormat::Json, Some(key)) => {
            serde_json::json!({ (key.to_string()): state.get(key) }).to_string()
        }
        (OutputFormat::Json, None) => serde_json::to_string_pretty(state)
            .map_err(|e| SError::ParseError(e.to_string()))?,
    };
    Ok(rendered)
}

fn config_command(mut settings: AppSettings, action: &ConfigAction) -> Result<(), SError> {
    match action {
        ConfigAction::Show => {
            if let Ok(path) = AppSettings::location() {
                println!("# {}", path.display());
            }
            println!("home       = {}", settings.home);
            match &settings.state_file {
                Some(path) => println!("state_file = {path}"),
                None => println!("state_file = (default)"),
            }
        }
        ConfigAction::SetHome { dir } => {
            if !dir.is_dir() {
                return Err(SError::NotFound(format!("install folder {dir}")));
            }
            settings.home = dir.clone();
            settings.save()?;
            println!("home set to {dir}");
        }
    }
    Ok(())
}
