mod commands;
pub mod config;
pub mod error;
pub mod logging;
mod utils;


use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use tracing::info;

use crate::board::PlankaClient;
use crate::cards::AddCards;
use crate::cli::commands::CommandOutput;
use crate::cli::config::{Config, ConfigOverrides};
use crate::cli::error::{CliError, CliResult};
use crate::tags::RandomColours;

#[derive(Parser)]
#[command(name = "plankacli")]
#[command(author, version, about = "Bulk card, label and list operations on a Planka board", long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Config file (default: $XDG_CONFIG_HOME/plankacli/config.yaml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// URL of the Planka instance (default: PLANKA_URL env)
    #[arg(short, long, global = true)]
    pub url: Option<String>,

    /// Access token, optionally accessToken:httpOnlyToken (default: PLANKA_TOKEN env)
    #[arg(short, long, global = true)]
    pub token: Option<String>,

    /// Name of the project to work on (default: PLANKA_PROJECT env)
    #[arg(short, long, global = true)]
    pub project: Option<String>,

    /// Name of the board to work on (default: PLANKA_BOARD env)
    #[arg(short, long, global = true)]
    pub board: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Card commands
    Card {
        #[command(subcommand)]
        command: CardCommands,
    },
    /// Label commands
    Label {
        #[command(subcommand)]
        command: LabelCommands,
    },
    /// List commands
    List {
        #[command(subcommand)]
        command: ListCommands,
    },
}

#[derive(Subcommand)]
enum CardCommands {
    /// Add named cards to a list
    Add {
        /// Name of the list to add cards to
        #[arg(short, long)]
        list: String,
        /// Position of the new cards in the list
        #[arg(long, default_value_t = 0.0)]
        position: f64,
        /// Due date (YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS, UTC)
        #[arg(short, long)]
        due_date: Option<String>,
        /// Label to add, as name or name:colour (repeatable)
        #[arg(long = "label", value_name = "TAG")]
        labels: Vec<String>,
        /// User to make a card member, by name or username (repeatable)
        #[arg(long = "user", value_name = "NAME")]
        users: Vec<String>,
        /// Names of the cards to create
        #[arg(required = true)]
        names: Vec<String>,
    },
    /// Delete cards by id
    Delete {
        /// Card ids
        #[arg(required = true)]
        ids: Vec<String>,
    },
}

#[derive(Subcommand)]
enum LabelCommands {
    /// Delete labels by name (every label on the board when none are given)
    Delete {
        /// Skip the confirmation prompt when deleting every label
        #[arg(short, long)]
        yes: bool,
        /// Label names
        names: Vec<String>,
    },
    /// Print the label colours Planka accepts
    Colours,
}

#[derive(Subcommand)]
enum ListCommands {
    /// Delete the cards of lists
    Clear {
        /// Only delete cards carrying this label (repeatable)
        #[arg(long = "tag", value_name = "LABEL")]
        tags: Vec<String>,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
        /// Names of the lists to clear
        #[arg(required = true)]
        lists: Vec<String>,
    },
}

/// Prompt for commands that delete more than the operator named explicitly.
fn confirm_destructive(command: &Commands) -> CliResult<()> {
    let prompt = match command {
        Commands::List {
            command: ListCommands::Clear { yes: false, .. },
        } => "Are you sure you want to clear the specified lists?",
        Commands::Label {
            command: LabelCommands::Delete { yes: false, names },
        } if names.is_empty() => "Delete every label on the board?",
        _ => return Ok(()),
    };

    if utils::confirm(prompt)? {
        Ok(())
    } else {
        Err(CliError::Aborted)
    }
}

pub async fn run() -> CliResult<()> {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose, cli.quiet);

    if let Commands::Label {
        command: LabelCommands::Colours,
    } = &cli.command
    {
        println!("{}", commands::label::list_colours());
        return Ok(());
    }

    let config = Config::load(ConfigOverrides {
        config_path: cli.config,
        url: cli.url,
        token: cli.token,
        project: cli.project,
        board: cli.board,
    })?;

    // Reject bad input before prompting or touching the server
    let due_date = match &cli.command {
        Commands::Card {
            command: CardCommands::Add {
                due_date: Some(d), ..
            },
        } => Some(utils::parse_due_date(d)?),
        _ => None,
    };

    confirm_destructive(&cli.command)?;

    let board = PlankaClient::new(&config.url, &config.token)?
        .open_board(&config.project, &config.board)
        .await?;
    info!(project = %config.project, board = %config.board, "opened board");

    let output: CommandOutput = match cli.command {
        Commands::Card { command } => match command {
            CardCommands::Add {
                list,
                position,
                labels,
                users,
                names,
                ..
            } => {
                let request = AddCards {
                    list_name: list,
                    position,
                    due_date,
                    tags: labels,
                    users,
                };
                commands::card::add_cards(&board, RandomColours::from_entropy(), &request, &names)
                    .await?
            }
            CardCommands::Delete { ids } => commands::card::delete_cards(&board, &ids).await?,
        },
        Commands::Label { command } => match command {
            LabelCommands::Delete { names, .. } => {
                commands::label::delete_labels(&board, &names).await?
            }
            LabelCommands::Colours => CommandOutput {
                text: commands::label::list_colours(),
                failed: 0,
            },
        },
        Commands::List { command } => match command {
            ListCommands::Clear { tags, lists, .. } => {
                commands::list::clear_lists(&board, &lists, &tags).await?
            }
        },
    };

    println!("{}", output.text);

    if output.failed > 0 {
        Err(CliError::PartialFailure {
            failed: output.failed,
        })
    } else {
        Ok(())
    }
}
