//! Command-line front end for the LDBN data-access layer.
//!
//! # Responsibility
//! - Assemble configuration from flags, environment and an optional JSON file.
//! - Open the store once and run a single read or delete command.
//! - Print results as pretty JSON on stdout.
//!
//! Exit codes: `0` success, `1` store or command failure, `2` not found.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use ldbn_core::db::schema::init_schema;
use ldbn_core::{
    core_version, init_logging, open_db_with, AssignmentService, ConfigOverrides, DalConfig,
    ServiceError, SqliteAssignmentRepository, SqliteCommentRepository, SqliteUserRepository,
    UserService,
};
use log::{error, info};
use serde_json::Value;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "ldbn", about = "Query the LDBN assignment store", version)]
struct Cli {
    /// JSON config file; flags and environment override its values
    #[arg(long, env = "LDBN_CONFIG")]
    config: Option<PathBuf>,
    /// SQLite database file
    #[arg(long, env = "LDBN_DB_PATH")]
    db: Option<PathBuf>,
    #[arg(long, env = "LDBN_LOG_LEVEL")]
    log_level: Option<String>,
    /// Absolute directory for rolling log files (stderr when unset)
    #[arg(long, env = "LDBN_LOG_DIR")]
    log_dir: Option<PathBuf>,
    /// Enforce foreign-key constraints on the store connection
    #[arg(long, env = "LDBN_FOREIGN_KEYS")]
    foreign_keys: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create missing tables in the database
    InitSchema,
    /// List users
    Users {
        #[arg(long)]
        active: bool,
    },
    /// Show one user
    User { id: i64 },
    /// List assignments with their authors
    Assignments {
        /// Also load the XML payload of every assignment
        #[arg(long)]
        with_xml: bool,
    },
    /// Show one assignment with its comments
    Assignment { id: i64 },
    /// List the comments of an assignment
    Comments { assignment_id: i64 },
    /// Delete an assignment; deleting a missing id is not an error
    DeleteAssignment { id: i64 },
}

enum Outcome {
    Printed,
    NotFound(String),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("ldbn: {err:#}");
            return ExitCode::from(1);
        }
    };

    if let Err(err) = init_logging(&config.log_level, config.log_dir.as_deref()) {
        eprintln!("ldbn: logging disabled: {err}");
    }
    info!(
        "event=cli_start module=cli status=ok core_version={}",
        core_version()
    );

    match run(&config, cli.command) {
        Ok(Outcome::Printed) => ExitCode::SUCCESS,
        Ok(Outcome::NotFound(message)) => {
            eprintln!("ldbn: {message}");
            ExitCode::from(2)
        }
        Err(err) => {
            error!("event=cli_command module=cli status=error error={err:#}");
            eprintln!("ldbn: {err:#}");
            ExitCode::from(1)
        }
    }
}

fn load_config(cli: &Cli) -> Result<DalConfig> {
    let base = match cli.config.as_ref() {
        Some(path) => DalConfig::from_file(path)?,
        None => DalConfig::default(),
    };
    let config = base.with_overrides(ConfigOverrides {
        db_path: cli.db.clone(),
        log_level: cli.log_level.clone(),
        log_dir: cli.log_dir.clone(),
        foreign_keys: cli.foreign_keys.then_some(true),
    })?;
    Ok(config)
}

fn run(config: &DalConfig, command: Command) -> Result<Outcome> {
    let conn = open_db_with(&config.db_path, config.open_options())
        .with_context(|| format!("cannot open store `{}`", config.db_path.display()))?;

    let users = UserService::new(SqliteUserRepository::new(&conn));
    let assignments = AssignmentService::new(
        SqliteAssignmentRepository::new(&conn),
        SqliteCommentRepository::new(&conn),
    );

    let value = match command {
        Command::InitSchema => {
            init_schema(&conn)?;
            serde_json::json!({ "schema": "ok" })
        }
        Command::Users { active } => serde_json::to_value(users.list_users(active)?)?,
        Command::User { id } => match users.get_user(id)? {
            Some(user) => serde_json::to_value(user)?,
            None => return Ok(Outcome::NotFound(format!("user {id} not found"))),
        },
        Command::Assignments { with_xml } => {
            serde_json::to_value(assignments.list_assignments(with_xml)?)?
        }
        Command::Assignment { id } => match assignments.get_assignment_detail(id) {
            Ok(detail) => serde_json::to_value(detail)?,
            Err(err @ ServiceError::NotFound { .. }) => {
                return Ok(Outcome::NotFound(err.to_string()))
            }
            Err(err) => return Err(err.into()),
        },
        Command::Comments { assignment_id } => {
            serde_json::to_value(assignments.list_comments(assignment_id)?)?
        }
        Command::DeleteAssignment { id } => {
            assignments.delete_assignment(id)?;
            serde_json::json!({ "deleted": id })
        }
    };

    print_json(&value)?;
    Ok(Outcome::Printed)
}

fn print_json(value: &Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
