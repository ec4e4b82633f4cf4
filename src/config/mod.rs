pub mod file;

pub use file::FileConfig;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_url, Validate};
use clap::{Parser, Subcommand};

pub const DEFAULT_AUTH_URL: &str = "http://localhost:8080/api/auth";
pub const DEFAULT_CORE_URL: &str = "http://localhost:8000/api/core";
pub const DEFAULT_SESSION_FILE: &str = ".parking-session.json";

#[derive(Debug, Parser)]
#[command(name = "parking-cli")]
#[command(about = "Console client for the parking-lot auth and core services")]
pub struct CliConfig {
    /// Base URL of the auth service
    #[arg(long, default_value = DEFAULT_AUTH_URL)]
    pub auth_url: String,

    /// Base URL of the core service
    #[arg(long, default_value = DEFAULT_CORE_URL)]
    pub core_url: String,

    /// Where the signed-in session token is stored
    #[arg(long, default_value = DEFAULT_SESSION_FILE)]
    pub session_file: String,

    /// Optional TOML config file overriding endpoints and session path
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Sign in and store the session token
    Login {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
    },
    /// Create an account (requires an access code)
    Register {
        #[arg(long)]
        username: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        access_code: String,
    },
    /// Clear the stored session
    Logout,
    /// Show occupancy KPIs and recent activity
    Dashboard,
    /// Show the slot table and recent activity
    Slots,
    /// Register a vehicle entry
    Entry { plate: String },
    /// Register a vehicle exit
    Exit { plate: String },
}

impl CliConfig {
    /// Apply values from an optional TOML config file. File values win over
    /// the built-in defaults; flags given on the command line were already
    /// parsed into the same fields, so an explicit file is the stronger
    /// source only for fields it actually sets.
    pub fn apply_file(&mut self, file: &FileConfig) {
        if let Some(services) = &file.services {
            if let Some(auth_url) = &services.auth_url {
                self.auth_url = auth_url.clone();
            }
            if let Some(core_url) = &services.core_url {
                self.core_url = core_url.clone();
            }
        }
        if let Some(session) = &file.session {
            if let Some(path) = &session.file {
                self.session_file = path.clone();
            }
        }
    }
}

impl ConfigProvider for CliConfig {
    fn auth_url(&self) -> &str {
        &self.auth_url
    }

    fn core_url(&self) -> &str {
        &self.core_url
    }

    fn session_file(&self) -> &str {
        &self.session_file
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("auth_url", &self.auth_url)?;
        validate_url("core_url", &self.core_url)?;
        validate_path("session_file", &self.session_file)?;
        Ok(())
    }
}
