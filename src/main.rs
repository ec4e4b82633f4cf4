use clap::Parser;
use parking_cli::app::{auth_flow, dashboard, gate, signed_in_core, vehicles};
use parking_cli::domain::model::RegisterRequest;
use parking_cli::domain::ports::ConfigProvider;
use parking_cli::utils::{logger, validation::Validate};
use parking_cli::{AuthClient, CliConfig, Command, FileConfig, Result};

#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let mut config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    if let Some(path) = config.config.clone() {
        match FileConfig::from_file(&path) {
            Ok(file) => config.apply_file(&file),
            Err(e) => {
                tracing::error!("Failed to load config file {}: {}", path, e);
                eprintln!("❌ {}", e);
                std::process::exit(1);
            }
        }
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    match run(&config).await {
        Ok(output) => {
            println!("{}", output);
            Ok(())
        }
        Err(e) => {
            tracing::error!("Command failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }
}

async fn run(config: &CliConfig) -> Result<String> {
    let store = parking_cli::FileSessionStore::new(config.session_file().to_string());

    match &config.command {
        Command::Login { username, password } => {
            let auth = AuthClient::new(config.auth_url());
            auth_flow::login(&auth, &store, username, password).await
        }
        Command::Register {
            username,
            email,
            password,
            access_code,
        } => {
            let auth = AuthClient::new(config.auth_url());
            auth_flow::register(
                &auth,
                RegisterRequest {
                    username: username.clone(),
                    email: email.clone(),
                    password: password.clone(),
                    access_code: access_code.clone(),
                },
            )
            .await
        }
        Command::Logout => auth_flow::logout(&store),
        Command::Dashboard => {
            let core = signed_in_core(config, &store)?;
            let report = dashboard::load(&core).await?;
            Ok(dashboard::render(&report))
        }
        Command::Slots => {
            let core = signed_in_core(config, &store)?;
            let report = vehicles::load(&core).await?;
            Ok(vehicles::render(&report))
        }
        Command::Entry { plate } => {
            let core = signed_in_core(config, &store)?;
            gate::register_entry(&core, plate).await
        }
        Command::Exit { plate } => {
            let core = signed_in_core(config, &store)?;
            gate::register_exit(&core, plate).await
        }
    }
}
