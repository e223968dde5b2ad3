use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use myprobe::{Probe, ProbeConfig};

/// Try to open one connection to a MySQL server and report the outcome.
#[derive(Parser, Debug)]
#[command(name = "myprobe", version, about, long_about = None)]
struct Cli {
    /// TOML file with connection settings
    #[arg(short, long, env = "MYPROBE_CONFIG")]
    config: Option<PathBuf>,

    /// Server host name or address
    #[arg(long, env = "MYSQL_HOST")]
    host: Option<String>,

    /// Server port
    #[arg(long, env = "MYSQL_PORT")]
    port: Option<u16>,

    /// Database name
    #[arg(long, env = "MYSQL_DATABASE")]
    database: Option<String>,

    /// Connection character set
    #[arg(long, env = "MYSQL_CHARSET")]
    charset: Option<String>,

    /// User name
    #[arg(short, long, env = "MYSQL_USER")]
    user: Option<String>,

    /// Password
    #[arg(short, long, env = "MYSQL_PASSWORD", hide_env_values = true)]
    password: Option<String>,
}

impl Cli {
    fn resolve_config(self) -> anyhow::Result<ProbeConfig> {
        let mut config = match &self.config {
            Some(path) => ProbeConfig::load(path)
                .with_context(|| format!("reading {}", path.display()))?,
            None => ProbeConfig::default(),
        };

        if let Some(host) = self.host {
            config.host = host;
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(database) = self.database {
            config.database = database;
        }
        if let Some(charset) = self.charset {
            config.charset = charset;
        }
        if let Some(user) = self.user {
            config.username = user;
        }
        if let Some(password) = self.password {
            config.password = password;
        }

        Ok(config)
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries only the outcome line.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Cli::parse().resolve_config()?;
    let outcome = Probe::new().run(&config).await;
    println!("{}", outcome);

    Ok(())
}
