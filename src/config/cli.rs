use crate::config::StorefrontConfig;
use crate::utils::error::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "storefront")]
#[command(about = "Browse the storefront catalog, sign in and submit listings")]
pub struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Override `api.base_url`
    #[arg(long, global = true)]
    pub api_base: Option<String>,

    /// Override `site.base_url`
    #[arg(long, global = true)]
    pub site_base: Option<String>,

    /// Override `api.timeout_seconds`
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Fetch the catalog and show it, optionally filtered by category
    Listings {
        #[arg(long, default_value = "All")]
        category: String,
    },
    /// Sign in and show the menu for the resulting session
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Submit a new listing
    Submit {
        #[arg(long)]
        title: String,
        #[arg(long)]
        price: String,
        #[arg(long, default_value = "Art")]
        category: String,
        #[arg(long, default_value = "")]
        description: String,
    },
}

impl Cli {
    /// 載入配置檔 (若有) 並套用命令列覆蓋設定
    pub fn load_config(&self) -> Result<StorefrontConfig> {
        let mut config = match &self.config {
            Some(path) => StorefrontConfig::from_file(path)?,
            None => StorefrontConfig::default(),
        };

        if let Some(api_base) = &self.api_base {
            config.api.base_url = api_base.clone();
        }
        if let Some(site_base) = &self.site_base {
            config.site.base_url = site_base.clone();
        }
        if let Some(timeout) = self.timeout {
            config.api.timeout_seconds = timeout;
        }

        Ok(config)
    }
}
