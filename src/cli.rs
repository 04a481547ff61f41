use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;

pub mod commands;

use crate::config::ServeConfig;
use commands::{predict, serve, PredictOptions};

#[derive(Parser)]
#[command(name = "wavecast")]
#[command(about = "Wave height prediction page server and terminal client")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the frontend and relay /predict to the prediction service
    Serve {
        /// Bind address for the web server
        ///
        /// Format: IP:PORT (e.g., 0.0.0.0:3000, 127.0.0.1:8080)
        #[arg(short, long, env = "BIND_ADDRESS", default_value = "0.0.0.0:3000")]
        bind_address: String,

        /// Full URL of the upstream prediction endpoint
        ///
        /// The service must answer GET with a JSON body such as
        /// {"wave_height": 1.42, "recent_wave_heights": [...]} or
        /// {"error": "...", "details": "..."}.
        #[arg(short, long, env = "PREDICT_UPSTREAM_URL", default_value = "http://127.0.0.1:5000/predict")]
        upstream_url: String,

        /// Seconds to wait for the upstream before answering 502
        #[arg(long, env = "PREDICT_UPSTREAM_TIMEOUT_SECS", default_value_t = 10)]
        upstream_timeout_secs: u64,

        /// Directory with the built frontend (index.html and the wasm bundle)
        #[arg(short, long, env = "STATIC_DIR", default_value = "workspace/frontend/dist")]
        static_dir: PathBuf,
    },
    /// Request one prediction and print it
    ///
    /// Prints the status line, the recent observations and a text chart,
    /// the same regions the web page shows.
    Predict {
        /// URL of the prediction endpoint
        #[arg(short, long, env = "PREDICT_URL", default_value = "http://127.0.0.1:3000/predict")]
        url: String,

        /// Seconds to wait for a response
        #[arg(short, long, default_value_t = 10)]
        timeout_secs: u64,

        /// Do not print the recent observations
        #[arg(long)]
        no_list: bool,

        /// Do not print the chart
        #[arg(long)]
        no_chart: bool,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Commands::Serve {
                bind_address,
                upstream_url,
                upstream_timeout_secs,
                static_dir,
            } => {
                let config = ServeConfig {
                    bind_address,
                    upstream_url,
                    upstream_timeout: Duration::from_secs(upstream_timeout_secs),
                    static_dir,
                };
                serve(&config).await?;
            }
            Commands::Predict {
                url,
                timeout_secs,
                no_list,
                no_chart,
            } => {
                let options = PredictOptions {
                    url,
                    timeout: Duration::from_secs(timeout_secs),
                    show_list: !no_list,
                    show_chart: !no_chart,
                };
                predict(&options).await?;
            }
        }
        Ok(())
    }
}
