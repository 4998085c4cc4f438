// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

// Asset tooling for mods
// Run with: cargo xtask <command>

mod commands {
    pub mod assets;
    pub mod assets_config;
}
mod helpers;

use clap::{Parser, Subcommand};
use env_logger::{Builder, Env};
use helpers::*;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about = "Asset tooling for mods", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Asset accessor generation
    #[command(subcommand)]
    Assets(AssetsCommand),
}

#[derive(Subcommand)]
enum AssetsCommand {
    /// Resolve asset names and write the generated accessor class
    Generate {
        /// Path to the asset manifest
        #[arg(long, default_value = "Assets.toml")]
        manifest: PathBuf,
        /// Overrides the manifest's output directory
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },
    /// Print the resolved name of every packed asset
    Names {
        /// Path to the asset manifest
        #[arg(long, default_value = "Assets.toml")]
        manifest: PathBuf,
    },
}

fn print_banner() {
    println!("{}{}", BOLD, CYAN);
    println!("╔═══════════════════════════════════════════════════════════╗");
    println!(
        "║                    {} MODPATH {}                           ║",
        GEAR, GEAR
    );
    println!("║                  Asset Accessor Generator                 ║");
    println!("╚═══════════════════════════════════════════════════════════╝");
    println!("{}", RESET);
}

fn main() {
    Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    print_banner();

    let result = match cli.command {
        Command::Assets(AssetsCommand::Generate { manifest, out_dir }) => {
            commands::assets::generate(&manifest, out_dir).map(|_| ())
        }
        Command::Assets(AssetsCommand::Names { manifest }) => commands::assets::names(&manifest),
    };

    if let Err(e) = result {
        print_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}
