// smt-rs: SCS Workshop Mod Toggler
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Logging --> Command Dispatch
//!   (interactive) | List | Enable | Disable | Options | Configs | Version
//! ```

use std::process::ExitCode;

use smt_rs::cli::global::GlobalOptions;
use smt_rs::cli::{self, Command};
use smt_rs::cmd::interactive::run_interactive_command;
use smt_rs::cmd::list::run_list_command;
use smt_rs::cmd::options::{run_configs_command, run_options_command};
use smt_rs::cmd::set::run_set_command;
use smt_rs::config::Config;
use smt_rs::config::loader::ConfigLoader;
use smt_rs::error::ConfigError;
use smt_rs::logging::init_logging;
use smt_rs::logging::{LogConfig, LogLevel};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> ExitCode {
    let cli = cli::parse();

    let log_config = build_log_config(&cli.global);
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    dispatch_command(&cli)
}

fn build_log_config(global: &GlobalOptions) -> LogConfig {
    let console_level = global
        .log_level
        .and_then(LogLevel::from_u8)
        .unwrap_or(LogLevel::INFO);

    let file_level = global
        .file_log_level
        .and_then(LogLevel::from_u8)
        .unwrap_or(console_level);

    LogConfig::builder()
        .with_console_level(console_level)
        .with_file_level(file_level)
        .maybe_with_log_file(global.log_file.as_ref().map(|p| p.display().to_string()))
        .build()
}

fn dispatch_command(cli: &cli::Cli) -> ExitCode {
    let result = match &cli.command {
        Some(Command::Version) => {
            handle_version_command();
            Ok(())
        }
        Some(Command::Options) => {
            load_config(&cli.global).map(|config| run_options_command(&config))
        }
        Some(Command::Configs) => {
            let loader = build_config_loader(&cli.global);
            run_configs_command(&loader.format_loaded_files());
            Ok(())
        }
        Some(Command::List) => load_config(&cli.global).and_then(|config| run_list_command(&config)),
        Some(Command::Enable(args)) => {
            load_config(&cli.global).and_then(|config| run_set_command(args, &config, true))
        }
        Some(Command::Disable(args)) => {
            load_config(&cli.global).and_then(|config| run_set_command(args, &config, false))
        }
        None => load_config(&cli.global).and_then(|config| run_interactive_command(&config)),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn handle_version_command() {
    println!("{}", env!("CARGO_PKG_VERSION"));
}

fn build_config_loader(global: &GlobalOptions) -> ConfigLoader {
    let mut loader = ConfigLoader::new().add_toml_file_optional("smt.toml");
    for config_path in &global.configs {
        loader = loader.add_toml_file(config_path);
    }
    loader.with_env_prefix("SMT")
}

fn load_config(global: &GlobalOptions) -> smt_rs::error::Result<Config> {
    for config_path in &global.configs {
        if !config_path.exists() {
            return Err(ConfigError::NotFound(config_path.display().to_string()).into());
        }
    }

    let mut loader = build_config_loader(global);
    for (key, value) in global.to_config_overrides() {
        loader = loader.set(&key, value)?;
    }

    loader.build().map_err(|e| {
        eprintln!("Failed to load config: {e}");
        e
    })
}
