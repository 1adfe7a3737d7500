use clap::ArgMatches;
use colored::*;

use crate::cli_context::CliContext;
use crate::config::{load_config, save_config};
use crate::error::{ErrorContext, StaffError, StaffResult};

pub async fn handle_config(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    handle_config_impl(matches)
        .await
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error>)
}

async fn handle_config_impl(matches: &ArgMatches) -> StaffResult<()> {
    let mut context = CliContext::load().context("Failed to load CLI context")?;
    let mut changed = false;

    if let Some(base_url) = matches.get_one::<String>("base-url") {
        context.set_base_url(base_url.clone())?;
        changed = true;
    }

    if let Some(department) = matches.get_one::<String>("department") {
        let mut config = load_config();
        config.default_department = Some(department.clone());
        save_config(&config).map_err(|e| StaffError::ConfigError(e.to_string()))?;
        changed = true;
    }

    if changed {
        println!("{} Configuration saved.", "✓".green());
    }

    if matches.get_flag("show") || !changed {
        println!("{}: {}", "Base URL".bold(), context.base_url());
        println!(
            "{}: {}",
            "Default department".bold(),
            context
                .default_department()
                .as_deref()
                .unwrap_or("(not configured)")
        );
    }

    Ok(())
}
