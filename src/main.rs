use anyhow::Context;
use clap::Parser;
use site_billing::core::report;
use site_billing::utils::{logger, validation::Validate};
use site_billing::{CliConfig, Site};

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting site-billing");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{e}");
        std::process::exit(1);
    }

    if let Err(e) = run(&config) {
        tracing::error!("Run failed: {e:#}");
        eprintln!("{e:#}");
        std::process::exit(1);
    }
}

fn run(config: &CliConfig) -> anyhow::Result<()> {
    let mut sites = Site::load_all(&config.input_path)
        .with_context(|| format!("loading sites from {}", config.input_path))?;
    tracing::info!("Resolved {} sites", sites.len());

    if let Some(plan) = config.assign_plan {
        report::assign_plan_to_all(&mut sites, plan);
        tracing::info!("Assigned plan '{plan}' across all sites");
    }

    for site in &sites {
        println!(
            "{:<30} plan={:<8} weeks_delinquent={}",
            report::display_name(site),
            report::billing_plan(site),
            report::weeks_delinquent_in_last_year(site),
        );
    }

    let summary = report::summarize(&sites);
    println!("{}", serde_json::to_string_pretty(&summary)?);

    Ok(())
}
