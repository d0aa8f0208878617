use crate::core::registry::BillingPlan;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "site-billing")]
#[command(about = "Resolve site customers and report billing status")]
pub struct CliConfig {
    /// JSON file holding the array of sites to resolve
    #[arg(long, default_value = "./sites.json")]
    pub input_path: String,

    /// Assign this plan to every resolved customer before reporting
    #[arg(long)]
    pub assign_plan: Option<BillingPlan>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input_path", &self.input_path)?;
        Ok(())
    }
}
