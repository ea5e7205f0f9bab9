//! List generation profiles.

use std::path::PathBuf;

use anyhow::Result;
use barracks_content::{BuiltinProfile, ContentFactory};
use clap::Parser;
use console::style;
use strum::IntoEnumIterator;

/// List available generation profiles
#[derive(Parser, Debug)]
pub struct Profiles {
    /// Also list profiles from this data directory's profiles.toml
    #[arg(long, value_name = "DIR")]
    pub data: Option<PathBuf>,
}

impl Profiles {
    pub fn execute(self) -> Result<()> {
        println!("{}", style("Built-in profiles").bold());
        for profile in BuiltinProfile::iter() {
            let (count, sides) = profile.dice();
            println!(
                "  {:<10} {:>2}d{:<3} {:>3} rules  {}",
                style(profile).cyan(),
                count,
                sides,
                profile.rules().len(),
                style(profile.description()).dim()
            );
        }

        if let Some(dir) = &self.data {
            let factory = ContentFactory::new(dir);
            let specs = factory.load_profile_specs()?;

            println!();
            println!("{} {}", style("Profiles in").bold(), dir.display());
            if specs.is_empty() {
                println!("  {}", style("none").dim());
            }
            for spec in specs {
                println!(
                    "  {:<10} {:>6} table {:<10} {}",
                    style(&spec.name).cyan(),
                    spec.dice.to_string(),
                    spec.table,
                    style(spec.description.unwrap_or_default()).dim()
                );
            }
        }

        Ok(())
    }
}
