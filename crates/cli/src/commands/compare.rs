//! Side-by-side distributions for several profiles.

use std::io::{self, Write};

use anyhow::{Result, bail};
use barracks_content::BuiltinProfile;
use barracks_core::{Stat, SwapEngine};
use barracks_sampler::{ColumnSummary, Sampler, StatHistogram};
use clap::Parser;
use console::style;
use strum::IntoEnumIterator;

use crate::inputs::ContentArgs;
use crate::render;

/// Compare stat distributions across profiles
#[derive(Parser, Debug)]
pub struct Compare {
    /// Number of soldiers to generate per profile
    #[arg(short = 'n', long)]
    pub number: usize,

    /// Base seed shared by every profile (default: BARRACKS_SEED, else random)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Profiles to compare (default: every built-in profile)
    pub profiles: Vec<String>,

    #[command(flatten)]
    pub content: ContentArgs,
}

impl Compare {
    pub fn execute(self) -> Result<()> {
        if self.number == 0 {
            bail!("--number must be at least 1");
        }

        let names = if self.profiles.is_empty() {
            BuiltinProfile::iter()
                .map(|profile| profile.as_ref().to_string())
                .collect()
        } else {
            self.profiles.clone()
        };

        let schema = self.content.load_schema()?;
        let profiles = names
            .iter()
            .map(|name| self.content.load_profile(name))
            .collect::<Result<Vec<_>>>()?;

        let config = self.content.sampler_config(self.seed)?;
        let seed = config.resolve_seed();

        let mut columns = Vec::with_capacity(profiles.len());
        for profile in &profiles {
            let engine = SwapEngine::new(&schema, &profile.table, &profile.dice, config.engine)?;
            let matrix = Sampler::new(engine, seed)
                .with_parallel_threshold(config.parallel_threshold)
                .with_totals(true)
                .sample(self.number);

            tracing::debug!(profile = %profile.name, "sampled profile");
            columns.push((
                profile.name.as_str(),
                StatHistogram::all(&matrix, &schema),
                ColumnSummary::of_totals(&matrix),
            ));
        }

        let stdout = io::stdout();
        let mut out = stdout.lock();

        writeln!(
            out,
            "{} {} soldiers per profile, seed {}",
            style("▸").cyan().bold(),
            self.number,
            seed
        )?;
        writeln!(out)?;

        for stat in Stat::all() {
            let row: Vec<(&str, &StatHistogram)> = columns
                .iter()
                .map(|(name, histograms, _)| (*name, &histograms[stat.as_index()]))
                .collect();
            render::write_comparison(&mut out, &row)?;
        }

        writeln!(out, "{}", style("Weighted stat totals").bold().underlined())?;
        for (name, _, totals) in &columns {
            if let Some(totals) = totals {
                writeln!(
                    out,
                    "{:<12} mean {:>8.3}  std {:>8.3}  range {}..={}",
                    name, totals.mean, totals.std_dev, totals.min, totals.max
                )?;
            }
        }

        Ok(())
    }
}
