//! Generate one batch and report its distributions.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Result, bail};
use barracks_core::{DiceSpec, SwapEngine};
use barracks_sampler::{Sampler, StatHistogram, TotalsHistogram};
use clap::Parser;
use clap::builder::RangedU64ValueParser;

use crate::inputs::{ContentArgs, load_table_override};
use crate::render::{self, NamedSummary, OutputFormat, SampleReport};

/// Generate soldiers and show per-stat distributions
#[derive(Parser, Debug)]
pub struct Sample {
    /// Number of soldiers to generate
    #[arg(short = 'n', long)]
    pub number: usize,

    /// Generation profile (lwotc, ancev1, or one from --data)
    #[arg(short, long, default_value = "lwotc")]
    pub profile: String,

    /// Dice for each soldier's roll budget, e.g. 5d4 (default: the profile's)
    #[arg(long, value_name = "NdX")]
    pub rolls: Option<DiceSpec>,

    /// Swap table RON file replacing the profile's table
    #[arg(long, value_name = "FILE")]
    pub table: Option<PathBuf>,

    /// Also report weighted stat totals
    #[arg(long)]
    pub totals: bool,

    /// Number of bins for the weighted totals histogram
    #[arg(
        long,
        default_value_t = TotalsHistogram::DEFAULT_BINS,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..)
    )]
    pub bins: usize,

    /// Base seed (default: BARRACKS_SEED, else random)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output format
    #[arg(long, value_enum, default_value_t)]
    pub format: OutputFormat,

    #[command(flatten)]
    pub content: ContentArgs,
}

impl Sample {
    pub fn execute(self) -> Result<()> {
        if self.number == 0 {
            bail!("--number must be at least 1");
        }

        let schema = self.content.load_schema()?;
        let mut profile = self.content.load_profile(&self.profile)?;
        if let Some(dice) = self.rolls {
            profile = profile.with_dice(dice);
        }
        let profile = load_table_override(profile, self.table.as_ref())?;

        let config = self.content.sampler_config(self.seed)?;
        let engine = SwapEngine::new(&schema, &profile.table, &profile.dice, config.engine)?;
        let sampler = Sampler::from_config(engine, &config).with_totals(self.totals);

        tracing::info!(
            profile = %profile.name,
            dice = %profile.dice,
            count = self.number,
            format = %self.format,
            "sampling soldiers"
        );
        let matrix = sampler.sample(self.number);

        let stdout = io::stdout();
        let mut out = stdout.lock();

        if self.format == OutputFormat::Csv {
            return render::write_csv(&mut out, &matrix);
        }

        let report = SampleReport {
            profile: &profile.name,
            table: profile.table.name(),
            rules: profile.table.len(),
            dice: profile.dice.to_string(),
            seed: sampler.base_seed(),
            count: matrix.len(),
            generation: matrix.report(),
            summaries: NamedSummary::all(&matrix),
            histograms: StatHistogram::all(&matrix, &schema),
            totals: matrix
                .totals()
                .and_then(|totals| TotalsHistogram::new(totals, self.bins)),
        };

        match self.format {
            OutputFormat::Json => {
                render::write_json(&mut out, &report)?;
                writeln!(out)?;
            }
            _ => {
                render::write_header(&mut out, &report)?;
                for histogram in &report.histograms {
                    render::write_histogram(&mut out, histogram)?;
                }
                if let Some(totals) = &report.totals {
                    render::write_totals(&mut out, totals)?;
                }
                render::write_summary(&mut out, &report.summaries)?;
            }
        }

        Ok(())
    }
}
