//! Text, CSV and JSON output.

use std::io::Write;

use anyhow::Result;
use barracks_core::GenerationReport;
use barracks_sampler::{ColumnSummary, SampleMatrix, StatHistogram, TotalsHistogram};
use console::style;
use serde::Serialize;

/// Width of the longest histogram bar, in characters.
const BAR_WIDTH: usize = 40;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum OutputFormat {
    /// Histograms and a summary table
    #[default]
    Text,
    /// One row per soldier
    Csv,
    /// Summaries and histograms as a JSON document
    Json,
}

/// Everything a `sample` run reports, in serializable form.
#[derive(Debug, Serialize)]
pub struct SampleReport<'a> {
    pub profile: &'a str,
    pub table: &'a str,
    pub rules: usize,
    pub dice: String,
    pub seed: u64,
    pub count: usize,
    pub generation: GenerationReport,
    pub summaries: Vec<NamedSummary>,
    pub histograms: Vec<StatHistogram>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub totals: Option<TotalsHistogram>,
}

#[derive(Debug, Serialize)]
pub struct NamedSummary {
    pub column: &'static str,
    #[serde(flatten)]
    pub summary: ColumnSummary,
}

impl NamedSummary {
    pub fn all(matrix: &SampleMatrix) -> Vec<Self> {
        ColumnSummary::all(matrix)
            .into_iter()
            .map(|(column, summary)| Self { column, summary })
            .collect()
    }
}

/// Header line, run parameters and generation counters.
pub fn write_header(out: &mut impl Write, report: &SampleReport<'_>) -> Result<()> {
    writeln!(
        out,
        "{} {} soldiers, profile {}, table {} ({} rules), dice {}, seed {}",
        style("▸").cyan().bold(),
        report.count,
        style(report.profile).bold(),
        report.table,
        report.rules,
        report.dice,
        report.seed,
    )?;

    let generation = &report.generation;
    if generation.abandoned > 0 {
        writeln!(
            out,
            "  {} of {} rolls abandoned after reaching the retry ceiling",
            style(generation.abandoned).yellow(),
            generation.roll_budget,
        )?;
    }
    writeln!(out)?;
    Ok(())
}

/// One stat's histogram as horizontal bars, scaled to the tallest bucket.
pub fn write_histogram(out: &mut impl Write, histogram: &StatHistogram) -> Result<()> {
    writeln!(
        out,
        "{} {}..={}",
        style(histogram.stat).bold().underlined(),
        histogram.min_value,
        histogram.max_value(),
    )?;

    let tallest = histogram.counts.iter().copied().max().unwrap_or(0);
    let frequencies = histogram.frequencies();
    for ((value, count), frequency) in histogram.buckets().zip(frequencies) {
        writeln!(
            out,
            "{:>5} │{:<width$} {:>6.2}%",
            value,
            bar(count, tallest),
            frequency * 100.0,
            width = BAR_WIDTH,
        )?;
    }
    writeln!(out)?;
    Ok(())
}

pub fn write_totals(out: &mut impl Write, totals: &TotalsHistogram) -> Result<()> {
    writeln!(out, "{}", style("Weighted stat totals").bold().underlined())?;

    let tallest = totals.counts.iter().copied().max().unwrap_or(0);
    let count = totals.total().max(1);
    for (lower, upper, bin) in totals.bins() {
        writeln!(
            out,
            "{:>8.1}..{:<8.1} │{:<width$} {:>6.2}%",
            lower,
            upper,
            bar(bin, tallest),
            bin as f64 / count as f64 * 100.0,
            width = BAR_WIDTH,
        )?;
    }
    writeln!(out)?;
    Ok(())
}

pub fn write_summary(out: &mut impl Write, summaries: &[NamedSummary]) -> Result<()> {
    writeln!(
        out,
        "{}",
        style(format!(
            "{:<14} {:>9} {:>9} {:>9} {:>9}",
            "column", "mean", "std", "min", "max"
        ))
        .bold()
    )?;
    for NamedSummary { column, summary } in summaries {
        writeln!(
            out,
            "{:<14} {:>9.3} {:>9.3} {:>9} {:>9}",
            column, summary.mean, summary.std_dev, summary.min, summary.max
        )?;
    }
    Ok(())
}

/// The raw matrix: a header row, then one record per soldier.
pub fn write_csv(out: impl Write, matrix: &SampleMatrix) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(matrix.headers())?;

    for (index, row) in matrix.rows().iter().enumerate() {
        let mut record: Vec<String> = row.values().iter().map(i32::to_string).collect();
        if let Some(total) = matrix.totals().and_then(|totals| totals.get(index)) {
            record.push(total.to_string());
        }
        writer.write_record(&record)?;
    }

    writer.flush()?;
    Ok(())
}

pub fn write_json(out: impl Write, report: &SampleReport<'_>) -> Result<()> {
    serde_json::to_writer_pretty(out, report)?;
    Ok(())
}

/// Side-by-side frequency table for one stat across several profiles.
pub fn write_comparison(out: &mut impl Write, columns: &[(&str, &StatHistogram)]) -> Result<()> {
    let Some((_, first)) = columns.first() else {
        return Ok(());
    };

    write!(out, "{:<12}", style(first.stat).bold().underlined())?;
    for (name, _) in columns {
        write!(out, " {:>10}", style(name).bold())?;
    }
    writeln!(out)?;

    let frequencies: Vec<Vec<f64>> = columns.iter().map(|(_, h)| h.frequencies()).collect();
    for (bucket, (value, _)) in first.buckets().enumerate() {
        write!(out, "{:>12}", value)?;
        for column in &frequencies {
            let frequency = column.get(bucket).copied().unwrap_or(0.0);
            write!(out, " {:>9.2}%", frequency * 100.0)?;
        }
        writeln!(out)?;
    }
    writeln!(out)?;
    Ok(())
}

fn bar(count: u64, tallest: u64) -> String {
    if tallest == 0 {
        return String::new();
    }
    let length = (count as f64 / tallest as f64 * BAR_WIDTH as f64).round() as usize;
    "█".repeat(length)
}
