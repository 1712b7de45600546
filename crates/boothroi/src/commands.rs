//! Headless subcommands: print a report, write the CSV, run a sweep

use std::io::Write;
use std::path::{Path, PathBuf};

use boothroi_core::Session;
use boothroi_core::analysis::sweep;
use boothroi_core::config::InputField;
use boothroi_core::model::{
    BenchmarkComparison, CalculatedMetrics, ExhibitorInfo, Investment, Returns,
};
use serde::Serialize;

use crate::data::export::{today, write_export};
use crate::screens::benchmarks::comparison_lines;
use crate::util::format::{
    format_count, format_currency, format_currency_cents, format_roi,
};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Report<'a> {
    investment: &'a Investment,
    returns: &'a Returns,
    metrics: CalculatedMetrics,
    industry: Option<&'a str>,
    comparison: Option<BenchmarkComparison>,
    exhibitor: &'a ExhibitorInfo,
}

/// Print the current metrics (and comparison, when an industry is selected)
pub fn report(session: &Session, json: bool, out: &mut impl Write) -> color_eyre::Result<()> {
    let metrics = session.metrics();
    let comparison = session.comparison();

    if json {
        let report = Report {
            investment: session.investment(),
            returns: session.returns(),
            metrics,
            industry: session.industry(),
            comparison,
            exhibitor: session.exhibitor(),
        };
        serde_json::to_writer_pretty(&mut *out, &report)?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(out, "{:<18}{}", "Total Investment", format_currency(metrics.total_investment))?;
    writeln!(out, "{:<18}{}", "Total Lead Value", format_currency(metrics.total_lead_value))?;
    writeln!(out, "{:<18}{}", "Net Profit", format_currency(metrics.net_profit))?;
    writeln!(out, "{:<18}{}", "ROI", format_roi(metrics.roi))?;
    writeln!(out, "{:<18}{}", "New Customers", format_count(metrics.new_customers))?;
    writeln!(out, "{:<18}{}", "Cost Per Lead", format_currency_cents(metrics.cost_per_lead))?;

    match (session.industry(), comparison) {
        (Some(industry), Some(cmp)) => {
            writeln!(out)?;
            writeln!(out, "Benchmark: {industry}")?;
            for row in comparison_lines(&cmp) {
                writeln!(
                    out,
                    "  {:<16}{:>10} vs {:>10}  {}",
                    row.label, row.actual, row.benchmark, row.delta
                )?;
            }
        }
        (Some(industry), None) => {
            writeln!(out)?;
            writeln!(out, "No benchmark data for {industry}")?;
        }
        (None, _) => {}
    }

    let exhibitor = session.exhibitor();
    for warning in [exhibitor.email_error(), exhibitor.phone_error()].into_iter().flatten() {
        writeln!(out, "Warning: {warning}")?;
    }

    Ok(())
}

/// Write today's CSV into `dir` and print where it went
pub fn export(session: &Session, dir: &Path, out: &mut impl Write) -> color_eyre::Result<PathBuf> {
    let path = write_export(dir, session, today())?;
    writeln!(out, "{}", path.display())?;
    Ok(path)
}

/// Walk one input across its range and print the metrics at each point
pub fn run_sweep(
    session: &Session,
    field: InputField,
    steps: usize,
    json: bool,
    out: &mut impl Write,
) -> color_eyre::Result<()> {
    let result = sweep(session.investment(), session.returns(), field, steps);

    if json {
        let doc = serde_json::json!({
            "field": field.key(),
            "points": result.points,
        });
        serde_json::to_writer_pretty(&mut *out, &doc)?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(
        out,
        "{:>14} {:>14} {:>10} {:>14}",
        field.label(),
        "Net Profit",
        "ROI",
        "Cost/Lead"
    )?;
    for point in &result.points {
        writeln!(
            out,
            "{:>14} {:>14} {:>10} {:>14}",
            crate::screens::calculator::slider_value_text(field, point.value),
            format_currency(point.metrics.net_profit),
            format_roi(point.metrics.roi),
            format_currency_cents(point.metrics.cost_per_lead),
        )?;
    }

    match result.first_profitable() {
        Some(point) => writeln!(
            out,
            "Break-even at {} = {}",
            field.label(),
            crate::screens::calculator::slider_value_text(field, point.value)
        )?,
        None => writeln!(out, "No profitable point in range")?,
    }

    Ok(())
}
