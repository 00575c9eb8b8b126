use std::fs;

use anyhow::Context;
use chardiff_core::{compute, Change, ChangeStatus, DiffResult, DiffStats};
use colored::Colorize;
use tracing::debug;

use crate::cli::*;
use crate::config::RenderConfig;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let config = resolve_config(&cli)?;
    match cli.command {
        Command::Diff(args) => cmd_diff(args, &cli.format, &config),
        Command::Stats(args) => cmd_stats(args, &cli.format),
    }
}

/// The render config file, with `--no-color` applied on top.
fn resolve_config(cli: &Cli) -> anyhow::Result<RenderConfig> {
    let mut config = RenderConfig::load(cli.config.as_deref())?;
    if cli.no_color {
        config.color = false;
    }
    Ok(config)
}

fn cmd_diff(args: InputArgs, format: &OutputFormat, config: &RenderConfig) -> anyhow::Result<()> {
    let result = diff_inputs(&args)?;
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
        OutputFormat::Text => {
            println!("{}", render_diff(&result, config));
            if config.show_stats {
                println!("{}", summary_line(&result.stats()));
            }
        }
    }
    Ok(())
}

fn cmd_stats(args: InputArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let stats = diff_inputs(&args)?.stats();
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&stats)?),
        OutputFormat::Text => print!("{}", render_stats(&stats)),
    }
    Ok(())
}

fn diff_inputs(args: &InputArgs) -> anyhow::Result<DiffResult> {
    let (old, new) = load_inputs(args)?;
    let result = compute(&old, &new);
    debug!(runs = result.len(), "computed diff");
    Ok(result)
}

/// The two sides as given, or the contents of the named files.
fn load_inputs(args: &InputArgs) -> anyhow::Result<(String, String)> {
    if !args.files {
        return Ok((args.old.clone(), args.new.clone()));
    }
    let old = fs::read_to_string(&args.old).with_context(|| format!("reading {}", args.old))?;
    let new = fs::read_to_string(&args.new).with_context(|| format!("reading {}", args.new))?;
    Ok((old, new))
}

fn render_diff(result: &DiffResult, config: &RenderConfig) -> String {
    result
        .iter()
        .map(|change| render_change(change, config))
        .collect()
}

fn render_change(change: &Change, config: &RenderConfig) -> String {
    let text = if config.use_markers() {
        change.to_string()
    } else {
        change.text().to_string()
    };
    if !config.color {
        return text;
    }
    match change.status() {
        ChangeStatus::Removed => text.red().strikethrough().to_string(),
        ChangeStatus::Added => text.green().underline().to_string(),
        ChangeStatus::Unchanged => text,
    }
}

fn summary_line(stats: &DiffStats) -> String {
    format!(
        "{} unchanged, {} removed, {} added ({:.1}% similar)",
        stats.unchanged,
        stats.removed,
        stats.added,
        stats.similarity * 100.0
    )
}

fn render_stats(stats: &DiffStats) -> String {
    format!(
        "runs:       {}\nunchanged:  {}\nremoved:    {}\nadded:      {}\nsimilarity: {:.1}%\n",
        stats.runs,
        stats.unchanged,
        stats.removed,
        stats.added,
        stats.similarity * 100.0
    )
}
