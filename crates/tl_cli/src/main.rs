//! Touchline CLI
//!
//! Inspect lineup JSON files outside the app: list catalog formations,
//! detect the formation label of a saved lineup, diff two lineups.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use tl_core::lineup::resolve_tiers;
use tl_core::{
    blank_template, compare_lineups, detect_formation, detection_ready, find_template,
    templates_for, FormationTemplate, GameFormat, LineupEntry,
};

#[derive(Parser)]
#[command(name = "touchline")]
#[command(about = "Inspect Touchline lineup data", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List formation templates for a game format
    Formations {
        /// Game format: 11v11, 9v9, 7v7 or 5v5
        #[arg(long, default_value = "11v11")]
        format: String,
    },

    /// Detect the formation label of a saved lineup
    Detect {
        /// Lineup entries JSON file
        #[arg(long)]
        r#in: PathBuf,

        /// Formation template id the lineup was built under
        #[arg(long)]
        formation: String,
    },

    /// Compare a lineup against the previous match's
    Diff {
        /// Current lineup entries JSON file
        #[arg(long)]
        current: PathBuf,

        /// Previous lineup entries JSON file
        #[arg(long)]
        previous: PathBuf,

        /// Formation id of the current lineup
        #[arg(long)]
        current_formation: String,

        /// Formation id of the previous lineup
        #[arg(long)]
        previous_formation: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Formations { format } => list_formations(&format),
        Commands::Detect { r#in, formation } => detect(&r#in, &formation),
        Commands::Diff { current, previous, current_formation, previous_formation } => {
            diff(&current, &previous, &current_formation, &previous_formation)
        }
    }
}

fn list_formations(format: &str) -> Result<()> {
    let Some(format) = GameFormat::from_id(format) else {
        bail!("unknown game format '{}' (expected 11v11, 9v9, 7v7 or 5v5)", format);
    };
    for template in templates_for(format) {
        println!("{:<14} {}", template.id, template.name);
        for slot in &template.slots {
            println!(
                "    {:<5} {:<5} ({:>5.1}, {:>5.1})",
                slot.id,
                slot.tier.short_name(),
                slot.x,
                slot.y
            );
        }
    }
    Ok(())
}

fn detect(path: &Path, formation: &str) -> Result<()> {
    let entries = load_entries(path)?;
    let template = template_or_blank(formation);
    if !detection_ready(entries.len(), template.slot_count().max(entries.len())) {
        println!(
            "lineup too incomplete to detect ({} of {} slots filled)",
            entries.len(),
            template.slot_count()
        );
        return Ok(());
    }
    let tiers: Vec<_> = resolve_tiers(&entries, &template).into_values().collect();
    println!("{}", detect_formation(&tiers));
    Ok(())
}

fn diff(
    current: &Path,
    previous: &Path,
    current_formation: &str,
    previous_formation: &str,
) -> Result<()> {
    let current_entries = load_entries(current)?;
    let previous_entries = load_entries(previous)?;
    let current_template = template_or_blank(current_formation);
    let previous_template = template_or_blank(previous_formation);

    let summary = compare_lineups(
        &current_entries,
        &previous_entries,
        &resolve_tiers(&current_entries, &current_template),
        &resolve_tiers(&previous_entries, &previous_template),
    );

    println!("total changes: {}", summary.total_changes);
    println!("spine changes: {}", summary.spine_changes);
    if let Some(message) = summary.message {
        println!("banner: {}", message);
    }
    Ok(())
}

fn load_entries(path: &Path) -> Result<Vec<LineupEntry>> {
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&data).with_context(|| format!("failed to parse {}", path.display()))
}

fn template_or_blank(id: &str) -> FormationTemplate {
    match find_template(id) {
        Some(template) => template.clone(),
        None => {
            eprintln!("warning: unknown formation '{}', treating slots as freeform", id);
            blank_template(GameFormat::ElevenASide)
        }
    }
}
