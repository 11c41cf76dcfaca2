//! Command execution logic.
//!
//! This module contains the implementation of all CLI commands.

use anyhow::Result;

use super::args::{FamiliesArgs, InfoArgs, InitArgs, OrphansArgs, TreeArgs};
use crate::app::App;
use crate::domain::FamilyId;
use crate::family::FamilyTree;
use crate::output::{self, FamilySummary, OrphanReport, OutputMode};

/// Execute the init command
pub async fn execute_init(args: &InitArgs) -> Result<()> {
    use crate::commands::init;

    let current_dir = std::env::current_dir()?;

    if !args.quiet {
        println!(
            "Initializing tabletop catalog{}...",
            args.name
                .as_ref()
                .map(|n| format!(" '{}'", n))
                .unwrap_or_default()
        );
    }

    let result = init::init(&current_dir, args.name.as_deref()).await?;

    if !args.quiet {
        println!("Initialized tabletop in {}", result.tabletop_dir.display());
        println!("  Config:    {}", result.config_file.display());
        println!("  Games:     {}", result.data.games.display());
        println!("  Families:  {}", result.data.families.display());
        println!("  Relations: {}", result.data.relations.display());
        println!("  Catalog name: {}", result.catalog_name);
    }

    Ok(())
}

/// Execute the info command
pub async fn execute_info(app: &App, _args: &InfoArgs, output_mode: OutputMode) -> Result<()> {
    let counts = app.catalog().counts().await?;
    let paths = app.data_paths();
    let name = &app.config().catalog_name;
    let warnings = app.warnings().len();

    match output_mode {
        OutputMode::Json => {
            output::print_json(&serde_json::json!({
                "catalog_name": name,
                "data": {
                    "games": paths.games.display().to_string(),
                    "families": paths.families.display().to_string(),
                    "relations": paths.relations.display().to_string(),
                },
                "counts": counts,
                "load_warnings": warnings,
            }))?;
        }
        OutputMode::Text => {
            println!("Tabletop Catalog Information");
            println!("============================");
            println!();
            println!("Catalog name: {}", name);
            println!("Games:        {}", paths.games.display());
            println!("Families:     {}", paths.families.display());
            println!("Relations:    {}", paths.relations.display());
            println!();
            println!(
                "{} families, {} games ({} unassigned), {} relations",
                counts.families, counts.games, counts.unassigned_games, counts.relations
            );
            if warnings > 0 {
                println!("{} load warning(s)", warnings);
            }
        }
    }

    Ok(())
}

/// Execute the families command
pub async fn execute_families(
    app: &App,
    args: &FamiliesArgs,
    output_mode: OutputMode,
) -> Result<()> {
    let reports = app.all_family_reports().await?;

    let mut summaries: Vec<FamilySummary> = reports
        .iter()
        .map(FamilySummary::from_report)
        .filter(|s| !args.with_orphans || s.orphans > 0)
        .collect();
    args.sort.sort(&mut summaries);

    tracing::debug!(
        families = summaries.len(),
        with_orphans = args.with_orphans,
        sort = %args.sort,
        "Listing families"
    );

    output::print_families(&summaries, output_mode)?;
    Ok(())
}

/// Execute the orphans command
pub async fn execute_orphans(app: &App, args: &OrphansArgs, output_mode: OutputMode) -> Result<()> {
    let report = app.family_report(&FamilyId::new(&args.family_id)).await?;
    output::print_orphans(&OrphanReport::from_report(&report), output_mode)?;
    Ok(())
}

/// Execute the tree command
pub async fn execute_tree(app: &App, args: &TreeArgs, output_mode: OutputMode) -> Result<()> {
    let family_id = FamilyId::new(&args.family_id);
    let report = app.family_report(&family_id).await?;
    let analysis = &report.analysis;

    let tree = FamilyTree::from_analysis(analysis, args.depth);
    let orphans = analysis.orphans();

    output::print_family_tree(
        &family_id,
        tree.as_ref(),
        analysis.root_reason(),
        &orphans,
        output_mode,
    )?;
    Ok(())
}
