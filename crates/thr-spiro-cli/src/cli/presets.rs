//! Presets command: list the catalog.

use std::path::PathBuf;

use thr_spiro::{CurveType, PresetSummary};

use super::common::{build_generator, flag_value, load_config};

pub fn cmd_presets(args: &[String], config_path: Option<&str>) -> Result<(), String> {
    let mut catalog_path: Option<PathBuf> = None;
    let mut json = false;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--catalog" => catalog_path = Some(flag_value(args, &mut i, "--catalog")?),
            "--json" => json = true,
            other => return Err(format!("Unknown option for presets: {}", other)),
        }
        i += 1;
    }

    let mut config = load_config(config_path)?;
    if catalog_path.is_some() {
        config.catalog = catalog_path;
    }
    let generator = build_generator(config)?;
    let catalog = generator.catalog();

    if json {
        let summaries: Vec<PresetSummary> = catalog.list().iter().map(PresetSummary::from).collect();
        let json = serde_json::to_string_pretty(&summaries).map_err(|e| e.to_string())?;
        println!("{}", json);
        return Ok(());
    }

    println!("Available presets:");
    let width = catalog.names().map(str::len).max().unwrap_or(0);
    for preset in catalog.list() {
        println!(
            "  {:width$}  {:12}  {}",
            preset.name,
            preset.curve_type().name(),
            preset.description,
            width = width
        );
    }

    println!();
    println!("Curve types (for 'custom'):");
    for curve in CurveType::all() {
        println!("  {:12}  {}", curve.name(), curve.description());
    }

    Ok(())
}
