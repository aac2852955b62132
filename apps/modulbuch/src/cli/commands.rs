//! # CLI Command Implementations
//!
//! This module contains the actual implementations of CLI commands.
//!
//! Every command follows the same shape the original flows had: load the
//! full collection, work on it in memory, save the full snapshot back.

use crate::cli::CliError;
use crate::form::ModuleForm;
use modulbuch_core::{Module, ModuleId, ModuleStore, RedbStore, StorageError};
use std::path::PathBuf;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Open the durable store at the configured database path.
fn open_store(db_path: &PathBuf) -> Result<RedbStore, CliError> {
    tracing::debug!("Opening module database at {:?}", db_path);
    Ok(RedbStore::open(db_path)?)
}

/// Find the position of the record with the given id.
fn position_of(modules: &[Module], id: u64) -> Result<usize, CliError> {
    let target = ModuleId(id);
    modules
        .iter()
        .position(|m| m.id == Some(target))
        .ok_or(CliError::Storage(StorageError::ModuleNotFound(target)))
}

/// Raw id value for display. Loaded records always carry an id.
fn id_value(module: &Module) -> u64 {
    module.id.map_or(0, ModuleId::value)
}

/// The grade summary line, worded like the original list rows.
fn grade_line(module: &Module) -> String {
    match module.average() {
        Some(average) => format!("Durchschnitt: {average:.1}"),
        None if module.grade1.is_some() || module.grade2.is_some() => {
            "Noten: noch nicht komplett".to_string()
        }
        None => "Noch keine Noten eingetragen".to_string(),
    }
}

/// Mean of the per-module averages, over fully graded modules only.
fn overall_average(modules: &[Module]) -> Option<f64> {
    let averages: Vec<f64> = modules.iter().filter_map(Module::average).collect();
    if averages.is_empty() {
        None
    } else {
        Some(averages.iter().sum::<f64>() / averages.len() as f64)
    }
}

/// One module as a JSON object for `--json-mode` output.
fn module_json(module: &Module) -> serde_json::Value {
    serde_json::json!({
        "id": module.id.map(ModuleId::value),
        "modulnummer": module.number,
        "modultitel": module.title,
        "note1": module.grade1,
        "note2": module.grade2,
        "durchschnitt": module.average(),
    })
}

/// Grade input for an edit: an explicit argument wins (empty clears),
/// otherwise the stored grade is kept.
fn grade_input(argument: Option<&str>, current: Option<f64>) -> String {
    match argument {
        Some(text) => text.to_string(),
        None => current.map_or_else(String::new, |grade| grade.to_string()),
    }
}

// =============================================================================
// LIST COMMAND
// =============================================================================

/// Show all modules with their grade summary.
pub fn cmd_list(db_path: &PathBuf, json_mode: bool) -> Result<(), CliError> {
    let store = open_store(db_path)?;
    let modules = store.load_modules()?;

    if json_mode {
        let output = serde_json::json!({
            "modules": modules.iter().map(module_json).collect::<Vec<_>>(),
            "gesamtdurchschnitt": overall_average(&modules),
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&output).unwrap_or_default()
        );
        return Ok(());
    }

    if modules.is_empty() {
        println!("No modules yet. Use 'modulbuch add' to create one.");
        return Ok(());
    }

    for module in &modules {
        println!(
            "{} - {} (id {})",
            module.number,
            module.title,
            id_value(module)
        );
        println!("  {}", grade_line(module));
    }

    if let Some(average) = overall_average(&modules) {
        println!();
        println!("Gesamtdurchschnitt: {average:.1}");
    }

    Ok(())
}

// =============================================================================
// ADD COMMAND
// =============================================================================

/// Validate the form input, assign an id and append to the collection.
pub fn cmd_add(
    db_path: &PathBuf,
    _json_mode: bool,
    number: &str,
    title: &str,
    grade1: Option<&str>,
    grade2: Option<&str>,
) -> Result<(), CliError> {
    let form = ModuleForm {
        number: number.to_string(),
        title: title.to_string(),
        grade1: grade1.unwrap_or_default().to_string(),
        grade2: grade2.unwrap_or_default().to_string(),
    };
    let mut module = form.validate()?;

    let mut store = open_store(db_path)?;
    let mut modules = store.load_modules()?;

    module.id = Some(store.next_id()?);
    modules.push(module);
    store.save_modules(&modules)?;

    let added = &modules[modules.len() - 1];
    tracing::info!("Added module {} (id {})", added.number, id_value(added));
    println!(
        "Added {} - {} (id {})",
        added.number,
        added.title,
        id_value(added)
    );

    Ok(())
}

// =============================================================================
// EDIT COMMAND
// =============================================================================

/// Replace the record with the matching id, keeping its id and position.
pub fn cmd_edit(
    db_path: &PathBuf,
    _json_mode: bool,
    id: u64,
    number: Option<&str>,
    title: Option<&str>,
    grade1: Option<&str>,
    grade2: Option<&str>,
) -> Result<(), CliError> {
    let mut store = open_store(db_path)?;
    let mut modules = store.load_modules()?;
    let position = position_of(&modules, id)?;

    let existing = &modules[position];
    let form = ModuleForm {
        number: number.map_or_else(|| existing.number.clone(), str::to_string),
        title: title.map_or_else(|| existing.title.clone(), str::to_string),
        grade1: grade_input(grade1, existing.grade1),
        grade2: grade_input(grade2, existing.grade2),
    };

    let mut updated = form.validate()?;
    updated.id = existing.id;
    modules[position] = updated;
    store.save_modules(&modules)?;

    let edited = &modules[position];
    tracing::info!("Updated module {} (id {})", edited.number, id);
    println!(
        "Updated {} - {} (id {})",
        edited.number, edited.title, id
    );

    Ok(())
}

// =============================================================================
// REMOVE COMMAND
// =============================================================================

/// Drop the record with the matching id and save the remainder.
pub fn cmd_remove(db_path: &PathBuf, _json_mode: bool, id: u64) -> Result<(), CliError> {
    let mut store = open_store(db_path)?;
    let mut modules = store.load_modules()?;
    let position = position_of(&modules, id)?;

    let removed = modules.remove(position);
    store.save_modules(&modules)?;

    tracing::info!("Removed module {} (id {})", removed.number, id);
    println!(
        "Removed {} - {} (id {})",
        removed.number, removed.title, id
    );

    Ok(())
}

// =============================================================================
// SHOW COMMAND
// =============================================================================

/// Show one module in detail.
pub fn cmd_show(db_path: &PathBuf, json_mode: bool, id: u64) -> Result<(), CliError> {
    let store = open_store(db_path)?;
    let modules = store.load_modules()?;
    let position = position_of(&modules, id)?;
    let module = &modules[position];

    if json_mode {
        println!(
            "{}",
            serde_json::to_string_pretty(&module_json(module)).unwrap_or_default()
        );
        return Ok(());
    }

    println!("{} - {}", module.number, module.title);
    println!("  Id:     {}", id_value(module));
    match module.grade1 {
        Some(grade) => println!("  Note 1: {grade}"),
        None => println!("  Note 1: -"),
    }
    match module.grade2 {
        Some(grade) => println!("  Note 2: {grade}"),
        None => println!("  Note 2: -"),
    }
    println!("  {}", grade_line(module));

    Ok(())
}

// =============================================================================
// STATUS COMMAND
// =============================================================================

/// Show store status.
pub fn cmd_status(db_path: &PathBuf, json_mode: bool) -> Result<(), CliError> {
    let store = open_store(db_path)?;
    let modules = store.load_modules()?;

    let graded = modules.iter().filter(|m| m.has_complete_grades()).count();
    let average = overall_average(&modules);

    if json_mode {
        let output = serde_json::json!({
            "database": db_path.to_string_lossy(),
            "module_count": modules.len(),
            "graded_count": graded,
            "gesamtdurchschnitt": average,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&output).unwrap_or_default()
        );
        return Ok(());
    }

    println!("Modulbuch Status");
    println!("================");
    println!("Database: {:?}", db_path);
    println!();
    println!("Modules:       {}", modules.len());
    println!("Fully graded:  {}", graded);
    match average {
        Some(average) => println!("Gesamtdurchschnitt: {average:.1}"),
        None => println!("Gesamtdurchschnitt: -"),
    }

    Ok(())
}

// =============================================================================
// INIT COMMAND
// =============================================================================

/// Initialize a new empty database.
pub fn cmd_init(db_path: &PathBuf, force: bool) -> Result<(), CliError> {
    if db_path.exists() {
        if !force {
            return Err(CliError::Storage(StorageError::Io(
                "Database already exists. Use --force to overwrite.".to_string(),
            )));
        }
        std::fs::remove_file(db_path).map_err(|e| StorageError::Io(e.to_string()))?;
    }

    let _store = RedbStore::open(db_path)?;
    println!("Initialized new database at {:?}", db_path);

    Ok(())
}
