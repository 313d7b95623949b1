//! Command dispatch and per-command handlers

use std::collections::{HashMap, HashSet};
use std::io;
use std::path::Path;
use std::process;

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands};
use crate::cli::error::CliResult;
use crate::cli::output;
use crate::domain::{build_tree, FileRecord, TreeBuilder};
use crate::listing::{self, ListingFormat};
use crate::tree_display::TreeDisplayConvert;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Show { listing, root }) => _show(listing, root, cli.json),
        Some(Commands::Paths { listing, base }) => _paths(listing, base.as_deref(), cli.json),
        Some(Commands::Check { listing }) => _check(listing, cli.json),
        Some(Commands::Completion { shell }) => _completion(*shell),
        None => Ok(()),
    }
}

fn load(listing: &Path, force_json: bool) -> CliResult<Vec<FileRecord>> {
    let format = ListingFormat::detect(listing, force_json);
    debug!("listing: {:?}, format: {:?}", listing, format);
    Ok(listing::load_records(listing, format)?)
}

#[instrument]
fn _show(listing: &Path, root: &str, force_json: bool) -> CliResult<()> {
    let records = load(listing, force_json)?;
    let tree = build_tree(records);
    print!("{}", tree.to_tree_string(root));
    Ok(())
}

#[instrument]
fn _paths(listing: &Path, base: Option<&str>, force_json: bool) -> CliResult<()> {
    let records = load(listing, force_json)?;
    let tree = build_tree(records);

    let paths = match base {
        Some(base) => {
            let mut paths = Vec::new();
            tree.flatten_into(base, &mut paths);
            paths
        }
        None => tree.flatten(),
    };

    for path in paths {
        output::info(&path);
    }
    Ok(())
}

#[instrument]
fn _check(listing: &Path, force_json: bool) -> CliResult<()> {
    let records = load(listing, force_json)?;
    let record_count = records.len();

    // duplicates reported once each, in input order
    let duplicates: Vec<String> = {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for record in &records {
            *counts.entry(record.id.as_str()).or_default() += 1;
        }
        let mut reported = HashSet::new();
        records
            .iter()
            .filter(|r| counts[r.id.as_str()] > 1 && reported.insert(r.id.as_str()))
            .map(|r| r.id.clone())
            .collect()
    };

    let mut builder = TreeBuilder::new();
    let tree = builder.build(records);

    if !duplicates.is_empty() {
        output::header("Duplicate ids (later record overwrote earlier leaf):");
        for id in &duplicates {
            output::failure(id);
        }
    }
    if !builder.shadowed().is_empty() {
        output::header("Shadowed records (directory with same name wins):");
        for id in builder.shadowed() {
            output::failure(id);
        }
    }

    if duplicates.is_empty() && builder.shadowed().is_empty() {
        output::success(&format!(
            "listing clean: {} records, {} leaves, depth {}",
            record_count,
            tree.leaf_count(),
            tree.depth()
        ));
        Ok(())
    } else {
        process::exit(1);
    }
}

#[instrument]
fn _completion(shell: Shell) -> CliResult<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}
