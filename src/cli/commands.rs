//! Command dispatch: one handler per subcommand

use std::io;
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands};
use crate::cli::output;
use crate::errors::{TreeError, TreeResult};
use crate::render::write_tree;
use crate::serialize::{load_tree, save_tree};
use crate::tree::{Node, Value};

pub fn execute_command(cli: &Cli) -> TreeResult<()> {
    match &cli.command {
        Some(Commands::New { value, output }) => _new(value, output),
        Some(Commands::Insert {
            file,
            path,
            value,
            output,
        }) => _insert(file, path, value, output.as_deref()),
        Some(Commands::Render { file }) => _render(file),
        Some(Commands::Demo) => _demo(),
        None => Ok(()),
    }
}

#[instrument]
fn _new(value: &Value, out: &Path) -> TreeResult<()> {
    debug!("value: {:?}, out: {:?}", value, out);
    let root = Node::new(value.clone());
    save_tree(Some(&root), out)?;
    output::action("Created", &out.display());
    Ok(())
}

#[instrument]
fn _insert(file: &Path, path: &str, value: &Value, out: Option<&Path>) -> TreeResult<()> {
    debug!("file: {:?}, path: {:?}, value: {:?}", file, path, value);
    let mut root = load_tree(file)?.ok_or_else(|| {
        TreeError::MalformedMapping(format!("{}: document holds no root node", file.display()))
    })?;
    root.insert(path, value.clone())?;

    let target = out.unwrap_or(file);
    save_tree(Some(&root), target)?;
    output::action("Updated", &target.display());
    Ok(())
}

#[instrument]
fn _render(file: &Path) -> TreeResult<()> {
    debug!("file: {:?}", file);
    let root = load_tree(file)?;
    write_tree(root.as_ref(), io::stdout())?;
    Ok(())
}

/// Replays the original walkthrough: build the sample tree by paths,
/// render it, round-trip it through a YAML scratch file, render again.
#[instrument]
fn _demo() -> TreeResult<()> {
    output::header("--- 1. Manual Tree Construction ---");
    let mut root = Node::new(10);
    for (path, value) in [
        ("L", 5),
        ("R", 15),
        ("LL", 2),
        ("LR", 7),
        ("RL", 12),
        ("RR", 18),
    ] {
        root.insert(path, value)?;
    }
    write_tree(Some(&root), io::stdout())?;

    println!();
    output::header("--- 2. YAML Tree Construction ---");
    // Scratch file is removed when the handle drops
    let scratch = NamedTempFile::new()?;
    save_tree(Some(&root), scratch.path())?;
    let reloaded = load_tree(scratch.path())?;
    write_tree(reloaded.as_ref(), io::stdout())?;
    Ok(())
}
