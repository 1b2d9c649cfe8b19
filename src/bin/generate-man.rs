// Generate man pages for poe and each of its subcommands
//
// Usage: generate-man [OUT_DIR]   (default: ./man)

use std::path::{Path, PathBuf};
use clap::CommandFactory;
use clap_mangen::Man;
use anyhow::{Context, Result};
use poe::cli::Cli;

fn render(cmd: &clap::Command, name: &str, out_dir: &Path) -> Result<()> {
    let man = Man::new(cmd.clone()).title(name);
    let mut buffer: Vec<u8> = Vec::new();
    man.render(&mut buffer)
        .with_context(|| format!("Failed to render man page for {}", name))?;

    let path = out_dir.join(format!("{}.1", name));
    std::fs::write(&path, buffer)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    println!("Wrote {}", path.display());
    Ok(())
}

fn main() -> Result<()> {
    let out_dir = std::env::args().nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("man"));
    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("Failed to create {}", out_dir.display()))?;

    let cmd = Cli::command();
    render(&cmd, "poe", &out_dir)?;

    for sub in cmd.get_subcommands() {
        let name = format!("poe-{}", sub.get_name());
        render(sub, &name, &out_dir)?;
    }
    Ok(())
}
