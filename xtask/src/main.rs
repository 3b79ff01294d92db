//! Build helpers for lexiscore: man pages and shell completions.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Development tasks for the lexiscore workspace.
#[derive(Parser)]
#[command(name = "xtask")]
struct Xtask {
    #[command(subcommand)]
    task: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Generate man pages for lexiscore and each subcommand
    Man {
        /// Output directory
        #[arg(long, default_value = "target/dist/man")]
        out_dir: PathBuf,
    },
    /// Generate shell completion scripts
    Completions {
        /// Output directory
        #[arg(long, default_value = "target/dist/completions")]
        out_dir: PathBuf,
    },
}

fn main() -> io::Result<()> {
    match Xtask::parse().task {
        Task::Man { out_dir } => generate_man(&out_dir),
        Task::Completions { out_dir } => generate_completions(&out_dir),
    }
}

fn generate_man(out_dir: &Path) -> io::Result<()> {
    fs::create_dir_all(out_dir)?;
    let cmd = lexiscore::command();
    write_man_page(out_dir, &cmd, cmd.get_name())?;

    for sub in cmd.get_subcommands().filter(|s| !s.is_hide_set()) {
        let name = format!("{}-{}", cmd.get_name(), sub.get_name());
        write_man_page(out_dir, sub, &name)?;
    }
    println!("man pages written to {}", out_dir.display());
    Ok(())
}

fn write_man_page(out_dir: &Path, cmd: &clap::Command, name: &str) -> io::Result<()> {
    let mut buffer = Vec::new();
    clap_mangen::Man::new(cmd.clone()).render(&mut buffer)?;
    fs::write(out_dir.join(format!("{name}.1")), buffer)
}

fn generate_completions(out_dir: &Path) -> io::Result<()> {
    fs::create_dir_all(out_dir)?;
    let mut cmd = lexiscore::command();
    for shell in [Shell::Bash, Shell::Zsh, Shell::Fish, Shell::PowerShell, Shell::Elvish] {
        let path = clap_complete::generate_to(shell, &mut cmd, "lexiscore", out_dir)?;
        println!("{}", path.display());
    }
    Ok(())
}
