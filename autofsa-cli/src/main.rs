//! Demo driver (C10): load one or more automaton description files, run the
//! conversion appropriate to each file's `<TYPE>`, and write the original
//! and converted automata as `.gv` files next to the input -- the same
//! `testnfa.gv` / `dfa_from_testnfa.gv` pairing as the original `demo.cpp`.

use autofsa::automaton::Kind;
use autofsa::{convert, dot, loader};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Load finite-automaton description files and emit Graphviz `.gv` renders
/// of both the source automaton and its DFA conversion.
#[derive(Debug, Parser)]
#[command(name = "autofsa", version, about)]
struct Args {
    /// One or more `<TYPE>...</TYPE><STATES>...` description files.
    #[arg(required = true)]
    files: Vec<PathBuf>,
}

fn stem_or(path: &Path, fallback: &str) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(fallback)
        .to_string()
}

fn process(path: &Path) -> Result<(), String> {
    let input = std::fs::read_to_string(path).map_err(|e| format!("{}: {e}", path.display()))?;
    let (automaton, diagnostics) = loader::load(&input);
    for diagnostic in &diagnostics {
        eprintln!("{}: {diagnostic}", path.display());
    }

    let stem = stem_or(path, "automaton");
    let source_gv = path.with_file_name(format!("{stem}.gv"));
    std::fs::write(&source_gv, dot::to_dot(&automaton))
        .map_err(|e| format!("{}: {e}", source_gv.display()))?;

    let dfa = convert::to_dfa(&automaton).map_err(|e| format!("{}: {e}", path.display()))?;
    let dfa_gv = path.with_file_name(format!("dfa_from_{stem}.gv"));
    std::fs::write(&dfa_gv, dot::to_dot(&dfa))
        .map_err(|e| format!("{}: {e}", dfa_gv.display()))?;

    if automaton.kind() != Kind::Dfa {
        println!(
            "{}: wrote {} and {}",
            path.display(),
            source_gv.display(),
            dfa_gv.display()
        );
    } else {
        println!(
            "{}: wrote {} ({stem} is already a DFA)",
            path.display(),
            source_gv.display()
        );
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    for file in &args.files {
        if let Err(e) = process(file) {
            eprintln!("{e}");
        }
    }
    // Matches demo.cpp: exit 0 unconditionally, failures are diagnostics.
    ExitCode::SUCCESS
}
