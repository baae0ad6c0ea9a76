// Loads a tree description, runs one accelerator pass and prints the write-backs,
// or opens the interactive preview with -i.

use clap::Parser;
use mnemo::loader::{self, Document};
use mnemo::report::Report;
use mnemo::tree::{apply, WriteBack};
use mnemo::Session;
use serde::Serialize;
use std::path::PathBuf;
use std::process;

/// mnemo - assign keyboard accelerators to a tree of UI labels
#[derive(Parser)]
#[command(name = "mnemo")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Tree description (JSON), `-` for stdin
    #[arg(value_name = "TREE")]
    tree: PathBuf,

    /// Show old and new accelerator positions with (&&) and (!)& markers
    #[arg(short, long)]
    programmers_mode: bool,

    /// Print the diagnostics report after the write-backs
    #[arg(short, long)]
    report: bool,

    /// Machine-readable output: write-backs and report as JSON
    #[arg(long, conflicts_with = "apply")]
    json: bool,

    /// Print the tree with every write-back applied (JSON)
    #[arg(long)]
    apply: bool,

    /// Open the interactive preview
    #[arg(short, long, conflicts_with_all = ["json", "apply", "report"])]
    interactive: bool,
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    writes: &'a [WriteBack],
    report: &'a Report,
}

fn batch(cli: &Cli, mut doc: Document) -> Result<String, String> {
    let mut session = Session::from_settings(&doc.settings);
    if cli.programmers_mode {
        session.set_programmers_mode(true);
    }
    let writes = session.manage(doc.root.as_ref());

    if cli.json {
        let out = JsonOutput {
            writes: &writes,
            report: session.report(),
        };
        return serde_json::to_string_pretty(&out).map_err(|e| e.to_string());
    }

    let mut out = String::new();
    if cli.apply {
        if let Some(root) = doc.root.as_mut() {
            apply(root, &writes);
        }
        out.push_str(&serde_json::to_string_pretty(&doc).map_err(|e| e.to_string())?);
        out.push('\n');
    } else {
        for w in &writes {
            out.push_str(&format!("{}\t{}\n", w.target, w.text));
        }
    }
    if cli.report && !session.report().is_empty() {
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(&session.report().to_string());
    }
    Ok(out)
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let mut doc = match loader::load(&cli.tree) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("{e}");
            process::exit(2);
        }
    };

    if cli.interactive {
        if cli.programmers_mode {
            doc.settings.programmers_mode = true;
        }
        match mnemo::ui::run(doc).await {
            Ok(_) => process::exit(0),
            Err(e) => {
                eprintln!("{e}");
                process::exit(2);
            }
        }
    }

    match batch(&cli, doc) {
        Ok(out) => {
            print!("{out}");
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{e}");
            process::exit(2);
        }
    }
}
