use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};

use ggm_viz::{JsonDump, SceneRenderer, scenes, step_spans, total_duration_sec};

#[derive(Parser, Debug)]
#[command(name = "ggm-viz", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List registered scene names in video order.
    List,
    /// Build a scene and write its script as pretty JSON.
    Dump(DumpArgs),
    /// Print a step-by-step timing table for a scene.
    Storyboard(StoryboardArgs),
}

#[derive(Parser, Debug)]
struct DumpArgs {
    /// Scene name (see `list`).
    #[arg(long)]
    scene: String,

    /// Output path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct StoryboardArgs {
    /// Scene name (see `list`).
    #[arg(long)]
    scene: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::List => cmd_list(),
        Command::Dump(args) => cmd_dump(args),
        Command::Storyboard(args) => cmd_storyboard(args),
    }
}

fn cmd_list() -> anyhow::Result<()> {
    for (name, _) in scenes::all_scenes() {
        println!("{name}");
    }
    Ok(())
}

fn cmd_dump(args: DumpArgs) -> anyhow::Result<()> {
    let script = scenes::build_scene(&args.scene)?;
    match args.out {
        None => {
            let stdout = std::io::stdout();
            JsonDump::new(stdout.lock()).render(&script)?;
        }
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)
                        .with_context(|| format!("create output dir '{}'", parent.display()))?;
                }
            }
            let file = std::fs::File::create(&path)
                .with_context(|| format!("create '{}'", path.display()))?;
            JsonDump::new(file).render(&script)?;
            eprintln!("wrote {}", path.display());
        }
    }
    Ok(())
}

fn cmd_storyboard(args: StoryboardArgs) -> anyhow::Result<()> {
    let script = scenes::build_scene(&args.scene)?;
    let spans = step_spans(&script)?;

    println!(
        "scene '{}': {} steps, {:.1}s total",
        script.name,
        spans.len(),
        total_duration_sec(&script)
    );
    println!("{:>4}  {:>7}  {:>7}  {:<5}  visible", "step", "start", "end", "kind");
    for span in spans {
        println!(
            "{:>4}  {:>6.1}s  {:>6.1}s  {:<5}  {}",
            span.index,
            span.start_sec,
            span.end_sec,
            span.kind,
            span.visible_after.len()
        );
    }
    Ok(())
}
