use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use memoir_extract::extractor::{EntityExtractor, MIN_TRANSCRIPT_CHARS, Transcript};
use memoir_extract::types::{ExtractionResult, TimelineEntry};
use memoir_extract::{build_timeline, merge_results, scanner};

const OUTPUT_DIR: &str = "output";

#[derive(Parser)]
#[command(
    name = "memoir_extract",
    about = "Oral-history transcript entity and timeline extractor"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run full corpus extraction → output/*.json
    Extract {
        /// Path to the transcripts root directory
        #[arg(default_value = ".")]
        corpus: PathBuf,
    },
    /// Print the ordered timeline from cached output
    Timeline,
    /// Print merged people sorted by mention count
    People,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Command::Extract { corpus }) => run_extract(&corpus),
        Some(Command::Timeline) => run_timeline(),
        Some(Command::People) => run_people(),
        // Default: extract from the current directory
        None => run_extract(Path::new(".")),
    }
}

// ═══════════════════════════════════════════════════════════════════════
//  OUTPUT FILE HELPERS
// ═══════════════════════════════════════════════════════════════════════

fn output_path(name: &str) -> PathBuf {
    Path::new(OUTPUT_DIR).join(name)
}

fn write_json<T: serde::Serialize>(name: &str, data: &T) -> Result<()> {
    let path = output_path(name);
    let json = serde_json::to_string_pretty(data).context("JSON serialization")?;
    fs::write(&path, &json).with_context(|| format!("cannot write {}", path.display()))?;
    eprintln!("  {} ({} bytes)", path.display(), json.len());
    Ok(())
}

fn read_json<T: serde::de::DeserializeOwned>(name: &str) -> Result<T> {
    let path = output_path(name);
    let json = fs::read_to_string(&path).with_context(|| {
        format!(
            "cannot read {} (run extraction first to generate it)",
            path.display()
        )
    })?;
    serde_json::from_str(&json)
        .with_context(|| format!("cannot parse {} (re-run extraction)", path.display()))
}

// ═══════════════════════════════════════════════════════════════════════
//  EXTRACT MODE: full corpus processing → output/*.json
// ═══════════════════════════════════════════════════════════════════════

fn run_extract(root: &Path) -> Result<()> {
    eprintln!("Scanning transcripts at: {}", root.display());

    // Phase 1: discover transcript files
    let files = scanner::scan_transcripts(root);
    eprintln!("Found {} transcript files", files.len());

    // Phase 2: read transcripts, keeping session ids for citation
    let mut transcripts = Vec::new();
    let mut unreadable = Vec::new();
    for f in &files {
        match fs::read_to_string(&f.path) {
            Ok(text) => transcripts.push(Transcript {
                text,
                session_id: Some(f.session_id.clone()),
            }),
            Err(_) => unreadable.push(f.path.display().to_string()),
        }
    }
    let short = transcripts
        .iter()
        .filter(|t| t.text.trim().chars().count() < MIN_TRANSCRIPT_CHARS)
        .count();
    eprintln!(
        "Read {} transcripts ({} unreadable, {} under the minimum length)",
        transcripts.len(),
        unreadable.len(),
        short
    );

    // Phase 3: per-transcript extraction + corpus merge
    let extractor = EntityExtractor::new();
    let results = extractor.extract_batch(&transcripts);
    let merged = merge_results(&results);

    // Phase 4: timeline assembly
    let timeline = build_timeline(&merged.events, &merged.dates);

    // ── Print statistics ───────────────────────────────────────────
    eprintln!("\n══════════════════════════════════════════");
    eprintln!("  CORPUS STATISTICS");
    eprintln!("══════════════════════════════════════════");

    eprintln!(
        "\nEntities: {} people, {} places, {} date mentions, {} events",
        merged.people.len(),
        merged.places.len(),
        merged.dates.len(),
        merged.events.len()
    );

    let mut by_mentions: Vec<_> = merged.people.iter().collect();
    by_mentions.sort_by_key(|p| std::cmp::Reverse(p.mentions));
    eprintln!("\nTop people:");
    for p in by_mentions.iter().take(10) {
        let rel = p.relationship.as_deref().unwrap_or("relationship unknown");
        eprintln!("  {} ({}, {} mentions)", p.name, rel, p.mentions);
    }

    let mut by_type = std::collections::HashMap::new();
    for e in &merged.events {
        *by_type.entry(format!("{:?}", e.event_type)).or_insert(0usize) += 1;
    }
    let mut type_counts: Vec<_> = by_type.into_iter().collect();
    type_counts.sort_by_key(|(_, c)| std::cmp::Reverse(*c));
    eprintln!("\nEvents by type:");
    for (event_type, count) in &type_counts {
        eprintln!("  {event_type}: {count}");
    }

    let dated = timeline.iter().filter(|e| e.date != "Unknown").count();
    eprintln!(
        "\nTimeline: {} entries ({} dated, {} undated)",
        timeline.len(),
        dated,
        timeline.len() - dated
    );
    eprintln!("\nFirst entries:");
    for entry in timeline.iter().take(10) {
        eprintln!(
            "  [{}] {:?}: {}",
            entry.date,
            entry.entry_type,
            truncate(&entry.description, 70)
        );
    }

    // ── Print failures ─────────────────────────────────────────────
    if !unreadable.is_empty() {
        eprintln!("\n══════════════════════════════════════════");
        eprintln!("  UNREADABLE FILES ({} total)", unreadable.len());
        eprintln!("══════════════════════════════════════════");
        for f in unreadable.iter().take(30) {
            eprintln!("  {f}");
        }
        if unreadable.len() > 30 {
            eprintln!("  ... and {} more", unreadable.len() - 30);
        }
    }

    // ── Write output files ──────────────────────────────────────────
    eprintln!("\n══════════════════════════════════════════");
    eprintln!("  WRITING OUTPUT FILES");
    eprintln!("══════════════════════════════════════════\n");

    fs::create_dir_all(OUTPUT_DIR).context("cannot create output/")?;
    write_json("entities.json", &merged)?;
    write_json("timeline.json", &timeline)?;

    eprintln!("\nDone. Inspect with:");
    eprintln!("  cargo run -- timeline");
    eprintln!("  cargo run -- people");
    Ok(())
}

// ═══════════════════════════════════════════════════════════════════════
//  TIMELINE MODE: print the ordered timeline to stdout
// ═══════════════════════════════════════════════════════════════════════

fn run_timeline() -> Result<()> {
    let timeline: Vec<TimelineEntry> = read_json("timeline.json")?;

    for entry in &timeline {
        let involved = if entry.people.is_empty() {
            String::new()
        } else {
            format!(" — {}", entry.people.join(", "))
        };
        println!(
            "[{}] {:?} ({:?}): {}{}",
            entry.date,
            entry.entry_type,
            entry.confidence,
            truncate(&entry.description, 90),
            involved
        );
    }

    eprintln!("\nTotal: {} timeline entries", timeline.len());
    Ok(())
}

// ═══════════════════════════════════════════════════════════════════════
//  PEOPLE MODE: print merged people by mention count
// ═══════════════════════════════════════════════════════════════════════

fn run_people() -> Result<()> {
    let merged: ExtractionResult = read_json("entities.json")?;

    let mut people: Vec<_> = merged.people.iter().collect();
    people.sort_by_key(|p| std::cmp::Reverse(p.mentions));

    for p in &people {
        let rel = p
            .relationship
            .as_deref()
            .map(|r| format!(" ({r})"))
            .unwrap_or_default();
        println!("{}{} — {} mentions, {:?}", p.name, rel, p.mentions, p.confidence);
    }

    eprintln!("\nTotal: {} people", people.len());
    Ok(())
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars).collect();
    format!("{cut}…")
}
