use std::env;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use gloss_merger::{CorpusEngine, EngineConfig, SourceFormat, SourceSpec};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!(
            "Usage: {} --dict <format>:<path> [--dict <format>:<path> ...] [--merge-all] <blob-file>...",
            args[0]
        );
        eprintln!("  <format> is 'edict' or 'japanese3'; earlier --dict flags win ties.");
        std::process::exit(1);
    }

    let mut config = EngineConfig::default();
    let mut blob_paths: Vec<String> = Vec::new();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--dict" => {
                let Some(spec_str) = args.get(i + 1) else {
                    eprintln!("ERROR: --dict flag requires an argument.");
                    std::process::exit(1);
                };
                let Some((format_str, path)) = spec_str.split_once(':') else {
                    eprintln!("ERROR: Invalid --dict format. Expected <format>:<path>");
                    std::process::exit(1);
                };
                let format = match SourceFormat::from_str(format_str) {
                    Ok(format) => format,
                    Err(e) => {
                        eprintln!("ERROR: {}", e);
                        std::process::exit(1);
                    }
                };
                config.sources.push(SourceSpec::new(format, path));
                i += 2;
            }
            "--merge-all" => {
                config.merge_all = true;
                i += 1;
            }
            _ => {
                blob_paths.push(args[i].clone());
                i += 1;
            }
        }
    }

    println!("Loading {} glossaries...", config.sources.len());
    let mut engine = match CorpusEngine::new(&config) {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("\nERROR: Failed to initialize engine");
            eprintln!("  {}", e);
            std::process::exit(1);
        }
    };

    println!("{}", "=".repeat(60));

    for blob_path in &blob_paths {
        let bucket = Path::new(blob_path)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(blob_path)
            .to_string();

        let blob = match fs::read_to_string(blob_path) {
            Ok(text) => text,
            Err(e) => {
                eprintln!("\nERROR: Failed to read corpus blob {}", blob_path);
                eprintln!("  {}", e);
                std::process::exit(1);
            }
        };

        let rewritten = match engine.rewrite_blob(&bucket, &blob) {
            Ok(text) => text,
            Err(e) => {
                eprintln!("\nERROR: Failed to process corpus blob {}", blob_path);
                eprintln!("  {}", e);
                std::process::exit(1);
            }
        };

        let out_path = format!("{}.merged", blob_path);
        if let Err(e) = fs::write(&out_path, rewritten) {
            eprintln!("\nERROR: Failed to write {}", out_path);
            eprintln!("  {}", e);
            std::process::exit(1);
        }
        println!("  {} -> {}", blob_path, out_path);
    }

    let stats = engine.stats();
    println!("\n{}", "=".repeat(60));
    println!("SUCCESS! Merge completed.");
    println!("{}", "=".repeat(60));
    println!("\nStatistics:");
    println!("  Entries seen:          {}", stats.entries_seen);
    println!("  Resolved:              {}", stats.resolved);
    println!("  No match:              {}", stats.no_match);
    println!("  Structural mismatches: {}", stats.structural_mismatches);
    println!("\nPer-glossary usage:");
    for (source_id, count) in engine.usage_report() {
        println!("  {}: {}", source_id, count);
    }
}
