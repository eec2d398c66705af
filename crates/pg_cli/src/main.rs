//! Scripted play-session driver.
//!
//! Replays a JSON-lines classification script through a play session,
//! standing in for the camera, recognizer and GUI stack, and prints
//! each tick's render payload. Useful for exercising the engine end to
//! end and for reproducing sessions with a fixed seed.

mod screen;

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Deserialize;

use pg_core::{format_mmss, Classification, PlaySession, PoseSet, SessionConfig, StepResult, TickData};
use screen::{Navigator, Screen};

#[derive(Parser)]
#[command(name = "pg_cli")]
#[command(about = "Replay a classification script through a play session", long_about = None)]
struct Cli {
    /// Classification script: one JSON object per line, e.g.
    /// {"at_ms": 1000, "label": "piece", "confidence": 0.9}
    script: PathBuf,

    /// Pose list file (one pose per line); built-in default when omitted
    #[arg(long)]
    poses: Option<PathBuf>,

    /// Deterministic round-robin prompts, timers hidden
    #[arg(long, default_value = "false")]
    debug: bool,

    /// RNG seed for reproducible prompt selection
    #[arg(long)]
    seed: Option<u64>,

    /// Simulate an unusable camera at session start
    #[arg(long, default_value = "false")]
    fail_start: bool,
}

/// One scripted recognizer output with its host timestamp.
#[derive(Debug, Deserialize)]
struct ScriptEntry {
    at_ms: u64,
    label: String,
    confidence: f32,
}

fn parse_script(text: &str) -> Result<Vec<ScriptEntry>> {
    text.lines()
        .map(str::trim)
        .enumerate()
        .filter(|(_, line)| !line.is_empty())
        .map(|(idx, line)| {
            serde_json::from_str(line).with_context(|| format!("script line {}", idx + 1))
        })
        .collect()
}

fn render(at_ms: u64, data: &TickData) {
    let countdown = data
        .remaining_seconds
        .map(format_mmss)
        .unwrap_or_else(|| "--:--".to_string());
    let gauge = data
        .gauge_percent
        .map(|g| format!("{:5.1}%", g))
        .unwrap_or_else(|| "   --".to_string());
    println!(
        "[{:>8}ms] score={} time={} gauge={} Make a {} sign",
        at_ms, data.score, countdown, gauge, data.prompt
    );
    if let Some(annotation) = &data.annotation {
        println!("             debug: {} ({:.2})", annotation.label, annotation.confidence);
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let poses = match &cli.poses {
        Some(path) => PoseSet::load(path)
            .with_context(|| format!("loading pose list {}", path.display()))?,
        None => PoseSet::default_set(),
    };
    let script_text = fs::read_to_string(&cli.script)
        .with_context(|| format!("reading script {}", cli.script.display()))?;
    let script = parse_script(&script_text)?;

    let mut nav = Navigator::new();
    nav.show(Screen::Play)?;

    let mut session = PlaySession::new(SessionConfig::default(), poses, cli.debug, cli.seed)?;

    if cli.fail_start {
        // Camera failure at start is routed exactly like a time-out.
        let end = session.fail_to_start();
        nav.session_ended(&end);
        println!("Game Over! Final Score: {}", end.final_score);
        return Ok(());
    }

    session.start(Duration::ZERO);

    for entry in &script {
        let classification = Classification::new(entry.label.clone(), entry.confidence);
        match session.tick(&classification, Duration::from_millis(entry.at_ms)) {
            StepResult::Tick(data) => render(entry.at_ms, &data),
            StepResult::Finished(end) => {
                nav.session_ended(&end);
                println!("Game Over! Final Score: {}", end.final_score);
                break;
            }
            StepResult::Inactive => break,
        }
    }

    if nav.current() == Screen::Play {
        // Script ran out before the countdown did: back to the menu,
        // no terminal score event.
        session.stop();
        nav.show(Screen::Start)?;
        println!("(script exhausted) score so far: {}", session.score());
    }

    Ok(())
}
