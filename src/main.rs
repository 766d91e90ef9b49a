//! `rmask-replay`: rebuild the masks of a recorded drawing session.
//!
//! Reads a session JSON file, replays its events through the accumulator,
//! and dumps the three derived views (`mask.npy`, `labels.npy`,
//! `label_by_stroke.npy`) plus a `mask.png` preview to an output directory.

use std::path::{Path, PathBuf};

use rmask::{export, Session};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("usage: rmask-replay <session.json> [out-dir]");
        std::process::exit(2);
    }
    let session_path = PathBuf::from(&args[1]);
    let out_dir = args
        .get(2)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));

    if let Err(e) = run(&session_path, &out_dir) {
        eprintln!("replay failed: {}", e);
        std::process::exit(1);
    }
}

fn run(session_path: &Path, out_dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let json = std::fs::read_to_string(session_path)?;
    let session = Session::from_json(&json)?;
    log::info!(
        "Replaying {} ({}x{}, {} events)",
        session_path.display(),
        session.rows,
        session.cols,
        session.events.len()
    );

    let accumulator = session.replay()?;

    std::fs::create_dir_all(out_dir)?;
    export::save_mask_npy(&accumulator.mask(), &out_dir.join("mask.npy"))?;
    export::save_labels_npy(&accumulator.label_array(), &out_dir.join("labels.npy"))?;
    export::save_labels_npy(
        &accumulator.label_by_stroke(),
        &out_dir.join("label_by_stroke.npy"),
    )?;
    export::save_mask_png(&accumulator.mask(), &out_dir.join("mask.png"))?;

    Ok(())
}
