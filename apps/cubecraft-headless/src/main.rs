//! Cubecraft headless driver
//!
//! Runs a session without a window: a scripted input sequence goes through
//! the raw input layer and the full frame update, and every frame's target
//! and world changes are logged.
//!
//! ## Usage
//!
//! ```bash
//! cargo run -p cubecraft-headless -- [OPTIONS]
//! ```
//!
//! ## Options
//!
//! - `-c, --config <PATH>`: TOML session configuration
//! - `-f, --frames <N>`: Number of frames to run (default: 12)
//! - `-s, --script <ENTRIES>`: Scripted input, `;`-separated `<frame>:<action>`
//! - `-h, --help`: Print help message
//!
//! ## Examples
//!
//! ```bash
//! # Break the block under the spawn view, place wood, then quit
//! cargo run -p cubecraft-headless -- -s "0:look=0,-20;1:remove;2:scroll=-1;3:place;5:key=Escape;6:key=Q"
//! ```
//!
//! ## Environment Variables
//!
//! - `RUST_LOG`: Set log level (e.g., info, debug, trace)

mod script;

use std::path::PathBuf;

use anyhow::{bail, Context};
use cubecraft_input::InputManager;
use cubecraft_player::{Session, SessionConfig};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::script::{Script, ScriptPlayer};

/// Fixed timestep per frame, in seconds.
const FRAME_DT: f32 = 0.01;

/// Frames run when `--frames` is not given.
const DEFAULT_FRAMES: u64 = 12;

/// Command line parameters.
#[derive(Debug, Default)]
struct HeadlessParams {
    config: Option<PathBuf>,
    frames: Option<u64>,
    script: Option<String>,
    help: bool,
}

impl HeadlessParams {
    fn from_args(args: impl IntoIterator<Item = String>) -> anyhow::Result<Self> {
        let mut params = Self::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-c" | "--config" => {
                    let path = args.next().context("--config needs a path")?;
                    params.config = Some(PathBuf::from(path));
                }
                "-f" | "--frames" => {
                    let n = args.next().context("--frames needs a number")?;
                    params.frames =
                        Some(n.parse().with_context(|| format!("invalid frame count '{n}'"))?);
                }
                "-s" | "--script" => {
                    params.script = Some(args.next().context("--script needs entries")?);
                }
                "-h" | "--help" => params.help = true,
                other => bail!("unknown argument '{other}' (see --help)"),
            }
        }

        Ok(params)
    }
}

fn main() -> anyhow::Result<()> {
    let params = HeadlessParams::from_args(std::env::args().skip(1))?;
    if params.help {
        print_help();
        return Ok(());
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match &params.config {
        Some(path) => SessionConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => SessionConfig::default(),
    };
    let script = Script::parse(params.script.as_deref().unwrap_or_default())
        .context("failed to parse --script")?;

    let frames = params.frames.unwrap_or(DEFAULT_FRAMES);
    if let Some(last) = script.last_frame() {
        if last >= frames {
            info!("Script runs to frame {last}, past the last of {frames} frames");
        }
    }

    let session = Session::new(config).context("failed to start session")?;
    run(session, &script, frames);
    Ok(())
}

fn run(mut session: Session, script: &Script, frames: u64) {
    let mut input = InputManager::new();
    let mut player = ScriptPlayer::new();

    for frame in 0..frames {
        player.apply(&mut input, script.actions(frame));
        let frame_input = input.poll();
        let outcome = session.update(&frame_input, FRAME_DT);

        for mutation in &outcome.mutations {
            info!(frame, "{mutation}");
        }
        match &outcome.target {
            Some(hit) => debug!(
                frame,
                "Target {} {} at distance {:.3}",
                hit.block.kind,
                hit.block.position,
                hit.distance
            ),
            None => debug!(frame, "No target"),
        }

        if outcome.quit_requested {
            info!("Quit after {} frames", frame + 1);
            return;
        }
    }

    info!(
        "Finished {frames} frames with {} blocks, selected {}",
        session.world().len(),
        session.selection().kind()
    );
}

fn print_help() {
    eprintln!(
        "Cubecraft headless driver

USAGE:
    cargo run -p cubecraft-headless -- [OPTIONS]

OPTIONS:
    -c, --config <PATH>     TOML session configuration
                            Sections: [targeting] [camera] [world]
    -f, --frames <N>        Number of frames to run (default: 12)
    -s, --script <ENTRIES>  Scripted input, ';'-separated <frame>:<action>
    -h, --help              Print this help message

SCRIPT ACTIONS:
    remove                  Left click (remove the targeted block)
    place                   Right click (place the selected block)
    scroll=<N>              Scroll the palette by N steps
    look=<DX>,<DY>          Raw mouse motion
    key=<NAME>              Press a key for one frame
                            Names: W A S D Space Shift Escape Q R P

    Buttons and keys are released on the following frame. Quit (Q) only
    works after Escape has released the cursor.

EXAMPLES:
    # Break the block under the spawn view, place wood, then quit
    cargo run -p cubecraft-headless -- -s \"0:look=0,-20;1:remove;2:scroll=-1;3:place;5:key=Escape;6:key=Q\"

ENVIRONMENT VARIABLES:
    RUST_LOG                Set log level (e.g., info, debug, trace)"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn parses_all_flags() {
        let params = HeadlessParams::from_args(args(&[
            "--config",
            "world.toml",
            "-f",
            "30",
            "--script",
            "1:remove",
        ]))
        .unwrap();

        assert_eq!(params.config, Some(PathBuf::from("world.toml")));
        assert_eq!(params.frames, Some(30));
        assert_eq!(params.script.as_deref(), Some("1:remove"));
        assert!(!params.help);
    }

    #[test]
    fn rejects_bad_arguments() {
        assert!(HeadlessParams::from_args(args(&["--frames"])).is_err());
        assert!(HeadlessParams::from_args(args(&["--frames", "many"])).is_err());
        assert!(HeadlessParams::from_args(args(&["--seed", "4"])).is_err());
    }

    #[test]
    fn scripted_run_edits_world() {
        let mut session = Session::new(SessionConfig::default()).unwrap();
        let blocks = session.world().len();
        let script = Script::parse("0:scroll=-1;1:place;3:key=Escape;4:key=Q").unwrap();

        // The spawn view has no target, so aim at the origin block first
        session.camera_mut().position = cubecraft_core::coords::BlockPos::new(0, 0, 3)
            .center();
        session.camera_mut().set_orientation(0.0, 0.0);

        run(session.clone(), &script, DEFAULT_FRAMES);

        let mut input = InputManager::new();
        let mut player = ScriptPlayer::new();
        let mut placed = Vec::new();
        let mut quit = false;
        for frame in 0..DEFAULT_FRAMES {
            player.apply(&mut input, script.actions(frame));
            let outcome = session.update(&input.poll(), FRAME_DT);
            placed.extend(outcome.mutations);
            if outcome.quit_requested {
                quit = true;
                break;
            }
        }

        assert!(quit);
        assert_eq!(placed.len(), 1);
        assert_eq!(session.world().len(), blocks + 1);
        assert_eq!(
            placed[0].block().kind,
            cubecraft_core::types::BlockKind::Wood
        );
    }
}
