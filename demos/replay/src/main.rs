//! replay — drive a navigation session from a recorded GraphHopper route and
//! a CSV of position fixes.
//!
//! The route answers every routing request (initial and reroutes), so the
//! replay runs fully offline.  `--jitter-m` perturbs each fix by up to that
//! many metres north and east; large values push fixes past the reroute
//! threshold.
//!
//! ```text
//! cargo run -p replay -- --jitter-m 15 --seed 7
//! RUST_LOG=debug cargo run -p replay -- --route my_route.json --fixes my_drive.csv
//! ```

use std::io::Cursor;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result, bail};
use clap::Parser;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tokio::sync::mpsc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use nav_core::geodesy::METERS_PER_DEGREE_LAT;
use nav_core::{GeoPoint, NavConfig};
use nav_route::{RoutingProfile, StaticRouter, graphhopper};
use nav_session::{
    Navigator, SessionBuilder, SessionPhase, SpeechSink, UiSink, load_fixes_csv, load_fixes_reader,
};

// ── Bundled sample ────────────────────────────────────────────────────────────

const SAMPLE_ROUTE: &str = include_str!("../data/route.json");
const SAMPLE_FIXES: &str = include_str!("../data/fixes.csv");

const FIX_CHANNEL_CAPACITY: usize = 64;

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "replay")]
#[command(about = "Replay recorded fixes through a turn-by-turn navigation session", long_about = None)]
struct Args {
    /// GraphHopper /route response (points_encoded=false).  Defaults to the bundled sample.
    #[arg(long)]
    route: Option<PathBuf>,

    /// CSV with `lat` and `lon` columns.  Defaults to the bundled sample.
    #[arg(long)]
    fixes: Option<PathBuf>,

    /// JSON navigation config; missing fields take their defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Routing profile (car, bike, foot)
    #[arg(long, default_value = "car")]
    profile: RoutingProfile,

    /// Maximum random offset applied to each fix, metres
    #[arg(long, default_value = "0")]
    jitter_m: f64,

    /// Seed for the jitter RNG
    #[arg(short, long, default_value = "42")]
    seed: u64,

    /// Pause between fixes, milliseconds
    #[arg(long, default_value = "0")]
    interval_ms: u64,
}

// ── Sinks ─────────────────────────────────────────────────────────────────────

/// Writes the status line to the log.
struct LogUi;

impl UiSink for LogUi {
    fn show_status(&mut self, primary: &str, secondary: &str) {
        info!(target: "replay::ui", "{primary}  |  {secondary}");
    }
}

/// Logs utterances and keeps their ids for the summary.
#[derive(Default)]
struct Transcript {
    ids: Vec<String>,
}

impl SpeechSink for Transcript {
    fn speak(&mut self, text: &str, utterance_id: &str) {
        info!(target: "replay::speech", id = utterance_id, "\"{text}\"");
        self.ids.push(utterance_id.to_string());
    }
}

// ── Main ──────────────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let t0 = Instant::now();

    // ── Inputs ────────────────────────────────────────────────────────────
    let config = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            serde_json::from_str::<NavConfig>(&text).context("parsing config")?
        }
        None => NavConfig::default(),
    };

    let body = match &args.route {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading route {}", path.display()))?,
        None => SAMPLE_ROUTE.to_string(),
    };
    let destination = last_coordinate(&body)?;
    let route = graphhopper::parse_response(&body, destination).context("decoding route")?;

    let mut fixes = match &args.fixes {
        Some(path) => load_fixes_csv(path)?,
        None => load_fixes_reader(Cursor::new(SAMPLE_FIXES))?,
    };
    let Some(&origin) = fixes.first() else {
        bail!("no usable fixes");
    };
    jitter(&mut fixes, args.jitter_m, args.seed);

    info!(
        points   = route.polyline().len(),
        steps    = route.steps().len(),
        fixes    = fixes.len(),
        profile  = %args.profile,
        "inputs loaded"
    );

    // ── Session ───────────────────────────────────────────────────────────
    let session = SessionBuilder::new(LogUi, Transcript::default())
        .config(config)
        .destination(destination)
        .profile(args.profile)
        .build()?;

    let (fix_tx, fix_rx) = mpsc::channel(FIX_CHANNEL_CAPACITY);
    let handle = Navigator::spawn(session, Arc::new(StaticRouter::new(route)), fix_rx);

    handle.navigate(origin, destination).await?;
    while handle.snapshot().await?.reroute_pending {
        tokio::time::sleep(Duration::from_millis(5)).await;
    }

    for fix in fixes {
        fix_tx.send(fix).await.context("navigator stopped early")?;
        if args.interval_ms > 0 {
            tokio::time::sleep(Duration::from_millis(args.interval_ms)).await;
        }
    }
    drop(fix_tx);

    let snapshot = handle.snapshot().await?;
    let session = handle.shutdown().await?;

    // ── Summary ───────────────────────────────────────────────────────────
    println!("\n=== Replay summary ===");
    println!("Final phase  : {:?}", snapshot.phase);
    println!("Step index   : {}", snapshot.state.step_index);
    println!("Utterances   : {}", session.speech().ids.join(", "));
    println!("Elapsed      : {:.2?}", t0.elapsed());

    if snapshot.phase != SessionPhase::Arrived {
        println!("(destination not reached)");
    }
    Ok(())
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// The final `[lon, lat]` of the first path, used as the destination.
fn last_coordinate(body: &str) -> Result<GeoPoint> {
    let value: serde_json::Value = serde_json::from_str(body).context("parsing route JSON")?;
    let last = value["paths"][0]["points"]["coordinates"]
        .as_array()
        .and_then(|coords| coords.last())
        .and_then(|c| c.as_array())
        .context("missing paths[0].points.coordinates")?;
    match (last.first().and_then(|v| v.as_f64()), last.get(1).and_then(|v| v.as_f64())) {
        (Some(lon), Some(lat)) => Ok(GeoPoint::new(lat, lon)),
        _ => bail!("last coordinate is not [lon, lat]"),
    }
}

/// Offset each fix by up to `radius_m` metres north and east.
fn jitter(fixes: &mut [GeoPoint], radius_m: f64, seed: u64) {
    if radius_m <= 0.0 {
        return;
    }
    let mut rng = SmallRng::seed_from_u64(seed);
    for fix in fixes {
        let north = rng.gen_range(-radius_m..=radius_m);
        let east = rng.gen_range(-radius_m..=radius_m);
        fix.lat += north / METERS_PER_DEGREE_LAT;
        fix.lon += east / (METERS_PER_DEGREE_LAT * fix.lat.to_radians().cos());
    }
}
