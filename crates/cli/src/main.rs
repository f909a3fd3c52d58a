use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use rand::{rngs::StdRng, SeedableRng};
use serde::Serialize;
use smallest_circle::api::{
    draw_points, make_circle_with_rng, radius_ratio_vs_naive, Circle, CloudReplay, Point,
    PointCloud,
};
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Smallest enclosing circle experiment runner")]
struct Cmd {
    /// Log library debug events (re-anchor counts)
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Compute the circle of a seeded point cloud and write it as JSON
    Run {
        #[command(flatten)]
        cloud: CloudArgs,
        #[arg(long)]
        out: PathBuf,
    },
    /// Recompute with independent shuffles and report the spread of results
    Trials {
        #[command(flatten)]
        cloud: CloudArgs,
        #[arg(long, default_value_t = 16)]
        trials: u64,
        #[arg(long, default_value_t = 1e-9)]
        tol: f64,
    },
    /// Compare against the brute-force reference (small n only)
    Check {
        #[command(flatten)]
        cloud: CloudArgs,
        #[arg(long, default_value_t = 1e-9)]
        tol: f64,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Dist {
    Square,
    Disk,
    Gaussian,
    Lattice,
}

#[derive(Args, Clone, Copy, Debug)]
struct CloudArgs {
    #[arg(long, value_enum, default_value_t = Dist::Disk)]
    dist: Dist,
    #[arg(long, default_value_t = 1000)]
    n: usize,
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// Half-width, radius, sigma or lattice spacing, depending on `dist`
    #[arg(long, default_value_t = 1.0)]
    scale: f64,
    /// Lattice nodes per axis (lattice only)
    #[arg(long, default_value_t = 16)]
    side: usize,
}

impl CloudArgs {
    fn cloud(&self) -> PointCloud {
        match self.dist {
            Dist::Square => PointCloud::Square {
                half_width: self.scale,
            },
            Dist::Disk => PointCloud::Disk { radius: self.scale },
            Dist::Gaussian => PointCloud::Gaussian { sigma: self.scale },
            Dist::Lattice => PointCloud::Lattice {
                spacing: self.scale,
                side: self.side,
            },
        }
    }

    fn dist_name(&self) -> String {
        format!("{:?}", self.dist).to_lowercase()
    }

    fn params(&self) -> serde_json::Value {
        serde_json::json!({
            "dist": self.dist_name(),
            "n": self.n,
            "seed": self.seed,
            "scale": self.scale,
            "side": self.side,
        })
    }

    fn points(&self) -> Vec<Point> {
        draw_points(self.cloud(), self.n, CloudReplay::new(self.seed, 0))
    }
}

/// Serialized result of a single run; `x`, `y`, `r` are null for empty input.
#[derive(Debug, Serialize)]
struct CircleRecord {
    dist: String,
    n: usize,
    seed: u64,
    x: Option<f64>,
    y: Option<f64>,
    r: Option<f64>,
}

impl CircleRecord {
    fn new(cloud: &CloudArgs, c: Option<Circle>) -> Self {
        Self {
            dist: cloud.dist_name(),
            n: cloud.n,
            seed: cloud.seed,
            x: c.map(|c| c.x()),
            y: c.map(|c| c.y()),
            r: c.map(|c| c.r),
        }
    }
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .init();
    match cmd.action {
        Action::Run { cloud, out } => run(&cloud, &out).map(|_| ()),
        Action::Trials { cloud, trials, tol } => {
            let spread = trials_spread(&cloud, trials)?;
            println!(
                "{}",
                serde_json::to_string_pretty(&serde_json::json!({
                    "params": cloud.params(),
                    "trials": trials,
                    "max_deviation": spread,
                }))?
            );
            if spread > tol {
                bail!("results of independent shuffles differ by {spread:e} (tol {tol:e})");
            }
            Ok(())
        }
        Action::Check { cloud, tol } => check(&cloud, tol).map(|_| ()),
        Action::Report => report(),
    }
}

/// Compute one circle and write `out` plus its provenance sidecar.
fn run(cloud: &CloudArgs, out: &Path) -> Result<CircleRecord> {
    tracing::info!(dist = ?cloud.dist, n = cloud.n, seed = cloud.seed, out = %out.display(), "run");
    let pts = cloud.points();
    let mut rng = StdRng::seed_from_u64(cloud.seed);
    let c = make_circle_with_rng(&pts, &mut rng);
    let record = CircleRecord::new(cloud, c);
    tracing::info!(x = ?record.x, y = ?record.y, r = ?record.r, "circle");

    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    std::fs::write(out, serde_json::to_vec_pretty(&record)?)
        .with_context(|| format!("writing {}", out.display()))?;

    provenance::write_sidecar(out, provenance::Payload::new(cloud.params()))?;
    Ok(record)
}

/// Largest componentwise deviation from the first trial over `trials` shuffles.
fn trials_spread(cloud: &CloudArgs, trials: u64) -> Result<f64> {
    let pts = cloud.points();
    let mut first: Option<Circle> = None;
    let mut spread: f64 = 0.0;
    for t in 0..trials.max(1) {
        let mut rng = CloudReplay::new(cloud.seed, t + 1).to_std_rng();
        let Some(c) = make_circle_with_rng(&pts, &mut rng) else {
            return Ok(0.0);
        };
        let base = *first.get_or_insert(c);
        spread = spread
            .max((c.x() - base.x()).abs())
            .max((c.y() - base.y()).abs())
            .max((c.r - base.r).abs());
    }
    tracing::info!(trials, spread, "trials");
    Ok(spread)
}

/// Relative radius error against the brute-force reference.
fn check(cloud: &CloudArgs, tol: f64) -> Result<f64> {
    const NAIVE_MAX_N: usize = 200;
    if cloud.n > NAIVE_MAX_N {
        bail!(
            "check needs n <= {NAIVE_MAX_N} (reference is O(n^4)), got {}",
            cloud.n
        );
    }
    let pts = cloud.points();
    let mut rng = StdRng::seed_from_u64(cloud.seed);
    let Some(ratio) = radius_ratio_vs_naive(&pts, &mut rng) else {
        return Ok(0.0);
    };
    tracing::info!(ratio, "check");
    ensure_ratio(ratio, tol)
}

/// Relative radius error `|ratio - 1|`, or an error when it exceeds `tol`.
fn ensure_ratio(ratio: f64, tol: f64) -> Result<f64> {
    let rel = (ratio - 1.0).abs();
    if rel.is_nan() || rel > tol {
        bail!("radius mismatch: incremental/reference = {ratio} (rel {rel:e}, tol {tol:e})");
    }
    Ok(rel)
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "version": smallest_circle::VERSION,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn cloud(dist: Dist, n: usize) -> CloudArgs {
        CloudArgs {
            dist,
            n,
            seed: 7,
            scale: 1.0,
            side: 8,
        }
    }

    #[test]
    fn run_writes_record_and_sidecar() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("nested").join("circle.json");
        let record = run(&cloud(Dist::Square, 100), &out).unwrap();
        assert!(record.r.unwrap() <= 2.0_f64.sqrt() + 1e-12);

        let parsed: serde_json::Value =
            serde_json::from_slice(&std::fs::read(&out).unwrap()).unwrap();
        assert_eq!(parsed["dist"], "square");
        assert_eq!(parsed["n"], 100);
        assert!(dir
            .path()
            .join("nested")
            .join("circle.provenance.json")
            .exists());
    }

    #[test]
    fn run_empty_cloud_writes_nulls() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("empty.json");
        let record = run(&cloud(Dist::Disk, 0), &out).unwrap();
        assert!(record.r.is_none());
        let parsed: serde_json::Value =
            serde_json::from_slice(&std::fs::read(&out).unwrap()).unwrap();
        assert!(parsed["r"].is_null());
    }

    #[test]
    fn trials_agree() {
        let spread = trials_spread(&cloud(Dist::Gaussian, 500), 8).unwrap();
        assert!(spread < 1e-9, "spread {spread}");
    }

    #[test]
    fn check_passes_and_rejects_large_n() {
        assert!(check(&cloud(Dist::Lattice, 30), 1e-9).unwrap() < 1e-9);
        assert!(check(&cloud(Dist::Disk, 1000), 1e-9).is_err());
    }

    #[test]
    fn check_passes_at_large_magnitude() {
        for seed in 0..5 {
            let args = CloudArgs {
                scale: 1e5,
                seed,
                ..cloud(Dist::Disk, 40)
            };
            let rel = check(&args, 1e-9).unwrap();
            assert!(rel < 1e-9, "seed {seed}: rel {rel:e}");
        }
    }

    #[test]
    fn check_tolerance_is_relative_for_small_radii() {
        // r = 1e-6 off by 5e-10: tiny in absolute terms, 5e-4 relative.
        let ratio = (1e-6 + 5e-10) / 1e-6;
        assert!(ensure_ratio(ratio, 1e-9).is_err());
        assert!(ensure_ratio(1.0, 1e-9).is_ok());
        assert!(ensure_ratio(f64::INFINITY, 1e-9).is_err());
        assert!(ensure_ratio(f64::NAN, 1e-9).is_err());
    }

    #[test]
    fn cli_parses_flattened_cloud_args() {
        let cmd = Cmd::try_parse_from([
            "cli", "trials", "--dist", "lattice", "--n", "40", "--side", "4", "--trials", "3",
        ])
        .unwrap();
        match cmd.action {
            Action::Trials { cloud, trials, .. } => {
                assert_eq!(cloud.dist, Dist::Lattice);
                assert_eq!(cloud.n, 40);
                assert_eq!(trials, 3);
                assert_eq!(
                    cloud.cloud(),
                    PointCloud::Lattice {
                        spacing: 1.0,
                        side: 4
                    }
                );
            }
            _ => panic!("expected trials"),
        }
    }
}
