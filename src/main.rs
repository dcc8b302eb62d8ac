#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use clap::Parser;

/// Simulate hidden-ship search games and report shot statistics.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    /// Shooting strategy: dummy, random, field-mask, eclipsed, mixed.
    #[arg(long, short = 'a', default_value = "mixed")]
    algo: String,

    /// Placement strategy: random, eclipsed.
    #[arg(long, short = 'p', default_value = "eclipsed")]
    placement: String,

    /// Colon-separated key=value parameters for the shooting strategy
    /// (e.g. "score_deviation=0.05").
    #[arg(long, default_value = "")]
    algo_params: String,

    /// Colon-separated key=value parameters for the placement strategy
    /// (e.g. "max_eclipse_tradeoff=3:min_eclipse_trick=false").
    #[arg(long, default_value = "")]
    placement_params: String,

    /// Number of games to simulate.
    #[arg(long, short = 'n', default_value_t = 1000)]
    num: u32,

    /// Fix the master RNG seed for reproducible runs.
    #[arg(long, short = 's')]
    seed: Option<u64>,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};
    use seabattle::{
        build_placement, init_logging, run_game, PlacementKind, ShotSelector, StrategyKind,
    };

    init_logging();
    let cli = Cli::parse();
    if cli.num == 0 {
        anyhow::bail!("--num must be at least 1");
    }

    let kind = StrategyKind::from_name(&cli.algo)
        .ok_or_else(|| anyhow::anyhow!("unsupported algo name '{}'", cli.algo))?;
    let placement_kind = PlacementKind::from_name(&cli.placement)
        .ok_or_else(|| anyhow::anyhow!("unsupported placement name '{}'", cli.placement))?;

    let selector_proto = ShotSelector::with_params(kind, &cli.algo_params)
        .map_err(|e| anyhow::anyhow!("bad --algo-params: {}", e))?;
    let placement = build_placement(placement_kind, &cli.placement_params)
        .map_err(|e| anyhow::anyhow!("bad --placement-params: {}", e))?;

    let master_seed: u64 = cli.seed.unwrap_or_else(|| rand::rng().random());
    log::info!("master seed {}", master_seed);
    let mut seed_rng = SmallRng::seed_from_u64(master_seed);

    let mut total_shots: u64 = 0;
    let mut min_shots = u32::MAX;
    let mut max_shots = 0u32;

    for game in 0..cli.num {
        // every game gets its own isolated random stream
        let mut rng = SmallRng::seed_from_u64(seed_rng.random());
        let mut selector = selector_proto.fresh_game();
        let report = run_game(&mut selector, placement.as_ref(), &mut rng)
            .map_err(|e| anyhow::anyhow!("game {} aborted: {}", game + 1, e))?;
        total_shots += u64::from(report.shots);
        min_shots = min_shots.min(report.shots);
        max_shots = max_shots.max(report.shots);
    }

    println!(
        "*** Played {} games (algo={}, placement={}): total shots={}, average={:.2}, min={}, max={}",
        cli.num,
        kind.name(),
        placement_kind.name(),
        total_shots,
        total_shots as f64 / f64::from(cli.num),
        min_shots,
        max_shots,
    );
    Ok(())
}
