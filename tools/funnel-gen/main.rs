use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use routo::funnel::{BucketSpec, FlowSpec, FunnelSpec, StepSpec};
use std::fs;

const PALETTE: [&str; 6] = ["#3988A4", "#67C2D4", "#D0944D", "#8E6BBF", "#5FAF6B", "#C95D63"];

/// A CLI tool to generate random, internally consistent funnel definitions
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated JSON file to
    #[arg(short, long, default_value = "generated_funnel.json")]
    output: String,

    /// Number of steps in the funnel
    #[arg(long, default_value_t = 4)]
    steps: usize,

    /// The maximum number of buckets per step
    #[arg(long, default_value_t = 3)]
    max_buckets: usize,

    /// Magnitude of the single entry bucket
    #[arg(long, default_value_t = 1000)]
    entry: u32,

    /// Seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.steps == 0 || cli.max_buckets == 0 {
        eprintln!("Error: --steps and --max-buckets must both be at least 1");
        std::process::exit(1);
    }

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    println!(
        "Generating a {}-step funnel (up to {} buckets per step)...",
        cli.steps, cli.max_buckets
    );

    let funnel = generate_funnel(&mut rng, cli.steps, cli.max_buckets, f64::from(cli.entry));
    let json_output = serde_json::to_string_pretty(&funnel)?;
    fs::write(&cli.output, json_output)?;

    println!("Successfully generated and saved funnel to '{}'", cli.output);
    Ok(())
}

/// Each bucket keeps a random share of its volume as a drop and splits the
/// rest over the next step, so no bucket ever sends more than it holds.
fn generate_funnel(rng: &mut StdRng, step_count: usize, max_buckets: usize, entry: f64) -> FunnelSpec {
    let mut steps = vec![StepSpec::new(
        "Step 1",
        vec![BucketSpec::new("s0b0", "Entry", entry).with_color(PALETTE[0])],
    )];

    for step_idx in 1..step_count {
        let previous = &steps[step_idx - 1];
        let target_count = rng.random_range(1..=max_buckets);
        let mut inbound: Vec<Vec<FlowSpec>> = vec![Vec::new(); target_count];

        let mut drops = Vec::with_capacity(previous.buckets.len());
        for source in &previous.buckets {
            let value = bucket_value(source);
            let dropped = (value * rng.random_range(0.05..0.4)).round();
            let mut remaining = value - dropped;
            drops.push(dropped);

            for (target_idx, flows) in inbound.iter_mut().enumerate() {
                let share = if target_idx + 1 == target_count {
                    remaining
                } else {
                    (remaining * rng.random_range(0.2..0.8)).round()
                };
                remaining -= share;
                if share > 0.0 {
                    flows.push(FlowSpec::new(&source.id, share));
                }
            }
        }

        for (bucket, dropped) in steps[step_idx - 1].buckets.iter_mut().zip(drops) {
            if dropped > 0.0 {
                *bucket = bucket.clone().with_drop("Dropped", dropped);
            }
        }

        let buckets = inbound
            .into_iter()
            .enumerate()
            .filter(|(_, flows)| !flows.is_empty())
            .map(|(bucket_idx, flows)| {
                let value: f64 = flows.iter().map(flow_value).sum();
                let mut bucket = BucketSpec::new(
                    &format!("s{}b{}", step_idx, bucket_idx),
                    &format!("Bucket {}.{}", step_idx + 1, bucket_idx + 1),
                    value,
                )
                .with_color(PALETTE[(step_idx + bucket_idx) % PALETTE.len()]);
                bucket.flows = flows;
                bucket
            })
            .collect();

        steps.push(StepSpec::new(&format!("Step {}", step_idx + 1), buckets));
        println!("-> Generated step {}.", step_idx + 1);
    }

    FunnelSpec::new(steps)
}

fn bucket_value(bucket: &BucketSpec) -> f64 {
    match bucket.value {
        Some(routo::funnel::Magnitude::Number(n)) => n,
        _ => 0.0,
    }
}

fn flow_value(flow: &FlowSpec) -> f64 {
    match flow.value {
        Some(routo::funnel::Magnitude::Number(n)) => n,
        _ => 0.0,
    }
}
