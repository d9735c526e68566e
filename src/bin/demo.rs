use std::process::ExitCode;
use std::time::Instant;

use brakerski::leveled::{LeveledCiphertext, LeveledScheme};
use brakerski::logger;
use brakerski::params::ParamsBuilder;
use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use tracing::{debug, info, metadata::LevelFilter};

type AppResult<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Evaluate a few one-gate circuits under encryption and check the results.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Secret key dimension n.
    #[arg(long, default_value_t = 3)]
    dimension: usize,

    /// Ciphertext modulus q = 2^bits.
    #[arg(long, default_value_t = 16)]
    modulus_bits: u32,

    /// Level budget L.
    #[arg(long, default_value_t = 1)]
    levels: usize,

    /// Seed for a reproducible run; OS entropy otherwise.
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Clone, Copy)]
enum Gate {
    Add,
    Mul,
}

impl Gate {
    fn symbol(self) -> char {
        match self {
            Gate::Add => '+',
            Gate::Mul => '*',
        }
    }

    fn expected(self, m1: u64, m2: u64) -> u64 {
        match self {
            Gate::Add => (m1 + m2) % 2,
            Gate::Mul => (m1 * m2) % 2,
        }
    }

    fn apply(self, c1: &LeveledCiphertext, c2: &LeveledCiphertext) -> brakerski::error::Result<LeveledCiphertext> {
        match self {
            Gate::Add => c1.add(c2),
            Gate::Mul => c1.multiply(c2),
        }
    }
}

fn main() -> ExitCode {
    logger::init(LevelFilter::INFO);
    match run(Args::parse()) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> AppResult<bool> {
    let params = ParamsBuilder::new()
        .dimension(args.dimension)
        .modulus_bits(args.modulus_bits)
        .levels(args.levels)
        .build()?;
    let mut rng = match args.seed {
        Some(seed) => ChaCha20Rng::seed_from_u64(seed),
        None => ChaCha20Rng::from_os_rng(),
    };

    let start = Instant::now();
    let scheme = LeveledScheme::with_rng(&params, &mut rng)?;
    info!(
        n = params.dimension,
        q = params.modulus,
        levels = params.levels,
        "keys generated in {:?}",
        start.elapsed()
    );

    let circuits = [
        (0, 0, Gate::Add),
        (0, 1, Gate::Add),
        (1, 0, Gate::Mul),
        (1, 1, Gate::Mul),
        (0, 0, Gate::Mul),
    ];

    let mut all_ok = true;
    for (m1, m2, gate) in circuits {
        let c1 = scheme.encrypt_with_rng(m1, &mut rng)?;
        let c2 = scheme.encrypt_with_rng(m2, &mut rng)?;
        let result = gate.apply(&c1, &c2)?;
        let res = scheme.decrypt(&result)? as u64;
        debug!(noise = scheme.noise(&result)?, level = result.level(), "evaluated");

        println!("{m1} {} {m2} = {res}", gate.symbol());
        if res != gate.expected(m1, m2) {
            eprintln!("  expected {}", gate.expected(m1, m2));
            all_ok = false;
        }
    }

    Ok(all_ok)
}
