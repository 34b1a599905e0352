//! Seed the `data/` directory with synthetic sample tables, one per seed,
//! so the batch pipeline has something to chew on.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use growthfit::data::generator;
use growthfit::DATA_DIR;

const TABLE_COUNT: u64 = 5;

fn main() -> Result<()> {
    env_logger::init();

    let dir = Path::new(DATA_DIR);
    fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;

    for seed in 0..TABLE_COUNT {
        let path = dir.join(format!("elephant_{seed:02}.csv"));
        generator::write_sample_table(&path, seed)?;
        log::info!("wrote {}", path.display());
    }

    println!("Wrote {TABLE_COUNT} sample tables to {DATA_DIR}/");
    Ok(())
}
