use std::path::Path;

use anyhow::Result;

use growthfit::{report, DATA_DIR, REPORT_PATH};

fn main() -> Result<()> {
    env_logger::init();

    let records = report::run_batch(Path::new(DATA_DIR))?;
    report::write_report(&records, Path::new(REPORT_PATH))?;

    log::info!("wrote {} estimate(s) to {REPORT_PATH}", records.len());
    Ok(())
}
