use anyhow::Context;

use playbill_cli::Config;

fn main() -> anyhow::Result<()> {
    playbill_observability::init();

    let config = Config::from_env().context("invalid configuration")?;
    let output = playbill_cli::run(&config)?;

    print!("{output}");
    Ok(())
}
