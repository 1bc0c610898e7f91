mod app;
mod logging;
mod options;

use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = options::Args::parse();
    logging::initialize(args.log);

    let mut stdout = std::io::stdout().lock();
    let outcome = app::run(&args, std::io::stdin(), &mut stdout).await?;
    if outcome == app::Outcome::Rejected {
        std::process::exit(1);
    }
    Ok(())
}
