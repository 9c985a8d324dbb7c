use server::{setup_logger, state::State};
use structopt::StructOpt;
use tracing::debug;

#[derive(Debug, StructOpt)]
#[structopt(name = "server", about = "password security verification service")]
struct Opt {
    /// Path to the TOML configuration file
    #[structopt(short, long)]
    config: Option<String>,

    /// Listen address override, e.g. 127.0.0.1:8081
    #[structopt(short, long)]
    listen: Option<String>,
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    setup_logger()?;

    let opt = Opt::from_args();
    let config_path = opt
        .config
        .unwrap_or_else(|| common::consts::CONFIG_PATH.to_string());

    let mut state = State::new(&config_path).await?;
    if let Some(listen) = opt.listen {
        state.config.listen_addr = listen;
    }

    debug!("ready!");

    server::http_server::run(state).await?;
    Ok(())
}
