use dragodb::{Config, InputLines, Shell, Store};
use once_cell::sync::Lazy;
use tokio::io::{self, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

static CONFIG: Lazy<Config> = Lazy::new(Config::from_env);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dragodb=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let store = Store::new();
    tracing::info!(color = CONFIG.color, banner = CONFIG.banner, "starting shell");

    let mut lines = InputLines::new(BufReader::new(io::stdin()));
    let mut stdout = io::stdout();
    Shell::new(store, CONFIG.clone())
        .run(&mut lines, &mut stdout)
        .await
}
