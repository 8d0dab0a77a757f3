use anyhow::Context;
use slim::domain::config::AppConfig;
use slim::kernel::config::load_config;
use slim_logger::Logger;
use slim_server::Server;

#[slim_runtime::main(high_performance)]
async fn main() -> anyhow::Result<()> {
    let _log = Logger::builder()
        .name(env!("CARGO_PKG_NAME"))
        .env_filter("info,slim_minify=debug,tower_http=debug")
        .init()?;

    let cfg: AppConfig =
        load_config(None::<&str>).context("Critical: Configuration is malformed")?;

    Server::builder().config(cfg).build()?.run().await
}
