use log::*;

use polls::config::Config;
use polls::AppState;

#[async_std::main]
async fn main() -> Result<(), std::io::Error> {
    pretty_env_logger::init();
    let config = Config::from_env();

    match polls::create_pool(&config).await {
        Ok(db) => {
            let state = AppState::new(db).map_err(|err| {
                error!("Could not load templates! {:?}", err);
                std::io::Error::new(std::io::ErrorKind::Other, err.to_string())
            })?;

            let app = polls::app(state);
            info!("Listening on {}", config.listen_addr);
            app.listen(config.listen_addr.clone()).await?;
            Ok(())
        }
        Err(err) => {
            error!("Could not initialize pool! {:?}", err);
            Err(std::io::Error::new(std::io::ErrorKind::Other, err))
        }
    }
}
