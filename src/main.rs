use cms_backend::{config::Config, database::bootstrap, logging::init_logger};

#[tokio::main]
async fn main() {
    // 加载配置
    let config = match Config::from_toml() {
        Ok(config) => config,
        Err(e) => {
            init_logger("info");
            log::error!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };
    init_logger(&config.log.level);

    // 连接数据库并同步表结构
    let store = match bootstrap(&config.database).await {
        Ok(store) => store,
        Err(e) => {
            log::error!("Bootstrap failed [{}]: {e}", e.code());
            std::process::exit(1);
        }
    };

    for table in store.registry().tables() {
        log::info!(
            "Table {} ready ({} columns{})",
            table.name,
            table.columns.len(),
            if table.junction { ", join table" } else { "" }
        );
    }
    log::info!("Schema is up to date");
}
