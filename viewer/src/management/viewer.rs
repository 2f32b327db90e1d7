use crate::management::session_manager::SessionManager;
use crate::utils::config::{Config, CONFIG_PATH};
use crate::utils::logging::*;
use crate::web::configure;
use actix_web::{web, App, HttpServer};
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::time::sleep;

pub struct Viewer;

impl Viewer {
    pub async fn run() {
        logging_information!(SystemEntry::Initializing);
        match Config::load(CONFIG_PATH).await {
            Ok(config) => Config::update(config).await,
            Err(entry) => {
                logging_emergency!(entry, format!("Config path: {CONFIG_PATH}"));
                return;
            }
        }
        let manager = web::Data::new(RwLock::new(SessionManager::new()));
        let http_server = loop {
            let config = Config::now().await;
            let manager = manager.clone();
            let http_server = HttpServer::new(move || {
                let cors = actix_cors::Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600);
                App::new()
                    .wrap(cors)
                    .app_data(manager.clone())
                    .configure(configure)
            })
            .bind(format!("0.0.0.0:{}", config.http_server_bind_port));
            match http_server {
                Ok(http_server) => break http_server,
                Err(err) => {
                    logging_critical!(SystemEntry::BindPortError(err));
                    sleep(Duration::from_secs(config.bind_retry_duration)).await;
                    continue;
                }
            }
        };
        logging_information!(SystemEntry::WebReady);
        logging_information!(SystemEntry::InitializeComplete);
        logging_information!(SystemEntry::Online);
        if let Err(err) = http_server.run().await {
            logging_emergency!(SystemEntry::WebPanic(err));
        }
    }

    pub async fn terminate() {
        logging_information!(SystemEntry::Terminating);
        logging_information!(SystemEntry::TerminateComplete);
    }
}
