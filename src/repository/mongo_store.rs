use bson::doc;
use mongodb::options::{ClientOptions, Credential, ResolverConfig};
use mongodb::{Client, Collection, Database};
use serde::{de::DeserializeOwned, Serialize};
use tracing::{info, instrument};

use crate::config::MongoConfig;

/// The process-wide MongoDB connection.
///
/// Opened once at startup and shared by every repository; the driver pools
/// connections internally. Call [`MongoStore::shutdown`] after the HTTP server
/// has stopped so in-flight operations finish and sockets close cleanly.
#[derive(Clone)]
pub struct MongoStore {
    client: Client,
    database: Database,
    config: MongoConfig,
}

impl MongoStore {
    #[instrument(skip(config), fields(database = %config.database))]
    pub async fn connect(config: &MongoConfig) -> Result<Self, mongodb::error::Error> {
        let mut client_options = if config.uri.starts_with("mongodb+srv://") {
            ClientOptions::parse_with_resolver_config(&config.uri, ResolverConfig::cloudflare()).await?
        } else {
            ClientOptions::parse(&config.uri).await?
        };
        client_options.app_name = Some("MediCampBackend".to_string());
        client_options.max_pool_size = Some(config.pool_size);
        client_options.connect_timeout = Some(std::time::Duration::from_secs(config.connection_timeout_secs));
        client_options.server_selection_timeout = Some(std::time::Duration::from_secs(config.connection_timeout_secs));
        if let (Some(username), Some(password)) = (&config.username, &config.password) {
            client_options.credential = Some(Credential::builder()
                .username(username.clone())
                .password(password.clone())
                .build());
        }

        let client = Client::with_options(client_options)?;
        let database = client.database(&config.database);
        info!("MongoDB client created");
        Ok(MongoStore { client, database, config: config.clone() })
    }

    /// Round-trips a `ping` to the deployment.
    pub async fn ping(&self) -> Result<(), mongodb::error::Error> {
        self.client.database("admin").run_command(doc! { "ping": 1 }, None).await?;
        info!("Pinged your deployment. Successfully connected to MongoDB");
        Ok(())
    }

    pub fn collection<T>(&self, name: &str) -> Collection<T>
    where
        T: Serialize + DeserializeOwned + Unpin + Send + Sync,
    {
        self.database.collection::<T>(name)
    }

    pub fn config(&self) -> &MongoConfig {
        &self.config
    }

    pub async fn shutdown(self) {
        info!("Closing MongoDB connection");
        self.client.shutdown().await;
    }
}
