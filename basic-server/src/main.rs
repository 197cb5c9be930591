use std::{env, path::PathBuf, sync::Arc};

use sentra::AppBuilder;
use sentra::prelude::*;
use sentra::store_adapter::TokenColumn;
use sentra_push_adapter_fcm::FcmPushAdapter;
use sentra_store_adapter_sqlite::StoreAdapterSqlite;

pub struct Config {
	pub listen: String,
	pub db_dir: PathBuf,
	pub fcm_project_id: String,
	pub fcm_access_token: String,
	pub notify_target: Option<String>,
	pub token_column: Option<String>,
}

impl Config {
	fn from_env() -> SrvResult<Self> {
		Ok(Config {
			listen: env::var("LISTEN").unwrap_or("127.0.0.1:4321".to_string()),
			db_dir: PathBuf::from(env::var("DB_DIR").unwrap_or("./data".to_string())),
			fcm_project_id: env::var("FCM_PROJECT_ID")
				.map_err(|_| Error::Config("FCM_PROJECT_ID must be set".into()))?,
			fcm_access_token: env::var("FCM_ACCESS_TOKEN")
				.map_err(|_| Error::Config("FCM_ACCESS_TOKEN must be set".into()))?,
			notify_target: env::var("NOTIFY_TARGET").ok(),
			token_column: env::var("TOKEN_COLUMN").ok(),
		})
	}
}

#[tokio::main]
async fn main() -> SrvResult<()> {
	let config = Config::from_env()?;

	std::fs::create_dir_all(&config.db_dir)?;
	let store_adapter =
		Arc::new(StoreAdapterSqlite::new(config.db_dir.join("store.db")).await?);
	let push_adapter =
		Arc::new(FcmPushAdapter::new(&config.fcm_project_id, config.fcm_access_token)?);

	let mut builder = AppBuilder::new();
	builder.listen(config.listen).store_adapter(store_adapter).push_adapter(push_adapter);
	if let Some(notify_target) = config.notify_target {
		builder.notify_target(notify_target);
	}
	if let Some(token_column) = config.token_column {
		builder.token_column(token_column.parse::<TokenColumn>()?);
	}

	builder.run().await
}

// vim: ts=4
