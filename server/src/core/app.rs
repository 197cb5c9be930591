//! App state type

use std::sync::Arc;

use crate::prelude::*;
use crate::notify::dispatch::Dispatcher;
use crate::push_adapter::PushAdapter;
use crate::routes;
use crate::settings::service::SettingsService;
use crate::store_adapter::{StoreAdapter, TokenColumn};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct AppState {
	pub settings: SettingsService,
	pub notify: Dispatcher,
	pub opts: AppBuilderOpts,
}

pub type App = Arc<AppState>;

pub struct Adapters {
	pub store_adapter: Option<Arc<dyn StoreAdapter>>,
	pub push_adapter: Option<Arc<dyn PushAdapter>>,
}

#[derive(Debug)]
pub struct AppBuilderOpts {
	pub listen: Box<str>,
	/// Identifier the notification route resolves its token for
	pub notify_target: Box<str>,
	pub token_column: TokenColumn,
}

pub struct AppBuilder {
	opts: AppBuilderOpts,
	adapters: Adapters,
}

impl AppBuilder {
	pub fn new() -> Self {
		AppBuilder {
			opts: AppBuilderOpts {
				listen: "127.0.0.1:4321".into(),
				notify_target: "companion_app".into(),
				token_column: TokenColumn::default(),
			},
			adapters: Adapters { store_adapter: None, push_adapter: None },
		}
	}

	// Opts
	pub fn listen(&mut self, listen: impl Into<Box<str>>) -> &mut Self { self.opts.listen = listen.into(); self }
	pub fn notify_target(&mut self, notify_target: impl Into<Box<str>>) -> &mut Self { self.opts.notify_target = notify_target.into(); self }
	pub fn token_column(&mut self, token_column: TokenColumn) -> &mut Self { self.opts.token_column = token_column; self }

	// Adapters
	pub fn store_adapter(&mut self, store_adapter: Arc<dyn StoreAdapter>) -> &mut Self { self.adapters.store_adapter = Some(store_adapter); self }
	pub fn push_adapter(&mut self, push_adapter: Arc<dyn PushAdapter>) -> &mut Self { self.adapters.push_adapter = Some(push_adapter); self }

	/// Assembles the app state with the injected adapters.
	pub fn build(self) -> SrvResult<App> {
		let store = self.adapters.store_adapter.ok_or(Error::Config("no store adapter".into()))?;
		let push = self.adapters.push_adapter.ok_or(Error::Config("no push adapter".into()))?;

		Ok(Arc::new(AppState {
			settings: SettingsService::new(store.clone()),
			notify: Dispatcher::new(store, push, self.opts.token_column),
			opts: self.opts,
		}))
	}

	pub async fn run(self) -> SrvResult<()> {
		tracing_subscriber::fmt()
			.with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
			.with_target(false)
			.init();
		info!("Sentra relay V{}", VERSION);

		let app = self.build()?;
		let router = routes::init(app.clone());

		let listener = tokio::net::TcpListener::bind(app.opts.listen.as_ref()).await?;
		info!("Listening on {}", app.opts.listen);
		axum::serve(listener, router).await?;

		Ok(())
	}
}

impl Default for AppBuilder {
	fn default() -> Self { Self::new() }
}

// vim: ts=4
