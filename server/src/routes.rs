use axum::{
	Router,
	routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::App;
use crate::{notify, settings};

pub fn init(app: App) -> Router {
	Router::new()
		.route("/", get(get_index))
		.route("/settings", get(settings::handler::get_settings))
		.route("/settings", post(settings::handler::post_settings))
		.route("/notifications", post(notify::handler::post_notification))
		.layer(TraceLayer::new_for_http())
		.layer(CorsLayer::permissive())
		.with_state(app)
}

async fn get_index() -> &'static str {
	"OK"
}

// vim: ts=4
