mod config;
mod logging;

use actix_cors::Cors;
use actix_web::{App, HttpResponse, HttpServer, Responder, get, web};
use serde::Deserialize;
use tracing::{error, info, warn};

use rs_markov_core::corpus::load_corpus;
use rs_markov_core::model::MarkovChain;

use crate::config::ServerConfig;

/// Query parameters shared by the generation endpoints.
#[derive(Deserialize)]
struct GenerateParams {
	words: Option<usize>,
}

/// Read-only state shared by every worker.
struct SharedData {
	chain: MarkovChain,
	default_words: usize,
	max_words: usize,
}

impl GenerateParams {
	/// Resolves the requested sentence length, bounded by `max`.
	fn num_words(&self, default: usize, max: usize) -> Result<usize, String> {
		match self.words {
			Some(0) => Err("words must be >= 1".into()),
			Some(n) if n > max => Err(format!("words must be <= {max}")),
			Some(n) => Ok(n),
			None => Ok(default),
		}
	}
}

impl SharedData {
	/// Generates one sentence, mapping failures to an HTTP response.
	fn sentence(&self, query: &GenerateParams) -> Result<String, HttpResponse> {
		let num_words = query
			.num_words(self.default_words, self.max_words)
			.map_err(|e| HttpResponse::BadRequest().body(e))?;

		self.chain
			.generate_sentence(num_words, &mut rand::rng())
			.map_err(|e| {
				error!(error = %e, "sentence generation failed");
				HttpResponse::InternalServerError().body(e.to_string())
			})
	}
}

/// HTTP GET endpoint `/`
///
/// Renders a generated sentence into an HTML page.
#[get("/")]
async fn get_home(data: web::Data<SharedData>, query: web::Query<GenerateParams>) -> impl Responder {
	match data.sentence(&query) {
		Ok(sentence) => HttpResponse::Ok()
			.content_type("text/html; charset=utf-8")
			.body(format!("<p>{}</p>", escape_html(&sentence))),
		Err(response) => response,
	}
}

/// HTTP GET endpoint `/v1/generate`
///
/// Returns a generated sentence as the plain-text response body.
#[get("/v1/generate")]
async fn get_generated(data: web::Data<SharedData>, query: web::Query<GenerateParams>) -> impl Responder {
	match data.sentence(&query) {
		Ok(sentence) => HttpResponse::Ok().body(sentence),
		Err(response) => response,
	}
}

/// Escapes the characters that are significant in HTML text.
fn escape_html(text: &str) -> String {
	let mut escaped = String::with_capacity(text.len());
	for c in text.chars() {
		match c {
			'&' => escaped.push_str("&amp;"),
			'<' => escaped.push_str("&lt;"),
			'>' => escaped.push_str("&gt;"),
			'"' => escaped.push_str("&quot;"),
			'\'' => escaped.push_str("&#39;"),
			_ => escaped.push(c),
		}
	}
	escaped
}

fn cors(allowed_origins: &[String]) -> Cors {
	allowed_origins
		.iter()
		.fold(Cors::default().allowed_methods(["GET"]), |cors, origin| cors.allowed_origin(origin))
}

/// Main entry point for the server.
///
/// Loads the configuration, trains the model once on the configured corpus
/// and serves it read-only from every worker.
///
/// # Notes
/// - A corpus that cannot be loaded yields an empty model, whose sentences
///   are the "no corpus" sentinel.
#[actix_web::main]
async fn main() -> anyhow::Result<()> {
	let config_path = ServerConfig::path();
	let loaded = ServerConfig::load(&config_path)?;
	let found = loaded.is_some();
	let config = loaded.unwrap_or_default();

	logging::init(&config.log_level);
	if !found {
		warn!(path = %config_path.display(), "config file not found, using defaults");
	}

	let tokens = load_corpus(&config.corpus).unwrap_or_else(|e| {
		error!(path = %config.corpus.display(), error = %e, "failed to load corpus");
		Vec::new()
	});
	let chain = MarkovChain::with_config(tokens, &config.markov)?;
	info!(words = chain.len(), "model ready");

	let shared_data = web::Data::new(SharedData {
		chain,
		default_words: config.default_words,
		max_words: config.max_words,
	});
	let allowed_origins = config.allowed_origins.clone();

	info!(host = %config.host, port = config.port, "starting server");
	HttpServer::new(move || {
		App::new()
			.wrap(cors(&allowed_origins))
			.app_data(shared_data.clone())
			.service(get_home)
			.service(get_generated)
	})
		.bind((config.host.as_str(), config.port))?
		.run()
		.await?;

	Ok(())
}
