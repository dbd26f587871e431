use std::sync::Mutex;

use actix_cors::Cors;
use actix_web::{get, put, web, App, HttpResponse, HttpServer, Responder};

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Deserialize;
use lyrics_gen_core::MarkovError;
use lyrics_gen_core::config::{self, Config, MAX_ORDER, MIN_ORDER};
use lyrics_gen_core::corpus::{find_corpus, list_corpora, train_corpus};
use lyrics_gen_core::model::generation_input::{GenerationInput, StartSeed};
use lyrics_gen_core::model::generator::Generator;
use lyrics_gen_core::model::markov_chain::MarkovChain;
use lyrics_gen_core::text::format_lyrics;

/// Query parameters of the `/v1/generate` endpoint
#[derive(Deserialize)]
struct GenerateParams {
	sentences: Option<usize>,
	seed: Option<String> // words of the first context, blank or missing -> random
}

/// Query parameters of the `/v1/train` endpoint
#[derive(Deserialize)]
struct TrainParams {
	corpus: Option<String>,
	order: Option<usize>
}

/// Trained chain and the random source, behind a single lock.
///
/// Training replaces `chain` while holding the lock, so a generation always
/// sees either the previous chain or the new one.
struct SharedData {
	config: Config,
	chain: Option<(String, MarkovChain)>,
	rng: StdRng
}

impl SharedData {
	fn new(config: Config) -> Self {
		let rng = match config.rng_seed {
			Some(seed) => StdRng::seed_from_u64(seed),
			None => StdRng::from_os_rng(),
		};
		Self { config, chain: None, rng }
	}
}

fn error_response(err: &MarkovError) -> HttpResponse {
	if err.is_input_error() {
		HttpResponse::BadRequest().body(err.to_string())
	} else {
		HttpResponse::InternalServerError().body(err.to_string())
	}
}

/// HTTP GET endpoint `/v1/generate`
///
/// Walks the trained chain and returns formatted lyrics.
#[get("/v1/generate")]
async fn get_generated(data: web::Data<Mutex<SharedData>>, query: web::Query<GenerateParams>) -> impl Responder {
	let input = match GenerationInput::new(query.sentences.unwrap_or(1)) {
		Ok(input) => input,
		Err(e) => return HttpResponse::BadRequest().body(e.to_string())
	};

	let mut shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Model lock failed"),
	};
	let shared_data = &mut *shared_data;

	let Some((_, chain)) = &shared_data.chain else {
		return HttpResponse::Conflict().body("No model trained, call /v1/train first");
	};

	let input = input
		.with_seed(StartSeed::from_text(query.seed.as_deref().unwrap_or_default()))
		.with_max_steps(shared_data.config.max_steps);

	match Generator::new(chain, &mut shared_data.rng).generate(&input) {
		Ok(tokens) => HttpResponse::Ok().body(format_lyrics(&tokens)),
		Err(e) => error_response(&e),
	}
}

#[get("/v1/corpora")]
async fn get_corpora(data: web::Data<Mutex<SharedData>>) -> impl Responder {
	let corpus_root = match data.lock() {
		Ok(m) => m.config.corpus_root.clone(),
		Err(_) => return HttpResponse::InternalServerError().body("Model lock failed"),
	};
	match list_corpora(&corpus_root) {
		Ok(corpora) => HttpResponse::Ok().body(corpora.join("\n")),
		Err(_) => HttpResponse::InternalServerError().body("Failed to list corpora")
	}
}

#[get("/v1/statistics")]
async fn get_statistics(data: web::Data<Mutex<SharedData>>) -> impl Responder {
	let shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Model lock failed"),
	};
	match &shared_data.chain {
		Some((_, chain)) => HttpResponse::Ok().json(chain.statistics()),
		None => HttpResponse::Conflict().body("No model trained, call /v1/train first"),
	}
}

#[put("/v1/train")]
async fn put_train(data: web::Data<Mutex<SharedData>>, query: web::Query<TrainParams>) -> impl Responder {
	let mut shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Model lock failed"),
	};

	let corpus = match &query.corpus {
		Some(s) if !s.trim().is_empty() => s.trim(),
		_ => return HttpResponse::BadRequest().body("Missing or empty corpus name"),
	};
	let order = match query.order {
		Some(order) if (MIN_ORDER..=MAX_ORDER).contains(&order) => order,
		Some(order) => return HttpResponse::BadRequest().body(format!("Order must be between {MIN_ORDER} and {MAX_ORDER}, got {order}")),
		None => return HttpResponse::BadRequest().body("Missing order"),
	};

	let corpus = match find_corpus(&shared_data.config.corpus_root, corpus) {
		Ok(Some(found)) => found,
		Ok(None) => return HttpResponse::NotFound().body(format!("Unknown corpus '{corpus}'")),
		Err(_) => return HttpResponse::InternalServerError().body("Failed to list corpora"),
	};

	let chain = match train_corpus(order, shared_data.config.corpus_root.join(&corpus)) {
		Ok(chain) => chain,
		Err(e) => return error_response(&e),
	};
	log::info!("trained '{}' with order {}: {} states", corpus, order, chain.len());
	shared_data.chain = Some((corpus, chain));

	HttpResponse::Ok().body("Model trained successfully")
}

/// Main entry point for the server.
///
/// Reads the configuration from the environment, wraps the shared model in a
/// `Mutex` and starts an Actix-web HTTP server.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
	env_logger::init();

	let config = config::from_env().map_err(std::io::Error::other)?;
	let address = (config.host.clone(), config.port);
	log::info!("serving corpora from {} on {}:{}", config.corpus_root.display(), address.0, address.1);

	let shared_model = web::Data::new(Mutex::new(SharedData::new(config)));

	HttpServer::new(move || {
		App::new()
			.wrap(Cors::permissive())
			.app_data(shared_model.clone())
			.service(get_generated)
			.service(get_corpora)
			.service(get_statistics)
			.service(put_train)
	})
		.bind(address)?
		.run()
		.await
}
