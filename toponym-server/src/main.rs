use std::env;
use std::sync::Mutex;

use actix_cors::Cors;
use actix_web::{get, put, web, App, HttpResponse, HttpServer, Responder};
use log::info;
use serde::{Deserialize, Serialize};

use toponym_core::io::{build_output_path, read_corpus, read_snapshot, write_snapshot};
use toponym_core::model::generator::WordGenerator;

/// Query parameters for the `/v1/word` endpoint
#[derive(Deserialize)]
struct WordParams {
	min_length: Option<usize>,
	max_length: Option<usize>,
	seed: Option<u64>,
}

/// Query parameters for the `/v1/words` endpoint
#[derive(Deserialize)]
struct WordsParams {
	count: Option<usize>,
	min_length: Option<usize>,
	max_length: Option<usize>,
	allow_duplicates: Option<bool>,
	seed: Option<u64>,
}

/// JSON body for the `/v1/train` endpoint
#[derive(Deserialize)]
struct TrainBody {
	words: Vec<String>,
	order: Option<usize>,
	prior: Option<f64>,
}

#[derive(Serialize)]
struct ModelInfo {
	trained: bool,
	order: usize,
	prior: f64,
	alphabet_size: usize,
}

struct SharedData {
	generator: WordGenerator,
}

/// HTTP GET endpoint `/v1/word`
///
/// Generates a single word within the requested length bounds.
#[get("/v1/word")]
async fn get_word(data: web::Data<Mutex<SharedData>>, query: web::Query<WordParams>) -> impl Responder {
	let min_length = query.min_length.unwrap_or(3);
	let max_length = query.max_length.unwrap_or(8);

	let mut shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Model lock failed"),
	};

	if let Some(seed) = query.seed {
		shared_data.generator.reseed(seed);
	}

	HttpResponse::Ok().body(shared_data.generator.new_word(min_length, max_length))
}

/// HTTP GET endpoint `/v1/words`
///
/// Generates a batch of words, optionally deduplicated, as a JSON array.
#[get("/v1/words")]
async fn get_words(data: web::Data<Mutex<SharedData>>, query: web::Query<WordsParams>) -> impl Responder {
	let count = query.count.unwrap_or(10);
	let min_length = query.min_length.unwrap_or(3);
	let max_length = query.max_length.unwrap_or(8);
	let allow_duplicates = query.allow_duplicates.unwrap_or(true);

	if count > 10_000 {
		return HttpResponse::BadRequest().body("count must be 10000 or less");
	}

	let mut shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Model lock failed"),
	};

	if let Some(seed) = query.seed {
		shared_data.generator.reseed(seed);
	}

	let words = shared_data
		.generator
		.new_words(count, min_length, max_length, allow_duplicates);
	HttpResponse::Ok().json(words)
}

/// HTTP GET endpoint `/v1/model`
///
/// Reports the trained state of the shared model.
#[get("/v1/model")]
async fn get_model(data: web::Data<Mutex<SharedData>>) -> impl Responder {
	let shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Model lock failed"),
	};

	let model = shared_data.generator.model();
	HttpResponse::Ok().json(ModelInfo {
		trained: model.is_trained(),
		order: model.order(),
		prior: model.prior(),
		alphabet_size: model.alphabet().len(),
	})
}

/// HTTP PUT endpoint `/v1/train`
///
/// Retrains the shared model in place from the posted word list.
#[put("/v1/train")]
async fn put_train(data: web::Data<Mutex<SharedData>>, body: web::Json<TrainBody>) -> impl Responder {
	if body.words.is_empty() {
		return HttpResponse::BadRequest().body("words must not be empty");
	}
	let order = body.order.unwrap_or(3);
	if order == 0 {
		return HttpResponse::BadRequest().body("order must be at least 1");
	}
	let prior = body.prior.unwrap_or(0.0);
	if prior < 0.0 {
		return HttpResponse::BadRequest().body("prior must not be negative");
	}

	let mut shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Model lock failed"),
	};

	shared_data.generator.train(&body.words, order, prior);
	info!("retrained on {} words, order {}, prior {}", body.words.len(), order, prior);
	HttpResponse::Ok().body("trained")
}

/// Loads the startup generator: a postcard `.bin` sidecar of the corpus
/// is used when present, otherwise the corpus is trained from scratch
/// and the sidecar written for the next start.
fn load_generator(corpus_path: &str) -> Result<WordGenerator, Box<dyn std::error::Error>> {
	let snapshot_path = build_output_path(corpus_path, "bin")?;

	if snapshot_path.exists() {
		let snapshot = read_snapshot(&snapshot_path)?;
		info!("loaded snapshot from {}", snapshot_path.display());
		return Ok(WordGenerator::from_snapshot(snapshot)?);
	}

	let words = read_corpus(corpus_path)?;
	let generator = WordGenerator::new(&words, 3, 0.0);
	write_snapshot(&snapshot_path, &generator.export_snapshot())?;
	info!("trained on {} words from {}", words.len(), corpus_path);
	Ok(generator)
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
	env_logger::init();

	let corpus_path = env::args().nth(1).unwrap_or_else(|| "./data/towns.txt".to_owned());
	let generator = match load_generator(&corpus_path) {
		Ok(g) => g,
		Err(e) => return Err(std::io::Error::other(format!("failed to load {corpus_path}: {e}"))),
	};

	let data = web::Data::new(Mutex::new(SharedData { generator }));

	info!("listening on 127.0.0.1:8080");
	HttpServer::new(move || {
		App::new()
			.wrap(Cors::permissive())
			.app_data(data.clone())
			.service(get_word)
			.service(get_words)
			.service(get_model)
			.service(put_train)
	})
	.bind(("127.0.0.1", 8080))?
	.run()
	.await
}
