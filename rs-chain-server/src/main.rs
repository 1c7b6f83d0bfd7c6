use std::path::PathBuf;
use std::sync::Mutex;

use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{get, put, web, App, HttpResponse, HttpServer, Responder};
use clap::Parser;
use serde::Deserialize;

use rs_chain_core::io::{get_filename, list_files, read_file};
use rs_chain_core::model::generator::Generator;

/// Hard cap on the requested chain length. The search recurses once per
/// token, so this also bounds stack depth.
const MAX_LENGTH: usize = 1024;

/// Chain length used when the query does not provide one.
const DEFAULT_LENGTH: usize = 10;

/// Struct representing query parameters for the `/v1/generate` endpoint
#[derive(Deserialize)]
struct GenerateParams {
	length: Option<usize>,
}

#[derive(Deserialize)]
struct CorpusQuery {
	names: Option<String>,
}

struct SharedData {
	generator: Generator,
	loaded: Vec<String>,
	data_dir: PathBuf,
}

#[derive(Parser)]
#[command(name = "rs-chain-server", about = "HTTP front end for the chain generator")]
struct Cli {
	/// Address to bind
	#[arg(long, default_value = "127.0.0.1")]
	bind: String,

	/// Port to listen on
	#[arg(short, long, default_value = "5000")]
	port: u16,

	/// Directory holding .txt corpus files
	#[arg(long, default_value = "./data")]
	data: PathBuf,
}

/// HTTP GET endpoint `/v1/generate`
///
/// Draws one chain of `length` tokens from the loaded corpora and returns
/// it space-joined as the response body. A model that admits no chain of
/// the requested length answers 404.
#[get("/v1/generate")]
async fn get_generated(data: web::Data<Mutex<SharedData>>, query: web::Query<GenerateParams>) -> impl Responder {
	let length = query.length.unwrap_or(DEFAULT_LENGTH);
	if length > MAX_LENGTH {
		return HttpResponse::BadRequest().body(format!("Length must be at most {MAX_LENGTH}"));
	}

	let shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Generator lock failed"),
	};

	match shared_data.generator.generate(length) {
		Ok(chain) => HttpResponse::Ok().body(chain.join(" ")),
		Err(e) => HttpResponse::NotFound().body(e.to_string()),
	}
}

#[get("/v1/corpora")]
async fn get_corpora(data: web::Data<Mutex<SharedData>>) -> impl Responder {
	let shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Generator lock failed"),
	};

	match list_files(&shared_data.data_dir, "txt") {
		Ok(files) => {
			let names: Vec<String> = files.iter().filter_map(|f| get_filename(f).ok()).collect();
			HttpResponse::Ok().body(names.join("\n"))
		}
		Err(_) => HttpResponse::InternalServerError().body("Failed to list corpora"),
	}
}

#[get("/v1/loaded_corpora")]
async fn get_loaded_corpora(data: web::Data<Mutex<SharedData>>) -> impl Responder {
	let shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Generator lock failed"),
	};
	HttpResponse::Ok().body(shared_data.loaded.join("\n"))
}

/// HTTP PUT endpoint `/v1/load_corpora`
///
/// Replaces the in-memory model with one trained on the named corpus
/// files. Each file is ingested as its own sequence, so generated chains
/// never cross a file boundary. The swap happens only after every named
/// corpus has been read.
#[put("/v1/load_corpora")]
async fn put_corpora(data: web::Data<Mutex<SharedData>>, query: web::Query<CorpusQuery>) -> impl Responder {
	let mut shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Generator lock failed"),
	};

	let query_names = match &query.names {
		Some(s) if !s.trim().is_empty() => s.trim(),
		_ => return HttpResponse::BadRequest().body("Missing or empty corpus name"),
	};

	let corpus_names: Vec<&str> = query_names
		.split(',')
		.map(|s| s.trim())
		.filter(|s| !s.is_empty())
		.collect();
	if corpus_names.is_empty() {
		// Lists like "names=,," name nothing; never swap in an empty model.
		return HttpResponse::BadRequest().body("Missing or empty corpus name");
	}

	let mut generator = Generator::new();
	let mut loaded = Vec::new();
	for name in corpus_names {
		let corpus_path = shared_data.data_dir.join(format!("{name}.txt"));
		let contents = match read_file(&corpus_path) {
			Ok(c) => c,
			Err(e) => return HttpResponse::InternalServerError().body(format!("Failed to read corpus: {e}")),
		};
		generator.add_sequence(contents.split_whitespace());
		loaded.push(name.to_owned());
	}

	log::info!(
		"Loaded {} corpora ({} distinct tokens)",
		loaded.len(),
		generator.map().len()
	);

	shared_data.generator = generator;
	shared_data.loaded = loaded;

	HttpResponse::Ok().body("Corpora loaded successfully")
}

/// Main entry point for the server.
///
/// Starts with an empty model, wraps it in a `Mutex` for thread safety,
/// and serves the generation and corpus management endpoints.
///
/// # Notes
/// - The model starts empty; train it with `PUT /v1/load_corpora`.
/// - All workers share one model; loads swap it under the lock.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
	let cli = Cli::parse();

	env_logger::Builder::from_default_env()
		.filter_level(log::LevelFilter::Info)
		.init();

	let shared_data = SharedData {
		generator: Generator::new(),
		loaded: Vec::new(),
		data_dir: cli.data.clone(),
	};
	let shared_generator = web::Data::new(Mutex::new(shared_data));

	log::info!("Listening on {}:{}, corpora from {}", cli.bind, cli.port, cli.data.display());

	HttpServer::new(move || {
		App::new()
			.app_data(shared_generator.clone())
			.wrap(Logger::default())
			.wrap(Cors::permissive())
			.service(get_generated)
			.service(get_corpora)
			.service(put_corpora)
			.service(get_loaded_corpora)
	})
		.bind((cli.bind.as_str(), cli.port))?
		.run()
		.await
}
