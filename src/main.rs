//! CLI driver for the property record verification and anchoring engine.
//!
//! Two document-facing subcommands (`verify`, `tamper-check`) run a single
//! file through the pipeline and print the resulting record as JSON; `serve`
//! starts the HTTP API. Exit codes follow the same taxonomy the HTTP layer
//! maps its errors onto: 0 success, 2 bad input, 3 external unavailable,
//! 4 ledger failure, 5 internal.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use classify::resilience::CircuitBreakerConfig;
use classify::{CircuitBreaker, ClassificationCache, StubClassifier};
use clap::{Parser, Subcommand};
use engine::{Adapters, DocumentType, Engine, EngineConfig, EngineError};
use extract::NullEntityModel;
use extraction::DocumentFormat;
use ledger::LocalLedger;
use risk::SystemClock;
use store::{Store, StoreConfig};
use tokio::sync::watch;
use translate::{PassthroughTranslator, TranslationCache};

use proptrust::PropTrustConfig;

#[derive(Parser)]
#[command(name = "proptrust", about = "Property record verification and anchoring engine")]
struct Cli {
    /// Path to a pipeline configuration YAML file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run a document through the full verification pipeline.
    Verify {
        /// Path to the document to verify.
        file: PathBuf,
        /// Declared document type (RTC, MR, EC, SALE_DEED).
        #[arg(long, default_value = "RTC")]
        document_type: String,
        /// Declared document format (IMAGE, PDF).
        #[arg(long, default_value = "IMAGE")]
        document_format: String,
        /// Existing property id to attach the record to; a new one is
        /// minted when omitted.
        #[arg(long)]
        property_id: Option<String>,
        /// Anchor the resulting fingerprint on the ledger.
        #[arg(long)]
        anchor: bool,
        /// Treat a ledger failure during anchoring as non-fatal.
        #[arg(long)]
        allow_ledger_failure: bool,
    },
    /// Re-present a document against a property's last anchored fingerprint.
    TamperCheck {
        /// Path to the document to check.
        file: PathBuf,
        /// Property id to check against.
        #[arg(long)]
        property_id: String,
        /// Declared document type (RTC, MR, EC, SALE_DEED).
        #[arg(long, default_value = "RTC")]
        document_type: String,
        /// Declared document format (IMAGE, PDF).
        #[arg(long, default_value = "IMAGE")]
        document_format: String,
    },
    /// Start the HTTP API.
    #[cfg(feature = "server")]
    Serve,
}

fn parse_document_type(raw: &str) -> DocumentType {
    match raw.to_ascii_uppercase().as_str() {
        "RTC" => DocumentType::Rtc,
        "MR" => DocumentType::Mr,
        "EC" => DocumentType::Ec,
        "SALE_DEED" | "SALE-DEED" | "SALEDEED" => DocumentType::SaleDeed,
        _ => DocumentType::Unknown,
    }
}

fn parse_document_format(raw: &str) -> DocumentFormat {
    match raw.to_ascii_uppercase().as_str() {
        "PDF" => DocumentFormat::Pdf,
        _ => DocumentFormat::Image,
    }
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<PropTrustConfig> {
    match path {
        Some(p) => Ok(PropTrustConfig::from_file(p)?),
        None => Ok(PropTrustConfig::default()),
    }
}

async fn build_engine(store_cfg: &StoreConfig, engine_cfg: EngineConfig) -> anyhow::Result<(Engine, Store)> {
    let store = Store::connect(store_cfg).await?;
    let ledger = Arc::new(LocalLedger::new(store.clone()));

    let adapters = Adapters {
        ocr: Arc::new(extraction::StubOcrProvider),
        translator: Arc::new(PassthroughTranslator),
        translation_cache: Arc::new(TranslationCache::new(engine_cfg.translate.cache_capacity)),
        entity_model: Arc::new(NullEntityModel),
        classifier: Arc::new(StubClassifier),
        classification_cache: Arc::new(ClassificationCache::new(engine_cfg.classify.cache_capacity)),
        classification_breaker: Arc::new(CircuitBreaker::new(CircuitBreakerConfig::default())),
        clock: Arc::new(SystemClock),
        ledger,
    };

    let engine = Engine::new(adapters, engine_cfg, store.clone());
    Ok((engine, store))
}

/// Maps an `EngineError` onto the CLI's exit-code taxonomy.
fn exit_code_for(err: &EngineError) -> u8 {
    match err {
        EngineError::InvalidInput(_) => 2,
        EngineError::Extraction(extraction::ExtractionError::UnsupportedInput(_))
        | EngineError::Extraction(extraction::ExtractionError::InvalidUtf8(_)) => 2,
        EngineError::Extraction(extraction::ExtractionError::ExternalUnavailable(_)) => 3,
        EngineError::Timeout { .. } => 3,
        EngineError::LedgerUnavailable(_) => 4,
        EngineError::LedgerRejected(_) => 4,
        EngineError::Normalize(_) => 2,
        EngineError::Cancelled => 5,
        EngineError::Store(_) => 5,
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(5)
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<u8> {
    match cli.command {
        Command::Verify {
            file,
            document_type,
            document_format,
            property_id,
            anchor,
            allow_ledger_failure,
        } => {
            let config = load_config(cli.config.as_ref())?;
            let (engine, _store) = build_engine(&config.store, config.engine).await?;
            let bytes = std::fs::read(&file)?;
            let cancel = watch::channel(false).1;

            let outcome = engine
                .verify(
                    bytes,
                    parse_document_type(&document_type),
                    parse_document_format(&document_format),
                    property_id,
                    None,
                    anchor,
                    &cancel,
                )
                .await;

            let record = match outcome {
                Ok((record, _detail)) => record,
                Err(err) => {
                    eprintln!("verification failed: {err}");
                    return Ok(exit_code_for(&err));
                }
            };

            println!("{}", serde_json::to_string_pretty(&record)?);

            if anchor && record.anchor.is_none() {
                eprintln!("warning: ledger anchoring failed; record persisted without an anchor");
                if !allow_ledger_failure {
                    return Ok(4);
                }
            }

            Ok(0)
        }
        Command::TamperCheck {
            file,
            property_id,
            document_type,
            document_format,
        } => {
            let config = load_config(cli.config.as_ref())?;
            let (engine, _store) = build_engine(&config.store, config.engine).await?;
            let bytes = std::fs::read(&file)?;
            let cancel = watch::channel(false).1;

            match engine
                .check_tamper(
                    &property_id,
                    bytes,
                    parse_document_type(&document_type),
                    parse_document_format(&document_format),
                    &cancel,
                )
                .await
            {
                Ok(check) => {
                    println!("{}", serde_json::to_string_pretty(&check)?);
                    Ok(0)
                }
                Err(err) => {
                    eprintln!("tamper check failed: {err}");
                    Ok(exit_code_for(&err))
                }
            }
        }
        #[cfg(feature = "server")]
        Command::Serve => {
            let server_config = server::ServerConfig::load()?;
            server::start_server(server_config).await?;
            Ok(0)
        }
    }
}
