//! CLI entrypoint for answerbot
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, anyhow, bail};
use answerbot_application::{AnswerLogger, NoAnswerLogger, QuestionAnswerer, assemble_answerer};
use answerbot_domain::{ArithmeticEvaluator, StrategyChain};
use answerbot_infrastructure::{
    ConfigLoader, FileConfig, JsonQuestionRepository, JsonlAnswerLogger,
};
use answerbot_presentation::{
    AppState, ChatRepl, Cli, ConsoleFormatter, HttpServer, HttpServerConfig, OutputFormat,
};
use clap::Parser;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(());
    }

    info!("Starting answerbot");

    // === Configuration ===
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };
    let config = apply_cli_overrides(config, &cli);

    let problems = config.validate();
    if !problems.is_empty() {
        for problem in &problems {
            eprintln!("config error: {}", problem);
        }
        bail!("Invalid configuration ({} problem(s))", problems.len());
    }
    let engine_config = config.to_engine_config();

    // === Dependency Injection ===
    let repository = match &config.questions.path {
        Some(path) => JsonQuestionRepository::load_or_empty(path),
        None => {
            info!("No questions file configured; predefined answers disabled");
            JsonQuestionRepository::empty()
        }
    };
    let chain = StrategyChain::standard(Arc::new(ArithmeticEvaluator), Arc::new(repository));
    info!("Strategy chain: {}", chain.names().join(" -> "));

    let logger: Arc<dyn AnswerLogger> = match &config.logging.transcript {
        Some(path) => match JsonlAnswerLogger::new(path) {
            Some(logger) => Arc::new(logger),
            None => {
                warn!("Answer transcript disabled");
                Arc::new(NoAnswerLogger)
            }
        },
        None => Arc::new(NoAnswerLogger),
    };

    let answerer = assemble_answerer(chain, &engine_config, logger);

    // Serve mode
    if cli.serve {
        let server_config = HttpServerConfig::new(config.server.host.clone(), config.server.port)
            .with_cors_origins(config.server.cors_origins.clone());
        let state = AppState::new(answerer, engine_config.bounds);
        HttpServer::new(state, server_config).start().await?;
        return Ok(());
    }

    // Chat mode
    if cli.chat {
        ChatRepl::new(answerer)
            .with_bounds(engine_config.bounds)
            .run()?;
        return Ok(());
    }

    // Single question mode - question is required
    let Some(question) = cli.question.as_deref() else {
        bail!("Question is required. Use --chat for interactive mode or --serve for HTTP.");
    };

    engine_config.bounds.check(question)?;
    let answer = answerer.answer_question(question)?;

    let output = match cli.output {
        OutputFormat::Json => ConsoleFormatter::format_json(question, &answer),
        OutputFormat::Text if cli.quiet => ConsoleFormatter::format_answer_only(&answer),
        OutputFormat::Text => ConsoleFormatter::format(question, &answer),
    };

    println!("{}", output);

    Ok(())
}

/// Command-line flags take precedence over every configuration source
fn apply_cli_overrides(mut config: FileConfig, cli: &Cli) -> FileConfig {
    if let Some(path) = &cli.questions {
        config.questions.path = Some(path.clone());
    }
    if cli.no_cache {
        config.cache.enabled = false;
    }
    if let Some(host) = &cli.host {
        config.server.host = host.clone();
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    config
}
