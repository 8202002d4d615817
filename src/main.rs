use std::env;
use std::io::{self, BufRead, Write};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;

use materna::core::config::{AppConfig, AppPaths};
use materna::core::logging;
use materna::ingest::WebLoader;
use materna::llm::OpenAiProvider;
use materna::rag::{ArticlePipeline, QueryResponse};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let paths = AppPaths::new();
    let _log_guard = logging::init(&paths);

    let config = AppConfig::load(&paths).context("Failed to load configuration")?;
    config.validate().context("Invalid configuration")?;

    let api_key = env::var("MATERNA_API_KEY").ok();
    if api_key.is_none() {
        tracing::warn!("MATERNA_API_KEY is not set; provider calls may be rejected");
    }

    let provider = Arc::new(OpenAiProvider::new(&config.provider, api_key));
    let loader = Arc::new(
        WebLoader::new(Duration::from_secs(config.articles.fetch_timeout_secs))
            .context("Failed to build HTTP client")?,
    );

    let pipeline = ArticlePipeline::new(&config, loader, provider.clone(), provider);

    if paths.index_path.exists() {
        pipeline
            .initialize_from_snapshot(&paths.index_path)
            .await
            .context("Failed to load index snapshot")?;
    } else {
        pipeline
            .initialize()
            .await
            .context("Failed to build article index")?;
        if let Err(err) = pipeline.save_index(&paths.index_path) {
            tracing::warn!("Could not save index snapshot: {}", err);
        }
    }

    let (weeks, question) = parse_args(env::args().skip(1));

    match question {
        Some(question) => {
            let response = pipeline.query(&personalize(&question, weeks)).await?;
            print_response(&response);
        }
        None => {
            interactive_loop(&pipeline, weeks).await?;
        }
    }

    Ok(())
}

/// `[--weeks N] [question ...]`
fn parse_args(args: impl Iterator<Item = String>) -> (Option<u32>, Option<String>) {
    let mut weeks = None;
    let mut rest = Vec::new();
    let mut args = args;

    while let Some(arg) = args.next() {
        if arg == "--weeks" {
            weeks = args.next().and_then(|v| v.parse().ok());
        } else {
            rest.push(arg);
        }
    }

    let question = if rest.is_empty() {
        None
    } else {
        Some(rest.join(" "))
    };
    (weeks, question)
}

fn personalize(question: &str, weeks: Option<u32>) -> String {
    match weeks {
        Some(weeks) => format!("Pregnancy Week {}: {}", weeks, question),
        None => question.to_string(),
    }
}

async fn interactive_loop(pipeline: &ArticlePipeline, weeks: Option<u32>) -> anyhow::Result<()> {
    println!("Ask questions about pregnancy health ('exit' to quit).");
    println!("This is a recommendation system only. For emergencies, seek medical help.");

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let question = line.trim();
        if question.is_empty() {
            continue;
        }
        if question.eq_ignore_ascii_case("exit") {
            break;
        }

        match pipeline.query(&personalize(question, weeks)).await {
            Ok(response) => print_response(&response),
            Err(err) => eprintln!("Error while querying: {}", err),
        }
    }

    Ok(())
}

fn print_response(response: &QueryResponse) {
    println!("\nAnswer:\n{}\n", response.answer);
    println!("Sources:");
    for (i, source) in response.sources.iter().enumerate() {
        println!("\nSource {}:", i + 1);
        println!("URL: {}", source.url);
        println!("Summary: {}", source.summary);
    }
    println!();
}
