use log::error;
use recipe_generator::{server, validate, AppConfig, RecipeError, RecipeRequest, RecipeService};
use std::env;
use std::process::ExitCode;
use tokio::io::AsyncReadExt;

const USAGE: &str = "Usage: recipe-generator [serve | generate <request.json|-> | validate <request.json|->]";

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().collect();
    let result = match args.get(1).map(String::as_str) {
        None | Some("serve") => serve().await,
        Some("generate") => generate(args.get(2)).await,
        Some("validate") => return validate_request(args.get(2)).await,
        Some("-h") | Some("--help") => {
            println!("{}", USAGE);
            Ok(())
        }
        Some(other) => {
            eprintln!("Unknown command: {}\n{}", other, USAGE);
            return ExitCode::FAILURE;
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn serve() -> Result<(), RecipeError> {
    let config = AppConfig::load()?;
    let service = RecipeService::from_config(&config)?;
    server::serve(&config.server, service).await
}

async fn generate(path: Option<&String>) -> Result<(), RecipeError> {
    let request = read_request(path).await?;
    let config = AppConfig::load()?;
    let record = RecipeService::from_config(&config)?
        .generate(&request)
        .await?;

    println!("{}", serde_json::to_string_pretty(&record)?);
    Ok(())
}

async fn validate_request(path: Option<&String>) -> ExitCode {
    let request = match read_request(path).await {
        Ok(request) => request,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let violations = validate(&request);
    if violations.is_empty() {
        println!("Input is valid");
        ExitCode::SUCCESS
    } else {
        for violation in violations {
            println!("- {}", violation);
        }
        ExitCode::FAILURE
    }
}

/// Read a request document from a file, or from stdin when the path is `-` or missing
async fn read_request(path: Option<&String>) -> Result<RecipeRequest, RecipeError> {
    let contents = match path.map(String::as_str) {
        None | Some("-") => {
            let mut buffer = String::new();
            tokio::io::stdin().read_to_string(&mut buffer).await?;
            buffer
        }
        Some(path) => tokio::fs::read_to_string(path).await?,
    };

    Ok(serde_json::from_str(&contents)?)
}
