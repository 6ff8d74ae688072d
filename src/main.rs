use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use i7card::server::{
    config::Config,
    model::search::ScoreUpSearchParams,
    service::{card::CardService, score_up::ScoreUpService, stats::StatsService},
    startup,
};

const USAGE: &str = "usage: i7card [overview | card <id> | page <n> | scoreup <key=value>...]";

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let db = match startup::connect_to_database(&config).await {
        Ok(db) => db,
        Err(e) => {
            tracing::error!("Failed to connect to database: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = args.first().map(String::as_str).unwrap_or("overview");

    let output = match command {
        "overview" => serde_json::to_string_pretty(&StatsService::new(&db).load_overview().await),
        "card" => {
            let raw_id = args.get(1).map(String::as_str).unwrap_or_default();
            match CardService::new(&db).get_card(raw_id).await {
                Ok(card) => serde_json::to_string_pretty(&card),
                Err(e) => {
                    tracing::error!("{}", e);
                    return ExitCode::FAILURE;
                }
            }
        }
        "page" => {
            let page = args.get(1).and_then(|p| p.parse().ok()).unwrap_or(1);
            serde_json::to_string_pretty(&CardService::new(&db).load_cards_page(page).await)
        }
        "scoreup" => {
            let pairs = args[1..]
                .iter()
                .filter_map(|arg| arg.split_once('='));
            match ScoreUpSearchParams::from_query_pairs(pairs) {
                Ok(params) => {
                    serde_json::to_string_pretty(&ScoreUpService::new(&db).load_page(params).await)
                }
                Err(e) => {
                    tracing::error!("{}", e);
                    return ExitCode::FAILURE;
                }
            }
        }
        _ => {
            eprintln!("{}", USAGE);
            return ExitCode::FAILURE;
        }
    };

    match output {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("Failed to serialize output: {}", e);
            ExitCode::FAILURE
        }
    }
}
