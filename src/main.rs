// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Storefront CLI
//!
//! Calls the home page endpoints and prints their payloads as JSON.

use std::env;
use std::process::ExitCode;
use std::sync::Arc;

use serde_json::{json, Value};
use storefront::{api, BannerParams, Gateway, GatewayConfig, MemorySessionStore, RequestLogger};

/// Env var holding the session token
const TOKEN_ENV: &str = "STOREFRONT_TOKEN";

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("storefront=info")),
        )
        .init();

    let mut args: Vec<String> = env::args().skip(1).collect();
    let mut config = GatewayConfig::from_env();

    if let Some(pos) = args.iter().position(|a| a == "--base-url") {
        if pos + 1 >= args.len() {
            eprintln!("--base-url needs a value");
            return ExitCode::from(1);
        }
        config = config.base_url(args.remove(pos + 1));
        args.remove(pos);
    }

    let Some(command) = args.first().cloned() else {
        print_usage();
        return ExitCode::from(1);
    };

    match command.as_str() {
        "--help" | "-h" | "help" => {
            print_usage();
            return ExitCode::SUCCESS;
        }
        "--version" | "-v" | "version" => {
            println!("storefront {}", storefront::VERSION);
            return ExitCode::SUCCESS;
        }
        _ => {}
    }

    let session = match env::var(TOKEN_ENV) {
        Ok(token) => MemorySessionStore::with_token(token),
        Err(_) => MemorySessionStore::new(),
    };

    let mut gateway = match Gateway::with_defaults(config, Arc::new(session)) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("Failed to create gateway: {}", e);
            return ExitCode::from(1);
        }
    };
    gateway.add_interceptor(RequestLogger::default());

    let result = match command.as_str() {
        "banner" => {
            let params = args
                .get(1)
                .map(|site| BannerParams::site(site.as_str()))
                .unwrap_or_default();
            api::get_banner(&gateway, params).await
        }
        "new" => api::find_new(&gateway).await,
        "hot" => api::get_hot(&gateway).await,
        "goods" => api::get_goods(&gateway).await,
        "home" => load_home(&gateway).await,
        cmd => {
            eprintln!("Unknown command: {}", cmd);
            print_usage();
            return ExitCode::from(1);
        }
    };

    match result {
        Ok(payload) => {
            match serde_json::to_string_pretty(&payload) {
                Ok(text) => println!("{}", text),
                Err(_) => println!("{}", payload),
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Request failed: {}", e);
            ExitCode::from(2)
        }
    }
}

/// Fetch all four home sections concurrently
async fn load_home(gateway: &Gateway) -> storefront::Result<Value> {
    let (banner, new, hot, goods) = futures::try_join!(
        api::get_banner(gateway, BannerParams::default()),
        api::find_new(gateway),
        api::get_hot(gateway),
        api::get_goods(gateway),
    )?;

    Ok(json!({
        "banner": banner,
        "new": new,
        "hot": hot,
        "goods": goods,
    }))
}

fn print_usage() {
    println!(
        r#"Storefront - home page API client

USAGE:
    storefront [--base-url URL] <COMMAND>

COMMANDS:
    banner [site]   Banner set (site 1 = home page, 2 = category page)
    new             New arrivals
    hot             Popular items
    goods           Product modules
    home            All of the above, fetched concurrently
    help            Show this help message
    version         Show version information

ENVIRONMENT:
    STOREFRONT_TOKEN      Session token sent as a bearer token
    STOREFRONT_BASE_URL   Backend base address
    RUST_LOG              Log filter (default storefront=info)
"#
    );
}
