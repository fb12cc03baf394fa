pub mod cli;
pub mod config;
pub mod crawler;
pub mod logging;
pub mod util;

use std::env;

use crate::crawler::yahoo::Yahoo;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    let args: Vec<String> = env::args().skip(1).collect();
    let yahoo = Yahoo::from(&config::SETTINGS.quote);
    let outcome = cli::run(&args, &yahoo).await;

    println!("{}", outcome);
    logging::flush();
}
