use std::fmt;

use thiserror::Error;

use crate::{crawler::StockInfo, logging};

/// The single line a run prints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    TooManyTickers,
    NoTicker,
    Price(String),
    InvalidTicker,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::TooManyTickers => write!(f, "You have specified too many tickers"),
            Outcome::NoTicker => write!(f, "No ticker provided"),
            Outcome::Price(price) => write!(f, "Latest stock price: {}", price),
            Outcome::InvalidTicker => write!(f, "{}", QuoteError::LookupFailed),
        }
    }
}

/// 查價失敗的原因只寫入日誌，不區分網路、狀態碼或版面異動
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum QuoteError {
    #[error("Invalid ticker")]
    LookupFailed,
}

/// 取得報價，任何錯誤都收斂成 `QuoteError::LookupFailed`
pub async fn lookup<S>(source: &S, ticker: &str) -> Result<String, QuoteError>
where
    S: StockInfo + Sync + ?Sized,
{
    source.get_stock_price(ticker).await.map_err(|why| {
        logging::error_file_async(format!(
            "Failed to get_stock_price({}) because {:?}",
            ticker, why
        ));
        QuoteError::LookupFailed
    })
}

/// Runs one query. `args` excludes the program name.
pub async fn run<S>(args: &[String], source: &S) -> Outcome
where
    S: StockInfo + Sync + ?Sized,
{
    let ticker = match args {
        [] => return Outcome::NoTicker,
        [ticker] => ticker,
        _ => return Outcome::TooManyTickers,
    };

    match lookup(source, ticker).await {
        Ok(price) => {
            logging::info_file_async(format!("{} price: {}", ticker, price));
            Outcome::Price(price)
        }
        Err(QuoteError::LookupFailed) => Outcome::InvalidTicker,
    }
}
