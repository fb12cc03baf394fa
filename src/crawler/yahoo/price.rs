use anyhow::{bail, Result};
use async_trait::async_trait;
use scraper::Html;

use crate::{
    crawler::{yahoo::Yahoo, StockInfo},
    util::{self, http::element},
};

#[async_trait]
impl StockInfo for Yahoo {
    async fn get_stock_price(&self, stock_symbol: &str) -> Result<String> {
        let url = &self.quote_url(stock_symbol);
        let text = util::http::get(url).await?;

        if !element::has_body_tag(&text) {
            bail!("The response of {} has no <body>", url);
        }

        let document = Html::parse_document(&text);

        element::get_one_element(element::GetOneElementText {
            stock_symbol,
            url,
            locator: self.locator().as_locator(),
            document: &document,
        })
    }
}
