use anyhow::Result;
use async_trait::async_trait;

/// 雅虎財經
pub mod yahoo;

/// 可以查詢股票目前報價的站點
#[async_trait]
pub trait StockInfo {
    /// 回傳報價頁上顯示的價格文字，未經數值轉換
    async fn get_stock_price(&self, stock_symbol: &str) -> Result<String>;
}
