//! # Yahoo 財經採集模組
//!
//! 從 Yahoo 財經的報價頁抓取單一證券的最新成交價。
//!
//! ## 站點資訊
//!
//! - 來源域名：`finance.yahoo.com`（可由設定檔覆寫）
//! - 抓取技術：HTTP GET 搭配 CSS Selector 解析。

use crate::{config, util::http::element};

/// 即時報價採集子模組
pub mod price;

/// 網址樣板中代表股票代號的佔位字串
const SYMBOL_PLACEHOLDER: &str = "{symbol}";

/// 價格元素的定位方式
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PriceLocator {
    /// 與 `<body>` 內某個元素的 class 組合完全相同（忽略空白差異）
    ClassSignature(String),
    /// CSS selector
    Selector(String),
}

impl PriceLocator {
    pub fn as_locator(&self) -> element::Locator<'_> {
        match self {
            PriceLocator::ClassSignature(signature) => element::Locator::ClassSignature(signature),
            PriceLocator::Selector(selector) => element::Locator::Selector(selector),
        }
    }
}

/// Yahoo 財經採集器
///
/// 報價頁網址與價格元素的定位方式都由外部注入，測試時可換成本機頁面。
#[derive(Debug, Clone, PartialEq)]
pub struct Yahoo {
    url_template: String,
    locator: PriceLocator,
}

impl Yahoo {
    pub fn new(url_template: impl Into<String>, locator: PriceLocator) -> Self {
        Yahoo {
            url_template: url_template.into(),
            locator,
        }
    }

    /// 股票代號原樣帶入網址，不做任何檢查
    pub fn quote_url(&self, stock_symbol: &str) -> String {
        self.url_template.replace(SYMBOL_PLACEHOLDER, stock_symbol)
    }

    pub fn locator(&self) -> &PriceLocator {
        &self.locator
    }
}

impl From<&config::Quote> for Yahoo {
    fn from(quote: &config::Quote) -> Self {
        let locator = if quote.selector.is_empty() {
            PriceLocator::ClassSignature(quote.class_signature.clone())
        } else {
            PriceLocator::Selector(quote.selector.clone())
        };

        Yahoo::new(quote.url_template.as_str(), locator)
    }
}
