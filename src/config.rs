use std::{
    env,
    path::{Path, PathBuf},
};

use anyhow::Result;
use config::{Config as config_config, File as config_file};
use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::logging;

const CONFIG_PATH: &str = "app.json";

/// 報價頁網址，`{symbol}` 會被替換成股票代號
pub const DEFAULT_URL_TEMPLATE: &str =
    "https://finance.yahoo.com/quote/{symbol}?p={symbol}&.tsrc=fin-srch";
/// 報價頁上顯示成交價的元素所帶的 class 組合
pub const DEFAULT_CLASS_SIGNATURE: &str = "Trsdu(0.3s) Fw(b) Fz(36px) Mb(-4px) D(ib)";

#[derive(Deserialize, Default, Debug, Clone, PartialEq)]
pub struct App {
    #[serde(default)]
    pub quote: Quote,
}

const QUOTE_URL_TEMPLATE: &str = "QUOTE_URL_TEMPLATE";
const QUOTE_CLASS_SIGNATURE: &str = "QUOTE_CLASS_SIGNATURE";
const QUOTE_SELECTOR: &str = "QUOTE_SELECTOR";

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Quote {
    #[serde(default = "default_url_template")]
    pub url_template: String,
    #[serde(default = "default_class_signature")]
    pub class_signature: String,
    /// CSS selector，有設定時取代 class_signature
    #[serde(default)]
    pub selector: String,
}

impl Default for Quote {
    fn default() -> Self {
        Quote {
            url_template: default_url_template(),
            class_signature: default_class_signature(),
            selector: String::new(),
        }
    }
}

fn default_url_template() -> String {
    DEFAULT_URL_TEMPLATE.to_string()
}

fn default_class_signature() -> String {
    DEFAULT_CLASS_SIGNATURE.to_string()
}

pub static SETTINGS: Lazy<App> = Lazy::new(App::new);

impl App {
    pub fn new() -> Self {
        let app = match Self::get(&config_path()) {
            Ok(app) => app,
            Err(why) => {
                logging::error_file_async(format!(
                    "I can't read the config context because {:?}",
                    why
                ));
                Default::default()
            }
        };

        app.override_with_env()
    }

    /// 設定檔不存在時回傳預設值
    fn get(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Default::default());
        }

        let config: App = config_config::builder()
            .add_source(config_file::from(path))
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// 將來至於 env 的設定值覆蓋掉 json 上的設定值
    fn override_with_env(self) -> Self {
        self.override_with(|key| env::var(key).ok())
    }

    fn override_with<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url_template) = lookup(QUOTE_URL_TEMPLATE).filter(|v| !v.is_empty()) {
            self.quote.url_template = url_template;
        }

        if let Some(class_signature) = lookup(QUOTE_CLASS_SIGNATURE).filter(|v| !v.is_empty()) {
            self.quote.class_signature = class_signature;
        }

        if let Some(selector) = lookup(QUOTE_SELECTOR).filter(|v| !v.is_empty()) {
            self.quote.selector = selector;
        }

        self
    }
}

/// 回傳設定檔的路徑
fn config_path() -> PathBuf {
    PathBuf::from(CONFIG_PATH)
}
