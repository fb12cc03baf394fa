use anyhow::{anyhow, Result};
use scraper::{ElementRef, Html, Selector};

/// Parses a CSS selector, turning scraper's borrowed error into an owned one.
pub fn parse_selector(css_selector: &str) -> Result<Selector> {
    Selector::parse(css_selector)
        .map_err(|why| anyhow!("Failed to Selector::parse({}) because: {:?}", css_selector, why))
}

/// Returns the concatenated text of `element` with surrounding whitespace removed.
///
/// # Examples
///
/// ```ignore
/// let document = Html::parse_document(r#"<div class="price"> 100.50 </div>"#);
/// let selector = Selector::parse("div.price").unwrap();
/// let element = document.select(&selector).next().unwrap();
///
/// assert_eq!(element_text(&element), "100.50");
/// ```
pub fn element_text(element: &ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// html5ever 一定會補上 `<body>`，所以要看原始內容裡是否真的有這個標籤
pub fn has_body_tag(text: &str) -> bool {
    text.to_ascii_lowercase().contains("<body")
}

/// 將 class 字串依空白切開後以單一空白重新串接
pub fn normalize_classes(classes: &str) -> String {
    classes.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Finds the first element inside `<body>` whose class tokens, joined by a
/// single space, equal `signature`. Token order matters, spacing does not.
pub fn find_by_class_signature<'a>(document: &'a Html, signature: &str) -> Option<ElementRef<'a>> {
    let signature = normalize_classes(signature);
    let body = parse_selector("body").ok()?;

    document
        .select(&body)
        .next()?
        .descendants()
        .skip(1)
        .filter_map(ElementRef::wrap)
        .find(|element| element.value().classes().collect::<Vec<_>>().join(" ") == signature)
}

/// How the target element is located in the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locator<'a> {
    /// Exact class token sequence of one element under `<body>`.
    ClassSignature(&'a str),
    /// Any CSS selector; the first match wins.
    Selector(&'a str),
}

/// A structure that represents the information needed to extract text from a particular HTML element.
#[derive(Debug, Clone)]
pub struct GetOneElementText<'a> {
    /// Stock symbol, often used for identifying stocks uniquely.
    pub stock_symbol: &'a str,
    /// The URL the document was fetched from.
    pub url: &'a str,
    pub locator: Locator<'a>,
    pub document: &'a Html,
}

/// Extracts the trimmed text of the first element found by `target.locator`.
///
/// # Returns
///
/// * `Result<String>` - On success, the element's text. On failure, an error
///   saying whether the selector was invalid or the element was not found.
pub fn get_one_element(target: GetOneElementText<'_>) -> Result<String> {
    let found = match target.locator {
        Locator::ClassSignature(signature) => {
            find_by_class_signature(target.document, signature).map(|element| element_text(&element))
        }
        Locator::Selector(css_selector) => {
            let selector = parse_selector(css_selector)?;
            target
                .document
                .select(&selector)
                .next()
                .map(|element| element_text(&element))
        }
    };

    found.ok_or_else(|| {
        anyhow!(
            "The element({:?}) of {} not found from {}",
            target.locator,
            target.stock_symbol,
            target.url
        )
    })
}
