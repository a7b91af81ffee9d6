/// Parses a CSS selector once and hands out a `&'static Selector` afterwards.
///
/// Panics on first use if the selector is malformed, so only pass literals.
#[macro_export]
macro_rules! selector {
    ($e: expr) => {{
        use ::once_cell::sync::Lazy;
        use ::scraper::Selector;
        static SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse($e).unwrap());
        &*SELECTOR
    }};
}
