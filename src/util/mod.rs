pub(crate) fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}

/// Mint an id for a newly created menu item.
///
/// Wall-clock time alone collides when two items are created within the
/// same millisecond, so a random suffix is appended.
pub(crate) fn mint_item_id() -> String {
    format_item_id(now_ms(), (js_sys::Math::random() * 1e9) as u64)
}

pub(crate) fn format_item_id(now_ms: u64, rand: u64) -> String {
    format!("{now_ms}-{rand}")
}

/// Whether `input` parses as an absolute URL (scheme included).
///
/// Relative references like `/promotions` or bare hosts like
/// `example.com` do not count; the form layer treats an empty field as
/// "no link" before ever calling this.
pub(crate) fn is_valid_absolute_url(input: &str) -> bool {
    url::Url::parse(input).is_ok()
}
