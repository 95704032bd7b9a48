//! Rich description decoding.

/// Markup shown when an item has no description.
pub const EMPTY_DESCRIPTION_HTML: &str = "<p>Tidak ada deskripsi untuk produk ini.</p>";

fn named_entity(name: &str) -> Option<char> {
    Some(match name {
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" => '\'',
        "nbsp" => '\u{a0}',
        "ndash" => '\u{2013}',
        "mdash" => '\u{2014}',
        "hellip" => '\u{2026}',
        "laquo" => '\u{ab}',
        "raquo" => '\u{bb}',
        "copy" => '\u{a9}',
        "reg" => '\u{ae}',
        "trade" => '\u{2122}',
        "bull" => '\u{2022}',
        "middot" => '\u{b7}',
        "times" => '\u{d7}',
        "deg" => '\u{b0}',
        "lsquo" => '\u{2018}',
        "rsquo" => '\u{2019}',
        "ldquo" => '\u{201c}',
        "rdquo" => '\u{201d}',
        _ => return None,
    })
}

fn numeric_entity(body: &str) -> Option<char> {
    let code = if let Some(hex) = body.strip_prefix(['x', 'X']) {
        u32::from_str_radix(hex, 16).ok()?
    } else {
        body.parse::<u32>().ok()?
    };
    char::from_u32(code).filter(|c| *c != '\0')
}

/// Decode HTML character references in `raw`.
///
/// The payload stores rich descriptions entity-escaped (`&lt;p&gt;…`); the
/// decoded text is the markup to render. Unknown references are kept verbatim.
#[must_use]
pub fn decode_html_entities(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let tail = &rest[amp + 1..];
        let decoded = tail.find(';').filter(|end| *end <= 10).and_then(|end| {
            let body = &tail[..end];
            let ch = match body.strip_prefix('#') {
                Some(num) => numeric_entity(num),
                None => named_entity(body),
            }?;
            Some((ch, end))
        });
        match decoded {
            Some((ch, end)) => {
                out.push(ch);
                rest = &tail[end + 1..];
            }
            None => {
                out.push('&');
                rest = tail;
            }
        }
    }
    out.push_str(rest);
    out
}

/// Markup for the description panel.
#[must_use]
pub fn description_html(rich_description: &str) -> String {
    if rich_description.trim().is_empty() {
        EMPTY_DESCRIPTION_HTML.to_string()
    } else {
        decode_html_entities(rich_description)
    }
}
