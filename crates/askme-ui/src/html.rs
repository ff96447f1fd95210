//! Plain-text rendering of server-supplied HTML bubbles.
//!
//! egui has no HTML layout, so markup such as the summarizer's
//! `<div class="summary-card"><h4>Summary</h4><ul><li>…</li></ul></div>`
//! is flattened: block elements start new lines, list items become
//! `• ` bullets, and common entities are decoded. Unknown tags are dropped.

const BLOCK_TAGS: &[&str] = &[
    "p", "div", "ul", "ol", "li", "h1", "h2", "h3", "h4", "h5", "h6", "tr", "table",
    "section", "article", "blockquote", "pre",
];

pub fn to_plain_text(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut chars = html.chars().peekable();
    let mut skip_until: Option<&'static str> = None;

    while let Some(c) = chars.next() {
        match c {
            '<' => {
                let mut tag = String::new();
                for t in chars.by_ref() {
                    if t == '>' {
                        break;
                    }
                    tag.push(t);
                }
                let closing = tag.starts_with('/');
                let name = tag_name(&tag);

                if let Some(end) = skip_until {
                    if closing && name == end {
                        skip_until = None;
                    }
                    continue;
                }

                match name.as_str() {
                    "script" if !closing => skip_until = Some("script"),
                    "style" if !closing => skip_until = Some("style"),
                    "br" => {
                        trim_trailing_spaces(&mut out);
                        out.push('\n');
                    }
                    "li" if !closing => {
                        ensure_line_start(&mut out);
                        out.push_str("• ");
                    }
                    n if BLOCK_TAGS.contains(&n) => ensure_line_start(&mut out),
                    _ => {}
                }
            }
            _ if skip_until.is_some() => {}
            '&' => {
                let mut entity = String::new();
                while let Some(&n) = chars.peek() {
                    if n == ';' || entity.len() > 8 || n == '&' || n == '<' || n.is_whitespace() {
                        break;
                    }
                    entity.push(n);
                    chars.next();
                }
                match (chars.peek() == Some(&';'), decode_entity(&entity)) {
                    (true, Some(decoded)) => {
                        chars.next();
                        out.push(decoded);
                    }
                    _ => {
                        out.push('&');
                        out.push_str(&entity);
                    }
                }
            }
            c if c.is_whitespace() => {
                let at_gap = out.is_empty() || out.ends_with(' ') || out.ends_with('\n');
                if !at_gap {
                    out.push(' ');
                }
            }
            c => out.push(c),
        }
    }

    out.trim().to_string()
}

fn tag_name(tag: &str) -> String {
    tag.trim_start_matches('/')
        .split(|c: char| c.is_whitespace() || c == '/')
        .next()
        .unwrap_or("")
        .to_ascii_lowercase()
}

fn decode_entity(entity: &str) -> Option<char> {
    match entity {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" | "#39" => Some('\''),
        "nbsp" => Some(' '),
        _ => {
            let num = entity.strip_prefix('#')?;
            let code = match num.strip_prefix('x').or_else(|| num.strip_prefix('X')) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => num.parse().ok()?,
            };
            char::from_u32(code)
        }
    }
}

fn trim_trailing_spaces(out: &mut String) {
    while out.ends_with(' ') {
        out.pop();
    }
}

fn ensure_line_start(out: &mut String) {
    trim_trailing_spaces(out);
    if !out.is_empty() && !out.ends_with('\n') {
        out.push('\n');
    }
}
