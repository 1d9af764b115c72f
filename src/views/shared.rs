use time::{OffsetDateTime, UtcOffset, format_description::FormatItem, macros::format_description};

const MESSAGE_TIME_FORMAT: &[FormatItem<'static>] =
    format_description!("[hour padding:zero]:[minute padding:zero]");

/// Wall-clock `HH:MM` in the local offset when it can be determined,
/// UTC otherwise.
pub fn format_message_timestamp(timestamp: OffsetDateTime) -> Option<String> {
    let mut datetime = timestamp;
    if let Ok(offset) = UtcOffset::current_local_offset() {
        datetime = datetime.to_offset(offset);
    }
    datetime.format(MESSAGE_TIME_FORMAT).ok()
}

/// Normalize raw message text for bubble markup: surrounding whitespace is
/// trimmed, markup characters are escaped, and newlines become visual
/// breaks.
pub fn text_to_html(raw: &str) -> String {
    let mut html = String::with_capacity(raw.len());
    for (i, line) in raw.trim().split('\n').enumerate() {
        if i > 0 {
            html.push_str("<br />");
        }
        for c in line.trim_end_matches('\r').chars() {
            match c {
                '&' => html.push_str("&amp;"),
                '<' => html.push_str("&lt;"),
                '>' => html.push_str("&gt;"),
                '"' => html.push_str("&quot;"),
                _ => html.push(c),
            }
        }
    }
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn newlines_become_visual_breaks() {
        assert_eq!(text_to_html("Hello\nthere"), "Hello<br />there");
        assert_eq!(text_to_html("a\r\nb"), "a<br />b");
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        assert_eq!(text_to_html("  spaced out  "), "spaced out");
        assert_eq!(text_to_html("\n\nleading\n"), "leading");
        assert_eq!(text_to_html("a\n\nb"), "a<br /><br />b");
    }

    #[test]
    fn markup_is_escaped() {
        assert_eq!(
            text_to_html(r#"<b>&"quotes"</b>"#),
            "&lt;b&gt;&amp;&quot;quotes&quot;&lt;/b&gt;"
        );
    }

    #[test]
    fn empty_text_renders_empty() {
        assert_eq!(text_to_html(""), "");
        assert_eq!(text_to_html("   "), "");
    }

    #[test]
    fn timestamps_are_zero_padded() {
        let formatted = format_message_timestamp(datetime!(2024-03-01 09:05 UTC)).unwrap();
        // Local offset shifts the hour but never the shape.
        assert_eq!(formatted.len(), 5);
        assert_eq!(formatted.as_bytes()[2], b':');
    }
}
