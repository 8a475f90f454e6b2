use web_sys::window;

const MAX_INPUT_CHARS: usize = 1000;

/// Trims, drops angle brackets and caps the length.
///
/// This is not an HTML sanitizer: attribute payloads and entity-encoded
/// markup pass straight through. Use [`escape_html`] before interpolating
/// anything into markup.
pub fn sanitize_input(input: &str) -> String {
    input
        .trim()
        .chars()
        .filter(|c| *c != '<' && *c != '>')
        .take(MAX_INPUT_CHARS)
        .collect()
}

/// Escapes text the same way a browser serializes a text node: `&`, `<`,
/// `>` and the non-breaking space. Quotes are left alone.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\u{a0}' => out.push_str("&nbsp;"),
            _ => out.push(c),
        }
    }
    out
}

/// Round-trips `input` through a detached element of the live document.
/// Returns `None` when there is no document to borrow.
pub fn escape_html_in_document(input: &str) -> Option<String> {
    let document = window()?.document()?;
    let div = document.create_element("div").ok()?;
    div.set_text_content(Some(input));
    Some(div.inner_html())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_trims_and_strips_brackets() {
        assert_eq!(
            sanitize_input("  <script>alert(1)</script>  "),
            "scriptalert(1)/script"
        );
        assert_eq!(sanitize_input("Jane"), "Jane");
    }

    #[test]
    fn sanitize_truncates_by_characters() {
        let long = "é".repeat(1500);
        let out = sanitize_input(&long);
        assert_eq!(out.chars().count(), 1000);
    }

    #[test]
    fn sanitize_leaves_attribute_payloads_alone() {
        assert_eq!(
            sanitize_input("\" onmouseover=\"alert(1)"),
            "\" onmouseover=\"alert(1)"
        );
    }

    #[test]
    fn escape_matches_text_node_serialization() {
        assert_eq!(
            escape_html("Tom & Jerry <b>\u{a0}\"quoted\""),
            "Tom &amp; Jerry &lt;b&gt;&nbsp;\"quoted\""
        );
        assert_eq!(escape_html(""), "");
    }
}
