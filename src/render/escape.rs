//! Escaping utilities for safe page generation.
//!
//! Company names, notes and links come from the data documents and from
//! replacement files named in configuration. Everything interpolated into
//! a page MUST go through one of these helpers.

/// Escape a string for safe inclusion in HTML content.
///
/// Escapes the following characters:
/// - `&` -> `&amp;`
/// - `<` -> `&lt;`
/// - `>` -> `&gt;`
/// - `"` -> `&quot;`
/// - `'` -> `&#x27;`
///
/// # Examples
///
/// ```
/// use czy_polska_firma::render::escape::escape_html;
///
/// assert_eq!(escape_html("<script>alert('xss')</script>"),
///     "&lt;script&gt;alert(&#x27;xss&#x27;)&lt;/script&gt;");
///
/// assert_eq!(escape_html("Sp. z o.o."), "Sp. z o.o.");
/// ```
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}

/// Escape a string for safe inclusion in HTML attributes.
///
/// This is stricter than content escaping - also handles newlines
/// and other whitespace that could break attribute parsing.
///
/// # Examples
///
/// ```
/// use czy_polska_firma::render::escape::escape_html_attr;
///
/// assert_eq!(escape_html_attr("Logo \"Murator\""),
///     "Logo &quot;Murator&quot;");
/// ```
pub fn escape_html_attr(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            '\n' => result.push_str("&#10;"),
            '\r' => result.push_str("&#13;"),
            '\t' => result.push_str("&#9;"),
            _ => result.push(c),
        }
    }
    result
}

/// Escape a link target, replacing anything that is not an http(s),
/// mailto or site-relative URL with `#`.
///
/// # Examples
///
/// ```
/// use czy_polska_firma::render::escape::escape_href;
///
/// assert_eq!(escape_href("https://krs.example/?a=1&b=2"), "https://krs.example/?a=1&amp;b=2");
/// assert_eq!(escape_href("javascript:alert(1)"), "#");
/// ```
pub fn escape_href(url: &str) -> String {
    let trimmed = url.trim();
    let lower = trimmed.to_ascii_lowercase();
    let allowed = lower.starts_with("http://")
        || lower.starts_with("https://")
        || lower.starts_with("mailto:")
        || (trimmed.starts_with('/') && !trimmed.starts_with("//"));
    if allowed {
        escape_html_attr(trimmed)
    } else {
        "#".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html_basic() {
        assert_eq!(escape_html("hello"), "hello");
        assert_eq!(escape_html("a & b"), "a &amp; b");
        assert_eq!(escape_html("a < b > c"), "a &lt; b &gt; c");
        assert_eq!(escape_html("\"quoted\""), "&quot;quoted&quot;");
        assert_eq!(escape_html("it's"), "it&#x27;s");
    }

    #[test]
    fn test_escape_html_keeps_polish_letters() {
        assert_eq!(escape_html("Zażółć gęślą jaźń"), "Zażółć gęślą jaźń");
    }

    #[test]
    fn test_escape_html_attr_whitespace() {
        assert_eq!(escape_html_attr("a\nb\tc"), "a&#10;b&#9;c");
    }

    #[test]
    fn test_escape_href_schemes() {
        assert_eq!(escape_href("/firma/murator"), "/firma/murator");
        assert_eq!(escape_href("mailto:kontakt@czypolskafirma.pl"), "mailto:kontakt@czypolskafirma.pl");
        assert_eq!(escape_href("HTTPS://EXAMPLE.PL"), "HTTPS://EXAMPLE.PL");
        assert_eq!(escape_href("//evil.example"), "#");
        assert_eq!(escape_href(" JavaScript:alert(1)"), "#");
        assert_eq!(escape_href("data:text/html,x"), "#");
    }
}
