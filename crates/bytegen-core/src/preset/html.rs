use crate::config::options::HtmlOptions;

/// Escape `& < > " '`; optionally turn `\n` into `<br>\n`.
pub fn escape(text: &str, opts: &HtmlOptions) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 8);
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            '\n' if opts.linebreaks => out.push_str("<br>\n"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_all_five() {
        let opts = HtmlOptions::default();
        assert_eq!(
            escape(r#"a < b & "c" > 'd'"#, &opts),
            "a &lt; b &amp; &quot;c&quot; &gt; &#x27;d&#x27;"
        );
    }

    #[test]
    fn linebreaks_keep_the_newline() {
        let opts = HtmlOptions { linebreaks: true };
        assert_eq!(escape("a\nb", &opts), "a<br>\nb");
        assert_eq!(escape("a\nb", &HtmlOptions::default()), "a\nb");
    }
}
