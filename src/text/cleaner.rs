/// Turn the simple HTML fragments used in product descriptions into plain
/// text: `<br><br>` becomes a paragraph break, `<ul>`/`</ul>` wrappers are
/// dropped, and `<li>` items become "- " bullets terminated by a newline.
///
/// This is a literal substitution pass, not an HTML sanitizer; unknown tags
/// pass through untouched. Running it on already-clean text is a no-op, so
/// the function is safe to apply twice.
pub fn clean_description(raw: &str) -> String {
    raw.replace("<br><br>", "\n\n")
        .replace("<ul>", "")
        .replace("</ul>", "")
        .replace("<li>", "- ")
        .replace("</li>", "\n")
}
