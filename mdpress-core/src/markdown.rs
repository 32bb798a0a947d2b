use std::ffi::OsStr;
use std::sync::LazyLock;

use pulldown_cmark::{CodeBlockKind, Event, Options, Parser, Tag, TagEnd, html};
use syntect::highlighting::ThemeSet;
use syntect::html::highlighted_html_for_string;
use syntect::parsing::SyntaxSet;
use thiserror::Error;

/// Suffix a file name must end with to be picked up as a post.
pub const MARKUP_SUFFIX: &str = ".md";

const CODE_THEME: &str = "base16-ocean.dark";

// Initialize syntax highlighting resources once
static SYNTAX_SET: LazyLock<SyntaxSet> = LazyLock::new(SyntaxSet::load_defaults_newlines);
static THEME_SET: LazyLock<ThemeSet> = LazyLock::new(ThemeSet::load_defaults);

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("source is not valid UTF-8")]
    InvalidUtf8(#[source] std::str::Utf8Error),
}

/// True when `file_name` carries the markup suffix. Case-sensitive, and
/// compared on raw bytes so names that aren't valid UTF-8 still qualify.
pub fn is_markup_file<S: AsRef<OsStr>>(file_name: S) -> bool {
    file_name
        .as_ref()
        .as_encoded_bytes()
        .ends_with(MARKUP_SUFFIX.as_bytes())
}

/// Convert the raw bytes of one markdown file into an HTML fragment.
///
/// The result has no surrounding document structure. Fenced code blocks with a
/// known language are syntax highlighted with inline styles.
pub fn to_html(raw: &[u8]) -> Result<String, ConvertError> {
    let source = std::str::from_utf8(raw).map_err(ConvertError::InvalidUtf8)?;

    let options = Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS;
    let events: Vec<Event> = Parser::new_ext(source, options).collect();

    let mut processed_events = Vec::with_capacity(events.len());
    let mut i = 0;

    while i < events.len() {
        match &events[i] {
            Event::Start(Tag::CodeBlock(CodeBlockKind::Fenced(lang))) => {
                let mut code = String::new();
                i += 1;

                while i < events.len() {
                    match &events[i] {
                        Event::End(TagEnd::CodeBlock) => break,
                        Event::Text(text) => code.push_str(text),
                        _ => {}
                    }
                    i += 1;
                }

                let token = lang.split_whitespace().next().unwrap_or_default();
                processed_events.push(Event::Html(highlight_code(token, &code).into()));
            }
            event => processed_events.push(event.clone()),
        }
        i += 1;
    }

    let mut out = String::new();
    html::push_html(&mut out, processed_events.into_iter());

    Ok(out)
}

fn highlight_code(lang: &str, code: &str) -> String {
    let plain = || format!("<pre><code>{}</code></pre>\n", html_escape::encode_text(code));

    if lang.is_empty() {
        return plain();
    }

    let syntax = SYNTAX_SET.find_syntax_by_token(lang).or_else(|| match lang {
        // Closest bundled grammars for a couple of common fence tags
        "toml" => SYNTAX_SET.find_syntax_by_name("YAML"),
        "nix" => SYNTAX_SET.find_syntax_by_name("JavaScript"),
        _ => None,
    });

    match syntax {
        Some(syntax) => {
            let theme = &THEME_SET.themes[CODE_THEME];
            highlighted_html_for_string(code, &SYNTAX_SET, syntax, theme).unwrap_or_else(|_| plain())
        }
        None => plain(),
    }
}
