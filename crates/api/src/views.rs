//! HTML pages, rendered with maud.
//!
//! Thin presentation layer: every view consumes already-decoded data and the
//! Markdown renderer's output. No storage or caching semantics live here.

use maud::{html, Markup, PreEscaped, DOCTYPE};

use mdnote_db::models::Article;

/// Common page shell.
fn layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                link rel="stylesheet" href="/main.css";
            }
            body {
                main { (content) }
            }
        }
    }
}

/// Index page with the article count and a link to the creation form.
pub fn index(article_count: u64) -> Markup {
    layout(
        "mdnote",
        html! {
            h1 { "mdnote" }
            p {
                "Publish Markdown notes anonymously. "
                (article_count) " articles so far."
            }
            p { a href="/new" { "Write a new article" } }
        },
    )
}

/// A rendered article.
pub fn article(title: &str, body_html: &str, article: &Article) -> Markup {
    layout(
        title,
        html! {
            article { (PreEscaped(body_html)) }
            footer {
                a href={ "/edit/" (article.id) } { "Edit" }
            }
        },
    )
}

/// The new/edit form. `current` is `None` for the creation form and the
/// existing article for the edit form.
pub fn form(current: Option<&Article>) -> Markup {
    let (title, action) = match current {
        Some(a) => ("Edit article", format!("/edit/{}", a.id)),
        None => ("New article", "/new".to_string()),
    };
    layout(
        title,
        html! {
            h1 { (title) }
            form method="post" action=(action) {
                textarea name="newbody" rows="20" cols="80" required {
                    @if let Some(a) = current { (a.body) }
                }
                br;
                label {
                    "Edit password (optional on creation): "
                    input type="password" name="newpassword";
                }
                br;
                button type="submit" { "Publish" }
            }
        },
    )
}

/// Generic 404 page.
pub fn not_found() -> Markup {
    layout(
        "Not found",
        html! {
            h1 { "Not found" }
            p { "No article lives at this address." }
            p { a href="/" { "Back to the index" } }
        },
    )
}

/// Generic 401 page. Deliberately does not say whether the article exists
/// or which field was wrong.
pub fn wrong_password() -> Markup {
    layout(
        "Wrong password",
        html! {
            h1 { "Wrong password" }
            p { "Wrong password, please go back and try again." }
        },
    )
}

/// Generic 500 page. Internal detail stays in the server logs.
pub fn server_error() -> Markup {
    layout(
        "Something went wrong",
        html! {
            h1 { "Something went wrong" }
            p { "The server hit an internal error. Please try again later." }
        },
    )
}
