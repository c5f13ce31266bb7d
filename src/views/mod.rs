//! HTML rendering
//!
//! Pages are plain functions returning `maud::Markup`; handlers decide the
//! status code.

pub mod auth;
pub mod books;
pub mod categories;

use maud::{DOCTYPE, Markup, html};

use crate::domain::{Actor, FieldErrors};

const CSS: &str = "\
body{font-family:system-ui,sans-serif;margin:0;color:#1f2933;background:#f8fafc}\
.site-header{display:flex;justify-content:space-between;align-items:center;padding:.75rem 1.5rem;background:#1e3a8a;color:#fff}\
.site-header a{color:#fff;margin-right:1rem;text-decoration:none}\
.site-header button{background:none;border:1px solid #fff;color:#fff;cursor:pointer}\
main{max-width:60rem;margin:1.5rem auto;padding:0 1.5rem}\
table{width:100%;border-collapse:collapse;background:#fff}\
th,td{padding:.5rem;border-bottom:1px solid #e2e8f0;text-align:left}\
form.inline{display:inline}\
label{display:block;margin-top:.75rem;font-weight:600}\
input,select,textarea{width:100%;padding:.4rem;border:1px solid #cbd5e1;border-radius:4px}\
input:disabled{background:#f1f5f9;cursor:not-allowed}\
.errorlist{color:#b91c1c;margin:.25rem 0;padding-left:1rem}\
.actions a{margin-right:.5rem}\
dl dt{font-weight:600;margin-top:.5rem}";

/// Shared document frame with the navigation bar.
pub fn page(actor: &Actor, title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (CSS) }
            }
            body {
                header.site-header {
                    nav {
                        a href="/" { "Books" }
                        a href="/categories/" { "Categories" }
                    }
                    div.session {
                        @match actor.username() {
                            Some(username) => {
                                span { (username) " " }
                                form.inline method="post" action="/logout/" {
                                    button type="submit" { "Log out" }
                                }
                            }
                            None => {
                                a href="/login/" { "Log in" }
                            }
                        }
                    }
                }
                main {
                    h1 { (title) }
                    (content)
                }
            }
        }
    }
}

pub fn not_found_page() -> Markup {
    page(
        &Actor::Anonymous,
        "Not Found",
        html! { p { "The requested record does not exist." } },
    )
}

/// Messages rendered under a form field
pub(crate) fn field_errors(errors: &FieldErrors, field: &str) -> Markup {
    html! {
        @if errors.has(field) {
            ul.errorlist {
                @for message in errors.get(field) {
                    li { (message) }
                }
            }
        }
    }
}

/// POST button for a delete route, shown only to actors who may use it
pub(crate) fn delete_button(actor: &Actor, action: &str) -> Markup {
    html! {
        @if actor.can_delete() {
            form.inline method="post" action=(action) {
                button type="submit" { "Delete" }
            }
        }
    }
}

/// Confirmation page reached by GET on a delete route; only the form's POST deletes.
pub fn confirm_delete_page(actor: &Actor, title: &str, action: &str, cancel: &str) -> Markup {
    let content = html! {
        p { "Are you sure you want to delete this record?" }
        form method="post" action=(action) {
            button type="submit" { "Yes, delete" }
            " "
            a href=(cancel) { "Cancel" }
        }
    };
    page(actor, title, content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_includes_doctype_and_title() {
        let doc = page(&Actor::Anonymous, "Books List", html! { p { "x" } }).into_string();
        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert!(doc.contains("<title>Books List</title>"));
        assert!(doc.contains(r#"href="/login/""#));
    }

    #[test]
    fn page_shows_logout_for_authenticated_actor() {
        let actor = Actor::from_role("admin", "superuser");
        let doc = page(&actor, "Books List", html! {}).into_string();
        assert!(doc.contains("Log out"));
        assert!(!doc.contains(r#"href="/login/""#));
    }

    #[test]
    fn field_errors_escapes_messages() {
        let errors = FieldErrors::single("name", "<b>bad</b>");
        let html = field_errors(&errors, "name").into_string();
        assert!(html.contains("&lt;b&gt;bad&lt;/b&gt;"));
        assert_eq!(field_errors(&errors, "description").into_string(), "");
    }

    #[test]
    fn confirm_delete_posts_back_to_action() {
        let admin = Actor::from_role("admin", "superuser");
        let html = confirm_delete_page(&admin, "Delete Book: Dune", "/delete/3/", "/view/3/")
            .into_string();
        assert!(html.contains(r#"<form method="post" action="/delete/3/">"#));
        assert!(html.contains(r#"href="/view/3/""#));
    }

    #[test]
    fn delete_button_hidden_from_anonymous() {
        assert_eq!(
            delete_button(&Actor::Anonymous, "/delete/1/").into_string(),
            ""
        );
        let admin = Actor::from_role("admin", "superuser");
        assert!(
            delete_button(&admin, "/delete/1/")
                .into_string()
                .contains(r#"action="/delete/1/""#)
        );
    }
}
