use maud::{Markup, html};

use super::{delete_button, field_errors, page};
use crate::domain::{Actor, Book, Category, FieldErrors};
use crate::forms::BookForm;

pub fn list_page(actor: &Actor, books: &[Book]) -> Markup {
    let content = html! {
        p { a href="/add/" { "Add Book" } }
        @if books.is_empty() {
            p { "No books yet." }
        } @else {
            table {
                thead {
                    tr {
                        th { "ID" } th { "Title" } th { "Category" } th { "Author" }
                        th { "Published" } th { "Actions" }
                    }
                }
                tbody {
                    @for book in books {
                        tr {
                            td { (book.id) }
                            td { (book.title) }
                            td {
                                a href={ "/categories/view/" (book.category_id) "/" } { (book.category_name) }
                            }
                            td { (book.author) }
                            td { (book.published_date.format("%Y-%m-%d")) }
                            td.actions {
                                a href={ "/view/" (book.id) "/" } { "View" }
                                a href={ "/edit/" (book.id) "/" } { "Edit" }
                                (delete_button(actor, &format!("/delete/{}/", book.id)))
                            }
                        }
                    }
                }
            }
        }
    };
    page(actor, "Books List", content)
}

pub fn detail_page(actor: &Actor, book: &Book) -> Markup {
    let content = html! {
        dl {
            dt { "Title" } dd { (book.title) }
            dt { "Hepburn" } dd { (book.hepburn) }
            dt { "Category" } dd { (book.category_name) }
            dt { "Author" } dd { (book.author) }
            dt { "Published date" } dd { (book.published_date.format("%Y-%m-%d")) }
            dt { "Release" } dd { (book.release) }
            dt { "URL" } dd {
                @if !book.url.is_empty() {
                    a href=(book.url) { (book.url) }
                }
            }
            dt { "Summary" } dd { (book.summary.as_deref().unwrap_or("")) }
        }
        p.actions {
            a href={ "/edit/" (book.id) "/" } { "Edit" }
            a href="/" { "Back to list" }
            (delete_button(actor, &format!("/delete/{}/", book.id)))
        }
    };
    page(actor, &format!("View Book: {}", book.title), content)
}

pub fn add_page(
    actor: &Actor,
    categories: &[Category],
    form: &BookForm,
    errors: &FieldErrors,
) -> Markup {
    page(actor, "Add Book", form_body("/add/", categories, form, errors))
}

pub fn edit_page(
    actor: &Actor,
    book: &Book,
    categories: &[Category],
    form: &BookForm,
    errors: &FieldErrors,
) -> Markup {
    page(
        actor,
        &format!("Edit Book: {}", book.title),
        form_body(&format!("/edit/{}/", book.id), categories, form, errors),
    )
}

fn text_field(label: &str, name: &'static str, value: &Option<String>, errors: &FieldErrors) -> Markup {
    let id = format!("id_{}", name);
    html! {
        label for=(id) { (label) }
        input id=(id) type="text" name=(name) maxlength="255" value=(value.as_deref().unwrap_or(""));
        (field_errors(errors, name))
    }
}

fn form_body(action: &str, categories: &[Category], form: &BookForm, errors: &FieldErrors) -> Markup {
    let selected = form.category.as_deref().unwrap_or("");
    html! {
        form method="post" action=(action) {
            label for="id_category" { "Category" }
            select #id_category name="category" {
                option value="" selected[selected.is_empty()] { "---------" }
                @for category in categories {
                    @let value = category.id.to_string();
                    option value=(value) selected[value == selected] { (category.name) }
                }
            }
            (field_errors(errors, "category"))

            label for="id_published_date" { "Published date" }
            input #id_published_date type="date" name="published_date"
                value=(form.published_date.as_deref().unwrap_or(""));
            (field_errors(errors, "published_date"))

            (text_field("Title", "title", &form.title, errors))
            (text_field("Hepburn", "hepburn", &form.hepburn, errors))
            (text_field("Author", "author", &form.author, errors))
            (text_field("Release", "release", &form.release, errors))
            (text_field("URL", "url", &form.url, errors))

            label for="id_summary" { "Summary" }
            textarea #id_summary name="summary" rows="4" {
                (form.summary.as_deref().unwrap_or(""))
            }
            (field_errors(errors, "summary"))

            p {
                button type="submit" { "Save" }
                " "
                a href="/" { "Cancel" }
            }
        }
    }
}
