use maud::{Markup, html};

use super::{delete_button, field_errors, page};
use crate::domain::{Actor, Category, FieldErrors};
use crate::forms::CategoryForm;

pub fn list_page(actor: &Actor, categories: &[Category]) -> Markup {
    let content = html! {
        p { a href="/categories/add/" { "Add Category" } }
        @if categories.is_empty() {
            p { "No categories yet." }
        } @else {
            table {
                thead {
                    tr { th { "ID" } th { "Name" } th { "Description" } th { "Actions" } }
                }
                tbody {
                    @for category in categories {
                        tr {
                            td { (category.id) }
                            td { (category.name) }
                            td { (category.description.as_deref().unwrap_or("")) }
                            td.actions {
                                a href={ "/categories/view/" (category.id) "/" } { "View" }
                                a href={ "/categories/edit/" (category.id) "/" } { "Edit" }
                                (delete_button(actor, &format!("/categories/delete/{}/", category.id)))
                            }
                        }
                    }
                }
            }
        }
    };
    page(actor, "Categories List", content)
}

pub fn detail_page(actor: &Actor, category: &Category) -> Markup {
    let content = html! {
        dl {
            dt { "ID" } dd { (category.id) }
            dt { "Name" } dd { (category.name) }
            dt { "Description" } dd { (category.description.as_deref().unwrap_or("")) }
        }
        p.actions {
            a href={ "/categories/edit/" (category.id) "/" } { "Edit" }
            a href="/categories/" { "Back to list" }
            (delete_button(actor, &format!("/categories/delete/{}/", category.id)))
        }
    };
    page(actor, &format!("View Category: {}", category.name), content)
}

/// Add form: every field editable.
pub fn add_page(actor: &Actor, form: &CategoryForm, errors: &FieldErrors) -> Markup {
    page(
        actor,
        "Add Category",
        form_body("/categories/add/", form, errors, false),
    )
}

/// Edit form: the name is shown from the stored record and disabled.
pub fn edit_page(
    actor: &Actor,
    category: &Category,
    form: &CategoryForm,
    errors: &FieldErrors,
) -> Markup {
    let form = CategoryForm {
        name: Some(category.name.clone()),
        description: form.description.clone(),
    };
    page(
        actor,
        &format!("Edit Category: {}", category.name),
        form_body(
            &format!("/categories/edit/{}/", category.id),
            &form,
            errors,
            true,
        ),
    )
}

fn form_body(action: &str, form: &CategoryForm, errors: &FieldErrors, name_locked: bool) -> Markup {
    html! {
        form method="post" action=(action) {
            label for="id_name" { "Name" }
            input #id_name type="text" name="name" maxlength="255"
                placeholder="Enter category name"
                value=(form.name.as_deref().unwrap_or(""))
                disabled[name_locked];
            (field_errors(errors, "name"))

            label for="id_description" { "Description" }
            textarea #id_description name="description" rows="3"
                placeholder="Enter category description" {
                (form.description.as_deref().unwrap_or(""))
            }
            (field_errors(errors, "description"))

            p {
                button type="submit" { "Save" }
                " "
                a href="/categories/" { "Cancel" }
            }
        }
    }
}
