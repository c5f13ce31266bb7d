use maud::{Markup, html};

use super::page;
use crate::domain::Actor;

pub fn login_page(actor: &Actor, username: &str, error: Option<&str>) -> Markup {
    let content = html! {
        @if let Some(error) = error {
            ul.errorlist { li { (error) } }
        }
        form method="post" action="/login/" {
            label for="id_username" { "Username" }
            input #id_username type="text" name="username" value=(username) autofocus;
            label for="id_password" { "Password" }
            input #id_password type="password" name="password";
            p { button type="submit" { "Log in" } }
        }
    };
    page(actor, "Log in", content)
}
