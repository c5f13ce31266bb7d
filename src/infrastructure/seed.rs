use chrono::NaiveDate;

use crate::domain::actor::ROLE_SUPERUSER;
use crate::domain::{BookInput, CategoryFilter, DomainError, NewCategory};
use crate::infrastructure::AppState;
use crate::infrastructure::auth::hash_password;

/// Create the bootstrap superuser, or reset its password if it exists.
pub async fn ensure_superuser(
    state: &AppState,
    username: &str,
    password: &str,
) -> Result<(), DomainError> {
    let password_hash = hash_password(password).map_err(DomainError::Internal)?;
    state
        .user_repo
        .upsert(username, &password_hash, ROLE_SUPERUSER)
        .await?;
    tracing::info!("Superuser '{}' is ready", username);
    Ok(())
}

/// Populate an empty catalog with a few records.
pub async fn seed_demo_data(state: &AppState) -> Result<(), DomainError> {
    if !state
        .category_repo
        .find_all(CategoryFilter::default())
        .await?
        .is_empty()
    {
        tracing::info!("Catalog already has categories, skipping demo data");
        return Ok(());
    }

    let fiction = state
        .category_repo
        .create(NewCategory {
            name: "Fiction".to_owned(),
            description: Some("Novels and short stories".to_owned()),
        })
        .await?;
    let manga = state
        .category_repo
        .create(NewCategory {
            name: "Manga".to_owned(),
            description: None,
        })
        .await?;

    let books = [
        (fiction.id, (1965, 6, 1), "Dune", "", "Frank Herbert", "1st edition"),
        (
            manga.id,
            (1988, 7, 16),
            "Akira",
            "Akira",
            "Katsuhiro Otomo",
            "Vol. 1",
        ),
    ];

    for (category_id, (y, m, d), title, hepburn, author, release) in books {
        let published_date = NaiveDate::from_ymd_opt(y, m, d)
            .ok_or_else(|| DomainError::Internal(format!("bad seed date for {}", title)))?;
        state
            .book_repo
            .create(BookInput {
                category_id,
                published_date,
                title: title.to_owned(),
                hepburn: hepburn.to_owned(),
                author: author.to_owned(),
                release: release.to_owned(),
                url: String::new(),
                summary: None,
            })
            .await?;
    }

    Ok(())
}
