//! Repository implementations using SeaORM

pub mod book_repository;
pub mod category_repository;
pub mod user_repository;

pub use book_repository::SeaOrmBookRepository;
pub use category_repository::SeaOrmCategoryRepository;
pub use user_repository::SeaOrmUserRepository;

use sea_orm::sea_query::LikeExpr;

/// `LIKE '%q%'` pattern in which `%`, `_` and `\` from `q` match literally.
pub(crate) fn contains_literal(q: &str) -> LikeExpr {
    let mut pattern = String::with_capacity(q.len() + 2);
    pattern.push('%');
    for c in q.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    LikeExpr::new(pattern).escape('\\')
}

