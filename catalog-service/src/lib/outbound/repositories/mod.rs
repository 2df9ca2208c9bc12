pub mod blacklist;
pub mod distributor;
pub mod product;
pub mod user;

pub use blacklist::PostgresBlacklistRepository;
pub use distributor::PostgresDistributorRepository;
pub use product::PostgresProductRepository;
pub use user::PostgresUserRepository;

/// Name of the unique constraint an insert ran into, if that is why it failed.
fn violated_unique_constraint(err: &sqlx::Error) -> Option<&str> {
    err.as_database_error()
        .filter(|db_err| db_err.is_unique_violation())
        .and_then(|db_err| db_err.constraint())
}
