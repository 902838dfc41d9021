// src/infrastructure/database.rs
use mongodb::{Client, Database, bson::doc};

/// Connects to MongoDB and verifies the server answers before handing out the
/// database handle. The handle is shared by all repositories for the lifetime of
/// the process.
pub async fn connect(uri: &str, database: &str) -> Result<Database, mongodb::error::Error> {
    let client = Client::with_uri_str(uri).await?;
    let db = client.database(database);
    db.run_command(doc! { "ping": 1 }).await?;
    Ok(db)
}
