//! Utility to remove every calculator's conversion history from the database

use mtd::catalog::CalculatorTool;
use mtd::{config, db};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let db_path = config::database_path();
    println!("Database path: {}", db_path.display());

    if !db_path.exists() {
        println!("No database found, nothing to clear.");
        return Ok(());
    }

    let database = db::Database::new(&db_path)?;

    database.with_conn(|conn| {
        if !db::migrations::is_current(conn)? {
            println!("Upgrading schema to the current version...");
            db::migrations::run_migrations(conn)?;
        }

        for tool in CalculatorTool::ALL {
            let removed = db::kv::delete(conn, tool.history_key())?;
            println!(
                "  {:<16} {}",
                tool.slug(),
                if removed { "cleared" } else { "empty" }
            );
        }

        let remaining = db::kv::keys(conn)?;
        println!("Remaining keys: {}", remaining.len());
        Ok(())
    })?;

    Ok(())
}
