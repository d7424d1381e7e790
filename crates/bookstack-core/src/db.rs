//! SQLite storage for book records.
//!
//! [`Database`] owns the single connection and the table schema; a
//! [`Session`] is the scoped unit of work handed to each repository
//! operation. The session holds the connection mutex guard, so it is
//! released on every exit path when it drops, whether the operation
//! succeeded or not.

use std::time::Duration;

use parking_lot::{Mutex, MutexGuard};
use rusqlite::{Connection, OptionalExtension, params};
use tracing::{debug, info};

use bookstack_model::input::BookInput;
use bookstack_model::types::Book;

use crate::config::database_path;

/// Errors that can occur during storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The underlying SQLite call failed.
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// Busy timeout applied to the connection at open time.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Idempotent schema for the single book table.
const SCHEMA_SQL: &str = "\
CREATE TABLE IF NOT EXISTS livros (
    id             INTEGER PRIMARY KEY AUTOINCREMENT,
    titulo         TEXT    NOT NULL,
    autor          TEXT    NOT NULL,
    ano_publicacao INTEGER NOT NULL
)";

/// Initial rows inserted when the table is empty at startup.
const SEED_BOOKS: [(&str, &str, i64); 5] = [
    ("A Cor Púrpura", "Alice Walker", 1982),
    ("Cem anos de Solidão", "Gabriel García Márquez", 1967),
    ("Moby Dick", "Herman Melville", 1851),
    ("Ainda Estou Aqui", "Marcelo Rubens Paiva", 2015),
    ("Todo o Amor", "Vinícius de Moraes", 1982),
];

/// The book database: one SQLite connection behind a mutex.
///
/// Opening ensures the schema exists and seeds the initial rows when the
/// table has none. SQLite itself serializes conflicting writes.
#[derive(Debug)]
pub struct Database {
    conn: Mutex<Connection>,
}

impl Database {
    /// Open (or create) the database at the given `DATABASE_URL` value,
    /// ensure the schema, and seed if empty.
    pub fn open(database_url: &str) -> Result<Self, StoreError> {
        let path = database_path(database_url);
        let conn = if path == ":memory:" {
            Connection::open_in_memory()?
        } else {
            Connection::open(path)?
        };
        conn.busy_timeout(BUSY_TIMEOUT)?;

        let db = Self {
            conn: Mutex::new(conn),
        };

        {
            let mut session = db.session();
            session.ensure_schema()?;
            let seeded = session.seed_if_empty()?;
            if seeded > 0 {
                info!(path, rows = seeded, "seeded initial book records");
            }
        }

        Ok(db)
    }

    /// Acquire a scoped session. The session holds the connection until it
    /// drops.
    pub fn session(&self) -> Session<'_> {
        Session {
            conn: self.conn.lock(),
        }
    }
}

/// A scoped unit of work against the book table.
///
/// Every repository operation runs inside exactly one session; dropping
/// the session releases the connection regardless of outcome.
pub struct Session<'a> {
    conn: MutexGuard<'a, Connection>,
}

impl std::fmt::Debug for Session<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session").finish_non_exhaustive()
    }
}

impl Session<'_> {
    /// Create the book table if it does not exist.
    pub fn ensure_schema(&self) -> Result<(), StoreError> {
        self.conn.execute(SCHEMA_SQL, [])?;
        Ok(())
    }

    /// Insert the seed rows when the table holds no records at all.
    ///
    /// Returns the number of rows inserted (zero when the table already
    /// had data).
    pub fn seed_if_empty(&mut self) -> Result<usize, StoreError> {
        if self.count_books()? > 0 {
            return Ok(0);
        }
        let tx = self.conn.transaction()?;
        for (title, author, year) in SEED_BOOKS {
            tx.execute(
                "INSERT INTO livros (titulo, autor, ano_publicacao) VALUES (?1, ?2, ?3)",
                params![title, author, year],
            )?;
        }
        tx.commit()?;
        Ok(SEED_BOOKS.len())
    }

    /// Number of stored books.
    pub fn count_books(&self) -> Result<u64, StoreError> {
        let count: u64 =
            self.conn
                .query_row("SELECT COUNT(*) FROM livros", [], |row| row.get(0))?;
        Ok(count)
    }

    /// All books, in natural storage order.
    pub fn list_books(&self) -> Result<Vec<Book>, StoreError> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, titulo, autor, ano_publicacao FROM livros")?;
        let rows = stmt.query_map([], row_to_book)?;
        let books = rows.collect::<Result<Vec<_>, _>>()?;
        Ok(books)
    }

    /// Insert a candidate book, returning the persisted record with its
    /// freshly assigned identifier.
    pub fn insert_book(&self, input: &BookInput) -> Result<Book, StoreError> {
        self.conn.execute(
            "INSERT INTO livros (titulo, autor, ano_publicacao) VALUES (?1, ?2, ?3)",
            params![input.title, input.author, input.year],
        )?;
        let id = self.conn.last_insert_rowid();
        debug!(id, "inserted book");
        Ok(Book {
            id,
            title: input.title.clone(),
            author: input.author.clone(),
            year: input.year,
        })
    }

    /// Fetch a book by identifier.
    pub fn get_book(&self, id: i64) -> Result<Option<Book>, StoreError> {
        let book = self
            .conn
            .query_row(
                "SELECT id, titulo, autor, ano_publicacao FROM livros WHERE id = ?1",
                params![id],
                row_to_book,
            )
            .optional()?;
        Ok(book)
    }

    /// Overwrite a book's title, author, and year. Returns the updated
    /// record, or `None` when the identifier does not exist.
    pub fn update_book(&self, id: i64, input: &BookInput) -> Result<Option<Book>, StoreError> {
        let changed = self.conn.execute(
            "UPDATE livros SET titulo = ?1, autor = ?2, ano_publicacao = ?3 WHERE id = ?4",
            params![input.title, input.author, input.year, id],
        )?;
        if changed == 0 {
            return Ok(None);
        }
        debug!(id, "updated book");
        Ok(Some(Book {
            id,
            title: input.title.clone(),
            author: input.author.clone(),
            year: input.year,
        }))
    }

    /// Remove a book by identifier. Returns `true` when a row was deleted.
    pub fn delete_book(&self, id: i64) -> Result<bool, StoreError> {
        let deleted = self
            .conn
            .execute("DELETE FROM livros WHERE id = ?1", params![id])?;
        debug!(id, deleted, "deleted book");
        Ok(deleted > 0)
    }
}

/// Map a result row to a [`Book`].
fn row_to_book(row: &rusqlite::Row<'_>) -> Result<Book, rusqlite::Error> {
    Ok(Book {
        id: row.get(0)?,
        title: row.get(1)?,
        author: row.get(2)?,
        year: row.get(3)?,
    })
}
