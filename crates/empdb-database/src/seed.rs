//! Canonical seed dataset.
//!
//! Loads the classic employees sample: nine departments, the first nine
//! employees, their opening salary periods, and one demo user account.
//! Seeding is skipped when the departments table already holds rows.

use chrono::NaiveDate;
use sqlx::PgPool;
use tracing::info;

use empdb_core::error::{AppError, ErrorKind};
use empdb_core::result::AppResult;

const DEPARTMENTS: &[(&str, &str)] = &[
    ("d001", "Marketing"),
    ("d002", "Finance"),
    ("d003", "Human Resources"),
    ("d004", "Production"),
    ("d005", "Development"),
    ("d006", "Quality Management"),
    ("d007", "Sales"),
    ("d008", "Research"),
    ("d009", "Customer Service"),
];

// (emp_no, birth_date, first_name, last_name, gender, hire_date)
const EMPLOYEES: &[(i32, (i32, u32, u32), &str, &str, &str, (i32, u32, u32))] = &[
    (10001, (1953, 9, 2), "Georgi", "Facello", "M", (1986, 6, 26)),
    (10002, (1964, 6, 2), "Bezalel", "Simmel", "F", (1985, 11, 21)),
    (10003, (1959, 12, 3), "Parto", "Bamford", "M", (1986, 8, 28)),
    (10004, (1954, 5, 1), "Chirstian", "Koblick", "M", (1986, 12, 1)),
    (10005, (1955, 1, 21), "Kyoichi", "Maliniak", "M", (1989, 9, 12)),
    (10006, (1953, 4, 20), "Anneke", "Preusig", "F", (1989, 6, 2)),
    (10007, (1957, 5, 23), "Tzvetan", "Zielinski", "F", (1989, 2, 10)),
    (10008, (1958, 2, 19), "Saniya", "Kalloufi", "M", (1994, 9, 15)),
    (10009, (1952, 4, 19), "Sumant", "Peac", "F", (1985, 2, 18)),
];

// (emp_no, salary, from_date, to_date)
const SALARIES: &[(i32, i32, (i32, u32, u32), (i32, u32, u32))] = &[
    (10001, 60117, (1986, 6, 26), (1987, 6, 26)),
    (10002, 65828, (1996, 8, 3), (1997, 8, 3)),
    (10003, 40006, (1995, 12, 3), (1996, 12, 3)),
];

/// Insert the canonical dataset. Idempotent: a database that already
/// holds departments is left untouched.
pub async fn seed(pool: &PgPool) -> AppResult<()> {
    let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM departments")
        .fetch_one(pool)
        .await
        .map_err(seed_err)?;
    if existing > 0 {
        info!("Database already seeded; skipping");
        return Ok(());
    }

    info!("Seeding departments...");
    for (dept_no, dept_name) in DEPARTMENTS {
        sqlx::query("INSERT INTO departments (dept_no, dept_name) VALUES ($1, $2)")
            .bind(dept_no)
            .bind(dept_name)
            .execute(pool)
            .await
            .map_err(seed_err)?;
    }

    info!("Seeding employees...");
    for (emp_no, birth, first_name, last_name, gender, hire) in EMPLOYEES {
        sqlx::query(
            "INSERT INTO employees (emp_no, birth_date, first_name, last_name, gender, hire_date) \
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(emp_no)
        .bind(date(*birth))
        .bind(first_name)
        .bind(last_name)
        .bind(gender)
        .bind(date(*hire))
        .execute(pool)
        .await
        .map_err(seed_err)?;
    }

    info!("Seeding salaries...");
    for (emp_no, salary, from, to) in SALARIES {
        sqlx::query(
            "INSERT INTO salaries (emp_no, salary, from_date, to_date) VALUES ($1, $2, $3, $4)",
        )
        .bind(emp_no)
        .bind(salary)
        .bind(date(*from))
        .bind(date(*to))
        .execute(pool)
        .await
        .map_err(seed_err)?;
    }

    info!("Seeding demo user...");
    sqlx::query(
        "INSERT INTO users (username, password_hash, email, full_name) \
         VALUES ($1, $2, $3, $4) ON CONFLICT (username) DO NOTHING",
    )
    .bind("admin")
    .bind("$2b$10$u5kF0eoLiDbLCXJF0QeM0eCcBtC3G3H0eXAMPLESEEDHASHx0a9Zq")
    .bind("admin@example.com")
    .bind("Administrator")
    .execute(pool)
    .await
    .map_err(seed_err)?;

    info!("Database seeding completed");
    Ok(())
}

fn date((year, month, day): (i32, u32, u32)) -> NaiveDate {
    // Seed constants are static and always valid.
    NaiveDate::from_ymd_opt(year, month, day).expect("valid seed date")
}

fn seed_err(e: sqlx::Error) -> AppError {
    AppError::with_source(ErrorKind::Database, format!("Failed to seed database: {e}"), e)
}
