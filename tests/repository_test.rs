//! Integration tests for the generic repository engine.

mod helpers;

use chrono::{NaiveDate, TimeZone, Utc};

use empdb_core::error::ErrorKind;
use empdb_core::types::pagination::PageRequest;
use empdb_core::types::{FieldMap, Value};
use empdb_entity::employee::Gender;

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn find_page_splits_rows_and_counts_the_whole_table() {
    let db = helpers::TestDb::new().await;
    let departments = db.departments();

    let first = departments
        .find_page(&PageRequest::new(1, 5))
        .await
        .unwrap();
    assert_eq!(first.rows.len(), 5);
    assert_eq!(first.total_count, 9);

    let second = departments
        .find_page(&PageRequest::new(2, 5))
        .await
        .unwrap();
    assert_eq!(second.rows.len(), 4);
    assert_eq!(second.total_count, 9);
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn find_one_returns_the_row_or_none() {
    let db = helpers::TestDb::new().await;
    let departments = db.departments();

    let marketing = departments
        .find_one(&Value::from("d001"))
        .await
        .unwrap()
        .expect("seeded department");
    assert_eq!(marketing.dept_name, "Marketing");

    let missing = departments.find_one(&Value::from("d999")).await.unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn find_by_condition_filters_on_equality() {
    let db = helpers::TestDb::new().await;
    let employees = db.employees();

    let women = employees.find_by_gender(Gender::F).await.unwrap();
    assert_eq!(women.len(), 4);
    assert!(women.iter().all(|e| e.gender == Gender::F));
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn invalid_condition_maps_are_rejected() {
    let db = helpers::TestDb::new().await;
    let employees = db.employees();

    let filter = FieldMap::new().set("no_such_column", 1);
    let err = employees
        .find_by_condition(&filter, None)
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Validation);

    // An empty map must never turn into an unfiltered query.
    let err = employees
        .find_by_condition(&FieldMap::new(), None)
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Validation);
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn create_returns_the_stored_row() {
    let db = helpers::TestDb::new().await;
    let departments = db.departments();

    let data = FieldMap::new()
        .set("dept_no", "d010")
        .set("dept_name", "Logistics");
    let created = departments.create(&data).await.unwrap();
    assert_eq!(created.dept_no, "d010");
    assert_eq!(created.dept_name, "Logistics");

    let reread = departments
        .find_one(&Value::from("d010"))
        .await
        .unwrap()
        .expect("created department");
    assert_eq!(reread.dept_name, "Logistics");
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn datetime_input_is_truncated_into_date_columns() {
    let db = helpers::TestDb::new().await;
    let employees = db.employees();

    let birth = Utc.with_ymd_and_hms(1960, 3, 15, 23, 59, 58).unwrap();
    let hire = Utc.with_ymd_and_hms(1990, 1, 2, 8, 30, 0).unwrap();
    let data = FieldMap::new()
        .set("emp_no", 10010)
        .set("birth_date", birth)
        .set("first_name", "Duangkaew")
        .set("last_name", "Piveteau")
        .set("gender", Gender::F)
        .set("hire_date", hire);

    let created = employees.create(&data).await.unwrap();
    assert_eq!(
        created.birth_date,
        NaiveDate::from_ymd_opt(1960, 3, 15).unwrap()
    );
    assert_eq!(
        created.hire_date,
        NaiveDate::from_ymd_opt(1990, 1, 2).unwrap()
    );
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn empty_update_patch_is_rejected() {
    let db = helpers::TestDb::new().await;
    let departments = db.departments();

    let err = departments
        .update(&Value::from("d001"), &FieldMap::new())
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Validation);
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn update_changes_only_the_named_columns() {
    let db = helpers::TestDb::new().await;
    let employees = db.employees();

    let patch = FieldMap::new().set("last_name", "Facello-Smith");
    let updated = employees
        .update(&Value::from(10001), &patch)
        .await
        .unwrap()
        .expect("seeded employee");
    assert_eq!(updated.last_name, "Facello-Smith");
    assert_eq!(updated.first_name, "Georgi");
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn remove_is_idempotent_on_row_count() {
    let db = helpers::TestDb::new().await;
    let departments = db.departments();

    assert_eq!(departments.remove(&Value::from("d009")).await.unwrap(), 1);
    assert_eq!(departments.remove(&Value::from("d009")).await.unwrap(), 0);
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn key_operations_fail_cleanly_without_a_primary_key() {
    let db = helpers::TestDb::new().await;
    let salaries = db.salaries();

    let err = salaries.find_one(&Value::from(10001)).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Configuration);
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn update_one_by_condition_touches_a_single_row() {
    let db = helpers::TestDb::new().await;
    let salaries = db.salaries();

    let from_date = NaiveDate::from_ymd_opt(1986, 6, 26).unwrap();
    let adjusted = salaries
        .adjust(10001, from_date, 70_000)
        .await
        .unwrap()
        .expect("seeded salary period");
    assert_eq!(adjusted.salary, 70_000);

    // The other seeded periods are untouched.
    let others = salaries.history_for(10002).await.unwrap();
    assert_eq!(others.len(), 1);
    assert_eq!(others[0].salary, 65_828);
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn count_tracks_inserts() {
    let db = helpers::TestDb::new().await;
    let departments = db.departments();

    assert_eq!(departments.count().await.unwrap(), 9);

    let data = FieldMap::new()
        .set("dept_no", "d010")
        .set("dept_name", "Logistics");
    departments.create(&data).await.unwrap();

    assert_eq!(departments.count().await.unwrap(), 10);
}
