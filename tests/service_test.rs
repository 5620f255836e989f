//! Integration tests for the business services.

mod helpers;

use chrono::{NaiveDate, TimeZone, Utc};

use empdb_core::error::ErrorKind;
use empdb_core::types::pagination::PageRequest;
use empdb_core::types::Envelope;
use empdb_entity::department::CreateDepartment;
use empdb_entity::employee::{CreateEmployee, Gender};
use empdb_entity::user::CreateUser;

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn create_assigns_the_next_employee_number() {
    let db = helpers::TestDb::new().await;
    let service = db.employees_service();

    let request = CreateEmployee {
        birth_date: Utc.with_ymd_and_hms(1963, 6, 1, 12, 0, 0).unwrap(),
        first_name: "Duangkaew".to_string(),
        last_name: "Piveteau".to_string(),
        gender: Gender::F,
        hire_date: Utc.with_ymd_and_hms(1989, 8, 24, 9, 0, 0).unwrap(),
    };

    // Nine seeded employees, so the next number is 10010.
    let created = service.create(&request).await.unwrap();
    assert_eq!(created.emp_no, 10010);
    assert_eq!(
        created.hire_date,
        NaiveDate::from_ymd_opt(1989, 8, 24).unwrap()
    );
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn missing_employee_is_a_not_found_error() {
    let db = helpers::TestDb::new().await;
    let service = db.employees_service();

    let err = service.find_one(99999).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn salary_history_checks_the_employee_first() {
    let db = helpers::TestDb::new().await;
    let service = db.employees_service();

    let history = service.salary_history(10001).await.unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].salary, 60_117);

    let err = service.salary_history(99999).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn duplicate_department_name_is_a_conflict() {
    let db = helpers::TestDb::new().await;
    let service = db.departments_service();

    let request = CreateDepartment {
        dept_no: "d010".to_string(),
        dept_name: "Marketing".to_string(),
    };
    let err = service.create(&request).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Conflict);
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn duplicate_username_is_a_conflict() {
    let db = helpers::TestDb::new().await;
    let service = db.users_service();

    let request = CreateUser {
        username: "admin".to_string(),
        password_hash: "$2b$10$reusedhashforthetestxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxx".to_string(),
        email: "someone-else@example.com".to_string(),
        phone: None,
        full_name: None,
    };
    let err = service.create(&request).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Conflict);
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn removing_a_missing_department_is_a_not_found_error() {
    let db = helpers::TestDb::new().await;
    let service = db.departments_service();

    let err = service.remove("d999").await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn paginated_listing_carries_envelope_metadata() {
    let db = helpers::TestDb::new().await;
    let service = db.departments_service();

    let request = PageRequest::new(2, 5);
    let page = service.list(&request).await.unwrap();
    let envelope = Envelope::paginated(page, &request);

    let meta = envelope.meta.expect("paginated reads carry metadata");
    assert_eq!(meta.total_count, 9);
    assert_eq!(meta.page_id, 2);
    assert!(!meta.has_next);
    assert_eq!(envelope.data.len(), 4);
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn user_lookup_by_username_hides_the_credential_hash() {
    let db = helpers::TestDb::new().await;
    let service = db.users_service();

    let user = service.find_by_username("admin").await.unwrap();
    assert_eq!(user.email, "admin@example.com");

    let json = serde_json::to_value(&user).unwrap();
    assert!(json.get("password_hash").is_none());
}
