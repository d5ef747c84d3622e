use aula_core::store::{open_store_in_memory, Store};
use aula_core::{
    CatalogService, CatalogServiceError, Course, EnrolledCourse, EnrollmentService, NewUser,
    StoreCatalogRepository, StoreEnrollmentRepository, User, UserRole,
};

fn catalog_service(
    store: &Store,
) -> CatalogService<StoreCatalogRepository<'_>, StoreEnrollmentRepository<'_>> {
    CatalogService::new(
        StoreCatalogRepository::new(store),
        StoreEnrollmentRepository::new(store),
    )
}

fn admin() -> User {
    let mut new_user = NewUser::new("Root", "root@example.com", "root", "Segura1!");
    new_user.role = UserRole::Admin;
    new_user.into_user().expect("valid admin registration")
}

fn learner() -> User {
    NewUser::new("Ana", "ana@example.com", "ana", "Segura1!")
        .into_user()
        .expect("valid registration")
}

#[test]
fn seeding_writes_default_catalog_exactly_once() {
    let store = open_store_in_memory().unwrap();
    let catalog = catalog_service(&store);

    assert!(catalog.seed_default_catalog().unwrap());
    assert!(!catalog.seed_default_catalog().unwrap());

    let categories = catalog.categories(None).unwrap();
    assert_eq!(categories.len(), 6);
    let ids: Vec<&str> = categories.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(
        ids,
        ["programacion", "marketing", "ventas", "cloud", "ing", "arcr"]
    );
}

#[test]
fn unseeded_catalog_reads_as_empty() {
    let store = open_store_in_memory().unwrap();
    let catalog = catalog_service(&store);

    assert!(catalog.categories(None).unwrap().is_empty());
    assert!(catalog.category("programacion", None).unwrap().is_none());
}

#[test]
fn category_lookup_by_id() {
    let store = open_store_in_memory().unwrap();
    let catalog = catalog_service(&store);
    catalog.seed_default_catalog().unwrap();

    let marketing = catalog
        .category("marketing", None)
        .unwrap()
        .expect("seeded category");
    assert_eq!(marketing.name, "Marketing");
    assert_eq!(marketing.courses[0].name, "Marketing Digital");

    assert!(catalog.category("filosofia", None).unwrap().is_none());
}

#[test]
fn enrollment_flags_are_recomputed_per_viewer() {
    let store = open_store_in_memory().unwrap();
    let catalog = catalog_service(&store);
    catalog.seed_default_catalog().unwrap();

    let marketing = catalog.category("marketing", None).unwrap().unwrap();
    let enrollments = EnrollmentService::new(StoreEnrollmentRepository::new(&store));
    enrollments
        .enroll("ana", &EnrolledCourse::from(&marketing.courses[0]))
        .unwrap();

    let for_ana = catalog.category("marketing", Some("ana")).unwrap().unwrap();
    assert!(for_ana.courses[0].is_enrolled);

    let for_guest = catalog.category("marketing", None).unwrap().unwrap();
    assert!(!for_guest.courses[0].is_enrolled);

    let for_other = catalog
        .category("marketing", Some("beto"))
        .unwrap()
        .unwrap();
    assert!(!for_other.courses[0].is_enrolled);

    // Every course outside the enrollment stays unflagged for ana too.
    let all_for_ana = catalog.categories(Some("ana")).unwrap();
    let flagged: Vec<&str> = all_for_ana
        .iter()
        .flat_map(|category| &category.courses)
        .filter(|course| course.is_enrolled)
        .map(|course| course.name.as_str())
        .collect();
    assert_eq!(flagged, ["Marketing Digital"]);
}

#[test]
fn admin_can_add_update_and_remove_courses() {
    let store = open_store_in_memory().unwrap();
    let catalog = catalog_service(&store);
    catalog.seed_default_catalog().unwrap();
    let admin = admin();

    catalog
        .add_course(
            &admin,
            "programacion",
            Course::new("Rust Intensivo", "Sistemas con Rust.", "Prof. Laura Gómez", "$19.990 CLP"),
        )
        .unwrap();
    let category = catalog.category("programacion", None).unwrap().unwrap();
    assert_eq!(category.courses.len(), 3);
    assert_eq!(category.courses[2].name, "Rust Intensivo");

    catalog
        .update_course(
            &admin,
            "programacion",
            2,
            Course::new("Rust Avanzado", "Sistemas con Rust.", "Prof. Laura Gómez", "$24.990 CLP"),
        )
        .unwrap();
    let category = catalog.category("programacion", None).unwrap().unwrap();
    assert_eq!(category.courses[2].name, "Rust Avanzado");

    catalog.remove_course(&admin, "programacion", 2).unwrap();
    let category = catalog.category("programacion", None).unwrap().unwrap();
    assert_eq!(category.courses.len(), 2);
}

#[test]
fn non_admin_catalog_mutations_are_rejected() {
    let store = open_store_in_memory().unwrap();
    let catalog = catalog_service(&store);
    catalog.seed_default_catalog().unwrap();
    let learner = learner();

    let err = catalog
        .add_course(
            &learner,
            "programacion",
            Course::new("Pirata", "", "", "$0 CLP"),
        )
        .unwrap_err();
    assert!(matches!(err, CatalogServiceError::NotAuthorized(username) if username == "ana"));

    let err = catalog.remove_course(&learner, "programacion", 0).unwrap_err();
    assert!(matches!(err, CatalogServiceError::NotAuthorized(_)));

    // Catalog unchanged.
    let category = catalog.category("programacion", None).unwrap().unwrap();
    assert_eq!(category.courses.len(), 2);
}

#[test]
fn mutations_report_unknown_category_and_bad_index() {
    let store = open_store_in_memory().unwrap();
    let catalog = catalog_service(&store);
    catalog.seed_default_catalog().unwrap();
    let admin = admin();

    let err = catalog
        .add_course(&admin, "filosofia", Course::new("X", "", "", ""))
        .unwrap_err();
    assert!(matches!(err, CatalogServiceError::CategoryNotFound(id) if id == "filosofia"));

    let err = catalog
        .update_course(&admin, "marketing", 9, Course::new("X", "", "", ""))
        .unwrap_err();
    assert!(matches!(
        err,
        CatalogServiceError::CourseNotFound { index: 9, .. }
    ));

    let err = catalog.remove_course(&admin, "marketing", 9).unwrap_err();
    assert!(matches!(
        err,
        CatalogServiceError::CourseNotFound { index: 9, .. }
    ));
}
