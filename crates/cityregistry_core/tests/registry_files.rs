use cityregistry_core::{
    JsonResidentRepository, ResidentForm, ResidentRepository, ResidentService,
};
use tempfile::TempDir;

#[test]
fn population_file_is_an_indented_array_with_wire_field_names() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("population.json");
    let repo = JsonResidentRepository::open(&path).unwrap();
    let mut service = ResidentService::new(repo);

    let form = ResidentForm {
        surname: "Смитов".to_string(),
        name: "Иван".to_string(),
        patronymic: "Петрович".to_string(),
        age: "45".to_string(),
        district: "Южный".to_string(),
    };
    let id = service.register_resident(&form).unwrap();

    let body = std::fs::read_to_string(&path).unwrap();
    assert!(body.starts_with("[\n"), "expected an indented array");
    // Cyrillic stays readable on disk rather than being \u-escaped.
    assert!(body.contains("Смитов"));

    let parsed: serde_json::Value = serde_json::from_str(&body).unwrap();
    let entry = &parsed.as_array().unwrap()[0];
    assert_eq!(entry["id"], id.to_string());
    assert_eq!(entry["surname"], "Смитов");
    assert_eq!(entry["name"], "Иван");
    assert_eq!(entry["patronymic"], "Петрович");
    assert_eq!(entry["age"], 45);
    assert_eq!(entry["district"], "Южный");
}

#[test]
fn load_is_idempotent_on_an_unmodified_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("population.json");

    {
        let repo = JsonResidentRepository::open(&path).unwrap();
        let mut service = ResidentService::new(repo);
        let form = ResidentForm {
            surname: "Кузнецов".to_string(),
            name: "Пётр".to_string(),
            patronymic: "Иванович".to_string(),
            age: "33".to_string(),
            district: "Западный".to_string(),
        };
        service.register_resident(&form).unwrap();
    }

    let first = JsonResidentRepository::open(&path).unwrap();
    let second = JsonResidentRepository::open(&path).unwrap();
    assert_eq!(first.list_residents(), second.list_residents());
}

#[test]
fn bootstrap_creates_the_file_once_and_keeps_it_stable() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("population.json");
    assert!(!path.exists());

    JsonResidentRepository::open(&path).unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]");

    // A second open must not disturb the (still empty) file.
    JsonResidentRepository::open(&path).unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]");
}
