//! FFI use-case API for the form-layer calls.
//!
//! # Responsibility
//! - Expose stable, use-case-level registry functions to Dart via FRB.
//! - Keep error semantics simple for the single-window form flow.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Validation failures come back as human-readable messages with the
//!   offending input preserved, so the form can keep it on screen.

use cityregistry_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    JsonResidentRepository, JsonVehicleRepository, Resident, ResidentFilter, ResidentForm,
    ResidentService, VehicleForm, VehicleService,
};
use log::info;
use std::path::PathBuf;
use std::sync::OnceLock;
use uuid::Uuid;

const REGISTRY_DATA_DIR_ENV: &str = "CITYREGISTRY_DATA_DIR";
const POPULATION_FILE_NAME: &str = "population.json";
const CARS_FILE_NAME: &str = "cars.json";
static REGISTRY_DATA_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - UI-thread safe for current implementation.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - UI-thread safe for current implementation.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Reconfiguration attempts with different level or directory return error.
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// One resident row as rendered by the form layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResidentView {
    /// Stable record ID in string form.
    pub id: String,
    pub surname: String,
    pub name: String,
    pub patronymic: String,
    pub age: u32,
    /// District label exactly as shown in the combobox.
    pub district: String,
}

/// Generic action response envelope for registry command flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryActionResponse {
    /// Whether the operation succeeded.
    pub ok: bool,
    /// Stable ID of the affected record.
    pub record_id: Option<String>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl RegistryActionResponse {
    fn success(message: impl Into<String>, record_id: String) -> Self {
        Self {
            ok: true,
            record_id: Some(record_id),
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            record_id: None,
            message: message.into(),
        }
    }
}

/// Search response envelope for the resident search flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResidentSearchResponse {
    /// Whether the search itself ran (a miss is still `ok`).
    pub ok: bool,
    /// Matching residents in collection order (empty when no hits).
    pub items: Vec<ResidentView>,
    /// Human-readable response message for diagnostics.
    pub message: String,
}

/// Per-district resident statistics row.
#[derive(Debug, Clone, PartialEq)]
pub struct DistrictAgeRow {
    pub district: String,
    pub count: u64,
    /// Mean age, absent only in the zero-count case never rendered.
    pub average_age: Option<f64>,
}

/// Resident statistics envelope; rows skip empty districts.
#[derive(Debug, Clone, PartialEq)]
pub struct ResidentStatsResponse {
    pub ok: bool,
    pub rows: Vec<DistrictAgeRow>,
    pub total: u64,
    pub message: String,
}

/// Per-district vehicle count row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistrictCountRow {
    pub district: String,
    pub count: u64,
}

/// Vehicle statistics envelope; rows skip empty districts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VehicleStatsResponse {
    pub ok: bool,
    pub rows: Vec<DistrictCountRow>,
    pub total: u64,
    pub message: String,
}

/// Registers a resident from raw form input.
///
/// # FFI contract
/// - Sync call, file-backed execution.
/// - Never panics.
/// - Returns operation result and created record ID on success.
#[flutter_rust_bridge::frb(sync)]
pub fn register_resident(
    surname: String,
    name: String,
    patronymic: String,
    age: String,
    district: String,
) -> RegistryActionResponse {
    let form = ResidentForm {
        surname,
        name,
        patronymic,
        age,
        district,
    };
    match with_resident_service(|service| service.register_resident(&form)) {
        Ok(id) => RegistryActionResponse::success("Resident registered.", id.to_string()),
        Err(err) => RegistryActionResponse::failure(format!("register_resident failed: {err}")),
    }
}

/// Registers a vehicle from raw form input.
///
/// # FFI contract
/// - Sync call, file-backed execution.
/// - Never panics.
/// - Returns operation result and created record ID on success.
#[flutter_rust_bridge::frb(sync)]
pub fn register_vehicle(
    make: String,
    model: String,
    year: String,
    number: String,
    district: String,
) -> RegistryActionResponse {
    let form = VehicleForm {
        make,
        model,
        year,
        number,
        district,
    };
    match with_vehicle_service(|service| service.register_vehicle(&form)) {
        Ok(id) => RegistryActionResponse::success("Vehicle registered.", id.to_string()),
        Err(err) => RegistryActionResponse::failure(format!("register_vehicle failed: {err}")),
    }
}

/// Searches residents by optional per-field criteria.
///
/// Empty entries mean the criterion is absent; an empty form returns the
/// full collection.
///
/// # FFI contract
/// - Sync call, file-backed execution.
/// - Never panics.
/// - A malformed age or unknown district label fails the call; a search
///   with no hits succeeds with an empty item list.
#[flutter_rust_bridge::frb(sync)]
pub fn search_residents(
    surname: String,
    name: String,
    patronymic: String,
    age: String,
    district: String,
) -> ResidentSearchResponse {
    let filter = match ResidentFilter::from_form(&surname, &name, &patronymic, &age, &district) {
        Ok(filter) => filter,
        Err(err) => {
            return ResidentSearchResponse {
                ok: false,
                items: Vec::new(),
                message: format!("search_residents failed: {err}"),
            };
        }
    };

    match with_resident_service(|service| Ok(service.search_residents(&filter))) {
        Ok(hits) => {
            let items = hits.into_iter().map(to_resident_view).collect::<Vec<_>>();
            let message = if items.is_empty() {
                "No results.".to_string()
            } else {
                format!("Found {} resident(s).", items.len())
            };
            ResidentSearchResponse {
                ok: true,
                items,
                message,
            }
        }
        Err(err) => ResidentSearchResponse {
            ok: false,
            items: Vec::new(),
            message: format!("search_residents failed: {err}"),
        },
    }
}

/// Updates the editable fields of one resident.
///
/// Only age and district are editable; both arrive as raw form strings and
/// are re-validated the same way as at registration.
///
/// # FFI contract
/// - Sync call, file-backed execution.
/// - Never panics.
/// - An unknown or malformed `id` fails the call.
#[flutter_rust_bridge::frb(sync)]
pub fn update_resident(id: String, age: String, district: String) -> RegistryActionResponse {
    let record_id = match parse_record_id(&id) {
        Ok(record_id) => record_id,
        Err(err) => {
            return RegistryActionResponse::failure(format!("update_resident failed: {err}"));
        }
    };
    match with_resident_service(|service| service.update_resident(record_id, &age, &district)) {
        Ok(()) => RegistryActionResponse::success("Resident updated.", id),
        Err(err) => RegistryActionResponse::failure(format!("update_resident failed: {err}")),
    }
}

/// Removes one resident by stable ID.
///
/// # FFI contract
/// - Sync call, file-backed execution.
/// - Never panics.
/// - An unknown or malformed `id` fails the call.
#[flutter_rust_bridge::frb(sync)]
pub fn remove_resident(id: String) -> RegistryActionResponse {
    let record_id = match parse_record_id(&id) {
        Ok(record_id) => record_id,
        Err(err) => {
            return RegistryActionResponse::failure(format!("remove_resident failed: {err}"));
        }
    };
    match with_resident_service(|service| service.remove_resident(record_id)) {
        Ok(()) => RegistryActionResponse::success("Resident removed.", id),
        Err(err) => RegistryActionResponse::failure(format!("remove_resident failed: {err}")),
    }
}

/// Per-district resident counts and average ages.
///
/// # FFI contract
/// - Sync call, file-backed execution.
/// - Never panics.
/// - Rows cover occupied districts only, in enumeration order.
#[flutter_rust_bridge::frb(sync)]
pub fn resident_stats() -> ResidentStatsResponse {
    match with_resident_service(|service| Ok(service.resident_stats())) {
        Ok(stats) => ResidentStatsResponse {
            ok: true,
            rows: stats
                .occupied()
                .map(|(district, tally)| DistrictAgeRow {
                    district: district.label().to_string(),
                    count: tally.count as u64,
                    average_age: tally.average_age(),
                })
                .collect(),
            total: stats.total() as u64,
            message: String::new(),
        },
        Err(err) => ResidentStatsResponse {
            ok: false,
            rows: Vec::new(),
            total: 0,
            message: format!("resident_stats failed: {err}"),
        },
    }
}

/// Per-district vehicle counts.
///
/// # FFI contract
/// - Sync call, file-backed execution.
/// - Never panics.
/// - Rows cover occupied districts only, in enumeration order.
#[flutter_rust_bridge::frb(sync)]
pub fn vehicle_stats() -> VehicleStatsResponse {
    match with_vehicle_service(|service| Ok(service.vehicle_stats())) {
        Ok(stats) => VehicleStatsResponse {
            ok: true,
            rows: stats
                .occupied()
                .map(|(district, count)| DistrictCountRow {
                    district: district.label().to_string(),
                    count: count as u64,
                })
                .collect(),
            total: stats.total() as u64,
            message: String::new(),
        },
        Err(err) => VehicleStatsResponse {
            ok: false,
            rows: Vec::new(),
            total: 0,
            message: format!("vehicle_stats failed: {err}"),
        },
    }
}

fn resolve_data_dir() -> PathBuf {
    REGISTRY_DATA_DIR
        .get_or_init(|| {
            let dir = match std::env::var(REGISTRY_DATA_DIR_ENV) {
                Ok(raw) if !raw.trim().is_empty() => PathBuf::from(raw.trim()),
                _ => std::env::temp_dir().join("cityregistry"),
            };
            info!(
                "event=ffi_data_dir module=ffi status=ok dir={}",
                dir.display()
            );
            dir
        })
        .clone()
}

fn with_resident_service<T>(
    f: impl FnOnce(&mut ResidentService<JsonResidentRepository>) -> cityregistry_core::RepoResult<T>,
) -> Result<T, String> {
    let path = resolve_data_dir().join(POPULATION_FILE_NAME);
    let repo = JsonResidentRepository::open(path)
        .map_err(|err| format!("population file open failed: {err}"))?;
    let mut service = ResidentService::new(repo);
    f(&mut service).map_err(|err| err.to_string())
}

fn with_vehicle_service<T>(
    f: impl FnOnce(&mut VehicleService<JsonVehicleRepository>) -> cityregistry_core::RepoResult<T>,
) -> Result<T, String> {
    let path = resolve_data_dir().join(CARS_FILE_NAME);
    let repo =
        JsonVehicleRepository::open(path).map_err(|err| format!("cars file open failed: {err}"))?;
    let mut service = VehicleService::new(repo);
    f(&mut service).map_err(|err| err.to_string())
}

fn parse_record_id(raw: &str) -> Result<Uuid, String> {
    Uuid::parse_str(raw.trim()).map_err(|err| format!("malformed record id `{raw}`: {err}"))
}

fn to_resident_view(resident: Resident) -> ResidentView {
    ResidentView {
        id: resident.id.to_string(),
        surname: resident.surname,
        name: resident.name,
        patronymic: resident.patronymic,
        age: u32::from(resident.age),
        district: resident.district.label().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::{
        core_version, init_logging, ping, register_resident, register_vehicle, remove_resident,
        resident_stats, search_residents, update_resident, vehicle_stats,
    };
    use std::sync::Mutex;
    use std::time::{SystemTime, UNIX_EPOCH};

    // The registry files live in one shared data directory per process, so
    // tests that mutate them run one at a time.
    static REGISTRY_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_empty_log_dir() {
        let error = init_logging("info".to_string(), String::new());
        assert!(!error.is_empty());
    }

    #[test]
    fn init_logging_rejects_unsupported_level() {
        let error = init_logging("verbose".to_string(), "tmp/logs".to_string());
        assert!(!error.is_empty());
    }

    #[test]
    fn register_resident_then_search_finds_it() {
        let _guard = REGISTRY_LOCK.lock().unwrap();
        let surname = unique_token("Смитов");

        let created = register_resident(
            surname.clone(),
            "Иван".to_string(),
            "Петрович".to_string(),
            "45".to_string(),
            "Южный".to_string(),
        );
        assert!(created.ok, "{}", created.message);
        let created_id = created
            .record_id
            .clone()
            .expect("created resident should return record_id");

        let response = search_residents(
            surname,
            String::new(),
            String::new(),
            String::new(),
            String::new(),
        );
        assert!(response.ok, "{}", response.message);
        assert!(response.items.iter().any(|item| item.id == created_id));
    }

    #[test]
    fn register_resident_rejects_unknown_district() {
        let _guard = REGISTRY_LOCK.lock().unwrap();

        let response = register_resident(
            "Смитов".to_string(),
            "Иван".to_string(),
            "Петрович".to_string(),
            "45".to_string(),
            "Атлантида".to_string(),
        );
        assert!(!response.ok);
        assert!(response.record_id.is_none());
        assert!(response.message.contains("Атлантида"));
    }

    #[test]
    fn search_rejects_malformed_age_criterion() {
        let response = search_residents(
            String::new(),
            String::new(),
            String::new(),
            "двадцать".to_string(),
            String::new(),
        );
        assert!(!response.ok);
        assert!(response.items.is_empty());
    }

    #[test]
    fn update_then_remove_roundtrip() {
        let _guard = REGISTRY_LOCK.lock().unwrap();
        let surname = unique_token("Кузнецов");

        let created = register_resident(
            surname.clone(),
            "Пётр".to_string(),
            "Иванович".to_string(),
            "33".to_string(),
            "Западный".to_string(),
        );
        assert!(created.ok, "{}", created.message);
        let id = created.record_id.expect("record_id on success");

        let updated = update_resident(id.clone(), "34".to_string(), "Северный".to_string());
        assert!(updated.ok, "{}", updated.message);

        let response = search_residents(
            surname.clone(),
            String::new(),
            String::new(),
            String::new(),
            String::new(),
        );
        let item = response
            .items
            .iter()
            .find(|item| item.id == id)
            .expect("updated resident should still be searchable");
        assert_eq!(item.age, 34);
        assert_eq!(item.district, "Северный");

        let removed = remove_resident(id.clone());
        assert!(removed.ok, "{}", removed.message);

        let response = search_residents(
            surname,
            String::new(),
            String::new(),
            String::new(),
            String::new(),
        );
        assert!(response.items.iter().all(|item| item.id != id));

        // A second removal of the same id reports the miss.
        let removed_again = remove_resident(id);
        assert!(!removed_again.ok);
        assert!(removed_again.message.contains("not found"));
    }

    #[test]
    fn remove_rejects_malformed_id() {
        let response = remove_resident("not-a-record-id".to_string());
        assert!(!response.ok);
        assert!(response.message.contains("malformed record id"));
    }

    #[test]
    fn resident_stats_reflect_registered_district() {
        let _guard = REGISTRY_LOCK.lock().unwrap();

        let created = register_resident(
            unique_token("Орлов"),
            "Олег".to_string(),
            "Игоревич".to_string(),
            "60".to_string(),
            "Восточный".to_string(),
        );
        assert!(created.ok, "{}", created.message);

        let stats = resident_stats();
        assert!(stats.ok, "{}", stats.message);
        assert!(stats.total >= 1);
        let row = stats
            .rows
            .iter()
            .find(|row| row.district == "Восточный")
            .expect("registered district should be occupied");
        assert!(row.count >= 1);
        assert!(row.average_age.is_some());
    }

    #[test]
    fn vehicle_register_and_stats_roundtrip() {
        let _guard = REGISTRY_LOCK.lock().unwrap();

        let before = vehicle_stats();
        assert!(before.ok, "{}", before.message);

        let created = register_vehicle(
            "ГАЗ".to_string(),
            "Волга".to_string(),
            "1972".to_string(),
            unique_token("А123БВ"),
            "Центральный".to_string(),
        );
        assert!(created.ok, "{}", created.message);

        let after = vehicle_stats();
        assert!(after.ok, "{}", after.message);
        assert_eq!(after.total, before.total + 1);
        let row = after
            .rows
            .iter()
            .find(|row| row.district == "Центральный")
            .expect("registered district should be occupied");
        assert!(row.count >= 1);
    }

    #[test]
    fn register_vehicle_rejects_bad_year() {
        let response = register_vehicle(
            "ГАЗ".to_string(),
            "Волга".to_string(),
            "1899".to_string(),
            "А123БВ".to_string(),
            "Центральный".to_string(),
        );
        assert!(!response.ok);
        assert!(response.message.contains("1899"));
    }

    fn unique_token(prefix: &str) -> String {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("time went backwards")
            .as_nanos();
        format!("{prefix}-{nanos}")
    }
}
