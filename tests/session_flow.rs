mod support;

use support::{classifier_server::ClassifierServer, reconocimiento_env::ReconocimientoEnvGuard};

use reconocimiento::{
    config::{self, AppSettings},
    egui_app::{controller::EguiController, view_model},
    prediction::ScoreClass,
    theme_store::ThemePreference,
};
use std::time::{Duration, Instant};
use tempfile::TempDir;

const PNG_BYTES: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 1, 2, 3, 4];

struct SessionHarness {
    _config: ReconocimientoEnvGuard,
    temp: TempDir,
    controller: EguiController,
}

impl SessionHarness {
    fn new(endpoint: &str) -> Self {
        let temp = tempfile::tempdir().expect("create tempdir");
        let config_home = temp.path().join("config");
        std::fs::create_dir_all(&config_home).expect("create config dir");
        let env = ReconocimientoEnvGuard::set_config_home(config_home);
        let settings = AppSettings {
            classifier_endpoint: endpoint.to_string(),
            ..AppSettings::default()
        };
        let controller = EguiController::from_settings(settings);
        Self {
            _config: env,
            temp,
            controller,
        }
    }

    fn stage_file(&mut self, name: &str) {
        let path = self.temp.path().join(name);
        std::fs::write(&path, PNG_BYTES).expect("write image");
        self.controller.open_dialog();
        self.controller.stage_dropped_path(&path);
        assert!(self.controller.staged_image().is_some());
    }

    fn submit_and_wait(&mut self) {
        self.controller.submit();
        let deadline = Instant::now() + Duration::from_secs(10);
        while self.controller.ui.session.loading {
            assert!(Instant::now() < deadline, "prediction timed out");
            std::thread::sleep(Duration::from_millis(10));
            self.controller.poll_background_jobs();
        }
    }
}

#[test]
fn uploads_multipart_and_appends_normalized_prediction() {
    let server = ClassifierServer::start(vec![(
        "200 OK",
        r#"{"predicciones":{"bicycle":0.1,"cabinet":0.2,"chair":0.3,"coffee_maker":0.4,"fan":0.5,"kettle":0.6,"lamp":0.7,"mug":0.8,"sofa":0.9,"stapler":0.1,"table":0.2,"toaster":0.3}}"#.to_string(),
    )]);
    let mut harness = SessionHarness::new(&server.endpoint);
    harness.stage_file("taza.png");
    let preview = harness
        .controller
        .staged_image()
        .map(|image| image.preview().to_string())
        .unwrap();

    harness.submit_and_wait();

    let request = server.next_request();
    assert!(request.starts_with("POST /api/prediccion/ HTTP/1.1"));
    assert!(request.contains("name=\"imagen\"; filename=\"taza.png\""));
    assert!(request.contains("Content-Type: image/png"));

    let predictions = harness.controller.predictions();
    assert_eq!(predictions.len(), 1);
    assert_eq!(predictions[0].id, "PRED-001");
    assert_eq!(predictions[0].imagen, preview);
    assert_eq!(predictions[0].scores.get(ScoreClass::CoffeMaker), 0.4);
    assert_eq!(predictions[0].scores.get(ScoreClass::Mug), 0.8);
    assert!(!harness.controller.ui.session.dialog_open);
    assert!(!harness.controller.ui.session.loading);
}

#[test]
fn server_error_keeps_dialog_then_retry_succeeds() {
    let server = ClassifierServer::start(vec![
        (
            "500 Internal Server Error",
            r#"{"error":"El modelo de predicción no está disponible."}"#.to_string(),
        ),
        ("200 OK", r#"{"predicciones":{"chair":0.5}}"#.to_string()),
    ]);
    let mut harness = SessionHarness::new(&server.endpoint);
    harness.stage_file("silla.png");

    harness.submit_and_wait();
    assert!(harness.controller.predictions().is_empty());
    assert!(harness.controller.ui.session.dialog_open);
    assert_eq!(
        harness.controller.ui.toasts.last().map(|toast| toast.message.as_str()),
        Some("Error al realizar la predicción")
    );

    harness.submit_and_wait();
    let predictions = harness.controller.predictions();
    assert_eq!(predictions.len(), 1);
    assert_eq!(predictions[0].scores.get(ScoreClass::Chair), 0.5);
    assert_eq!(predictions[0].scores.get(ScoreClass::Fan), 0.0);
    assert_eq!(
        harness.controller.ui.toasts.last().map(|toast| toast.message.as_str()),
        Some("Prediccion realizada exitosamente")
    );
}

#[test]
fn unreachable_classifier_reports_failure() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);
    let mut harness = SessionHarness::new(&format!("http://{addr}/api/prediccion/"));
    harness.stage_file("gato.png");

    harness.submit_and_wait();
    assert!(harness.controller.predictions().is_empty());
    assert!(harness.controller.ui.session.dialog_open);
    assert!(harness.controller.staged_image().is_some());
}

#[test]
fn three_predictions_filter_and_sort_in_the_table() {
    let server = ClassifierServer::start(vec![
        ("200 OK", r#"{"predicciones":{"chair":0.3}}"#.to_string()),
        ("200 OK", r#"{"predicciones":{"chair":0.9}}"#.to_string()),
        ("200 OK", r#"{"predicciones":{"chair":0.1}}"#.to_string()),
    ]);
    let mut harness = SessionHarness::new(&server.endpoint);
    for name in ["a.png", "b.png", "c.png"] {
        harness.stage_file(name);
        harness.submit_and_wait();
    }
    assert_eq!(harness.controller.predictions().len(), 3);

    let chair = reconocimiento::table::ColumnId::Score(ScoreClass::Chair);
    harness.controller.toggle_sort(chair);
    harness.controller.toggle_sort(chair);
    let ids: Vec<&str> = harness
        .controller
        .ui
        .table
        .rows
        .iter()
        .map(|row| row.id.as_str())
        .collect();
    assert_eq!(ids, ["PRED-002", "PRED-001", "PRED-003"]);

    harness.controller.set_search("002");
    let table = &harness.controller.ui.table;
    assert_eq!(table.rows.len(), 1);
    assert_eq!(view_model::page_label(table), "Página 1 de 1");
    assert_eq!(view_model::showing_label(table), "Mostrando 1 de 1 resultados");
    assert_eq!(view_model::totals_label(table), "1 de 3 predicciones totales");
}

#[test]
fn theme_and_config_live_under_the_config_home() {
    let mut harness = SessionHarness::new("http://127.0.0.1:9/api/prediccion/");
    harness.controller.set_theme(ThemePreference::Light);

    let storage = harness
        .temp
        .path()
        .join("config")
        .join(".reconocimiento")
        .join("storage.toml");
    let text = std::fs::read_to_string(storage).expect("theme storage written");
    assert!(text.contains("vite-ui-theme"));
    assert!(text.contains("light"));

    let reopened = EguiController::from_settings(AppSettings::default());
    assert_eq!(reopened.ui.theme, ThemePreference::Light);

    config::save(harness.controller.settings()).expect("save config");
    let loaded = config::load_or_default().expect("load config");
    assert_eq!(loaded.classifier_endpoint, "http://127.0.0.1:9/api/prediccion/");
}
