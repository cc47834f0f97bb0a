//! End-to-end workflow tests driving the runtime with in-memory collaborators
//! and the JSON file store.

use std::sync::{Arc, Mutex};

use car_favorites::app::{StatusLevel, WorkflowPhase};
use car_favorites::lookup::ImageLookup;
use car_favorites::storage::{CarPayload, CarStore, JsonFileCarStore};
use car_favorites::worker::CarWorker;
use car_favorites::{initialize, CarFavoritesError, CarId, CarRecord, Config, Event, Rating, Result, Runtime};
use serde_json::json;

/// Answers every lookup with the same image.
struct FixedLookup(Option<String>);

impl ImageLookup for FixedLookup {
    fn lookup(&self, _name: &str) -> Option<String> {
        self.0.clone()
    }
}

#[derive(Debug, Clone, PartialEq)]
enum StoreCall {
    List,
    Create(CarRecord),
    Update(CarId, CarRecord),
    Delete(CarId),
}

/// In-memory store recording every call; ids start at 42.
#[derive(Clone, Default)]
struct RecordingStore {
    calls: Arc<Mutex<Vec<StoreCall>>>,
    records: Arc<Mutex<Vec<CarRecord>>>,
}

impl RecordingStore {
    fn calls(&self) -> Vec<StoreCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl CarStore for RecordingStore {
    fn list(&self) -> Result<Vec<CarRecord>> {
        self.calls.lock().unwrap().push(StoreCall::List);
        Ok(self.records.lock().unwrap().clone())
    }

    fn create(&mut self, draft: &CarRecord) -> Result<CarRecord> {
        self.calls.lock().unwrap().push(StoreCall::Create(draft.clone()));
        let mut records = self.records.lock().unwrap();
        let id = 42 + records.len() as u64;
        let created = CarRecord {
            id: Some(CarId::Number(id)),
            ..draft.clone()
        };
        records.push(created.clone());
        Ok(created)
    }

    fn update(&mut self, id: &CarId, draft: &CarRecord) -> Result<CarRecord> {
        self.calls.lock().unwrap().push(StoreCall::Update(id.clone(), draft.clone()));
        let mut records = self.records.lock().unwrap();
        let stored = CarRecord {
            id: Some(id.clone()),
            ..draft.clone()
        };
        match records.iter_mut().find(|r| r.id.as_ref() == Some(id)) {
            Some(existing) => *existing = stored.clone(),
            None => return Err(CarFavoritesError::StoreWrite(format!("no car {id}"))),
        }
        Ok(stored)
    }

    fn delete(&mut self, id: &CarId) -> Result<()> {
        self.calls.lock().unwrap().push(StoreCall::Delete(id.clone()));
        self.records.lock().unwrap().retain(|r| r.id.as_ref() != Some(id));
        Ok(())
    }
}

/// Store whose every call fails like an unreachable server.
struct FailingStore;

impl CarStore for FailingStore {
    fn list(&self) -> Result<Vec<CarRecord>> {
        Err(CarFavoritesError::StoreRead("connection refused".to_string()))
    }

    fn create(&mut self, _draft: &CarRecord) -> Result<CarRecord> {
        Err(CarFavoritesError::StoreWrite("connection refused".to_string()))
    }

    fn update(&mut self, _id: &CarId, _draft: &CarRecord) -> Result<CarRecord> {
        Err(CarFavoritesError::StoreWrite("connection refused".to_string()))
    }

    fn delete(&mut self, _id: &CarId) -> Result<()> {
        Err(CarFavoritesError::StoreWrite("connection refused".to_string()))
    }
}

fn runtime_with(image: Option<&str>, store: impl CarStore + 'static, config: &Config) -> Runtime {
    let worker = CarWorker::new(Box::new(FixedLookup(image.map(str::to_string))), Box::new(store));
    Runtime::new(initialize(config), worker)
}

fn save_favorite(runtime: &mut Runtime, name: &str, description: &str, rating: &str) {
    runtime.dispatch(Event::SearchSubmit(name.to_string()));
    runtime.dispatch(Event::OpenFavoriteEditor);
    runtime.dispatch(Event::SetDescription(description.to_string()));
    runtime.dispatch(Event::RatingInput(rating.to_string()));
    runtime.dispatch(Event::SaveFavorite);
}

#[test]
fn ferrari_create_then_update() {
    let store = RecordingStore::default();
    let mut runtime = runtime_with(Some("http://img/ferrari.png"), store.clone(), &Config::default());

    save_favorite(&mut runtime, "Ferrari", "fast", "5");

    let calls = store.calls();
    let [StoreCall::Create(created)] = calls.as_slice() else {
        panic!("expected a single create, got {calls:?}");
    };
    assert_eq!(
        serde_json::to_value(CarPayload::from_record(created)).unwrap(),
        json!({
            "nome": "Ferrari",
            "imagem": "http://img/ferrari.png",
            "descricao": "fast",
            "rating": 5,
            "isFavorite": true
        })
    );

    let state = runtime.state();
    assert_eq!(state.phase, WorkflowPhase::Ready);
    assert_eq!(state.favorites.len(), 1);
    let entry = state.favorites.get("Ferrari").unwrap();
    assert_eq!(entry.id, Some(CarId::Number(42)));
    assert_eq!(entry.rating, Rating::new(5));

    runtime.dispatch(Event::OpenFavoriteEditor);
    assert_eq!(runtime.state().draft.description, "fast");
    runtime.dispatch(Event::SetDescription("slow".to_string()));
    runtime.dispatch(Event::SaveFavorite);

    let calls = store.calls();
    assert_eq!(calls.len(), 2);
    let StoreCall::Update(id, updated) = &calls[1] else {
        panic!("expected an update, got {:?}", calls[1]);
    };
    assert_eq!(*id, CarId::Number(42));
    assert_eq!(updated.description, "slow");

    let state = runtime.state();
    assert_eq!(state.favorites.len(), 1);
    let entry = state.favorites.get("Ferrari").unwrap();
    assert_eq!(entry.description, "slow");
    assert_eq!(entry.id, Some(CarId::Number(42)));
}

#[test]
fn failed_save_keeps_registry_and_editor() {
    let mut runtime = runtime_with(Some("http://img/ferrari.png"), FailingStore, &Config::default());

    save_favorite(&mut runtime, "Ferrari", "fast", "5");

    let state = runtime.state();
    assert!(state.favorites.is_empty());
    assert_eq!(state.phase, WorkflowPhase::Editing);
    assert_eq!(state.draft.description, "fast");
    assert_eq!(state.draft.rating, Rating::new(5));
    assert_eq!(state.status.as_ref().map(|s| s.level), Some(StatusLevel::Error));
    assert!(!state.is_busy());
}

#[test]
fn null_image_still_saves() {
    let store = RecordingStore::default();
    let mut runtime = runtime_with(None, store.clone(), &Config::default());

    save_favorite(&mut runtime, "Gurgel", "", "");

    let entry = runtime.state().favorites.get("Gurgel").unwrap().clone();
    assert!(entry.car_image.is_none());
    assert!(entry.rating.is_none());
    assert_eq!(entry.id, Some(CarId::Number(42)));

    let calls = store.calls();
    let [StoreCall::Create(created)] = calls.as_slice() else {
        panic!("expected a single create, got {calls:?}");
    };
    assert_eq!(serde_json::to_value(CarPayload::from_record(created)).unwrap()["imagem"], json!(null));
}

#[test]
fn rejected_rating_never_reaches_the_store() {
    let store = RecordingStore::default();
    let mut runtime = runtime_with(Some("http://img/uno.png"), store.clone(), &Config::default());

    runtime.dispatch(Event::SearchSubmit("Uno".to_string()));
    runtime.dispatch(Event::OpenFavoriteEditor);
    runtime.dispatch(Event::RatingInput("4".to_string()));
    for input in ["6", "0", "12"] {
        runtime.dispatch(Event::RatingInput(input.to_string()));
    }
    runtime.dispatch(Event::SaveFavorite);

    let calls = store.calls();
    let [StoreCall::Create(created)] = calls.as_slice() else {
        panic!("expected a single create, got {calls:?}");
    };
    assert_eq!(created.rating, Rating::new(4));
}

#[test]
fn eager_draft_is_updated_not_duplicated() {
    let store = RecordingStore::default();
    let config = Config {
        eager_save: true,
        ..Config::default()
    };
    let mut runtime = runtime_with(Some("http://img/fusca.png"), store.clone(), &config);

    runtime.dispatch(Event::SearchSubmit("Fusca".to_string()));
    assert!(runtime.state().favorites.is_empty());
    assert_eq!(runtime.state().working.as_ref().unwrap().id, Some(CarId::Number(42)));

    runtime.dispatch(Event::OpenFavoriteEditor);
    runtime.dispatch(Event::SaveFavorite);

    let calls = store.calls();
    assert_eq!(calls.len(), 2);
    assert!(matches!(&calls[0], StoreCall::Create(draft) if !draft.is_favorite));
    assert!(matches!(&calls[1], StoreCall::Update(CarId::Number(42), draft) if draft.is_favorite));
    assert_eq!(runtime.state().favorites.len(), 1);
}

#[test]
fn refresh_rebuilds_favorites_from_store() {
    let store = RecordingStore::default();
    store.records.lock().unwrap().extend([
        CarRecord {
            id: Some(CarId::Number(1)),
            is_favorite: true,
            ..CarRecord::new("Opala")
        },
        CarRecord {
            id: Some(CarId::Number(2)),
            ..CarRecord::new("Chevette")
        },
    ]);
    let mut runtime = runtime_with(None, store.clone(), &Config::default());

    let outcome = runtime.dispatch(Event::RefreshFavorites);

    assert!(outcome.render);
    let state = runtime.state();
    assert!(state.favorites.is_favorite("Opala"));
    assert!(!state.favorites.is_favorite("Chevette"));
    assert_eq!(store.calls(), vec![StoreCall::List]);
}

#[test]
fn failed_refresh_keeps_local_favorites() {
    let store = RecordingStore::default();
    let mut runtime = runtime_with(Some("http://img/ka.png"), store, &Config::default());
    save_favorite(&mut runtime, "Ka", "small", "3");

    let worker = CarWorker::new(Box::new(FixedLookup(None)), Box::new(FailingStore));
    let mut failing = Runtime::new(runtime.state().clone(), worker);
    failing.dispatch(Event::RefreshFavorites);

    assert!(failing.state().favorites.is_favorite("Ka"));
    assert_eq!(failing.state().status.as_ref().map(|s| s.level), Some(StatusLevel::Error));
}

#[test]
fn remove_deletes_remote_record() {
    let store = RecordingStore::default();
    let mut runtime = runtime_with(Some("http://img/uno.png"), store.clone(), &Config::default());
    save_favorite(&mut runtime, "Uno", "", "2");

    runtime.dispatch(Event::RemoveFavorite("Uno".to_string()));

    assert!(runtime.state().favorites.is_empty());
    assert!(runtime.state().working.as_ref().unwrap().id.is_none());
    assert_eq!(store.calls().last(), Some(&StoreCall::Delete(CarId::Number(42))));
}

#[test]
fn quit_is_reported() {
    let mut runtime = runtime_with(None, RecordingStore::default(), &Config::default());
    assert!(runtime.dispatch(Event::Quit).quit);
}

#[test]
fn favorites_survive_restart_with_file_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cars.json");

    {
        let store = JsonFileCarStore::new(path.clone()).unwrap();
        let mut runtime = runtime_with(Some("http://img/ferrari.png"), store, &Config::default());
        save_favorite(&mut runtime, "Ferrari", "fast", "5");
        save_favorite(&mut runtime, "Fusca", "slow", "2");
        runtime.dispatch(Event::RemoveFavorite("Fusca".to_string()));
    }

    let store = JsonFileCarStore::new(path).unwrap();
    let mut runtime = runtime_with(None, store, &Config::default());
    runtime.dispatch(Event::RefreshFavorites);

    let state = runtime.state();
    assert_eq!(state.favorites.len(), 1);
    let entry = state.favorites.get("Ferrari").unwrap();
    assert_eq!(entry.id, Some(CarId::Number(1)));
    assert_eq!(entry.description, "fast");
    assert_eq!(entry.car_image.as_deref(), Some("http://img/ferrari.png"));
}

#[test]
fn save_after_toggle_off_updates_the_existing_record() {
    let store = RecordingStore::default();
    let mut runtime = runtime_with(Some("http://img/ferrari.png"), store.clone(), &Config::default());
    save_favorite(&mut runtime, "Ferrari", "fast", "5");

    runtime.dispatch(Event::OpenFavoriteEditor);
    runtime.dispatch(Event::QuickToggleFavorite);
    assert!(runtime.state().favorites.is_empty());
    assert_eq!(store.calls().len(), 1);

    runtime.dispatch(Event::SaveFavorite);

    let calls = store.calls();
    assert_eq!(calls.len(), 2);
    let StoreCall::Update(id, updated) = &calls[1] else {
        panic!("expected an update, got {:?}", calls[1]);
    };
    assert_eq!(*id, CarId::Number(42));
    assert!(updated.is_favorite);

    let state = runtime.state();
    assert_eq!(state.favorites.len(), 1);
    let entry = state.favorites.get("Ferrari").unwrap();
    assert_eq!(entry.id, Some(CarId::Number(42)));
    assert_eq!(entry.description, "fast");
    assert_eq!(state.phase, WorkflowPhase::Ready);
}

#[test]
fn save_after_toggle_on_creates_once_and_adopts_the_id() {
    let store = RecordingStore::default();
    let mut runtime = runtime_with(Some("http://img/uno.png"), store.clone(), &Config::default());

    runtime.dispatch(Event::SearchSubmit("Uno".to_string()));
    runtime.dispatch(Event::OpenFavoriteEditor);
    runtime.dispatch(Event::SetDescription("city".to_string()));
    runtime.dispatch(Event::QuickToggleFavorite);

    let local = runtime.state().favorites.get("Uno").unwrap().clone();
    assert_eq!(local.id, None);
    assert!(store.calls().is_empty());

    runtime.dispatch(Event::SaveFavorite);

    let calls = store.calls();
    let [StoreCall::Create(created)] = calls.as_slice() else {
        panic!("expected a single create, got {calls:?}");
    };
    assert_eq!(created.name, "Uno");
    assert_eq!(created.id, None);

    let state = runtime.state();
    assert_eq!(state.favorites.len(), 1);
    let entry = state.favorites.get("Uno").unwrap();
    assert_eq!(entry.id, Some(CarId::Number(42)));
    assert_eq!(entry.description, "city");
}
