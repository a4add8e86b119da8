// In-memory port implementations for interactor tests

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::errors::*;
use crate::domain::model::*;
use crate::ports::*;

pub struct FakeStorage {
    roots: StorageRoots,
    files: Mutex<HashMap<String, u64>>,
    moves: Mutex<usize>,
}

impl FakeStorage {
    pub fn new(temp_dir: &str) -> Self {
        Self {
            roots: StorageRoots::new("/data/files/", temp_dir).unwrap(),
            files: Mutex::new(HashMap::new()),
            moves: Mutex::new(0),
        }
    }

    pub fn add_file(&self, path: &str, size: u64) {
        self.files.lock().unwrap().insert(path.to_string(), size);
    }

    pub fn has_file(&self, path: &str) -> bool {
        self.files.lock().unwrap().contains_key(path)
    }

    pub fn moves(&self) -> usize {
        *self.moves.lock().unwrap()
    }
}

#[async_trait]
impl StoragePort for FakeStorage {
    fn roots(&self) -> &StorageRoots {
        &self.roots
    }

    async fn move_file(
        &self,
        from_dir: &str,
        from_name: &str,
        to_dir: &str,
        to_name: &str,
    ) -> Result<(), DomainError> {
        let from = format!("{}{}", from_dir, from_name);
        let mut files = self.files.lock().unwrap();
        let size = files
            .remove(&from)
            .ok_or_else(|| DomainError::FileNotFound(from.clone()))?;
        files.insert(format!("{}{}", to_dir, to_name), size);
        *self.moves.lock().unwrap() += 1;
        Ok(())
    }

    async fn file_exists(&self, file_path: &str) -> Result<bool, DomainError> {
        Ok(self.has_file(file_path))
    }
}

#[derive(Default)]
pub struct FakeChooser {
    response: Mutex<Option<Result<Option<ChosenFile>, PickFailure>>>,
    last_request: Mutex<Option<ChooserRequest>>,
}

impl FakeChooser {
    pub fn respond(&self, response: Result<Option<ChosenFile>, PickFailure>) {
        *self.response.lock().unwrap() = Some(response);
    }

    pub fn last_request(&self) -> Option<ChooserRequest> {
        self.last_request.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChooserPort for FakeChooser {
    async fn get_file(&self, request: &ChooserRequest) -> Result<Option<ChosenFile>, PickFailure> {
        *self.last_request.lock().unwrap() = Some(request.clone());
        self.response.lock().unwrap().clone().unwrap_or(Ok(None))
    }
}

#[derive(Default)]
pub struct FakeGallery {
    response: Mutex<Option<Result<Option<String>, DomainError>>>,
    last_request: Mutex<Option<GalleryRequest>>,
}

impl FakeGallery {
    pub fn respond(&self, response: Result<Option<String>, DomainError>) {
        *self.response.lock().unwrap() = Some(response);
    }

    pub fn last_request(&self) -> Option<GalleryRequest> {
        self.last_request.lock().unwrap().clone()
    }
}

#[async_trait]
impl GalleryPort for FakeGallery {
    async fn get_picture(&self, request: &GalleryRequest) -> Result<Option<String>, DomainError> {
        *self.last_request.lock().unwrap() = Some(request.clone());
        self.response.lock().unwrap().clone().unwrap_or(Ok(None))
    }
}

/// Clock returning a fixed sequence; the last value repeats once exhausted
pub struct FakeClock {
    ticks: Mutex<VecDeque<i64>>,
    last: Mutex<i64>,
}

impl FakeClock {
    pub fn new(ticks: &[i64]) -> Self {
        Self {
            ticks: Mutex::new(ticks.iter().copied().collect()),
            last: Mutex::new(ticks.last().copied().unwrap_or(0)),
        }
    }
}

impl ClockPort for FakeClock {
    fn now_millis(&self) -> i64 {
        match self.ticks.lock().unwrap().pop_front() {
            Some(tick) => tick,
            None => *self.last.lock().unwrap(),
        }
    }
}

#[derive(Default)]
pub struct FakeAlert {
    alerts: Mutex<Vec<(String, String)>>,
}

impl FakeAlert {
    pub fn alerts(&self) -> Vec<(String, String)> {
        self.alerts.lock().unwrap().clone()
    }
}

#[async_trait]
impl AlertPort for FakeAlert {
    async fn present(&self, header: &str, message: &str) {
        self.alerts
            .lock()
            .unwrap()
            .push((header.to_string(), message.to_string()));
    }
}

#[derive(Default)]
pub struct FakeLog {
    warnings: Mutex<Vec<String>>,
    errors: Mutex<Vec<String>>,
}

impl FakeLog {
    pub fn warnings(&self) -> Vec<String> {
        self.warnings.lock().unwrap().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.errors.lock().unwrap().clone()
    }
}

#[async_trait]
impl LogPort for FakeLog {
    async fn info(&self, _message: &str) {}

    async fn warn(&self, message: &str) {
        self.warnings.lock().unwrap().push(message.to_string());
    }

    async fn error(&self, message: &str) {
        self.errors.lock().unwrap().push(message.to_string());
    }

    async fn debug(&self, _message: &str) {}
}

#[derive(Default)]
pub struct FakeTranscoder {
    probe_response: Mutex<Option<Result<MediaProbeResult, DomainError>>>,
    exec_error: Mutex<Option<DomainError>>,
    probed: Mutex<Vec<String>>,
    executed: Mutex<Vec<EncodeCommand>>,
}

impl FakeTranscoder {
    pub fn respond_to_probe(&self, response: Result<MediaProbeResult, DomainError>) {
        *self.probe_response.lock().unwrap() = Some(response);
    }

    pub fn fail_exec(&self, error: DomainError) {
        *self.exec_error.lock().unwrap() = Some(error);
    }

    pub fn probed(&self) -> Vec<String> {
        self.probed.lock().unwrap().clone()
    }

    pub fn executed(&self) -> Vec<EncodeCommand> {
        self.executed.lock().unwrap().clone()
    }

    pub fn calls(&self) -> usize {
        self.probed().len() + self.executed().len()
    }
}

#[async_trait]
impl TranscodePort for FakeTranscoder {
    async fn probe(&self, file_path: &str) -> Result<MediaProbeResult, DomainError> {
        self.probed.lock().unwrap().push(file_path.to_string());
        self.probe_response
            .lock()
            .unwrap()
            .clone()
            .unwrap_or_else(|| Ok(MediaProbeResult {
                path: file_path.to_string(),
                ..MediaProbeResult::default()
            }))
    }

    async fn exec(&self, command: &EncodeCommand) -> Result<(), DomainError> {
        self.executed.lock().unwrap().push(command.clone());
        match self.exec_error.lock().unwrap().clone() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

/// Every fake, shared so tests can inspect them after the interactor ran
pub struct Fakes {
    pub storage: Arc<FakeStorage>,
    pub chooser: Arc<FakeChooser>,
    pub gallery: Arc<FakeGallery>,
    pub clock: Arc<FakeClock>,
    pub alert: Arc<FakeAlert>,
    pub log: Arc<FakeLog>,
    pub transcoder: Arc<FakeTranscoder>,
}

impl Fakes {
    pub fn new(temp_dir: &str, ticks: &[i64]) -> Self {
        Self {
            storage: Arc::new(FakeStorage::new(temp_dir)),
            chooser: Arc::new(FakeChooser::default()),
            gallery: Arc::new(FakeGallery::default()),
            clock: Arc::new(FakeClock::new(ticks)),
            alert: Arc::new(FakeAlert::default()),
            log: Arc::new(FakeLog::default()),
            transcoder: Arc::new(FakeTranscoder::default()),
        }
    }
}
