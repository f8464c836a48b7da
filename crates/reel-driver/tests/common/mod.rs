//! In-memory service and sleeper shared by the driver integration tests.

#![allow(dead_code)]

use std::sync::Mutex;
use std::time::Duration;

use reel_config::ReelConfig;
use reel_core::{AnalysisIndex, AnalysisTask, IndexModel, TaskStatus};
use reel_driver::{Driver, Sleeper};
use reel_twelve::{AnalysisService, SearchHit, SearchQuery, ServiceError};

/// Scripted answer for one remote call.
#[derive(Debug, Clone)]
pub enum Reply<T> {
    Ok(T),
    /// The service answered with this non-success status.
    Status(u16),
    /// The body could not be decoded.
    Broken,
}

impl<T: Clone> Reply<T> {
    fn to_result(&self) -> Result<T, ServiceError> {
        match self {
            Self::Ok(value) => Ok(value.clone()),
            Self::Status(status) => Err(ServiceError::Api {
                status: *status,
                message: format!("scripted {status}"),
            }),
            Self::Broken => Err(ServiceError::Parse("scripted broken body".into())),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Calls {
    pub list_indexes: usize,
    pub create_index: usize,
    pub create_task: usize,
    pub get_task: usize,
    pub summarize: usize,
    pub search: usize,
    pub analyze: usize,
    pub last_query: Option<SearchQuery>,
    pub last_prompt: Option<String>,
    pub last_language: Option<String>,
}

pub struct State {
    pub indexes: Vec<AnalysisIndex>,
    pub list: Reply<()>,
    pub create_index: Reply<String>,
    pub create_task: Reply<String>,
    /// Consumed in order; the last entry repeats forever.
    pub statuses: Vec<Reply<AnalysisTask>>,
    pub summarize: Reply<String>,
    pub search: Reply<Vec<SearchHit>>,
    pub analyze: Reply<String>,
    pub calls: Calls,
}

impl Default for State {
    /// A healthy service: one `indexing` observation, then `ready`.
    fn default() -> Self {
        Self {
            indexes: Vec::new(),
            list: Reply::Ok(()),
            create_index: Reply::Ok("idx-1".into()),
            create_task: Reply::Ok("task-1".into()),
            statuses: vec![
                Reply::Ok(task("indexing", None)),
                Reply::Ok(task("ready", Some("vid-1"))),
            ],
            summarize: Reply::Ok("A calm product overview.".into()),
            search: Reply::Ok(vec![hit(Some("vid-1"))]),
            analyze: Reply::Ok("The man is looking for a job.".into()),
            calls: Calls::default(),
        }
    }
}

pub fn task(status: &str, video_id: Option<&str>) -> AnalysisTask {
    AnalysisTask {
        id: "task-1".into(),
        index_id: Some("idx-1".into()),
        status: TaskStatus::from(status),
        video_id: video_id.map(str::to_string),
    }
}

pub fn hit(video_id: Option<&str>) -> SearchHit {
    SearchHit {
        video_id: video_id.map(str::to_string),
        score: Some(84.2),
        start: Some(12.5),
        end: Some(20.0),
    }
}

#[derive(Default)]
pub struct FakeService {
    state: Mutex<State>,
}

impl FakeService {
    pub fn with(configure: impl FnOnce(&mut State)) -> Self {
        let mut state = State::default();
        configure(&mut state);
        Self {
            state: Mutex::new(state),
        }
    }

    /// Every call fails as if the API key were rejected.
    pub fn offline() -> Self {
        Self::with(|s| {
            s.list = Reply::Status(401);
            s.create_index = Reply::Status(401);
            s.create_task = Reply::Status(401);
        })
    }

    pub fn calls(&self) -> Calls {
        self.state.lock().unwrap().calls.clone()
    }
}

impl AnalysisService for FakeService {
    async fn list_indexes(&self, name: &str) -> Result<Vec<AnalysisIndex>, ServiceError> {
        let mut state = self.state.lock().unwrap();
        state.calls.list_indexes += 1;
        state.list.to_result()?;
        Ok(state
            .indexes
            .iter()
            .filter(|index| index.name.contains(name))
            .cloned()
            .collect())
    }

    async fn create_index(
        &self,
        name: &str,
        _models: &[IndexModel],
    ) -> Result<String, ServiceError> {
        let mut state = self.state.lock().unwrap();
        state.calls.create_index += 1;
        let id = state.create_index.to_result()?;
        state.indexes.push(AnalysisIndex {
            id: id.clone(),
            name: name.to_string(),
        });
        Ok(id)
    }

    async fn create_task(
        &self,
        _index_id: &str,
        _video_url: &str,
        language: &str,
    ) -> Result<String, ServiceError> {
        let mut state = self.state.lock().unwrap();
        state.calls.create_task += 1;
        state.calls.last_language = Some(language.to_string());
        state.create_task.to_result()
    }

    async fn get_task(&self, _task_id: &str) -> Result<AnalysisTask, ServiceError> {
        let mut state = self.state.lock().unwrap();
        state.calls.get_task += 1;
        let reply = if state.statuses.len() > 1 {
            state.statuses.remove(0)
        } else {
            state.statuses[0].clone()
        };
        reply.to_result()
    }

    async fn summarize(&self, _video_id: &str) -> Result<String, ServiceError> {
        let mut state = self.state.lock().unwrap();
        state.calls.summarize += 1;
        state.summarize.to_result()
    }

    async fn search(&self, query: &SearchQuery) -> Result<Vec<SearchHit>, ServiceError> {
        let mut state = self.state.lock().unwrap();
        state.calls.search += 1;
        state.calls.last_query = Some(query.clone());
        state.search.to_result()
    }

    async fn analyze(&self, _video_id: &str, prompt: &str) -> Result<String, ServiceError> {
        let mut state = self.state.lock().unwrap();
        state.calls.analyze += 1;
        state.calls.last_prompt = Some(prompt.to_string());
        state.analyze.to_result()
    }
}

/// Records requested sleeps instead of waiting.
#[derive(Default)]
pub struct RecordingSleeper {
    slept: Mutex<Vec<Duration>>,
}

impl RecordingSleeper {
    pub fn slept(&self) -> Vec<Duration> {
        self.slept.lock().unwrap().clone()
    }
}

impl Sleeper for RecordingSleeper {
    async fn sleep(&self, duration: Duration) {
        self.slept.lock().unwrap().push(duration);
    }
}

pub fn driver(service: FakeService) -> Driver<FakeService, RecordingSleeper> {
    Driver::new(service, &ReelConfig::default()).with_sleeper(RecordingSleeper::default())
}
