//! Test utilities for resolver and executor testing.
//!
//! Provides recording fakes for every seam (probe, environment, platform,
//! host collaborators, dispatcher) and a `TestRig` that wires them up.

#[cfg(test)]
pub mod test_helpers {
    use std::collections::{HashMap, HashSet};
    use std::error::Error;
    use std::io;
    use std::path::{Path, PathBuf};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    use crate::config::{Config, Environment};
    use crate::dispatch::{Dispatch, Job};
    use crate::executor::Executor;
    use crate::host::{ErrorLog, Host, Notifier};
    use crate::platform::{LaunchRequest, Platform};
    use crate::probe::MarkerProbe;
    use crate::Resolver;

    /// Probe over a fixed set of file paths; remembers what was asked.
    #[derive(Default)]
    pub struct FakeProbe {
        files: HashSet<PathBuf>,
        probed: Mutex<Vec<PathBuf>>,
    }

    impl FakeProbe {
        pub fn empty() -> Self {
            Self::default()
        }

        pub fn with_files<I, P>(files: I) -> Self
        where
            I: IntoIterator<Item = P>,
            P: Into<PathBuf>,
        {
            Self {
                files: files.into_iter().map(Into::into).collect(),
                probed: Mutex::new(Vec::new()),
            }
        }

        pub fn probed(&self) -> Vec<PathBuf> {
            self.probed.lock().unwrap().clone()
        }
    }

    impl MarkerProbe for FakeProbe {
        fn is_file(&self, path: &Path) -> bool {
            self.probed.lock().unwrap().push(path.to_path_buf());
            self.files.contains(path)
        }
    }

    /// Environment with explicit variables and a fake search path.
    #[derive(Debug, Default, Clone)]
    pub struct FakeEnvironment {
        vars: HashMap<String, String>,
        programs: HashMap<String, PathBuf>,
    }

    impl FakeEnvironment {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_var(mut self, key: &str, value: &str) -> Self {
            self.vars.insert(key.to_string(), value.to_string());
            self
        }

        pub fn with_program(mut self, name: &str, path: &str) -> Self {
            self.programs.insert(name.to_string(), PathBuf::from(path));
            self
        }
    }

    impl Environment for FakeEnvironment {
        fn var(&self, key: &str) -> Option<String> {
            self.vars.get(key).filter(|v| !v.is_empty()).cloned()
        }

        fn which(&self, program: &str) -> Option<PathBuf> {
            self.programs.get(program).cloned()
        }
    }

    /// Platform that records requests instead of touching the OS.
    #[derive(Default)]
    pub struct FakePlatform {
        spawned: Mutex<Vec<LaunchRequest>>,
        clipboard: Mutex<Vec<String>>,
        spawn_fails: Mutex<bool>,
        clipboard_error: Mutex<Option<String>>,
    }

    impl FakePlatform {
        pub fn fail_spawn(&self) {
            *self.spawn_fails.lock().unwrap() = true;
        }

        pub fn fail_clipboard(&self, reason: &str) {
            *self.clipboard_error.lock().unwrap() = Some(reason.to_string());
        }

        pub fn spawned(&self) -> Vec<LaunchRequest> {
            self.spawned.lock().unwrap().clone()
        }

        pub fn clipboard(&self) -> Vec<String> {
            self.clipboard.lock().unwrap().clone()
        }
    }

    impl Platform for FakePlatform {
        fn spawn(&self, request: &LaunchRequest) -> io::Result<()> {
            if *self.spawn_fails.lock().unwrap() {
                return Err(io::Error::new(io::ErrorKind::NotFound, "program not found"));
            }
            self.spawned.lock().unwrap().push(request.clone());
            Ok(())
        }

        fn set_clipboard(&self, text: &str) -> Result<(), String> {
            if let Some(reason) = self.clipboard_error.lock().unwrap().clone() {
                return Err(reason);
            }
            self.clipboard.lock().unwrap().push(text.to_string());
            Ok(())
        }
    }

    #[derive(Default)]
    pub struct RecordingNotifier {
        messages: Mutex<Vec<String>>,
    }

    impl RecordingNotifier {
        pub fn messages(&self) -> Vec<String> {
            self.messages.lock().unwrap().clone()
        }
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, message: &str) {
            self.messages.lock().unwrap().push(message.to_string());
        }
    }

    #[derive(Debug, Clone)]
    pub struct LogRecord {
        pub message: String,
        pub error: String,
        pub origin: &'static str,
    }

    #[derive(Default)]
    pub struct RecordingErrorLog {
        records: Mutex<Vec<LogRecord>>,
    }

    impl RecordingErrorLog {
        pub fn records(&self) -> Vec<LogRecord> {
            self.records.lock().unwrap().clone()
        }
    }

    impl ErrorLog for RecordingErrorLog {
        fn log_error(&self, message: &str, error: &dyn Error, origin: &'static str) {
            self.records.lock().unwrap().push(LogRecord {
                message: message.to_string(),
                error: error.to_string(),
                origin,
            });
        }
    }

    /// Runs jobs inline and counts submissions.
    #[derive(Default)]
    pub struct CountingDispatcher {
        submitted: AtomicUsize,
    }

    impl CountingDispatcher {
        pub fn submitted(&self) -> usize {
            self.submitted.load(Ordering::SeqCst)
        }
    }

    impl Dispatch for CountingDispatcher {
        fn submit(&self, job: Job) {
            self.submitted.fetch_add(1, Ordering::SeqCst);
            job();
        }
    }

    /// All fakes wired together.
    pub struct TestRig {
        pub config: Arc<Config>,
        pub platform: Arc<FakePlatform>,
        pub notifier: Arc<RecordingNotifier>,
        pub log: Arc<RecordingErrorLog>,
        pub dispatcher: Arc<CountingDispatcher>,
        pub env: FakeEnvironment,
        pub probe: Arc<FakeProbe>,
    }

    impl TestRig {
        pub fn new() -> Self {
            Self {
                config: Arc::new(Config::default()),
                platform: Arc::new(FakePlatform::default()),
                notifier: Arc::new(RecordingNotifier::default()),
                log: Arc::new(RecordingErrorLog::default()),
                dispatcher: Arc::new(CountingDispatcher::default()),
                env: FakeEnvironment::new(),
                probe: Arc::new(FakeProbe::empty()),
            }
        }

        pub fn with_env(mut self, build: impl FnOnce(FakeEnvironment) -> FakeEnvironment) -> Self {
            self.env = build(self.env);
            self
        }

        pub fn with_files<I, P>(mut self, files: I) -> Self
        where
            I: IntoIterator<Item = P>,
            P: Into<PathBuf>,
        {
            self.probe = Arc::new(FakeProbe::with_files(files));
            self
        }

        pub fn host(&self) -> Host {
            Host::new(self.notifier.clone(), self.log.clone())
        }

        pub fn executor(&self) -> Executor {
            Executor::new(
                self.config.clone(),
                self.host(),
                self.platform.clone(),
                self.dispatcher.clone(),
                Arc::new(self.env.clone()),
                self.probe.clone(),
            )
        }

        pub fn resolver(&self) -> Resolver {
            Resolver::new(
                (*self.config).clone(),
                self.host(),
                self.platform.clone(),
                self.dispatcher.clone(),
                Arc::new(self.env.clone()),
                self.probe.clone(),
            )
        }
    }
}
