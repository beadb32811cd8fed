//! Service context bundling all port trait objects.

use std::path::Path;
use std::sync::{Arc, Mutex};

use crate::adapters::live::id_gen::LiveIdGenerator;
use crate::adapters::live::kv_store::FileKeyValueStore;
use crate::adapters::live::notifier::SoundNotifier;
use crate::adapters::live::quotes::HttpQuoteSource;
use crate::adapters::live::search::HttpSearchSource;
use crate::adapters::memory::{MemoryStore, OfflineService, SequentialIdGenerator, SilentNotifier};
use crate::adapters::recording::{
    RecordingIdGenerator, RecordingQuoteSource, RecordingSearchSource, SharedRecorder,
};
use crate::adapters::replaying::{
    ReplayingIdGenerator, ReplayingQuoteSource, ReplayingSearchSource,
};
use crate::cassette::format::Cassette;
use crate::cassette::recorder::CassetteRecorder;
use crate::cassette::replayer::CassetteReplayer;
use crate::config::Config;
use crate::ports::{IdGenerator, KeyValueStore, Notifier, QuoteSource, SearchSource};

/// Bundles all port trait objects into a single context.
///
/// Each field provides access to one external boundary. Constructors wire
/// up different adapter implementations (live, recording, replaying,
/// in-memory). Fields are public so a host can swap a single port.
pub struct ServiceContext {
    /// Durable key-value store for tasks and preferences.
    pub store: Box<dyn KeyValueStore>,
    /// ID generator for new tasks.
    pub id_gen: Box<dyn IdGenerator>,
    /// Audio cue for timer completion.
    pub notifier: Box<dyn Notifier>,
    /// Motivational quote service.
    pub quotes: Box<dyn QuoteSource>,
    /// Related-topics search service.
    pub search: Box<dyn SearchSource>,
    /// Cassette recorder; written to disk on drop if it captured anything.
    recorder: Option<SharedRecorder>,
}

impl ServiceContext {
    /// Creates a live context: files under the data directory, real HTTP,
    /// real audio.
    #[must_use]
    pub fn live(config: &Config) -> Self {
        Self {
            store: Box::new(FileKeyValueStore::new(&config.data_dir)),
            id_gen: Box::new(LiveIdGenerator::new()),
            notifier: Box::new(SoundNotifier::new(&config.sound_path())),
            quotes: Box::new(HttpQuoteSource::new(&config.quote_url, config.http_timeout())),
            search: Box::new(HttpSearchSource::new(&config.search_url, config.http_timeout())),
            recorder: None,
        }
    }

    /// Creates a live context that also records quote, search and id
    /// interactions. The cassette is written to `path` when the context is
    /// dropped, unless nothing was recorded.
    #[must_use]
    pub fn recording(config: &Config, path: &Path) -> Self {
        let recorder = CassetteRecorder::new(path, "studymate-session");
        let recorder: SharedRecorder = Arc::new(Mutex::new(recorder));
        let ids = Box::new(LiveIdGenerator::new());
        let quotes = Box::new(HttpQuoteSource::new(&config.quote_url, config.http_timeout()));
        let search = Box::new(HttpSearchSource::new(&config.search_url, config.http_timeout()));

        Self {
            store: Box::new(FileKeyValueStore::new(&config.data_dir)),
            id_gen: Box::new(RecordingIdGenerator::new(ids, Arc::clone(&recorder))),
            notifier: Box::new(SoundNotifier::new(&config.sound_path())),
            quotes: Box::new(RecordingQuoteSource::new(quotes, Arc::clone(&recorder))),
            search: Box::new(RecordingSearchSource::new(search, Arc::clone(&recorder))),
            recorder: Some(recorder),
        }
    }

    /// Creates a context that serves recorded interactions from the cassette
    /// at `path`.
    ///
    /// Ports the cassette never recorded keep their live adapter, so a
    /// cassette holding only quotes still lets tasks get real ids.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette file cannot be read or parsed.
    pub fn replaying(config: &Config, path: &Path) -> Result<Self, String> {
        let cassette = Cassette::load(path)?;
        let mut ctx = Self::live(config);

        // Each port gets its own replayer so per-port cursors are independent.
        let replayer = || CassetteReplayer::new(&cassette);
        if replayer().covers_port("id_gen") {
            ctx.id_gen = Box::new(ReplayingIdGenerator::new(replayer()));
        }
        if replayer().covers_port("quotes") {
            ctx.quotes = Box::new(ReplayingQuoteSource::new(replayer()));
        }
        if replayer().covers_port("search") {
            ctx.search = Box::new(ReplayingSearchSource::new(replayer()));
        }
        Ok(ctx)
    }

    /// Creates a self-contained context with no disk, network or audio.
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            store: Box::new(MemoryStore::new()),
            id_gen: Box::new(SequentialIdGenerator::new()),
            notifier: Box::new(SilentNotifier::new()),
            quotes: Box::new(OfflineService),
            search: Box::new(OfflineService),
            recorder: None,
        }
    }

    /// Replaces the audio cue with a silent one.
    pub fn mute(&mut self) {
        self.notifier = Box::new(SilentNotifier::new());
    }
}

impl Drop for ServiceContext {
    fn drop(&mut self) {
        let Some(recorder) = self.recorder.take() else {
            return;
        };
        let guard = match recorder.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        if guard.is_empty() {
            tracing::debug!("nothing recorded, cassette not written");
            return;
        }
        match guard.write() {
            Ok(path) => tracing::info!(path = %path.display(), "cassette written"),
            Err(e) => tracing::warn!("failed to write cassette: {e}"),
        }
    }
}
