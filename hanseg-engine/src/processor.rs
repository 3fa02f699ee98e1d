//! Sentence splitter and builder

use crate::{
    analyzer::{preserve_spaces, AnalyzerProvider},
    chunker::{chunk_spans, locate_sentences, Chunk},
    config::SplitterConfig,
    error::{EngineError, Result},
    executor::{auto_select, AnalyzerSlot, ExecutionMode, Executor, SequentialExecutor},
    factory::{AnalyzerFactory, Backend, EventCallback, FactoryEvent},
    input::{Input, Output},
};
use hanseg_core::{split_analyzed, split_fast, BackupMap, RuleToggles, SplitOptions};
use lru::LruCache;
use std::{
    borrow::Cow,
    num::NonZeroUsize,
    sync::{Arc, Mutex, PoisonError},
};
use unicode_normalization::{is_nfc, UnicodeNormalization};

#[cfg(feature = "parallel")]
use crate::executor::ParallelExecutor;

/// Korean sentence splitter.
///
/// A splitter owns its analyzer, its worker pool and a memoization cache of
/// recent results; separate instances share nothing.
pub struct SentenceSplitter {
    config: SplitterConfig,
    backend: Backend,
    options: SplitOptions,
    factory: AnalyzerFactory,
    analyzer: Mutex<AnalyzerSlot>,
    cache: Option<Mutex<LruCache<String, Vec<String>>>>,
    workers: usize,
    #[cfg(feature = "parallel")]
    pool: Option<ParallelExecutor>,
}

impl std::fmt::Debug for SentenceSplitter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SentenceSplitter")
            .field("backend", &self.backend)
            .field("config", &self.config)
            .field("factory", &self.factory)
            .field("workers", &self.workers)
            .finish()
    }
}

impl SentenceSplitter {
    /// Splitter with the default configuration
    pub fn new() -> Result<Self> {
        SentenceSplitterBuilder::new().build()
    }

    /// Start configuring a splitter
    pub fn builder() -> SentenceSplitterBuilder {
        SentenceSplitterBuilder::new()
    }

    /// Splitter with `config` and no external analyzers
    pub fn with_config(config: SplitterConfig) -> Result<Self> {
        SentenceSplitterBuilder::new().config(config).build()
    }

    /// The configuration this splitter was built from
    pub fn config(&self) -> &SplitterConfig {
        &self.config
    }

    /// The backend that actually runs (never `Auto`)
    pub fn backend(&self) -> Backend {
        self.backend
    }

    /// Worker threads used for batches
    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Number of memoized texts
    pub fn cache_len(&self) -> usize {
        self.cache
            .as_ref()
            .map_or(0, |cache| cache.lock().unwrap_or_else(PoisonError::into_inner).len())
    }

    /// Forget memoized results
    pub fn clear_cache(&self) {
        if let Some(cache) = &self.cache {
            cache.lock().unwrap_or_else(PoisonError::into_inner).clear();
        }
    }

    /// Split a text or a batch of texts into sentences.
    ///
    /// Every sentence is non-empty. With `strip` off, the sentences of a text
    /// concatenate back to its normalized form.
    pub fn split_sentences(&self, input: impl Into<Input>) -> Result<Output<Vec<String>>> {
        self.dispatch(input.into(), |slot, text| {
            let text = self.normalize(text);
            self.split_normalized(slot, &text)
        })
    }

    /// Split into sentences, then group consecutive sentences into chunks of
    /// at most `max_length` characters.
    ///
    /// Offsets count characters in the normalized text.
    pub fn split_into_chunks(
        &self,
        input: impl Into<Input>,
        max_length: usize,
        overlap: bool,
    ) -> Result<Output<Vec<Chunk>>> {
        if max_length == 0 {
            return Err(EngineError::invalid_parameter(
                "max_length",
                0,
                "a positive number of characters",
            ));
        }
        self.dispatch(input.into(), |slot, text| {
            let text = self.normalize(text);
            let sentences = self.split_normalized(slot, &text)?;
            let spans = locate_sentences(&text, &sentences);
            Ok(chunk_spans(&text, &spans, max_length, overlap))
        })
    }

    /// Convenience wrapper for one text
    pub fn split_text(&self, text: &str) -> Result<Vec<String>> {
        let mut slot = self.analyzer.lock().unwrap_or_else(PoisonError::into_inner);
        let text = self.normalize(text);
        self.split_normalized(&mut *slot, &text)
    }

    fn dispatch<T, F>(&self, input: Input, job: F) -> Result<Output<T>>
    where
        T: Send,
        F: Fn(&mut AnalyzerSlot, &str) -> Result<T> + Sync + Send,
    {
        match input {
            Input::Single(text) => {
                let mut slot = self.analyzer.lock().unwrap_or_else(PoisonError::into_inner);
                Ok(Output::Single(job(&mut *slot, &text)?))
            }
            // A one-element batch runs like a single text.
            Input::Batch(texts) if texts.len() <= 1 => Ok(Output::Batch(
                SequentialExecutor::new(&self.analyzer).run(&texts, job)?,
            )),
            Input::Batch(texts) => {
                let mode = auto_select(texts.len(), self.workers);
                tracing::debug!(texts = texts.len(), mode = ?mode, "dispatching batch");
                Ok(Output::Batch(self.run_batch(&texts, mode, job)?))
            }
        }
    }

    #[cfg(feature = "parallel")]
    fn run_batch<T, F>(&self, texts: &[String], mode: ExecutionMode, job: F) -> Result<Vec<T>>
    where
        T: Send,
        F: Fn(&mut AnalyzerSlot, &str) -> Result<T> + Sync + Send,
    {
        match (mode, &self.pool) {
            (ExecutionMode::Parallel, Some(pool)) => pool.run(texts, job),
            _ => SequentialExecutor::new(&self.analyzer).run(texts, job),
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn run_batch<T, F>(&self, texts: &[String], _mode: ExecutionMode, job: F) -> Result<Vec<T>>
    where
        T: Send,
        F: Fn(&mut AnalyzerSlot, &str) -> Result<T> + Sync + Send,
    {
        SequentialExecutor::new(&self.analyzer).run(texts, job)
    }

    /// `text` as the splitter sees it: NFC unless normalization is off
    pub fn normalize<'t>(&self, text: &'t str) -> Cow<'t, str> {
        if self.config.normalize && !is_nfc(text) {
            Cow::Owned(text.nfc().collect())
        } else {
            Cow::Borrowed(text)
        }
    }

    fn split_normalized(&self, slot: &mut AnalyzerSlot, text: &str) -> Result<Vec<String>> {
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }

        if let Some(cache) = &self.cache {
            let mut cache = cache.lock().unwrap_or_else(PoisonError::into_inner);
            if let Some(hit) = cache.get(text) {
                return Ok(hit.clone());
            }
        }

        let mut backup = BackupMap::with_ignores(self.options.ignores.iter().cloned());
        let masked = backup.mask(text);

        let sentences = if self.backend == Backend::Fast {
            split_fast(&masked, &self.options)?
        } else {
            let analyzer = match slot.take() {
                Some(analyzer) => analyzer,
                None => self.factory.create(self.backend)?,
            };
            let analyzed = analyzer.pos(&masked);
            *slot = Some(analyzer);
            let morphemes = preserve_spaces(&masked, &analyzed?);
            split_analyzed(&masked, &morphemes, &self.options)?
        };

        let sentences: Vec<String> = if backup.is_empty() {
            sentences
        } else {
            sentences.iter().map(|s| backup.restore(s)).collect()
        };

        if let Some(cache) = &self.cache {
            cache
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .put(text.to_string(), sentences.clone());
        }

        Ok(sentences)
    }
}

/// Builder for [`SentenceSplitter`]
pub struct SentenceSplitterBuilder {
    config: SplitterConfig,
    providers: Vec<(Backend, Arc<dyn AnalyzerProvider>)>,
    on_event: Option<EventCallback>,
}

impl Default for SentenceSplitterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SentenceSplitterBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self {
            config: SplitterConfig::default(),
            providers: Vec::new(),
            on_event: None,
        }
    }

    /// Replace the whole configuration
    pub fn config(mut self, config: SplitterConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the backend
    pub fn backend(mut self, backend: Backend) -> Self {
        self.config.backend = backend;
        self
    }

    /// Trim sentence edges
    pub fn strip(mut self, strip: bool) -> Self {
        self.config.strip = strip;
        self
    }

    /// Set the worker count (None = one per CPU)
    pub fn num_workers(mut self, workers: Option<usize>) -> Self {
        self.config.num_workers = workers;
        self
    }

    /// Set the cache capacity; 0 disables caching
    pub fn cache_capacity(mut self, capacity: usize) -> Self {
        self.config.cache_capacity = capacity;
        self
    }

    /// Toggle NFC normalization
    pub fn normalize(mut self, normalize: bool) -> Self {
        self.config.normalize = normalize;
        self
    }

    /// Set the substrings that are never split inside
    pub fn ignores<I, S>(mut self, ignores: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.ignores = ignores.into_iter().map(Into::into).collect();
        self
    }

    /// Override the rule families
    pub fn rules(mut self, rules: RuleToggles) -> Self {
        self.config.rules = Some(rules);
        self
    }

    /// Set the realignment depth cap
    pub fn max_realign_depth(mut self, depth: usize) -> Self {
        self.config.max_realign_depth = depth;
        self
    }

    /// Set the realignment length guard
    pub fn realign_length_limit(mut self, limit: usize) -> Self {
        self.config.realign_length_limit = limit;
        self
    }

    /// Register an external analyzer for `mecab` or `pecab`
    pub fn provider(mut self, backend: Backend, provider: Arc<dyn AnalyzerProvider>) -> Self {
        self.providers.push((backend, provider));
        self
    }

    /// Receive backend selection events
    pub fn on_event<F>(mut self, callback: F) -> Self
    where
        F: Fn(&FactoryEvent) + Send + Sync + 'static,
    {
        self.on_event = Some(Arc::new(callback));
        self
    }

    /// Validate the configuration, resolve the backend and build.
    pub fn build(self) -> Result<SentenceSplitter> {
        let Self {
            config,
            providers,
            on_event,
        } = self;
        config.validate()?;

        let mut factory = AnalyzerFactory::new();
        for (backend, provider) in providers {
            factory.register(backend, provider)?;
        }
        if let Some(callback) = on_event {
            factory.set_event_callback(callback);
        }

        let backend = factory.resolve(config.backend)?;
        let options = config.split_options(backend);
        let workers = config.effective_workers();
        let cache = NonZeroUsize::new(config.cache_capacity).map(|cap| Mutex::new(LruCache::new(cap)));

        #[cfg(feature = "parallel")]
        let pool = if workers > 1 {
            Some(ParallelExecutor::new(workers)?)
        } else {
            None
        };

        tracing::debug!(
            requested = %config.backend,
            backend = %backend,
            workers,
            cache_capacity = config.cache_capacity,
            "sentence splitter ready"
        );

        Ok(SentenceSplitter {
            config,
            backend,
            options,
            factory,
            analyzer: Mutex::new(None),
            cache,
            workers,
            #[cfg(feature = "parallel")]
            pool,
        })
    }
}
