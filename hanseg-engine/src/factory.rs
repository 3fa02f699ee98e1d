//! Analyzer backend selection

use crate::{
    analyzer::{AnalyzerProvider, CharacterAnalyzer, MorphemeAnalyzer},
    error::{EngineError, Result},
};
use serde::{Deserialize, Serialize};
use std::{
    collections::HashMap,
    fmt,
    str::FromStr,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
};

/// Analyzer backend selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// Best registered analyzer, else `Punct`
    #[default]
    Auto,
    /// mecab-ko (native)
    Mecab,
    /// pecab (pure, slower)
    Pecab,
    /// Character-level analysis; only final punctuation starts a split
    Punct,
    /// Character transition table, no analysis
    Fast,
}

impl Backend {
    /// Every selector, in display order
    pub const ALL: [Backend; 5] = [
        Backend::Auto,
        Backend::Mecab,
        Backend::Pecab,
        Backend::Punct,
        Backend::Fast,
    ];

    /// Preference order walked by `Auto`
    pub const PREFERENCE: [Backend; 2] = [Backend::Mecab, Backend::Pecab];

    /// Lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            Backend::Auto => "auto",
            Backend::Mecab => "mecab",
            Backend::Pecab => "pecab",
            Backend::Punct => "punct",
            Backend::Fast => "fast",
        }
    }

    /// One-line description for listings
    pub fn description(&self) -> &'static str {
        match self {
            Backend::Auto => "mecab, then pecab, then punct",
            Backend::Mecab => "native morpheme analyzer (registered by the host)",
            Backend::Pecab => "pure morpheme analyzer (registered by the host)",
            Backend::Punct => "character-level; splits on final punctuation only",
            Backend::Fast => "character transition table; no analyzer needed",
        }
    }

    /// Whether the backend needs an external provider
    pub fn is_external(&self) -> bool {
        matches!(self, Backend::Mecab | Backend::Pecab)
    }

    /// Installation hint for an external backend on the current platform
    pub fn remedy(&self) -> String {
        match self {
            Backend::Mecab if cfg!(windows) => "install mecab-ko-msvc and mecab-ko-dic-msvc \
                 (C:\\mecab), then register a mecab provider"
                .to_string(),
            Backend::Mecab => "install mecab-ko and mecab-ko-dic \
                 (https://github.com/hyunwoongko/python-mecab-kor), then register a mecab provider"
                .to_string(),
            Backend::Pecab => "install pecab (https://github.com/hyunwoongko/pecab), \
                 then register a pecab provider"
                .to_string(),
            Backend::Auto | Backend::Punct | Backend::Fast => String::new(),
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Backend {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        let lowered = s.trim().to_ascii_lowercase();
        Backend::ALL
            .into_iter()
            .find(|b| b.as_str() == lowered)
            .ok_or_else(|| {
                EngineError::invalid_parameter(
                    "backend",
                    s,
                    "one of 'auto', 'mecab', 'pecab', 'punct', 'fast'",
                )
            })
    }
}

/// Something worth telling the host about backend resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FactoryEvent {
    /// `Auto` picked a registered analyzer
    Selected {
        /// The chosen backend
        backend: Backend,
    },
    /// `Auto` found no analyzer and fell back to a character-level backend
    Fallback {
        /// The backend used instead
        backend: Backend,
        /// How to install a better one
        remedy: String,
    },
}

/// Callback receiving [`FactoryEvent`]s
pub type EventCallback = Arc<dyn Fn(&FactoryEvent) + Send + Sync>;

/// Resolves backend selectors to analyzers.
///
/// `Auto` is reported at most once per factory.
pub struct AnalyzerFactory {
    providers: HashMap<Backend, Arc<dyn AnalyzerProvider>>,
    on_event: Option<EventCallback>,
    reported: AtomicBool,
}

impl fmt::Debug for AnalyzerFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut registered: Vec<&str> = self.providers.keys().map(Backend::as_str).collect();
        registered.sort_unstable();
        f.debug_struct("AnalyzerFactory")
            .field("registered", &registered)
            .field("on_event", &self.on_event.is_some())
            .field("reported", &self.reported.load(Ordering::Relaxed))
            .finish()
    }
}

impl Default for AnalyzerFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalyzerFactory {
    /// Factory with no external analyzers
    pub fn new() -> Self {
        Self {
            providers: HashMap::new(),
            on_event: None,
            reported: AtomicBool::new(false),
        }
    }

    /// Register the provider for `mecab` or `pecab`.
    pub fn register(
        &mut self,
        backend: Backend,
        provider: Arc<dyn AnalyzerProvider>,
    ) -> Result<()> {
        if !backend.is_external() {
            return Err(EngineError::invalid_parameter(
                "backend",
                backend,
                "'mecab' or 'pecab' for a registered provider",
            ));
        }
        self.providers.insert(backend, provider);
        Ok(())
    }

    /// Set the event callback
    pub fn set_event_callback(&mut self, callback: EventCallback) {
        self.on_event = Some(callback);
    }

    /// Whether a provider is registered for `backend`
    pub fn is_registered(&self, backend: Backend) -> bool {
        self.providers.contains_key(&backend)
    }

    /// Map a selector to the concrete backend that will run.
    pub fn resolve(&self, requested: Backend) -> Result<Backend> {
        match requested {
            Backend::Punct | Backend::Fast => Ok(requested),
            Backend::Mecab | Backend::Pecab => {
                if self.is_registered(requested) {
                    Ok(requested)
                } else {
                    Err(EngineError::BackendUnavailable {
                        backend: requested.to_string(),
                        remedy: requested.remedy(),
                    })
                }
            }
            Backend::Auto => {
                let chosen = Backend::PREFERENCE
                    .into_iter()
                    .find(|b| self.is_registered(*b));
                match chosen {
                    Some(backend) => {
                        self.report_once(FactoryEvent::Selected { backend });
                        Ok(backend)
                    }
                    None => {
                        self.report_once(FactoryEvent::Fallback {
                            backend: Backend::Punct,
                            remedy: Backend::Mecab.remedy(),
                        });
                        Ok(Backend::Punct)
                    }
                }
            }
        }
    }

    /// Create an analyzer for a resolved backend.
    pub fn create(&self, backend: Backend) -> Result<Box<dyn MorphemeAnalyzer>> {
        match backend {
            Backend::Punct | Backend::Fast => Ok(Box::new(CharacterAnalyzer)),
            Backend::Mecab | Backend::Pecab => match self.providers.get(&backend) {
                Some(provider) => Ok(provider.create()?),
                None => Err(EngineError::BackendUnavailable {
                    backend: backend.to_string(),
                    remedy: backend.remedy(),
                }),
            },
            Backend::Auto => {
                let resolved = self.resolve(Backend::Auto)?;
                self.create(resolved)
            }
        }
    }

    fn report_once(&self, event: FactoryEvent) {
        if self.reported.swap(true, Ordering::AcqRel) {
            return;
        }
        match &event {
            FactoryEvent::Selected { backend } => {
                tracing::info!(backend = %backend, "selected morpheme analyzer");
            }
            FactoryEvent::Fallback { backend, remedy } => {
                tracing::warn!(
                    backend = %backend,
                    "no morpheme analyzer registered; falling back to character-level splitting ({remedy})"
                );
            }
        }
        if let Some(callback) = &self.on_event {
            callback(&event);
        }
    }
}
