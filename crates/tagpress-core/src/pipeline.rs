//! One activation cycle: code, artifact, file, dispatch.

use std::path::PathBuf;

use tagpress_compose::ArtifactComposer;
use tagpress_dispatch::OutputDispatcher;
use tagpress_model::{Code, CodeGenerator, IssuedCodes, Timestamp};
use tagpress_store::ArtifactStore;

use crate::error::CycleError;

/// Outcome of a cycle that produced a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleReport {
    pub code: Code,
    pub path: PathBuf,
    /// False if the dispatcher reported a failure; the file still exists.
    pub dispatched: bool,
}

/// Generation, composition, storage and dispatch wired together.
pub struct Pipeline {
    generator: CodeGenerator,
    issued: Option<IssuedCodes>,
    composer: ArtifactComposer,
    store: ArtifactStore,
    dispatcher: Box<dyn OutputDispatcher>,
    should_print: bool,
}

impl Pipeline {
    pub fn new(
        composer: ArtifactComposer,
        store: ArtifactStore,
        dispatcher: Box<dyn OutputDispatcher>,
    ) -> Self {
        Self {
            generator: CodeGenerator::from_entropy(),
            issued: None,
            composer,
            store,
            dispatcher,
            should_print: true,
        }
    }

    #[must_use]
    pub fn with_generator(mut self, generator: CodeGenerator) -> Self {
        self.generator = generator;
        self
    }

    /// Track issued codes and never repeat one within this run.
    #[must_use]
    pub fn with_unique_codes(mut self, enabled: bool) -> Self {
        self.issued = enabled.then(IssuedCodes::new);
        self
    }

    #[must_use]
    pub fn with_printing(mut self, should_print: bool) -> Self {
        self.should_print = should_print;
        self
    }

    pub fn store(&self) -> &ArtifactStore {
        &self.store
    }

    /// Run a full cycle with a freshly drawn code.
    pub fn run_cycle(&mut self) -> Result<CycleReport, CycleError> {
        let timestamp = self.capture_timestamp();
        let code = match self.issued.as_mut() {
            Some(issued) => self.generator.generate_unique(issued)?,
            None => self.generator.generate(),
        };
        self.produce(code, timestamp)
    }

    /// Run a cycle for a caller-chosen code.
    pub fn run_with_code(&mut self, code: Code) -> Result<CycleReport, CycleError> {
        let timestamp = self.capture_timestamp();
        if let Some(issued) = self.issued.as_mut() {
            issued.insert(code);
        }
        self.produce(code, timestamp)
    }

    fn capture_timestamp(&self) -> Option<Timestamp> {
        self.composer.needs_timestamp().then(Timestamp::now)
    }

    fn produce(
        &mut self,
        code: Code,
        timestamp: Option<Timestamp>,
    ) -> Result<CycleReport, CycleError> {
        let span = tracing::info_span!("cycle", %code);
        let _guard = span.enter();
        tracing::info!("generating artifact");

        let artifact = self.composer.render(&code, timestamp.as_ref())?;
        let path = self.store.save(&artifact, &code)?;

        let dispatched = match self.dispatcher.dispatch(&path, self.should_print) {
            Ok(()) => true,
            Err(error) => {
                tracing::warn!(%error, path = %path.display(), "dispatch failed");
                false
            }
        };

        tracing::info!(path = %path.display(), "artifact complete");
        Ok(CycleReport {
            code,
            path,
            dispatched,
        })
    }
}
