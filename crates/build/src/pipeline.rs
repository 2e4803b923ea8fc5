use pointer_tokens_dictionary::{Dictionary, SourceLoader};
use serde::Serialize;
use std::path::PathBuf;

use crate::config::BuildConfig;
use crate::emit::{remove_files, write_files};
use crate::error::{BuildError, Result};
use crate::format::format_pointer_css;
use crate::pointer::PointerType;
use crate::target::{OutputTarget, RenderedFile};
use crate::transform::TransformChain;

/// Summary of a finished build
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildReport {
    /// Tokens in the merged dictionary
    pub tokens: usize,
    pub files: Vec<FileReport>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileReport {
    pub destination: PathBuf,
    pub pointer: PointerType,
    pub declarations: usize,
}

/// Explicit, locally owned build setup: the transform chain and one target
/// per pointer type, both derived from a validated [`BuildConfig`].
#[derive(Debug, Clone)]
pub struct Pipeline {
    config: BuildConfig,
    transforms: TransformChain,
    targets: Vec<OutputTarget>,
}

impl Pipeline {
    pub fn new(config: BuildConfig) -> Result<Self> {
        config.validate().map_err(BuildError::InvalidConfig)?;
        let transforms = config.transforms();
        let targets = config.targets();
        Ok(Self {
            config,
            transforms,
            targets,
        })
    }

    #[must_use]
    pub fn targets(&self) -> &[OutputTarget] {
        &self.targets
    }

    /// Load sources, run the transform chain and resolve references.
    /// The returned dictionary is read-only input for rendering.
    pub fn prepare(&self) -> Result<Dictionary> {
        let mut dictionary = SourceLoader::new(self.config.source.iter()).load()?;
        self.transforms.apply(&mut dictionary);
        dictionary.resolve_references()?;
        Ok(dictionary)
    }

    /// Render every target in memory.
    pub fn render(&self, dictionary: &Dictionary) -> Result<Vec<RenderedFile>> {
        self.targets
            .iter()
            .map(|target| format_pointer_css(dictionary, target))
            .collect()
    }

    /// Full build. Nothing is written unless every target rendered.
    pub fn build(&self) -> Result<BuildReport> {
        let dictionary = self.prepare()?;
        let files = self.render(&dictionary)?;
        write_files(&files)?;

        let report = BuildReport {
            tokens: dictionary.len(),
            files: files
                .iter()
                .map(|file| FileReport {
                    destination: file.destination.clone(),
                    pointer: file.pointer,
                    declarations: file.declarations,
                })
                .collect(),
        };
        log::debug!("Built {} files from {} tokens", report.files.len(), report.tokens);
        Ok(report)
    }

    /// Remove the files a build would produce.
    pub fn clean(&self) -> Result<Vec<PathBuf>> {
        remove_files(&self.targets, &self.config.build_path)
    }
}

/// Build once with `config`.
pub fn build(config: BuildConfig) -> Result<BuildReport> {
    Pipeline::new(config)?.build()
}
