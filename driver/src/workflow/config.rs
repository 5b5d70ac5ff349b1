use anyhow::Context;
use clap::ValueEnum;
use matcore::{EngineConfig, Granularity};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Cell type used for generated and file-read matrices.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    #[default]
    Int,
    Float,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkflowConfig {
    pub sizes: Vec<usize>,
    pub seed: u64,
    pub element: ElementKind,
    pub engine: EngineConfig,
    pub edge_cases: bool,
    pub report: Option<PathBuf>,
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            sizes: vec![100, 1000],
            seed: 0,
            element: ElementKind::Int,
            engine: EngineConfig::default(),
            edge_cases: true,
            report: None,
        }
    }
}

impl WorkflowConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading workflow config {}", path_ref.display()))?;
        let config: WorkflowConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing workflow config {}", path_ref.display()))?;
        config
            .engine
            .validate()
            .with_context(|| format!("validating workflow config {}", path_ref.display()))?;
        Ok(config)
    }

    pub fn from_args(
        sizes: Vec<usize>,
        seed: u64,
        element: ElementKind,
        max_workers: usize,
        granularity: Granularity,
    ) -> Self {
        let mut config = Self {
            seed,
            element,
            engine: EngineConfig {
                max_workers,
                granularity,
            },
            ..Self::default()
        };
        if !sizes.is_empty() {
            config.sizes = sizes;
        }
        config
    }
}
