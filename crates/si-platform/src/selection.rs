use anyhow::Result;
use async_trait::async_trait;

use si_core::ports::FileSelectionPort;

/// A selection fixed up front, e.g. paths passed on the command line.
#[derive(Debug, Clone, Default)]
pub struct StaticSelection {
    paths: Vec<String>,
}

impl StaticSelection {
    pub fn new(paths: Vec<String>) -> Self {
        Self { paths }
    }

    pub fn empty() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FileSelectionPort for StaticSelection {
    async fn selected_paths(&self) -> Result<Vec<String>> {
        Ok(self.paths.clone())
    }
}
