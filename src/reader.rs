use anyhow::{Context, Result};
use std::path::Path;
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info, warn};

/// Configuration for glossary and input reading
#[derive(Debug, Clone)]
pub struct ReaderConfig {
    /// Whether to fail fast on first unreadable input or continue
    pub fail_fast: bool,
    /// Buffer size for async reading (default: 8KB)
    pub buffer_size: usize,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            fail_fast: false,
            buffer_size: 8192,
        }
    }
}

/// Per-input read outcome
#[derive(Debug, Clone)]
pub struct ReadStats {
    pub file_path: String,
    pub bytes_read: u64,
    pub read_error: Option<String>,
}

/// Async reader for glossary term lists and input documents
pub struct GlossaryReader {
    config: ReaderConfig,
}

impl GlossaryReader {
    pub fn new(config: ReaderConfig) -> Self {
        Self { config }
    }

    /// Load glossary terms from disk
    ///
    /// `.json` files hold an array of strings. Any other file holds one term
    /// per line; blank lines and `#` comments are skipped and terms trimmed.
    pub async fn load_glossary<P: AsRef<Path>>(&self, path: P) -> Result<Vec<String>> {
        let path = path.as_ref();
        let is_json = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("json"));

        let terms = if is_json {
            let content = tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("Failed to read glossary {}", path.display()))?;
            serde_json::from_str::<Vec<String>>(&content).with_context(|| {
                format!("Glossary {} is not a JSON array of strings", path.display())
            })?
        } else {
            self.read_term_lines(path).await?
        };

        info!("Loaded {} glossary terms from {}", terms.len(), path.display());
        Ok(terms)
    }

    async fn read_term_lines(&self, path: &Path) -> Result<Vec<String>> {
        let file = File::open(path)
            .await
            .with_context(|| format!("Failed to open glossary {}", path.display()))?;

        let reader = BufReader::with_capacity(self.config.buffer_size, file);
        let mut lines = reader.lines();
        let mut terms = Vec::new();
        let mut line_no = 0u64;

        while let Some(line) = lines
            .next_line()
            .await
            .with_context(|| {
                format!("UTF-8 decoding error in {} at line {}", path.display(), line_no + 1)
            })?
        {
            line_no += 1;
            let term = line.trim();
            if term.is_empty() || term.starts_with('#') {
                continue;
            }
            terms.push(term.to_string());
        }

        debug!("Read {} lines from {}", line_no, path.display());
        Ok(terms)
    }

    /// Read one input document
    pub async fn read_input<P: AsRef<Path>>(&self, path: P) -> Result<String> {
        let path = path.as_ref();
        tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read input {}", path.display()))
    }

    /// Read several inputs sequentially
    /// Unreadable inputs are reported in their stats unless `fail_fast` is set
    pub async fn read_inputs_batch<P: AsRef<Path>>(
        &self,
        paths: &[P],
    ) -> Result<Vec<(String, ReadStats)>> {
        let mut results = Vec::with_capacity(paths.len());

        for path in paths {
            let path = path.as_ref();
            match self.read_input(path).await {
                Ok(content) => {
                    let stats = ReadStats {
                        file_path: path.display().to_string(),
                        bytes_read: content.len() as u64,
                        read_error: None,
                    };
                    results.push((content, stats));
                }
                Err(e) => {
                    if self.config.fail_fast {
                        return Err(e);
                    }
                    warn!("Failed to read input {}: {:#}", path.display(), e);
                    let stats = ReadStats {
                        file_path: path.display().to_string(),
                        bytes_read: 0,
                        read_error: Some(format!("{e:#}")),
                    };
                    results.push((String::new(), stats));
                }
            }
        }

        Ok(results)
    }
}

/// Convenience function for loading a glossary with default configuration
pub async fn load_glossary<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    GlossaryReader::new(ReaderConfig::default()).load_glossary(path).await
}

/// Convenience function for reading one input with default configuration
pub async fn read_input<P: AsRef<Path>>(path: P) -> Result<String> {
    GlossaryReader::new(ReaderConfig::default()).read_input(path).await
}
