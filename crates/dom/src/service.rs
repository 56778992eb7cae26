//! DOM Service - Main entry point for parsing
//!
//! This handles:
//! - Loading markup from strings, byte slices and readers
//! - Enforcing the configured input size limit
//! - Choosing document or fragment parsing
//! - Logging what the parser had to recover from

use std::borrow::Cow;
use std::io::Read;
use std::time::Instant;

use scraper::Html;
use serde::{Deserialize, Serialize};

use crate::document::Document;
use crate::error::{DomError, Result};

/// Configuration for DOM service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DomServiceConfig {
    /// Parse input as a fragment instead of a full document
    pub fragment: bool,
    /// Reject input larger than this many bytes
    pub max_input_bytes: Option<usize>,
    /// Log every recoverable parse error at debug level
    pub log_parse_errors: bool,
}

impl Default for DomServiceConfig {
    fn default() -> Self {
        Self {
            fragment: false,
            max_input_bytes: None,
            log_parse_errors: false,
        }
    }
}

impl DomServiceConfig {
    /// Load config from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Main DOM service
#[derive(Debug, Clone, Default)]
pub struct DomService {
    config: DomServiceConfig,
}

impl DomService {
    /// Create new DOM service with default config
    pub fn new() -> Self {
        Self::with_config(DomServiceConfig::default())
    }

    /// Create DOM service with custom config
    pub fn with_config(config: DomServiceConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DomServiceConfig {
        &self.config
    }

    /// Parse markup held in memory
    pub fn parse_str(&self, markup: &str) -> Result<Document> {
        self.check_size(markup.len())?;

        let started = Instant::now();
        let html = if self.config.fragment {
            Html::parse_fragment(markup)
        } else {
            Html::parse_document(markup)
        };

        tracing::debug!(
            bytes = markup.len(),
            fragment = self.config.fragment,
            recovered_errors = html.errors.len(),
            elapsed_us = started.elapsed().as_micros() as u64,
            "parsed html"
        );
        if self.config.log_parse_errors {
            for error in &html.errors {
                tracing::debug!(%error, "recovered parse error");
            }
        }

        Ok(Document::from_html(html))
    }

    /// Parse bytes as UTF-8
    ///
    /// Invalid sequences (e.g. a Latin-1 page) become U+FFFD instead of
    /// failing the parse.
    pub fn parse_bytes(&self, bytes: &[u8]) -> Result<Document> {
        self.check_size(bytes.len())?;
        let markup = String::from_utf8_lossy(bytes);
        if let Cow::Owned(_) = markup {
            tracing::debug!(bytes = bytes.len(), "replaced invalid utf-8 sequences");
        }
        self.parse_str(&markup)
    }

    /// Read a byte stream to the end (bounded by the size limit) and parse it
    pub fn parse_reader<R: Read>(&self, reader: R) -> Result<Document> {
        let mut bytes = Vec::new();
        match self.config.max_input_bytes {
            Some(limit) => {
                // One extra byte tells "exactly at the limit" from "over it"
                reader
                    .take((limit as u64).saturating_add(1))
                    .read_to_end(&mut bytes)?;
            }
            None => {
                let mut reader = reader;
                reader.read_to_end(&mut bytes)?;
            }
        }
        self.parse_bytes(&bytes)
    }

    fn check_size(&self, size: usize) -> Result<()> {
        match self.config.max_input_bytes {
            Some(limit) if size > limit => {
                tracing::warn!(size, limit, "rejecting oversized html input");
                Err(DomError::InputTooLarge { size, limit })
            }
            _ => Ok(()),
        }
    }
}
