//! Where the solutions PDF comes from: the local cache or a download

use std::path::Path;

use crate::config::Config;
use crate::error::{Error, Result};

/// Fetch the PDF with a single blocking GET
///
/// Any transport failure or non-success status is a `FetchFailure`. There is
/// no retry.
pub fn download_pdf(url: &str) -> Result<Vec<u8>> {
    let fetch_failure = |e: reqwest::Error| Error::FetchFailure {
        url: url.to_string(),
        reason: e.to_string(),
    };

    log::info!("Downloading {}", url);
    let response = reqwest::blocking::get(url)
        .and_then(|response| response.error_for_status())
        .map_err(fetch_failure)?;
    let bytes = response.bytes().map_err(fetch_failure)?;

    log::debug!("Downloaded {} bytes", bytes.len());
    Ok(bytes.to_vec())
}

fn save_pdf(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, bytes)?;
    log::info!("Cached PDF at {}", path.display());
    Ok(())
}

/// Read the cached PDF if present, otherwise download it
pub fn load_pdf_bytes(config: &Config) -> Result<Vec<u8>> {
    if config.pdf_cache_path.exists() {
        log::debug!("Using cached PDF {}", config.pdf_cache_path.display());
        return Ok(std::fs::read(&config.pdf_cache_path)?);
    }

    let bytes = download_pdf(&config.pdf_url)?;
    if config.save_download {
        save_pdf(&config.pdf_cache_path, &bytes)?;
    }
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_cached_pdf_is_used() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let mut config = Config::with_root(temp_dir.path());
        config.pdf_url = "not a url".to_string();

        std::fs::create_dir_all(config.pdf_cache_path.parent().unwrap()).unwrap();
        std::fs::write(&config.pdf_cache_path, b"%PDF-1.5 cached").unwrap();

        let bytes = load_pdf_bytes(&config).expect("cache should be read");
        assert_eq!(bytes, b"%PDF-1.5 cached");
    }

    #[test]
    fn test_download_failure() {
        let result = download_pdf("not a url");
        match result {
            Err(Error::FetchFailure { url, .. }) => assert_eq!(url, "not a url"),
            other => panic!("expected FetchFailure, got {:?}", other),
        }
    }

    #[test]
    fn test_failed_download_is_not_cached() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let mut config = Config::with_root(temp_dir.path());
        config.pdf_url = "not a url".to_string();
        config.save_download = true;

        assert!(load_pdf_bytes(&config).is_err());
        assert!(!config.pdf_cache_path.exists());
    }
}
