use encontra_domain::config::{LogRotation, LoggingConfig};
use encontra_logger::Logger;
use std::fs;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn json_lines_land_in_the_configured_directory() -> Result<(), Box<dyn std::error::Error>> {
    let tmp_dir = tempdir()?;
    let log_dir = tmp_dir.path().join("logs");

    let config = LoggingConfig {
        console: false,
        directory: Some(log_dir.clone()),
        json: true,
        rotation: LogRotation::Never,
        max_files: 2,
        ..LoggingConfig::default()
    };
    let logger = Logger::from_config("encontra-lookups", &config)?;
    assert!(logger.writes_files());

    tracing::info!(region = "tdf", slug = "cafe-austral", "venue served");

    std::thread::sleep(Duration::from_millis(30));
    drop(logger);

    let log_file = fs::read_dir(&log_dir)?
        .flatten()
        .map(|entry| entry.path())
        .find(|path| path.extension().and_then(|ext| ext.to_str()) == Some("log"))
        .expect("log file should be created");

    let contents = fs::read_to_string(&log_file)?;
    assert!(contents.contains("\"region\":\"tdf\""), "json fields expected: {contents}");
    assert!(contents.contains("venue served"));

    Ok(())
}
