use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::time::Instant;
use log::{error, info, debug, log, Level};
use indicatif::{ProgressBar, ProgressStyle};
use crate::app_config::StyleConfig;
use crate::ass::AssDocument;
use crate::errors::ConvertError;
use crate::file_utils::{FileManager, Storage};
use crate::transcript::parse_transcript;

// @module: Application controller for transcript conversion

/// Result of converting one transcript
#[derive(Debug)]
pub struct FileOutcome {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Number of chat messages written on success
    pub result: Result<usize, ConvertError>,
}

/// Per-file results of a batch run, in input order
#[derive(Debug, Default)]
pub struct ConversionReport {
    pub outcomes: Vec<FileOutcome>,
}

impl ConversionReport {
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }

    // @returns: Warn when any file failed, Info otherwise
    pub fn summary_level(&self) -> Level {
        if self.failed() > 0 { Level::Warn } else { Level::Info }
    }
}

/// Main application controller for transcript to subtitle conversion
pub struct Controller<S: Storage = FileManager> {
    // @field: Read/write capability
    storage: S,

    // @field: Style configuration location, re-read for every file
    config_path: PathBuf,

    // @field: Print the progress bar and per-file status lines
    console: bool,
}

impl Controller<FileManager> {
    // @method: Create a controller backed by the filesystem
    pub fn new<P: Into<PathBuf>>(config_path: P) -> Self {
        Self::with_storage(FileManager, config_path)
    }
}

impl<S: Storage> Controller<S> {
    // @method: Create a controller over the given storage, console output off
    pub fn with_storage<P: Into<PathBuf>>(storage: S, config_path: P) -> Self {
        Self {
            storage,
            config_path: config_path.into(),
            console: false,
        }
    }

    /// Enable or disable console status output
    pub fn with_console(mut self, console: bool) -> Self {
        self.console = console;
        self
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Load and validate the style configuration
    pub fn load_config(&self) -> Result<StyleConfig, ConvertError> {
        let content = self.storage.read_to_string(&self.config_path)?;
        let config = StyleConfig::from_json(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Convert one transcript file into one `.ass` file.
    ///
    /// The output is written only after the whole document rendered.
    pub fn convert_file(&self, input: &Path, output: &Path) -> Result<usize, ConvertError> {
        let config = self.load_config()?;
        let content = self.storage.read_to_string(input)?;
        let records = parse_transcript(&content)?;
        let document = AssDocument::build(&config, &records)?;

        self.storage.write(output, &document.to_string())?;
        debug!("Wrote {} dialogue pairs to {:?}", document.events.len(), output);
        Ok(document.events.len())
    }

    /// Pair inputs with outputs; an empty output list means `<input>.ass`
    pub fn pair_paths(inputs: &[PathBuf], outputs: &[PathBuf]) -> Result<Vec<(PathBuf, PathBuf)>, ConvertError> {
        if outputs.is_empty() {
            return Ok(inputs
                .iter()
                .map(|input| (input.clone(), FileManager::default_output_path(input)))
                .collect());
        }

        if inputs.len() != outputs.len() {
            return Err(ConvertError::ArgumentMismatch {
                inputs: inputs.len(),
                outputs: outputs.len(),
            });
        }

        Ok(inputs.iter().cloned().zip(outputs.iter().cloned()).collect())
    }

    /// Convert every input/output pair in order.
    ///
    /// A mismatch between list lengths fails before anything is converted.
    /// After that, each pair succeeds or fails on its own.
    pub fn run(&self, inputs: &[PathBuf], outputs: &[PathBuf]) -> Result<ConversionReport, ConvertError> {
        let pairs = Self::pair_paths(inputs, outputs)?;
        let start_time = Instant::now();

        let progress_bar = self.progress_bar(pairs.len() as u64);
        self.status(&progress_bar, &format!(
            "Processing {} file{}...",
            pairs.len(),
            if pairs.len() == 1 { "" } else { "s" }
        ));
        let mut report = ConversionReport::default();

        for (index, (input, output)) in pairs.into_iter().enumerate() {
            let file_name = input.file_name()
                .map(|f| f.to_string_lossy().to_string())
                .unwrap_or_else(|| input.display().to_string());
            progress_bar.set_message(format!("Converting: {}", file_name));

            let result = self.convert_file(&input, &output);
            match &result {
                Ok(count) => {
                    info!("File {}: {} messages from {:?}", index + 1, count, input);
                    self.status(&progress_bar, &format!(
                        "\x1B[1;32m✔ Subtitles generated under \"\x1B[1;33m{}\x1B[1;32m\"!\x1B[0m",
                        output.display()
                    ));
                }
                Err(e) => {
                    error!("File {}: failed to convert {:?}: {}", index + 1, input, e);
                    self.status(&progress_bar, &format!("\x1B[1;31m✖ {}: {}\x1B[0m", input.display(), e));
                }
            }

            report.outcomes.push(FileOutcome { input, output, result });
            progress_bar.inc(1);
        }

        progress_bar.finish_and_clear();
        log!(
            report.summary_level(),
            "Conversion completed in {:.2?}: {} converted, {} failed",
            start_time.elapsed(),
            report.succeeded(),
            report.failed()
        );

        Ok(report)
    }

    fn progress_bar(&self, len: u64) -> ProgressBar {
        if !self.console || !std::io::stdout().is_terminal() {
            return ProgressBar::hidden();
        }

        let progress_bar = ProgressBar::new(len);
        let template_result = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        progress_bar.set_style(template_result.progress_chars("█▓▒░"));
        progress_bar
    }

    fn status(&self, progress_bar: &ProgressBar, line: &str) {
        if !self.console {
            return;
        }
        if progress_bar.is_hidden() {
            println!("{}", line);
        } else {
            progress_bar.println(line);
        }
    }
}
