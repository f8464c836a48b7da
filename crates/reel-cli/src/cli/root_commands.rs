use anyhow::bail;
use clap::{Args, Subcommand};
use reel_driver::{Submission, demo_submissions};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Audit videos for brand compliance.
    Audit(AuditArgs),
    /// Ask a question about the indexed videos.
    Ask(AskArgs),
    /// Index a video and report its placeholder embedding.
    Ingest(IngestArgs),
    /// Evaluate the policy rules against a summary (offline).
    Policy(PolicyArgs),
    /// Print the effective configuration (API key masked).
    Config,
    /// Print the JSON Schema of the compliance report.
    Schema,
}

/// Arguments for `reel audit`.
#[derive(Clone, Debug, Args)]
pub struct AuditArgs {
    /// Video URL to audit (repeatable). Defaults to the demo submissions.
    #[arg(long = "video", value_name = "URL")]
    pub videos: Vec<String>,

    /// Creator handle for the video at the same position (repeatable).
    #[arg(long = "creator", value_name = "NAME")]
    pub creators: Vec<String>,
}

impl AuditArgs {
    /// Pair `--video` and `--creator` values by position.
    pub fn submissions(&self) -> anyhow::Result<Vec<Submission>> {
        if self.videos.is_empty() {
            if !self.creators.is_empty() {
                bail!("--creator requires a matching --video");
            }
            return Ok(demo_submissions());
        }
        if self.creators.len() > self.videos.len() {
            bail!(
                "{} --creator values given for {} --video values",
                self.creators.len(),
                self.videos.len()
            );
        }

        Ok(self
            .videos
            .iter()
            .enumerate()
            .map(|(i, url)| {
                let submission = Submission::new(url.clone());
                match self.creators.get(i) {
                    Some(creator) => submission.with_creator(creator.clone()),
                    None => submission,
                }
            })
            .collect())
    }
}

/// Arguments for `reel ask`.
#[derive(Clone, Debug, Args)]
pub struct AskArgs {
    /// Natural-language question.
    pub question: String,
}

/// Arguments for `reel ingest`.
#[derive(Clone, Debug, Args)]
pub struct IngestArgs {
    /// Video URL to index.
    pub url: String,
}

/// Arguments for `reel policy`.
#[derive(Clone, Debug, Args)]
pub struct PolicyArgs {
    /// Summary text to evaluate.
    pub summary: String,
}
