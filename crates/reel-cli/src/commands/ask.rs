use reel_config::ReelConfig;
use reel_driver::Answer;
use serde::Serialize;

use crate::bootstrap;
use crate::cli::GlobalFlags;
use crate::cli::root_commands::AskArgs;
use crate::output;
use crate::progress::Spinner;

#[derive(Debug, Serialize)]
struct AskResponse<'a> {
    question: &'a str,
    answered: bool,
    answer: String,
}

/// Handle `reel ask`.
pub async fn handle(args: &AskArgs, config: &ReelConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let driver = bootstrap::driver(config)?;

    let spinner = Spinner::start("searching and generating");
    let answer = driver.answer(&args.question).await;
    spinner.finish_clear();

    output::output(&response(&args.question, &answer), flags.format)
}

fn response<'a>(question: &'a str, answer: &Answer) -> AskResponse<'a> {
    AskResponse {
        question,
        answered: answer.is_answered(),
        answer: answer.to_string(),
    }
}
