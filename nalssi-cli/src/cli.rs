use anyhow::Result;
use chrono::Local;
use clap::Parser;
use inquire::{InquireError, Text};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use nalssi_core::{FetchError, Session, WttrConfig, WttrProvider, view};

/// Top-level CLI struct.
///
/// The tool takes no arguments; everything happens in the prompt loop.
#[derive(Debug, Parser)]
#[command(name = "nalssi", version, about = "오늘의 날씨는!!? 🌦️")]
pub struct Cli {}

impl Cli {
    pub async fn run(self) -> Result<()> {
        init_tracing();

        let provider = WttrProvider::new(WttrConfig::default());
        let mut session = Session::default();

        println!("오늘의 날씨는!!? 🌦️");
        println!("{}", view::render(&session, Local::now().date_naive()));
        println!();

        // One submission at a time: the loop blocks on the fetch and
        // only then prompts again. ESC or Ctrl-C ends the session.
        loop {
            let input = match prompt_city() {
                Ok(input) => input,
                Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
                Err(err) => return Err(err.into()),
            };

            let trimmed = input.trim();
            if !trimmed.is_empty() {
                println!("'{trimmed}'의 날씨 정보를 가져오는 중...");
            }

            match session.submit(&provider, &input).await {
                Ok(()) => {
                    println!("{}", view::render(&session, Local::now().date_naive()));
                    println!();
                    println!("다른 도시가 궁금하면 다시 입력 후 조회해보세요.");
                }
                Err(err @ FetchError::EmptyQuery) => println!("⚠️  {err}"),
                Err(err) => eprintln!("❌ {err}"),
            }
            println!();
        }

        Ok(())
    }
}

fn prompt_city() -> Result<String, InquireError> {
    Text::new("도시 이름 🔍")
        .with_placeholder("여기에 도시 이름 입력...")
        .with_help_message("국내외 도시 이름을 한글로 입력하세요 (예: 여수, 전주, 파리) · ESC로 종료")
        .prompt()
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }
}
