use clap::{Parser, Subcommand};
use serde::Serialize;
use tgbot_core::config;
use tgbot_http::HttpExecutor;
use tgbot_methods::{Bot, GetMe, GetMyCommands, GetUpdates, SendMessage};
use tgbot_types::ChatId;

#[derive(Parser)]
#[command(name = "tgbot", version, about = "Call the Telegram Bot API from the shell")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to config file.
    #[arg(short, long, default_value = "config.toml")]
    config: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the bot's own user.
    Me,
    /// Fetch pending updates.
    Updates {
        /// First update id to return; earlier ones are confirmed.
        #[arg(long)]
        offset: Option<i64>,
        /// Long polling timeout in seconds.
        #[arg(long, default_value_t = 0)]
        timeout: i64,
    },
    /// Send a text message.
    Send {
        /// Numeric chat id or @channelusername.
        chat: String,
        /// The message to send.
        #[arg(trailing_var_arg = true)]
        text: Vec<String>,
    },
    /// List the bot's registered commands.
    Commands,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cfg = config::load(&cli.config)?;
    tracing::debug!("using Bot API server {}", cfg.telegram.api_url);
    let bot = Bot::new(HttpExecutor::new(&cfg.telegram)?);

    match cli.command {
        Commands::Me => print_json(&bot.send(GetMe).await?)?,
        Commands::Updates { offset, timeout } => {
            let mut method = GetUpdates::new().timeout(timeout);
            if let Some(offset) = offset {
                method = method.offset(offset);
            }
            print_json(&bot.send(method).await?)?;
        }
        Commands::Send { chat, text } => {
            if text.is_empty() {
                anyhow::bail!("no text provided. Usage: tgbot send <chat> <text>");
            }
            let message = bot
                .send(SendMessage::new(parse_chat(&chat), text.join(" ")))
                .await?;
            print_json(&message)?;
        }
        Commands::Commands => print_json(&bot.send(GetMyCommands::new()).await?)?,
    }

    Ok(())
}

/// Numeric ids go out as integers, anything else as a username.
fn parse_chat(raw: &str) -> ChatId {
    match raw.parse::<i64>() {
        Ok(id) => ChatId::from(id),
        Err(_) => ChatId::from(raw),
    }
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_chat() {
        assert_eq!(parse_chat("-1001234"), ChatId::from(-1001234_i64));
        assert_eq!(parse_chat("@news"), ChatId::from("@news"));
    }

    #[test]
    fn test_cli_send_joins_words() {
        let cli = Cli::parse_from(["tgbot", "send", "42", "hello", "there"]);
        match cli.command {
            Commands::Send { chat, text } => {
                assert_eq!(chat, "42");
                assert_eq!(text.join(" "), "hello there");
            }
            _ => panic!("expected send"),
        }
        assert_eq!(cli.config, "config.toml");
    }
}
