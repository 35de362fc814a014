use anyhow::{bail, Context};
use futures::future::join_all;
use lostark_provider::lostark::types::NoticeType;
use lostark_provider::LostArkClient;
use serde::Serialize;

/// One CLI invocation
#[derive(Debug, PartialEq)]
enum Command {
    Events,
    Notices(Option<NoticeType>),
    Characters(String),
    Profiles(Vec<String>),
    Guilds(String),
    MarketItem(i64),
    AuctionOptions,
    MarketOptions,
    Calendar,
    Help,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let command = match parse_args(&args) {
        Ok(command) => command,
        Err(err) => {
            eprintln!("{}", err);
            print_usage();
            std::process::exit(1);
        }
    };

    if command == Command::Help {
        print_usage();
        return Ok(());
    }

    // Logs go to stderr so stdout stays valid JSON
    tracing_subscriber::fmt()
        .with_target(false)
        .with_thread_ids(false)
        .with_level(true)
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let client = LostArkClient::from_env().context("Failed to initialize Lost Ark client")?;
    tracing::debug!(base_url = client.base_url(), "Lost Ark client ready");

    run(&client, command).await
}

async fn run(client: &LostArkClient, command: Command) -> anyhow::Result<()> {
    match command {
        Command::Events => print_json(&client.fetch_events().await?),
        Command::Notices(kind) => print_json(&client.fetch_notices(None, kind).await?),
        Command::Characters(name) => print_json(&client.fetch_characters(&name).await?),
        Command::Profiles(names) => {
            // Fetched concurrently; the client's gate paces them against the quota
            let results = join_all(names.iter().map(|name| client.fetch_profile(name))).await;

            let mut profiles = Vec::with_capacity(results.len());
            for (name, result) in names.iter().zip(results) {
                match result {
                    Ok(Some(profile)) => profiles.push(profile),
                    Ok(None) => tracing::warn!(character = %name, "Character not found"),
                    Err(err) => return Err(err).context(format!("Failed to fetch {}", name)),
                }
            }
            print_json(&profiles)
        }
        Command::Guilds(server) => print_json(&client.fetch_guilds(&server).await?),
        Command::MarketItem(id) => print_json(&client.fetch_market_item(id).await?),
        Command::AuctionOptions => print_json(&client.fetch_auction_options().await?),
        Command::MarketOptions => print_json(&client.fetch_market_options().await?),
        Command::Calendar => print_json(&client.fetch_calendar().await?),
        Command::Help => Ok(()),
    }?;

    let quota = client.rate_limit();
    tracing::info!(
        limit = quota.limit,
        remaining = quota.remaining,
        reset_at = ?quota.reset_at,
        "Rate limit status"
    );

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Parse command-line arguments
fn parse_args(args: &[String]) -> anyhow::Result<Command> {
    let Some(command) = args.get(1) else {
        bail!("Missing command");
    };
    let rest = &args[2..];

    let single = |what: &str| -> anyhow::Result<String> {
        match rest {
            [value] => Ok(value.clone()),
            _ => bail!("{} expects exactly one {}", command, what),
        }
    };

    let parsed = match command.as_str() {
        "events" => Command::Events,
        "notices" => match rest {
            [] => Command::Notices(None),
            [kind] => Command::Notices(Some(parse_notice_type(kind)?)),
            _ => bail!("notices expects at most one type"),
        },
        "characters" => Command::Characters(single("character name")?),
        "profile" => {
            if rest.is_empty() {
                bail!("profile expects at least one character name");
            }
            Command::Profiles(rest.to_vec())
        }
        "guilds" => Command::Guilds(single("server name")?),
        "market-item" => {
            let id = single("item id")?;
            Command::MarketItem(
                id.parse()
                    .with_context(|| format!("Invalid item id: {}", id))?,
            )
        }
        "auction-options" => Command::AuctionOptions,
        "market-options" => Command::MarketOptions,
        "calendar" => Command::Calendar,
        "--help" | "-h" | "help" => Command::Help,
        other => bail!("Unknown command: {}", other),
    };

    Ok(parsed)
}

fn parse_notice_type(kind: &str) -> anyhow::Result<NoticeType> {
    Ok(match kind {
        "notice" | "공지" => NoticeType::Notice,
        "maintenance" | "점검" => NoticeType::Maintenance,
        "shop" | "상점" => NoticeType::Shop,
        "event" | "이벤트" => NoticeType::Event,
        other => bail!("Unknown notice type: {}", other),
    })
}

/// Print usage information
fn print_usage() {
    println!("Lost Ark Provider - rate-limited client for the Lost Ark developer API");
    println!();
    println!("USAGE:");
    println!("    lostark-provider <COMMAND> [ARGS]");
    println!();
    println!("COMMANDS:");
    println!("    events                      Events in progress");
    println!("    notices [TYPE]              Notices (notice, maintenance, shop, event)");
    println!("    characters <NAME>           All characters of the account owning NAME");
    println!("    profile <NAME>...           Armory profiles, fetched concurrently");
    println!("    guilds <SERVER>             Guild rankings of a server");
    println!("    market-item <ID>            Trade history of a market item");
    println!("    auction-options             Auction house search options");
    println!("    market-options              Market search options");
    println!("    calendar                    Weekly contents calendar");
    println!("    --help, -h                  Print this help message");
    println!();
    println!("ENVIRONMENT VARIABLES:");
    println!("    LOSTARK_API_TOKEN         Developer portal JWT (required)");
    println!("    LOSTARK_BASE_URL          API base URL (default: https://developer-lostark.game.onstove.com)");
    println!("    LOSTARK_TIMEOUT_SECS      Request timeout in seconds (default: 10)");
    println!("    LOSTARK_RESET_GRACE_MS    Delay past the quota reset before queued requests resume (default: 1000)");
    println!("    RUST_LOG                  Logging level (default: info)");
    println!();
    println!("EXAMPLES:");
    println!("    lostark-provider profile 모코코 바드왕");
    println!("    lostark-provider notices maintenance");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("lostark-provider")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(parse_args(&args(&["events"])).unwrap(), Command::Events);
        assert_eq!(
            parse_args(&args(&["notices", "점검"])).unwrap(),
            Command::Notices(Some(NoticeType::Maintenance))
        );
        assert_eq!(
            parse_args(&args(&["profile", "a", "b"])).unwrap(),
            Command::Profiles(vec!["a".to_string(), "b".to_string()])
        );
        assert_eq!(
            parse_args(&args(&["market-item", "66110221"])).unwrap(),
            Command::MarketItem(66110221)
        );
        assert_eq!(parse_args(&args(&["-h"])).unwrap(), Command::Help);
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_args(&args(&[])).is_err());
        assert!(parse_args(&args(&["profile"])).is_err());
        assert!(parse_args(&args(&["guilds"])).is_err());
        assert!(parse_args(&args(&["market-item", "abc"])).is_err());
        assert!(parse_args(&args(&["teleport"])).is_err());
    }
}
