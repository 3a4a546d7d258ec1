mod embeds;

use std::sync::Arc;

use serenity::{
    async_trait,
    builder::CreateMessage,
    model::{channel::Message, gateway::Ready},
    prelude::*,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use naver_client::{NaverClient, NaverPage};
use screener_core::{ScoreCard, ScreenerError, SymbolDirectory};

const COMMAND_PREFIX: &str = "!조회";

struct Handler {
    naver: Arc<NaverClient>,
}

impl Handler {
    /// Resolve the name, fetch the page, run the engine. Only retrieval
    /// faults and unknown symbols surface as errors; a drifted page
    /// comes back as a scorecard with unavailable entries.
    async fn lookup(&self, name: &str) -> Result<ScoreCard, ScreenerError> {
        let listed = self
            .naver
            .resolve(name)
            .await?
            .ok_or_else(|| ScreenerError::SymbolNotFound(name.to_string()))?;

        tracing::info!(name = %listed.name, code = %listed.code, "running scorecard lookup");
        let html = self.naver.fetch_item_page(&listed.code).await?;

        // The parsed page must not live across an await.
        let card = {
            let page = NaverPage::parse(&html);
            screening_engine::build_score_card(&listed.name, &listed.code, &page)
        };
        Ok(card)
    }
}

#[async_trait]
impl EventHandler for Handler {
    async fn message(&self, ctx: Context, msg: Message) {
        if msg.author.bot {
            return;
        }
        let Some(rest) = msg.content.strip_prefix(COMMAND_PREFIX) else {
            return;
        };
        let name = rest.trim();
        if name.is_empty() {
            let _ = msg
                .channel_id
                .say(&ctx.http, "사용법: `!조회 <종목명>` (예: `!조회 삼성전자`)")
                .await;
            return;
        }

        let _ = msg
            .channel_id
            .say(
                &ctx.http,
                format!("\u{1F50D} '{}' 종목을 정밀 분석 중입니다...", name),
            )
            .await;
        let _ = msg.channel_id.broadcast_typing(&ctx.http).await;

        match self.lookup(name).await {
            Ok(card) => {
                let builder = CreateMessage::new().embed(embeds::build_score_card_embed(&card));
                if let Err(e) = msg.channel_id.send_message(&ctx.http, builder).await {
                    tracing::error!("failed to send scorecard embed: {}", e);
                }
            }
            Err(ScreenerError::SymbolNotFound(n)) => {
                let _ = msg
                    .channel_id
                    .say(&ctx.http, format!("\u{274C} '{}' 종목을 찾을 수 없습니다.", n))
                    .await;
            }
            Err(e) => {
                tracing::error!(name, "lookup failed: {}", e);
                let _ = msg
                    .channel_id
                    .say(&ctx.http, format!("조회 중 오류가 발생했습니다: {}", e))
                    .await;
            }
        }
    }

    async fn ready(&self, _ctx: Context, ready: Ready) {
        tracing::info!("{} is connected and ready!", ready.user.name);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let json_logging = std::env::var("RUST_LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "discord_bot=info".into());

    if json_logging {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    let discord_token = std::env::var("DISCORD_BOT_TOKEN").expect("DISCORD_BOT_TOKEN must be set");

    let intents = GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::DIRECT_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT;

    let handler = Handler {
        naver: Arc::new(NaverClient::new()),
    };

    let mut client = Client::builder(&discord_token, intents)
        .event_handler(handler)
        .await?;

    let shard_manager = client.shard_manager.clone();
    tokio::spawn(async move {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install ctrl-c handler");
        tracing::info!("shutdown signal received");
        shard_manager.shutdown_all().await;
    });

    client.start().await?;
    Ok(())
}
