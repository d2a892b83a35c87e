use std::sync::Arc;

use anyhow::Context;
use chrono::NaiveDate;
use clap::Parser;

use haru::application::ports::AuthTokens;
use haru::application::services::{
    CalendarService, ChatService, ConversationService, DiaryService, SessionService,
};
use haru::domain::{ChatroomId, Emotion, UserId};
use haru::infrastructure::http::{
    ApiClient, HttpAuthGateway, HttpChatGateway, HttpDiaryStore, HttpEndStatusProvider,
    HttpSummarizer,
};
use haru::infrastructure::observability::{init_tracing, TracingConfig};
use haru::presentation::{Cli, Command, Environment, Settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let settings = Settings::from_env();

    init_tracing(TracingConfig {
        environment: Environment::from_env().to_string(),
        level: settings.logging.level.clone(),
        json_format: settings.logging.enable_json,
    });

    let api = ApiClient::new(&settings.api).context("Failed to build API client")?;

    let auth_gateway = Arc::new(HttpAuthGateway::new(api.clone()));
    let chat_gateway = Arc::new(HttpChatGateway::new(api.clone()));
    let end_statuses = Arc::new(HttpEndStatusProvider::new(api.clone()));
    let summarizer = Arc::new(HttpSummarizer::new(api.clone()));
    let diary_store = Arc::new(HttpDiaryStore::new(api));

    let session_service = SessionService::new(auth_gateway);
    let chat_service = ChatService::new(chat_gateway);
    let calendar_service = CalendarService::new(end_statuses);
    let conversation_service = ConversationService::new(summarizer, Arc::clone(&diary_store));
    let diary_service = DiaryService::new(diary_store);

    match cli.command {
        Command::Signup {
            email,
            password,
            confirm_password,
        } => {
            session_service
                .signup(&email, &password, &confirm_password)
                .await?;
            println!("Account created for {}", email);
        }
        Command::Login {
            email,
            password,
            remember_me,
        } => {
            session_service.login(&email, &password, remember_me).await?;
            let token = session_service.access_token().await.unwrap_or_default();
            println!("Logged in. Export the token to authenticate later commands:");
            println!("  export HARU_ACCESS_TOKEN={}", token);
        }
        Command::Logout => {
            let tokens = AuthTokens {
                access_token: std::env::var("HARU_ACCESS_TOKEN")
                    .context("HARU_ACCESS_TOKEN is not set")?,
                refresh_token: std::env::var("HARU_REFRESH_TOKEN").unwrap_or_default(),
            };
            session_service.restore(tokens).await;
            session_service.logout().await?;
            println!("Logged out");
        }
        Command::Chat {
            user,
            room,
            message,
        } => {
            let user = UserId::new(user);
            let chatroom = match room {
                Some(id) => ChatroomId::new(id),
                None => chat_service.open_chatroom(&user).await?,
            };
            let exchange = chat_service.send_message(&chatroom, &message).await?;
            println!("[{}] you: {}", chatroom, exchange.user_message);
            println!("[{}] bot: {}", chatroom, exchange.bot_response);
        }
        Command::History { room, limit } => {
            let chatroom = ChatroomId::new(room);
            let limit = limit.unwrap_or(settings.chat.history_limit);
            let history = chat_service.history(&chatroom, limit).await?;
            for message in &history.messages {
                let stamp = message.created_at.format("%Y-%m-%d %H:%M");
                println!("{} you: {}", stamp, message.user_message);
                println!("{} bot: {}", stamp, message.bot_response);
            }
            if history.ended {
                println!("(conversation ended)");
            }
        }
        Command::End {
            user,
            room,
            emotion,
        } => {
            let user = UserId::new(user);
            let chatroom = ChatroomId::new(room);
            let emotion: Emotion = emotion.parse().map_err(|e: String| anyhow::anyhow!(e))?;

            chat_service.close(&chatroom).await?;
            match conversation_service
                .end_conversation(&chatroom, &user, emotion)
                .await
            {
                Ok(()) => println!("Conversation ended; diary entry saved."),
                Err(error) => {
                    if let Some(summary) = conversation_service.summary(&chatroom).await {
                        eprintln!("Diary entry was not saved; summary kept in memory:");
                        eprintln!("  {}", summary);
                    }
                    return Err(error.into());
                }
            }
        }
        Command::Calendar { user } => {
            let user = UserId::new(user);
            let rooms = chat_service.chatrooms(&user).await?;
            let chatrooms: Vec<ChatroomId> = rooms.into_iter().map(|room| room.id).collect();
            let report = calendar_service.emotion_calendar(&chatrooms).await;

            if report.calendar.is_empty() {
                println!("No ended conversations yet.");
            }
            for (date, glyphs) in report.calendar.days() {
                println!("{}  {}", date, glyphs.join(" "));
            }
            let failed = report.failed();
            if failed > 0 {
                eprintln!(
                    "{} of {} chatrooms could not be read and were left out.",
                    failed,
                    chatrooms.len()
                );
            }
        }
        Command::Diary { date } => {
            let date = NaiveDate::parse_from_str(&date, "%Y-%m-%d")
                .context("Expected date as YYYY-MM-DD")?;
            let entries = diary_service.refresh(date).await?;
            if entries.is_empty() {
                println!("No diary entries on {}.", date);
            }
            for entry in entries {
                println!(
                    "{} {}  {}",
                    entry.emotion.glyph(),
                    entry.date.format("%Y-%m-%d %H:%M"),
                    entry.title
                );
                println!("   {}", entry.content);
            }
        }
    }

    Ok(())
}
