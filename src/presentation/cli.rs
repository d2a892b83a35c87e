use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "haru", about = "Emotion-diary companion client", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create an account
    Signup {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        confirm_password: String,
    },
    /// Log in and print the issued access token
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        /// Ask the backend for a long-lived session
        #[arg(long)]
        remember_me: bool,
    },
    /// Log out the session held in HARU_ACCESS_TOKEN
    Logout,
    /// Send a message to the bot, opening a chatroom first if none given
    Chat {
        #[arg(long)]
        user: String,
        #[arg(long)]
        room: Option<String>,
        message: String,
    },
    /// Show a chatroom's message history
    History {
        #[arg(long)]
        room: String,
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Close a chatroom and run the diary workflow (summarize, then save)
    End {
        #[arg(long)]
        user: String,
        #[arg(long)]
        room: String,
        /// Emotion tag for the saved entry: happy, sadness, angry, panic or default
        #[arg(long)]
        emotion: String,
    },
    /// Render the emotion calendar across the user's chatrooms
    Calendar {
        #[arg(long)]
        user: String,
    },
    /// List diary entries for a Seoul calendar date (YYYY-MM-DD)
    Diary { date: String },
}
