// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! bdfd CLI
//!
//! Reads and removes bots' commands and variables from the command line.
//! Records are printed as pretty JSON on stdout, logs go to stderr.

use std::env;
use std::process::ExitCode;

use anyhow::{bail, Context};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use bdfd_external::{Client, SessionToken};

const TOKEN_ENV: &str = "BDFD_TOKEN";

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("bdfd_external=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut args: Vec<String> = env::args().skip(1).collect();
    let token = take_token(&mut args).or_else(|| env::var(TOKEN_ENV).ok());

    match args.first().map(String::as_str) {
        None => {
            print_usage();
            ExitCode::from(1)
        }
        Some("--help" | "-h" | "help") => {
            print_usage();
            ExitCode::SUCCESS
        }
        Some("--version" | "-v" | "version") => {
            println!("bdfd {}", bdfd_external::VERSION);
            ExitCode::SUCCESS
        }
        Some(_) => match run(&args, token).await {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("Error: {:#}", e);
                ExitCode::from(1)
            }
        },
    }
}

fn print_usage() {
    println!(
        r#"bdfd - Bot Designer For Discord from the command line

USAGE:
    bdfd [--token <TOKEN>] <COMMAND> [ARGS]

    The token is the value of the default-sessionStore cookie of a logged-in
    browser. It can also be given in the {env} environment variable.

COMMANDS:
    user                              Show the account's username
    bots                              List the account's bots
    bot <bot>                         Show one bot
    commands <bot>                    List a bot's commands
    command <bot> <command>           Show one command
    variables <bot>                   List a bot's variables
    variable <bot> <variable>         Show one variable
    delete-command <bot> <command>    Delete a command, print what it was
    delete-variable <bot> <variable>  Delete a variable, print what it was
    help                              Show this help message
    version                           Show version information

EXAMPLES:
    bdfd --token "s%3A..." bots
    {env}="s%3A..." bdfd command 123456 987654
"#,
        env = TOKEN_ENV
    );
}

/// Remove `--token <value>` or `--token=<value>` from the arguments
fn take_token(args: &mut Vec<String>) -> Option<String> {
    if let Some(pos) = args.iter().position(|a| a.starts_with("--token=")) {
        let arg = args.remove(pos);
        return arg.strip_prefix("--token=").map(str::to_string);
    }

    let pos = args.iter().position(|a| a == "--token")?;
    args.remove(pos);
    if pos < args.len() {
        Some(args.remove(pos))
    } else {
        None
    }
}

async fn run(args: &[String], token: Option<String>) -> anyhow::Result<()> {
    let token = token
        .map(SessionToken::new)
        .with_context(|| format!("no session token, pass --token or set {}", TOKEN_ENV))?;
    let client = Client::new().context("failed to create client")?;

    let arg = |index: usize, name: &str| {
        args.get(index)
            .map(String::as_str)
            .with_context(|| format!("missing <{}> argument", name))
    };

    match args[0].as_str() {
        "user" => print_json(&client.user().get(&token).await?),
        "bots" => print_json(&client.bots().list(&token).await?),
        "bot" => {
            let bot_id = arg(1, "bot")?;
            let bot = client
                .bots()
                .get(&token, bot_id)
                .await?
                .with_context(|| format!("no bot with id {}", bot_id))?;
            print_json(&bot)
        }
        "commands" => print_json(&client.commands().list(&token, arg(1, "bot")?).await?),
        "command" => {
            let command = client
                .commands()
                .get(&token, arg(1, "bot")?, arg(2, "command")?)
                .await?;
            print_json(&command)
        }
        "variables" => print_json(&client.variables().list(&token, arg(1, "bot")?).await?),
        "variable" => {
            let variable = client
                .variables()
                .get(&token, arg(1, "bot")?, arg(2, "variable")?)
                .await?;
            print_json(&variable)
        }
        "delete-command" => {
            let deleted = client
                .commands()
                .delete(&token, arg(1, "bot")?, arg(2, "command")?)
                .await?;
            print_json(&deleted)
        }
        "delete-variable" => {
            let deleted = client
                .variables()
                .delete(&token, arg(1, "bot")?, arg(2, "variable")?)
                .await?;
            print_json(&deleted)
        }
        cmd => bail!("unknown command: {} (see `bdfd help`)", cmd),
    }
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
