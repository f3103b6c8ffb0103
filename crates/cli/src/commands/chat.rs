//! `compass chat` — Talk to the career counselor.

use compass_core::{ConversationContext, UserContext};
use std::io::{BufRead, Write};

pub async fn run(
    message: Option<String>,
    field: Option<String>,
    skills: Vec<String>,
) -> anyhow::Result<()> {
    let advisor = super::build_advisor()?;
    let user = UserContext {
        name: None,
        field_of_interest: field,
        skills,
        interests: Vec::new(),
    };
    let mut context = ConversationContext::new();

    if let Some(message) = message {
        let reply = advisor.chat(&message, &user, &mut context).await;
        println!("{reply}");
        return Ok(());
    }

    // Interactive mode: the context lives for the session and is trimmed
    // automatically at 10 exchanges.
    println!("💬 Compass career chat — type 'exit' to quit\n");
    let stdin = std::io::stdin();
    loop {
        print!("you> ");
        std::io::stdout().flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "exit" || line == "quit" {
            break;
        }
        let reply = advisor.chat(line, &user, &mut context).await;
        println!("\ncompass> {reply}\n");
    }

    Ok(())
}
