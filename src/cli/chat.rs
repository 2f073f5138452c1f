use std::future::{Future, poll_fn};
use std::pin::pin;
use std::sync::Arc;
use std::task::Poll;

use anyhow::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use crate::backend::HttpBackend;
use crate::chat::{ChatSession, Message, SessionMode, render};
use crate::core::AppConfig;

/// Submit one line of input through the session's draft. `on_typing`
/// runs only if the session accepted the line and is waiting on the
/// backend.
pub async fn submit_line(
    session: &ChatSession,
    line: &str,
    on_typing: impl FnOnce(),
) -> Option<Message> {
    session.set_draft(line);

    let mut submit = pin!(session.submit_draft());
    let first = poll_fn(|cx| Poll::Ready(submit.as_mut().poll(cx))).await;
    match first {
        Poll::Ready(reply) => reply,
        Poll::Pending => {
            on_typing();
            submit.await
        }
    }
}

pub async fn run(config: &AppConfig, mode: SessionMode) -> Result<()> {
    let mut rl = DefaultEditor::new()?;

    let backend = Arc::new(HttpBackend::from_config(config));
    let session = ChatSession::builder(mode, backend)
        .user(&config.user)
        .build();

    tracing::debug!(
        session_id = session.session_id(),
        "Chat session started against {}",
        config.backend_url
    );

    println!("{}\n", render::conversation(&session.messages(), mode));

    loop {
        let readline = rl.readline(">>> ");
        match readline {
            Ok(line) => {
                if let Err(e) = rl.add_history_entry(line.as_str()) {
                    tracing::debug!("Failed to record history entry: {}", e);
                }

                let reply = submit_line(&session, &line, || {
                    println!("{}", render::TYPING_INDICATOR)
                })
                .await;
                if let Some(reply) = reply {
                    println!("\n{}\n", render::message(&reply, mode));
                }
            }
            Err(ReadlineError::Interrupted) => break,
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }

    Ok(())
}
