//! Chat conversation state
//!
//! Holds the message history and the bot's pending reply. Replies are
//! delivered after a simulated typing delay; the UI loop calls
//! [`Conversation::poll`] to release them when due.

use chrono::{DateTime, Utc};
use rand::Rng;
use std::time::{Duration, Instant};

use super::Chatbot;

const MIN_TYPING_DELAY_MS: u64 = 1000;
const MAX_TYPING_DELAY_MS: u64 = 2000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: u64,
    pub text: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug)]
struct PendingReply {
    text: &'static str,
    due: Instant,
}

/// Message history plus the bot that answers it
#[derive(Debug)]
pub struct Conversation<R = rand::rngs::SmallRng> {
    bot: Chatbot<R>,
    messages: Vec<Message>,
    pending: Option<PendingReply>,
    next_id: u64,
}

impl Conversation {
    pub fn new() -> Self {
        Self::with_bot(Chatbot::new())
    }
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Conversation<R> {
    /// Start a conversation with the bot's welcome message
    pub fn with_bot(bot: Chatbot<R>) -> Self {
        let mut conversation = Self {
            bot,
            messages: Vec::new(),
            pending: None,
            next_id: 1,
        };
        let welcome = conversation.bot.welcome().to_string();
        conversation.push(welcome, Sender::Bot);
        conversation
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Whether a bot reply is being "typed"
    pub fn is_typing(&self) -> bool {
        self.pending.is_some()
    }

    /// Append a user message and schedule the bot's reply.
    ///
    /// Blank input is ignored and returns `false`.
    pub fn send(&mut self, input: &str, now: Instant) -> bool {
        let text = input.trim();
        if text.is_empty() {
            return false;
        }

        let reply = self.bot.respond(text);
        let delay_ms = self
            .bot
            .rng_mut()
            .gen_range(MIN_TYPING_DELAY_MS..=MAX_TYPING_DELAY_MS);
        self.push(text.to_string(), Sender::User);

        // A reply still in flight is delivered before the new one is queued.
        if let Some(previous) = self.pending.take() {
            self.push(previous.text.to_string(), Sender::Bot);
        }
        self.pending = Some(PendingReply {
            text: reply,
            due: now + Duration::from_millis(delay_ms),
        });
        true
    }

    /// Deliver the pending reply if its delay has elapsed
    pub fn poll(&mut self, now: Instant) -> bool {
        match &self.pending {
            Some(pending) if now >= pending.due => {
                if let Some(pending) = self.pending.take() {
                    self.push(pending.text.to_string(), Sender::Bot);
                }
                true
            }
            _ => false,
        }
    }

    fn push(&mut self, text: String, sender: Sender) {
        self.messages.push(Message {
            id: self.next_id,
            text,
            sender,
            timestamp: Utc::now(),
        });
        self.next_id += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::Intent;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn conversation() -> Conversation<SmallRng> {
        Conversation::with_bot(Chatbot::with_rng(SmallRng::seed_from_u64(1)))
    }

    #[test]
    fn test_starts_with_welcome() {
        let conv = conversation();
        assert_eq!(conv.messages().len(), 1);
        assert_eq!(conv.messages()[0].sender, Sender::Bot);
        assert_eq!(conv.messages()[0].text, Intent::Greeting.responses()[0]);
        assert!(!conv.is_typing());
    }

    #[test]
    fn test_blank_input_ignored() {
        let mut conv = conversation();
        assert!(!conv.send("   ", Instant::now()));
        assert_eq!(conv.messages().len(), 1);
    }

    #[test]
    fn test_reply_is_delayed() {
        let mut conv = conversation();
        let now = Instant::now();
        assert!(conv.send("  tengo ansiedad  ", now));
        assert_eq!(conv.messages().len(), 2);
        assert_eq!(conv.messages()[1].text, "tengo ansiedad");
        assert!(conv.is_typing());

        assert!(!conv.poll(now + Duration::from_millis(999)));
        assert!(conv.poll(now + Duration::from_millis(2000)));
        assert!(!conv.is_typing());

        let reply = conv.messages().last().unwrap();
        assert_eq!(reply.sender, Sender::Bot);
        assert!(Intent::Anxiety.responses().contains(&reply.text.as_str()));
    }

    #[test]
    fn test_message_ids_increase() {
        let mut conv = conversation();
        let now = Instant::now();
        conv.send("hola", now);
        conv.send("gracias", now);
        conv.poll(now + Duration::from_secs(3));

        let ids: Vec<u64> = conv.messages().iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }
}
