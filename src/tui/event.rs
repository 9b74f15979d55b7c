//! Terminal event polling

use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};

use crate::app::message::Message;
use crate::common::prelude::*;

/// Poll for terminal events with a timeout.
///
/// A timeout yields [`Message::Tick`] so the float animation advances even
/// when no input arrives.
pub fn poll(timeout: Duration) -> Result<Option<Message>> {
    if event::poll(timeout)? {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => Ok(Some(Message::Key(key))),
            _ => Ok(None),
        }
    } else {
        Ok(Some(Message::Tick))
    }
}
