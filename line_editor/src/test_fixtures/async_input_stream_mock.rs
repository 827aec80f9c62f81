// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{CrosstermEventResult, PinnedInputStream};
use async_stream::stream;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

pub fn gen_input_stream<T>(generator_vec: Vec<T>) -> PinnedInputStream<T>
where
    T: Send + Sync + 'static,
{
    let it = stream! {
        for item in generator_vec {
            yield item;
        }
    };
    Box::pin(it)
}

/// A key press, in the shape that `crossterm`'s `EventStream` produces it.
#[must_use]
pub fn crossterm_key(code: KeyCode, modifiers: KeyModifiers) -> CrosstermEventResult {
    Ok(Event::Key(KeyEvent::new(code, modifiers)))
}

/// One unmodified key press per character of `text`.
#[must_use]
pub fn crossterm_typed(text: &str) -> Vec<CrosstermEventResult> {
    text.chars()
        .map(|ch| crossterm_key(KeyCode::Char(ch), KeyModifiers::NONE))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::StreamExt;

    #[tokio::test]
    async fn test_gen_input_stream() {
        let mut input_stream = gen_input_stream(vec![1, 2, 3]);
        for _ in 1..=3 {
            input_stream.next().await;
        }
        pretty_assertions::assert_eq!(input_stream.next().await, None);
    }

    #[test]
    fn test_crossterm_typed() {
        let events = crossterm_typed("hi");
        assert_eq!(events.len(), 2);
        assert!(matches!(
            events[1],
            Ok(Event::Key(KeyEvent { code: KeyCode::Char('i'), .. }))
        ));
    }
}
