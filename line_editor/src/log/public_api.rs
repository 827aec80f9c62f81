// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{TracingConfig, ok};
use tracing::dispatcher;
use tracing_core::LevelFilter;

/// Install a global default subscriber. It can't be changed or removed afterwards, so
/// this is meant for apps. Passing anything whose level is [`LevelFilter::OFF`] leaves
/// logging disabled.
///
/// ```no_run
/// use r3bl_line_editor::{TracingConfig, try_initialize_logging_global};
///
/// try_initialize_logging_global(TracingConfig::new_file(Some("/tmp/readline.log".into())))
///     .unwrap();
/// ```
pub fn try_initialize_logging_global(
    options: impl Into<TracingConfig>,
) -> miette::Result<()> {
    let it: TracingConfig = options.into();

    if it.get_level_filter() == LevelFilter::OFF {
        return ok!();
    }

    it.install_global()
}

/// Install a subscriber for the current thread only, until the returned guard is
/// dropped. This is meant for tests. Returns [None] when the level is
/// [`LevelFilter::OFF`].
pub fn try_initialize_logging_thread_local(
    options: impl Into<TracingConfig>,
) -> miette::Result<Option<dispatcher::DefaultGuard>> {
    let it: TracingConfig = options.into();

    if it.get_level_filter() == LevelFilter::OFF {
        return Ok(None);
    }

    it.install_thread_local().map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{KeyBindingTable, KeyHandler, SpecialKey, SurfaceMock, WriterConfig,
                key_event};

    #[test]
    fn test_off_is_a_no_op() {
        assert!(try_initialize_logging_global(LevelFilter::OFF).is_ok());
        assert!(
            try_initialize_logging_thread_local(LevelFilter::OFF)
                .unwrap()
                .is_none()
        );
    }

    #[test]
    fn test_key_handling_is_logged_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = dir.path().join("key_handler.log");
        let config = TracingConfig {
            writer_config: WriterConfig::File(file_path.to_str().unwrap().to_string()),
            level_filter: LevelFilter::TRACE,
        };
        let guard = try_initialize_logging_thread_local(config).unwrap();

        let history = [String::from("ls")];
        let mut surface = SurfaceMock::new("> ", (20, 3));
        let bindings = KeyBindingTable::new();
        let mut handler = KeyHandler::new(&mut surface, &history, None, &bindings);
        handler.handle(&key_event!(@char 'x')).unwrap();
        handler.handle(&key_event!(@special SpecialKey::UpArrow)).unwrap();

        drop(guard);

        let output = std::fs::read_to_string(&file_path).unwrap();
        assert!(output.contains("handle key"));
        assert!(output.contains("PreviousHistory"));
        assert!(output.contains("previous history"));
    }
}
