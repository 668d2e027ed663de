use boundary_core::{Command, Session};

use crate::{sink::FileSink, surface::ChartSurface, ticker::TokioScheduler};

const MAX_LOGS: usize = 200;

pub type VizSession = Session<ChartSurface, TokioScheduler, FileSink>;

/// A single log entry shown in the event panel.
#[derive(Debug, Clone, PartialEq)]
pub struct LogLine {
    pub level: &'static str,
    pub message: String,
}

/// State shared by every screen: the session and the event log.
pub struct App {
    pub session: VizSession,
    pub logs: Vec<LogLine>,
    /// Path of the last weights file the user typed, reused as the default.
    pub weights_path: String,
}

impl App {
    pub fn new(session: VizSession) -> Self {
        let message = session.status().message;
        Self {
            session,
            logs: vec![LogLine {
                level: "INFO",
                message,
            }],
            weights_path: String::new(),
        }
    }

    /// Forwards `cmd` to the session and logs the resulting status message.
    ///
    /// Consecutive identical messages are logged once.
    pub fn dispatch(&mut self, cmd: Command) {
        match self.session.dispatch(cmd) {
            Ok(()) => {
                let message = self.session.status().message;
                let repeated = self.logs.last().is_some_and(|l| l.message == message);
                if !repeated {
                    self.push_log("INFO", message);
                }
            }
            Err(e) => self.push_log("ERROR", e.to_string()),
        }
    }

    pub fn push_log(&mut self, level: &'static str, message: String) {
        self.logs.push(LogLine { level, message });
        if self.logs.len() > MAX_LOGS {
            let drain = self.logs.len() - MAX_LOGS;
            self.logs.drain(0..drain);
        }
    }
}
