use std::fmt::Display;

use colored::Colorize;

use crate::state::{MoveOutcome, Station};

////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BikeMoved {
    pub time: u64,
    pub from: Station,
    pub to: Station,
}

impl Display for BikeMoved {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            format!(
                "{:>6} {:>12} >>>> {:<12}",
                self.time,
                self.from.to_string(),
                self.to.to_string()
            )
            .green()
        )
    }
}

////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationEmpty {
    pub time: u64,
    pub station: Station,
}

impl Display for StationEmpty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            format!(
                "{:>6} {:>12} xxxx {:<12} <--- empty",
                self.time,
                self.station.to_string(),
                self.station.other().to_string()
            )
            .red()
        )
    }
}

////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogEntry {
    BikeMoved(BikeMoved),
    StationEmpty(StationEmpty),
}

impl LogEntry {
    pub fn from_outcome(time: u64, outcome: MoveOutcome) -> Self {
        match outcome {
            MoveOutcome::Moved { from, to } => LogEntry::BikeMoved(BikeMoved { time, from, to }),
            MoveOutcome::StockOut { station } => {
                LogEntry::StationEmpty(StationEmpty { time, station })
            }
        }
    }

    pub fn time(&self) -> u64 {
        match self {
            LogEntry::BikeMoved(e) => e.time,
            LogEntry::StationEmpty(e) => e.time,
        }
    }
}

impl Display for LogEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogEntry::BikeMoved(e) => write!(f, "{}", e),
            LogEntry::StationEmpty(e) => write!(f, "{}", e),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, Default)]
pub struct Log {
    data: Vec<LogEntry>,
}

impl Log {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_entry(&mut self, log_entry: LogEntry) {
        self.data.push(log_entry);
    }

    pub fn iter(&self) -> impl Iterator<Item = &LogEntry> {
        self.data.iter()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Number of recorded stock-outs at `station`.
    pub fn stock_outs(&self, station: Station) -> usize {
        self.iter()
            .filter(|e| matches!(e, LogEntry::StationEmpty(s) if s.station == station))
            .count()
    }
}

impl Display for Log {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for e in self.data.iter() {
            writeln!(f, "{}", e)?;
        }
        write!(f, "=======================")
    }
}
