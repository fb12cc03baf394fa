use std::{
    fmt::Write as _,
    fs::{self, File, OpenOptions},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
    thread,
    time::Duration,
};

use chrono::{DateTime, Local};
use crossbeam_channel::{bounded, unbounded, Sender};
use once_cell::sync::Lazy;

static LOGGER: Lazy<Logger> = Lazy::new(|| Logger::new(LOG_NAME));

const LOG_NAME: &str = "stock_quote";
const LOG_DIR: &str = "log";
/// 緩衝超過此長度就寫入檔案
const LINE_CAPACITY: usize = 4096;
/// flush 等待寫入線程回應的上限
const FLUSH_TIMEOUT: Duration = Duration::from_secs(2);

pub struct Logger {
    /// 無法建立日誌檔時為 None，此時所有日誌都會被丟棄
    writer: Option<Sender<Command>>,
}

enum Command {
    Write(LogMessage),
    Flush(Sender<()>),
}

impl Logger {
    fn new(log_name: &str) -> Self {
        let file = match Self::get_log_path(log_name).and_then(|p| open_log_file(&p)) {
            Some(file) => file,
            None => {
                error_console(format!("Failed to open the log file of {}", log_name));
                return Logger { writer: None };
            }
        };
        let (tx, rx) = unbounded::<Command>();

        // 寫入檔案的操作使用另一個線程處理
        thread::spawn(move || {
            let mut writer = BufWriter::new(file);
            let mut line = String::with_capacity(LINE_CAPACITY);

            for received in &rx {
                match received {
                    Command::Write(msg) => {
                        if writeln!(
                            &mut line,
                            "{} {} {}",
                            msg.created_at.format("%F %X%.6f"),
                            msg.level,
                            msg.msg
                        )
                        .is_err()
                        {
                            continue;
                        }

                        if rx.is_empty() || line.len() >= LINE_CAPACITY {
                            write_out(&mut writer, &mut line);
                        }
                    }
                    Command::Flush(ack) => {
                        write_out(&mut writer, &mut line);
                        let _ = ack.send(());
                    }
                }
            }
        });

        Logger { writer: Some(tx) }
    }

    fn info(&self, log: String) {
        self.send(log::Level::Info, log);
    }

    fn error(&self, log: String) {
        self.send(log::Level::Error, log);
    }

    fn send(&self, level: log::Level, msg: String) {
        if let Some(writer) = &self.writer {
            if let Err(why) = writer.send(Command::Write(LogMessage::new(level, msg))) {
                error_console(why.to_string());
            }
        }
    }

    fn flush(&self) {
        let Some(writer) = &self.writer else {
            return;
        };
        let (ack_tx, ack_rx) = bounded::<()>(1);

        if writer.send(Command::Flush(ack_tx)).is_ok() {
            let _ = ack_rx.recv_timeout(FLUSH_TIMEOUT);
        }
    }

    pub(crate) fn get_log_path(name: &str) -> Option<PathBuf> {
        let path = Path::new(LOG_DIR);

        if !path.exists() {
            fs::create_dir_all(path).ok()?;
        }

        let mut log_path = PathBuf::from(path);
        log_path.push(format!("{}_{}.log", name, Local::now().format("%Y-%m-%d")));

        Some(log_path)
    }
}

fn open_log_file(path: &Path) -> Option<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .ok()
}

fn write_out(writer: &mut BufWriter<File>, line: &mut String) {
    if line.is_empty() {
        return;
    }

    if writer.write_all(line.as_bytes()).is_err() || writer.flush().is_err() {
        error_console(line.clone());
    }

    line.clear();
}

pub struct LogMessage {
    pub level: log::Level,
    pub msg: String,
    pub created_at: DateTime<Local>,
}

impl LogMessage {
    pub fn new(level: log::Level, msg: String) -> Self {
        LogMessage {
            level,
            msg,
            created_at: Local::now(),
        }
    }
}

pub fn info_file_async(log: String) {
    LOGGER.info(log);
}

pub fn error_file_async(log: String) {
    LOGGER.error(log);
}

/// 等待目前已送出的日誌全部寫入檔案，程式結束前呼叫
pub fn flush() {
    LOGGER.flush();
}

/// 標準輸出只保留查詢結果，主控台日誌一律寫到 stderr
pub fn error_console(log: String) {
    eprintln!(
        "{} Error {}",
        Local::now().format("%Y-%m-%d %H:%M:%S.%3f"),
        log
    );
}
