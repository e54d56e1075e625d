#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use std::{fs, sync::Arc, thread};

use joblogger::{
    DestinationConfig, Destinations, FileConfig, JobLogger, LOG_FILE_NAME, RecordingConsole,
    Severity,
};

const LINES_PER_WRITER: usize = 200;

fn run_writers(loggers: Vec<Arc<JobLogger>>, config: &DestinationConfig) {
    let handles: Vec<_> = loggers
        .into_iter()
        .enumerate()
        .map(|(w, logger)| {
            let config = config.clone();
            thread::spawn(move || {
                // Long enough that a torn write would be visible.
                let payload = format!("writer-{w}-{}", "x".repeat(512));
                for i in 0..LINES_PER_WRITER {
                    let msg = format!("{payload}-{i}");
                    logger
                        .log(
                            Some(msg.as_str()),
                            Destinations::FILE,
                            Some(Severity::Info),
                            Some(&config),
                        )
                        .expect("concurrent append");
                }
            })
        })
        .collect();

    for h in handles {
        h.join().expect("writer thread panicked");
    }
}

fn assert_whole_lines(content: &str, writers: usize) {
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), writers * LINES_PER_WRITER);

    let body = "x".repeat(512);
    for line in lines {
        assert!(line.starts_with("[INFO] message "), "torn line: {line:.80}");
        let tail = line.rsplit_once(" writer-").map(|(_, t)| t).expect("writer tag");
        let mut parts = tail.splitn(3, '-');
        let _writer = parts.next().expect("writer id");
        assert_eq!(parts.next(), Some(body.as_str()), "torn line: {line:.80}");
        parts
            .next()
            .expect("sequence")
            .parse::<usize>()
            .expect("numeric sequence");
    }
}

#[test]
fn shared_logger_never_interleaves_lines() {
    let dir = common::unique_temp_dir("shared");
    let config = DestinationConfig::new().with_file(FileConfig::new(&dir));
    let logger = Arc::new(JobLogger::new(Arc::new(RecordingConsole::new("t"))));

    run_writers(vec![logger.clone(), logger.clone(), logger], &config);

    let content = fs::read_to_string(dir.join(LOG_FILE_NAME)).unwrap();
    assert_whole_lines(&content, 3);
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn separate_loggers_on_one_path_keep_lines_whole() {
    let dir = common::unique_temp_dir("separate");
    let config = DestinationConfig::new().with_file(FileConfig::new(&dir));
    let loggers = (0..2)
        .map(|_| Arc::new(JobLogger::new(Arc::new(RecordingConsole::new("t")))))
        .collect();

    run_writers(loggers, &config);

    let content = fs::read_to_string(dir.join(LOG_FILE_NAME)).unwrap();
    assert_whole_lines(&content, 2);
    let _ = fs::remove_dir_all(&dir);
}
