use crate::events::AppEvent;
use crate::input::{Accel, Direction};
use async_channel::Sender;
use std::str::FromStr;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::net::UnixListener;

const SOCKET_PATH: &str = "/tmp/nudge.sock";

/// Parses one line of the motion feed protocol. Feeders write either
/// `motion <x> <y> <z>` (acceleration including gravity) or a direction
/// name (`shake`, `up`, ...), case-insensitive. Anything else is ignored.
pub fn parse_line(line: &str) -> Option<AppEvent> {
    let mut parts = line.split_whitespace();
    match parts.next()? {
        "motion" => {
            let x = parts.next()?.parse().ok()?;
            let y = parts.next()?.parse().ok()?;
            let z = parts.next()?.parse().ok()?;
            Some(AppEvent::Motion(Accel::new(x, y, z)))
        }
        word => Direction::from_str(word).ok().map(AppEvent::Steer),
    }
}

/// Listens for motion feeders on a unix socket. Hosts without a feeder
/// simply never connect; the prompt stays pointer/touch-only.
pub async fn run_sensor(tx: Sender<AppEvent>) {
    // Cleanup old socket if it exists
    if std::fs::metadata(SOCKET_PATH).is_ok() {
        let _ = std::fs::remove_file(SOCKET_PATH);
    }

    let listener = match UnixListener::bind(SOCKET_PATH) {
        Ok(l) => l,
        Err(e) => {
            log::error!("Failed to bind unix socket: {}", e);
            return;
        }
    };

    loop {
        match listener.accept().await {
            Ok((mut stream, _)) => {
                let tx = tx.clone();
                tokio::spawn(async move {
                    let reader = BufReader::new(&mut stream);
                    let mut lines = reader.lines();

                    while let Ok(Some(line)) = lines.next_line().await {
                        if let Some(event) = parse_line(line.trim())
                            && tx.send(event).await.is_err()
                        {
                            return;
                        }
                    }
                });
            }
            Err(e) => {
                log::error!("Failed to accept connection: {}", e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_direction_names() {
        let cases = vec![
            ("shake", Direction::Shake),
            ("SHAKE", Direction::Shake),
            ("up", Direction::Up),
            ("Left", Direction::Left),
            ("d", Direction::Down),
        ];
        for (line, expected) in cases {
            match parse_line(line) {
                Some(AppEvent::Steer(direction)) => assert_eq!(direction, expected),
                other => panic!("unexpected parse of {:?}: {:?}", line, other),
            }
        }
    }

    #[test]
    fn test_parse_motion() {
        match parse_line("motion 0.5 -16.2 9.8") {
            Some(AppEvent::Motion(accel)) => {
                assert_eq!(accel, Accel::new(0.5, -16.2, 9.8));
            }
            other => panic!("unexpected parse: {:?}", other),
        }
    }

    #[test]
    fn test_garbage_lines_are_ignored() {
        for line in ["", "motion 1.0 2.0", "motion a b c", "tilt 1 2 3"] {
            assert!(parse_line(line).is_none(), "accepted {:?}", line);
        }
    }
}
