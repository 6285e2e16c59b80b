//! indian-numeral - 인도식 숫자 ↔ 영어 단어 변환기

use indian_numeral::config::{load_config, save_config, AppConfig};
use indian_numeral::{convert, convert_auto, Direction};
use std::io::{self, BufRead, Write};

/// 한 줄 입력이 뜻하는 명령
#[derive(Debug, PartialEq)]
enum Command<'a> {
    /// 변환 방향 전환
    Switch,
    /// 자동 감지 켜기/끄기
    ToggleAuto,
    /// 종료
    Quit,
    /// 빈 줄
    Skip,
    /// 변환할 텍스트
    Convert(&'a str),
}

fn parse_command(line: &str) -> Command<'_> {
    match line.trim() {
        "" => Command::Skip,
        ":switch" => Command::Switch,
        ":auto" => Command::ToggleAuto,
        ":quit" | ":q" => Command::Quit,
        _ => Command::Convert(line),
    }
}

/// 현재 설정으로 한 건 변환, 에러도 표시 문자열로
fn render(config: &AppConfig, input: &str) -> String {
    let result = if config.auto_detect {
        convert_auto(input, config.direction)
    } else {
        match config.direction {
            Direction::NumberToWords => convert(input.trim(), config.direction),
            Direction::WordsToNumber => convert(input, config.direction),
        }
    };
    result.unwrap_or_else(|e| e.to_string())
}

fn main() {
    // 로깅 초기화 (warn 이상만 출력)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut config = load_config();

    // 인자가 있으면 한 번만 변환
    let args: Vec<String> = std::env::args().skip(1).collect();
    if !args.is_empty() {
        println!("{}", render(&config, &args.join(" ")));
        return;
    }

    eprintln!(
        "[{}] 입력 후 Enter (:switch 방향 전환, :auto 자동 감지, :quit 종료)",
        config.direction.label()
    );

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                log::error!("입력 읽기 실패: {}", e);
                break;
            }
        };

        match parse_command(&line) {
            Command::Skip => continue,
            Command::Quit => break,
            Command::Switch => {
                config.direction = config.direction.toggled();
                eprintln!("[{}]", config.direction.label());
                if config.remember_direction {
                    if let Err(e) = save_config(&config) {
                        log::error!("설정 저장 실패: {}", e);
                    }
                }
            }
            Command::ToggleAuto => {
                config.auto_detect = !config.auto_detect;
                eprintln!("자동 감지: {}", if config.auto_detect { "on" } else { "off" });
            }
            Command::Convert(input) => {
                if writeln!(stdout, "{}", render(&config, input)).is_err() {
                    break;
                }
            }
        }
    }
}
