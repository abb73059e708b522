use bot_utils::{
    config::{BotConfig, OutputFormat},
    CommandResult, RollBot,
};
use std::io::{BufRead, Write};

fn main() {
    pretty_env_logger::init();
    log::info!("logger created");
    let config_path = std::env::args_os()
        .nth(1)
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|| std::path::PathBuf::from("table-bot.toml"));
    let bot = RollBot::new(BotConfig::load(&config_path));
    log::info!(
        "listening on stdin with command prefix {}",
        &bot.config().command_prefix
    );

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                log::error!("Error reading stdin: {}", e);
                break;
            }
        };
        if let Some(result) = bot.eval(&line) {
            if let Err(e) = write_result(&mut out, &result, bot.config().output) {
                log::error!("Error writing reply: {}", e);
                break;
            }
        }
    }
    log::info!("console bot stopped")
}

fn write_result<W: Write>(
    out: &mut W,
    result: &CommandResult,
    output: OutputFormat,
) -> std::io::Result<()> {
    match output {
        OutputFormat::Text => writeln!(out, "{}\n", result)?,
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, result)?;
            writeln!(out)?;
        }
    }
    out.flush()
}
