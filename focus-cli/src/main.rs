use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, reload, util::SubscriberInitExt, EnvFilter};

use focus_cli::{CliSettings, Command, Reply, Session};

fn main() -> Result<()> {
    // 先初始化日志，加载设置时的告警才能输出；RUST_LOG 优先
    let env_filter = EnvFilter::try_from_default_env().ok();
    let from_env = env_filter.is_some();
    let (filter, filter_handle) =
        reload::Layer::new(env_filter.unwrap_or_else(|| EnvFilter::new("info")));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let settings = CliSettings::load();

    // 未设置 RUST_LOG 时改用设置中的级别
    if !from_env {
        filter_handle
            .reload(EnvFilter::new(settings.log_level.as_filter()))
            .context("无法应用日志级别")?;
    }

    info!("Focus 启动");

    let mut session = Session::new(&settings);
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    writeln!(stdout, "{}", session.render())?;
    loop {
        write!(stdout, "{}> ", session.current())?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).context("读取输入失败")? == 0 {
            break;
        }

        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                writeln!(stdout, "{}", e)?;
                continue;
            }
        };

        match session.execute(command) {
            Reply::Quit => break,
            Reply::Text(text) => writeln!(stdout, "{}", text)?,
            Reply::Rejected(e) => writeln!(stdout, "Illegal: {}", e)?,
        }
    }

    info!("Focus 退出");
    Ok(())
}
