// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use clap::Parser;
use num_bigint::BigUint;
use sosu_app::{
    config::{Cli, SearchConfig},
    error::AppError,
    logging,
    session::{CompletionStatus, Session},
    worker::{self, WorkerError},
};
use sosu_core::num::constants::SAFE_INTEGER_THRESHOLD;
use sosu_format::grouping::group_digits;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use std::time::Duration;

/// How often the busy indicator advances.
const SPINNER_TICK: Duration = Duration::from_millis(250);

const BUSY_LABEL: &str = "計算中...";

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.log_level.as_deref()) {
        eprintln!("sosu: {e}");
        return ExitCode::FAILURE;
    }

    let config = SearchConfig::from(&cli);
    tracing::debug!(?config, "configuration loaded");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut session = Session::new();

    let result = match cli.number {
        Some(number) => {
            session.set_input(number);
            search(&mut session, &config, &mut out)
        }
        None => interactive(&mut session, &config, &mut out),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match e.user_message() {
                Some(message) => eprintln!("{message}"),
                None => eprintln!("sosu: {e}"),
            }
            ExitCode::FAILURE
        }
    }
}

fn interactive<W>(session: &mut Session, config: &SearchConfig, out: &mut W) -> Result<(), AppError>
where
    W: Write,
{
    writeln!(out, "指定した自然数より大きい素数を1つ表示します。")?;
    writeln!(out, "自然数を入力して Enter を押してください。exit で終了します。")?;
    writeln!(
        out,
        "なお、{}以上の数を入力した場合、計算時間が一気に長くなります。",
        group_digits(&(BigUint::from(SAFE_INTEGER_THRESHOLD) + 1u32))
    )?;

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        write!(out, "> ")?;
        out.flush()?;

        let Some(line) = lines.next().transpose()? else {
            writeln!(out)?;
            return Ok(());
        };
        if matches!(line.trim(), "exit" | "quit") {
            return Ok(());
        }

        session.set_input(line);
        match search(session, config, out) {
            Ok(()) => {}
            Err(e) => match e.user_message() {
                Some(message) => writeln!(out, "{message}")?,
                None => return Err(e),
            },
        }
    }
}

fn search<W>(session: &mut Session, config: &SearchConfig, out: &mut W) -> Result<(), AppError>
where
    W: Write,
{
    let ticket = session.begin_search()?;
    writeln!(
        out,
        "入力: [{:<width$}]",
        session.input().trim(),
        width = session.input_field_width()
    )?;

    let handle = match worker::spawn_search(&ticket, config) {
        Ok(handle) => handle,
        Err(e) => {
            session.fail(ticket.generation());
            return Err(e.into());
        }
    };

    write!(out, "{BUSY_LABEL}")?;
    out.flush()?;
    let completion = loop {
        match handle.wait_timeout(SPINNER_TICK) {
            Ok(Some(completion)) => break completion,
            Ok(None) => {
                write!(out, ".")?;
                out.flush()?;
            }
            Err(e @ WorkerError::Disconnected(generation)) => {
                session.fail(generation);
                writeln!(out)?;
                return Err(e.into());
            }
            Err(e) => return Err(e.into()),
        }
    };
    writeln!(out)?;

    let statistics = completion.outcome.statistics().clone();
    match session.complete(completion.generation, completion.outcome) {
        CompletionStatus::Accepted => {
            if let Some(report) = session.current_report() {
                writeln!(out, "{report}")?;
            }
        }
        CompletionStatus::Aborted(reason) => writeln!(out, "計算を中断しました: {reason}")?,
        CompletionStatus::Stale => {}
    }

    if config.show_statistics {
        write!(out, "{statistics}")?;
    }
    Ok(())
}
