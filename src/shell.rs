use std::collections::VecDeque;
use std::io::Write;

use async_trait::async_trait;
use bytes::buf::Writer;
use bytes::BufMut;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::art::{next_dragon, BANNER, FAREWELL, PROMPT, WELCOME};
use crate::config::Config;
use crate::parse::{parse_command, usage, Command, VERBS};
use crate::store::{Lookup, Store};
use crate::utils::{paint, put_line, Color};

/// Where the shell gets its input from.
#[async_trait]
pub trait LineSource: Send {
    /// Next line without its terminator, or `None` at end of input.
    async fn next_line(&mut self) -> anyhow::Result<Option<String>>;
}

/// Lines from a buffered reader. Bytes that are not UTF-8 are replaced
/// rather than failing the read, so a garbled line becomes a rejected
/// command instead of ending the session.
pub struct InputLines<R> {
    reader: R,
    buf: Vec<u8>,
}

impl<R> InputLines<R> {
    pub fn new(reader: R) -> Self {
        InputLines {
            reader,
            buf: Vec::with_capacity(256),
        }
    }
}

#[async_trait]
impl<R> LineSource for InputLines<R>
where
    R: AsyncBufRead + Unpin + Send,
{
    async fn next_line(&mut self) -> anyhow::Result<Option<String>> {
        self.buf.clear();
        if self.reader.read_until(b'\n', &mut self.buf).await? == 0 {
            return Ok(None);
        }
        if self.buf.ends_with(b"\n") {
            self.buf.pop();
            if self.buf.ends_with(b"\r") {
                self.buf.pop();
            }
        }
        Ok(Some(String::from_utf8_lossy(&self.buf).into_owned()))
    }
}

/// A fixed batch of input lines.
#[derive(Debug, Default)]
pub struct Script {
    lines: VecDeque<String>,
}

impl Script {
    pub fn new(text: &str) -> Self {
        Script {
            lines: text.lines().map(str::to_owned).collect(),
        }
    }
}

#[async_trait]
impl LineSource for Script {
    async fn next_line(&mut self) -> anyhow::Result<Option<String>> {
        Ok(self.lines.pop_front())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub struct Shell {
    store: Store,
    config: Config,
    last_line: Option<String>,
}

impl Shell {
    pub fn new(store: Store, config: Config) -> Self {
        Shell {
            store,
            config,
            last_line: None,
        }
    }

    pub fn execute(&self, command: &Command, buf: &mut Writer<Vec<u8>>) -> std::io::Result<Flow> {
        let colored = self.config.color;
        match command {
            Command::Set(key, value) => {
                self.store.write(key.as_str(), value.as_str());
                put_line(buf, "OK", Color::Green, colored)?;
            }
            Command::Get(key) => match self.store.read(key) {
                Lookup::Found(value) => put_line(buf, &value, Color::Cyan, colored)?,
                Lookup::Absent => put_line(buf, "(nil)", Color::Yellow, colored)?,
            },
            Command::Del(key) => {
                self.store.delete(key);
                put_line(buf, "OK", Color::Green, colored)?;
            }
            Command::Expire(key, seconds) => {
                if self.store.set_expiry(key, *seconds) {
                    put_line(buf, "OK", Color::Green, colored)?;
                } else {
                    put_line(buf, "(key not found)", Color::Yellow, colored)?;
                }
            }
            Command::Dragon => put_line(buf, next_dragon(), Color::Red, colored)?,
            Command::Help(None) => {
                writeln!(buf, "Documented commands (type help <topic>):")?;
                for (verb, text) in VERBS {
                    writeln!(buf, "  {:<8}{}", verb, text)?;
                }
            }
            Command::Help(Some(topic)) => match usage(topic) {
                Some(text) => writeln!(buf, "{}", text)?,
                None => writeln!(buf, "*** No help on {}", topic)?,
            },
            Command::Exit => {
                put_line(buf, FAREWELL, Color::Yellow, colored)?;
                return Ok(Flow::Exit);
            }
        }
        Ok(Flow::Continue)
    }

    /// Handles one raw input line. A blank line re-runs the previous one.
    pub fn handle_line(&mut self, line: &str, buf: &mut Writer<Vec<u8>>) -> std::io::Result<Flow> {
        let line = match line.trim() {
            "" => match &self.last_line {
                Some(last) => last.clone(),
                None => return Ok(Flow::Continue),
            },
            line => {
                self.last_line = Some(line.to_owned());
                line.to_owned()
            }
        };

        match parse_command(&line) {
            Ok(command) => {
                tracing::debug!(command = %command.to_string(), "dispatch");
                self.execute(&command, buf)
            }
            Err(e) => {
                tracing::info!(error = ?e, "rejected input");
                put_line(buf, &e.to_string(), Color::Red, self.config.color)?;
                Ok(Flow::Continue)
            }
        }
    }

    /// Runs the session until `EXIT` or end of input.
    pub async fn run<S, W>(&mut self, source: &mut S, out: &mut W) -> anyhow::Result<()>
    where
        S: LineSource + ?Sized,
        W: AsyncWrite + Unpin + Send,
    {
        let colored = self.config.color;
        if self.config.banner {
            let mut buf = Vec::with_capacity(512).writer();
            put_line(&mut buf, BANNER, Color::Red, colored)?;
            put_line(&mut buf, WELCOME, Color::Yellow, colored)?;
            out.write_all(buf.get_ref()).await?;
        }

        loop {
            out.write_all(paint(PROMPT, Color::Green, colored).as_bytes())
                .await?;
            out.flush().await?;

            let Some(line) = source.next_line().await? else {
                out.write_all(b"\n").await?;
                out.flush().await?;
                tracing::debug!("end of input");
                return Ok(());
            };

            let mut buf = Vec::with_capacity(256).writer();
            let flow = self.handle_line(&line, &mut buf)?;
            out.write_all(buf.get_ref()).await?;
            out.flush().await?;

            if flow == Flow::Exit {
                return Ok(());
            }
        }
    }
}
