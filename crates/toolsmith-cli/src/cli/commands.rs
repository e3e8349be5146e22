use std::io::{Read, Write};

use anyhow::Context;
use toolsmith::codec::{self, JwtParts};
use toolsmith::{
    RandSource, TimeSource, UlidGenerator, UlidParts, Uuid, UuidGenerator, schema::convert_str,
};

use super::config::{Base64Mode, Command, Input, JsonMode};

/// Executes validated commands against the library engines.
///
/// The runner owns the clock and RNG so the same sources back every
/// generator; tests swap in fixed ones.
pub struct Runner<T, R>
where
    T: TimeSource,
    R: RandSource,
{
    time: T,
    rng: R,
}

impl<T, R> Runner<T, R>
where
    T: TimeSource,
    R: RandSource,
{
    pub const fn new(time: T, rng: R) -> Self {
        Self { time, rng }
    }

    /// Runs `command`, writing results to `out`, one per line.
    ///
    /// `stdin` is only read by the text commands when no file or text
    /// argument is given.
    pub fn run(
        &self,
        command: &Command,
        stdin: &mut impl Read,
        out: &mut impl Write,
    ) -> anyhow::Result<()> {
        match command {
            Command::Uuid { request, count } => {
                let generator = UuidGenerator::new(&self.time, &self.rng);
                let ids = generator.generate_batch(request, *count)?;
                tracing::debug!(version = %request.version(), count, "generated UUIDs");
                for id in ids {
                    writeln!(out, "{id}")?;
                }
            }
            Command::Ulid { count } => {
                let generator = UlidGenerator::new(&self.time, &self.rng);
                let ids = generator.generate_batch(*count);
                tracing::debug!(count, "generated ULIDs");
                for id in ids {
                    writeln!(out, "{id}")?;
                }
            }
            Command::InspectUlid { ulid } => {
                let parts = UlidParts::parse(ulid.trim())
                    .with_context(|| format!("failed to decode ULID {ulid:?}"))?;
                write_ulid_report(&parts, out)?;
            }
            Command::InspectUuid { uuid } => {
                let id: Uuid = uuid
                    .trim()
                    .parse()
                    .with_context(|| format!("failed to parse UUID {uuid:?}"))?;
                write_uuid_report(&id, out)?;
            }
            Command::JsonToTs { options, input } => {
                let text = read_input(input, stdin)?;
                let ts = convert_str(&text, options)?;
                writeln!(out, "{ts}")?;
            }
            Command::Base64 { mode, input } => {
                let text = read_input(input, stdin)?;
                let converted = match mode {
                    Base64Mode::Encode => codec::encode_base64(&text),
                    Base64Mode::Decode => codec::decode_base64(&text)
                        .context("failed to decode Base64")?,
                };
                writeln!(out, "{converted}")?;
            }
            Command::Jwt { input } => {
                let token = read_input(input, stdin)?;
                let parts = codec::decode_jwt(&token)?;
                write_jwt_report(&parts, out)?;
            }
            Command::Json { mode, input } => {
                let text = read_input(input, stdin)?;
                let formatted = match mode {
                    JsonMode::Fmt => codec::format_json(&text)?,
                    JsonMode::Minify => codec::minify_json(&text)?,
                };
                writeln!(out, "{formatted}")?;
            }
        }
        out.flush()?;
        Ok(())
    }
}

fn read_input(input: &Input, stdin: &mut impl Read) -> anyhow::Result<String> {
    match input {
        Input::File(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        Input::Text(text) => Ok(text.clone()),
        Input::Stdin => {
            let mut text = String::new();
            stdin
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            Ok(text)
        }
    }
}

fn write_ulid_report(parts: &UlidParts, out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out, "ulid:      {parts}")?;
    writeln!(out, "timestamp: {} ms", parts.timestamp_millis())?;
    writeln!(out, "random:    0x{:020x}", parts.random())
}

fn write_jwt_report(parts: &JwtParts, out: &mut impl Write) -> anyhow::Result<()> {
    writeln!(out, "header:\n{}", parts.header_pretty()?)?;
    writeln!(out, "payload:\n{}", parts.payload_pretty()?)?;
    Ok(())
}

fn write_uuid_report(id: &Uuid, out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out, "uuid:      {id}")?;
    writeln!(out, "version:   {}", id.version())?;
    writeln!(out, "variant:   {}", id.variant())?;
    if let Some(millis) = id.v1_timestamp_millis() {
        writeln!(out, "timestamp: {millis} ms")?;
    }
    Ok(())
}
