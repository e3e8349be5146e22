use std::path::PathBuf;

use anyhow::bail;
use clap::{Parser, Subcommand, ValueEnum};
use toolsmith::{ConvertOptions, Namespace, UuidRequest, UuidVersion};

/// Largest `--count` accepted unless `TOOLSMITH_MAX_COUNT` says otherwise.
pub const DEFAULT_MAX_COUNT: usize = 100;

/// Command-line arguments for the `toolsmith` binary.
///
/// Settings that are not specific to one subcommand can also be supplied
/// through the environment or a `.env` file in the working directory.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "toolsmith",
    version,
    about = "Generate ULIDs and UUIDs, infer TypeScript types from JSON, and decode Base64, JWTs and JSON"
)]
pub struct CliArgs {
    /// Upper bound for `--count` on every generating subcommand.
    ///
    /// Environment variable: `TOOLSMITH_MAX_COUNT`
    #[arg(long, env = "TOOLSMITH_MAX_COUNT", default_value_t = DEFAULT_MAX_COUNT, global = true)]
    pub max_count: usize,

    #[command(subcommand)]
    pub command: CommandArgs,
}

#[derive(Subcommand, Debug, Clone)]
pub enum CommandArgs {
    /// Generate RFC 4122 UUIDs.
    Uuid {
        /// UUID version: v1 (time-based), v4 (random) or v5 (name-based).
        #[arg(value_name = "VERSION", default_value = "v4")]
        kind: UuidVersion,

        /// Number of UUIDs to print.
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,

        /// v5 namespace: dns, url, oid, x500 or any hyphenated UUID.
        #[arg(long)]
        namespace: Option<String>,

        /// v5 name hashed together with the namespace.
        #[arg(long)]
        name: Option<String>,
    },

    /// Generate ULIDs, or decode one with `--inspect`.
    Ulid {
        /// Number of ULIDs to print.
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,

        /// Decode an existing ULID instead of generating new ones.
        #[arg(long, value_name = "ULID", conflicts_with = "count")]
        inspect: Option<String>,
    },

    /// Print the version, variant and (for v1) timestamp of a UUID.
    InspectUuid {
        #[arg(value_name = "UUID")]
        uuid: String,
    },

    /// Infer TypeScript declarations from a JSON document.
    JsonToTs {
        /// Emit one interface per object instead of a single inline type.
        #[arg(short = 'm', long)]
        multiple_interfaces: bool,

        /// Name of the root type.
        #[arg(short, long, default_value = "Root")]
        root_name: String,

        /// JSON file to read. Reads stdin when omitted.
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,
    },

    /// Encode UTF-8 text as Base64, or decode Base64 back to text.
    Base64 {
        #[arg(value_enum)]
        mode: Base64Mode,

        /// Text to convert. Reads stdin when omitted.
        #[arg(value_name = "TEXT")]
        text: Option<String>,
    },

    /// Print the decoded header and payload of a JWT.
    Jwt {
        /// Compact token. Reads stdin when omitted.
        #[arg(value_name = "TOKEN")]
        token: Option<String>,
    },

    /// Pretty-print or minify a JSON document.
    Json {
        #[arg(value_enum)]
        mode: JsonMode,

        /// JSON file to read. Reads stdin when omitted.
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Base64Mode {
    Encode,
    Decode,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonMode {
    /// Two-space indentation.
    Fmt,
    /// No insignificant whitespace.
    Minify,
}

/// Where a text-consuming command reads its input from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Stdin,
    File(PathBuf),
    Text(String),
}

/// A fully validated command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Uuid {
        request: UuidRequest,
        count: usize,
    },
    Ulid {
        count: usize,
    },
    InspectUlid {
        ulid: String,
    },
    InspectUuid {
        uuid: String,
    },
    JsonToTs {
        options: ConvertOptions,
        input: Input,
    },
    Base64 {
        mode: Base64Mode,
        input: Input,
    },
    Jwt {
        input: Input,
    },
    Json {
        mode: JsonMode,
        input: Input,
    },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub max_count: usize,
    pub command: Command,
}

impl TryFrom<CliArgs> for Config {
    type Error = anyhow::Error;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        let max_count = args.max_count;
        if max_count == 0 {
            bail!("TOOLSMITH_MAX_COUNT must be greater than 0");
        }
        let check_count = |count: usize| -> anyhow::Result<usize> {
            if count == 0 || count > max_count {
                bail!("--count must be between 1 and {max_count} (got {count})");
            }
            Ok(count)
        };

        let command = match args.command {
            CommandArgs::Uuid {
                kind,
                count,
                namespace,
                name,
            } => {
                let count = check_count(count)?;
                let request = match (kind, namespace, name) {
                    (UuidVersion::V5, namespace, Some(name)) => UuidRequest::V5 {
                        namespace: resolve_namespace(namespace.as_deref()),
                        name,
                    },
                    (UuidVersion::V5, _, None) => bail!("--name is required for v5"),
                    (_, Some(_), _) | (_, _, Some(_)) => {
                        bail!("--namespace and --name only apply to v5")
                    }
                    (UuidVersion::V1, None, None) => UuidRequest::V1,
                    (UuidVersion::V4, None, None) => UuidRequest::V4,
                };
                Command::Uuid { request, count }
            }
            CommandArgs::Ulid {
                inspect: Some(ulid),
                ..
            } => Command::InspectUlid { ulid },
            CommandArgs::Ulid {
                count,
                inspect: None,
            } => Command::Ulid {
                count: check_count(count)?,
            },
            CommandArgs::InspectUuid { uuid } => Command::InspectUuid { uuid },
            CommandArgs::JsonToTs {
                multiple_interfaces,
                root_name,
                file,
            } => Command::JsonToTs {
                options: ConvertOptions::default()
                    .multiple_interfaces(multiple_interfaces)
                    .root_name(root_name),
                input: file.map_or(Input::Stdin, Input::File),
            },
            CommandArgs::Base64 { mode, text } => Command::Base64 {
                mode,
                input: text.map_or(Input::Stdin, Input::Text),
            },
            CommandArgs::Jwt { token } => Command::Jwt {
                input: token.map_or(Input::Stdin, Input::Text),
            },
            CommandArgs::Json { mode, file } => Command::Json {
                mode,
                input: file.map_or(Input::Stdin, Input::File),
            },
        };

        Ok(Self { max_count, command })
    }
}

/// Maps a namespace keyword to its UUID text. Anything else is passed through
/// untouched and validated at generation time.
fn resolve_namespace(namespace: Option<&str>) -> String {
    match namespace {
        None => Namespace::default().uuid().to_string(),
        Some(raw) => raw
            .parse::<Namespace>()
            .map_or_else(|_| raw.to_owned(), |ns| ns.uuid().to_string()),
    }
}
