//! Screen commands and the interactive detail session.

use std::io::Write;
use std::str::FromStr;
use std::sync::Arc;

use showcase_client::{DocumentStoreClient, FileSource, ProjectSource};
use showcase_core::DeveloperProfile;
use showcase_views::{DetailOptions, DetailScreen, ListScreen, RandomScreen};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::cli::DetailArgs;
use crate::config::ShowcaseConfig;
use crate::error::{Error, Result};

/// Help text for the interactive session.
pub const SESSION_HELP: &str = "\
Commands:
  next | prev          move the image carousel
  thumb N              jump to image N
  name TEXT            set the comment name
  comment TEXT         set the comment text
  avatar N             choose avatar N
  avatars-next | avatars-prev
                       scroll the avatar picker
  submit               post the comment
  show                 render the screen again
  help                 show this text
  quit                 leave";

pub(crate) fn write_line(out: &mut dyn Write, text: impl std::fmt::Display) -> Result<()> {
    writeln!(out, "{text}").map_err(Error::Terminal)
}

/// The store client, or a file source when `file` is given.
pub fn build_source(
    config: &ShowcaseConfig,
    file: Option<&str>,
) -> Result<Arc<dyn ProjectSource>> {
    let source: Arc<dyn ProjectSource> = match file {
        Some(path) => Arc::new(FileSource::new(path)),
        None => Arc::new(DocumentStoreClient::new(config.store.clone())?),
    };
    tracing::debug!(source = %source.describe(), "Project source ready");
    Ok(source)
}

/// `showcase list`
pub async fn run_list<S>(source: &S, out: &mut dyn Write) -> Result<ListScreen>
where
    S: ProjectSource + ?Sized,
{
    let screen = ListScreen::new().mount(source).await;
    write_line(out, screen.render())?;
    Ok(screen)
}

/// `showcase random`
pub async fn run_random<S>(source: &S, out: &mut dyn Write) -> Result<RandomScreen>
where
    S: ProjectSource + ?Sized,
{
    let screen = RandomScreen::new().mount(source).await;
    write_line(out, screen.render())?;
    Ok(screen)
}

/// Options selected by `--variant` and `--match`.
pub fn detail_options(args: &DetailArgs) -> DetailOptions {
    let options = DetailOptions::for_variant(args.variant);
    match args.matching {
        Some(matching) => options.with_matching(matching),
        None => options,
    }
}

/// `showcase detail`, without the interactive part.
///
/// `developer` feeds the "About Developer" block of the full layout.
pub async fn run_detail<S>(
    source: &S,
    args: &DetailArgs,
    developer: Option<&DeveloperProfile>,
    out: &mut dyn Write,
) -> Result<DetailScreen>
where
    S: ProjectSource + ?Sized,
{
    let screen = DetailScreen::new(args.id.as_str(), detail_options(args));
    let screen = match developer {
        Some(developer) => screen.with_developer(developer.clone()),
        None => screen,
    };
    let screen = screen.mount(source).await;
    write_line(out, screen.render())?;
    Ok(screen)
}

// ============================================================================
// Interactive session
// ============================================================================

/// One line typed in the interactive session.
///
/// Image and avatar numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    /// Next image
    Next,
    /// Previous image
    Prev,
    /// Jump to an image
    Thumb(usize),
    /// Set the draft name
    Name(String),
    /// Set the draft comment
    Comment(String),
    /// Choose an avatar
    Avatar(usize),
    /// Next avatar window
    AvatarsNext,
    /// Previous avatar window
    AvatarsPrev,
    /// Post the draft
    Submit,
    /// Render again
    Show,
    /// Print help
    Help,
    /// End the session
    Quit,
}

fn parse_position(word: &str, arg: &str) -> Result<usize> {
    match arg.trim().parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n - 1),
        _ => Err(Error::input(format!("`{word}` needs a number starting at 1"))),
    }
}

impl FromStr for SessionCommand {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim_start();
        let (word, rest) = s.split_once(' ').unwrap_or((s, ""));
        let word = word.trim_end();
        let cmd = match word {
            "next" => SessionCommand::Next,
            "prev" => SessionCommand::Prev,
            "thumb" => SessionCommand::Thumb(parse_position(word, rest)?),
            "name" => SessionCommand::Name(rest.to_string()),
            "comment" => SessionCommand::Comment(rest.to_string()),
            "avatar" => SessionCommand::Avatar(parse_position(word, rest)?),
            "avatars-next" => SessionCommand::AvatarsNext,
            "avatars-prev" => SessionCommand::AvatarsPrev,
            "submit" => SessionCommand::Submit,
            "show" => SessionCommand::Show,
            "help" | "?" => SessionCommand::Help,
            "quit" | "exit" => SessionCommand::Quit,
            other => {
                return Err(Error::input(format!(
                    "Unknown command '{other}'; type `help`"
                )));
            }
        };
        Ok(cmd)
    }
}

/// Applies a state-changing command to `screen`.
///
/// `Show`, `Help` and `Quit` return an unchanged copy.
pub fn apply(screen: &DetailScreen, cmd: &SessionCommand) -> showcase_core::Result<DetailScreen> {
    match cmd {
        SessionCommand::Next => Ok(screen.next_image()),
        SessionCommand::Prev => Ok(screen.prev_image()),
        SessionCommand::Thumb(i) => screen.select_image(*i),
        SessionCommand::Name(name) => screen.set_name(name.as_str()),
        SessionCommand::Comment(text) => screen.set_text(text.as_str()),
        SessionCommand::Avatar(i) => screen.select_avatar(*i),
        SessionCommand::AvatarsNext => screen.next_avatar_window(),
        SessionCommand::AvatarsPrev => screen.prev_avatar_window(),
        SessionCommand::Submit => screen.submit_comment(),
        SessionCommand::Show | SessionCommand::Help | SessionCommand::Quit => Ok(screen.clone()),
    }
}

/// Reads commands from `input` until `quit` or end of input.
///
/// A rejected command prints its message and keeps the previous state,
/// so an incomplete comment draft survives a failed submit.
pub async fn run_session<R>(
    mut screen: DetailScreen,
    input: R,
    out: &mut dyn Write,
) -> Result<DetailScreen>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = input.lines();
    while let Some(raw) = lines.next_line().await.map_err(Error::Terminal)? {
        if raw.trim().is_empty() {
            continue;
        }
        let cmd = match raw.parse::<SessionCommand>() {
            Ok(cmd) => cmd,
            Err(e) => {
                write_line(out, format!("! {e}"))?;
                continue;
            }
        };

        match cmd {
            SessionCommand::Quit => break,
            SessionCommand::Help => write_line(out, SESSION_HELP)?,
            SessionCommand::Show => write_line(out, screen.render())?,
            other => match apply(&screen, &other) {
                Ok(next) => {
                    screen = next;
                    write_line(out, screen.render())?;
                }
                Err(e) => {
                    tracing::debug!(command = ?other, error = %e, "Command rejected");
                    let message = e
                        .user_message()
                        .map(str::to_string)
                        .unwrap_or_else(|| e.to_string());
                    write_line(out, format!("! {message}"))?;
                }
            },
        }
    }
    Ok(screen)
}
