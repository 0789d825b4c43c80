//! Interactive terminal reader

use super::load_story;
use anyhow::Result;
use lostnote_core::content::{ABOUT_OVERLAY, ABOUT_TITLE};
use lostnote_core::encoder::TextEncoder;
use lostnote_core::reader::{
    EventHost, Key, ListenerId, ListenerTarget, MountedReader, ReaderController,
};
use tokio::io::{AsyncBufReadExt, BufReader};

/// Terminal stand-in for a browser window
///
/// Listeners are bookkeeping only: input arrives line by line on stdin.
#[derive(Debug, Default)]
struct TerminalHost {
    next_id: u64,
    live: Vec<ListenerId>,
    scroll_locked: bool,
}

impl EventHost for TerminalHost {
    fn register(&mut self, target: ListenerTarget) -> ListenerId {
        self.next_id += 1;
        let id = ListenerId(self.next_id);
        self.live.push(id);
        tracing::debug!(?id, ?target, "Listener registered");
        id
    }

    fn unregister(&mut self, id: ListenerId) {
        self.live.retain(|live| *live != id);
        tracing::debug!(?id, "Listener released");
    }

    fn set_scroll_locked(&mut self, locked: bool) {
        self.scroll_locked = locked;
    }
}

/// One line of reader input
#[derive(Debug, Clone, Copy, PartialEq)]
enum Input {
    Key(Key),
    Click { x: f64, width: f64 },
    Goto(usize),
    About,
    Help,
    Quit,
}

fn parse_input(line: &str) -> Option<Input> {
    let mut words = line.split_whitespace();
    let first = words.next()?;
    let input = match first.to_lowercase().as_str() {
        "n" | "next" | "l" => Input::Key(Key::ArrowRight),
        "p" | "prev" | "previous" | "h" => Input::Key(Key::ArrowLeft),
        "esc" | "escape" | "close" => Input::Key(Key::Escape),
        "a" | "about" => Input::About,
        "?" | "help" => Input::Help,
        "q" | "quit" | "exit" => Input::Quit,
        "g" | "go" | "goto" => Input::Goto(words.next()?.parse().ok()?),
        "c" | "click" => Input::Click {
            x: words.next()?.parse().ok()?,
            width: words.next()?.parse().ok()?,
        },
        _ => Input::Key(first.parse().ok()?),
    };
    Some(input)
}

const HELP: &str = "Commands: n(ext), p(rev), g <page>, click <x> <width>, a(bout), esc, q(uit)";

fn show(reader: &ReaderController<'_>, host: &TerminalHost) {
    let chrome = reader.chrome();
    if host.scroll_locked {
        println!("\n== {} ==", ABOUT_TITLE);
        for paragraph in ABOUT_OVERLAY {
            println!("  {}", paragraph);
        }
        println!("(esc to close)");
        return;
    }

    println!();
    print!("{}", TextEncoder::new().to_text(&reader.render_current()));
    let previous = if chrome.show_previous { "<" } else { " " };
    let next = if chrome.show_next { ">" } else { " " };
    println!("{}  {}  {}", previous, chrome.indicator, next);
}

/// Read the story interactively from stdin
pub async fn read(content: Option<&str>, show_about: bool) -> Result<()> {
    let story = load_story(content)?;
    let controller = ReaderController::new(&story)?.with_about_button(show_about);
    let mut host = TerminalHost::default();
    let mut reader = MountedReader::mount(controller, &mut host);

    println!("{}", HELP);
    show(&reader, reader.host());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let Some(input) = parse_input(&line) else {
            if !line.trim().is_empty() {
                println!("Unknown command: {}", line.trim());
            }
            continue;
        };

        match input {
            Input::Quit => break,
            Input::Help => {
                println!("{}", HELP);
                continue;
            }
            Input::Key(key) => {
                reader.key(key);
            }
            Input::Click { x, width } => {
                let zone = reader.click(x, width);
                tracing::debug!(?zone, "Click");
            }
            Input::Goto(page) => reader.go_to_index(page.saturating_sub(1)),
            Input::About => {
                if show_about {
                    reader.open_about();
                } else {
                    println!("About is not enabled");
                    continue;
                }
            }
        }
        show(&reader, reader.host());
    }

    reader.unmount();
    Ok(())
}
