//! Counter demo: keyboard and clock subscriptions, commands, and quit.
//!
//! Run with `cargo run --example counter`. Press `+`/`-` to change the
//! count, `q` to quit.

use ratchet::{
    application, every, horizontal, on_key, text, vertical, App, Cmd, CrosstermBackend,
    CrosstermEvents, KeyCode, KeyEvent, Modifiers, Padding, QuitResult, Rgb, Style, StyledText,
    ViewSize,
};
use std::time::Duration;

#[derive(Clone, Debug, PartialEq)]
enum Msg {
    Key(KeyEvent),
    Tick,
}

#[derive(Clone, Debug, PartialEq)]
struct Model {
    count: i64,
    seconds: u64,
}

fn update(msg: Msg, model: &Model) -> (Model, Cmd<Msg>) {
    match msg {
        Msg::Key(key) => match key.code {
            KeyCode::Char('+') => (
                Model {
                    count: model.count + 1,
                    ..model.clone()
                },
                Cmd::none(),
            ),
            KeyCode::Char('-') => (
                Model {
                    count: model.count - 1,
                    ..model.clone()
                },
                Cmd::none(),
            ),
            KeyCode::Char('q') => (
                model.clone(),
                Cmd::quit_with(format!("final count: {}", model.count)),
            ),
            _ => (model.clone(), Cmd::none()),
        },
        Msg::Tick => (
            Model {
                seconds: model.seconds + 1,
                ..model.clone()
            },
            Cmd::none(),
        ),
    }
}

fn render(model: &Model, _size: ratchet::Size) -> ratchet::Node<Msg> {
    let title = StyledText::styled("counter", Style::DEFAULT.with_attrs(Modifiers::BOLD));
    let help = StyledText::colored("+/- to count, q to quit", Rgb::DARK_GRAY, Rgb::DEFAULT_BG);

    vertical(vec![
        text(title),
        horizontal(vec![
            text("count:"),
            text(format!(" {}", model.count)).width(ViewSize::Fill),
        ])
        .width(ViewSize::Fill),
        text(format!("uptime: {}s", model.seconds)),
        text(help),
    ])
    .width(ViewSize::Fill)
    .height(ViewSize::Fill)
    .padding(Padding::uniform(1))
}

fn main() -> std::io::Result<()> {
    let app = App {
        initialize: Box::new(|| {
            (
                Model {
                    count: 0,
                    seconds: 0,
                },
                Cmd::none(),
            )
        }),
        render: Box::new(render),
        update: Box::new(update),
        subscriptions: vec![
            on_key(Msg::Key),
            every(Duration::from_secs(1), |_| Msg::Tick),
        ],
    };

    let mut backend = CrosstermBackend::new()?;
    let result = application(app, &mut backend, CrosstermEvents::new())?;

    if let QuitResult::Success(Some(message)) = result {
        println!("{message}");
    }
    Ok(())
}
