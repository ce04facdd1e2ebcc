//! Picker demo: a focused, scrolling list driven by cursor commands.
//!
//! Run with `cargo run --example picker`. Move with `j`/`k`, pick with
//! Enter, quit with `q`. The cursor stays inside the visible window; at
//! the edges further motion scrolls the list.

use ratchet::{
    application, on_cursor, on_key, text, vertical, App, Cmd, CrosstermBackend, CrosstermEvents,
    Cursor, KeyCode, KeyEvent, QuitResult, ViewSize,
};

#[derive(Clone, Debug, PartialEq)]
enum Msg {
    Key(KeyEvent),
    Moved(Cursor),
}

#[derive(Clone, Debug, PartialEq)]
struct Model {
    items: Vec<String>,
    cursor: Cursor,
}

impl Model {
    fn selected(&self) -> usize {
        usize::from(self.cursor.y) + usize::from(self.cursor.scroll)
    }
}

fn update(msg: Msg, model: &Model) -> (Model, Cmd<Msg>) {
    match msg {
        Msg::Key(key) => match key.code {
            KeyCode::Char('j') | KeyCode::Down => (model.clone(), Cmd::move_cursor(0, 1)),
            KeyCode::Char('k') | KeyCode::Up => (model.clone(), Cmd::move_cursor(0, -1)),
            KeyCode::Enter => (
                model.clone(),
                Cmd::quit_with(model.items[model.selected()].clone()),
            ),
            KeyCode::Char('q') => (model.clone(), Cmd::quit()),
            _ => (model.clone(), Cmd::none()),
        },
        Msg::Moved(cursor) => (
            Model {
                cursor,
                ..model.clone()
            },
            Cmd::none(),
        ),
    }
}

fn render(model: &Model, _size: ratchet::Size) -> ratchet::Node<Msg> {
    vertical(
        model
            .items
            .iter()
            .map(|item| text(item.clone()))
            .collect(),
    )
    .width(ViewSize::Fill)
    .height(ViewSize::Fill)
    .focused(model.cursor)
}

fn main() -> std::io::Result<()> {
    let app = App {
        initialize: Box::new(|| {
            let items = (1..=100).map(|n| format!("item {n:>3}")).collect();
            (
                Model {
                    items,
                    cursor: Cursor::initial(),
                },
                Cmd::none(),
            )
        }),
        render: Box::new(render),
        update: Box::new(update),
        subscriptions: vec![on_key(Msg::Key), on_cursor(Msg::Moved)],
    };

    let mut backend = CrosstermBackend::new()?;
    let result = application(app, &mut backend, CrosstermEvents::new())?;

    if let QuitResult::Success(Some(choice)) = result {
        println!("picked: {choice}");
    }
    Ok(())
}
